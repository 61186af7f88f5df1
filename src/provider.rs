//! Provider documents: `<config-dir>/<name>.json`.
//!
//! Only the `env` object matters; any other key in the file is ignored, and the
//! file is never written.

use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::CcsError;
use crate::paths;

#[derive(Debug, Clone, PartialEq)]
pub struct ProviderDocument {
    pub name: String,
    pub env: Map<String, Value>,
}

#[derive(Deserialize)]
struct RawProvider {
    env: Option<Map<String, Value>>,
}

/// Pure function: parse provider file content.
///
/// `path` is only used for error reporting. A missing or `null` `env` is a
/// [`CcsError::MissingEnv`]; content that isn't a JSON object, or an `env`
/// that isn't an object, is [`CcsError::Malformed`].
pub fn parse_provider(
    name: &str,
    path: &Path,
    content: &str,
) -> Result<ProviderDocument, CcsError> {
    let raw: RawProvider = serde_json::from_str(content).map_err(|e| CcsError::Malformed {
        path: path.to_path_buf(),
        source: e,
    })?;

    let env = raw.env.ok_or_else(|| CcsError::MissingEnv {
        path: path.to_path_buf(),
    })?;

    Ok(ProviderDocument {
        name: name.into(),
        env,
    })
}

/// I/O wrapper: validate `name`, read `<config_dir>/<name>.json`, parse it.
pub fn load_provider(config_dir: &Path, name: &str) -> Result<ProviderDocument, CcsError> {
    let path = paths::provider_path(config_dir, name)?;
    debug!(provider = name, path = %path.display(), "loading provider");

    let content = std::fs::read_to_string(&path).map_err(|e| CcsError::IoError {
        path: path.clone(),
        source: e,
    })?;

    parse_provider(name, &path, &content)
}
