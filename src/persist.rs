//! Settings persistence: read `settings.json` whole, write it back whole.
//!
//! Output is pretty-printed with two-space indentation and a trailing newline.
//! The write is a plain overwrite; a failure part-way through can leave a
//! truncated file behind.

use std::path::Path;

use tracing::{debug, info};

use crate::error::CcsError;
use crate::settings::SettingsDocument;

/// Pure function: parse settings file content.
///
/// `path` is only used for error reporting.
pub fn parse_settings(path: &Path, content: &str) -> Result<SettingsDocument, CcsError> {
    serde_json::from_str(content).map_err(|e| CcsError::Malformed {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Pure function: render a settings document as the text written to disk.
///
/// `path` is only used for error reporting.
pub fn render_settings(path: &Path, doc: &SettingsDocument) -> Result<String, CcsError> {
    let mut out = serde_json::to_string_pretty(doc).map_err(|e| CcsError::SerializeError {
        path: path.to_path_buf(),
        source: e,
    })?;
    out.push('\n');
    Ok(out)
}

/// I/O wrapper: read and parse the settings file at `path`.
pub fn load_settings(path: &Path) -> Result<SettingsDocument, CcsError> {
    debug!(path = %path.display(), "loading settings");
    let content = std::fs::read_to_string(path).map_err(|e| CcsError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let doc = parse_settings(path, &content)?;
    debug!(unknown = doc.extra.len(), "parsed settings");
    Ok(doc)
}

/// I/O wrapper: render `doc` and overwrite the file at `path`.
///
/// The parent directory must already exist. Nothing is written if rendering
/// fails.
pub fn save_settings(path: &Path, doc: &SettingsDocument) -> Result<(), CcsError> {
    let content = render_settings(path, doc)?;
    std::fs::write(path, &content).map_err(|e| CcsError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!(path = %path.display(), bytes = content.len(), "saved settings");
    Ok(())
}
