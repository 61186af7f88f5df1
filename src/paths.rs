//! Locating the config directory and the files inside it.
//!
//! Everything lives in one directory (see [`ConfigDir`]):
//!
//! - `settings.json` — the shared settings document, read and rewritten.
//! - `<name>.json` — one file per provider, only ever read.
//!
//! Provider names are validated before they are joined onto the directory, so
//! a name can never point outside of it.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::CcsError;
use crate::types::ConfigDir;

/// File name of the shared settings document.
pub const SETTINGS_FILE: &str = "settings.json";

/// Extension appended to a provider name to get its file name.
pub const PROVIDER_EXT: &str = "json";

/// Resolve a [`ConfigDir`] to a concrete directory.
///
/// Fails with [`CcsError::HomeDirUnavailable`] when `Home` is used and the
/// platform has no home directory for the current user.
pub fn resolve_config_dir(dir: &ConfigDir) -> Result<PathBuf, CcsError> {
    resolve_config_dir_with(dir, || {
        directories::UserDirs::new().map(|user| user.home_dir().to_path_buf())
    })
}

/// Like [`resolve_config_dir`] but with an explicit home directory lookup.
///
/// `home` is only called for [`ConfigDir::Home`].
pub fn resolve_config_dir_with(
    dir: &ConfigDir,
    home: impl FnOnce() -> Option<PathBuf>,
) -> Result<PathBuf, CcsError> {
    let resolved = match dir {
        ConfigDir::Home(subdir) => home().ok_or(CcsError::HomeDirUnavailable)?.join(subdir),
        ConfigDir::Path(p) => p.clone(),
    };
    debug!(dir = %resolved.display(), "resolved config directory");
    Ok(resolved)
}

/// Path of the settings document inside `config_dir`.
pub fn settings_path(config_dir: &Path) -> PathBuf {
    config_dir.join(SETTINGS_FILE)
}

/// Path of the provider document for `name` inside `config_dir`.
///
/// The name is validated first; see [`validate_provider_name`].
pub fn provider_path(config_dir: &Path, name: &str) -> Result<PathBuf, CcsError> {
    validate_provider_name(name)?;
    Ok(config_dir.join(format!("{name}.{PROVIDER_EXT}")))
}

/// Reject names that are empty, escape the config directory, or alias the
/// settings file.
pub fn validate_provider_name(name: &str) -> Result<(), CcsError> {
    let reason = if name.is_empty() {
        Some("must not be empty")
    } else if name.contains('/') || name.contains('\\') {
        Some("must not contain path separators")
    } else if name == "." || name == ".." {
        Some("must not be a relative directory")
    } else if format!("{name}.{PROVIDER_EXT}") == SETTINGS_FILE {
        Some("names the shared settings file")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(CcsError::InvalidProviderName {
            name: name.into(),
            reason: reason.into(),
        }),
        None => Ok(()),
    }
}

/// List provider names found in `config_dir`, sorted.
///
/// Every `*.json` file counts except the settings file, its `settings.*.json`
/// siblings and dot-files such as `.credentials.json`. A missing directory
/// yields an empty list; other I/O errors are propagated.
pub fn list_providers(config_dir: &Path) -> Result<Vec<String>, CcsError> {
    let entries = match std::fs::read_dir(config_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(vec![]),
        Err(e) => {
            return Err(CcsError::IoError {
                path: config_dir.to_path_buf(),
                source: e,
            });
        }
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| CcsError::IoError {
            path: config_dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(PROVIDER_EXT) {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if is_reserved_stem(stem) {
            continue;
        }
        names.push(stem.to_string());
    }
    names.sort();
    Ok(names)
}

/// Stems of `*.json` files in the config directory that are not providers.
fn is_reserved_stem(stem: &str) -> bool {
    let settings_stem = SETTINGS_FILE.trim_end_matches(".json");
    stem.starts_with('.')
        || stem == settings_stem
        || stem
            .strip_prefix(settings_stem)
            .is_some_and(|rest| rest.starts_with('.'))
}
