use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[cfg_attr(feature = "rich-errors", derive(miette::Diagnostic))]
pub enum CcsError {
    #[error("Failed to read {path}: {source}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(ccs::io)))]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(ccs::io)))]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(code(ccs::malformed), help("the file must contain a single JSON object"))
    )]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to serialize settings for {path}: {source}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(ccs::serialize)))]
    SerializeError {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Provider config {path} is missing 'env' key")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(
            code(ccs::missing_env),
            help("add an \"env\" object with the variables this provider needs")
        )
    )]
    MissingEnv { path: PathBuf },

    #[error("Could not determine the home directory")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(code(ccs::no_home), help("pass --config-dir or set CCS_CONFIG_DIR"))
    )]
    HomeDirUnavailable,

    #[error("Invalid provider name '{name}': {reason}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(ccs::invalid_name)))]
    InvalidProviderName { name: String, reason: String },
}

impl CcsError {
    /// True when the error came from a file that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CcsError::IoError { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}
