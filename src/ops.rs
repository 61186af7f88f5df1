//! Result type for switcher operations, shown to the user on stdout.

use std::fmt;
use std::path::PathBuf;

/// Result of a switcher operation. Returned to the caller for display.
#[derive(Debug, Clone, PartialEq)]
pub enum SwitchResult {
    /// The provider's env block was merged into the settings.
    Switched {
        provider: String,
        path: PathBuf,
        keys_written: usize,
    },
    /// The env block was removed from the settings.
    Reset { path: PathBuf },
    /// Provider names found in the config directory.
    Providers { dir: PathBuf, names: Vec<String> },
}

impl fmt::Display for SwitchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwitchResult::Switched { provider, .. } => {
                write!(f, "Switched to provider '{provider}'")
            }
            SwitchResult::Reset { .. } => write!(f, "Reset to default (removed env key)"),
            SwitchResult::Providers { dir, names } => {
                if names.is_empty() {
                    return write!(f, "No providers found in {}", dir.display());
                }
                for (i, name) in names.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{name}")?;
                }
                Ok(())
            }
        }
    }
}
