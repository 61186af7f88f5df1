use std::path::PathBuf;

/// Where the directory holding `settings.json` and the provider files lives.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigDir {
    /// A subdirectory under the user's home directory, e.g. `Home(".claude")`.
    Home(&'static str),
    /// An explicit path.
    Path(PathBuf),
}

impl Default for ConfigDir {
    fn default() -> Self {
        ConfigDir::Home(".claude")
    }
}

/// A switcher operation, independent of any CLI framework.
/// The CLI layer converts parsed clap args into this.
#[derive(Debug, Clone, PartialEq)]
pub enum SwitchAction {
    /// Merge `<provider>.json`'s env block into the settings env.
    Switch { provider: String },
    /// Drop the settings env block.
    Reset,
    /// List the available provider names.
    List,
}
