//! Clap adapter for ccs.
//!
//! Compiled only with the `clap` Cargo feature (on by default). The bridge to
//! the core is [`CcsArgs::into_action()`], which turns parsed arguments into a
//! framework-agnostic [`SwitchAction`](crate::SwitchAction); everything after
//! that goes through [`SwitcherBuilder::handle()`](crate::SwitcherBuilder::handle).

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::types::SwitchAction;

const AFTER_HELP: &str = "\
Examples:
  ccs glm      Switch to glm provider
  ccs          Reset to default

Provider configs are located at: ~/.claude/<name>.json";

/// Claude Code Switcher (ccs)
///
/// Switch the env block of ~/.claude/settings.json between providers.
/// Every other field in the settings file is kept as is.
#[derive(Debug, Parser)]
#[command(name = "ccs", version, after_help = AFTER_HELP)]
pub struct CcsArgs {
    /// Provider to switch to (merges env from <name>.json). Omit to reset to
    /// default (removes the env key).
    #[arg(value_name = "NAME")]
    pub provider: Option<String>,

    /// List available providers instead of switching.
    #[arg(short, long, conflicts_with = "provider")]
    pub list: bool,

    /// Directory holding settings.json and the provider files.
    #[arg(long, env = "CCS_CONFIG_DIR", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CcsArgs {
    /// Convert clap-parsed args into a framework-agnostic `SwitchAction`.
    ///
    /// A provider name maps to `Switch`, `--list` to `List`, and no arguments
    /// at all to `Reset`.
    pub fn into_action(self) -> SwitchAction {
        match (self.provider, self.list) {
            (_, true) => SwitchAction::List,
            (Some(provider), false) => SwitchAction::Switch { provider },
            (None, false) => SwitchAction::Reset,
        }
    }
}
