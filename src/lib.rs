//! Switch the provider env block of a Claude `settings.json` without losing
//! anything else in the file.
//!
//! A *provider* is a JSON file next to the settings, `<config-dir>/<name>.json`,
//! whose `env` object holds the variables for one API endpoint (base URL,
//! token, model names, timeouts). Switching merges that object into the
//! settings' own `env`; resetting removes the settings' `env` altogether.
//!
//! ```ignore
//! let result = Switcher::builder().switch("glm")?;
//! println!("{result}"); // Switched to provider 'glm'
//! ```
//!
//! # The settings file is not ours
//!
//! `settings.json` is owned by another application that adds keys over time.
//! [`SettingsDocument`] models the few keys this crate reasons about
//! (`permissions`, `model`, `statusLine`, `enabledPlugins`, `env`) and keeps
//! every other top-level key in an unknown-field bag that is written back
//! verbatim. A load followed by a save with no mutation reproduces the same
//! keys and values, whatever the file contains. Keys are only promoted to
//! typed fields when the switcher has to read or write them.
//!
//! # Two outcomes per run
//!
//! | Invocation | Effect on `env` |
//! |------------|-----------------|
//! | `ccs <name>` | Provider keys set, existing keys the provider doesn't name kept |
//! | `ccs` | Key removed from the file (not emptied) |
//!
//! Nothing is written unless both files were read and parsed successfully, so
//! a missing provider, a malformed provider, or one without an `env` object
//! leaves the settings file as it was.
//!
//! # Config directory
//!
//! Defaults to `~/.claude` ([`ConfigDir::Home`]). Override it with
//! [`SwitcherBuilder::config_dir`], or from the command line with
//! `--config-dir` / `CCS_CONFIG_DIR`.
//!
//! # Error handling
//!
//! All fallible operations return [`CcsError`], carrying the path involved and
//! the underlying cause. With the `rich-errors` feature the enum also
//! implements `miette::Diagnostic`.

pub mod error;
pub mod types;

mod builder;
#[cfg(feature = "clap")]
mod cli;
pub(crate) mod merge;
mod ops;
mod paths;
mod persist;
mod provider;
mod settings;

#[cfg(test)]
mod fixtures;

pub use builder::{Switcher, SwitcherBuilder};
#[cfg(feature = "clap")]
pub use cli::CcsArgs;
pub use error::CcsError;
pub use ops::SwitchResult;
pub use paths::{
    list_providers, provider_path, resolve_config_dir, resolve_config_dir_with, settings_path,
};
pub use persist::{load_settings, parse_settings, render_settings, save_settings};
pub use provider::{ProviderDocument, load_provider, parse_provider};
pub use settings::{KNOWN_FIELDS, SettingsDocument};
pub use types::{ConfigDir, SwitchAction};
