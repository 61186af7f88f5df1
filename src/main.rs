//! `ccs`: switch the provider env block of `~/.claude/settings.json`.
//!
//! ```sh
//! ccs glm        # merge env from ~/.claude/glm.json
//! ccs            # remove env, back to the default endpoint
//! ccs --list     # show available providers
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use ccs::{CcsArgs, CcsError, Switcher};

fn main() -> ExitCode {
    let args = CcsArgs::parse();
    init_logging(args.verbose);

    let config_dir = args.config_dir.clone();
    let action = args.into_action();
    let result = Switcher::builder()
        .config_path(config_dir)
        .handle_and_print(&action);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[cfg(feature = "rich-errors")]
fn report(err: CcsError) {
    eprintln!("{:?}", miette::Report::new(err));
}

#[cfg(not(feature = "rich-errors"))]
fn report(err: CcsError) {
    eprintln!("Error: {err}");
}
