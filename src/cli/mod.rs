//! Command line interface for pyship.
//!
//! Parses arguments, loads the project manifest into [`Settings`] and
//! dispatches to one of the pipeline commands.

mod args;
pub mod commands;
mod output;

pub use args::{Args, Command, RuntimeConfig};
pub use output::OutputManager;

use crate::bundler::Settings;
use crate::error::{CliError, Result};
use crate::metadata::discover_manifest;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    init_logging(args.log_level());

    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let config = RuntimeConfig::from(&args);
    let settings = load_settings(&args)?;
    commands::execute(&args.command, &settings, &config).await?;
    Ok(0)
}

/// `RUST_LOG` wins over the level implied by `--verbose`/`--quiet`.
fn init_logging(default_level: &str) {
    let env = env_logger::Env::default().default_filter_or(default_level);
    // A logger may already be installed when embedded
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

/// Build settings from the manifest and the command line.
pub fn load_settings(args: &Args) -> Result<Settings> {
    let explicit = args.config.as_deref().map(|path| args.resolve(path));
    let manifest = discover_manifest(&args.project_dir, explicit.as_deref())?;

    Ok(manifest
        .into_builder()
        .project_root(&args.project_dir)
        .keep_intermediates(args.command.keep_intermediates())
        .build()?)
}
