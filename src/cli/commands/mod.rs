//! Command execution for the pipeline stages.
//!
//! `release` is `build` followed by `distribute`; the stages only share the
//! filesystem, so each can also run on its own.

mod build;
mod distribute;
mod spec;

pub use build::build;
pub use distribute::distribute;
pub use spec::write_spec;

use crate::bundler::Settings;
use crate::cli::{Command, RuntimeConfig};
use crate::error::Result;

/// Run one command to completion.
pub async fn execute(command: &Command, settings: &Settings, config: &RuntimeConfig) -> Result<()> {
    match command {
        Command::Build { .. } => build(settings, config).await.map(|_| ()),
        Command::Distribute => distribute(settings, config).await.map(|_| ()),
        Command::Release { .. } => {
            build(settings, config).await?;
            distribute(settings, config).await.map(|_| ())
        }
        Command::Spec => write_spec(settings, config).await.map(|_| ()),
    }
}
