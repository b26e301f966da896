//! `pyship spec`.

use crate::bundler::{Bundler, Settings};
use crate::cli::RuntimeConfig;
use crate::error::Result;
use std::path::PathBuf;

/// Write the PyInstaller spec without building.
pub async fn write_spec(settings: &Settings, config: &RuntimeConfig) -> Result<PathBuf> {
    let path = Bundler::new(settings.clone()).write_spec().await?;
    config.result(&format!("Spec file: {}", path.display()))?;
    Ok(path)
}
