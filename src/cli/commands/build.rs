//! `pyship build`.

use crate::bundler::{BuildOutput, Bundler, LocateStrategy, Settings};
use crate::cli::RuntimeConfig;
use crate::error::Result;

/// Build the executable and report where it landed.
pub async fn build(settings: &Settings, config: &RuntimeConfig) -> Result<BuildOutput> {
    config.section(&format!("Building {}", settings.product_name()))?;
    config.verbose_println(&format!("Entry point: {}", settings.entry_point().display()))?;
    config.verbose_println(&format!(
        "Hidden imports: {}",
        settings.hidden_imports().join(", ")
    ))?;
    config.progress("Running PyInstaller (this can take several minutes)")?;

    let output = Bundler::new(settings.clone()).build().await?;

    if output.strategy == LocateStrategy::PrefixScan {
        config.warn(&format!(
            "Expected output missing, using {}",
            output.dir.display()
        ))?;
    }
    for warning in &output.warnings {
        config.warn(warning)?;
    }

    config.success(&format!(
        "Copied {} data file(s) to {}",
        output.data.copied.len(),
        output.data.dir.display()
    ))?;
    match &output.executable {
        Some(executable) => config.success(&format!("Executable: {}", executable.display()))?,
        None => config.warn("Executable not found in the build output")?,
    }
    config.result(&format!("Build output: {}", output.dir.display()))?;

    Ok(output)
}
