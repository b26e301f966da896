//! `pyship distribute`.

use crate::bundler::{DataSource, DistributionArtifact, Settings, distribution};
use crate::cli::RuntimeConfig;
use crate::error::Result;

/// Assemble the distribution. The archive size is always the last line.
pub async fn distribute(settings: &Settings, config: &RuntimeConfig) -> Result<DistributionArtifact> {
    config.section("Creating distribution package")?;

    let artifact = distribution::assemble(settings).await?;

    if artifact.data_source == DataSource::ProjectSources {
        config.warn(&format!(
            "{} was missing from the build output, collected it from the project",
            settings.data_dir_name()
        ))?;
    }
    for entry in &artifact.entries {
        config.verbose_println(entry)?;
    }

    config.success(&format!("Distribution: {}", settings.distribution_dir().display()))?;
    config.indent("Send the archive to users; they extract it and follow INSTALLATION_INSTRUCTIONS.txt")?;
    config.result(&format!("Archive: {}", artifact.archive.display()))?;
    config.result(&format!("SHA-256: {}", artifact.checksum))?;
    config.result(&format!("Archive size: {:.2} MiB", artifact.size_mib()))?;

    Ok(artifact)
}
