//! Distribution assembly.
//!
//! Turns an executable tree produced by an earlier build into the hand-off
//! directory and its zip archive. The build and this stage only share the
//! filesystem, so the executable is located again here.
//!
//! # Module Organization
//!
//! - `templates` - built-in document texts
//! - [`docs`] - dependency manifest and user guides
//! - [`archive`] - zip creation

pub mod archive;
pub mod docs;
mod templates;

use crate::bundler::{
    Error, Result, Settings,
    builder::{OutputLocator, checksum::calculate_sha256, locate::DISTRIBUTION_CASCADE},
    data::collect_data_files,
    error::ErrorExt,
    utils::fs,
};
use std::path::{Path, PathBuf};

/// Where the distributed data directory came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// Copied from the data directory next to the built executable.
    BuildTree,
    /// Collected again from the project sources.
    ProjectSources,
}

/// The finished distribution.
#[derive(Debug, Clone)]
pub struct DistributionArtifact {
    /// Zip archive path.
    pub archive: PathBuf,
    /// Archive size in bytes.
    pub size: u64,
    /// Hex SHA-256 of the archive.
    pub checksum: String,
    /// Archive entry names, in archive order.
    pub entries: Vec<String>,
    /// Origin of the data directory.
    pub data_source: DataSource,
}

impl DistributionArtifact {
    /// Archive size in MiB.
    pub fn size_mib(&self) -> f64 {
        self.size as f64 / (1024.0 * 1024.0)
    }
}

/// Assemble the distribution directory and archive.
///
/// # Process
///
/// 1. Locate the executable (flat output root first, then nested)
/// 2. Copy it and write the installation guide
/// 3. Replace the data directory from the build tree, or collect it again
///    from the project when the build tree has none
/// 4. Write the dependency manifest and quick-start guide
/// 5. Zip everything and checksum the archive
pub async fn assemble(settings: &Settings) -> Result<DistributionArtifact> {
    let dist_root = settings.distribution_dir();
    fs::create_dir_all(&dist_root, false).await?;

    let locator = OutputLocator::new(settings);
    let located = locator.locate(DISTRIBUTION_CASCADE).await?;
    let (exe_dir, executable) = match located.and_then(|l| l.executable.map(|e| (l.dir, e))) {
        Some(found) => found,
        None => {
            return Err(Error::ExecutableNotFound {
                searched: DISTRIBUTION_CASCADE
                    .iter()
                    .filter_map(|&s| locator.candidate_path(s))
                    .collect(),
            });
        }
    };
    log::info!("Found executable: {}", executable.display());

    let executable_name = settings.executable_name();
    let dist_executable = dist_root.join(&executable_name);
    fs::copy_file(&executable, &dist_executable).await?;
    log::info!("Copied executable to {}", dist_executable.display());

    docs::write_installation_guide(settings, &dist_root).await?;

    let data_source = copy_data(settings, &exe_dir, &dist_root).await?;

    docs::write_requirements_and_quick_start(settings, &dist_root).await?;

    let archive = settings.archive_path();
    let entries =
        archive::create_archive(&dist_root, &archive, &executable_name, settings.data_dir_name())
            .await?;

    let size = tokio::fs::metadata(&archive)
        .await
        .fs_context("reading archive metadata", &archive)?
        .len();
    let checksum = calculate_sha256(&archive).await?;
    log::info!("Created distribution archive: {}", archive.display());

    Ok(DistributionArtifact {
        archive,
        size,
        checksum,
        entries,
        data_source,
    })
}

async fn copy_data(
    settings: &Settings,
    exe_dir: &Path,
    dist_root: &Path,
) -> Result<DataSource> {
    let built = exe_dir.join(settings.data_dir_name());
    if built.is_dir() {
        let dest = dist_root.join(settings.data_dir_name());
        fs::remove_dir_all(&dest).await?;
        fs::copy_dir(&built, &dest).await?;
        log::info!("Copied {} to {}", built.display(), dest.display());
        return Ok(DataSource::BuildTree);
    }

    log::info!(
        "Data directory not found next to the executable ({}), collecting from project",
        built.display()
    );
    collect_data_files(settings, dist_root, true).await?;
    Ok(DataSource::ProjectSources)
}
