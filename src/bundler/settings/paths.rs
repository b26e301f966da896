//! Conventional directories.

use std::path::PathBuf;

/// Directories the stages read and write, relative to the project root.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathSettings {
    /// PyInstaller output root (`--distpath`).
    pub dist_dir: PathBuf,

    /// PyInstaller scratch directory (`--workpath`), removed after the build.
    pub build_dir: PathBuf,

    /// Where the distribution is assembled.
    pub distribution_dir: PathBuf,

    /// File name of the zip archive inside `distribution_dir`.
    pub archive_name: String,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            dist_dir: PathBuf::from("dist"),
            build_dir: PathBuf::from("build"),
            distribution_dir: PathBuf::from("distribution"),
            archive_name: "gempy_ai_distribution.zip".into(),
        }
    }
}
