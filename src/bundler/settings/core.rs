//! Core Settings struct and implementations.

use super::{AppSettings, DataSettings, DocumentSettings, PackagerSettings, PathSettings};
use std::path::{Path, PathBuf};

/// Resolved settings shared by the build and distribution stages.
///
/// Constructed via [`SettingsBuilder`](super::SettingsBuilder). All paths
/// returned by the accessors are already joined onto the project root.
///
/// # Examples
///
/// ```no_run
/// use pyship::bundler::{AppSettings, SettingsBuilder};
///
/// # fn example() -> pyship::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .project_root("/work/gempy")
///     .app(AppSettings {
///         name: "gempy_gui".into(),
///         ..Default::default()
///     })
///     .build()?;
///
/// assert!(settings.spec_path().ends_with("gempy_gui.spec"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    project_root: PathBuf,
    app: AppSettings,
    paths: PathSettings,
    data: DataSettings,
    packager: PackagerSettings,
    docs: DocumentSettings,
    keep_intermediates: bool,
}

impl Settings {
    /// Returns the executable base name.
    pub fn app_name(&self) -> &str {
        &self.app.name
    }

    /// Returns the name used in user-facing documents.
    pub fn product_name(&self) -> &str {
        &self.app.product_name
    }

    /// Returns the project root every relative path is resolved against.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Returns the entry script path.
    pub fn entry_point(&self) -> PathBuf {
        self.project_root.join(&self.app.entry_point)
    }

    /// Returns the entry script as written in the manifest.
    pub fn entry_point_relative(&self) -> &str {
        &self.app.entry_point
    }

    /// Returns the path of the generated PyInstaller spec.
    pub fn spec_path(&self) -> PathBuf {
        self.project_root.join(format!("{}.spec", self.app.name))
    }

    /// Returns the executable file name.
    ///
    /// Appends `.exe` on Windows unless a suffix is configured.
    pub fn executable_name(&self) -> String {
        let suffix = match &self.app.executable_suffix {
            Some(suffix) => suffix.as_str(),
            None if cfg!(target_os = "windows") => ".exe",
            None => "",
        };
        format!("{}{}", self.app.name, suffix)
    }

    /// Returns the prefix accepted by the last-resort output scan.
    pub fn output_prefix(&self) -> &str {
        match &self.app.output_prefix {
            Some(prefix) => prefix,
            None => self
                .app
                .name
                .split(['_', '-'])
                .next()
                .unwrap_or(&self.app.name),
        }
    }

    /// Returns the PyInstaller output root.
    pub fn dist_dir(&self) -> PathBuf {
        self.project_root.join(&self.paths.dist_dir)
    }

    /// Returns the PyInstaller scratch directory.
    pub fn build_dir(&self) -> PathBuf {
        self.project_root.join(&self.paths.build_dir)
    }

    /// Returns the distribution directory.
    pub fn distribution_dir(&self) -> PathBuf {
        self.project_root.join(&self.paths.distribution_dir)
    }

    /// Returns the path of the zip archive.
    pub fn archive_path(&self) -> PathBuf {
        self.distribution_dir().join(&self.paths.archive_name)
    }

    /// Returns the data directory name used in every tree.
    pub fn data_dir_name(&self) -> &str {
        &self.data.dir
    }

    /// Returns the data directory inside the project.
    pub fn data_source_dir(&self) -> PathBuf {
        self.project_root.join(&self.data.dir)
    }

    /// Returns the data file names.
    pub fn data_files(&self) -> &[String] {
        &self.data.files
    }

    /// Returns the packaging tool settings.
    pub fn packager(&self) -> &PackagerSettings {
        &self.packager
    }

    /// Returns the hidden imports without duplicates, in declaration order.
    pub fn hidden_imports(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.packager
            .hidden_imports
            .iter()
            .map(String::as_str)
            .filter(|module| seen.insert(*module))
            .collect()
    }

    /// Returns the document settings.
    pub fn docs(&self) -> &DocumentSettings {
        &self.docs
    }

    /// Returns true if the spec file and build directory survive the build.
    pub fn keep_intermediates(&self) -> bool {
        self.keep_intermediates
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    pub(super) fn new(
        project_root: PathBuf,
        app: AppSettings,
        paths: PathSettings,
        data: DataSettings,
        packager: PackagerSettings,
        docs: DocumentSettings,
        keep_intermediates: bool,
    ) -> Self {
        Self {
            project_root,
            app,
            paths,
            data,
            packager,
            docs,
            keep_intermediates,
        }
    }
}
