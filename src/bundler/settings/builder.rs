//! Builder for constructing Settings.

use super::{
    AppSettings, DataSettings, DocumentSettings, PackagerSettings, PathSettings, Settings,
};
use crate::bail;
use std::path::{Component, Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// Every section defaults to the built-in conventions; `build` validates the
/// names that end up in file paths.
///
/// # Examples
///
/// ```no_run
/// use pyship::bundler::{DataSettings, SettingsBuilder};
///
/// # fn example() -> pyship::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .project_root(".")
///     .data(DataSettings {
///         dir: "auxiliary".into(),
///         files: vec!["a.csv".into(), "b.csv".into()],
///     })
///     .keep_intermediates(true)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    project_root: Option<PathBuf>,
    app: AppSettings,
    paths: PathSettings,
    data: DataSettings,
    packager: PackagerSettings,
    docs: DocumentSettings,
    keep_intermediates: bool,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the project root.
    ///
    /// Default: the current directory
    pub fn project_root<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.project_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the application identity.
    pub fn app(mut self, app: AppSettings) -> Self {
        self.app = app;
        self
    }

    /// Sets the conventional directories.
    pub fn paths(mut self, paths: PathSettings) -> Self {
        self.paths = paths;
        self
    }

    /// Sets the auxiliary data set.
    pub fn data(mut self, data: DataSettings) -> Self {
        self.data = data;
        self
    }

    /// Sets the packaging tool configuration.
    pub fn packager(mut self, packager: PackagerSettings) -> Self {
        self.packager = packager;
        self
    }

    /// Sets the document configuration.
    pub fn docs(mut self, docs: DocumentSettings) -> Self {
        self.docs = docs;
        self
    }

    /// Keeps the spec file and build directory after the build.
    pub fn keep_intermediates(mut self, keep: bool) -> Self {
        self.keep_intermediates = keep;
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// - the application name is empty, `.`/`..` or contains a path separator
    /// - the output prefix (configured or derived from the name) is empty
    /// - the archive name is not a single file name
    /// - the data directory name is empty or not a single path component
    /// - a data file entry is absolute or escapes the data directory
    /// - the packager command override is empty
    pub fn build(self) -> crate::bundler::Result<Settings> {
        let name = self.app.name.trim();
        if name.is_empty() {
            bail!("[app].name must not be empty");
        }
        if !is_single_component(&self.app.name) {
            bail!("[app].name must be a bare name, got {:?}", self.app.name);
        }

        let prefix = match &self.app.output_prefix {
            Some(prefix) => prefix.as_str(),
            None => self.app.name.split(['_', '-']).next().unwrap_or_default(),
        };
        if prefix.is_empty() {
            bail!(
                "output prefix derived from [app].name {:?} is empty; set [app].output_prefix",
                self.app.name
            );
        }

        if !is_single_component(&self.paths.archive_name) {
            bail!(
                "[paths].archive_name must be a file name, got {:?}",
                self.paths.archive_name
            );
        }

        if !is_single_component(&self.data.dir) {
            bail!(
                "[data].dir must be a single directory name, got {:?}",
                self.data.dir
            );
        }

        for file in &self.data.files {
            if !is_contained_relative(file) {
                bail!(
                    "[data].files entry {:?} must be a relative path inside {}",
                    file,
                    self.data.dir
                );
            }
        }

        if let Some(command) = &self.packager.command
            && command.is_empty()
        {
            bail!("[packager].command must name a program when set");
        }

        let project_root = self.project_root.unwrap_or_else(|| PathBuf::from("."));

        Ok(Settings::new(
            project_root,
            self.app,
            self.paths,
            self.data,
            self.packager,
            self.docs,
            self.keep_intermediates,
        ))
    }
}

fn is_single_component(name: &str) -> bool {
    let mut components = Path::new(name).components();
    !name.contains(['/', '\\'])
        && matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        )
}

fn is_contained_relative(file: &str) -> bool {
    let path = Path::new(file);
    !file.is_empty()
        && path
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}
