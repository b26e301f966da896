//! Main build orchestration.
//!
//! This module provides the [`Bundler`] that turns the entry script into an
//! executable tree: spec generation, PyInstaller run, output location, data
//! copy, verification and cleanup.

use super::{
    locate::{BUILD_CASCADE, LocateStrategy, OutputLocator},
    verify::verify_output,
};
use crate::bundler::{
    Error, Result, Settings,
    data::{CollectedData, collect_data_files},
    pyinstaller::{self, PackagerCommand},
    utils::fs,
};
use std::{
    io,
    path::{Path, PathBuf},
};

/// Result of a successful build.
#[derive(Debug, Clone)]
pub struct BuildOutput {
    /// Directory holding the executable and its data directory.
    pub dir: PathBuf,
    /// Executable path, if it could be found.
    pub executable: Option<PathBuf>,
    /// How the directory was found.
    pub strategy: LocateStrategy,
    /// Data files copied next to the executable.
    pub data: CollectedData,
    /// Verification findings that did not stop the build.
    pub warnings: Vec<String>,
}

/// Build orchestrator.
///
/// # Examples
///
/// ```no_run
/// use pyship::bundler::{Bundler, SettingsBuilder};
///
/// # async fn example() -> pyship::bundler::Result<()> {
/// let settings = SettingsBuilder::new().project_root(".").build()?;
/// let output = Bundler::new(settings).build().await?;
/// println!("Executable tree: {}", output.dir.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Bundler {
    settings: Settings,
}

impl Bundler {
    /// Creates a new bundler with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Returns a reference to the bundler settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Writes the PyInstaller spec without running the packaging tool.
    pub async fn write_spec(&self) -> Result<PathBuf> {
        pyinstaller::generate_spec(&self.settings).await
    }

    /// Runs the full build.
    ///
    /// # Process
    ///
    /// 1. Check the entry point (nothing runs when it is missing)
    /// 2. Resolve the PyInstaller command
    /// 3. Write the spec
    /// 4. Remove stale executables
    /// 5. Run PyInstaller
    /// 6. Locate the executable tree
    /// 7. Copy the data files next to the executable
    /// 8. Verify the output
    ///
    /// The spec file and build directory are removed afterwards whether the
    /// build succeeded or not, unless intermediates are kept.
    pub async fn build(&self) -> Result<BuildOutput> {
        self.build_with(|path| async move { fs::remove_file_if_exists(&path).await })
            .await
    }

    /// [`Bundler::build`] with stale executables deleted through `remove`.
    async fn build_with<F, Fut>(&self, remove: F) -> Result<BuildOutput>
    where
        F: Fn(PathBuf) -> Fut,
        Fut: Future<Output = io::Result<bool>>,
    {
        let entry_point = self.settings.entry_point();
        if !entry_point.is_file() {
            return Err(Error::EntryPointMissing(entry_point));
        }

        let command = pyinstaller::get_pyinstaller(&self.settings).await?;
        let spec_path = self.write_spec().await?;

        let outcome = match pyinstaller::remove_stale_executables(&self.settings, remove).await {
            Ok(()) => self.run_build(&command, &spec_path).await,
            Err(e) => Err(e),
        };
        self.clean_intermediates(&spec_path).await;
        outcome
    }

    async fn run_build(&self, command: &PackagerCommand, spec_path: &Path) -> Result<BuildOutput> {
        pyinstaller::run_pyinstaller(command, &self.settings, spec_path).await?;

        let locator = OutputLocator::new(&self.settings);
        let located = locator
            .locate(BUILD_CASCADE)
            .await?
            .ok_or_else(|| Error::NoBuildOutput {
                dist_dir: locator.dist_dir().to_path_buf(),
            })?;

        if located.strategy == LocateStrategy::PrefixScan {
            log::info!(
                "Expected output not found, using directory found by scan: {}",
                located.dir.display()
            );
        }

        let data = collect_data_files(&self.settings, &located.dir, false).await?;
        let verification = verify_output(&self.settings, &located).await;

        log::info!("✓ Build output: {}", located.dir.display());

        Ok(BuildOutput {
            dir: located.dir,
            executable: verification.executable,
            strategy: located.strategy,
            data,
            warnings: verification.warnings,
        })
    }

    async fn clean_intermediates(&self, spec_path: &Path) {
        if self.settings.keep_intermediates() {
            log::info!("Keeping {} and the build directory", spec_path.display());
            return;
        }

        if let Err(e) = fs::remove_file_if_exists(spec_path).await {
            log::warn!("Failed to remove {}: {}", spec_path.display(), e);
        }

        let build_dir = self.settings.build_dir();
        if let Err(e) = fs::remove_dir_all(&build_dir).await {
            log::warn!("Failed to remove {}: {}", build_dir.display(), e);
        } else {
            log::debug!("Cleaned {}", build_dir.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::{AppSettings, PackagerSettings, SettingsBuilder};

    #[cfg(unix)]
    #[tokio::test]
    async fn locked_previous_executable_stops_before_packaging() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("app.py"), "print('hi')\n").unwrap();
        std::fs::write(tmp.path().join("packager.sh"), "touch invoked\n").unwrap();
        let settings = SettingsBuilder::new()
            .project_root(tmp.path())
            .app(AppSettings {
                name: "app".into(),
                entry_point: "app.py".into(),
                executable_suffix: Some(".exe".into()),
                ..Default::default()
            })
            .packager(PackagerSettings {
                command: Some(vec!["sh".into(), "packager.sh".into()]),
                ..Default::default()
            })
            .build()
            .unwrap();

        let err = Bundler::new(settings)
            .build_with(|_| async { Err(io::Error::from(io::ErrorKind::PermissionDenied)) })
            .await
            .unwrap_err();

        match err {
            Error::ExecutableLocked { path, .. } => {
                assert_eq!(path, tmp.path().join("dist/app.exe"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!tmp.path().join("invoked").exists());
        assert!(!tmp.path().join("app.spec").exists());
    }
}
