//! Executable tree location.
//!
//! PyInstaller writes either a nested bundle (`<dist>/<name>/<exe>`) or a flat
//! single file (`<dist>/<exe>`) depending on its configuration. Location is an
//! ordered list of [`LocateStrategy`] values tried in sequence; the first one
//! that matches wins.

use crate::bundler::{Result, Settings, error::ErrorExt};
use std::path::{Path, PathBuf};

/// One way of finding the executable tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocateStrategy {
    /// `<dist>/<name>/<exe>` exists; the tree is `<dist>/<name>`.
    NestedBundle,
    /// `<dist>/<exe>` exists; the tree is `<dist>`.
    FlatExecutable,
    /// First directory under `<dist>`, in name order, starting with the
    /// output prefix. Best effort: the executable may be absent.
    PrefixScan,
}

/// Cascade used right after a build, in decreasing confidence.
pub const BUILD_CASCADE: &[LocateStrategy] = &[
    LocateStrategy::NestedBundle,
    LocateStrategy::FlatExecutable,
    LocateStrategy::PrefixScan,
];

/// Cascade used when assembling a distribution from an earlier build.
pub const DISTRIBUTION_CASCADE: &[LocateStrategy] =
    &[LocateStrategy::FlatExecutable, LocateStrategy::NestedBundle];

/// A located executable tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedOutput {
    /// Directory holding the executable and its data directory.
    pub dir: PathBuf,
    /// Executable path, when it exists where expected.
    pub executable: Option<PathBuf>,
    /// Strategy that matched.
    pub strategy: LocateStrategy,
}

/// Resolves the executable tree under an output root.
#[derive(Debug, Clone)]
pub struct OutputLocator {
    dist_dir: PathBuf,
    app_name: String,
    executable_name: String,
    prefix: String,
}

impl OutputLocator {
    /// Creates a locator from the shared settings.
    pub fn new(settings: &Settings) -> Self {
        Self {
            dist_dir: settings.dist_dir(),
            app_name: settings.app_name().to_string(),
            executable_name: settings.executable_name(),
            prefix: settings.output_prefix().to_string(),
        }
    }

    /// Output root being searched.
    pub fn dist_dir(&self) -> &Path {
        &self.dist_dir
    }

    /// Executable path each file-based strategy checks.
    pub fn candidate_path(&self, strategy: LocateStrategy) -> Option<PathBuf> {
        match strategy {
            LocateStrategy::NestedBundle => Some(
                self.dist_dir
                    .join(&self.app_name)
                    .join(&self.executable_name),
            ),
            LocateStrategy::FlatExecutable => Some(self.dist_dir.join(&self.executable_name)),
            LocateStrategy::PrefixScan => None,
        }
    }

    /// Try `strategies` in order and return the first match.
    pub async fn locate(&self, strategies: &[LocateStrategy]) -> Result<Option<LocatedOutput>> {
        for &strategy in strategies {
            if let Some(found) = self.try_strategy(strategy).await? {
                log::debug!(
                    "Located output via {:?}: {}",
                    strategy,
                    found.dir.display()
                );
                return Ok(Some(found));
            }
        }
        Ok(None)
    }

    async fn try_strategy(&self, strategy: LocateStrategy) -> Result<Option<LocatedOutput>> {
        match strategy {
            LocateStrategy::NestedBundle | LocateStrategy::FlatExecutable => {
                let Some(executable) = self.candidate_path(strategy) else {
                    return Ok(None);
                };
                if !executable.is_file() {
                    return Ok(None);
                }
                let dir = match strategy {
                    LocateStrategy::NestedBundle => self.dist_dir.join(&self.app_name),
                    _ => self.dist_dir.clone(),
                };
                Ok(Some(LocatedOutput {
                    dir,
                    executable: Some(executable),
                    strategy,
                }))
            }
            LocateStrategy::PrefixScan => self.scan_prefix().await,
        }
    }

    async fn scan_prefix(&self) -> Result<Option<LocatedOutput>> {
        let mut entries = match tokio::fs::read_dir(&self.dist_dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e).fs_context("reading output directory", &self.dist_dir),
        };

        let mut matches = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .fs_context("reading output directory", &self.dist_dir)?
        {
            let is_dir = entry
                .file_type()
                .await
                .map(|t| t.is_dir())
                .unwrap_or(false);
            if is_dir && entry.file_name().to_string_lossy().starts_with(&self.prefix) {
                matches.push(entry.path());
            }
        }
        matches.sort();

        Ok(matches.into_iter().next().map(|dir| {
            let executable = dir.join(&self.executable_name);
            LocatedOutput {
                executable: executable.is_file().then_some(executable),
                dir,
                strategy: LocateStrategy::PrefixScan,
            }
        }))
    }
}
