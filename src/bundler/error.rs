//! Error types for bundling operations.
//!
//! Every failure of the build and distribution stages is one variant of
//! [`Error`]. Filesystem failures carry the operation and the path involved
//! via [`ErrorExt::fs_context`].

use std::{io, path::PathBuf};
use thiserror::Error;

/// Result type alias for bundler operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while building or distributing an application.
#[derive(Debug, Error)]
pub enum Error {
    /// Free-form failure, usually raised through [`bail!`](crate::bail).
    #[error("{0}")]
    GenericError(String),

    /// Raw IO failure without path context.
    #[error("{0}")]
    IoError(#[from] io::Error),

    /// IO failure on a known path.
    #[error("{context} {}: {error}", path.display())]
    Fs {
        /// Operation that failed
        context: &'static str,
        /// Path the operation was applied to
        path: PathBuf,
        /// Underlying error
        error: io::Error,
    },

    /// An external command could not be spawned or awaited.
    #[error("failed to run {command}: {error}")]
    CommandFailed {
        /// Program name
        command: String,
        /// Underlying error
        error: io::Error,
    },

    /// The application entry point does not exist.
    #[error("entry point not found: {}", .0.display())]
    EntryPointMissing(PathBuf),

    /// PyInstaller is unavailable and could not be installed.
    #[error("packaging tool unavailable: {0}")]
    PackagerNotFound(String),

    /// PyInstaller exited unsuccessfully.
    #[error("PyInstaller failed (exit code {code:?})\nstdout:\n{stdout}\nstderr:\n{stderr}")]
    PackagerFailed {
        /// Exit code, `None` when terminated by a signal
        code: Option<i32>,
        /// Captured standard output
        stdout: String,
        /// Captured standard error
        stderr: String,
    },

    /// The target executable is held open by a running instance.
    #[error(
        "cannot replace {}: the file is in use, the process may be running. \
         Close the running instance and retry.\n{detail}",
        path.display()
    )]
    ExecutableLocked {
        /// Executable that could not be replaced
        path: PathBuf,
        /// Diagnostic that identified the lock
        detail: String,
    },

    /// PyInstaller reported success but produced nothing recognizable.
    #[error("no build output found under {}", dist_dir.display())]
    NoBuildOutput {
        /// Output root that was searched
        dist_dir: PathBuf,
    },

    /// The executable was not found at any conventional location.
    #[error("executable not found, looked in: {}", format_paths(searched))]
    ExecutableNotFound {
        /// Locations tried, in order
        searched: Vec<PathBuf>,
    },

    /// Template registration failure.
    #[error("failed to register template: {0}")]
    TemplateError(#[from] Box<handlebars::TemplateError>),

    /// Template rendering failure.
    #[error("failed to render template: {0}")]
    RenderError(#[from] handlebars::RenderError),

    /// Zip writing failure.
    #[error("archive error: {0}")]
    ZipError(#[from] zip::result::ZipError),

    /// Directory traversal failure.
    #[error("directory walk failed: {0}")]
    WalkDirError(#[from] walkdir::Error),

    /// Invalid glob pattern.
    #[error("invalid pattern: {0}")]
    GlobPatternError(#[from] glob::PatternError),

    /// A path was not below the expected root.
    #[error("path prefix error: {0}")]
    StripPrefixError(#[from] std::path::StripPrefixError),
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Attach path context to IO results.
pub trait ErrorExt<T> {
    /// Converts an IO error into [`Error::Fs`] naming the operation and path.
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.into(),
            error,
        })
    }
}

/// Return early with an [`Error::GenericError`].
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($($arg)*)))
    };
}
