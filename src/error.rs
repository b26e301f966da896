//! Application-level error types for pyship.
//!
//! This module defines the errors surfaced by the CLI, with actionable messages
//! and recovery suggestions printed next to them.

use thiserror::Error;

/// Result type alias for application operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Main error type for all application operations
#[derive(Error, Debug)]
pub enum BundlerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Bundler errors
    #[error("{0}")]
    Bundler(#[from] crate::bundler::Error),

    /// Generic errors from anyhow
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

impl BundlerError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        use crate::bundler::Error;

        match self {
            Self::Bundler(Error::EntryPointMissing(path)) => vec![
                format!("Create {} or set [app].entry_point in pyship.toml", path.display()),
                "Run pyship from the project root or pass --project-dir".to_string(),
            ],
            Self::Bundler(Error::ExecutableLocked { path, .. }) => vec![
                format!("Close every running instance of {} and retry", path.display()),
            ],
            Self::Bundler(Error::PackagerNotFound(_)) => vec![
                "Install PyInstaller: python -m pip install pyinstaller".to_string(),
                "Or set [packager].python to the interpreter that has it".to_string(),
            ],
            Self::Bundler(Error::PackagerFailed { .. }) => vec![
                "Read the PyInstaller output above for the failing module or hook".to_string(),
                "Rerun with --keep-intermediates to inspect the build directory".to_string(),
            ],
            Self::Bundler(Error::NoBuildOutput { .. }) => vec![
                "Check that the spec file name matches [app].name".to_string(),
            ],
            Self::Bundler(Error::ExecutableNotFound { .. }) => {
                vec!["Run `pyship build` before `pyship distribute`".to_string()]
            }
            Self::Toml(_) | Self::Anyhow(_) => {
                vec!["Check pyship.toml against the documented sections".to_string()]
            }
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }

    /// Check if this error is recoverable by simply retrying
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Bundler(crate::bundler::Error::ExecutableLocked { .. })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::Error;
    use std::path::PathBuf;

    #[test]
    fn only_locked_executable_is_recoverable() {
        let locked = BundlerError::from(Error::ExecutableLocked {
            path: PathBuf::from("dist/app.exe"),
            detail: "PermissionError: [WinError 32]".into(),
        });
        let missing = BundlerError::from(Error::NoBuildOutput {
            dist_dir: PathBuf::from("dist"),
        });

        assert!(locked.is_recoverable());
        assert!(!missing.is_recoverable());
        assert_eq!(missing.to_string(), "no build output found under dist");
    }

    #[test]
    fn missing_entry_point_suggests_manifest_key() {
        let err = BundlerError::from(Error::EntryPointMissing(PathBuf::from("app.py")));

        assert!(
            err.recovery_suggestions()
                .iter()
                .any(|s| s.contains("[app].entry_point"))
        );
    }
}
