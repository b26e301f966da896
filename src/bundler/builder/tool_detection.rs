//! External tool detection and availability checking.
//!
//! Locates the Python interpreter PyInstaller runs under when the manifest
//! does not name one.

use std::{path::PathBuf, sync::LazyLock};

/// Interpreter names probed on PATH, in order.
const PYTHON_CANDIDATES: &[&str] = &["python3", "python", "py"];

/// First Python interpreter found on PATH.
///
/// Cached result to avoid repeated PATH scans during a release run.
pub static DEFAULT_PYTHON: LazyLock<Option<PathBuf>> = LazyLock::new(|| {
    for candidate in PYTHON_CANDIDATES {
        match which::which(candidate) {
            Ok(path) => {
                log::debug!("Found {} at: {}", candidate, path.display());
                return Some(path);
            }
            Err(e) => log::debug!("{} not found in PATH: {}", candidate, e),
        }
    }

    log::debug!(
        "No Python interpreter found in PATH (tried {}). \
         Set [packager].python in pyship.toml.",
        PYTHON_CANDIDATES.join(", ")
    );
    None
});
