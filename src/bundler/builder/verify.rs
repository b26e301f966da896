//! Post-build verification.
//!
//! The hidden-import list is static and PyInstaller drops what it cannot find
//! without failing, so a "successful" build can still be broken. These checks
//! turn the detectable cases into warnings before the intermediates (and
//! PyInstaller's warn file with them) are removed.

use super::locate::LocatedOutput;
use crate::bundler::{Settings, pyinstaller::utils::parse_missing_modules};
use std::path::{Path, PathBuf};

/// Result of verifying a located executable tree.
#[derive(Debug, Clone, Default)]
pub struct Verification {
    /// Executable path, found where expected or by searching the tree.
    pub executable: Option<PathBuf>,
    /// Human-readable problems, in check order.
    pub warnings: Vec<String>,
}

/// Check the executable, the copied data files and PyInstaller's warn file.
pub async fn verify_output(settings: &Settings, located: &LocatedOutput) -> Verification {
    let mut verification = Verification::default();
    let executable_name = settings.executable_name();

    let executable = match &located.executable {
        Some(path) => Some(path.clone()),
        None => find_in_tree(&located.dir, &executable_name).await,
    };

    match &executable {
        Some(path) => match tokio::fs::metadata(path).await {
            Ok(meta) if meta.len() == 0 => verification
                .warnings
                .push(format!("Executable is empty: {}", path.display())),
            Ok(_) => {}
            Err(e) => verification
                .warnings
                .push(format!("Cannot read executable {}: {}", path.display(), e)),
        },
        None => verification.warnings.push(format!(
            "Executable {} not found under {}",
            executable_name,
            located.dir.display()
        )),
    }
    verification.executable = executable;

    let data_dir = located.dir.join(settings.data_dir_name());
    for file in settings.data_files() {
        let path = data_dir.join(file);
        if !path.is_file() {
            verification
                .warnings
                .push(format!("Data file missing from build output: {}", path.display()));
        }
    }

    verification
        .warnings
        .extend(audit_hidden_imports(settings).await);

    for warning in &verification.warnings {
        log::debug!("Verification: {}", warning);
    }
    verification
}

/// Report configured hidden imports PyInstaller could not resolve.
///
/// Reads `<build_dir>/<name>/warn-<name>.txt`; a missing file yields nothing.
pub async fn audit_hidden_imports(settings: &Settings) -> Vec<String> {
    let warn_file = warn_file_path(settings);
    let Ok(content) = tokio::fs::read_to_string(&warn_file).await else {
        log::debug!("No PyInstaller warn file at {}", warn_file.display());
        return Vec::new();
    };

    let missing = parse_missing_modules(&content);
    settings
        .hidden_imports()
        .into_iter()
        .filter(|module| missing.iter().any(|m| m.as_str() == *module))
        .map(|module| {
            format!(
                "Hidden import '{}' could not be resolved by PyInstaller and is not bundled",
                module
            )
        })
        .collect()
}

/// Location of PyInstaller's missing-module report.
pub fn warn_file_path(settings: &Settings) -> PathBuf {
    settings
        .build_dir()
        .join(settings.app_name())
        .join(format!("warn-{}.txt", settings.app_name()))
}

async fn find_in_tree(dir: &Path, file_name: &str) -> Option<PathBuf> {
    let dir = dir.to_path_buf();
    let file_name = file_name.to_string();
    tokio::task::spawn_blocking(move || {
        walkdir::WalkDir::new(&dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .find(|e| e.file_type().is_file() && e.file_name().to_string_lossy() == file_name)
            .map(|e| e.into_path())
    })
    .await
    .ok()
    .flatten()
}
