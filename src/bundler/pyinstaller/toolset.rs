//! PyInstaller toolset location.
//!
//! Resolves the command prefix used to run PyInstaller: either the manifest's
//! explicit `command`, or `<python> -m PyInstaller` after checking (and when
//! allowed, installing) the module.

use crate::bundler::{
    builder::tool_detection::DEFAULT_PYTHON,
    error::{Error, Result},
    settings::Settings,
};
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// Program and leading arguments that run PyInstaller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagerCommand {
    /// Program to execute
    pub program: PathBuf,
    /// Arguments placed before the spec path
    pub args: Vec<String>,
}

impl PackagerCommand {
    /// Human-readable command line, for diagnostics.
    pub fn display(&self) -> String {
        std::iter::once(self.program.display().to_string())
            .chain(self.args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Resolve the PyInstaller command for these settings.
pub async fn get_pyinstaller(settings: &Settings) -> Result<PackagerCommand> {
    let packager = settings.packager();

    if let Some(command) = &packager.command {
        let (program, args) = command
            .split_first()
            .ok_or_else(|| Error::PackagerNotFound("[packager].command is empty".into()))?;
        log::debug!("Using configured packager command: {}", command.join(" "));
        return Ok(PackagerCommand {
            program: PathBuf::from(program),
            args: args.to_vec(),
        });
    }

    let python = match &packager.python {
        Some(python) => python.clone(),
        None => DEFAULT_PYTHON.clone().ok_or_else(|| {
            Error::PackagerNotFound(
                "no Python interpreter found in PATH (tried python3, python, py)".into(),
            )
        })?,
    };

    match pyinstaller_version(&python).await {
        Some(version) => log::info!("PyInstaller {} available via {}", version, python.display()),
        None if packager.install_if_missing => {
            log::warn!("PyInstaller not installed for {}, installing...", python.display());
            install_pyinstaller(&python).await?;
        }
        None => {
            return Err(Error::PackagerNotFound(format!(
                "PyInstaller is not installed for {}",
                python.display()
            )));
        }
    }

    Ok(PackagerCommand {
        program: python,
        args: vec!["-m".into(), "PyInstaller".into()],
    })
}

/// Version reported by `python -m PyInstaller --version`, if it runs.
async fn pyinstaller_version(python: &Path) -> Option<String> {
    let output = Command::new(python)
        .args(["-m", "PyInstaller", "--version"])
        .output()
        .await
        .ok()?;

    if output.status.success() {
        Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        log::debug!(
            "PyInstaller version check failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
        None
    }
}

async fn install_pyinstaller(python: &Path) -> Result<()> {
    let status = Command::new(python)
        .args(["-m", "pip", "install", "pyinstaller"])
        .status()
        .await
        .map_err(|error| Error::CommandFailed {
            command: format!("{} -m pip install pyinstaller", python.display()),
            error,
        })?;

    if !status.success() {
        return Err(Error::PackagerNotFound(format!(
            "pip install pyinstaller failed (exit code {:?})",
            status.code()
        )));
    }

    log::info!("✓ Installed PyInstaller");
    Ok(())
}
