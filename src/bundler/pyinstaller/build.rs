//! PyInstaller build execution.
//!
//! Runs the packaging tool against a generated spec and classifies its
//! failures, separating a locked output executable from other errors.

use super::{toolset::PackagerCommand, utils};
use crate::bundler::{
    error::{Error, Result},
    settings::Settings,
};
use std::{
    io,
    path::{Path, PathBuf},
    process::Stdio,
};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;

/// Captured output of a successful PyInstaller run.
#[derive(Debug, Clone, Default)]
pub struct PackagerOutput {
    /// Standard output lines
    pub stdout: Vec<String>,
    /// Standard error lines (PyInstaller logs here)
    pub stderr: Vec<String>,
}

/// Executable paths a previous build may have left behind.
pub fn conventional_executables(settings: &Settings) -> [PathBuf; 2] {
    let dist_dir = settings.dist_dir();
    let exe = settings.executable_name();
    [
        dist_dir.join(&exe),
        dist_dir.join(settings.app_name()).join(&exe),
    ]
}

/// Delete stale executables before PyInstaller runs, using `remove` to
/// delete each file.
///
/// A permission error here means the old executable is still running; the
/// build stops instead of silently keeping the old binary. Directories are
/// skipped: without an executable suffix the flat candidate `<dist>/<name>`
/// is the one-folder bundle directory.
pub async fn remove_stale_executables<F, Fut>(settings: &Settings, remove: F) -> Result<()>
where
    F: Fn(PathBuf) -> Fut,
    Fut: Future<Output = io::Result<bool>>,
{
    for path in conventional_executables(settings) {
        if let Ok(meta) = tokio::fs::symlink_metadata(&path).await
            && meta.is_dir()
        {
            log::debug!("Not an executable, leaving in place: {}", path.display());
            continue;
        }

        match remove(path.clone()).await {
            Ok(true) => log::info!("Removed previous executable: {}", path.display()),
            Ok(false) => {}
            Err(error) => return Err(classify_removal_error(path, error)),
        }
    }
    Ok(())
}

/// Executable named in a lock error raised from the tool's output.
///
/// The first conventional path holding a file, or the flat path when neither
/// exists.
pub fn locked_executable(settings: &Settings) -> PathBuf {
    let [flat, nested] = conventional_executables(settings);
    if !flat.is_file() && nested.is_file() {
        nested
    } else {
        flat
    }
}

/// Map a failed executable removal to the matching error.
pub fn classify_removal_error(path: PathBuf, error: io::Error) -> Error {
    if error.kind() == io::ErrorKind::PermissionDenied {
        Error::ExecutableLocked {
            path,
            detail: error.to_string(),
        }
    } else {
        Error::Fs {
            context: "removing previous executable",
            path,
            error,
        }
    }
}

/// Run PyInstaller on `spec_path` from the project root.
///
/// Waits for the process without a timeout. Output is echoed at debug level
/// and returned on success; on failure it is embedded in the error.
pub async fn run_pyinstaller(
    command: &PackagerCommand,
    settings: &Settings,
    spec_path: &Path,
) -> Result<PackagerOutput> {
    log::info!("Running PyInstaller: {}", command.display());

    let mut child = Command::new(&command.program)
        .args(&command.args)
        .arg(spec_path)
        .args(["--clean", "--noconfirm"])
        .arg("--distpath")
        .arg(settings.dist_dir())
        .arg("--workpath")
        .arg(settings.build_dir())
        .current_dir(settings.project_root())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|error| Error::CommandFailed {
            command: command.display(),
            error,
        })?;

    // Drain both pipes concurrently so neither can fill up and block the child
    let (stdout, stderr) = tokio::join!(
        capture_lines(child.stdout.take(), "stdout"),
        capture_lines(child.stderr.take(), "stderr"),
    );

    let status = child.wait().await.map_err(|error| Error::CommandFailed {
        command: command.display(),
        error,
    })?;

    let stdout_text = stdout.join("\n");
    let stderr_text = stderr.join("\n");

    if let Some(detail) = utils::find_lock_signature(&stderr_text)
        .or_else(|| utils::find_lock_signature(&stdout_text))
    {
        return Err(Error::ExecutableLocked {
            path: locked_executable(settings),
            detail: detail.to_string(),
        });
    }

    if !status.success() {
        return Err(Error::PackagerFailed {
            code: status.code(),
            stdout: stdout_text,
            stderr: stderr_text,
        });
    }

    Ok(PackagerOutput { stdout, stderr })
}

/// Collect a pipe's lines until EOF.
///
/// Bytes that are not UTF-8 are replaced rather than ending the read; closing
/// the pipe early would kill the tool with SIGPIPE.
async fn capture_lines<R>(stream: Option<R>, label: &'static str) -> Vec<String>
where
    R: AsyncRead + Unpin,
{
    let mut captured = Vec::new();
    let Some(stream) = stream else {
        return captured;
    };

    let mut reader = BufReader::new(stream);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                let line = line.trim_end_matches(['\n', '\r']).to_string();
                log::debug!("[pyinstaller {}] {}", label, line);
                captured.push(line);
            }
            Err(e) => {
                log::debug!("[pyinstaller {}] read failed: {}", label, e);
                break;
            }
        }
    }
    captured
}
