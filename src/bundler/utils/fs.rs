//! File system utilities for bundling.
//!
//! Every helper here is idempotent: reruns after an interrupted run find
//! leftovers in place and overwrite or remove them instead of failing.

use crate::bundler::error::{Error, ErrorExt, Result};
use std::{io, path::Path};
use tokio::fs;

/// Creates all of the directories of the specified path, erasing it first if specified.
pub async fn create_dir_all(path: &Path, erase: bool) -> Result<()> {
    if erase {
        remove_dir_all(path).await?;
    }

    // create_dir_all is already idempotent - succeeds even if dir exists
    fs::create_dir_all(path)
        .await
        .fs_context("creating directory", path)
}

/// Removes the directory and its contents if it exists.
pub async fn remove_dir_all(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()), // Idempotent
        Err(e) => Err(e).fs_context("removing directory", path),
    }
}

/// Removes a file if it exists, returning whether something was removed.
///
/// The raw IO error is returned so callers can tell permission failures
/// (a running executable on Windows) from other problems.
pub async fn remove_file_if_exists(path: &Path) -> io::Result<bool> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// Overwrites the destination. Fails if the source path is a directory or
/// doesn't exist.
pub async fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if !from.exists() {
        return Err(Error::GenericError(format!("{from:?} does not exist")));
    }
    if !from.is_file() {
        return Err(Error::GenericError(format!("{from:?} is not a file")));
    }
    if let Some(dest_dir) = to.parent() {
        fs::create_dir_all(dest_dir)
            .await
            .fs_context("creating directory", dest_dir)?;
    }
    fs::copy(from, to).await.fs_context("copying file to", to)?;
    Ok(())
}

/// Recursively copies a directory from one path to another, creating any
/// parent directories of the destination path as necessary.
///
/// Symlinks are followed and copied as regular files so the result can be
/// zipped as-is. Fails if the source path is not a directory or doesn't exist.
pub async fn copy_dir(from: &Path, to: &Path) -> Result<()> {
    if !from.exists() {
        return Err(Error::GenericError(format!("{from:?} does not exist")));
    }
    if !from.is_dir() {
        return Err(Error::GenericError(format!("{from:?} is not a Directory")));
    }

    // Clone paths for move into blocking closure
    let from = from.to_path_buf();
    let to = to.to_path_buf();

    // Offload blocking work to dedicated thread pool
    tokio::task::spawn_blocking(move || {
        if let Some(parent) = to.parent() {
            std::fs::create_dir_all(parent).fs_context("creating directory", parent)?;
        }

        for entry in walkdir::WalkDir::new(&from).follow_links(true) {
            let entry = entry?;
            let rel_path = entry.path().strip_prefix(&from)?;
            let dest_path = to.join(rel_path);

            if entry.file_type().is_dir() {
                std::fs::create_dir_all(&dest_path).fs_context("creating directory", &dest_path)?;
            } else {
                std::fs::copy(entry.path(), &dest_path).fs_context("copying file to", &dest_path)?;
            }
        }

        Ok::<(), Error>(())
    })
    .await
    .map_err(|e| Error::GenericError(format!("Directory copy task panicked: {}", e)))?
}

/// Writes a UTF-8 text file, replacing any previous content.
pub async fn write_text(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .fs_context("creating directory", parent)?;
    }
    fs::write(path, content.as_bytes())
        .await
        .fs_context("writing", path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn copy_dir_replicates_nested_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("src");
        std::fs::create_dir_all(src.join("nested")).unwrap();
        std::fs::write(src.join("a.csv"), "a").unwrap();
        std::fs::write(src.join("nested/b.csv"), "b").unwrap();

        let dst = tmp.path().join("out/dst");
        copy_dir(&src, &dst).await.unwrap();

        assert_eq!(std::fs::read_to_string(dst.join("a.csv")).unwrap(), "a");
        assert_eq!(std::fs::read_to_string(dst.join("nested/b.csv")).unwrap(), "b");
    }

    #[tokio::test]
    async fn create_dir_all_with_erase_drops_old_content() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("data");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("stale.csv"), "old").unwrap();

        create_dir_all(&dir, true).await.unwrap();

        assert!(dir.is_dir());
        assert!(!dir.join("stale.csv").exists());
    }

    #[tokio::test]
    async fn removals_are_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("app.exe");
        std::fs::write(&file, "bin").unwrap();

        assert!(remove_file_if_exists(&file).await.unwrap());
        assert!(!remove_file_if_exists(&file).await.unwrap());
        remove_dir_all(&tmp.path().join("never-created")).await.unwrap();
    }

    #[tokio::test]
    async fn copy_file_rejects_missing_source() {
        let tmp = tempfile::tempdir().unwrap();
        let result = copy_file(&tmp.path().join("nope"), &tmp.path().join("dst")).await;
        assert!(result.is_err());
    }
}
