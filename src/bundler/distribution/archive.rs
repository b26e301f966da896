//! Distribution zip archive.

use super::docs::{INSTALLATION_FILE, QUICK_START_FILE, REQUIREMENTS_FILE};
use crate::bundler::{Error, Result, error::ErrorExt};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

/// Files that go into the archive, as entry name and source path.
///
/// Entry names are relative to `root` with `/` separators. Order: executable,
/// dependency manifest, installation guides (sorted), quick-start guide, then
/// the data directory tree in file name order.
pub fn archive_entries(
    root: &Path,
    executable_name: &str,
    data_dir_name: &str,
) -> Result<Vec<(String, PathBuf)>> {
    let mut entries = vec![
        (executable_name.to_string(), root.join(executable_name)),
        (REQUIREMENTS_FILE.to_string(), root.join(REQUIREMENTS_FILE)),
    ];

    let stem = INSTALLATION_FILE.trim_end_matches(".txt");
    let pattern = glob::Pattern::new(&format!("{}*.txt", glob::Pattern::escape(stem)))?;
    let mut guides = Vec::new();
    for entry in std::fs::read_dir(root).fs_context("reading distribution directory", root)? {
        let entry = entry.fs_context("reading distribution directory", root)?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if pattern.matches(&name) && entry.path().is_file() {
            guides.push(name);
        }
    }
    guides.sort();
    for guide in guides {
        let path = root.join(&guide);
        entries.push((guide, path));
    }

    entries.push((QUICK_START_FILE.to_string(), root.join(QUICK_START_FILE)));

    let data_dir = root.join(data_dir_name);
    if data_dir.is_dir() {
        for entry in walkdir::WalkDir::new(&data_dir).sort_by_file_name() {
            let entry = entry?;
            if entry.file_type().is_file() {
                entries.push((entry_name(root, entry.path())?, entry.into_path()));
            }
        }
    }

    Ok(entries)
}

fn entry_name(root: &Path, path: &Path) -> Result<String> {
    let rel = path.strip_prefix(root)?;
    Ok(rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/"))
}

/// Write a deflate-compressed archive of `entries` to `archive`, replacing it.
pub fn write_archive(archive: &Path, entries: &[(String, PathBuf)]) -> Result<()> {
    let file = File::create(archive).fs_context("creating archive", archive)?;
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (name, source) in entries {
        let mut input = File::open(source).fs_context("opening file for archive", source)?;
        zip.start_file(name.as_str(), options)?;
        io::copy(&mut input, &mut zip).fs_context("adding file to archive", source)?;
        log::debug!("Archived {}", name);
    }

    zip.finish()?
        .flush()
        .fs_context("writing archive", archive)?;
    Ok(())
}

/// Collect entries under `root` and write the archive on the blocking pool.
pub async fn create_archive(
    root: &Path,
    archive: &Path,
    executable_name: &str,
    data_dir_name: &str,
) -> Result<Vec<String>> {
    let root = root.to_path_buf();
    let archive = archive.to_path_buf();
    let executable_name = executable_name.to_string();
    let data_dir_name = data_dir_name.to_string();

    tokio::task::spawn_blocking(move || {
        let entries = archive_entries(&root, &executable_name, &data_dir_name)?;
        write_archive(&archive, &entries)?;
        Ok(entries.into_iter().map(|(name, _)| name).collect())
    })
    .await
    .map_err(|e| Error::GenericError(format!("Archive task panicked: {}", e)))?
}
