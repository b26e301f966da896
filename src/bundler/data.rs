//! Collection of the auxiliary data set.
//!
//! The builder (copy next to the fresh executable) and the distribution
//! assembler (fallback when the executable tree has no data directory) both
//! go through [`collect_data_files`], so the file list and destination naming
//! stay identical.

use crate::bundler::{Result, Settings, utils::fs};
use std::path::{Path, PathBuf};

/// Outcome of a data collection run.
#[derive(Debug, Clone, Default)]
pub struct CollectedData {
    /// Directory the files were copied into (`<parent>/<data dir>`).
    pub dir: PathBuf,
    /// Destination paths of the copied files, in configured order.
    pub copied: Vec<PathBuf>,
    /// Configured files absent from the project.
    pub missing: Vec<PathBuf>,
}

/// Copy the configured data files from the project into `<parent>/<data dir>`.
///
/// With `clean` set the destination directory is emptied first, so the result
/// holds exactly this run's files. Missing source files are skipped and
/// listed in [`CollectedData::missing`].
pub async fn collect_data_files(
    settings: &Settings,
    parent: &Path,
    clean: bool,
) -> Result<CollectedData> {
    let dest_dir = parent.join(settings.data_dir_name());
    fs::create_dir_all(&dest_dir, clean).await?;

    let source_dir = settings.data_source_dir();
    let mut collected = CollectedData {
        dir: dest_dir.clone(),
        ..Default::default()
    };

    for file in settings.data_files() {
        let source = source_dir.join(file);
        let dest = dest_dir.join(file);

        if !source.is_file() {
            log::info!("Data file not found, skipping: {}", source.display());
            collected.missing.push(source);
            continue;
        }

        fs::copy_file(&source, &dest).await?;
        log::info!("Copied {} to {}", source.display(), dest.display());
        collected.copied.push(dest);
    }

    Ok(collected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::{DataSettings, SettingsBuilder};

    fn settings(root: &Path, files: &[&str]) -> Settings {
        SettingsBuilder::new()
            .project_root(root)
            .data(DataSettings {
                dir: "auxiliary".into(),
                files: files.iter().map(|f| f.to_string()).collect(),
            })
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn copies_present_files_and_reports_missing() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(tmp.path().join("auxiliary")).unwrap();
        std::fs::write(tmp.path().join("auxiliary/a.csv"), "a").unwrap();

        let out = tmp.path().join("out");
        let collected = collect_data_files(&settings(tmp.path(), &["a.csv", "b.csv"]), &out, false)
            .await
            .unwrap();

        assert_eq!(collected.dir, out.join("auxiliary"));
        assert_eq!(collected.copied, vec![out.join("auxiliary/a.csv")]);
        assert_eq!(collected.missing, vec![tmp.path().join("auxiliary/b.csv")]);
    }

    #[tokio::test]
    async fn clean_collection_leaves_no_residue() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(tmp.path().join("auxiliary")).unwrap();
        std::fs::write(tmp.path().join("auxiliary/a.csv"), "a").unwrap();
        std::fs::write(tmp.path().join("auxiliary/b.csv"), "b").unwrap();

        let out = tmp.path().join("out");
        collect_data_files(&settings(tmp.path(), &["a.csv"]), &out, true)
            .await
            .unwrap();
        collect_data_files(&settings(tmp.path(), &["b.csv"]), &out, true)
            .await
            .unwrap();

        assert!(!out.join("auxiliary/a.csv").exists());
        assert!(out.join("auxiliary/b.csv").is_file());
    }
}
