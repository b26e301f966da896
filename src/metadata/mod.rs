//! Project manifest discovery and loading from pyship.toml

use crate::bundler::{
    AppSettings, DataSettings, DocumentSettings, PackagerSettings, PathSettings, SettingsBuilder,
};
use crate::error::{BundlerError, CliError, Result};
use anyhow::Context;
use std::path::Path;

/// File name looked up in the project root when no manifest is given.
pub const MANIFEST_FILE_NAME: &str = "pyship.toml";

/// Parsed `pyship.toml`.
///
/// Every table is optional; missing tables and keys keep their defaults.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectManifest {
    /// `[app]` table
    pub app: AppSettings,

    /// `[paths]` table
    pub paths: PathSettings,

    /// `[data]` table
    pub data: DataSettings,

    /// `[packager]` table
    pub packager: PackagerSettings,

    /// `[docs]` table
    pub docs: DocumentSettings,
}

impl ProjectManifest {
    /// Parses manifest text.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Seeds a [`SettingsBuilder`] with every section of this manifest.
    pub fn into_builder(self) -> SettingsBuilder {
        SettingsBuilder::new()
            .app(self.app)
            .paths(self.paths)
            .data(self.data)
            .packager(self.packager)
            .docs(self.docs)
    }
}

/// Load a manifest from an explicit path.
pub fn load_manifest(path: &Path) -> Result<ProjectManifest> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let manifest: ProjectManifest = toml::from_str(&text)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    log::debug!("Loaded project manifest from {}", path.display());
    Ok(manifest)
}

/// Resolve the manifest for a project.
///
/// An explicit path must exist. Without one, `pyship.toml` in the project
/// root is used when present, and the built-in defaults otherwise.
pub fn discover_manifest(project_root: &Path, explicit: Option<&Path>) -> Result<ProjectManifest> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(BundlerError::Cli(CliError::InvalidArguments {
                reason: format!("Manifest not found: {}", path.display()),
            }));
        }
        return load_manifest(path);
    }

    let default_path = project_root.join(MANIFEST_FILE_NAME);
    if default_path.is_file() {
        load_manifest(&default_path)
    } else {
        log::debug!(
            "No {} in {}, using built-in defaults",
            MANIFEST_FILE_NAME,
            project_root.display()
        );
        Ok(ProjectManifest::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_manifest_keeps_defaults() {
        let manifest = ProjectManifest::parse(
            r#"
            [app]
            name = "app"
            entry_point = "app.py"

            [paths]
            dist_dir = "output"
            "#,
        )
        .unwrap();

        assert_eq!(manifest.app.name, "app");
        assert_eq!(manifest.paths.dist_dir, std::path::PathBuf::from("output"));
        assert_eq!(manifest.paths.build_dir, std::path::PathBuf::from("build"));
        assert_eq!(manifest.data.dir, "automated_model");
        assert!(manifest.packager.install_if_missing);
        assert!(!manifest.docs.requirements.is_empty());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = ProjectManifest::parse("[app]\nnmae = \"typo\"\n");
        assert!(matches!(result, Err(BundlerError::Toml(_))));
    }

    #[test]
    fn explicit_manifest_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");

        let result = discover_manifest(dir.path(), Some(&missing));
        assert!(matches!(
            result,
            Err(BundlerError::Cli(CliError::InvalidArguments { .. }))
        ));
    }

    #[test]
    fn discovers_manifest_in_project_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(MANIFEST_FILE_NAME),
            "[data]\ndir = \"auxiliary\"\nfiles = [\"a.csv\"]\n",
        )
        .unwrap();

        let manifest = discover_manifest(dir.path(), None).unwrap();
        assert_eq!(manifest.data.dir, "auxiliary");
        assert_eq!(manifest.data.files, vec!["a.csv".to_string()]);

        let empty = tempfile::tempdir().unwrap();
        let defaults = discover_manifest(empty.path(), None).unwrap();
        assert_eq!(defaults.app.name, "gempy_gui");
    }
}
