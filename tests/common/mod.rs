//! Shared helpers for pipeline integration tests.
//!
//! Each test gets a throwaway project whose `pyship.toml` points the packager
//! at a shell script, so builds run without Python or PyInstaller.

#![allow(dead_code)]

use pyship::bundler::Settings;
use pyship::metadata::discover_manifest;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Script name used as the packager command.
pub const FAKE_PACKAGER: &str = "fake_pyinstaller.sh";

/// Parses the PyInstaller arguments into `$SPEC`, `$DIST` and `$WORK`.
const ARG_PARSING: &str = r#"#!/bin/sh
SPEC="$1"
shift
while [ $# -gt 0 ]; do
  case "$1" in
    --distpath) DIST="$2"; shift ;;
    --workpath) WORK="$2"; shift ;;
  esac
  shift
done
"#;

/// Writes the executable where a one-folder build would.
pub const NESTED_BUILD: &str = r#"mkdir -p "$DIST/app"
printf 'binary' > "$DIST/app/app.exe"
"#;

/// Writes the executable directly under the output root.
pub const FLAT_BUILD: &str = r#"mkdir -p "$DIST"
printf 'binary' > "$DIST/app.exe"
"#;

/// Exits successfully without producing anything.
pub const EMPTY_BUILD: &str = "exit 0\n";

const MANIFEST: &str = r#"
[app]
name = "app"
entry_point = "app.py"
product_name = "Demo App"
executable_suffix = ".exe"

[paths]
dist_dir = "output"
archive_name = "demo.zip"

[data]
dir = "auxiliary"
files = ["a.csv", "b.csv"]

[packager]
command = ["sh", "fake_pyinstaller.sh"]
hidden_imports = ["numpy", "scipy.fft", "numpy"]

[docs]
requirements = ["numpy", "pandas"]
"#;

/// Throwaway project with an entry script, two data files and a fake packager.
pub struct TestProject {
    pub temp: TempDir,
}

impl TestProject {
    /// Project whose packager runs `body` after argument parsing.
    pub fn new(body: &str) -> Self {
        let project = Self {
            temp: TempDir::new().unwrap(),
        };
        project.write_file("app.py", "print('hello')\n");
        project.write_file("auxiliary/a.csv", "x,y\n1,2\n");
        project.write_file("auxiliary/b.csv", "x,y\n3,4\n");
        project.write_file("pyship.toml", MANIFEST);
        project.set_packager(body);
        project
    }

    /// Replace the fake packager's behavior.
    pub fn set_packager(&self, body: &str) {
        self.write_file(FAKE_PACKAGER, &format!("{ARG_PARSING}{body}"));
    }

    /// Replace `from` with `to` in `pyship.toml`.
    pub fn edit_manifest(&self, from: &str, to: &str) {
        let manifest = std::fs::read_to_string(self.path("pyship.toml")).unwrap();
        assert!(manifest.contains(from), "manifest has no {from:?}");
        self.write_file("pyship.toml", &manifest.replace(from, to));
    }

    /// Write a file relative to the project root.
    pub fn write_file(&self, relative_path: &str, content: &str) {
        let path = self.path(relative_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
    }

    /// Project root.
    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    /// Path relative to the project root.
    pub fn path(&self, relative_path: &str) -> PathBuf {
        self.temp.path().join(relative_path)
    }

    /// Settings loaded the way the CLI loads them.
    pub fn settings(&self) -> Settings {
        self.settings_with(false)
    }

    /// Settings with the intermediates flag set.
    pub fn settings_with(&self, keep_intermediates: bool) -> Settings {
        discover_manifest(self.root(), None)
            .unwrap()
            .into_builder()
            .project_root(self.root())
            .keep_intermediates(keep_intermediates)
            .build()
            .unwrap()
    }
}

/// Sorted file names directly inside `dir`.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
