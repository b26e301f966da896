//! PyInstaller spec generation.
//!
//! Renders [`SPEC_TEMPLATE`](super::template::SPEC_TEMPLATE) from the settings:
//! entry point, data files, hidden imports, excludes and EXE options.

use super::{template::SPEC_TEMPLATE, utils};
use crate::bundler::{
    error::{Error, ErrorExt, Result},
    settings::Settings,
};
use handlebars::Handlebars;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct DataEntry {
    source: String,
    target: String,
}

#[derive(Serialize)]
struct SpecContext {
    entry_point: String,
    name: String,
    datas: Vec<DataEntry>,
    hidden_imports: Vec<String>,
    hooks_path: Vec<String>,
    excludes: Vec<String>,
    console: &'static str,
    upx: &'static str,
    icon: String,
}

/// Render the spec file content.
///
/// Each data file becomes a `(source, target)` pair whose target is the data
/// directory (plus any sub-directory of the entry), so the frozen application
/// finds its templates under the same relative path as in the project.
pub fn render_spec(settings: &Settings) -> Result<String> {
    let data_dir = Path::new(settings.data_dir_name());
    let datas = settings
        .data_files()
        .iter()
        .map(|file| {
            let source = data_dir.join(file);
            let target = source
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| data_dir.to_path_buf());
            DataEntry {
                source: utils::python_path_literal(&source),
                target: utils::python_path_literal(&target),
            }
        })
        .collect();

    let packager = settings.packager();
    let context = SpecContext {
        entry_point: utils::python_path_literal(Path::new(settings.entry_point_relative())),
        name: utils::python_literal(settings.app_name()),
        datas,
        hidden_imports: settings
            .hidden_imports()
            .into_iter()
            .map(utils::python_literal)
            .collect(),
        hooks_path: packager
            .hooks_path
            .iter()
            .map(|p| utils::python_literal(p))
            .collect(),
        excludes: packager
            .excludes
            .iter()
            .map(|m| utils::python_literal(m))
            .collect(),
        console: utils::python_bool(packager.console),
        upx: utils::python_bool(packager.upx),
        icon: packager
            .icon
            .as_deref()
            .map(utils::python_path_literal)
            .unwrap_or_else(|| "None".to_string()),
    };

    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars
        .register_template_string("pyinstaller.spec", SPEC_TEMPLATE)
        .map_err(Box::new)?;

    Ok(handlebars.render("pyinstaller.spec", &context)?)
}

/// Generate the spec file next to the entry point.
///
/// Fails with [`Error::EntryPointMissing`] before writing anything when the
/// entry script does not exist.
pub async fn generate_spec(settings: &Settings) -> Result<PathBuf> {
    let entry_point = settings.entry_point();
    if !entry_point.is_file() {
        return Err(Error::EntryPointMissing(entry_point));
    }

    let content = render_spec(settings)?;
    let spec_path = settings.spec_path();
    tokio::fs::write(&spec_path, content)
        .await
        .fs_context("writing PyInstaller spec", &spec_path)?;

    log::info!("Wrote PyInstaller spec: {}", spec_path.display());
    Ok(spec_path)
}
