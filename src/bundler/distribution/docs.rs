//! User documents shipped with the distribution.

use super::templates::{INSTALLATION_TEMPLATE, QUICK_START_TEMPLATE};
use crate::bundler::{Result, Settings, utils::fs};
use handlebars::Handlebars;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const REQUIREMENTS_FILE: &str = "requirements.txt";
pub const INSTALLATION_FILE: &str = "INSTALLATION_INSTRUCTIONS.txt";
pub const QUICK_START_FILE: &str = "QUICK_START.txt";

#[derive(Serialize)]
struct DocContext<'a> {
    title: String,
    product_name: &'a str,
    app_name: &'a str,
    executable: String,
    archive_name: String,
    data_dir: &'a str,
}

impl<'a> DocContext<'a> {
    fn new(settings: &'a Settings) -> Self {
        Self {
            title: settings.product_name().to_uppercase(),
            product_name: settings.product_name(),
            app_name: settings.app_name(),
            executable: settings.executable_name(),
            archive_name: settings
                .archive_path()
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            data_dir: settings.data_dir_name(),
        }
    }
}

/// Dependency manifest: `#` header, then one package per line.
pub fn render_requirements(settings: &Settings) -> String {
    let mut content = format!(
        "# {} dependencies\n# Install using: pip install -r {}\n\n",
        settings.product_name(),
        REQUIREMENTS_FILE
    );
    for package in &settings.docs().requirements {
        content.push_str(package);
        content.push('\n');
    }
    content
}

fn render(name: &str, template: &str, settings: &Settings) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars
        .register_template_string(name, template)
        .map_err(Box::new)?;
    Ok(handlebars.render(name, &DocContext::new(settings))?)
}

/// Built-in installation guide.
pub fn render_installation_guide(settings: &Settings) -> Result<String> {
    render(INSTALLATION_FILE, INSTALLATION_TEMPLATE, settings)
}

/// Built-in quick-start guide.
pub fn render_quick_start(settings: &Settings) -> Result<String> {
    render(QUICK_START_FILE, QUICK_START_TEMPLATE, settings)
}

/// Write a rendered document, or copy `override_file` verbatim when set.
async fn write_document(
    dest: PathBuf,
    override_file: Option<&Path>,
    settings: &Settings,
    rendered: impl FnOnce(&Settings) -> Result<String>,
) -> Result<PathBuf> {
    match override_file {
        Some(file) => {
            let source = settings.project_root().join(file);
            fs::copy_file(&source, &dest).await?;
        }
        None => fs::write_text(&dest, &rendered(settings)?).await?,
    }
    log::info!("Created {}", dest.display());
    Ok(dest)
}

/// Write the installation guide into `dir`.
pub async fn write_installation_guide(settings: &Settings, dir: &Path) -> Result<PathBuf> {
    write_document(
        dir.join(INSTALLATION_FILE),
        settings.docs().installation_guide.as_deref(),
        settings,
        render_installation_guide,
    )
    .await
}

/// Write the dependency manifest and the quick-start guide into `dir`.
pub async fn write_requirements_and_quick_start(
    settings: &Settings,
    dir: &Path,
) -> Result<(PathBuf, PathBuf)> {
    let requirements = dir.join(REQUIREMENTS_FILE);
    fs::write_text(&requirements, &render_requirements(settings)).await?;
    log::info!("Created {}", requirements.display());

    let quick_start = write_document(
        dir.join(QUICK_START_FILE),
        settings.docs().quick_start.as_deref(),
        settings,
        render_quick_start,
    )
    .await?;

    Ok((requirements, quick_start))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::{AppSettings, DocumentSettings, SettingsBuilder};

    fn settings(root: &Path, docs: DocumentSettings) -> Settings {
        SettingsBuilder::new()
            .project_root(root)
            .app(AppSettings {
                name: "app".into(),
                product_name: "Demo Tool".into(),
                executable_suffix: Some(".exe".into()),
                ..Default::default()
            })
            .docs(docs)
            .build()
            .unwrap()
    }

    #[test]
    fn requirements_have_header_and_one_package_per_line() {
        let tmp = tempfile::tempdir().unwrap();
        let settings = settings(
            tmp.path(),
            DocumentSettings {
                requirements: vec!["numpy".into(), "httpx[socks]".into()],
                ..Default::default()
            },
        );

        let content = render_requirements(&settings);
        let packages: Vec<&str> = content
            .lines()
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .collect();

        assert!(content.starts_with("# Demo Tool dependencies"));
        assert_eq!(packages, vec!["numpy", "httpx[socks]"]);
    }

    #[test]
    fn guides_mention_product_and_executable() {
        let tmp = tempfile::tempdir().unwrap();
        let settings = settings(tmp.path(), DocumentSettings::default());

        let install = render_installation_guide(&settings).unwrap();
        let quick = render_quick_start(&settings).unwrap();

        assert!(install.starts_with("DEMO TOOL INSTALLATION INSTRUCTIONS"));
        assert!(install.contains("app.exe"));
        assert!(quick.starts_with("Demo Tool Quick Start Guide"));
        assert!(quick.contains("double-clicking app.exe"));
    }

    #[tokio::test]
    async fn override_file_is_copied_verbatim() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("guide.txt"), "custom {{not a template}}").unwrap();
        let settings = settings(
            tmp.path(),
            DocumentSettings {
                installation_guide: Some("guide.txt".into()),
                ..Default::default()
            },
        );
        let out = tmp.path().join("out");
        std::fs::create_dir_all(&out).unwrap();

        let path = write_installation_guide(&settings, &out).await.unwrap();

        assert_eq!(
            std::fs::read_to_string(path).unwrap(),
            "custom {{not a template}}"
        );
    }
}
