//! Application identity.

/// Application metadata and naming conventions.
///
/// The `name` drives every derived file name: the spec file is `<name>.spec`,
/// the executable is `<name><executable_suffix>` and the nested output layout
/// is `<dist_dir>/<name>/`.
///
/// # Example
///
/// ```toml
/// [app]
/// name = "gempy_gui"
/// entry_point = "gempy_gui_main.py"
/// product_name = "GemPy AI Geological Modeling Tool"
/// ```
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppSettings {
    /// Executable base name passed to PyInstaller.
    pub name: String,

    /// Entry script, relative to the project root.
    pub entry_point: String,

    /// Human-readable name used in the generated documents.
    pub product_name: String,

    /// Directory-name prefix accepted by the last-resort output scan.
    ///
    /// Default: the part of `name` before the first `_` or `-`
    pub output_prefix: Option<String>,

    /// Suffix appended to `name` for the executable file.
    ///
    /// Default: `.exe` on Windows, empty elsewhere
    pub executable_suffix: Option<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "gempy_gui".into(),
            entry_point: "gempy_gui_main.py".into(),
            product_name: "GemPy AI Geological Modeling Tool".into(),
            output_prefix: None,
            executable_suffix: None,
        }
    }
}
