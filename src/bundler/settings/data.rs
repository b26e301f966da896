//! Auxiliary data set shipped next to the executable.

/// Data templates the application loads at runtime.
///
/// `files` are names inside `dir`. The same list feeds the spec `datas`, the
/// copy into the executable tree and the distribution fallback, so all three
/// agree on which files exist and where they land.
///
/// # Example
///
/// ```toml
/// [data]
/// dir = "automated_model"
/// files = ["points_template.csv", "gui_config.json"]
/// ```
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataSettings {
    /// Directory name, both in the project and in every output tree.
    pub dir: String,

    /// File names relative to `dir`.
    pub files: Vec<String>,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            dir: "automated_model".into(),
            files: [
                "orientations_template.csv",
                "points_template.csv",
                "series_template.csv",
                "structure_template.csv",
                "onlap_orientations.csv",
                "onlap_points.csv",
                "onlap_series.csv",
                "onlap_structure.csv",
                "gui_config.json",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}
