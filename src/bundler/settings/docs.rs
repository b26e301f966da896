//! User documents written into the distribution.

use std::path::PathBuf;

/// Content of the generated documents.
///
/// The texts are data, not logic: the built-in guides can be replaced by
/// files whose content is copied verbatim.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocumentSettings {
    /// Packages listed in `requirements.txt`, one per line.
    pub requirements: Vec<String>,

    /// Replacement for the built-in `INSTALLATION_INSTRUCTIONS.txt`.
    pub installation_guide: Option<PathBuf>,

    /// Replacement for the built-in `QUICK_START.txt`.
    pub quick_start: Option<PathBuf>,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            requirements: [
                "gempy",
                "gempy_viewer",
                "pandas",
                "pyvista",
                "matplotlib",
                "matplotlib-base",
                "PyQt6",
                "numpy",
                "torch",
                "openai",
                "pymupdf",
                "python-docx",
                "httpx[socks]",
                "openpyxl",
                "requests",
                "scipy",
                "fitz",
                "PyMuPDF",
                "pdfplumber",
                "Pillow",
                "pytesseract",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            installation_guide: None,
            quick_start: None,
        }
    }
}
