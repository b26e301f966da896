//! PyInstaller utility functions.
//!
//! Helpers for Python literal formatting and for reading the diagnostics
//! PyInstaller leaves behind.

use std::path::Path;

/// Diagnostics PyInstaller prints when the output executable is held open.
///
/// WinError 32 is a sharing violation, WinError 5 an access denial on the
/// file a running instance keeps mapped.
const LOCK_SIGNATURES: &[&str] = &["PermissionError: [WinError 32]", "PermissionError: [WinError 5]"];

/// Render a string as a single-quoted Python literal.
pub fn python_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('\'');
    for c in value.chars() {
        match c {
            '\\' => literal.push_str("\\\\"),
            '\'' => literal.push_str("\\'"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            c => literal.push(c),
        }
    }
    literal.push('\'');
    literal
}

/// Render a path as a Python literal with `/` separators.
pub fn python_path_literal(path: &Path) -> String {
    python_literal(&path.to_string_lossy().replace('\\', "/"))
}

/// Render a boolean as a Python literal.
pub fn python_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// Find the line of `diagnostics` showing the executable is locked.
pub fn find_lock_signature(diagnostics: &str) -> Option<&str> {
    diagnostics
        .lines()
        .find(|line| LOCK_SIGNATURES.iter().any(|sig| line.contains(sig)))
        .map(str::trim)
}

/// Extract module names from `missing module named ...` lines of a
/// PyInstaller warn file.
///
/// Lines look like `missing module named 'scipy.fft' - imported by ...` or
/// `missing module named pyimod02 - imported by ...`.
pub fn parse_missing_modules(warn_file: &str) -> Vec<String> {
    const MARKER: &str = "missing module named ";

    warn_file
        .lines()
        .filter_map(|line| {
            let rest = &line[line.find(MARKER)? + MARKER.len()..];
            let name = rest
                .split_whitespace()
                .next()?
                .trim_matches(|c| c == '\'' || c == '"');
            (!name.is_empty()).then(|| name.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals_escape_quotes_and_backslashes() {
        assert_eq!(python_literal("app.py"), "'app.py'");
        assert_eq!(python_literal(r"it's C:\x"), r"'it\'s C:\\x'");
        assert_eq!(
            python_path_literal(Path::new(r"automated_model\a.csv")),
            "'automated_model/a.csv'"
        );
        assert_eq!(python_bool(false), "False");
    }

    #[test]
    fn detects_locked_executable() {
        let stderr = "INFO: Building EXE\n\
                      PermissionError: [WinError 32] The process cannot access the file \
                      because it is being used by another process: 'dist\\\\gempy_gui.exe'\n";
        let line = find_lock_signature(stderr).unwrap();
        assert!(line.starts_with("PermissionError: [WinError 32]"));

        assert!(find_lock_signature("PermissionError: [Errno 13] denied").is_none());
        assert!(find_lock_signature("").is_none());
    }

    #[test]
    fn parses_quoted_and_bare_missing_modules() {
        let warn = "\
This file lists modules PyInstaller was not able to find.

missing module named 'scipy.fft' - imported by gempy (top-level)
missing module named pwd - imported by posixpath (delayed, conditional)
excluded module named PyQt5 - imported by matplotlib
";
        assert_eq!(parse_missing_modules(warn), vec!["scipy.fft", "pwd"]);
    }
}
