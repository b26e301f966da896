//! pyship - freeze a Python GUI application and assemble its distribution.
//!
//! This binary drives PyInstaller against a generated spec file and packs the
//! resulting executable, its data templates and the user documents into a
//! single zip archive.

use std::process;

#[tokio::main]
async fn main() {
    // Run CLI and get exit code (logging is initialized once args are parsed)
    let exit_code = match pyship::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            for suggestion in e.recovery_suggestions() {
                eprintln!("  hint: {}", suggestion);
            }
            if e.is_recoverable() {
                eprintln!("  hint: the same command can be rerun as-is once resolved");
            }
            1
        }
    };

    process::exit(exit_code);
}
