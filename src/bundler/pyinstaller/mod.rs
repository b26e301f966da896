//! PyInstaller integration.
//!
//! # Module Organization
//!
//! - `template` - spec file template
//! - `toolset` - interpreter and PyInstaller location
//! - `script` - spec generation from settings
//! - `build` - PyInstaller execution and failure classification
//! - `utils` - Python literals and diagnostic parsing

pub mod build;
pub mod script;
mod template;
pub mod toolset;
pub mod utils;

pub use build::{PackagerOutput, locked_executable, remove_stale_executables, run_pyinstaller};
pub use script::{generate_spec, render_spec};
pub use toolset::{PackagerCommand, get_pyinstaller};
