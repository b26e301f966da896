//! Build-and-package pipeline for PyInstaller-frozen Python applications
//!
//! This library provides the two stages behind the `pyship` binary:
//! - the builder, which renders a PyInstaller spec, runs the packaging tool and
//!   locates the executable tree it produced
//! - the distribution assembler, which gathers the executable, the data
//!   templates and the user documents into one zip archive
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;
pub mod metadata;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
