//! Build and distribution pipeline.
//!
//! The pipeline has two stages that only communicate through the filesystem:
//!
//! 1. [`Bundler::build`] renders the PyInstaller spec, runs the packaging tool,
//!    locates the executable tree and copies the data templates next to it.
//! 2. [`distribution::assemble`] copies the executable and data into the
//!    distribution directory, writes the user documents and zips everything.
//!
//! Both stages read the same [`Settings`], so the data file list and the
//! conventional names cannot drift between them.

pub mod builder;
pub mod data;
pub mod distribution;
pub mod error;
pub mod pyinstaller;
pub mod settings;
pub mod utils;

pub use builder::{BuildOutput, Bundler, LocateStrategy, LocatedOutput, OutputLocator};
pub use distribution::{DataSource, DistributionArtifact};
pub use error::{Error, Result};
pub use settings::{
    AppSettings, DataSettings, DocumentSettings, PackagerSettings, PathSettings, Settings,
    SettingsBuilder,
};
