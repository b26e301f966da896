//! Configuration structures for the build and distribution stages.
//!
//! Every section maps to a table of `pyship.toml`. Each field has a default,
//! so an empty manifest (or none at all) reproduces the built-in conventions.

mod app;
mod builder;
mod core;
mod data;
mod docs;
mod packager;
mod paths;

// Re-export all public types
pub use app::AppSettings;
pub use builder::SettingsBuilder;
pub use core::Settings;
pub use data::DataSettings;
pub use docs::DocumentSettings;
pub use packager::PackagerSettings;
pub use paths::PathSettings;
