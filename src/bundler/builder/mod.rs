//! Build orchestration and coordination.
//!
//! This module provides the [`Bundler`] that drives PyInstaller and turns its
//! output into a verified executable tree.
//!
//! # Module Organization
//!
//! - [`checksum`] - SHA-256 checksum calculation for artifacts
//! - [`locate`] - ordered strategies for finding PyInstaller's output
//! - `orchestrator` - Main [`Bundler`] struct and build operations
//! - `tool_detection` - Python interpreter discovery
//! - [`verify`] - post-build checks and hidden-import audit

pub mod checksum;
pub mod locate;
mod orchestrator;
pub(crate) mod tool_detection;
pub mod verify;

pub use locate::{LocateStrategy, LocatedOutput, OutputLocator};
pub use orchestrator::{BuildOutput, Bundler};
