//! Whiterose Core - Domain types
//!
//! This crate provides the foundational types shared by the Whiterose
//! workspace: the configuration file model (repositories and
//! prerequisite applications), JSON/YAML decoding, configuration file
//! discovery, and the [`Environment`] snapshot that components receive
//! instead of reading process variables themselves.

pub mod config;
pub mod env;
pub mod error;
pub mod format;

pub use config::{ApplicationSpec, ConfigFile, ConfigLocator, RepositorySpec};
pub use env::Environment;
pub use error::{Result, WhiteroseError};
pub use format::{ConfigFormat, FormatParser};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
