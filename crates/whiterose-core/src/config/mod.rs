//! Configuration file model.
//!
//! A configuration file lists the repositories to clone and the
//! applications the development environment expects to find installed.

mod application;
mod file;
mod locate;
mod repository;

pub use application::ApplicationSpec;
pub use file::ConfigFile;
pub use locate::{CONFIG_FILE_VAR, ConfigLocator};
pub use repository::RepositorySpec;
