//! # Whiterose Docker
//!
//! Finds the Dockerfile of a project and builds or deletes its image with
//! the `docker` CLI. Image name, build target and the `IMAGE_VERSION`
//! build argument come from the environment.

mod error;
mod image;
mod manager;
mod settings;

pub use error::DockerError;
pub use image::{BuildOptions, ImageRef};
pub use manager::DockerManager;
pub use settings::DockerSettings;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
