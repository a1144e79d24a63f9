use std::path::PathBuf;

use whiterose_core::Environment;

use crate::{BuildOptions, DockerError, ImageRef};

/// Directory searched for a Dockerfile (defaults to `PWD`).
pub const DOCKERFILE_PATH_VAR: &str = "DOCKERFILE_PATH";
/// Image reference to build or delete.
pub const IMAGE_NAME_VAR: &str = "IMAGE_NAME";
/// Value of the `IMAGE_VERSION` build argument.
pub const IMAGE_VERSION_VAR: &str = "IMAGE_VERSION";
/// Multi-stage build target.
pub const BUILD_TARGET_VAR: &str = "BUILD_TARGET";

/// Docker settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockerSettings {
    pub work_dir: PathBuf,
    pub image: String,
    pub image_version: String,
    pub target: String,
}

impl DockerSettings {
    pub fn from_env(env: &Environment) -> Self {
        let work_dir = env
            .get(DOCKERFILE_PATH_VAR)
            .or_else(|| env.get("PWD"))
            .unwrap_or(".");

        Self {
            work_dir: PathBuf::from(work_dir),
            image: env.get_or_default(IMAGE_NAME_VAR, "my_app:latest"),
            image_version: env.get_or_default(IMAGE_VERSION_VAR, "latest"),
            target: env.get_or_default(BUILD_TARGET_VAR, "development"),
        }
    }

    /// Returns the image reference.
    pub fn image_ref(&self) -> Result<ImageRef, DockerError> {
        ImageRef::parse(&self.image)
    }

    /// Builds the options for `dockerfile`, using the working directory as context.
    pub fn build_options(&self, dockerfile: impl Into<PathBuf>) -> Result<BuildOptions, DockerError> {
        Ok(
            BuildOptions::new(self.image_ref()?, dockerfile, &self.work_dir)
                .with_build_arg("IMAGE_VERSION", &self.image_version)?
                .with_target(&self.target),
        )
    }
}
