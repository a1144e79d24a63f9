use std::path::PathBuf;

/// Errors from Docker operations.
#[derive(Debug, thiserror::Error)]
pub enum DockerError {
    /// No Dockerfile was found below the working directory.
    #[error("no Dockerfile found in directory {}", dir.display())]
    NoDockerfile { dir: PathBuf },

    /// The image reference is empty, lacks a tag or contains spaces.
    #[error("invalid docker image reference '{reference}': {reason}")]
    InvalidImage { reference: String, reason: String },

    /// A build argument key is empty or made only of punctuation.
    #[error("invalid build arg key '{0}'")]
    InvalidBuildArg(String),

    /// The Dockerfile search failed.
    #[error("failed to search for Dockerfiles: {0}")]
    Search(String),

    /// The docker executable could not be started.
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// docker ran and exited unsuccessfully.
    #[error("{command} failed with {status}")]
    CommandFailed { command: String, status: String },
}

impl DockerError {
    /// Creates a new invalid image error.
    pub fn invalid_image(reference: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidImage {
            reference: reference.into(),
            reason: reason.into(),
        }
    }
}
