//! Docker CLI operations.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::process::Command;
use tracing::{debug, info};

use crate::{BuildOptions, DockerError, ImageRef};

/// Runs Docker operations for one working directory.
#[derive(Debug, Clone)]
pub struct DockerManager {
    work_dir: PathBuf,
    program: PathBuf,
}

impl DockerManager {
    /// Creates a manager using the `docker` binary on `PATH`.
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
            program: PathBuf::from("docker"),
        }
    }

    /// Builder-style method to use another docker executable.
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Finds `Dockerfile` and `Dockerfile.*` files below the working directory.
    ///
    /// Names match case-insensitively; results are sorted.
    pub async fn detect_dockerfiles(&self) -> Result<Vec<PathBuf>, DockerError> {
        let work_dir = self.work_dir.clone();

        tokio::task::spawn_blocking(move || find_dockerfiles(&work_dir))
            .await
            .map_err(|e| DockerError::Search(format!("Task failed: {}", e)))?
    }

    /// Builds an image and returns how long the build took.
    pub async fn build(&self, options: &BuildOptions) -> Result<Duration, DockerError> {
        info!(
            "Building Docker image '{}' from Dockerfile at '{}'",
            options.image(),
            options.dockerfile().display()
        );

        let started = Instant::now();
        self.run(&options.args()).await?;
        let elapsed = started.elapsed();

        info!(
            "Docker image '{}' built successfully in {:?}",
            options.image(),
            elapsed
        );
        Ok(elapsed)
    }

    /// Deletes an image.
    pub async fn delete(&self, image: &ImageRef) -> Result<(), DockerError> {
        info!("Deleting Docker image '{}'", image);
        self.run(&["rmi".to_string(), image.to_string()]).await
    }

    async fn run(&self, args: &[String]) -> Result<(), DockerError> {
        let program = self.program.display().to_string();
        let command = format!("{} {}", program, args.join(" "));
        info!("Running command: {}", command);

        let status = Command::new(&self.program)
            .args(args)
            .current_dir(&self.work_dir)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .status()
            .await
            .map_err(|source| DockerError::Spawn { program, source })?;

        if status.success() {
            Ok(())
        } else {
            Err(DockerError::CommandFailed {
                command,
                status: status.to_string(),
            })
        }
    }
}

fn find_dockerfiles(work_dir: &Path) -> Result<Vec<PathBuf>, DockerError> {
    let pattern = format!(
        "{}/**/*",
        glob::Pattern::escape(&work_dir.to_string_lossy())
    );
    let entries = glob::glob(&pattern).map_err(|e| DockerError::Search(e.to_string()))?;

    let mut found = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| DockerError::Search(e.to_string()))?;
        if path.is_file() && is_dockerfile(&path) {
            debug!("Found Dockerfile {}", path.display());
            found.push(path);
        }
    }

    if found.is_empty() {
        return Err(DockerError::NoDockerfile {
            dir: work_dir.to_path_buf(),
        });
    }
    found.sort();
    Ok(found)
}

fn is_dockerfile(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .is_some_and(|name| name == "dockerfile" || name.starts_with("dockerfile."))
}
