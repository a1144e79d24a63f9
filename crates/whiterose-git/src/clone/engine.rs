//! Clone engine implementation.

use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info, warn};
use whiterose_core::{Environment, RepositorySpec};

use super::{CloneResult, ResolvedBranch};
use crate::credentials::Credentials;
use crate::error::SyncError;
use crate::repository::{BranchName, CloneOptions, GitTransport, SystemGit};
use crate::sync::CancelToken;

/// Clones one repository and resolves the branch its working tree ends up on.
///
/// The clone is create-only: an existing target directory is never
/// touched. After a successful clone the preferred branch is checked out
/// when the remote has it; otherwise a personal `<prefix>/<user>` branch
/// is created at HEAD.
pub struct CloneEngine<T = SystemGit> {
    transport: T,
    env: Environment,
    options: CloneOptions,
}

impl CloneEngine<SystemGit> {
    /// Creates an engine backed by the system `git` binary.
    pub fn with_system_git(env: Environment, options: CloneOptions) -> Self {
        let transport = SystemGit::new(&options);
        Self::new(transport, env, options)
    }
}

impl<T: GitTransport> CloneEngine<T> {
    /// Creates an engine over an arbitrary transport.
    pub fn new(transport: T, env: Environment, options: CloneOptions) -> Self {
        Self {
            transport,
            env,
            options,
        }
    }

    /// Returns the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns the options.
    pub fn options(&self) -> &CloneOptions {
        &self.options
    }

    /// Runs the clone protocol and wraps the outcome for the orchestrator.
    pub async fn clone(
        &self,
        spec: &RepositorySpec,
        credentials: &Credentials,
        cancel: &CancelToken,
    ) -> CloneResult {
        match self.try_clone(spec, credentials, cancel).await {
            Ok(branch) => CloneResult::success(spec.clone(), branch),
            Err(error) => CloneResult::failure(spec.clone(), error),
        }
    }

    /// Runs the clone protocol.
    ///
    /// The target directory is created here, atomically, so a directory
    /// that appears concurrently is reported as existing rather than
    /// cloned into. Only a directory created by this call is ever removed.
    ///
    /// # Errors
    ///
    /// - `SyncError::DirectoryExists` if the target is already present (nothing is written)
    /// - `SyncError::Clone`, `Timeout` or `Cancelled` if the transport fails
    /// - `SyncError::BranchCreate` if the fallback branch cannot be created; the clone stays
    pub async fn try_clone(
        &self,
        spec: &RepositorySpec,
        credentials: &Credentials,
        cancel: &CancelToken,
    ) -> Result<ResolvedBranch, SyncError> {
        if cancel.is_cancelled() {
            return Err(SyncError::Cancelled);
        }

        let target = spec.target_path();
        create_target(target).await?;

        info!("Cloning repository via {}", self.transport.name());
        if let Err(e) = self
            .transport
            .clone_repository(&spec.url, target, credentials, cancel)
            .await
        {
            remove_created(target).await;
            return Err(e);
        }

        match self.transport.head_commit(target).await {
            Ok(commit) => debug!("Cloned {} at commit {}", spec.url, commit),
            Err(e) => debug!("Cloned {}, HEAD unreadable: {}", spec.url, e),
        }

        self.resolve_branch(target).await
    }

    /// Checks out the preferred branch, or creates the personal fallback.
    async fn resolve_branch(&self, directory: &Path) -> Result<ResolvedBranch, SyncError> {
        let preferred = BranchName::new(self.options.preferred_branch()).map_err(|reason| {
            SyncError::git(format!(
                "invalid preferred branch {}: {}",
                self.options.preferred_branch(),
                reason
            ))
        })?;

        if self.transport.has_branch(directory, &preferred).await? {
            match self.transport.checkout(directory, &preferred).await {
                Ok(()) => {
                    info!("Checked out to {} branch", preferred);
                    return Ok(ResolvedBranch::Preferred(preferred.to_string()));
                },
                Err(e) => warn!("Checkout of {} failed, using fallback: {}", preferred, e),
            }
        }

        let prefix = self.options.fallback_prefix();
        let user = self.env.current_user().ok_or_else(|| {
            SyncError::branch_create(
                format!("{}/<user>", prefix),
                "unable to determine the current user",
            )
        })?;

        let fallback = BranchName::fallback(prefix, user)
            .map_err(|reason| SyncError::branch_create(format!("{}/{}", prefix, user), reason))?;

        self.transport
            .create_branch(directory, &fallback)
            .await
            .map_err(|e| SyncError::branch_create(fallback.as_str(), e.to_string()))?;

        info!("Created and checked out to branch {}", fallback);
        Ok(ResolvedBranch::Fallback(fallback.to_string()))
    }
}

/// Creates the empty clone target; an existing path is never reused.
async fn create_target(target: &Path) -> Result<(), SyncError> {
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    match tokio::fs::create_dir(target).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Err(SyncError::DirectoryExists {
            path: target.to_path_buf(),
        }),
        Err(e) => Err(e.into()),
    }
}

/// Removes a target created by [`create_target`] after a failed clone.
async fn remove_created(target: &Path) {
    debug!("Removing partial clone at {}", target.display());
    if let Err(e) = tokio::fs::remove_dir_all(target).await {
        warn!("Failed to remove partial clone at {}: {}", target.display(), e);
    }
}

impl<T: GitTransport> std::fmt::Debug for CloneEngine<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloneEngine")
            .field("transport", &self.transport.name())
            .field("options", &self.options)
            .finish()
    }
}
