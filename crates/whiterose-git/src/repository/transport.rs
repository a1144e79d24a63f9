//! The Git transport seam.

use std::path::Path;

use async_trait::async_trait;

use super::BranchName;
use crate::credentials::Credentials;
use crate::error::SyncError;
use crate::sync::CancelToken;

/// Everything the clone engine needs from Git.
///
/// The engine owns the protocol (pre-check, clone, branch fallback);
/// implementors only perform the individual operations.
///
/// # Implementors
///
/// - `SystemGit` - `git` CLI for clone and checkout, `gix` for reads
#[async_trait]
pub trait GitTransport: Send + Sync {
    /// Clones `url` into `directory` with the given credentials.
    ///
    /// `directory` exists and is empty when this is called. It belongs to
    /// the caller: implementations never remove it, even on failure. Must
    /// return [`SyncError::Cancelled`] promptly once `cancel` fires.
    async fn clone_repository(
        &self,
        url: &str,
        directory: &Path,
        credentials: &Credentials,
        cancel: &CancelToken,
    ) -> Result<(), SyncError>;

    /// Returns true if `branch` exists locally or as `origin/<branch>`.
    async fn has_branch(&self, directory: &Path, branch: &BranchName) -> Result<bool, SyncError>;

    /// Checks out an existing branch, creating the local tracking branch if needed.
    async fn checkout(&self, directory: &Path, branch: &BranchName) -> Result<(), SyncError>;

    /// Creates `branch` at the current HEAD and checks it out.
    async fn create_branch(&self, directory: &Path, branch: &BranchName)
    -> Result<(), SyncError>;

    /// Returns the short name of the checked out branch, or `None` on a detached HEAD.
    async fn current_branch(&self, directory: &Path) -> Result<Option<String>, SyncError>;

    /// Returns the HEAD commit id.
    async fn head_commit(&self, directory: &Path) -> Result<String, SyncError>;

    /// Returns the name of this transport for logging.
    fn name(&self) -> &str;
}
