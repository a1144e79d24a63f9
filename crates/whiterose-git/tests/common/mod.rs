//! Test helpers for whiterose-git.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use whiterose_git::{BranchName, CancelToken, Credentials, GitTransport, SyncError};

/// A transport operation observed by [`FakeTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Clone { url: String, basic: bool },
    HasBranch(String),
    Checkout(String),
    CreateBranch(String),
}

#[derive(Debug, Default)]
struct State {
    remote_branches: HashSet<String>,
    clone_failures: HashMap<String, String>,
    blocking_urls: HashSet<String>,
    fail_checkout: bool,
    fail_create_branch: bool,
    current_branch: HashMap<String, String>,
    calls: Vec<Call>,
}

/// In-memory [`GitTransport`].
///
/// A successful clone creates the target directory on disk so the
/// engine's pre-check behaves as it would against real Git. Clones
/// start on `main`.
#[derive(Debug, Clone, Default)]
pub struct FakeTransport {
    state: Arc<Mutex<State>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remote branches every cloned repository has.
    pub fn with_remote_branch(self, branch: &str) -> Self {
        self.state.lock().remote_branches.insert(branch.to_string());
        self
    }

    /// Makes the clone of `url` fail with `reason`.
    pub fn failing_clone(self, url: &str, reason: &str) -> Self {
        self.state
            .lock()
            .clone_failures
            .insert(url.to_string(), reason.to_string());
        self
    }

    /// Makes the clone of `url` wait until the sync is cancelled.
    pub fn blocking_clone(self, url: &str) -> Self {
        self.state.lock().blocking_urls.insert(url.to_string());
        self
    }

    pub fn failing_checkout(self) -> Self {
        self.state.lock().fail_checkout = true;
        self
    }

    pub fn failing_create_branch(self) -> Self {
        self.state.lock().fail_create_branch = true;
        self
    }

    /// Returns every call made so far.
    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().calls.clone()
    }

    /// Returns the urls that were cloned, in order.
    pub fn cloned_urls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Clone { url, .. } => Some(url),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.state.lock().calls.push(call);
    }

    fn key(directory: &Path) -> String {
        directory.to_string_lossy().into_owned()
    }
}

#[async_trait]
impl GitTransport for FakeTransport {
    async fn clone_repository(
        &self,
        url: &str,
        directory: &Path,
        credentials: &Credentials,
        cancel: &CancelToken,
    ) -> Result<(), SyncError> {
        self.record(Call::Clone {
            url: url.to_string(),
            basic: credentials.is_basic(),
        });

        let (failure, blocking) = {
            let state = self.state.lock();
            (
                state.clone_failures.get(url).cloned(),
                state.blocking_urls.contains(url),
            )
        };

        if blocking {
            cancel.cancelled().await;
            return Err(SyncError::Cancelled);
        }
        if let Some(reason) = failure {
            return Err(SyncError::clone_failed(url, reason));
        }

        tokio::fs::create_dir_all(directory).await?;
        self.state
            .lock()
            .current_branch
            .insert(Self::key(directory), "main".to_string());
        Ok(())
    }

    async fn has_branch(&self, _directory: &Path, branch: &BranchName) -> Result<bool, SyncError> {
        self.record(Call::HasBranch(branch.to_string()));
        Ok(self.state.lock().remote_branches.contains(branch.as_str()))
    }

    async fn checkout(&self, directory: &Path, branch: &BranchName) -> Result<(), SyncError> {
        self.record(Call::Checkout(branch.to_string()));
        let mut state = self.state.lock();
        if state.fail_checkout {
            return Err(SyncError::git("error: pathspec did not match"));
        }
        state
            .current_branch
            .insert(Self::key(directory), branch.to_string());
        Ok(())
    }

    async fn create_branch(&self, directory: &Path, branch: &BranchName) -> Result<(), SyncError> {
        self.record(Call::CreateBranch(branch.to_string()));
        let mut state = self.state.lock();
        if state.fail_create_branch {
            return Err(SyncError::git("fatal: cannot lock ref"));
        }
        state
            .current_branch
            .insert(Self::key(directory), branch.to_string());
        Ok(())
    }

    async fn current_branch(&self, directory: &Path) -> Result<Option<String>, SyncError> {
        Ok(self
            .state
            .lock()
            .current_branch
            .get(&Self::key(directory))
            .cloned())
    }

    async fn head_commit(&self, _directory: &Path) -> Result<String, SyncError> {
        Ok("0123456789abcdef0123456789abcdef01234567".to_string())
    }

    fn name(&self) -> &str {
        "fake"
    }
}
