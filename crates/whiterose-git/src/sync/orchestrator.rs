//! Sequential sync of a repository list.

use std::time::Instant;

use tracing::{Instrument, error, info, info_span, warn};
use whiterose_core::{Environment, RepositorySpec};

use super::{CancelToken, SyncReport};
use crate::clone::{CloneEngine, CloneResult};
use crate::credentials::CredentialResolver;
use crate::error::SyncError;
use crate::repository::{CloneOptions, GitTransport, SystemGit};

/// What to do after a repository fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Record the failure and move on to the next repository.
    #[default]
    Continue,
    /// Stop after the first failure; later repositories are not reported.
    StopOnFirstFailure,
}

/// Runs the clone protocol for every repository in order.
///
/// Repositories are processed one at a time; each one's outcome is
/// recorded in the returned [`SyncReport`] in input order. A failed
/// repository never aborts the batch unless the
/// [`FailurePolicy::StopOnFirstFailure`] policy is selected.
pub struct SyncOrchestrator<T = SystemGit> {
    resolver: CredentialResolver,
    engine: CloneEngine<T>,
    policy: FailurePolicy,
    cancel: CancelToken,
}

impl SyncOrchestrator<SystemGit> {
    /// Creates an orchestrator backed by the system `git` binary.
    pub fn with_system_git(env: Environment, options: CloneOptions) -> Self {
        let resolver = CredentialResolver::new(env.clone());
        let engine = CloneEngine::with_system_git(env, options);
        Self::new(resolver, engine)
    }
}

impl<T: GitTransport> SyncOrchestrator<T> {
    /// Creates an orchestrator from its parts.
    pub fn new(resolver: CredentialResolver, engine: CloneEngine<T>) -> Self {
        Self {
            resolver,
            engine,
            policy: FailurePolicy::default(),
            cancel: CancelToken::never(),
        }
    }

    /// Sets the failure policy.
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the token that interrupts the sync.
    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Returns the failure policy.
    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Returns the clone engine.
    pub fn engine(&self) -> &CloneEngine<T> {
        &self.engine
    }

    /// Syncs every repository and returns one result per processed entry.
    ///
    /// Once cancellation is requested, the repository in flight fails with
    /// [`SyncError::Cancelled`] and every remaining repository is reported
    /// as cancelled without touching the filesystem.
    pub async fn sync(&self, specs: &[RepositorySpec]) -> SyncReport {
        let started = Instant::now();
        let mut report = SyncReport::new();

        info!("Syncing {} repositories", specs.len());

        for spec in specs {
            if self.cancel.is_cancelled() {
                warn!("Sync cancelled, skipping {}", spec.url);
                report.push(CloneResult::failure(spec.clone(), SyncError::Cancelled));
                continue;
            }

            let span = info_span!(
                "repository",
                name = spec.name().unwrap_or_default(),
                url = %spec.url,
                directory = %spec.target_directory,
            );
            let result = self.sync_one(spec).instrument(span).await;
            let failed = result.is_failure();
            report.push(result);

            if failed && self.policy == FailurePolicy::StopOnFirstFailure {
                warn!("Stopping after first failure");
                break;
            }
        }

        report.set_elapsed(started.elapsed());
        info!(
            elapsed_ms = report.elapsed().as_millis() as u64,
            "{}",
            report.summary()
        );
        report
    }

    /// Resolves credentials and clones one repository.
    async fn sync_one(&self, spec: &RepositorySpec) -> CloneResult {
        info!("Cloning {} into {}...", spec.url, spec.target_directory);

        let result = match self.resolver.resolve(&spec.url).await {
            Ok(credentials) => self.engine.clone(spec, &credentials, &self.cancel).await,
            Err(e) => CloneResult::failure(spec.clone(), e),
        };

        match result.error() {
            Some(SyncError::DirectoryExists { path }) => {
                warn!("Skipping {}: {} already exists", spec.url, path.display())
            },
            Some(e) => error!("Failed to sync {}: {}", spec.url, e),
            None => {},
        }

        result
    }
}

impl<T: GitTransport> std::fmt::Debug for SyncOrchestrator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncOrchestrator")
            .field("engine", &self.engine)
            .field("policy", &self.policy)
            .finish()
    }
}
