//! Clone result types.

use std::fmt;

use whiterose_core::RepositorySpec;

use crate::error::SyncError;

/// The branch the working tree ended up on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedBranch {
    /// The preferred team branch existed and was checked out.
    Preferred(String),
    /// The preferred branch was missing; a personal branch was created at HEAD.
    Fallback(String),
}

impl ResolvedBranch {
    /// Returns the branch name.
    pub fn name(&self) -> &str {
        match self {
            Self::Preferred(name) | Self::Fallback(name) => name,
        }
    }

    /// Returns true if the branch was created locally.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

impl fmt::Display for ResolvedBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Success or failure of one repository.
#[derive(Debug)]
pub enum CloneOutcome {
    Success(ResolvedBranch),
    Failure(SyncError),
}

/// The outcome of processing one repository, tied to its spec.
#[derive(Debug)]
pub struct CloneResult {
    spec: RepositorySpec,
    outcome: CloneOutcome,
}

impl CloneResult {
    /// Creates a result from an outcome.
    pub fn new(spec: RepositorySpec, outcome: CloneOutcome) -> Self {
        Self { spec, outcome }
    }

    /// Creates a successful result.
    pub fn success(spec: RepositorySpec, branch: ResolvedBranch) -> Self {
        Self::new(spec, CloneOutcome::Success(branch))
    }

    /// Creates a failed result.
    pub fn failure(spec: RepositorySpec, error: SyncError) -> Self {
        Self::new(spec, CloneOutcome::Failure(error))
    }

    /// Returns the repository this result belongs to.
    pub fn spec(&self) -> &RepositorySpec {
        &self.spec
    }

    /// Returns the outcome.
    pub fn outcome(&self) -> &CloneOutcome {
        &self.outcome
    }

    /// Returns the resolved branch on success.
    pub fn branch(&self) -> Option<&ResolvedBranch> {
        match &self.outcome {
            CloneOutcome::Success(branch) => Some(branch),
            CloneOutcome::Failure(_) => None,
        }
    }

    /// Returns the error on failure.
    pub fn error(&self) -> Option<&SyncError> {
        match &self.outcome {
            CloneOutcome::Success(_) => None,
            CloneOutcome::Failure(error) => Some(error),
        }
    }

    /// Returns true if the repository was cloned and its branch resolved.
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, CloneOutcome::Success(_))
    }

    /// Returns true if processing this repository failed.
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Consumes the result, returning it as a `Result`.
    pub fn into_result(self) -> Result<ResolvedBranch, SyncError> {
        match self.outcome {
            CloneOutcome::Success(branch) => Ok(branch),
            CloneOutcome::Failure(error) => Err(error),
        }
    }
}

impl fmt::Display for CloneResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            CloneOutcome::Success(branch) => write!(f, "{}: on branch {}", self.spec.url, branch),
            CloneOutcome::Failure(error) => write!(f, "{}: {}", self.spec.url, error),
        }
    }
}
