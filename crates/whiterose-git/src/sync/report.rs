//! Sync outcome aggregation.

use std::time::Duration;

use crate::clone::CloneResult;

/// Per-repository outcomes of one sync run, in processing order.
#[derive(Debug, Default)]
pub struct SyncReport {
    results: Vec<CloneResult>,
    elapsed: Duration,
}

impl SyncReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the outcome of one repository.
    pub fn push(&mut self, result: CloneResult) {
        self.results.push(result);
    }

    /// Records the total run time.
    pub fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
    }

    /// Returns the total run time.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Returns all results.
    pub fn results(&self) -> &[CloneResult] {
        &self.results
    }

    /// Returns the number of results.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns true if no repository was processed.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns the number of successful repositories.
    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    /// Returns the number of failed repositories.
    pub fn failed(&self) -> usize {
        self.len() - self.succeeded()
    }

    /// Returns the failed results.
    pub fn failures(&self) -> impl Iterator<Item = &CloneResult> {
        self.results.iter().filter(|r| r.is_failure())
    }

    /// Returns true if every repository succeeded.
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// Returns a one-line summary.
    pub fn summary(&self) -> String {
        format!(
            "{} repositories: {} succeeded, {} failed",
            self.len(),
            self.succeeded(),
            self.failed()
        )
    }

    /// Consumes the report, returning the results.
    pub fn into_results(self) -> Vec<CloneResult> {
        self.results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clone::ResolvedBranch;
    use crate::error::SyncError;
    use whiterose_core::RepositorySpec;

    fn spec(name: &str) -> RepositorySpec {
        RepositorySpec::new(format!("https://host/{name}.git"), format!("/tmp/{name}"))
    }

    #[test]
    fn test_empty_report() {
        let report = SyncReport::new();
        assert!(report.is_empty());
        assert!(report.is_success());
        assert_eq!(report.summary(), "0 repositories: 0 succeeded, 0 failed");
    }

    #[test]
    fn test_counts() {
        let mut report = SyncReport::new();
        report.push(CloneResult::success(
            spec("a"),
            ResolvedBranch::Preferred("development".into()),
        ));
        report.push(CloneResult::failure(spec("b"), SyncError::Cancelled));
        report.push(CloneResult::success(
            spec("c"),
            ResolvedBranch::Fallback("development/alice".into()),
        ));

        assert_eq!(report.len(), 3);
        assert_eq!(report.succeeded(), 2);
        assert_eq!(report.failed(), 1);
        assert!(!report.is_success());
        assert_eq!(report.failures().next().unwrap().spec(), &spec("b"));
        assert_eq!(report.summary(), "3 repositories: 2 succeeded, 1 failed");
    }
}
