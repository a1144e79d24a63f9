//! Clone engine options.

use std::path::PathBuf;
use std::time::Duration;

/// Options shared by every clone in a sync run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneOptions {
    /// Branch the working tree should end up on when the remote has it.
    preferred_branch: String,

    /// Prefix of the personal fallback branch (`<prefix>/<user>`).
    fallback_prefix: String,

    /// Upper bound for a single clone; unbounded when `None`.
    clone_timeout: Option<Duration>,

    /// Whether git's transfer progress is streamed to stdout.
    show_progress: bool,

    /// The git executable.
    git_program: PathBuf,
}

fn default_branch() -> String {
    "development".to_string()
}

impl Default for CloneOptions {
    fn default() -> Self {
        Self {
            preferred_branch: default_branch(),
            fallback_prefix: default_branch(),
            clone_timeout: None,
            show_progress: true,
            git_program: PathBuf::from("git"),
        }
    }
}

impl CloneOptions {
    /// Creates a new builder for CloneOptions.
    pub fn builder() -> CloneOptionsBuilder {
        CloneOptionsBuilder::default()
    }

    /// Returns the preferred branch name.
    pub fn preferred_branch(&self) -> &str {
        &self.preferred_branch
    }

    /// Returns the fallback branch prefix.
    pub fn fallback_prefix(&self) -> &str {
        &self.fallback_prefix
    }

    /// Returns the clone timeout, if any.
    pub fn clone_timeout(&self) -> Option<Duration> {
        self.clone_timeout
    }

    /// Returns whether progress is streamed to stdout.
    pub fn show_progress(&self) -> bool {
        self.show_progress
    }

    /// Returns the git executable.
    pub fn git_program(&self) -> &PathBuf {
        &self.git_program
    }
}

/// Builder for CloneOptions.
#[derive(Debug, Default)]
pub struct CloneOptionsBuilder {
    preferred_branch: Option<String>,
    fallback_prefix: Option<String>,
    clone_timeout: Option<Duration>,
    quiet: bool,
    git_program: Option<PathBuf>,
}

impl CloneOptionsBuilder {
    /// Sets the preferred branch.
    pub fn preferred_branch(mut self, branch: impl Into<String>) -> Self {
        self.preferred_branch = Some(branch.into());
        self
    }

    /// Sets the fallback branch prefix.
    pub fn fallback_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.fallback_prefix = Some(prefix.into());
        self
    }

    /// Bounds every clone; clones are unbounded unless this is set.
    pub fn clone_timeout(mut self, timeout: Duration) -> Self {
        self.clone_timeout = Some(timeout);
        self
    }

    /// Disables progress streaming.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Sets the git executable.
    pub fn git_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.git_program = Some(program.into());
        self
    }

    /// Builds the options.
    ///
    /// # Errors
    ///
    /// Returns an error if a branch name or the timeout is empty.
    pub fn build(self) -> Result<CloneOptions, &'static str> {
        let preferred_branch = self.preferred_branch.unwrap_or_else(default_branch);
        let fallback_prefix = self.fallback_prefix.unwrap_or_else(default_branch);
        let clone_timeout = self.clone_timeout;

        if preferred_branch.trim().is_empty() {
            return Err("preferred branch cannot be empty");
        }
        if fallback_prefix.trim().is_empty() {
            return Err("fallback prefix cannot be empty");
        }
        if clone_timeout.is_some_and(|t| t.is_zero()) {
            return Err("clone timeout must be greater than zero");
        }

        Ok(CloneOptions {
            preferred_branch,
            fallback_prefix,
            clone_timeout,
            show_progress: !self.quiet,
            git_program: self.git_program.unwrap_or_else(|| PathBuf::from("git")),
        })
    }
}
