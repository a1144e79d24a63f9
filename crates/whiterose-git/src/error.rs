//! Error types for repository synchronization.

use std::path::PathBuf;

/// Errors that can occur while resolving credentials or cloning a repository.
///
/// Every variant is scoped to a single repository: the orchestrator
/// records it and moves on to the next one.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// The target directory already exists; clones are create-only.
    #[error("directory {} already exists", path.display())]
    DirectoryExists { path: PathBuf },

    /// The SSH private key could not be read.
    #[error("failed to read SSH key file {}: {source}", path.display())]
    KeyRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The home directory is needed for the default key path but is unknown.
    #[error("failed to determine the user home directory for the default SSH key")]
    HomeDirUnavailable,

    /// The clone transport failed (authentication, network, unknown host).
    #[error("failed to clone {url}: {reason}")]
    Clone { url: String, reason: String },

    /// The fallback branch could not be created after a successful clone.
    #[error("failed to create and checkout branch {branch}: {reason}")]
    BranchCreate { branch: String, reason: String },

    /// The URL scheme is neither `https://` nor `git@`/`ssh://`.
    #[error("unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    /// The clone did not finish before the deadline.
    #[error("operation timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// The sync was cancelled before or during this repository.
    #[error("operation cancelled")]
    Cancelled,

    /// A local Git operation failed (opening the clone, reading refs, checkout).
    #[error("git error: {0}")]
    Git(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SyncError {
    /// Creates a new Git error.
    pub fn git(msg: impl Into<String>) -> Self {
        Self::Git(msg.into())
    }

    /// Creates a new clone error.
    pub fn clone_failed(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Clone {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Creates a new branch creation error.
    pub fn branch_create(branch: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::BranchCreate {
            branch: branch.into(),
            reason: reason.into(),
        }
    }

    /// Creates a new key read error.
    pub fn key_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::KeyRead {
            path: path.into(),
            source,
        }
    }

    /// Returns true if the clone was refused because the directory exists.
    pub fn is_directory_exists(&self) -> bool {
        matches!(self, Self::DirectoryExists { .. })
    }

    /// Returns true if the failure happened while resolving credentials.
    pub fn is_credential_error(&self) -> bool {
        matches!(
            self,
            Self::KeyRead { .. } | Self::HomeDirUnavailable | Self::UnsupportedScheme(_)
        )
    }

    /// Returns true if the repository was cloned but left without the target branch.
    ///
    /// The clone stays on disk in that case.
    pub fn is_partial(&self) -> bool {
        matches!(self, Self::BranchCreate { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SyncError::DirectoryExists {
            path: PathBuf::from("/tmp/a"),
        };
        assert_eq!(err.to_string(), "directory /tmp/a already exists");

        let err = SyncError::clone_failed("https://host/a.git", "authentication failed");
        assert_eq!(
            err.to_string(),
            "failed to clone https://host/a.git: authentication failed"
        );

        let err = SyncError::branch_create("development/alice", "invalid ref");
        assert_eq!(
            err.to_string(),
            "failed to create and checkout branch development/alice: invalid ref"
        );

        let err = SyncError::UnsupportedScheme("ftp://host/a.git".to_string());
        assert_eq!(err.to_string(), "unsupported URL scheme: ftp://host/a.git");
    }

    #[test]
    fn test_classification() {
        let key = SyncError::key_read(
            "/home/dev/.ssh/id_rsa",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(key.is_credential_error());
        assert!(!key.is_partial());

        assert!(SyncError::branch_create("b", "r").is_partial());
        assert!(!SyncError::clone_failed("u", "r").is_credential_error());
        assert!(
            SyncError::DirectoryExists {
                path: PathBuf::from("/x")
            }
            .is_directory_exists()
        );
    }
}
