use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// A repository to clone: where it lives and where it should land locally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepositorySpec {
    /// Git remote URL. The scheme decides the authentication path.
    pub url: String,

    /// Local path the repository is cloned into. Must not exist yet.
    #[serde(rename = "directory")]
    pub target_directory: String,
}

impl RepositorySpec {
    /// Creates a new repository spec.
    pub fn new(url: impl Into<String>, target_directory: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            target_directory: target_directory.into(),
        }
    }

    /// Returns the target directory as a path.
    pub fn target_path(&self) -> &Path {
        Path::new(&self.target_directory)
    }

    /// Returns the short repository name derived from the URL.
    ///
    /// `git@github.com:org/tool.git` and `https://github.com/org/tool.git`
    /// both yield `tool`. Returns `None` when the URL has no usable path.
    pub fn name(&self) -> Option<&str> {
        let url = self.url.trim_end_matches('/');
        let path = match url.split_once("://") {
            Some((_, rest)) => rest.split_once('/').map(|(_, path)| path)?,
            // scp-like syntax: user@host:path
            None => url.split_once(':').map(|(_, path)| path)?,
        };
        let last = path.rsplit('/').next()?;
        let name = last.strip_suffix(".git").unwrap_or(last);
        (!name.is_empty()).then_some(name)
    }
}

impl fmt::Display for RepositorySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.url, self.target_directory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_from_https_url() {
        let spec = RepositorySpec::new("https://github.com/org/tool.git", "/tmp/tool");
        assert_eq!(spec.name(), Some("tool"));
    }

    #[test]
    fn test_name_from_scp_like_url() {
        let spec = RepositorySpec::new("git@github.com:org/sub/service.git", "/tmp/service");
        assert_eq!(spec.name(), Some("service"));
    }

    #[test]
    fn test_name_from_ssh_url_without_suffix() {
        let spec = RepositorySpec::new("ssh://git@host:2222/team/api/", "/tmp/api");
        assert_eq!(spec.name(), Some("api"));
    }

    #[test]
    fn test_name_missing() {
        assert_eq!(RepositorySpec::new("https://host", "/tmp/x").name(), None);
        assert_eq!(RepositorySpec::new("not-a-url", "/tmp/x").name(), None);
    }

    #[test]
    fn test_display() {
        let spec = RepositorySpec::new("git@host:a.git", "/tmp/a");
        assert_eq!(spec.to_string(), "git@host:a.git -> /tmp/a");
    }
}
