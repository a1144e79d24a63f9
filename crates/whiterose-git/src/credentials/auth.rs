use std::fmt;
use std::path::{Path, PathBuf};

use super::UrlScheme;

/// Username/password pair for `https://` remotes.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

impl BasicAuth {
    /// Creates a new basic auth pair.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns true if neither username nor password is set.
    pub fn is_empty(&self) -> bool {
        self.username.is_empty() && self.password.is_empty()
    }
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A private key for `git@`/`ssh://` remotes. No passphrase support.
#[derive(Clone, PartialEq, Eq)]
pub struct SshAuth {
    key_path: PathBuf,
    key: Vec<u8>,
}

impl SshAuth {
    /// Creates SSH auth from a key path and the raw key bytes read from it.
    pub fn new(key_path: impl Into<PathBuf>, key: Vec<u8>) -> Self {
        Self {
            key_path: key_path.into(),
            key,
        }
    }

    /// Returns the path the key was read from.
    pub fn key_path(&self) -> &Path {
        &self.key_path
    }

    /// Returns the raw private key.
    pub fn key(&self) -> &[u8] {
        &self.key
    }
}

impl fmt::Debug for SshAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SshAuth")
            .field("key_path", &self.key_path)
            .field("key", &format_args!("<{} bytes>", self.key.len()))
            .finish()
    }
}

/// Resolved authentication for one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    Basic(BasicAuth),
    Ssh(SshAuth),
}

impl Credentials {
    /// Returns the scheme this credential variant serves.
    pub fn scheme(&self) -> UrlScheme {
        match self {
            Self::Basic(_) => UrlScheme::Https,
            Self::Ssh(_) => UrlScheme::Ssh,
        }
    }

    /// Returns true if this is basic auth.
    pub fn is_basic(&self) -> bool {
        matches!(self, Self::Basic(_))
    }

    /// Returns true if this is SSH auth.
    pub fn is_ssh(&self) -> bool {
        matches!(self, Self::Ssh(_))
    }
}
