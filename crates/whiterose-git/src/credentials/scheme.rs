/// The URL schemes the engine knows how to authenticate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrlScheme {
    /// `https://` - basic authentication.
    Https,
    /// `git@...` (scp-like) or `ssh://` - key-based authentication.
    Ssh,
    /// Anything else (`http://`, `file://`, local paths).
    Unsupported,
}

impl UrlScheme {
    /// Classifies a remote URL by prefix.
    pub fn of(url: &str) -> Self {
        if url.starts_with("https://") {
            Self::Https
        } else if url.starts_with("git@") || url.starts_with("ssh://") {
            Self::Ssh
        } else {
            Self::Unsupported
        }
    }

    /// Returns true if credentials can be resolved for this scheme.
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported)
    }
}
