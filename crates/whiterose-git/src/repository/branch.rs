//! Branch names.

use std::fmt;

/// A validated local branch name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BranchName(String);

impl BranchName {
    /// Validates and wraps a branch name.
    pub fn new(name: impl Into<String>) -> Result<Self, &'static str> {
        let name = name.into();
        validate(&name)?;
        Ok(Self(name))
    }

    /// Builds the personal fallback branch `<prefix>/<user>`.
    pub fn fallback(prefix: &str, user: &str) -> Result<Self, &'static str> {
        if user.is_empty() {
            return Err("user name cannot be empty");
        }
        Self::new(format!("{}/{}", prefix.trim_end_matches('/'), user))
    }

    /// Returns the short branch name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the local ref path (`refs/heads/<name>`).
    pub fn local_ref(&self) -> String {
        format!("refs/heads/{}", self.0)
    }

    /// Returns the remote-tracking ref path for `origin`.
    pub fn origin_ref(&self) -> String {
        format!("refs/remotes/origin/{}", self.0)
    }
}

/// Applies the subset of `git check-ref-format` rules that user-derived names can break.
fn validate(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("reference name cannot be empty");
    }

    if name.starts_with('/') || name.ends_with('/') {
        return Err("reference name cannot start or end with '/'");
    }

    if name.starts_with('-') {
        return Err("reference name cannot start with '-'");
    }

    if name.contains("..") {
        return Err("reference name cannot contain '..'");
    }

    if name.contains("//") {
        return Err("reference name cannot contain '//'");
    }

    if name.contains("@{") {
        return Err("reference name cannot contain '@{'");
    }

    if name.ends_with('.') || name.ends_with(".lock") {
        return Err("reference name cannot end with '.' or '.lock'");
    }

    if name.split('/').any(|component| component.starts_with('.')) {
        return Err("reference name components cannot start with '.'");
    }

    for c in name.chars() {
        if c.is_control()
            || c == ' '
            || c == '~'
            || c == '^'
            || c == ':'
            || c == '?'
            || c == '*'
            || c == '['
            || c == '\\'
        {
            return Err("reference name contains invalid characters");
        }
    }

    Ok(())
}

impl fmt::Display for BranchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback() {
        let branch = BranchName::fallback("development", "alice").unwrap();
        assert_eq!(branch.as_str(), "development/alice");
        assert_eq!(branch.local_ref(), "refs/heads/development/alice");
        assert_eq!(branch.origin_ref(), "refs/remotes/origin/development/alice");

        let branch = BranchName::fallback("sandbox/", "bob").unwrap();
        assert_eq!(branch.to_string(), "sandbox/bob");
    }

    #[test]
    fn test_fallback_requires_user() {
        assert!(BranchName::fallback("development", "").is_err());
    }

    #[test]
    fn test_validate() {
        assert!(BranchName::new("main").is_ok());
        assert!(BranchName::new("development/j.doe").is_ok());

        assert!(BranchName::new("").is_err());
        assert!(BranchName::new("/main").is_err());
        assert!(BranchName::new("main/").is_err());
        assert!(BranchName::new("-main").is_err());
        assert!(BranchName::new("main..branch").is_err());
        assert!(BranchName::new("main branch").is_err());
        assert!(BranchName::new("development/DOMAIN\\user").is_err());
        assert!(BranchName::new("development/.hidden").is_err());
        assert!(BranchName::new("development/alice.lock").is_err());
        assert!(BranchName::new("head@{1}").is_err());
    }
}
