//! Environment snapshot.
//!
//! Components never call `std::env::var` themselves. They receive an
//! [`Environment`] captured once at startup, which keeps environment
//! dependence visible in signatures and lets tests build one from
//! plain key/value pairs.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{Result, WhiteroseError};

/// File name of the optional dotenv files.
pub const DOTENV_FILE: &str = ".env";

/// An immutable view of environment variables plus the user's home directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: HashMap<String, String>,
    home: Option<PathBuf>,
}

impl Environment {
    /// Captures the current process environment.
    ///
    /// Variables from `./.env` and then `<home>/.env` fill in whatever the
    /// process does not set; real process variables always win.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if a dotenv file exists but cannot be parsed.
    pub fn from_process() -> Result<Self> {
        let env = Self {
            vars: std::env::vars().collect(),
            home: dirs::home_dir(),
        };

        let mut files = vec![PathBuf::from(DOTENV_FILE)];
        if let Some(home) = env.home_dir() {
            files.push(home.join(DOTENV_FILE));
        }

        files
            .iter()
            .try_fold(env, |env, path| env.with_dotenv(path))
    }

    /// Adds the variables of a dotenv file that are not already set.
    ///
    /// A missing file is skipped.
    pub fn with_dotenv(mut self, path: &Path) -> Result<Self> {
        let invalid = |e: dotenvy::Error| {
            WhiteroseError::parse_error_with_cause(
                path.display().to_string(),
                "invalid dotenv file",
                e,
            )
        };

        let entries = match dotenvy::from_path_iter(path) {
            Ok(entries) => entries,
            Err(e) if e.not_found() => return Ok(self),
            Err(e) => return Err(invalid(e)),
        };

        for entry in entries {
            let (key, value) = entry.map_err(invalid)?;
            self.vars.entry(key).or_insert(value);
        }
        Ok(self)
    }

    /// Builds an environment from explicit pairs, without a home directory.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            home: None,
        }
    }

    /// Builder-style method to set the home directory.
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    /// Builder-style method to set a single variable.
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Returns the value of `key`, treating an empty value as unset.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Returns the value of `key`, or `default` when unset or empty.
    pub fn get_or_default(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or(default).to_string()
    }

    /// Returns the home directory.
    ///
    /// Falls back to `HOME` when no directory was captured.
    pub fn home_dir(&self) -> Option<&Path> {
        self.home
            .as_deref()
            .or_else(|| self.get("HOME").map(Path::new))
    }

    /// Returns the login name of the current user (`USER`, then `USERNAME`).
    pub fn current_user(&self) -> Option<&str> {
        self.get("USER").or_else(|| self.get("USERNAME"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value_is_unset() {
        let env = Environment::from_pairs([("GIT_USER", "")]);
        assert_eq!(env.get("GIT_USER"), None);
        assert_eq!(env.get_or_default("GIT_USER", "anonymous"), "anonymous");
    }

    #[test]
    fn test_get_or_default_prefers_value() {
        let env = Environment::from_pairs([("SSH_KEY_NAME", "id_ed25519")]);
        assert_eq!(env.get_or_default("SSH_KEY_NAME", "id_rsa"), "id_ed25519");
        assert_eq!(env.get_or_default("MISSING", "id_rsa"), "id_rsa");
    }

    #[test]
    fn test_home_dir_precedence() {
        let env = Environment::from_pairs([("HOME", "/home/from-var")]);
        assert_eq!(env.home_dir(), Some(Path::new("/home/from-var")));

        let env = env.with_home("/home/captured");
        assert_eq!(env.home_dir(), Some(Path::new("/home/captured")));

        assert_eq!(Environment::default().home_dir(), None);
    }

    #[test]
    fn test_dotenv_fills_unset_variables_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DOTENV_FILE);
        std::fs::write(
            &path,
            "GIT_USER=from-file\nGIT_TOKEN=token-from-file\n# comment\nSSH_KEY_NAME=id_ed25519\n",
        )
        .unwrap();

        let env = Environment::from_pairs([("GIT_USER", "from-process")])
            .with_dotenv(&path)
            .unwrap();

        assert_eq!(env.get("GIT_USER"), Some("from-process"));
        assert_eq!(env.get("GIT_TOKEN"), Some("token-from-file"));
        assert_eq!(env.get("SSH_KEY_NAME"), Some("id_ed25519"));
    }

    #[test]
    fn test_dotenv_earlier_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.env");
        let second = dir.path().join("second.env");
        std::fs::write(&first, "GIT_USER=first\n").unwrap();
        std::fs::write(&second, "GIT_USER=second\nGIT_TOKEN=second\n").unwrap();

        let env = Environment::default()
            .with_dotenv(&first)
            .unwrap()
            .with_dotenv(&second)
            .unwrap();

        assert_eq!(env.get("GIT_USER"), Some("first"));
        assert_eq!(env.get("GIT_TOKEN"), Some("second"));
    }

    #[test]
    fn test_missing_dotenv_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let env = Environment::from_pairs([("USER", "alice")])
            .with_dotenv(&dir.path().join(DOTENV_FILE))
            .unwrap();

        assert_eq!(env, Environment::from_pairs([("USER", "alice")]));
    }

    #[test]
    fn test_malformed_dotenv_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DOTENV_FILE);
        std::fs::write(&path, "this is not a dotenv line\n").unwrap();

        let err = Environment::default().with_dotenv(&path).unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_current_user_falls_back_to_username() {
        let env = Environment::from_pairs([("USERNAME", "winuser")]);
        assert_eq!(env.current_user(), Some("winuser"));

        let env = env.with_var("USER", "unixuser");
        assert_eq!(env.current_user(), Some("unixuser"));

        assert_eq!(Environment::default().current_user(), None);
    }
}
