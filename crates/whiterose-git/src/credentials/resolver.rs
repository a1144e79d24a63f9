use std::path::PathBuf;

use tracing::debug;
use whiterose_core::Environment;

use super::{BasicAuth, Credentials, SshAuth, UrlScheme};
use crate::error::SyncError;

/// HTTPS username.
pub const GIT_USER_VAR: &str = "GIT_USER";
/// HTTPS password or token.
pub const GIT_TOKEN_VAR: &str = "GIT_TOKEN";
/// Directory holding the SSH key, or the key file itself.
pub const SSH_KEY_PATH_VAR: &str = "SSH_KEY_PATH";
/// SSH key file name inside the key directory.
pub const SSH_KEY_NAME_VAR: &str = "SSH_KEY_NAME";
/// Key file name used when `SSH_KEY_NAME` is unset.
pub const DEFAULT_SSH_KEY_NAME: &str = "id_rsa";

/// Derives [`Credentials`] for a repository URL from an [`Environment`].
#[derive(Debug, Clone)]
pub struct CredentialResolver {
    env: Environment,
}

impl CredentialResolver {
    /// Creates a resolver over the given environment.
    pub fn new(env: Environment) -> Self {
        Self { env }
    }

    /// Returns the environment this resolver reads from.
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Resolves credentials for `url`.
    ///
    /// HTTPS URLs always get basic auth, even with empty values; a
    /// rejected login surfaces later as a clone error. SSH URLs read the
    /// key file from disk.
    pub async fn resolve(&self, url: &str) -> Result<Credentials, SyncError> {
        match UrlScheme::of(url) {
            UrlScheme::Https => Ok(Credentials::Basic(BasicAuth::new(
                self.env.get_or_default(GIT_USER_VAR, ""),
                self.env.get_or_default(GIT_TOKEN_VAR, ""),
            ))),
            UrlScheme::Ssh => {
                let key_path = self.ssh_key_path().await?;
                debug!("Reading SSH key from {}", key_path.display());

                let key = tokio::fs::read(&key_path)
                    .await
                    .map_err(|e| SyncError::key_read(&key_path, e))?;

                Ok(Credentials::Ssh(SshAuth::new(key_path, key)))
            },
            UrlScheme::Unsupported => Err(SyncError::UnsupportedScheme(url.to_string())),
        }
    }

    /// Resolves the SSH private key path.
    ///
    /// - `SSH_KEY_PATH` unset: `<home>/.ssh/<key name>`
    /// - `SSH_KEY_PATH` is a directory: `<SSH_KEY_PATH>/<key name>`
    /// - otherwise `SSH_KEY_PATH` verbatim
    pub async fn ssh_key_path(&self) -> Result<PathBuf, SyncError> {
        let key_name = self
            .env
            .get_or_default(SSH_KEY_NAME_VAR, DEFAULT_SSH_KEY_NAME);

        match self.env.get(SSH_KEY_PATH_VAR) {
            None => {
                let home = self.env.home_dir().ok_or(SyncError::HomeDirUnavailable)?;
                Ok(home.join(".ssh").join(key_name))
            },
            Some(path) => {
                let path = PathBuf::from(path);
                let is_dir = tokio::fs::metadata(&path)
                    .await
                    .map(|m| m.is_dir())
                    .unwrap_or(false);

                if is_dir {
                    Ok(path.join(key_name))
                } else {
                    Ok(path)
                }
            },
        }
    }
}
