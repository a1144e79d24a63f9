//! Credential resolution.
//!
//! Exactly one [`Credentials`] variant is produced per repository, picked
//! from the URL prefix alone.

mod auth;
mod resolver;
mod scheme;

pub use auth::{BasicAuth, Credentials, SshAuth};
pub use resolver::{
    CredentialResolver, DEFAULT_SSH_KEY_NAME, GIT_TOKEN_VAR, GIT_USER_VAR, SSH_KEY_NAME_VAR,
    SSH_KEY_PATH_VAR,
};
pub use scheme::UrlScheme;
