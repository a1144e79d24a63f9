//! Git repository access.
//!
//! This module holds the clone options, branch naming rules and the
//! [`GitTransport`] seam with its system implementation.

mod branch;
mod config;
mod system;
mod transport;

pub use branch::BranchName;
pub use config::{CloneOptions, CloneOptionsBuilder};
pub use system::SystemGit;
pub use transport::GitTransport;
