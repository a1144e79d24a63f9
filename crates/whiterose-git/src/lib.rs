//! # Whiterose Git
//!
//! Repository synchronization engine for Whiterose.
//!
//! Given a list of repositories, the engine picks an authentication
//! method from each URL's scheme, clones the repository into its target
//! directory and leaves the working tree on the team integration branch
//! (`development`), or on a personal `development/<user>` branch when
//! the remote has none.
//!
//! ## Components
//!
//! - [`CredentialResolver`] - derives [`Credentials`] from the URL scheme and the environment
//! - [`CloneEngine`] - create-only clone plus branch resolution for one repository
//! - [`SyncOrchestrator`] - processes a repository list sequentially and aggregates outcomes
//! - [`GitTransport`] - the seam to Git itself; [`SystemGit`] uses the `git` CLI for
//!   clone/checkout and `gix` for reading refs
//!
//! ## Example
//!
//! ```ignore
//! use whiterose_core::{Environment, RepositorySpec};
//! use whiterose_git::{CloneOptions, SyncOrchestrator};
//!
//! let env = Environment::from_process()?;
//! let orchestrator = SyncOrchestrator::with_system_git(env, CloneOptions::default());
//!
//! let report = orchestrator
//!     .sync(&[RepositorySpec::new("git@github.com:org/api.git", "/work/api")])
//!     .await;
//! println!("{}", report.summary());
//! ```

pub mod clone;
pub mod credentials;
pub mod error;
pub mod repository;
pub mod sync;

// Re-exports
pub use clone::{CloneEngine, CloneOutcome, CloneResult, ResolvedBranch};
pub use credentials::{BasicAuth, CredentialResolver, Credentials, SshAuth, UrlScheme};
pub use error::SyncError;
pub use repository::{BranchName, CloneOptions, GitTransport, SystemGit};
pub use sync::{
    CancelHandle, CancelToken, FailurePolicy, SyncOrchestrator, SyncReport, cancellation,
};

// Re-export whiterose_core for consumers
pub use whiterose_core;
