//! Sequential synchronization of a repository list.
//!
//! This module provides the orchestrator that runs the clone protocol
//! for every configured repository, plus cancellation and reporting.

mod cancel;
mod orchestrator;
mod report;

pub use cancel::{CancelHandle, CancelToken, cancellation};
pub use orchestrator::{FailurePolicy, SyncOrchestrator};
pub use report::SyncReport;
