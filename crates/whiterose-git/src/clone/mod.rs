//! Clone-and-branch protocol for a single repository.

mod engine;
mod result;

pub use engine::CloneEngine;
pub use result::{CloneOutcome, CloneResult, ResolvedBranch};
