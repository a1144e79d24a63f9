//! Subcommand handlers.
//!
//! Handlers return the process exit code; errors that should abort the
//! command are returned as `anyhow::Error` and reported by `main`.
//! Handlers that need the configuration file load it themselves, after
//! deciding there is work to do.

mod docker;
mod prereq;
mod setup;

pub use docker::run_docker;
pub use prereq::run_pre_req;
pub use setup::{clone_options, run_setup};

use clap::CommandFactory;

use crate::Cli;

/// Prints the help of a subcommand.
pub(crate) fn print_subcommand_help(name: &str) -> anyhow::Result<()> {
    let mut command = Cli::command();
    if let Some(subcommand) = command.find_subcommand_mut(name) {
        subcommand.print_help()?;
    }
    Ok(())
}
