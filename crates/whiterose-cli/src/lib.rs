//! Whiterose command-line interface.
//!
//! `whiterose setup` prepares a development environment from the
//! configuration file: it checks prerequisite applications and clones
//! every configured repository. `whiterose pre-req` runs only the
//! application checks. `whiterose docker` builds or deletes the image of
//! the project in the working directory.

pub mod cli;
pub mod commands;
mod output;

pub use cli::{Cli, Command, DockerArgs, PreReqArgs, SetupArgs};

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use whiterose_core::{ConfigFile, ConfigLocator, Environment};

/// Finds, parses and validates the configuration file.
///
/// # Errors
///
/// Returns an error if no file is found or its content is invalid.
pub fn load_config(env: &Environment, explicit: Option<&Path>) -> anyhow::Result<ConfigFile> {
    let path = ConfigLocator::new(env)
        .with_explicit(explicit.map(Path::to_path_buf))
        .locate()?;

    tracing::debug!("Using configuration file {}", path.display());

    ConfigFile::from_path(&path).with_context(|| format!("Failed to load {}", path.display()))
}

/// Dispatches a parsed command line.
pub async fn run(cli: Cli, env: Environment) -> anyhow::Result<ExitCode> {
    let config_path = cli.config.as_deref();

    match &cli.command {
        Command::Setup(args) => commands::run_setup(config_path, env, args).await,
        Command::PreReq(args) => commands::run_pre_req(config_path, &env, args).await,
        Command::Docker(args) => commands::run_docker(&env, args).await,
    }
}
