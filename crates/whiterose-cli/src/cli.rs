//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "whiterose",
    author,
    version,
    about = "Set up a development environment from a repository list"
)]
pub struct Cli {
    /// Configuration file (defaults to $CONFIG_FILE, then ~/.config.{yml,yaml,json})
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check prerequisites and clone the configured repositories
    Setup(SetupArgs),
    /// Check that required applications are installed
    #[command(name = "pre-req")]
    PreReq(PreReqArgs),
    /// Find the project Dockerfile and build or delete its image
    Docker(DockerArgs),
}

#[derive(Args, Debug, Default)]
pub struct SetupArgs {
    /// Run every setup step
    #[arg(short, long)]
    pub all: bool,

    /// Check prerequisite applications
    #[arg(short = 'p', long = "pre-req")]
    pub pre_req: bool,

    /// Clone the configured repositories
    #[arg(short, long)]
    pub repos: bool,

    /// Seconds before a single clone is abandoned (no limit by default)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Do not stream git progress
    #[arg(long)]
    pub quiet: bool,

    /// Stop at the first repository that fails
    #[arg(long)]
    pub fail_fast: bool,
}

impl SetupArgs {
    /// Returns true if prerequisites should be checked.
    pub fn run_pre_req(&self) -> bool {
        self.all || self.pre_req
    }

    /// Returns true if repositories should be cloned.
    pub fn run_repos(&self) -> bool {
        self.all || self.repos
    }
}

#[derive(Args, Debug, Default)]
pub struct PreReqArgs {
    /// Check every configured application
    #[arg(short, long)]
    pub check: bool,

    /// List the configured applications
    #[arg(short, long)]
    pub list: bool,

    /// Check only these applications (by name or command)
    #[arg(short, long, value_delimiter = ',')]
    pub apps: Vec<String>,
}

#[derive(Args, Debug, Default)]
pub struct DockerArgs {
    /// List the Dockerfiles found in $DOCKERFILE_PATH
    #[arg(short, long)]
    pub file: bool,

    /// Build $IMAGE_NAME from the first Dockerfile found
    #[arg(short, long)]
    pub build: bool,

    /// Delete $IMAGE_NAME
    #[arg(short, long)]
    pub delete: bool,
}

impl DockerArgs {
    /// Returns true if no action flag was given.
    pub fn is_empty(&self) -> bool {
        !(self.file || self.build || self.delete)
    }
}
