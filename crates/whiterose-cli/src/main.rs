//! Whiterose binary.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use whiterose_cli::{Cli, run};
use whiterose_core::Environment;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let env = match Environment::from_process() {
        Ok(env) => env,
        Err(e) => {
            eprintln!("Error loading environment: {}", e);
            return ExitCode::FAILURE;
        },
    };

    tracing::debug!(
        "Starting whiterose v{} (core {}, prereq {}, docker {})",
        env!("CARGO_PKG_VERSION"),
        whiterose_core::version(),
        whiterose_prereq::version(),
        whiterose_docker::version()
    );

    match run(cli, env).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        },
    }
}
