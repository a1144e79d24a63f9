use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::anyhow;
use tracing::warn;
use whiterose_core::Environment;
use whiterose_git::{CloneOptions, FailurePolicy, SyncOrchestrator, cancellation};
use whiterose_prereq::AppValidator;

use super::prereq::check_all;
use super::print_subcommand_help;
use crate::output::print_report;
use crate::{SetupArgs, load_config};

/// Builds clone options from the `setup` flags.
pub fn clone_options(args: &SetupArgs) -> anyhow::Result<CloneOptions> {
    let mut builder = CloneOptions::builder().quiet(args.quiet);
    if let Some(secs) = args.timeout {
        builder = builder.clone_timeout(Duration::from_secs(secs));
    }
    builder
        .build()
        .map_err(|e| anyhow!("Invalid setup options: {}", e))
}

/// Runs `setup`.
pub async fn run_setup(
    config_path: Option<&Path>,
    env: Environment,
    args: &SetupArgs,
) -> anyhow::Result<ExitCode> {
    if !args.run_pre_req() && !args.run_repos() {
        print_subcommand_help("setup")?;
        return Ok(ExitCode::SUCCESS);
    }

    let options = clone_options(args)?;
    let config = load_config(&env, config_path)?;

    if args.run_pre_req() {
        check_all(&AppValidator::for_current_os(config.applications.clone())).await;
    }

    if !args.run_repos() {
        return Ok(ExitCode::SUCCESS);
    }

    let policy = if args.fail_fast {
        FailurePolicy::StopOnFirstFailure
    } else {
        FailurePolicy::Continue
    };

    let (handle, token) = cancellation();
    let orchestrator = SyncOrchestrator::with_system_git(env, options)
        .with_policy(policy)
        .with_cancel_token(token);

    let interrupt = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling sync");
            handle.cancel();
        }
    });

    let report = orchestrator.sync(&config.repositories).await;
    interrupt.abort();

    print_report(&report);

    if report.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
