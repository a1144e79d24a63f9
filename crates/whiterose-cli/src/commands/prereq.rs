use std::path::Path;
use std::process::ExitCode;

use whiterose_core::Environment;
use whiterose_prereq::AppValidator;

use crate::output::{print_app_list, print_status};
use crate::{PreReqArgs, load_config};

/// Runs `pre-req`.
pub async fn run_pre_req(
    config_path: Option<&Path>,
    env: &Environment,
    args: &PreReqArgs,
) -> anyhow::Result<ExitCode> {
    let config = load_config(env, config_path)?;
    let validator = AppValidator::for_current_os(config.applications.clone());

    if args.list {
        print_app_list(&validator.list());
    }

    if !args.apps.is_empty() {
        let statuses = validator.check_named(&args.apps).await;
        if statuses.is_empty() {
            println!("No applications found in the list to validate.");
            return Ok(ExitCode::FAILURE);
        }
        for status in &statuses {
            print_status(status, validator.os());
        }
    } else if args.check || !args.list {
        check_all(&validator).await;
    }

    Ok(ExitCode::SUCCESS)
}

/// Checks and prints every configured application.
pub(crate) async fn check_all(validator: &AppValidator) {
    for status in validator.check_all().await {
        print_status(&status, validator.os());
    }
}
