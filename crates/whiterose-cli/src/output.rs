//! Console rendering.

use whiterose_git::{CloneResult, SyncError, SyncReport};
use whiterose_prereq::{ApplicationStatus, os_display_name};

const RULE: &str = "----------------------------------------";

pub(crate) fn print_status(status: &ApplicationStatus, os: &str) {
    println!("{}", RULE);
    println!("{}", status.name);
    if status.installed {
        println!("  Status: INSTALLED");
        if let Some(version) = &status.version {
            println!("  Version: {}", version);
        }
        let marker = if status.meets_recommendation { "" } else { " (differs)" };
        println!("  Recommended: {}{}", status.recommended_version, marker);
    } else {
        println!("  Status: NOT INSTALLED");
        println!("  Recommended version: {}", status.recommended_version);
        println!("  Installation instructions:");
        match &status.install_instruction {
            Some(instruction) => println!("    {}", instruction),
            None => println!(
                "    Instructions not available for {}",
                os_display_name(os)
            ),
        }
    }
    println!();
}

pub(crate) fn print_app_list(apps: &[(&str, &str)]) {
    println!("Available applications for validation:");
    println!("{}", RULE);
    for (i, (name, command)) in apps.iter().enumerate() {
        println!("{}. {} (command: {})", i + 1, name, command);
    }
    println!();
}

fn print_result(result: &CloneResult) {
    match (result.branch(), result.error()) {
        (Some(branch), _) => println!("  ok    {} [{}]", result.spec(), branch),
        (_, Some(error)) => {
            println!("  FAIL  {}: {}", result.spec(), error);
            if let Some(hint) = failure_hint(error) {
                println!("        {}", hint);
            }
        },
        (None, None) => {},
    }
}

/// Returns what the operator can do about a failed repository, if anything.
pub(crate) fn failure_hint(error: &SyncError) -> Option<&'static str> {
    if error.is_directory_exists() {
        Some("Remove the directory or point the entry at another one.")
    } else if error.is_credential_error() {
        Some("Check the repository URL and the SSH_KEY_PATH and SSH_KEY_NAME settings.")
    } else if error.is_partial() {
        Some("The clone is on disk; create the branch by hand.")
    } else {
        None
    }
}

pub(crate) fn print_report(report: &SyncReport) {
    println!("{}", RULE);
    for result in report.results() {
        print_result(result);
    }
    println!("{}", report.summary());
}
