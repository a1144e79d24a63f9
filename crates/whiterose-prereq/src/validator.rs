//! Application checks.

use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;
use whiterose_core::ApplicationSpec;

use crate::ApplicationStatus;

/// Checks a configured list of applications on one operating system.
#[derive(Debug, Clone)]
pub struct AppValidator {
    apps: Vec<ApplicationSpec>,
    os: String,
}

impl AppValidator {
    /// Creates a validator; `os` selects the install instructions (`linux`, `darwin`, `windows`).
    pub fn new(apps: Vec<ApplicationSpec>, os: impl Into<String>) -> Self {
        Self {
            apps,
            os: os.into(),
        }
    }

    /// Creates a validator for the operating system this binary runs on.
    ///
    /// Install instructions use `darwin` for macOS.
    pub fn for_current_os(apps: Vec<ApplicationSpec>) -> Self {
        let os = match std::env::consts::OS {
            "macos" => "darwin",
            other => other,
        };
        Self::new(apps, os)
    }

    /// Returns the OS identifier.
    pub fn os(&self) -> &str {
        &self.os
    }

    /// Returns `(name, command)` for every application, in configuration order.
    pub fn list(&self) -> Vec<(&str, &str)> {
        self.apps
            .iter()
            .map(|app| (app.name.as_str(), app.command.as_str()))
            .collect()
    }

    /// Checks every application.
    pub async fn check_all(&self) -> Vec<ApplicationStatus> {
        let mut statuses = Vec::with_capacity(self.apps.len());
        for app in &self.apps {
            statuses.push(self.check(app).await);
        }
        statuses
    }

    /// Checks the applications matching `names` by name or command, ignoring case.
    ///
    /// Unknown names are skipped; each application is checked at most once,
    /// in the order the names are given.
    pub async fn check_named<S: AsRef<str>>(&self, names: &[S]) -> Vec<ApplicationStatus> {
        let mut selected: Vec<&ApplicationSpec> = Vec::new();
        for name in names {
            let name = name.as_ref().trim();
            match self.apps.iter().find(|app| app.matches(name)) {
                Some(app) if !selected.iter().any(|s| std::ptr::eq(*s, app)) => selected.push(app),
                Some(_) => {},
                None => debug!("No application named {}", name),
            }
        }

        let mut statuses = Vec::with_capacity(selected.len());
        for app in selected {
            statuses.push(self.check(app).await);
        }
        statuses
    }

    async fn check(&self, app: &ApplicationSpec) -> ApplicationStatus {
        let mut cmd = Command::new(&app.command);
        if !app.version_flag.is_empty() {
            cmd.arg(&app.version_flag);
        }
        cmd.stdin(Stdio::null()).kill_on_drop(true);

        let version = match cmd.output().await {
            Ok(output) if output.status.success() => {
                Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
            },
            Ok(output) => {
                debug!("{} exited with {}", app.command, output.status);
                None
            },
            Err(e) => {
                debug!("Failed to run {}: {}", app.command, e);
                None
            },
        };

        let meets_recommendation = version.as_deref().is_some_and(|v| {
            !app.recommended_version.is_empty() && v.contains(&app.recommended_version)
        });

        ApplicationStatus {
            name: app.name.clone(),
            command: app.command.clone(),
            installed: version.is_some(),
            version,
            recommended_version: app.recommended_version.clone(),
            meets_recommendation,
            install_instruction: app.instruction_for(&self.os).map(str::to_string),
        }
    }
}

/// Returns a human readable name for an OS identifier.
pub fn os_display_name(os: &str) -> &str {
    match os {
        "darwin" | "macos" => "macOS",
        "linux" => "Linux",
        "windows" => "Windows",
        other => other,
    }
}
