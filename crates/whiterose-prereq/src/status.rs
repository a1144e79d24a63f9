use std::fmt;

/// The result of checking one application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationStatus {
    pub name: String,
    pub command: String,
    /// True if `<command> <versionFlag>` exited successfully.
    pub installed: bool,
    /// Trimmed output of the version command, when installed.
    pub version: Option<String>,
    pub recommended_version: String,
    /// True if the version output mentions the recommended version.
    pub meets_recommendation: bool,
    /// Install hint for the current OS, if the configuration has one.
    pub install_instruction: Option<String>,
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.installed, &self.version) {
            (true, Some(version)) => write!(f, "{}: installed ({})", self.name, version),
            (true, None) => write!(f, "{}: installed", self.name),
            (false, _) => write!(f, "{}: not installed", self.name),
        }
    }
}
