use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A command-line application the development environment expects.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSpec {
    /// Human readable name, e.g. `Git`.
    pub name: String,

    /// Executable to run, e.g. `git`.
    pub command: String,

    /// Argument that makes the executable print its version.
    #[serde(default)]
    pub version_flag: String,

    /// Version the team recommends.
    #[serde(default)]
    pub recommended_version: String,

    /// Installation hint keyed by OS identifier (`linux`, `darwin`, `windows`).
    #[serde(default)]
    pub install_instructions: IndexMap<String, String>,
}

impl ApplicationSpec {
    /// Creates an application spec without install instructions.
    pub fn new(
        name: impl Into<String>,
        command: impl Into<String>,
        version_flag: impl Into<String>,
        recommended_version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
            version_flag: version_flag.into(),
            recommended_version: recommended_version.into(),
            install_instructions: IndexMap::new(),
        }
    }

    /// Builder-style method to add an install instruction for an OS.
    pub fn with_instruction(mut self, os: impl Into<String>, text: impl Into<String>) -> Self {
        self.install_instructions.insert(os.into(), text.into());
        self
    }

    /// Returns the install instruction for the given OS identifier.
    pub fn instruction_for(&self, os: &str) -> Option<&str> {
        self.install_instructions.get(os).map(String::as_str)
    }

    /// Returns true if `query` names this application (by name or command, ignoring case).
    pub fn matches(&self, query: &str) -> bool {
        self.name.eq_ignore_ascii_case(query) || self.command.eq_ignore_ascii_case(query)
    }
}
