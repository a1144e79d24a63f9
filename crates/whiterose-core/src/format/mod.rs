use std::path::Path;

use crate::config::ConfigFile;
use crate::error::{Result, WhiteroseError};

pub mod json;
pub mod yaml;

pub use json::JsonFormat;
pub use yaml::YamlFormat;

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Returns the file extensions associated with this format.
    pub fn extensions(&self) -> &[&str] {
        match self {
            ConfigFormat::Json => &["json"],
            ConfigFormat::Yaml => &["yaml", "yml"],
        }
    }

    /// Guesses the format from a file extension (without dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_lowercase();
        [ConfigFormat::Json, ConfigFormat::Yaml]
            .into_iter()
            .find(|format| format.extensions().contains(&ext.as_str()))
    }

    /// Determines the format of a file from its extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| WhiteroseError::unsupported_format(path))
    }

    /// Returns the parser for this format.
    pub fn parser(&self) -> &'static dyn FormatParser {
        match self {
            ConfigFormat::Json => &JsonFormat,
            ConfigFormat::Yaml => &YamlFormat,
        }
    }
}

/// A trait for parsing a configuration file from a string.
pub trait FormatParser: Send + Sync {
    /// Parses the input string into a ConfigFile.
    fn parse(&self, input: &str) -> Result<ConfigFile>;
}
