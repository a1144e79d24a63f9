use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ApplicationSpec, RepositorySpec};
use crate::error::{Result, WhiteroseError};
use crate::format::{ConfigFormat, FormatParser, JsonFormat, YamlFormat};

/// The whole configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Repositories to clone, in processing order.
    #[serde(default)]
    pub repositories: Vec<RepositorySpec>,

    /// Applications checked by the prerequisite validator.
    #[serde(default)]
    pub applications: Vec<ApplicationSpec>,
}

impl ConfigFile {
    /// Parses and validates a JSON document.
    pub fn from_json(input: &str) -> Result<Self> {
        let config = JsonFormat.parse(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a YAML document.
    pub fn from_yaml(input: &str) -> Result<Self> {
        let config = YamlFormat.parse(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a configuration file, picking the decoder from the extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content =
            std::fs::read_to_string(path).map_err(|e| WhiteroseError::read(path, e))?;

        let config = format.parser().parse(&content).map_err(|e| match e {
            WhiteroseError::ParseError { message, cause, .. } => WhiteroseError::ParseError {
                source_name: path.display().to_string(),
                message,
                cause,
            },
            other => other,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Checks that every repository entry has a URL and a directory.
    pub fn validate(&self) -> Result<()> {
        for (i, repo) in self.repositories.iter().enumerate() {
            if repo.url.trim().is_empty() {
                return Err(WhiteroseError::validation_error(
                    format!("repositories[{i}].url"),
                    "must not be empty",
                ));
            }
            if repo.target_directory.trim().is_empty() {
                return Err(WhiteroseError::validation_error(
                    format!("repositories[{i}].directory"),
                    "must not be empty",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_lists_default_to_empty() {
        let config = ConfigFile::from_json("{}").unwrap();
        assert!(config.repositories.is_empty());
        assert!(config.applications.is_empty());
    }

    #[test]
    fn test_empty_yaml_document() {
        let config = ConfigFile::from_yaml("").unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_validate_rejects_empty_directory() {
        let err = ConfigFile::from_json(
            r#"{"repositories":[{"url":"https://h/a.git","directory":"/tmp/a"},
                                 {"url":"https://h/b.git","directory":" "}]}"#,
        )
        .unwrap_err();

        match err {
            WhiteroseError::ValidationError { field, .. } => {
                assert_eq!(field, "repositories[1].directory")
            },
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_empty_url() {
        let err = ConfigFile::from_yaml("repositories:\n  - url: ''\n    directory: /tmp/a\n")
            .unwrap_err();
        assert!(err.is_validation_error());
        assert!(err.to_string().contains("repositories[0].url"));
    }
}
