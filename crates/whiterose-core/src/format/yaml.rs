use crate::config::ConfigFile;
use crate::error::{Result, WhiteroseError};
use crate::format::FormatParser;

pub struct YamlFormat;

impl FormatParser for YamlFormat {
    fn parse(&self, input: &str) -> Result<ConfigFile> {
        // serde_yaml rejects an empty document; treat it as an empty file.
        if input.trim().is_empty() {
            return Ok(ConfigFile::default());
        }
        serde_yaml::from_str(input)
            .map_err(|e| WhiteroseError::parse_error_with_cause("yaml", "failed to decode YAML", e))
    }
}
