use crate::config::ConfigFile;
use crate::error::{Result, WhiteroseError};
use crate::format::FormatParser;

pub struct JsonFormat;

impl FormatParser for JsonFormat {
    fn parse(&self, input: &str) -> Result<ConfigFile> {
        serde_json::from_str(input)
            .map_err(|e| WhiteroseError::parse_error_with_cause("json", "failed to decode JSON", e))
    }
}
