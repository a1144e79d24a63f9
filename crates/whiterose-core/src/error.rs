//! Error types for Whiterose configuration handling.
//!
//! Loading and validating the configuration file is the only fallible
//! work done in this crate. Functions that can fail return
//! `Result<T, WhiteroseError>`; deciding whether a failure ends the
//! process is left to the binary.
//!
//! # Example
//!
//! ```
//! use whiterose_core::{Result, WhiteroseError};
//!
//! fn require_url(url: &str) -> Result<&str> {
//!     if url.is_empty() {
//!         return Err(WhiteroseError::validation_error(
//!             "repositories[0].url",
//!             "must not be empty",
//!         ));
//!     }
//!     Ok(url)
//! }
//!
//! assert!(require_url("").unwrap_err().is_validation_error());
//! ```

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Whiterose configuration operations.
#[derive(Debug, Error)]
pub enum WhiteroseError {
    /// No configuration file could be located.
    #[error("configuration file not found (searched: {})", format_searched(searched))]
    ConfigNotFound {
        /// Every path that was tried, in order.
        searched: Vec<PathBuf>,
    },

    /// The configuration file extension maps to no known format.
    #[error("unsupported configuration format for '{}': expected .json, .yaml or .yml", path.display())]
    UnsupportedFormat {
        /// The offending file.
        path: PathBuf,
    },

    /// Error parsing configuration content.
    #[error("Failed to parse configuration from '{source_name}': {message}")]
    ParseError {
        /// Source of the configuration (filename or format name)
        source_name: String,
        /// Description of the parse error
        message: String,
        /// Underlying error, if any
        #[source]
        cause: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation error for configuration values.
    #[error("Validation error for field '{field}': {message}")]
    ValidationError {
        /// Field that failed validation
        field: String,
        /// Description of the validation failure
        message: String,
    },

    /// The configuration file exists but could not be read.
    #[error("failed to read '{}': {cause}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        cause: io::Error,
    },

    /// I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn format_searched(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "no candidates".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl WhiteroseError {
    /// Creates a ConfigNotFound error.
    pub fn config_not_found(searched: Vec<PathBuf>) -> Self {
        Self::ConfigNotFound { searched }
    }

    /// Creates an UnsupportedFormat error.
    pub fn unsupported_format(path: impl Into<PathBuf>) -> Self {
        Self::UnsupportedFormat { path: path.into() }
    }

    /// Creates a ParseError without a cause.
    pub fn parse_error(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ParseError {
            source_name: source.into(),
            message: message.into(),
            cause: None,
        }
    }

    /// Creates a ParseError with a cause.
    pub fn parse_error_with_cause<E>(
        source: impl Into<String>,
        message: impl Into<String>,
        cause: E,
    ) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ParseError {
            source_name: source.into(),
            message: message.into(),
            cause: Some(Box::new(cause)),
        }
    }

    /// Creates a ValidationError.
    pub fn validation_error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates a Read error for a specific file.
    pub fn read(path: impl Into<PathBuf>, cause: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            cause,
        }
    }

    /// Returns true if no configuration file was found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ConfigNotFound { .. })
    }

    /// Returns true if this is a validation error.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::ValidationError { .. })
    }

    /// Returns true if this is a parse error.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::ParseError { .. })
    }

    /// Returns true if this is an I/O error.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Read { .. })
    }
}

/// Type alias for Results with WhiteroseError.
pub type Result<T> = std::result::Result<T, WhiteroseError>;
