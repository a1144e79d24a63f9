//! # Whiterose Prereq
//!
//! Checks that the command-line applications a development environment
//! expects are installed, and reports their versions against the
//! recommended ones from the configuration file.

mod status;
mod validator;

pub use status::ApplicationStatus;
pub use validator::{AppValidator, os_display_name};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_defined() {
        assert!(!version().is_empty());
    }
}
