use std::path::PathBuf;

use crate::env::Environment;
use crate::error::{Result, WhiteroseError};

/// Environment variable that names the configuration file explicitly.
pub const CONFIG_FILE_VAR: &str = "CONFIG_FILE";

/// File names probed in the home directory, in order.
const HOME_CANDIDATES: [&str; 3] = [".config.yml", ".config.yaml", ".config.json"];

/// Finds the configuration file to load.
///
/// Precedence: an explicit path, then `CONFIG_FILE`, then the first
/// existing `.config.yml`, `.config.yaml` or `.config.json` in the home
/// directory.
#[derive(Debug, Clone)]
pub struct ConfigLocator<'a> {
    env: &'a Environment,
    explicit: Option<PathBuf>,
}

impl<'a> ConfigLocator<'a> {
    /// Creates a locator reading from the given environment.
    pub fn new(env: &'a Environment) -> Self {
        Self {
            env,
            explicit: None,
        }
    }

    /// Uses `path` instead of searching.
    pub fn with_explicit(mut self, path: Option<PathBuf>) -> Self {
        self.explicit = path;
        self
    }

    /// Resolves the configuration file path.
    pub fn locate(&self) -> Result<PathBuf> {
        if let Some(path) = &self.explicit {
            return Ok(path.clone());
        }

        if let Some(path) = self.env.get(CONFIG_FILE_VAR) {
            return Ok(PathBuf::from(path));
        }

        let Some(home) = self.env.home_dir() else {
            return Err(WhiteroseError::config_not_found(Vec::new()));
        };

        let candidates: Vec<PathBuf> = HOME_CANDIDATES.iter().map(|f| home.join(f)).collect();
        candidates
            .iter()
            .find(|p| p.is_file())
            .cloned()
            .ok_or_else(|| WhiteroseError::config_not_found(candidates))
    }
}
