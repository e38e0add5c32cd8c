//! Configuration from headliner.toml

use crate::hierarchy::HierarchyChecks;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "headliner.toml";

/// Main configuration from headliner.toml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadlinerConfig {
    /// File extensions treated as pages when scanning a directory
    pub extensions: Vec<String>,

    /// Hierarchy checks to run
    pub checks: HierarchyChecks,
}

impl Default for HeadlinerConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["html".to_string(), "htm".to_string()],
            checks: HierarchyChecks::default(),
        }
    }
}

impl HeadlinerConfig {
    /// Load configuration from a headliner.toml file
    ///
    /// # Parameters
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(HeadlinerConfig)` - Successfully loaded configuration
    /// * `Err(ConfigError)` - Error reading or parsing the configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(path.to_path_buf(), e))?;

        let config: HeadlinerConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(path.to_path_buf(), e))?;

        Ok(config)
    }

    /// Load `path` if given, otherwise headliner.toml in `dir` if it exists,
    /// otherwise the defaults
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            log::info!("Using configuration from {}", candidate.display());
            Self::load(candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a headliner.toml file
    ///
    /// # Parameters
    /// * `path` - Path where the configuration file will be written
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).map_err(ConfigError::SerializeError)?;

        fs::write(path, content).map_err(|e| ConfigError::IoError(path.to_path_buf(), e))?;

        Ok(())
    }

    /// Switch off the checks named by command line flags
    ///
    /// A flag can only disable a check. A check already disabled in
    /// headliner.toml stays disabled when its flag is absent.
    pub fn disable_checks(
        &mut self,
        multiple_top_level: bool,
        missing_top_level: bool,
        skipped_level: bool,
    ) {
        self.checks.multiple_top_level &= !multiple_top_level;
        self.checks.missing_top_level &= !missing_top_level;
        self.checks.skipped_level &= !skipped_level;
    }

    /// Whether a file extension (without the dot) names a page
    pub fn matches_extension(&self, ext: &str) -> bool {
        self.extensions
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ext))
    }
}

/// Errors that can occur when loading or saving configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error for {}: {}", .0.display(), .1)]
    IoError(PathBuf, #[source] std::io::Error),

    #[error("TOML parse error in {}: {}", .0.display(), .1)]
    ParseError(PathBuf, #[source] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    SerializeError(#[from] toml::ser::Error),
}
