//! Configuration for ferry
//!
//! Configuration is read from `config.toml`, found by checking in order:
//! an explicit path, `$FERRY_CONFIG_DIR/config.toml`, then
//! `<platform config dir>/ferry/config.toml`. No file means defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FerryError, Result};

pub use types::{FerryConfig, SearchConfig, StrategyChoice};

const CONFIG_DIR: &str = "ferry";
const CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV_VAR: &str = "FERRY_CONFIG_DIR";

impl FerryConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(FerryError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)?;
        let config: FerryConfig =
            toml::from_str(&content).map_err(|e| FerryError::invalid_input(path, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file, creating its directory
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| FerryError::failed("create config directory", e))?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| FerryError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.puzzle.validate()?;
        if self.search.max_expansions == Some(0) {
            crate::bail_usage!("max_expansions must be at least 1");
        }
        Ok(())
    }

    /// Default location of the configuration file, if one can be determined
    pub fn default_path() -> Option<PathBuf> {
        let env_dir = std::env::var_os(CONFIG_DIR_ENV_VAR).map(PathBuf::from);
        let platform_dir = dirs::config_dir().map(|dir| dir.join(CONFIG_DIR));
        env_dir.or(platform_dir).map(|dir| dir.join(CONFIG_FILE))
    }

    /// Resolve the effective configuration and the file it came from.
    ///
    /// An explicit path must exist; the default location is optional.
    pub fn discover(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }
        match Self::default_path() {
            Some(path) if path.is_file() => {
                tracing::debug!(path = %path.display(), "config_discovered");
                Ok((Self::load(&path)?, Some(path)))
            }
            _ => Ok((Self::default(), None)),
        }
    }
}
