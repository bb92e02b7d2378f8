//! Balancer configuration.
//!
//! ```rust
//! use tb_core::BalancerConfig;
//!
//! let config = BalancerConfig::from_json(r#"{"limit": 10}"#).unwrap();
//! assert_eq!(config.limit, 10);
//! assert_eq!(BalancerConfig::default().limit, 5);
//! ```

use crate::balance::DEFAULT_LIMIT;
use crate::error::{BalanceError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::{env, fs};

/// Env var naming a JSON config file, read by [`BalancerConfig::from_env`].
pub const CONFIG_PATH_ENV: &str = "TB_BALANCER_CONFIG_PATH";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalancerConfig {
    /// Number of splits to return (default: 5)
    pub limit: usize,
}

impl Default for BalancerConfig {
    fn default() -> Self {
        Self { limit: DEFAULT_LIMIT }
    }
}

impl BalancerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.limit == 0 {
            return Err(BalanceError::InvalidLimit(self.limit));
        }
        Ok(())
    }

    /// Load and validate a config file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            BalanceError::Config(format!("Failed to read config file '{}': {e}", path.display()))
        })?;

        let config = Self::from_json(&content).map_err(|e| {
            BalanceError::Config(format!("Failed to parse config file '{}': {e}", path.display()))
        })?;

        config.validate().map_err(|e| {
            BalanceError::Config(format!("Invalid config file '{}': {e}", path.display()))
        })?;

        log::debug!("Loaded balancer config from {}", path.display());
        Ok(config)
    }

    /// Config from the file named by `TB_BALANCER_CONFIG_PATH`, or the
    /// default when the variable is unset or blank.
    pub fn from_env() -> Result<Self> {
        let Ok(path) = env::var(CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }

        Self::from_path(Path::new(path))
    }
}
