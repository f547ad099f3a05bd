//! Host-supplied plinth configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::runtime::PlinthError;

/// Reach at level zero before any multiplier is applied.
pub const DEFAULT_BASE_REACH: i64 = 16;

fn default_base_reach() -> i64 {
    DEFAULT_BASE_REACH
}

/// Configuration owned by the host, not by the plinth core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlinthConfig {
    #[serde(default = "default_base_reach")]
    pub base_reach: i64,
}

impl PlinthConfig {
    pub fn from_toml(input: &str) -> Result<Self, PlinthError> {
        Ok(toml::from_str(input)?)
    }

    pub fn load_toml(path: impl AsRef<Path>) -> Result<Self, PlinthError> {
        let data = fs::read_to_string(path.as_ref())?;
        Self::from_toml(&data)
    }
}

impl Default for PlinthConfig {
    fn default() -> Self {
        Self {
            base_reach: DEFAULT_BASE_REACH,
        }
    }
}
