use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub selection: SelectionConfig,
    #[serde(default)]
    pub fleet: FleetConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// How many days a single reservation may span.
    #[serde(default = "default_max_days")]
    pub max_days: usize,
}

fn default_max_days() -> usize {
    3
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetConfig {
    /// Seconds between two status-board refresh ticks.
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,
    /// Seconds a restarting server stays in maintenance before coming back.
    #[serde(default = "default_restart_grace_secs")]
    pub restart_grace_secs: u64,
}

fn default_refresh_secs() -> u64 {
    5
}

fn default_restart_grace_secs() -> u64 {
    3
}

impl Config {
    pub fn load(filename: impl AsRef<Path>) -> Result<Self> {
        let config = fs::read_to_string(filename)?;
        Ok(serde_yaml::from_str(&config)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            selection: SelectionConfig::default(),
            fleet: FleetConfig::default(),
        }
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            max_days: default_max_days(),
        }
    }
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            refresh_secs: default_refresh_secs(),
            restart_grace_secs: default_restart_grace_secs(),
        }
    }
}
