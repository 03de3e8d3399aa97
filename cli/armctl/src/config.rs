//! Configuration and defaults.
//!
//! Handles:
//! - Resource Manager endpoint configuration
//! - Default subscription and resource group
//!
//! Access tokens are never written to disk; they come from `--token` or
//! `ARM_ACCESS_TOKEN`. `--endpoint` / `ARM_ENDPOINT` override the saved
//! endpoint at runtime.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use armkit_sdk::DEFAULT_ENDPOINT;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Get the config directory path.
fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "armkit", "armctl")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Resource Manager endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Default subscription ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,

    /// Default resource group name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<String>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            subscription_id: None,
            resource_group: None,
        }
    }
}

impl Config {
    /// Load config from disk, or return default.
    pub fn load() -> Result<Self> {
        let path = config_dir()?.join(CONFIG_FILE);

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        Self::from_json(&contents).with_context(|| format!("Failed to parse config from {:?}", path))
    }

    fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Save config to disk.
    pub fn save(&self) -> Result<()> {
        let dir = config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;

        let path = dir.join(CONFIG_FILE);
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write config to {:?}", path))
    }

    /// Location of the config file, for display.
    pub fn path() -> Result<PathBuf> {
        Ok(config_dir()?.join(CONFIG_FILE))
    }
}
