//! Configuration system for the example agent.
//!
//! Configuration is optional: the agent runs with built-in defaults when no
//! TOML file is present. Environment variables may additionally be populated
//! from a local `.env` file when the `dotenv` feature is enabled.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::agent::DEFAULT_AGENT_NAME;

/// Main agent configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AgentConfig {
    #[serde(default)]
    pub agent: AgentSection,
}

/// Agent section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentSection {
    /// Agent display name used in all status output
    #[serde(default = "default_agent_name")]
    pub name: String,
    /// Description of what this agent does
    #[serde(default)]
    pub description: Option<String>,
}

impl Default for AgentSection {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            description: None,
        }
    }
}

fn default_agent_name() -> String {
    DEFAULT_AGENT_NAME.to_string()
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Invalid agent name: {0}")]
    InvalidAgentName(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl AgentConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: AgentConfig = toml::from_str(&content)?;

        validate_agent_name(&config.agent.name)?;

        Ok(config)
    }
}

/// Validate the configured agent name
///
/// Only configuration files are validated; names passed directly to
/// [`crate::agent::Agent::new`] are unconstrained.
fn validate_agent_name(name: &str) -> Result<(), ConfigError> {
    if name.trim().is_empty() {
        return Err(ConfigError::InvalidAgentName(
            "agent name must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Populate process environment variables from a local `.env` file.
///
/// A missing file is not an error. Any other failure is reported and the
/// ambient process environment is used as-is.
#[cfg(feature = "dotenv")]
pub fn load_env_file() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(err) if err.not_found() => tracing::debug!("No .env file found"),
        Err(err) => tracing::warn!("Failed to load .env file: {err}"),
    }
}

/// Advisory fallback when the crate is built without dotenv support.
#[cfg(not(feature = "dotenv"))]
pub fn load_env_file() {
    println!("Note: dotenv support not compiled in. Environment variables from the shell will be used.");
}
