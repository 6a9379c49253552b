//! Embed configuration
//!
//! Holds the housekeeping values that every generated player URL carries and
//! the limits applied to raw input. A process-wide configuration can be
//! installed once at startup; until then the defaults below apply.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

/// Default housekeeping `app_id` appended to every player URL
pub const DEFAULT_APP_ID: &str = "your_site_name";

/// Host serving the player and its API script
pub const PLAYER_HOST: &str = "player.vimeo.com";

/// Default fixed embed width
pub const DEFAULT_WIDTH: &str = "640";

/// Default fixed embed height
pub const DEFAULT_HEIGHT: &str = "360";

/// Maximum raw input size scanned for an identifier (1 MiB)
pub const DEFAULT_MAX_INPUT_LEN: usize = 1_048_576;

/// Environment variable overriding the housekeeping `app_id`
pub const ENV_APP_ID: &str = "VIMEO_APP_ID";

/// Environment variable overriding the input length guard
pub const ENV_MAX_INPUT_LEN: &str = "VIMEO_MAX_INPUT_LEN";

static GLOBAL: OnceLock<EmbedConfig> = OnceLock::new();

/// Errors that can occur while building or installing configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A global configuration is already in place
    #[error("Embed configuration already installed")]
    AlreadyInstalled,

    /// A configuration value could not be parsed
    #[error("Invalid value for {key}: {value}")]
    InvalidValue {
        /// Configuration key
        key: String,
        /// Rejected value
        value: String,
    },
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Embed configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmbedConfig {
    /// Housekeeping parameter identifying the integration to the provider
    pub app_id: String,
    /// Width used for fixed-size markup when none is given
    pub default_width: String,
    /// Height used for fixed-size markup when none is given
    pub default_height: String,
    /// Inputs longer than this many bytes are never scanned
    pub max_input_len: usize,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            app_id: DEFAULT_APP_ID.to_string(),
            default_width: DEFAULT_WIDTH.to_string(),
            default_height: DEFAULT_HEIGHT.to_string(),
            max_input_len: DEFAULT_MAX_INPUT_LEN,
        }
    }
}

impl EmbedConfig {
    /// Build a configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    ///
    /// Missing or empty keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(app_id) = get(ENV_APP_ID) {
            config.app_id = app_id.trim().to_string();
        }
        if let Some(raw) = get(ENV_MAX_INPUT_LEN) {
            config.max_input_len =
                raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                    key: ENV_MAX_INPUT_LEN.to_string(),
                    value: raw.clone(),
                })?;
        }

        Ok(config)
    }

    /// Set the housekeeping `app_id`
    pub fn with_app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = app_id.into();
        self
    }

    /// Set the input length guard
    pub fn with_max_input_len(mut self, max_input_len: usize) -> Self {
        self.max_input_len = max_input_len;
        self
    }

    /// Install this configuration for the whole process
    ///
    /// Fails if a configuration was installed before, or if [`EmbedConfig::global`]
    /// already fell back to the defaults.
    pub fn install(self) -> Result<()> {
        let app_id = self.app_id.clone();
        GLOBAL.set(self).map_err(|_| ConfigError::AlreadyInstalled)?;
        tracing::debug!(app_id = %app_id, "Installed global embed configuration");
        Ok(())
    }

    /// The process-wide configuration
    pub fn global() -> &'static EmbedConfig {
        GLOBAL.get_or_init(Self::default)
    }

    /// Base player URL for an identifier, without query string
    pub fn player_base(&self, id: &str) -> String {
        format!("https://{}/video/{}", PLAYER_HOST, id)
    }

    /// Player API script URL
    pub fn player_script_url(&self) -> String {
        format!("https://{}/api/player.js", PLAYER_HOST)
    }
}
