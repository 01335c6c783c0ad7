//! Application settings and Discord configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::matchmaking::QueueScope;

/// Discord connection configuration.
#[derive(Clone)]
pub struct DiscordConfig {
    /// Bot token (obtain from the Discord developer portal).
    pub token: String,
}

impl DiscordConfig {
    /// Creates a new Discord configuration.
    #[must_use]
    pub fn new(token: String) -> Self {
        Self { token }
    }

    /// Creates configuration from environment variables.
    ///
    /// Expects `DISCORD_TOKEN` to be set.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is missing or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let token = lookup("DISCORD_TOKEN")
            .map(|t| t.trim().to_owned())
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingEnvVar("DISCORD_TOKEN"))?;

        Ok(Self { token })
    }
}

impl std::fmt::Debug for DiscordConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordConfig")
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Bot-specific settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotSettings {
    /// How match queues are partitioned across channels.
    #[serde(default)]
    pub queue_scope: QueueScope,

    /// Log level for the application.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_owned()
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            queue_scope: QueueScope::default(),
            log_level: default_log_level(),
        }
    }
}

impl BotSettings {
    /// Loads settings from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let settings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    /// Loads settings from a JSON file, falling back to defaults if the file
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves settings to a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Applies overrides from environment variables (`QUEUE_SCOPE`, `RUST_LOG`).
    ///
    /// # Errors
    ///
    /// Returns an error if `QUEUE_SCOPE` is set to an unknown value.
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_lookup(|key| std::env::var(key).ok())
    }

    fn apply_lookup(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        if let Some(scope) = lookup("QUEUE_SCOPE") {
            self.queue_scope = scope.parse().map_err(ConfigError::InvalidQueueScope)?;
        }

        if let Some(level) = lookup("RUST_LOG") {
            self.log_level = level;
        }

        Ok(self)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Invalid queue scope '{0}' (expected 'global' or 'channel')")]
    InvalidQueueScope(String),

    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings file: {0}")]
    Parse(#[from] serde_json::Error),
}
