//! Configuration module for the queue bot.
//!
//! Settings come from an optional JSON file, overridden by environment
//! variables. The Discord token is only ever read from the environment.

mod settings;

pub use settings::{BotSettings, ConfigError, DiscordConfig};
