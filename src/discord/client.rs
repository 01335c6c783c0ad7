//! Discord client lifecycle.

use serenity::Client;
use serenity::all::GatewayIntents;
use thiserror::Error;
use tracing::info;

use super::QueueBotEventHandler;
use crate::config::DiscordConfig;

/// Errors that can occur while running the Discord client.
#[derive(Debug, Error)]
pub enum DiscordError {
    #[error("Failed to build Discord client: {0}")]
    Build(#[source] serenity::Error),

    #[error("Gateway error: {0}")]
    Gateway(#[source] serenity::Error),
}

/// Gateway intents the bot needs to read and answer messages.
#[must_use]
pub fn intents() -> GatewayIntents {
    GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
}

/// Connects to Discord and processes events until the gateway stops or
/// Ctrl+C is received.
///
/// # Errors
///
/// Returns an error if the client cannot be built or the gateway fails.
pub async fn run(config: &DiscordConfig, handler: QueueBotEventHandler) -> Result<(), DiscordError> {
    info!("Connecting to Discord...");

    let mut client = Client::builder(&config.token, intents())
        .event_handler(handler)
        .await
        .map_err(DiscordError::Build)?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl+C, shutting down...");
            shard_manager.shutdown_all().await;
        }
    });

    client.start().await.map_err(DiscordError::Gateway)?;

    info!("Disconnected from Discord");
    Ok(())
}
