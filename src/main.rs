//! Draft Queue Bot - Main Entry Point
//!
//! A Discord bot that pairs players for drafts. Players join with `!queue`
//! and are matched as soon as a second player queues.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use draft_queue_bot::commands::CommandHandler;
use draft_queue_bot::config::{BotSettings, DiscordConfig};
use draft_queue_bot::discord::{self, QueueBotEventHandler};
use draft_queue_bot::matchmaking::QueueScope;

/// Discord bot that pairs players for drafts.
#[derive(Parser, Debug)]
#[command(name = "draft_queue_bot")]
#[command(about = "Pair Discord users for drafts through a two-person queue")]
#[command(version)]
struct Args {
    /// Path to the JSON settings file (optional).
    #[arg(short, long, default_value = "bot.json")]
    config: PathBuf,

    /// Path to the .env file for environment variables.
    #[arg(long, default_value = ".env")]
    env_file: PathBuf,

    /// Log level (trace, debug, info, warn, error). Overrides the settings file.
    #[arg(short, long)]
    log_level: Option<String>,

    /// Queue partitioning (global or channel). Overrides the settings file.
    #[arg(long)]
    queue_scope: Option<QueueScope>,

    /// Generate an example settings file and exit.
    #[arg(long)]
    generate_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.generate_config {
        return generate_example_config();
    }

    // Load environment variables before reading settings
    let env_loaded = dotenvy::from_path(&args.env_file);

    let mut settings = BotSettings::load_or_default(&args.config)
        .with_context(|| format!("Failed to load settings from {}", args.config.display()))?
        .apply_env()
        .context("Invalid settings in environment")?;

    if let Some(level) = args.log_level {
        settings.log_level = level;
    }
    if let Some(scope) = args.queue_scope {
        settings.queue_scope = scope;
    }

    init_logging(&settings.log_level);

    if let Err(e) = env_loaded {
        debug!("Could not load .env file ({}): {}", args.env_file.display(), e);
    }

    let discord_config =
        DiscordConfig::from_env().context("Failed to load Discord configuration from environment")?;

    info!("Starting draft queue bot (queue scope: {})", settings.queue_scope);

    let commands = CommandHandler::new(settings.queue_scope);
    discord::run(&discord_config, QueueBotEventHandler::new(commands))
        .await
        .context("Discord client stopped with an error")?;

    info!("Shut down cleanly");
    Ok(())
}

/// Initializes the logging subsystem.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Generates an example settings file.
fn generate_example_config() -> Result<()> {
    let path = "bot.example.json";
    BotSettings::default()
        .save_to_file(path)
        .with_context(|| format!("Failed to write {path}"))?;

    println!("✓ Example settings written to: {path}");
    println!("\nTo use this bot:");
    println!("1. Copy {path} to bot.json and adjust queue_scope if needed");
    println!("2. Create a .env file with DISCORD_TOKEN");
    println!("3. Enable the Message Content intent for the bot in the developer portal");
    println!("4. Run: draft_queue_bot");

    Ok(())
}
