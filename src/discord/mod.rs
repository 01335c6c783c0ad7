//! Discord integration module.
//!
//! A thin layer over `serenity`: receives gateway messages, hands them to
//! the command router, and sends the reply back to the originating channel.

mod client;
mod handler;

pub use client::{DiscordError, intents, run};
pub use handler::{IncomingMessage, MAX_MESSAGE_LENGTH, QueueBotEventHandler, respond};
