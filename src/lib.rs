//! Draft Queue Bot Library
//!
//! A Discord bot that pairs players for drafts through a two-person queue.
//!
//! This crate provides the core functionality for:
//! - Routing chat messages to the `!queue`, `!exit` and `!help` commands
//! - Keeping match queues, globally or per channel
//! - Loading settings from a JSON file and the environment
//! - Connecting to Discord and replying in the originating channel

pub mod commands;
pub mod config;
pub mod discord;
pub mod matchmaking;
