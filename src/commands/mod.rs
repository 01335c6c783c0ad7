//! Command handling module.
//!
//! Turns chat messages into replies. Three commands are recognized
//! (`!queue`, `!exit`, `!help`); anything else is echoed back.

mod handler;
pub mod replies;
mod types;

pub use handler::CommandHandler;
pub use types::BotCommand;
