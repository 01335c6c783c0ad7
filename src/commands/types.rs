//! Command types and definitions.

use std::fmt;

/// Available bot commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotCommand {
    /// Join the draft queue, or get matched if someone is waiting.
    Queue,

    /// Leave the draft queue.
    Exit,

    /// Show help information.
    Help,
}

impl BotCommand {
    /// Parses a command from a message text.
    ///
    /// Matching is case-insensitive and exact: surrounding whitespace or
    /// trailing arguments make the message a non-command.
    ///
    /// Returns `None` if the message is not a command.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        match text.to_lowercase().as_str() {
            "!queue" => Some(Self::Queue),
            "!exit" => Some(Self::Exit),
            "!help" => Some(Self::Help),
            _ => None,
        }
    }

    /// Returns the command name as it appears in help.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Queue => "!queue",
            Self::Exit => "!exit",
            Self::Help => "!help",
        }
    }

    /// Returns the command description for help.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Queue => "adds you to the draft queue",
            Self::Exit => "removes you from the draft queue",
            Self::Help => "shows this message",
        }
    }

    /// Commands listed in the help message, in display order.
    #[must_use]
    pub const fn all_commands() -> &'static [Self] {
        &[Self::Queue, Self::Exit]
    }
}

impl fmt::Display for BotCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
