//! Reply texts for every command outcome.

use super::BotCommand;
use crate::matchmaking::ParticipantId;

pub fn already_queued() -> String {
    "You are already queued!".to_owned()
}

pub fn added(user: &ParticipantId) -> String {
    format!("@{user} has been added to the queue")
}

pub fn matched(first: &ParticipantId, second: &ParticipantId) -> String {
    format!("@{first} has been matched against @{second}")
}

pub fn exited(user: &ParticipantId) -> String {
    format!("@{user} has exited the queue")
}

pub fn not_queued(user: &ParticipantId) -> String {
    format!("@{user} is not in the queue")
}

/// The help message. Identical on every call.
pub fn help() -> String {
    let mut lines = vec![
        "Welcome to the LoRDraft Test Bot.".to_owned(),
        String::new(),
        "Current available commands:".to_owned(),
    ];

    for command in BotCommand::all_commands() {
        lines.push(format!("\t{}: {}", command.name(), command.description()));
    }

    lines.push(String::new());
    lines.push("Thanks!".to_owned());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_added() {
        assert_eq!(
            added(&ParticipantId::from("alice")),
            "@alice has been added to the queue"
        );
    }

    #[test]
    fn test_matched() {
        assert_eq!(
            matched(&ParticipantId::from("alice"), &ParticipantId::from("bob")),
            "@alice has been matched against @bob"
        );
    }

    #[test]
    fn test_help_text() {
        assert_eq!(
            help(),
            "Welcome to the LoRDraft Test Bot.\n\n\
             Current available commands:\n\
             \t!queue: adds you to the draft queue\n\
             \t!exit: removes you from the draft queue\n\n\
             Thanks!"
        );
    }
}
