//! Gateway event handling.

use serenity::all::{
    Context, CreateAllowedMentions, CreateMessage, EventHandler, Message, Ready, UserId,
};
use serenity::async_trait;
use tracing::{debug, info, warn};

use crate::commands::CommandHandler;
use crate::matchmaking::ParticipantId;

/// Longest message Discord accepts, in characters.
pub const MAX_MESSAGE_LENGTH: usize = 2000;

/// A chat message as seen by the bot, stripped of gateway details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub author: ParticipantId,

    /// Whether the bot itself sent this message.
    pub from_self: bool,

    pub content: String,

    /// Channel the message was posted in; replies go back here.
    pub channel_id: u64,
}

impl IncomingMessage {
    /// Builds an incoming message from a gateway message.
    ///
    /// The author is identified by their display tag.
    #[must_use]
    pub fn from_gateway(msg: &Message, bot_id: UserId) -> Self {
        let (author, from_self) = identify_author(msg.author.tag(), msg.author.id, bot_id);
        Self {
            author,
            from_self,
            content: msg.content.clone(),
            channel_id: msg.channel_id.get(),
        }
    }
}

/// Maps a message author to their participant identifier, and flags the
/// bot's own messages by comparing user IDs.
fn identify_author(tag: String, author_id: UserId, bot_id: UserId) -> (ParticipantId, bool) {
    (ParticipantId::new(tag), author_id == bot_id)
}

/// Builds the outgoing message for a reply. Echoed text never pings anyone.
fn outgoing_message(reply: String) -> CreateMessage {
    CreateMessage::new()
        .content(reply)
        .allowed_mentions(CreateAllowedMentions::new())
}

/// Computes the reply to send for a message, if any.
///
/// Returns `None` for the bot's own messages and for empty replies.
pub async fn respond(handler: &CommandHandler, incoming: &IncomingMessage) -> Option<String> {
    if incoming.from_self {
        return None;
    }

    debug!(
        "{} said: '{}' ({})",
        incoming.author, incoming.content, incoming.channel_id
    );

    let key = handler.key_for(incoming.channel_id).await;
    let reply = handler
        .handle_response_in(key, &incoming.content, &incoming.author)
        .await;

    if reply.is_empty() {
        debug!("Nothing to send for message from {}", incoming.author);
        return None;
    }

    Some(truncate(&reply, MAX_MESSAGE_LENGTH))
}

/// Serenity event handler that feeds messages through the command router.
#[derive(Debug, Clone)]
pub struct QueueBotEventHandler {
    commands: CommandHandler,
}

impl QueueBotEventHandler {
    #[must_use]
    pub const fn new(commands: CommandHandler) -> Self {
        Self { commands }
    }
}

#[async_trait]
impl EventHandler for QueueBotEventHandler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(
            "{} is now running (queue scope: {})",
            ready.user.tag(),
            self.commands.scope().await
        );
        debug!(
            "Connected as UID {} to {} guild(s), API v{}",
            ready.user.id,
            ready.guilds.len(),
            ready.version
        );
    }

    async fn message(&self, ctx: Context, msg: Message) {
        let bot_id = ctx.cache.current_user().id;
        let incoming = IncomingMessage::from_gateway(&msg, bot_id);

        let Some(reply) = respond(&self.commands, &incoming).await else {
            return;
        };

        if let Err(e) = msg
            .channel_id
            .send_message(&ctx.http, outgoing_message(reply))
            .await
        {
            warn!("Failed to send reply to {}: {}", msg.channel_id, e);
        }
    }
}

/// Truncates a string to at most `max_len` characters.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_owned()
    } else {
        s.chars().take(max_len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchmaking::QueueScope;

    fn incoming(author: &str, content: &str, channel_id: u64) -> IncomingMessage {
        IncomingMessage {
            author: ParticipantId::from(author),
            from_self: false,
            content: content.to_owned(),
            channel_id,
        }
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello", 10), "Hello");
        assert_eq!(truncate("Hello, World!", 5), "Hello");
        assert_eq!(truncate("Привет", 3), "При");
    }

    #[test]
    fn test_author_is_identified_by_tag() {
        let bot = UserId::new(1);
        let (author, from_self) = identify_author("alice".to_owned(), UserId::new(2), bot);
        assert_eq!(author, ParticipantId::from("alice"));
        assert!(!from_self);

        // Same tag as the bot, different account
        let (_, from_self) = identify_author("queuebot".to_owned(), UserId::new(3), bot);
        assert!(!from_self);

        let (author, from_self) = identify_author("queuebot#0420".to_owned(), bot, bot);
        assert_eq!(author, ParticipantId::from("queuebot#0420"));
        assert!(from_self);
    }

    #[test]
    fn test_outgoing_message_suppresses_mentions() -> anyhow::Result<()> {
        let json = serde_json::to_value(outgoing_message("@everyone hi".to_owned()))?;
        assert_eq!(json["content"], "@everyone hi");
        assert_eq!(json["allowed_mentions"]["parse"], serde_json::json!([]));
        Ok(())
    }

    #[tokio::test]
    async fn test_own_messages_are_ignored() {
        let handler = CommandHandler::new(QueueScope::Global);
        let mut msg = incoming("bot", "!queue", 1);
        msg.from_self = true;

        assert_eq!(respond(&handler, &msg).await, None);
        assert_eq!(handler.registry().read().await.waiting_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_content_sends_nothing() {
        let handler = CommandHandler::new(QueueScope::Global);
        assert_eq!(respond(&handler, &incoming("alice", "", 1)).await, None);
    }

    #[tokio::test]
    async fn test_echo_and_match_flow() {
        let handler = CommandHandler::new(QueueScope::Global);

        assert_eq!(
            respond(&handler, &incoming("alice", "Hi", 1)).await.as_deref(),
            Some("hi")
        );
        assert_eq!(
            respond(&handler, &incoming("alice", "!queue", 1)).await.as_deref(),
            Some("@alice has been added to the queue")
        );
        // Global scope: a different channel joins the same queue.
        assert_eq!(
            respond(&handler, &incoming("bob", "!queue", 2)).await.as_deref(),
            Some("@alice has been matched against @bob")
        );
    }

    #[tokio::test]
    async fn test_channel_scope_uses_originating_channel() {
        let handler = CommandHandler::new(QueueScope::Channel);

        respond(&handler, &incoming("alice", "!queue", 1)).await;
        assert_eq!(
            respond(&handler, &incoming("bob", "!queue", 2)).await.as_deref(),
            Some("@bob has been added to the queue")
        );
        assert_eq!(handler.registry().read().await.waiting_count(), 2);
    }

    #[tokio::test]
    async fn test_long_echo_is_truncated() {
        let handler = CommandHandler::new(QueueScope::Global);
        let long = "A".repeat(MAX_MESSAGE_LENGTH + 10);

        let Some(reply) = respond(&handler, &incoming("alice", &long, 1)).await else {
            panic!("expected an echo reply");
        };
        assert_eq!(reply.chars().count(), MAX_MESSAGE_LENGTH);
        assert!(reply.chars().all(|c| c == 'a'));
    }
}
