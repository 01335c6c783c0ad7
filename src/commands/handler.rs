//! Command handler implementation.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use super::replies;
use super::types::BotCommand;
use crate::matchmaking::{
    JoinOutcome, LeaveOutcome, ParticipantId, QueueKey, QueueRegistry, QueueScope,
};

/// Routes chat messages to commands and owns the matchmaking state.
#[derive(Debug, Clone)]
pub struct CommandHandler {
    /// Shared queue registry.
    queues: Arc<RwLock<QueueRegistry>>,
}

impl CommandHandler {
    /// Creates a handler with fresh, empty queues partitioned by `scope`.
    #[must_use]
    pub fn new(scope: QueueScope) -> Self {
        Self::with_registry(Arc::new(RwLock::new(QueueRegistry::new(scope))))
    }

    /// Creates a handler over an existing registry.
    #[must_use]
    pub const fn with_registry(queues: Arc<RwLock<QueueRegistry>>) -> Self {
        Self { queues }
    }

    /// Gets a reference to the queue registry.
    #[must_use]
    pub fn registry(&self) -> &Arc<RwLock<QueueRegistry>> {
        &self.queues
    }

    /// How the queues are partitioned.
    pub async fn scope(&self) -> QueueScope {
        self.queues.read().await.scope()
    }

    /// Maps an originating channel to the queue it should use.
    pub async fn key_for(&self, channel_id: u64) -> QueueKey {
        self.queues.read().await.key_for(channel_id)
    }

    /// Handles a message against the global queue.
    ///
    /// Returns the reply text. Messages that are not commands are echoed
    /// back lower-cased.
    pub async fn handle_response(&self, message: &str, user: &ParticipantId) -> String {
        self.handle_response_in(QueueKey::Global, message, user)
            .await
    }

    /// Handles a message against the queue identified by `key`.
    pub async fn handle_response_in(
        &self,
        key: QueueKey,
        message: &str,
        user: &ParticipantId,
    ) -> String {
        let Some(command) = BotCommand::parse(message) else {
            return message.to_lowercase();
        };

        debug!("Handling command {} from {} in {}", command, user, key);

        match command {
            BotCommand::Queue => self.handle_queue(key, user).await,
            BotCommand::Exit => self.handle_exit(key, user).await,
            BotCommand::Help => replies::help(),
        }
    }

    async fn handle_queue(&self, key: QueueKey, user: &ParticipantId) -> String {
        // Check, append and drain under one write lock.
        let mut queues = self.queues.write().await;
        let outcome = queues.queue_mut(key).join(user.clone());

        match outcome {
            JoinOutcome::AlreadyQueued => replies::already_queued(),
            JoinOutcome::Waiting { position } => {
                debug!("{} is waiting in {} (position {})", user, key, position);
                replies::added(user)
            }
            JoinOutcome::Matched(pairing) => {
                queues.prune(&key);
                info!(
                    "Matched {} against {} in {} after {}s",
                    pairing.first.id,
                    pairing.second.id,
                    key,
                    pairing.wait_time().num_seconds()
                );
                replies::matched(&pairing.first.id, &pairing.second.id)
            }
        }
    }

    async fn handle_exit(&self, key: QueueKey, user: &ParticipantId) -> String {
        let mut queues = self.queues.write().await;
        let outcome = queues.queue_mut(key).leave(user);
        queues.prune(&key);

        match outcome {
            LeaveOutcome::Left => {
                debug!("{} left {}", user, key);
                replies::exited(user)
            }
            LeaveOutcome::NotQueued => replies::not_queued(user),
        }
    }
}
