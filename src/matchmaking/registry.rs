//! Ownership of every match queue, partitioned by scope.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::MatchQueue;

/// How queues are partitioned across chat surfaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueueScope {
    /// One queue shared by every channel the bot can see.
    #[default]
    Global,

    /// An independent queue per channel.
    Channel,
}

impl FromStr for QueueScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "global" => Ok(Self::Global),
            "channel" => Ok(Self::Channel),
            other => Err(other.to_owned()),
        }
    }
}

impl fmt::Display for QueueScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => f.write_str("global"),
            Self::Channel => f.write_str("channel"),
        }
    }
}

/// Identifies one queue within the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueKey {
    Global,
    Channel(u64),
}

impl fmt::Display for QueueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => f.write_str("global"),
            Self::Channel(id) => write!(f, "channel:{id}"),
        }
    }
}

/// Owns the match queues for every partition.
#[derive(Debug, Default)]
pub struct QueueRegistry {
    scope: QueueScope,
    queues: HashMap<QueueKey, MatchQueue>,
}

impl QueueRegistry {
    /// Creates an empty registry partitioned by `scope`.
    #[must_use]
    pub fn new(scope: QueueScope) -> Self {
        Self {
            scope,
            queues: HashMap::new(),
        }
    }

    /// How this registry partitions its queues.
    #[must_use]
    pub const fn scope(&self) -> QueueScope {
        self.scope
    }

    /// Maps an originating channel to the key of the queue it uses.
    #[must_use]
    pub const fn key_for(&self, channel_id: u64) -> QueueKey {
        match self.scope {
            QueueScope::Global => QueueKey::Global,
            QueueScope::Channel => QueueKey::Channel(channel_id),
        }
    }

    /// Returns the queue for `key`, if one exists.
    #[must_use]
    pub fn get(&self, key: &QueueKey) -> Option<&MatchQueue> {
        self.queues.get(key)
    }

    /// Returns the queue for `key`, creating it empty on first use.
    pub fn queue_mut(&mut self, key: QueueKey) -> &mut MatchQueue {
        self.queues.entry(key).or_default()
    }

    /// Drops the queue for `key` if nobody is waiting in it.
    pub fn prune(&mut self, key: &QueueKey) {
        if self.queues.get(key).is_some_and(MatchQueue::is_empty) {
            self.queues.remove(key);
        }
    }

    /// Total number of participants waiting across all queues.
    #[must_use]
    pub fn waiting_count(&self) -> usize {
        self.queues.values().map(MatchQueue::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchmaking::{JoinOutcome, ParticipantId};

    #[test]
    fn test_scope_parse() {
        assert_eq!("global".parse::<QueueScope>(), Ok(QueueScope::Global));
        assert_eq!(" Channel ".parse::<QueueScope>(), Ok(QueueScope::Channel));
        assert_eq!("guild".parse::<QueueScope>(), Err("guild".to_owned()));
    }

    #[test]
    fn test_global_scope_shares_one_queue() {
        let registry = QueueRegistry::new(QueueScope::Global);
        assert_eq!(registry.scope(), QueueScope::Global);
        assert_eq!(registry.key_for(1), QueueKey::Global);
        assert_eq!(registry.key_for(2), QueueKey::Global);
    }

    #[test]
    fn test_channel_scope_partitions() {
        let mut registry = QueueRegistry::new(QueueScope::Channel);
        assert_eq!(registry.scope(), QueueScope::Channel);
        let a = registry.key_for(1);
        let b = registry.key_for(2);
        assert_ne!(a, b);

        registry.queue_mut(a).join(ParticipantId::from("alice"));
        assert_eq!(
            registry.queue_mut(b).join(ParticipantId::from("bob")),
            JoinOutcome::Waiting { position: 1 }
        );
        assert_eq!(registry.waiting_count(), 2);
    }

    #[test]
    fn test_prune_only_removes_empty_queues() {
        let mut registry = QueueRegistry::default();
        registry.queue_mut(QueueKey::Global).join(ParticipantId::from("alice"));
        registry.prune(&QueueKey::Global);
        assert!(registry.get(&QueueKey::Global).is_some());

        registry.queue_mut(QueueKey::Global).take_all();
        registry.prune(&QueueKey::Global);
        assert!(registry.get(&QueueKey::Global).is_none());
    }

    #[test]
    fn test_key_display() {
        assert_eq!(QueueKey::Global.to_string(), "global");
        assert_eq!(QueueKey::Channel(42).to_string(), "channel:42");
    }
}
