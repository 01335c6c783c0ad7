//! The draft queue itself.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque identifier of a chat user. Compared by equality only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Creates a participant identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParticipantId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ParticipantId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A participant waiting in the queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedParticipant {
    pub id: ParticipantId,

    /// When the participant joined the queue.
    pub joined_at: DateTime<Utc>,
}

impl QueuedParticipant {
    fn now(id: ParticipantId) -> Self {
        Self {
            id,
            joined_at: Utc::now(),
        }
    }
}

/// Two participants matched against each other, in the order they queued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
    pub first: QueuedParticipant,
    pub second: QueuedParticipant,
}

impl Pairing {
    /// How long the first participant waited for an opponent.
    #[must_use]
    pub fn wait_time(&self) -> chrono::Duration {
        self.second.joined_at - self.first.joined_at
    }
}

/// Result of a participant asking to join the queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinOutcome {
    /// The participant was already waiting; nothing changed.
    AlreadyQueued,

    /// The participant is now waiting at the given 1-based position.
    Waiting { position: usize },

    /// The queue filled up and was emptied into a pairing.
    Matched(Pairing),
}

/// Result of a participant asking to leave the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveOutcome {
    Left,
    NotQueued,
}

/// Ordered collection of participants awaiting a match.
///
/// Holds at most one participant between calls: the second arrival
/// completes a pairing and leaves the queue empty.
#[derive(Debug, Default, Clone)]
pub struct MatchQueue {
    waiting: Vec<QueuedParticipant>,
}

impl MatchQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the participant is waiting.
    #[must_use]
    pub fn contains(&self, id: &ParticipantId) -> bool {
        self.waiting.iter().any(|p| &p.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.waiting.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.waiting.is_empty()
    }

    /// Adds a participant, pairing and draining the queue once it is full.
    pub fn join(&mut self, id: ParticipantId) -> JoinOutcome {
        if self.contains(&id) {
            return JoinOutcome::AlreadyQueued;
        }

        let newcomer = QueuedParticipant::now(id);

        // At most one participant waits between calls, so the newcomer
        // either completes a pairing with them or becomes the waiter.
        if let Some(first) = self.waiting.pop() {
            JoinOutcome::Matched(Pairing {
                first,
                second: newcomer,
            })
        } else {
            self.waiting.push(newcomer);
            JoinOutcome::Waiting {
                position: self.waiting.len(),
            }
        }
    }

    /// Removes a participant if present.
    pub fn leave(&mut self, id: &ParticipantId) -> LeaveOutcome {
        if let Some(idx) = self.waiting.iter().position(|p| &p.id == id) {
            self.waiting.remove(idx);
            LeaveOutcome::Left
        } else {
            LeaveOutcome::NotQueued
        }
    }

    /// Removes and returns every waiting participant, oldest first.
    pub fn take_all(&mut self) -> Vec<QueuedParticipant> {
        std::mem::take(&mut self.waiting)
    }
}
