//! Matchmaking module.
//!
//! Holds the two-person draft queue and the registry that owns one queue
//! per partition (a single global queue by default, or one per channel).

mod queue;
mod registry;

pub use queue::{JoinOutcome, LeaveOutcome, MatchQueue, Pairing, ParticipantId, QueuedParticipant};
pub use registry::{QueueKey, QueueRegistry, QueueScope};
