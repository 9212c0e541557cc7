//! Game event publication.
//!
//! The publish/subscribe channel is an external collaborator; this module
//! defines the events the core emits and a broadcast-backed implementation
//! for in-process subscribers (tests, the demo binary).

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::debug;
use uuid::Uuid;

use crate::domain::transitions::GameTransition;

/// Events emitted after a guess commit. Derived from status edges via
/// [`crate::domain::transitions::derive_game_transitions`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    GuessScored {
        game_id: Uuid,
        player_id: String,
        ordinal: u8,
        black_pegs: u8,
        white_pegs: u8,
    },
    GameWon {
        game_id: Uuid,
        player_id: String,
        ordinal: u8,
    },
    GameLost {
        game_id: Uuid,
        player_id: String,
        ordinal: u8,
    },
}

impl GameEvent {
    /// Lift a derived transition into a publishable event.
    pub fn from_transition(
        transition: &GameTransition,
        game_id: Uuid,
        player_id: &str,
        black_pegs: u8,
        white_pegs: u8,
    ) -> Self {
        match *transition {
            GameTransition::GuessScored { ordinal } => GameEvent::GuessScored {
                game_id,
                player_id: player_id.to_string(),
                ordinal,
                black_pegs,
                white_pegs,
            },
            GameTransition::GameWon { ordinal } => GameEvent::GameWon {
                game_id,
                player_id: player_id.to_string(),
                ordinal,
            },
            GameTransition::GameLost { ordinal } => GameEvent::GameLost {
                game_id,
                player_id: player_id.to_string(),
                ordinal,
            },
        }
    }
}

/// Outbound seam to the pub/sub collaborator.
pub trait GameEventPublisher: Send + Sync {
    fn publish(&self, event: GameEvent);
}

/// Broadcast-channel publisher for in-process subscribers.
pub struct BroadcastPublisher {
    tx: broadcast::Sender<GameEvent>,
}

impl BroadcastPublisher {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<GameEvent> {
        self.tx.subscribe()
    }
}

impl GameEventPublisher for BroadcastPublisher {
    fn publish(&self, event: GameEvent) {
        debug!(?event, "Publishing game event");
        // A send error only means there are no subscribers right now.
        let _ = self.tx.send(event);
    }
}

/// No-op publisher for callers that don't need notifications.
pub struct NoopPublisher;

impl GameEventPublisher for NoopPublisher {
    fn publish(&self, _event: GameEvent) {}
}
