//! Derive domain transitions from before/after game status.
//!
//! Edge-triggered: a transition fires only when the status actually
//! changed. Consumed by the event publisher to notify the pub/sub channel.

use crate::domain::state::GameStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameTransition {
    /// A guess was scored; fires for every accepted guess.
    GuessScored { ordinal: u8 },

    /// Edge-triggered: Playing -> Won
    GameWon { ordinal: u8 },

    /// Edge-triggered: Playing -> Lost
    GameLost { ordinal: u8 },
}

/// Derive transitions for a guess at `ordinal` that moved the game from
/// `before` to `after`.
pub fn derive_game_transitions(
    before: GameStatus,
    after: GameStatus,
    ordinal: u8,
) -> Vec<GameTransition> {
    let mut transitions = vec![GameTransition::GuessScored { ordinal }];

    if before == GameStatus::Playing && after == GameStatus::Won {
        transitions.push(GameTransition::GameWon { ordinal });
    }
    if before == GameStatus::Playing && after == GameStatus::Lost {
        transitions.push(GameTransition::GameLost { ordinal });
    }

    transitions
}
