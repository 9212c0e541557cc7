//! Game status state machine.
//!
//! States: Playing (initial), Won, Lost (terminal). The only
//! transition-producing event is a scored guess; transitions are one-way
//! (Playing -> Won/Lost) and a terminal status never changes again.

use serde::{Deserialize, Serialize};

use crate::domain::scoring::GuessScore;
use crate::errors::domain::{ConflictKind, DomainError};

/// Overall game status.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// Guesses are still accepted.
    Playing,
    /// The secret was broken.
    Won,
    /// The attempt budget ran out.
    Lost,
}

impl GameStatus {
    /// Won and Lost are terminal; no further guesses are accepted.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }
}

/// Guarded status transition for a scored guess.
///
/// Evaluated in order: full exact match wins regardless of ordinal; a miss
/// at the attempt cap loses; otherwise the game stays in Playing. The
/// terminal guard makes the one-way invariant explicit rather than relying
/// on callers never reaching this point with an ended game.
pub fn transition(
    current: GameStatus,
    score: GuessScore,
    code_length: usize,
    ordinal: u8,
    max_attempts: u8,
) -> Result<GameStatus, DomainError> {
    if current.is_terminal() {
        return Err(DomainError::conflict(
            ConflictKind::GameAlreadyEnded,
            format!("No transitions out of terminal status {current:?}"),
        ));
    }
    if score.is_full_match(code_length) {
        return Ok(GameStatus::Won);
    }
    if ordinal >= max_attempts {
        return Ok(GameStatus::Lost);
    }
    Ok(GameStatus::Playing)
}
