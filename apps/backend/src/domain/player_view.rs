//! Player view of game state - what information is visible to a player.
//!
//! The secret is the only hidden piece of state: it stays redacted
//! (`secretCode: null`) while the game is in Playing and is disclosed once
//! the game reaches a terminal status, win or lose.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::code::Code;
use crate::domain::game::{Game, GuessRecord};
use crate::domain::rules::Difficulty;
use crate::domain::state::GameStatus;

/// Response payload for a scored guess.
///
/// Field names follow the wire contract: `blackPegs` are exact matches,
/// `whitePegs` color-only matches, `guessNumber` the 1-based ordinal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessResult {
    pub guess: Code,
    pub black_pegs: u8,
    pub white_pegs: u8,
    pub guess_number: u8,
    pub game_status: GameStatus,
    pub secret_code: Option<Code>,
}

impl GuessResult {
    /// Build the response for `record` from the already-updated game,
    /// applying the secret-disclosure policy.
    pub fn from_record(game: &Game, record: &GuessRecord) -> Self {
        Self {
            guess: record.guess.clone(),
            black_pegs: record.exact_matches,
            white_pegs: record.color_matches,
            guess_number: record.ordinal,
            game_status: game.status,
            secret_code: disclosed_secret(game),
        }
    }
}

/// Full game view for a player: history and status, secret redacted while
/// the game is live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub id: Uuid,
    pub player_id: String,
    pub difficulty: Difficulty,
    pub guesses: Vec<GuessRecord>,
    pub game_status: GameStatus,
    pub total_guesses: u8,
    pub secret_code: Option<Code>,
}

impl GameView {
    pub fn of(game: &Game) -> Self {
        Self {
            id: game.id,
            player_id: game.player_id.clone(),
            difficulty: game.difficulty,
            guesses: game.guesses.clone(),
            game_status: game.status,
            total_guesses: game.total_guesses(),
            secret_code: disclosed_secret(game),
        }
    }
}

fn disclosed_secret(game: &Game) -> Option<Code> {
    if game.status.is_terminal() {
        Some(game.secret.clone())
    } else {
        None
    }
}
