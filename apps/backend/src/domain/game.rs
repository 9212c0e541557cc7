//! Game record and the guess controller.
//!
//! `Game` is the persisted unit: identity, the secret, the append-only
//! guess history, and the current status. `apply_guess` is pure with
//! respect to its inputs: it never mutates the receiver and either returns
//! a fully formed (updated game, response) pair or an error.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::code::Code;
use crate::domain::player_view::GuessResult;
use crate::domain::rules::{Difficulty, GameRules};
use crate::domain::scoring::score_guess;
use crate::domain::state::{self, GameStatus};
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};

/// One scored attempt. Immutable once created; ordinals are 1-based and
/// contiguous within a game.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub ordinal: u8,
    pub guess: Code,
    pub exact_matches: u8,
    pub color_matches: u8,
}

/// Game domain model.
///
/// This is what the storage collaborator persists and reloads. The secret
/// lives only here; player-facing views are built via
/// [`crate::domain::player_view`] which redacts it until the game ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: Uuid,
    pub player_id: String,
    pub difficulty: Difficulty,
    pub secret: Code,
    pub guesses: Vec<GuessRecord>,
    pub status: GameStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Game {
    /// Create a fresh game in Playing status with an empty history.
    ///
    /// The secret length must match the difficulty's code length.
    pub fn new(
        id: Uuid,
        player_id: impl Into<String>,
        difficulty: Difficulty,
        secret: Code,
    ) -> Result<Self, DomainError> {
        if secret.len() != difficulty.code_length() {
            return Err(DomainError::validation(
                ValidationKind::Other("SECRET_LENGTH".into()),
                format!(
                    "Secret length {} does not match difficulty {} (expected {})",
                    secret.len(),
                    difficulty.as_str(),
                    difficulty.code_length()
                ),
            ));
        }
        let now = OffsetDateTime::now_utc();
        Ok(Self {
            id,
            player_id: player_id.into(),
            difficulty,
            secret,
            guesses: Vec::new(),
            status: GameStatus::Playing,
            created_at: now,
            updated_at: now,
        })
    }

    /// Number of attempts consumed so far. Always equals `guesses.len()`.
    pub fn total_guesses(&self) -> u8 {
        self.guesses.len() as u8
    }

    /// Apply a guess: score it, transition the status, append the record.
    ///
    /// Fails with `GameAlreadyEnded` against a terminal game and
    /// `InvalidGuessLength` on a length mismatch; in both cases no record
    /// is produced. Persistence of the returned game is the caller's
    /// responsibility (conditional on the prior attempt count, see
    /// [`crate::repos::games::GameStore::commit_guess`]).
    pub fn apply_guess(
        &self,
        guess: Code,
        rules: &GameRules,
    ) -> Result<(Game, GuessResult), DomainError> {
        if self.status.is_terminal() {
            return Err(DomainError::conflict(
                ConflictKind::GameAlreadyEnded,
                format!("Game {} already ended with status {:?}", self.id, self.status),
            ));
        }
        if guess.len() != self.secret.len() {
            return Err(DomainError::validation(
                ValidationKind::InvalidGuessLength,
                format!(
                    "Guess length {} does not match secret length {}",
                    guess.len(),
                    self.secret.len()
                ),
            ));
        }

        let ordinal = self.total_guesses() + 1;
        let score = score_guess(&self.secret, &guess)?;
        let status = state::transition(
            self.status,
            score,
            self.secret.len(),
            ordinal,
            rules.max_attempts,
        )?;

        let record = GuessRecord {
            ordinal,
            guess,
            exact_matches: score.exact_matches,
            color_matches: score.color_matches,
        };

        let mut updated = self.clone();
        updated.guesses.push(record);
        updated.status = status;
        updated.updated_at = OffsetDateTime::now_utc();

        // The record we just pushed; building the response from the updated
        // game keeps the disclosure policy in one place.
        let last = updated
            .guesses
            .last()
            .ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::Other("EMPTY_HISTORY".into()),
                    "Guess history empty after append",
                )
            })?
            .clone();
        let response = GuessResult::from_record(&updated, &last);

        Ok((updated, response))
    }
}
