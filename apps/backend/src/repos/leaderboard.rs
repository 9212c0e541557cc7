//! Leaderboard store contract.

use async_trait::async_trait;

use crate::domain::leaderboard::PlayerRecord;
use crate::domain::rules::Difficulty;
use crate::errors::domain::DomainError;

/// How a finished game ended, from the scoring player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Won { guesses: u8 },
    Lost,
}

/// Player-standing persistence.
///
/// The ranking core only ever reads snapshots; mutation happens here, on
/// game completion. A win increments the player's win count and lowers
/// their best score when the new one is better; a loss leaves the record
/// untouched beyond ensuring it exists.
#[async_trait]
pub trait LeaderboardStore: Send + Sync {
    /// Current player records, optionally pre-filtered by difficulty.
    async fn snapshot(
        &self,
        difficulty: Option<Difficulty>,
    ) -> Result<Vec<PlayerRecord>, DomainError>;

    /// Fold a finished game into the player's record.
    async fn record_result(
        &self,
        player_id: &str,
        difficulty: Difficulty,
        outcome: GameOutcome,
    ) -> Result<(), DomainError>;
}
