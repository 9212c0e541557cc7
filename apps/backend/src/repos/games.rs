//! Game store contract.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::game::Game;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Key-value persistence for game records.
///
/// Concurrency contract: `commit_guess` must be atomic and conditional on
/// the prior attempt count, so that at most one commit succeeds per ordinal
/// even under concurrent guesses.
#[async_trait]
pub trait GameStore: Send + Sync {
    async fn find_by_id(&self, game_id: Uuid) -> Result<Option<Game>, DomainError>;

    /// Insert a fresh game. Fails on id collision.
    async fn insert(&self, game: Game) -> Result<(), DomainError>;

    /// Replace the stored game only if its current attempt count equals
    /// `expected_attempts`. A mismatch means another guess won the race and
    /// must surface as an `OptimisticLock` conflict.
    async fn commit_guess(
        &self,
        game_id: Uuid,
        expected_attempts: u8,
        updated: Game,
    ) -> Result<(), DomainError>;
}

/// Find a game by ID or return an error if not found.
///
/// Convenience helper that converts `None` into a DomainError, eliminating
/// the repetitive `ok_or_else` pattern when a game must exist.
pub async fn require_game(store: &dyn GameStore, game_id: Uuid) -> Result<Game, DomainError> {
    store.find_by_id(game_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Game, format!("game {game_id} not found"))
    })
}
