//! In-memory store implementation.
//!
//! Backs both store contracts for tests and the demo binary. Games live in
//! a `DashMap`; the conditional commit runs under the entry's shard lock,
//! which gives the at-most-one-commit-per-ordinal guarantee. Player records
//! keep insertion order so leaderboard snapshots are deterministic.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::debug;
use uuid::Uuid;

use crate::domain::game::Game;
use crate::domain::leaderboard::{filter_difficulty, PlayerRecord};
use crate::domain::rules::Difficulty;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::repos::games::GameStore;
use crate::repos::leaderboard::{GameOutcome, LeaderboardStore};

#[derive(Default)]
pub struct InMemoryStore {
    games: DashMap<Uuid, Game>,
    // Vec, not a map: snapshot order must be stable for ranking stability.
    players: Mutex<Vec<PlayerRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameStore for InMemoryStore {
    async fn find_by_id(&self, game_id: Uuid) -> Result<Option<Game>, DomainError> {
        Ok(self.games.get(&game_id).map(|g| g.clone()))
    }

    async fn insert(&self, game: Game) -> Result<(), DomainError> {
        match self.games.entry(game.id) {
            Entry::Occupied(_) => Err(DomainError::conflict(
                ConflictKind::Other("DUPLICATE_GAME".into()),
                format!("game {} already exists", game.id),
            )),
            Entry::Vacant(slot) => {
                slot.insert(game);
                Ok(())
            }
        }
    }

    async fn commit_guess(
        &self,
        game_id: Uuid,
        expected_attempts: u8,
        updated: Game,
    ) -> Result<(), DomainError> {
        // get_mut holds the shard lock, making check-and-swap atomic.
        let mut entry = self.games.get_mut(&game_id).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Game, format!("game {game_id} not found"))
        })?;

        let actual = entry.total_guesses();
        if actual != expected_attempts {
            return Err(DomainError::conflict(
                ConflictKind::OptimisticLock,
                format!(
                    "game {game_id} was modified concurrently (expected {expected_attempts} attempts, found {actual})"
                ),
            ));
        }

        debug!(%game_id, attempts = updated.total_guesses(), "Committing guess");
        *entry = updated;
        Ok(())
    }
}

#[async_trait]
impl LeaderboardStore for InMemoryStore {
    async fn snapshot(
        &self,
        difficulty: Option<Difficulty>,
    ) -> Result<Vec<PlayerRecord>, DomainError> {
        let records = self.players.lock().clone();
        Ok(match difficulty {
            Some(d) => filter_difficulty(records, d),
            None => records,
        })
    }

    async fn record_result(
        &self,
        player_id: &str,
        difficulty: Difficulty,
        outcome: GameOutcome,
    ) -> Result<(), DomainError> {
        let mut players = self.players.lock();
        let idx = players
            .iter()
            .position(|r| r.player_id == player_id && r.difficulty == difficulty)
            .unwrap_or_else(|| {
                players.push(PlayerRecord {
                    player_id: player_id.to_string(),
                    difficulty,
                    games_won: 0,
                    best_score: 0,
                });
                players.len() - 1
            });
        let record = &mut players[idx];

        if let GameOutcome::Won { guesses } = outcome {
            record.games_won += 1;
            let score = u32::from(guesses);
            if record.best_score == 0 || score < record.best_score {
                record.best_score = score;
            }
        }
        Ok(())
    }
}
