//! Leaderboard service: snapshot + pure ranking.

use std::sync::Arc;

use tracing::debug;

use crate::domain::leaderboard::{rank, PlayerRecord};
use crate::domain::rules::Difficulty;
use crate::errors::domain::DomainError;
use crate::repos::leaderboard::LeaderboardStore;

pub struct LeaderboardService {
    store: Arc<dyn LeaderboardStore>,
}

impl LeaderboardService {
    pub fn new(store: Arc<dyn LeaderboardStore>) -> Self {
        Self { store }
    }

    /// Ranked standings, optionally restricted to one difficulty tier.
    pub async fn standings(
        &self,
        difficulty: Option<Difficulty>,
    ) -> Result<Vec<PlayerRecord>, DomainError> {
        let records = self.store.snapshot(difficulty).await?;
        debug!(records = records.len(), "Ranking leaderboard snapshot");
        Ok(rank(records))
    }
}
