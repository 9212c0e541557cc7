//! Leaderboard ranking.
//!
//! Pure ordering over player record snapshots: wins descending, then best
//! score (fewest winning guesses) ascending. The sort is stable, so fully
//! tied records keep their input order. The core only ranks snapshots; the
//! records themselves are maintained by the storage collaborator on game
//! completion.

use serde::{Deserialize, Serialize};

use crate::domain::rules::Difficulty;

/// One player's standing for a difficulty tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub player_id: String,
    pub difficulty: Difficulty,
    pub games_won: u32,
    /// Fewest guesses in a winning game; lower is better. Zero until the
    /// player has won at least once, which never outranks a real winner
    /// because `games_won` dominates the ordering.
    pub best_score: u32,
}

/// Order records by wins descending, then best score ascending.
pub fn rank(mut records: Vec<PlayerRecord>) -> Vec<PlayerRecord> {
    // sort_by is stable: equal keys retain input order.
    records.sort_by(|a, b| {
        b.games_won
            .cmp(&a.games_won)
            .then(a.best_score.cmp(&b.best_score))
    });
    records
}

/// Keep only records for the given difficulty. Pure predicate; does not
/// affect the ranking comparator.
pub fn filter_difficulty(records: Vec<PlayerRecord>, difficulty: Difficulty) -> Vec<PlayerRecord> {
    records
        .into_iter()
        .filter(|r| r.difficulty == difficulty)
        .collect()
}
