//! Storage collaborator contracts.
//!
//! The core treats persistence as an external capability: a key-value game
//! store with a conditional commit, and a leaderboard store for player
//! records. Implementations live in `infra`.

pub mod games;
pub mod leaderboard;

pub use games::{require_game, GameStore};
pub use leaderboard::{GameOutcome, LeaderboardStore};
