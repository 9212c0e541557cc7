//! Domain layer: pure game logic types and helpers.

pub mod code;
pub mod code_serde;
pub mod game;
pub mod leaderboard;
pub mod player_view;
pub mod rules;
pub mod scoring;
pub mod secret;
pub mod state;
pub mod transitions;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_game;
#[cfg(test)]
mod tests_leaderboard;
#[cfg(test)]
mod tests_props_scoring;

// Re-exports for ergonomics
pub use code::{try_parse_pegs, Code, Peg, MAX_CODE_LENGTH};
pub use game::{Game, GuessRecord};
pub use leaderboard::{filter_difficulty, rank, PlayerRecord};
pub use player_view::{GameView, GuessResult};
pub use rules::{Difficulty, GameRules, DEFAULT_MAX_ATTEMPTS};
pub use scoring::{score_guess, GuessScore};
pub use secret::generate_secret;
pub use state::GameStatus;
