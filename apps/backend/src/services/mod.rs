pub mod games;
pub mod leaderboard;

pub use games::GameService;
pub use leaderboard::LeaderboardService;
