#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod events;
pub mod infra;
pub mod repos;
pub mod services;

// Re-exports for public API
pub use config::GameConfig;
pub use domain::{Code, Difficulty, Game, GameStatus, GuessResult, Peg};
pub use error::AppError;
pub use errors::DomainError;
pub use events::{BroadcastPublisher, GameEvent, GameEventPublisher, NoopPublisher};
pub use infra::InMemoryStore;
pub use repos::{GameStore, LeaderboardStore};
pub use services::{GameService, LeaderboardService};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
