//! Game lifecycle services: creation, guess submission, player views.
//!
//! This is the surrounding collaborator the domain layer expects: it loads
//! the persisted game, runs the pure controller, commits conditionally on
//! the prior attempt count, and fans out events / leaderboard updates.

use std::sync::Arc;

use rand::Rng;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::GameConfig;
use crate::domain::game::Game;
use crate::domain::player_view::{GameView, GuessResult};
use crate::domain::rules::Difficulty;
use crate::domain::secret::generate_secret;
use crate::domain::transitions::derive_game_transitions;
use crate::domain::Code;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::events::{GameEvent, GameEventPublisher};
use crate::repos::games::{require_game, GameStore};
use crate::repos::leaderboard::{GameOutcome, LeaderboardStore};

pub struct GameService {
    store: Arc<dyn GameStore>,
    leaderboard: Arc<dyn LeaderboardStore>,
    publisher: Arc<dyn GameEventPublisher>,
    config: GameConfig,
}

impl GameService {
    pub fn new(
        store: Arc<dyn GameStore>,
        leaderboard: Arc<dyn LeaderboardStore>,
        publisher: Arc<dyn GameEventPublisher>,
        config: GameConfig,
    ) -> Self {
        Self {
            store,
            leaderboard,
            publisher,
            config,
        }
    }

    /// Create a game for `player_id` at the given difficulty.
    ///
    /// `seed` pins the secret for reproducible games (tests, replays); when
    /// absent a random seed is drawn.
    pub async fn create_game(
        &self,
        player_id: &str,
        difficulty: Difficulty,
        seed: Option<i64>,
    ) -> Result<Game, DomainError> {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        let rules = self.config.rules_for(difficulty);
        let secret = generate_secret(seed, rules.code_length)?;
        let game = Game::new(Uuid::new_v4(), player_id, difficulty, secret)?;

        self.store.insert(game.clone()).await?;
        info!(game_id = %game.id, player_id, difficulty = difficulty.as_str(), "Game created");
        Ok(game)
    }

    /// Submit a guess for a player's game and return the scored result.
    ///
    /// The commit is conditional on the attempt count observed at load time;
    /// a concurrent guess that lands first turns this call into an
    /// `OptimisticLock` conflict and nothing is persisted or published.
    pub async fn submit_guess(
        &self,
        game_id: Uuid,
        player_id: &str,
        guess: Code,
    ) -> Result<GuessResult, DomainError> {
        debug!(%game_id, player_id, guess = %guess, "Submitting guess");

        let game = self.owned_game(game_id, player_id).await?;
        let before = game.status;
        let expected_attempts = game.total_guesses();
        let rules = self.config.rules_for(game.difficulty);

        let (updated, result) = game.apply_guess(guess, &rules)?;
        self.store
            .commit_guess(game_id, expected_attempts, updated.clone())
            .await?;

        for transition in derive_game_transitions(before, updated.status, result.guess_number) {
            self.publisher.publish(GameEvent::from_transition(
                &transition,
                game_id,
                player_id,
                result.black_pegs,
                result.white_pegs,
            ));
        }

        if updated.status.is_terminal() {
            let outcome = if result.black_pegs as usize == updated.secret.len() {
                GameOutcome::Won {
                    guesses: result.guess_number,
                }
            } else {
                GameOutcome::Lost
            };
            self.leaderboard
                .record_result(player_id, updated.difficulty, outcome)
                .await?;
            info!(
                %game_id,
                player_id,
                status = ?updated.status,
                attempts = result.guess_number,
                "Game ended"
            );
        }

        Ok(result)
    }

    /// Player-facing view of a game, secret redacted while it is live.
    pub async fn game_view(
        &self,
        game_id: Uuid,
        player_id: &str,
    ) -> Result<GameView, DomainError> {
        let game = self.owned_game(game_id, player_id).await?;
        Ok(GameView::of(&game))
    }

    /// Load a game and check ownership. A foreign game is reported as not
    /// found rather than forbidden so game ids leak nothing about others.
    async fn owned_game(&self, game_id: Uuid, player_id: &str) -> Result<Game, DomainError> {
        let game = require_game(self.store.as_ref(), game_id).await?;
        if game.player_id != player_id {
            return Err(DomainError::not_found(
                NotFoundKind::Game,
                format!("game {game_id} not found"),
            ));
        }
        Ok(game)
    }
}
