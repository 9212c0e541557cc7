use std::sync::Arc;

use backend::config::GameConfig;
use backend::domain::{Code, Difficulty, GameStatus, Peg};
use backend::error::AppError;
use backend::infra::InMemoryStore;
use backend::services::{GameService, LeaderboardService};
use backend::BroadcastPublisher;
use rand::Rng;
use tracing::info;

mod telemetry;

/// Demo driver: plays one random game against the in-memory store so the
/// whole stack (config, domain, store, events, leaderboard) can be watched
/// end to end from the command line.
#[tokio::main]
async fn main() -> Result<(), AppError> {
    telemetry::init_tracing();

    let config = GameConfig::from_env()
        .map_err(|e| AppError::config(format!("invalid game configuration: {e}")))?;

    let store = Arc::new(InMemoryStore::new());
    let publisher = Arc::new(BroadcastPublisher::new(64));
    let mut events = publisher.subscribe();
    let games = GameService::new(store.clone(), store.clone(), publisher, config);
    let leaderboard = LeaderboardService::new(store);

    println!("🚀 Codebreak demo: one random game on normal difficulty");

    let player = "demo-player";
    let game = games.create_game(player, Difficulty::Normal, None).await?;

    let mut rng = rand::rng();
    loop {
        let pegs = (0..Difficulty::Normal.code_length())
            .map(|_| Peg::ALL[rng.random_range(0..Peg::ALL.len())])
            .collect();
        let guess = Code::new(pegs)?;

        let result = games.submit_guess(game.id, player, guess).await?;
        info!(
            guess = %result.guess,
            black_pegs = result.black_pegs,
            white_pegs = result.white_pegs,
            guess_number = result.guess_number,
            "Guess scored"
        );
        if result.game_status != GameStatus::Playing {
            let payload = serde_json::to_string_pretty(&result)
                .map_err(|e| AppError::internal(format!("serialize result: {e}")))?;
            println!(
                "🏁 Game over after {} guesses:\n{payload}",
                result.guess_number
            );
            break;
        }
    }

    while let Ok(event) = events.try_recv() {
        info!(?event, "Observed event");
    }

    let standings = leaderboard.standings(Some(Difficulty::Normal)).await?;
    for record in standings {
        println!(
            "🏆 {}: {} wins, best {}",
            record.player_id, record.games_won, record.best_score
        );
    }

    Ok(())
}
