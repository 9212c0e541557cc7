use uuid::Uuid;

use crate::domain::game::Game;
use crate::domain::rules::{Difficulty, GameRules, DEFAULT_MAX_ATTEMPTS};
use crate::domain::state::GameStatus;
use crate::domain::Code;
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};

fn code(s: &str) -> Code {
    s.parse().expect("test codes are valid")
}

fn easy_rules() -> GameRules {
    GameRules::for_difficulty(Difficulty::Easy, DEFAULT_MAX_ATTEMPTS)
}

fn new_game(secret: &str) -> Game {
    Game::new(Uuid::new_v4(), "player-1", Difficulty::Easy, code(secret))
        .expect("secret matches difficulty length")
}

/// Apply `n` guaranteed-miss guesses and return the updated game.
fn miss_n_times(game: Game, n: u8) -> Game {
    let mut current = game;
    for _ in 0..n {
        let (updated, _) = current
            .apply_guess(code("PPPP"), &easy_rules())
            .expect("miss is accepted while playing");
        current = updated;
    }
    current
}

#[test]
fn new_game_starts_playing_with_empty_history() {
    let game = new_game("RGBY");
    assert_eq!(game.status, GameStatus::Playing);
    assert_eq!(game.total_guesses(), 0);
    assert!(game.guesses.is_empty());
}

#[test]
fn secret_length_must_match_difficulty() {
    let err = Game::new(Uuid::new_v4(), "p", Difficulty::Easy, code("RGB")).unwrap_err();
    assert!(matches!(err, DomainError::Validation(_, _)));
}

#[test]
fn ordinals_are_one_based_and_contiguous() {
    let game = miss_n_times(new_game("RGBY"), 3);
    assert_eq!(game.total_guesses(), 3);
    for (i, record) in game.guesses.iter().enumerate() {
        assert_eq!(usize::from(record.ordinal), i + 1);
    }
}

#[test]
fn applying_a_guess_does_not_mutate_the_input_game() {
    let game = new_game("RGBY");
    let (updated, _) = game.apply_guess(code("PPPP"), &easy_rules()).unwrap();
    assert_eq!(game.total_guesses(), 0);
    assert_eq!(updated.total_guesses(), 1);
}

#[test]
fn winning_guess_transitions_to_won_and_discloses_secret() {
    let game = new_game("RGBY");
    let (updated, result) = game.apply_guess(code("RGBY"), &easy_rules()).unwrap();

    assert_eq!(updated.status, GameStatus::Won);
    assert_eq!(result.game_status, GameStatus::Won);
    assert_eq!(result.black_pegs, 4);
    assert_eq!(result.white_pegs, 0);
    assert_eq!(result.guess_number, 1);
    assert_eq!(result.secret_code, Some(code("RGBY")));
}

#[test]
fn secret_is_redacted_while_playing() {
    let game = new_game("RGBY");
    let (updated, result) = game.apply_guess(code("RYGB"), &easy_rules()).unwrap();

    assert_eq!(updated.status, GameStatus::Playing);
    assert_eq!(result.game_status, GameStatus::Playing);
    assert_eq!(result.black_pegs, 1);
    assert_eq!(result.white_pegs, 3);
    assert_eq!(result.secret_code, None);
}

#[test]
fn tenth_miss_loses_and_discloses_secret() {
    let game = miss_n_times(new_game("RGBY"), 9);
    assert_eq!(game.status, GameStatus::Playing);

    let (updated, result) = game.apply_guess(code("PPPP"), &easy_rules()).unwrap();
    assert_eq!(updated.status, GameStatus::Lost);
    assert_eq!(result.guess_number, 10);
    assert_eq!(result.secret_code, Some(code("RGBY")));
}

#[test]
fn winning_on_the_final_attempt_beats_the_cap() {
    let game = miss_n_times(new_game("RGBY"), 9);
    let (updated, result) = game.apply_guess(code("RGBY"), &easy_rules()).unwrap();
    assert_eq!(updated.status, GameStatus::Won);
    assert_eq!(result.guess_number, 10);
}

#[test]
fn terminal_game_rejects_guesses_without_new_records() {
    let won = new_game("RGBY")
        .apply_guess(code("RGBY"), &easy_rules())
        .unwrap()
        .0;
    let err = won.apply_guess(code("PPPP"), &easy_rules()).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::GameAlreadyEnded, _)
    ));
    assert_eq!(won.total_guesses(), 1);

    let lost = miss_n_times(new_game("RGBY"), 10);
    assert_eq!(lost.status, GameStatus::Lost);
    let err = lost.apply_guess(code("RGBY"), &easy_rules()).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::GameAlreadyEnded, _)
    ));
    assert_eq!(lost.total_guesses(), 10);
}

#[test]
fn wrong_length_guess_is_rejected_without_a_record() {
    let game = new_game("RGBY");
    let err = game.apply_guess(code("RGB"), &easy_rules()).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::InvalidGuessLength, _)
    ));
    assert_eq!(game.total_guesses(), 0);
}

#[test]
fn attempt_cap_is_configurable() {
    let rules = GameRules::for_difficulty(Difficulty::Easy, 3);
    let mut game = new_game("RGBY");
    for _ in 0..2 {
        game = game.apply_guess(code("PPPP"), &rules).unwrap().0;
    }
    let (updated, _) = game.apply_guess(code("PPPP"), &rules).unwrap();
    assert_eq!(updated.status, GameStatus::Lost);
}

#[test]
fn guess_result_serializes_with_wire_field_names() {
    let game = new_game("RGBY");
    let (_, result) = game.apply_guess(code("RYGB"), &easy_rules()).unwrap();

    let json = serde_json::to_value(&result).expect("serializable");
    assert_eq!(json["blackPegs"], 1);
    assert_eq!(json["whitePegs"], 3);
    assert_eq!(json["guessNumber"], 1);
    assert_eq!(json["gameStatus"], "playing");
    assert!(json["secretCode"].is_null());
    assert_eq!(json["guess"][0], "R");
}

#[test]
fn game_view_applies_the_same_redaction() {
    use crate::domain::player_view::GameView;

    let playing = new_game("RGBY");
    let view = GameView::of(&playing);
    assert_eq!(view.secret_code, None);
    assert_eq!(view.total_guesses, 0);

    let won = playing.apply_guess(code("RGBY"), &easy_rules()).unwrap().0;
    let view = GameView::of(&won);
    assert_eq!(view.secret_code, Some(code("RGBY")));
    assert_eq!(view.game_status, GameStatus::Won);
}
