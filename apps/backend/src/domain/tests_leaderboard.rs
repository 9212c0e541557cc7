use crate::domain::leaderboard::{filter_difficulty, rank, PlayerRecord};
use crate::domain::rules::Difficulty;

fn record(player_id: &str, games_won: u32, best_score: u32) -> PlayerRecord {
    PlayerRecord {
        player_id: player_id.into(),
        difficulty: Difficulty::Easy,
        games_won,
        best_score,
    }
}

#[test]
fn ranks_by_wins_then_best_score() {
    let ranked = rank(vec![
        record("a", 2, 5),
        record("b", 3, 9),
        record("c", 2, 3),
    ]);

    let order: Vec<&str> = ranked.iter().map(|r| r.player_id.as_str()).collect();
    assert_eq!(order, ["b", "c", "a"]);
}

#[test]
fn full_ties_retain_input_order() {
    let ranked = rank(vec![
        record("first", 2, 4),
        record("second", 2, 4),
        record("third", 2, 4),
    ]);

    let order: Vec<&str> = ranked.iter().map(|r| r.player_id.as_str()).collect();
    assert_eq!(order, ["first", "second", "third"]);
}

#[test]
fn empty_snapshot_ranks_to_empty() {
    assert!(rank(Vec::new()).is_empty());
}

#[test]
fn winless_players_sort_below_winners() {
    let ranked = rank(vec![record("nowins", 0, 0), record("winner", 1, 10)]);
    let order: Vec<&str> = ranked.iter().map(|r| r.player_id.as_str()).collect();
    assert_eq!(order, ["winner", "nowins"]);
}

#[test]
fn filter_keeps_only_requested_difficulty() {
    let mut hard = record("h", 5, 6);
    hard.difficulty = Difficulty::Hard;

    let filtered = filter_difficulty(
        vec![record("e1", 1, 4), hard.clone(), record("e2", 2, 7)],
        Difficulty::Hard,
    );
    assert_eq!(filtered, vec![hard]);
}

#[test]
fn filter_does_not_reorder() {
    let records = vec![record("x", 1, 9), record("y", 3, 2), record("z", 2, 5)];
    let filtered = filter_difficulty(records.clone(), Difficulty::Easy);
    assert_eq!(filtered, records);
}
