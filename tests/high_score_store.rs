//! Integration tests for the JSON high-score file.

use std::fs;

use tempfile::TempDir;
use terminal_2048::{
    adapters::{JsonHighScoreStore, RecordingRenderer, ScriptedInput},
    app::{App, GameConfig},
    board::Direction,
    controller::{Command, WinPolicy},
    high_scores::{HighScoreEntry, MAX_ENTRIES},
    ports::HighScoreStore,
};

fn entry(score: u64) -> HighScoreEntry {
    HighScoreEntry::new(score, 64, "2024-06-01 18:30:00")
}

#[test]
fn table_survives_a_new_store_instance() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("scores.json");

    let first = JsonHighScoreStore::new(&path);
    first.record(entry(300)).unwrap();
    first.record(entry(900)).unwrap();

    let second = JsonHighScoreStore::new(&path);
    let table = second.load_top(MAX_ENTRIES);
    let scores: Vec<u64> = table.entries().iter().map(|e| e.score).collect();
    assert_eq!(scores, vec![900, 300]);
}

#[test]
fn table_keeps_only_the_best_ten() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = JsonHighScoreStore::new(temp_dir.path().join("scores.json"));

    for score in 1..=12 {
        store.record(entry(score * 100)).unwrap();
    }

    let table = store.load_top(MAX_ENTRIES);
    assert_eq!(table.len(), MAX_ENTRIES);
    assert_eq!(table.top(), 1200);
    assert_eq!(table.entries().last().unwrap().score, 300);

    let outcome = store.record(entry(50)).unwrap();
    assert_eq!(outcome.rank, None);
}

#[test]
fn equal_score_ranks_below_existing_entry() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = JsonHighScoreStore::new(temp_dir.path().join("scores.json"));

    store
        .record(HighScoreEntry::new(500, 64, "2024-01-01 00:00:00"))
        .unwrap();
    let outcome = store
        .record(HighScoreEntry::new(500, 128, "2024-01-02 00:00:00"))
        .unwrap();

    assert_eq!(outcome.rank, Some(2));
    assert_eq!(outcome.table.entries()[0].date, "2024-01-01 00:00:00");
}

#[test]
fn missing_parent_directory_is_created() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("nested").join("dir").join("scores.json");
    let store = JsonHighScoreStore::new(&path);

    store.record(entry(64)).unwrap();
    assert!(path.exists());
}

#[test]
fn file_uses_scores_object_layout() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("scores.json");
    JsonHighScoreStore::new(&path).record(entry(1024)).unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let scores = json["scores"].as_array().expect("scores array");
    assert_eq!(scores.len(), 1);
    assert_eq!(scores[0]["score"], 1024);
    assert_eq!(scores[0]["highest_tile"], 64);
    assert_eq!(scores[0]["date"], "2024-06-01 18:30:00");
}

#[test]
fn finished_game_lands_in_the_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("scores.json");
    let config = GameConfig::new()
        .with_seed(17)
        .with_win_tile(8)
        .with_win_policy(WinPolicy::Stop)
        .with_high_score_path(&path);

    let app = App::from_config(&config);
    let mut game = app.create_game(&config).unwrap();
    let mut input = ScriptedInput::new(
        Direction::ALL
            .into_iter()
            .cycle()
            .take(300)
            .map(Command::Move)
            .chain([Command::Quit]),
    );
    let mut renderer = RecordingRenderer::new();
    let store = app.high_score_store();

    let summary = game.run(&mut input, &mut renderer, &*store).unwrap();

    assert_eq!(summary.last_rank, Some(1));
    let table = JsonHighScoreStore::new(&path).load_top(MAX_ENTRIES);
    assert_eq!(table.len(), 1);
    assert_eq!(table.top(), summary.final_score);
    assert!(table.entries()[0].highest_tile >= 8);
}
