//! Persistence tests.

use std::fs;

use rpsrs::{AllTimeStats, Config, StatsStore, StoreError};

#[test]
fn fresh_directory_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = StatsStore::new(dir.path().join("missing"));

    let stats = store.load_stats();
    assert_eq!(
        stats,
        AllTimeStats {
            points: 0,
            rounds_played: 0,
            player_wins: 0,
            computer_wins: 0,
            draws: 0,
        }
    );
    assert_eq!(store.load_config(), Config::default());
    assert!(!store.dir().exists());
}

#[test]
fn saved_records_reload() {
    let dir = tempfile::tempdir().unwrap();
    let store = StatsStore::new(dir.path());

    let config = Config::default()
        .with_win_reward(7)
        .with_win_message("Nice one!");
    store.save_config(&config).unwrap();

    let stats = AllTimeStats {
        points: 120,
        rounds_played: 6,
        player_wins: 3,
        computer_wins: 2,
        draws: 1,
    };
    store.save_stats(&stats).unwrap();

    assert_eq!(store.load_config(), config);
    assert_eq!(store.load_stats(), stats);
    assert!(!store.stats_path().with_extension("json.tmp").exists());
}

#[test]
fn records_are_flat_json() {
    let dir = tempfile::tempdir().unwrap();
    let store = StatsStore::new(dir.path());
    store.save_stats(&AllTimeStats::default()).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(store.stats_path()).unwrap()).unwrap();
    let object = value.as_object().unwrap();
    for key in ["points", "rounds_played", "player_wins", "computer_wins", "draws"] {
        assert_eq!(object[key], 0, "{key}");
    }
}

#[test]
fn reset_zeroes_stats_and_keeps_config() {
    let dir = tempfile::tempdir().unwrap();
    let store = StatsStore::new(dir.path());
    let config = Config::default().with_tie_reward(55);
    store.save_config(&config).unwrap();
    store
        .save_stats(&AllTimeStats {
            points: 10,
            rounds_played: 1,
            player_wins: 1,
            computer_wins: 0,
            draws: 0,
        })
        .unwrap();

    assert_eq!(store.reset().unwrap(), AllTimeStats::default());
    assert_eq!(store.load_stats(), AllTimeStats::default());
    assert_eq!(store.load_config(), config);
}

#[test]
fn corrupt_records_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = StatsStore::new(dir.path());
    fs::write(store.config_path(), "{ win_reward: ").unwrap();
    fs::write(store.stats_path(), "{\"points\": -4}").unwrap();

    assert_eq!(store.load_config(), Config::default());
    assert_eq!(store.load_stats(), AllTimeStats::default());
}

#[test]
fn partial_records_fill_missing_keys() {
    let dir = tempfile::tempdir().unwrap();
    let store = StatsStore::new(dir.path());
    fs::write(store.config_path(), "{\"win_reward\": 300}").unwrap();
    fs::write(store.stats_path(), "{\"points\": 40}").unwrap();

    assert_eq!(store.load_config(), Config::default().with_win_reward(300));
    assert_eq!(
        store.load_stats(),
        AllTimeStats {
            points: 40,
            ..AllTimeStats::default()
        }
    );
}

#[test]
fn inconsistent_stats_are_repaired() {
    let dir = tempfile::tempdir().unwrap();
    let store = StatsStore::new(dir.path());
    fs::write(
        store.stats_path(),
        r#"{"points": 5, "rounds_played": 99, "player_wins": 2, "computer_wins": 3, "draws": 1}"#,
    )
    .unwrap();

    let stats = store.load_stats();
    assert_eq!(stats.rounds_played, 6);
    assert!(stats.is_consistent());
}

#[test]
fn save_into_a_file_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();
    let store = StatsStore::new(blocker.join("rps"));

    let err = store.save_stats(&AllTimeStats::default()).unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
    assert!(err.to_string().starts_with("failed to write"));
    assert_eq!(store.load_stats(), AllTimeStats::default());
}
