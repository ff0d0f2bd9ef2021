//! Interactive menu tests driven by scripted input.

use std::io::Cursor;
use std::path::Path;

use rpsrs::cli::{Command, Console, Menu};
use rpsrs::cli::help::answer;
use rpsrs::{Config, Session, StatsStore};

fn run_menu(dir: &Path, input: &str) -> (Session, String) {
    let session = Session::open(StatsStore::new(dir), 11);
    let console = Console::new(Cursor::new(input.as_bytes()), Vec::new());
    let mut menu = Menu::new(session, console);
    menu.run().unwrap();

    let (session, console) = menu.into_parts();
    let output = String::from_utf8(console.into_output()).unwrap();
    (session, output)
}

#[test]
fn commands_parse_by_number_and_name() {
    assert_eq!(Command::parse("1"), Some(Command::Play));
    assert_eq!(Command::parse(" PLAY "), Some(Command::Play));
    assert_eq!(Command::parse("2"), Some(Command::Demo));
    assert_eq!(Command::parse("s"), Some(Command::Score));
    assert_eq!(Command::parse("config"), Some(Command::Config));
    assert_eq!(Command::parse("5"), Some(Command::Reset));
    assert_eq!(Command::parse("exit"), Some(Command::Quit));
    assert_eq!(Command::parse("7"), Some(Command::Help));
    assert_eq!(
        Command::parse("How do I win"),
        Some(Command::Ask("how do i win".to_owned()))
    );
    assert_eq!(Command::parse("dance"), None);
}

#[test]
fn quit_exits_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let (_, output) = run_menu(dir.path(), "quit\n");
    assert!(output.contains("Welcome to Rock Paper Scissors"));
    assert!(output.contains("Goodbye"));
}

#[test]
fn end_of_input_exits_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let (_, output) = run_menu(dir.path(), "");
    assert!(output.contains("Goodbye"));
}

#[test]
fn invalid_moves_do_not_consume_rounds() {
    let dir = tempfile::tempdir().unwrap();
    let (session, output) = run_menu(
        dir.path(),
        "play\nrounds\n2\nlizard\nrock\n\nROCK \nquit\n",
    );

    assert_eq!(output.matches("Invalid choice; try again.").count(), 2);
    assert!(output.contains("Round 1/2"));
    assert!(output.contains("Round 2/2"));
    assert!(!output.contains("Round 3/2"));
    assert!(output.contains("--- Series Summary ---"));

    let stats = session.stats();
    assert_eq!(stats.rounds_played, 2);
    assert!(stats.is_consistent());
    assert!(stats.points > 0);
    assert_eq!(StatsStore::new(dir.path()).load_stats(), *stats);
}

#[test]
fn even_best_of_is_rejected_before_play() {
    let dir = tempfile::tempdir().unwrap();
    let (session, output) = run_menu(dir.path(), "play\nbest-of\n4\nquit\nquit\n");

    assert!(output.contains("Please enter an odd number"));
    assert!(output.contains("Cancelled"));
    assert!(!output.contains("Round 1/"));
    assert_eq!(session.stats().rounds_played, 0);
    assert!(!StatsStore::new(dir.path()).stats_path().exists());
}

#[test]
fn invalid_mode_and_count_reprompt() {
    let dir = tempfile::tempdir().unwrap();
    let (session, output) = run_menu(
        dir.path(),
        "play\ntournament\nbest of\n0\nthree\n1\npaper\nquit\n",
    );

    assert!(output.contains("Please enter 'rounds' or 'best-of'."));
    assert_eq!(
        output
            .matches("Please enter a whole number greater than zero.")
            .count(),
        2
    );
    assert!(output.contains("Round 1/1"));
    assert_eq!(session.stats().rounds_played, 1);
}

#[test]
fn quitting_mid_series_keeps_played_rounds() {
    let dir = tempfile::tempdir().unwrap();
    let (session, output) = run_menu(dir.path(), "play\nrounds\n5\nrock\nquit\nquit\n");

    assert!(output.contains("Series ended early"));
    assert!(!output.contains("No points awarded"));
    let stats = session.stats();
    assert_eq!(stats.rounds_played, 1);

    // One round decides the series on the wins so far.
    let config = Config::default();
    let expected = if stats.player_wins == 1 {
        config.win_reward
    } else if stats.computer_wins == 1 {
        config.lose_reward
    } else {
        config.tie_reward
    };
    assert_eq!(stats.points, expected);
    assert_eq!(StatsStore::new(dir.path()).load_stats(), *stats);
}

#[test]
fn demo_plays_one_round() {
    let dir = tempfile::tempdir().unwrap();
    let (session, output) = run_menu(dir.path(), "demo\nquit\n");

    assert!(output.contains("Demo outcome: You"));
    assert!(!output.contains("-> draw"));
    assert_eq!(session.stats().rounds_played, 1);
}

#[test]
fn score_shows_all_time_stats() {
    let dir = tempfile::tempdir().unwrap();
    let (_, output) = run_menu(dir.path(), "score\nquit\n");

    assert!(output.contains("--- Your Stats ---"));
    assert!(output.contains("Points: 0"));
    assert!(output.contains("Rounds played: 0"));
    assert!(output.contains("You: 0.00%   Computer: 0.00%   Draws: 0.00%"));
}

#[test]
fn config_edits_persist() {
    let dir = tempfile::tempdir().unwrap();
    let (session, output) = run_menu(dir.path(), "config\n250\nabc\n\nWinner!\n\n\nquit\n");

    assert!(output.contains("Invalid tie_reward; keeping current value."));
    assert!(output.contains("Configuration saved."));

    let expected = Config::default()
        .with_win_reward(250)
        .with_win_message("Winner!");
    assert_eq!(session.config(), &expected);
    assert_eq!(StatsStore::new(dir.path()).load_config(), expected);
}

#[test]
fn reset_clears_stats_but_not_config() {
    let dir = tempfile::tempdir().unwrap();
    let store = StatsStore::new(dir.path());
    let config = Config::default().with_lose_reward(1);
    store.save_config(&config).unwrap();
    store
        .save_stats(&rpsrs::AllTimeStats {
            points: 300,
            rounds_played: 4,
            player_wins: 4,
            computer_wins: 0,
            draws: 0,
        })
        .unwrap();

    let (session, output) = run_menu(dir.path(), "reset\nquit\n");

    assert!(output.contains("now reset"));
    assert_eq!(*session.stats(), rpsrs::AllTimeStats::default());
    assert_eq!(store.load_stats(), rpsrs::AllTimeStats::default());
    assert_eq!(store.load_config(), config);
}

#[test]
fn help_answers_questions() {
    let dir = tempfile::tempdir().unwrap();
    let (_, output) = run_menu(
        dir.path(),
        "help\nwhat are the rules\nhow do I win?\nwhere is the moon?\nquit\n",
    );

    assert!(output.contains("Rules:"));
    assert!(output.contains("Tips to win:"));
    assert!(output.contains("Sorry, I don't know that one."));
}

#[test]
fn help_reports_configured_rewards() {
    let config = Config::default().with_win_reward(7).with_tie_reward(3);
    let text = answer("how are points awarded", &config);
    assert!(text.contains("Win a series: 7 points"));
    assert!(text.contains("Tie a series: 3 points"));
    assert!(text.contains("Lose a series: 10 points"));

    assert!(answer("", &config).contains("You can ask questions like"));
    assert!(answer("help", &config).contains("You can ask questions like"));
    assert!(answer("tell me a joke", &config).starts_with("Sorry"));
}
