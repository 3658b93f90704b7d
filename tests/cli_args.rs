//! Command-line parsing tests.

use std::path::PathBuf;

use clap::Parser;
use terminal_2048::{
    cli::{Cli, Commands},
    controller::WinPolicy,
    simulation::Strategy,
};

#[test]
fn no_subcommand_plays_with_defaults() {
    let cli = Cli::parse_from(["terminal-2048"]);
    assert!(cli.command.is_none());
    let config = cli.play.config();
    assert_eq!(config.win_tile, 2048);
    assert_eq!(config.win_policy, WinPolicy::Continue);
    assert_eq!(config.seed, None);
    assert_eq!(config.high_score_path, None);
}

#[test]
fn top_level_play_flags() {
    let cli = Cli::parse_from([
        "terminal-2048",
        "--seed",
        "42",
        "--win-tile",
        "1024",
        "--stop-on-win",
        "--scores-file",
        "/tmp/hs.json",
        "--log-file",
        "/tmp/2048.log",
    ]);
    let config = cli.play.config();
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.win_tile, 1024);
    assert_eq!(config.win_policy, WinPolicy::Stop);
    assert_eq!(config.high_score_path, Some(PathBuf::from("/tmp/hs.json")));
    assert_eq!(cli.play.log_file, Some(PathBuf::from("/tmp/2048.log")));
}

#[test]
fn explicit_play_subcommand() {
    let cli = Cli::parse_from(["terminal-2048", "play", "--seed", "7"]);
    match cli.command {
        Some(Commands::Play(args)) => assert_eq!(args.seed, Some(7)),
        other => panic!("expected play, got {other:?}"),
    }
}

#[test]
fn scores_subcommand() {
    let cli = Cli::parse_from(["terminal-2048", "scores", "--scores-file", "s.json"]);
    match cli.command {
        Some(Commands::Scores(args)) => {
            assert_eq!(args.scores_file, Some(PathBuf::from("s.json")));
        }
        other => panic!("expected scores, got {other:?}"),
    }
}

#[test]
fn simulate_subcommand() {
    let cli = Cli::parse_from([
        "terminal-2048",
        "simulate",
        "--games",
        "25",
        "--strategy",
        "greedy",
        "--seed",
        "3",
        "--export",
        "out.csv",
    ]);
    match cli.command {
        Some(Commands::Simulate(args)) => {
            assert_eq!(args.games, 25);
            assert_eq!(args.strategy, Strategy::Greedy);
            assert_eq!(args.seed, 3);
            assert_eq!(args.export, Some(PathBuf::from("out.csv")));
            let config = args.config();
            assert_eq!(config.game.win_policy, WinPolicy::Continue);
        }
        other => panic!("expected simulate, got {other:?}"),
    }
}

#[test]
fn unknown_strategy_is_rejected() {
    let result = Cli::try_parse_from(["terminal-2048", "simulate", "--strategy", "minimax"]);
    assert!(result.is_err());
}

#[test]
fn play_flags_conflict_with_subcommands() {
    let result = Cli::try_parse_from(["terminal-2048", "--seed", "1", "scores"]);
    assert!(result.is_err());
}
