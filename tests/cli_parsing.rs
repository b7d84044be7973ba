use std::path::PathBuf;

use clap::Parser;
use dialectic::cli::{Cli, Commands};

#[test]
fn test_parse_run_with_flags() {
    let cli = Cli::try_parse_from(vec![
        "dialectic",
        "run",
        "--purpose",
        "Write a brief.",
        "--format",
        "Bullets.",
        "--domain",
        "Fitness",
        "--max-rounds",
        "5",
        "--threshold",
        "75",
    ])
    .unwrap();

    assert!(!cli.json);
    match cli.command {
        Commands::Run(args) => {
            assert_eq!(args.purpose.as_deref(), Some("Write a brief."));
            assert_eq!(args.format.as_deref(), Some("Bullets."));
            assert_eq!(args.domain.as_deref(), Some("Fitness"));
            assert!(args.constraints.is_none());
            assert_eq!(args.max_rounds, Some(5));
            assert_eq!(args.threshold, Some(75));
            assert!(!args.example);
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_run_example_with_global_json() {
    let cli = Cli::try_parse_from(vec!["dialectic", "run", "--example", "--json"]).unwrap();

    assert!(cli.json);
    match cli.command {
        Commands::Run(args) => assert!(args.example),
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_run_request_file_and_config() {
    let cli = Cli::try_parse_from(vec![
        "dialectic",
        "--config",
        "custom.yaml",
        "run",
        "--request",
        "brief.yaml",
    ])
    .unwrap();

    assert_eq!(cli.config, Some(PathBuf::from("custom.yaml")));
    match cli.command {
        Commands::Run(args) => assert_eq!(args.request, Some(PathBuf::from("brief.yaml"))),
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_run_example_conflicts_with_purpose() {
    let result = Cli::try_parse_from(vec![
        "dialectic",
        "run",
        "--example",
        "--purpose",
        "Something else.",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_run_threshold_must_fit_a_byte() {
    let result = Cli::try_parse_from(vec!["dialectic", "run", "--example", "--threshold", "300"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_diff_positional() {
    let cli = Cli::try_parse_from(vec!["dialectic", "diff", "the quick fox", "the slow fox"]).unwrap();

    match cli.command {
        Commands::Diff(args) => {
            assert_eq!(args.a.as_deref(), Some("the quick fox"));
            assert_eq!(args.b.as_deref(), Some("the slow fox"));
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_diff_files() {
    let cli = Cli::try_parse_from(vec![
        "dialectic",
        "diff",
        "--file-a",
        "old.txt",
        "--file-b",
        "new.txt",
    ])
    .unwrap();

    match cli.command {
        Commands::Diff(args) => {
            assert!(args.a.is_none());
            assert_eq!(args.file_a, Some(PathBuf::from("old.txt")));
            assert_eq!(args.file_b, Some(PathBuf::from("new.txt")));
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_diff_requires_both_sides() {
    assert!(Cli::try_parse_from(vec!["dialectic", "diff", "only one"]).is_err());
}

#[test]
fn test_parse_example() {
    let cli = Cli::try_parse_from(vec!["dialectic", "example"]).unwrap();
    assert!(matches!(cli.command, Commands::Example));
}
