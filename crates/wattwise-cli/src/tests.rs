//! CLI argument parsing tests

use clap::Parser;

use crate::cli::{Cli, Commands};

#[test]
fn parses_best_window_args() {
    let cli = Cli::parse_from([
        "wattwise",
        "best-window",
        "--power-watts",
        "1800",
        "--duration-hours",
        "2",
    ]);
    match cli.command {
        Commands::BestWindow {
            power_watts,
            duration_hours,
        } => {
            assert_eq!(power_watts, 1800.0);
            assert_eq!(duration_hours, 2);
        }
        _ => panic!("expected best-window command"),
    }
}

#[test]
fn parses_best_window_short_flags() {
    let cli = Cli::parse_from(["wattwise", "best-window", "-p", "1000", "-d", "1"]);
    assert!(matches!(cli.command, Commands::BestWindow { .. }));
}

#[test]
fn serve_has_sensible_defaults() {
    let cli = Cli::parse_from(["wattwise", "serve"]);
    match cli.command {
        Commands::Serve {
            port,
            host,
            static_dir,
            allowed_origins,
        } => {
            assert_eq!(port, 3000);
            assert_eq!(host, "127.0.0.1");
            assert!(static_dir.is_none());
            assert!(allowed_origins.is_empty());
        }
        _ => panic!("expected serve command"),
    }
}

#[test]
fn serve_accepts_repeated_origins() {
    let cli = Cli::parse_from([
        "wattwise",
        "serve",
        "--allow-origin",
        "https://a.example.com",
        "--allow-origin",
        "https://b.example.com",
    ]);
    match cli.command {
        Commands::Serve { allowed_origins, .. } => assert_eq!(allowed_origins.len(), 2),
        _ => panic!("expected serve command"),
    }
}

#[test]
fn rejects_fractional_duration() {
    assert!(Cli::try_parse_from([
        "wattwise",
        "best-window",
        "--power-watts",
        "1800",
        "--duration-hours",
        "2.5",
    ])
    .is_err());
}
