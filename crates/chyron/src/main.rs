//! CLI entry point for chyron.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

use chyron_app::{ChyronConfig, LineupFile, TickerSession, sample_items, sample_lineup_toml};

mod tui;

/// Rotating news/score ticker with a terminal control panel.
#[derive(Parser, Debug)]
#[command(
    name = "chyron",
    version,
    about = "chyron: a rotating news/score banner with a live control panel"
)]
struct Cli {
    /// Path to a configuration file (defaults to chyron.toml discovery).
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Launch the banner and its control panel.
    Run {
        /// Seed the lineup from a TOML file.
        #[arg(long)]
        lineup: Option<PathBuf>,

        /// Seed the lineup with the built-in demo entries.
        #[arg(long)]
        demo: bool,
    },

    /// Print a lineup file template to stdout.
    SampleLineup,
}

fn main() -> Result<()> {
    let Cli { config, cmd } = Cli::parse();

    install_tracing();

    let config = ChyronConfig::load(config.as_deref())?;
    execute_command(&config, cmd)
}

fn execute_command(config: &ChyronConfig, command: Command) -> Result<()> {
    match command {
        Command::Run { lineup, demo } => {
            let now = Instant::now();
            let session = TickerSession::new(config.rotation.timing(), now);
            if let Some(path) = lineup {
                let items = LineupFile::load(&path)?.into_items()?;
                session.seed(items, now);
            } else if demo {
                session.seed(sample_items(), now);
            }
            tui::run(&session, config)
        }

        Command::SampleLineup => {
            println!("{}", sample_lineup_toml());
            Ok(())
        }
    }
}

fn install_tracing() {
    // RUST_LOG overrides the filter; default is INFO.
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_run_command() {
        let cli = Cli::parse_from(["chyron", "run", "--demo"]);
        match cli.cmd {
            Command::Run { lineup, demo } => {
                assert!(lineup.is_none());
                assert!(demo);
            }
            Command::SampleLineup => panic!("expected run command"),
        }
    }

    #[test]
    fn parse_run_with_lineup_file() {
        let cli = Cli::parse_from(["chyron", "--config", "show.toml", "run", "--lineup", "lineup.toml"]);
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("show.toml")));
        match cli.cmd {
            Command::Run { lineup, demo } => {
                assert_eq!(lineup.as_deref(), Some(std::path::Path::new("lineup.toml")));
                assert!(!demo);
            }
            Command::SampleLineup => panic!("expected run command"),
        }
    }

    #[test]
    fn parse_sample_lineup_command() {
        let cli = Cli::parse_from(["chyron", "sample-lineup"]);
        assert!(matches!(cli.cmd, Command::SampleLineup));
    }
}
