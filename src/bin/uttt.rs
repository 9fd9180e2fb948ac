//! uttt CLI - heuristic ultimate tic-tac-toe player
//!
//! This CLI provides:
//! - Move suggestions for saved game snapshots
//! - Rendering of saved game snapshots
//! - Full games against an in-process robot

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "uttt")]
#[command(version, about = "Heuristic player for ultimate tic-tac-toe", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest a move for a saved game snapshot
    Suggest(uttt::cli::commands::suggest::SuggestArgs),

    /// Render a saved game snapshot
    Show(uttt::cli::commands::show::ShowArgs),

    /// Play a full game against the local robot
    Play(uttt::cli::commands::play::PlayArgs),
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Suggest(args) => uttt::cli::commands::suggest::execute(args),
        Commands::Show(args) => uttt::cli::commands::show::execute(args),
        Commands::Play(args) => uttt::cli::commands::play::execute(args),
    }
}
