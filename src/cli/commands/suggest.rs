//! Suggest command - run the engine on a saved game snapshot

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;

use crate::{
    protocol::GameView,
    strategy::{Decision, HeuristicSelector, MoveIntent},
};

#[derive(Parser, Debug)]
#[command(about = "Suggest a move for a saved game snapshot")]
pub struct SuggestArgs {
    /// Path to a game snapshot in the server's JSON format
    pub game: PathBuf,

    /// Player to suggest a move for
    #[arg(long, short = 'p')]
    pub player: String,

    /// Print the suggestion as a JSON object
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct Suggestion {
    board: usize,
    cell: usize,
    decision: Decision,
}

pub fn execute(args: SuggestArgs) -> Result<()> {
    let game = GameView::from_json_file(&args.game)
        .with_context(|| format!("loading {}", args.game.display()))?;
    if !game.is_in_progress() {
        bail!("game '{}' is not in progress ({:?})", game.id, game.state);
    }

    let tokens = game.tokens_for(&args.player)?;
    let (intent, decision) = HeuristicSelector::plan(&game.meta_board()?, tokens)?;

    if args.json {
        let suggestion = Suggestion {
            board: intent.board,
            cell: intent.cell,
            decision,
        };
        println!("{}", serde_json::to_string(&suggestion)?);
    } else {
        println!("{}", suggestion_line(intent, decision));
    }
    Ok(())
}

/// Plain-text suggestion, e.g. `board 4 cell 2 (win)`
fn suggestion_line(intent: MoveIntent, decision: Decision) -> String {
    format!("{intent} ({decision})")
}
