//! Show command - render a saved game snapshot

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::output::print_kv,
    protocol::GameView,
    render::{outcome_line, render_game},
};

#[derive(Parser, Debug)]
#[command(about = "Render a saved game snapshot")]
pub struct ShowArgs {
    /// Path to a game snapshot in the server's JSON format
    pub game: PathBuf,
}

pub fn execute(args: ShowArgs) -> Result<()> {
    let game = GameView::from_json_file(&args.game)
        .with_context(|| format!("loading {}", args.game.display()))?;

    print!("{}", render_game(&game));
    if game.is_in_progress() {
        let next = game
            .next_board
            .map_or_else(|| "any".to_string(), |board| board.to_string());
        print_kv("Next board", &next);
        if let Some(player) = &game.current_player {
            print_kv("To move", &format!("{} ({})", player.name, player.token));
        }
    } else {
        println!("{}", outcome_line(&game));
    }
    Ok(())
}
