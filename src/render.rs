//! Console rendering of the meta-board

use std::io::Write;

use crate::{
    Result,
    ports::SessionObserver,
    protocol::GameView,
    strategy::MoveIntent,
    tictactoe::{MetaBoard, SubBoard},
};

/// Render sub-boards as bands of three side by side.
///
/// Empty cells print as `-`, boards in a band are separated by two spaces and
/// each band is followed by a blank line.
///
/// ```
/// use uttt::{render::render_meta, tictactoe::MetaBoard};
///
/// let text = render_meta(&MetaBoard::new());
/// assert!(text.starts_with("- - -  - - -  - - -\n"));
/// ```
pub fn render_boards(boards: &[SubBoard]) -> String {
    let mut out = String::new();
    for band in boards.chunks(3) {
        for row in 0..3 {
            let line: Vec<String> = band
                .iter()
                .map(|board| {
                    board.rows()[row]
                        .iter()
                        .map(|cell| cell.map_or('-', |token| token.as_char()).to_string())
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .collect();
            out.push_str(&line.join("  "));
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

pub fn render_meta(meta: &MetaBoard) -> String {
    render_boards(&meta.boards)
}

pub fn render_game(game: &GameView) -> String {
    let boards: Vec<SubBoard> = game.boards.iter().map(SubBoard::from).collect();
    render_boards(&boards)
}

/// One-line description of how a finished game ended
pub fn outcome_line(game: &GameView) -> String {
    let winner = game
        .winner
        .as_ref()
        .map_or("None", |player| player.name.as_str());
    format!("Game state: {:?}, winner: {winner}", game.state)
}

/// Observer that prints every snapshot and move to a writer.
pub struct ConsoleObserver<W: Write> {
    out: W,
}

impl ConsoleObserver<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.out
            .write_all(text.as_bytes())
            .map_err(|source| crate::Error::Io {
                operation: "write board".to_string(),
                source,
            })
    }
}

impl<W: Write> SessionObserver for ConsoleObserver<W> {
    fn on_snapshot(&mut self, game: &GameView) -> Result<()> {
        self.write(&render_game(game))
    }

    fn on_move(&mut self, _game_id: &str, intent: &MoveIntent) -> Result<()> {
        self.write(&format!("MY MOVE BOARD {} CELL {}\n", intent.board, intent.cell))
    }

    fn on_game_end(&mut self, game: &GameView) -> Result<()> {
        self.write(&format!("{}\n", outcome_line(game)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_place_boards_side_by_side() {
        let mut meta = MetaBoard::new();
        meta.boards[1] = SubBoard::from_string("X.. ... ...").unwrap();
        meta.boards[5] = SubBoard::from_string("... ... ..O").unwrap();

        let text = render_meta(&meta);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], "- - -  X - -  - - -");
        assert_eq!(lines[3], "");
        assert_eq!(lines[6], "- - -  - - -  - - O");
    }

    #[test]
    fn console_observer_reports_moves() {
        let mut observer = ConsoleObserver::new(Vec::new());
        observer.on_move("g", &MoveIntent::new(3, 8)).unwrap();
        let text = String::from_utf8(observer.into_inner()).unwrap();
        assert_eq!(text, "MY MOVE BOARD 3 CELL 8\n");
    }
}
