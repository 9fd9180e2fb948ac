//! Layered heuristic move selection
//!
//! Priority chain, first match wins:
//! 1. Empty sub-board: take cell 0
//! 2. Complete one of our own lines
//! 3. Block the opponent's completion
//! 4. Lowest-indexed empty cell

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Result,
    ports::MovePolicy,
    tictactoe::{LineAnalyzer, MetaBoard, SubBoard, Token},
};

/// Own token and opponent token, already resolved from the player list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenPair {
    pub own: Token,
    pub opponent: Token,
}

impl TokenPair {
    pub fn new(own: Token, opponent: Token) -> Self {
        Self { own, opponent }
    }

    /// The same pair seen from the other player's side
    #[must_use]
    pub fn swapped(self) -> Self {
        Self {
            own: self.opponent,
            opponent: self.own,
        }
    }
}

/// Where to place the next mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveIntent {
    pub board: usize,
    pub cell: usize,
}

impl MoveIntent {
    pub fn new(board: usize, cell: usize) -> Self {
        Self { board, cell }
    }
}

impl fmt::Display for MoveIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "board {} cell {}", self.board, self.cell)
    }
}

/// Which tier of the priority chain produced a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Opening,
    Win,
    Block,
    Fallback,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Decision::Opening => "opening",
            Decision::Win => "win",
            Decision::Block => "block",
            Decision::Fallback => "fallback",
        };
        f.write_str(label)
    }
}

/// A chosen cell together with the reason it was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub cell: usize,
    pub decision: Decision,
}

/// Stateless win / block / first-open-cell selector.
///
/// Looks exactly one ply ahead inside the active sub-board and never
/// mutates the board it is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicSelector;

impl HeuristicSelector {
    pub fn new() -> Self {
        HeuristicSelector
    }

    /// Pick a cell on a single sub-board.
    ///
    /// Returns `None` only when the sub-board has no empty cell.
    pub fn select_cell(board: &SubBoard, tokens: TokenPair) -> Option<Selection> {
        if board.is_vacant() {
            return Some(Selection {
                cell: 0,
                decision: Decision::Opening,
            });
        }

        if let Some(cell) = LineAnalyzer::find_completion(board, tokens.own) {
            return Some(Selection {
                cell,
                decision: Decision::Win,
            });
        }

        if let Some(cell) = LineAnalyzer::find_completion(board, tokens.opponent) {
            return Some(Selection {
                cell,
                decision: Decision::Block,
            });
        }

        board.first_empty().map(|cell| Selection {
            cell,
            decision: Decision::Fallback,
        })
    }

    /// Resolve the active sub-board and pick a cell in it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoPlayableBoard`] if the game has no playable
    /// sub-board, [`crate::Error::InvalidPosition`] for an out-of-range
    /// `next_board`, and [`crate::Error::BoardFull`] if the active sub-board
    /// has no empty cell.
    pub fn plan(game: &MetaBoard, tokens: TokenPair) -> Result<(MoveIntent, Decision)> {
        let board = game.active_board()?;
        let selection = Self::select_cell(game.board(board), tokens)
            .ok_or(crate::Error::BoardFull { board })?;

        debug!(
            board,
            cell = selection.cell,
            decision = %selection.decision,
            own = %tokens.own,
            "selected move"
        );

        Ok((MoveIntent::new(board, selection.cell), selection.decision))
    }
}

impl MovePolicy for HeuristicSelector {
    fn choose_move(&self, game: &MetaBoard, tokens: TokenPair) -> Result<MoveIntent> {
        Self::plan(game, tokens).map(|(intent, _)| intent)
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Token = Token::new('X');
    const O: Token = Token::new('O');

    fn pair() -> TokenPair {
        TokenPair::new(X, O)
    }

    #[test]
    fn vacant_board_opens_at_zero() {
        let selection = HeuristicSelector::select_cell(&SubBoard::new(), pair()).unwrap();
        assert_eq!(selection.cell, 0);
        assert_eq!(selection.decision, Decision::Opening);
    }

    #[test]
    fn win_beats_block() {
        // OO.
        // XX.
        // ...
        let board = SubBoard::from_string("OO. XX. ...").unwrap();
        let selection = HeuristicSelector::select_cell(&board, pair()).unwrap();
        assert_eq!(selection.cell, 5);
        assert_eq!(selection.decision, Decision::Win);
    }

    #[test]
    fn block_when_no_win() {
        let board = SubBoard::from_string("O.. O.. X..").unwrap();
        let selection = HeuristicSelector::select_cell(&board, pair()).unwrap();
        // Column 0 is already blocked by X at 6; nothing to do there.
        assert_eq!(selection.decision, Decision::Fallback);
        assert_eq!(selection.cell, 1);

        let board = SubBoard::from_string("O.X .O. X..").unwrap();
        let selection = HeuristicSelector::select_cell(&board, pair()).unwrap();
        assert_eq!(selection.cell, 8);
        assert_eq!(selection.decision, Decision::Block);
    }

    #[test]
    fn full_board_yields_nothing() {
        let board = SubBoard::from_string("XOX XOO OXX").unwrap();
        assert_eq!(HeuristicSelector::select_cell(&board, pair()), None);
    }

    #[test]
    fn plan_reports_full_active_board() {
        let mut game = MetaBoard::new().with_next_board(Some(3));
        game.boards[3] = SubBoard::from_string("XOX XOO OXX").unwrap();
        assert!(matches!(
            HeuristicSelector::plan(&game, pair()),
            Err(crate::Error::BoardFull { board: 3 })
        ));
    }

    #[test]
    fn swapped_pair_blocks_for_the_other_side() {
        let board = SubBoard::from_string("XX. ... O..").unwrap();
        let as_o = HeuristicSelector::select_cell(&board, pair().swapped()).unwrap();
        assert_eq!(as_o.cell, 2);
        assert_eq!(as_o.decision, Decision::Block);
    }

    #[test]
    fn intent_display() {
        assert_eq!(MoveIntent::new(4, 7).to_string(), "board 4 cell 7");
    }
}
