//! Winning line geometry and completion detection for a 3x3 grid

use super::{SubBoard, Token};

/// Three cell indices that win when held by one token
pub type Line = [usize; 3];

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// The eight winning lines in scan order: rows, columns, then diagonals.
pub fn lines() -> &'static [Line; 8] {
    &WINNING_LINES
}

/// Utility for analyzing winning lines on a sub-board
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a token holds all three cells of some line
    pub fn has_won(cells: &[Option<Token>; 9], token: Token) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == Some(token)))
    }

    /// The token holding the first complete line, if any
    pub fn winner(cells: &[Option<Token>; 9]) -> Option<Token> {
        WINNING_LINES.iter().find_map(|&[a, b, c]| match cells[a] {
            Some(token) if cells[b] == Some(token) && cells[c] == Some(token) => Some(token),
            _ => None,
        })
    }

    /// Find the cell that completes a line for `token`.
    ///
    /// Lines are scanned in [`WINNING_LINES`] order and the first hit wins,
    /// so a board with several threats always yields the same cell.
    pub fn find_completion(board: &SubBoard, token: Token) -> Option<usize> {
        WINNING_LINES
            .iter()
            .find_map(|line| Self::completion_in_line(&board.cells, token, line))
    }

    /// Two-match, one-gap check for a single line.
    ///
    /// For line `(a, b, c)` the pairings are tried as `(a, b) -> c`,
    /// `(b, c) -> a`, then `(a, c) -> b`.
    pub fn completion_in_line(
        cells: &[Option<Token>; 9],
        token: Token,
        line: &Line,
    ) -> Option<usize> {
        let [a, b, c] = *line;
        let target = Some(token);
        [(a, b, c), (b, c, a), (a, c, b)]
            .into_iter()
            .find_map(|(first, second, gap)| {
                (cells[first] == target && cells[second] == target && cells[gap].is_none())
                    .then_some(gap)
            })
    }
}
