//! Sub-board representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// A player's mark.
///
/// Tokens are opaque to the engine: the server assigns one character to each
/// player and the engine only ever compares them for equality. On the wire a
/// token must be exactly one non-whitespace character; anything longer fails
/// to deserialize, and with it the whole game snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Token(char);

impl Token {
    /// Create a token from a character.
    pub const fn new(mark: char) -> Self {
        Token(mark)
    }

    /// The character this token is drawn with.
    pub fn as_char(self) -> char {
        self.0
    }

    /// Parse a token from its wire form (a one-character string).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidToken`] unless `text` is exactly one
    /// non-whitespace character.
    pub fn parse(text: &str) -> Result<Self, crate::Error> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_whitespace() => Ok(Token(c)),
            _ => Err(crate::Error::InvalidToken {
                token: text.to_string(),
            }),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Token {
    type Error = crate::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Token::parse(&value)
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.0.to_string()
    }
}

/// One 3x3 grid of the meta-board.
///
/// Cells are indexed 0-8 in row-major order. `playable` is supplied by the
/// server and is never derived from the cell contents here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubBoard {
    pub cells: [Option<Token>; 9],
    pub playable: bool,
}

impl SubBoard {
    /// Create an empty, playable sub-board
    pub fn new() -> Self {
        SubBoard {
            cells: [None; 9],
            playable: true,
        }
    }

    /// Build a sub-board from three rows of three cells.
    pub fn from_rows(rows: [[Option<Token>; 3]; 3], playable: bool) -> Self {
        let mut cells = [None; 9];
        for (r, row) in rows.iter().enumerate() {
            cells[r * 3..r * 3 + 3].copy_from_slice(row);
        }
        SubBoard { cells, playable }
    }

    /// Create a playable sub-board from a string such as `"XX. O.. ..."`.
    ///
    /// Whitespace is ignored, `.` `-` and `_` mark empty cells and any other
    /// alphanumeric character is taken as a token.
    ///
    /// # Errors
    ///
    /// Returns error unless exactly 9 cells are given, or if a character is neither
    /// an empty marker nor alphanumeric.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [None; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = match c {
                '.' | '-' | '_' => None,
                c if c.is_alphanumeric() => Some(Token(c)),
                _ => {
                    return Err(crate::Error::InvalidCellCharacter {
                        character: c,
                        position: i,
                        context: s.to_string(),
                    });
                }
            };
        }

        Ok(SubBoard {
            cells,
            playable: true,
        })
    }

    /// The cells as three rows, top to bottom.
    pub fn rows(&self) -> [[Option<Token>; 3]; 3] {
        [
            [self.cells[0], self.cells[1], self.cells[2]],
            [self.cells[3], self.cells[4], self.cells[5]],
            [self.cells[6], self.cells[7], self.cells[8]],
        ]
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Option<Token> {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos].is_none()
    }

    /// True when no mark has been placed yet
    pub fn is_vacant(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// True when every cell holds a mark
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Lowest-indexed empty cell
    pub fn first_empty(&self) -> Option<usize> {
        self.cells.iter().position(Option::is_none)
    }

    /// Get all empty positions
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    /// The token holding a complete line, if any
    pub fn winner(&self) -> Option<Token> {
        LineAnalyzer::winner(&self.cells)
    }

    /// Place a mark and return the resulting sub-board.
    ///
    /// # Errors
    ///
    /// Returns error if `pos` is out of range or already occupied.
    #[must_use = "with_mark returns a new sub-board; the original is unchanged"]
    pub fn with_mark(&self, pos: usize, token: Token) -> Result<SubBoard, crate::Error> {
        if pos >= 9 {
            return Err(crate::Error::InvalidPosition { position: pos });
        }
        if !self.is_empty(pos) {
            return Err(crate::Error::InvalidMove { position: pos });
        }

        let mut next = *self;
        next.cells[pos] = Some(token);
        Ok(next)
    }
}

impl Default for SubBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row
                .iter()
                .map(|cell| cell.map_or('-', Token::as_char).to_string())
                .collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
