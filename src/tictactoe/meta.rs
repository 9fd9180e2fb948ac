//! The nine-board arrangement and active sub-board resolution

use serde::{Deserialize, Serialize};

use super::SubBoard;

/// Nine sub-boards in row-major order plus the server's routing hint.
///
/// `next_board` is `None` when the player to move may pick any playable
/// sub-board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetaBoard {
    pub boards: [SubBoard; 9],
    pub next_board: Option<usize>,
}

impl MetaBoard {
    /// Nine empty, playable sub-boards with a free choice of board
    pub fn new() -> Self {
        MetaBoard {
            boards: [SubBoard::new(); 9],
            next_board: None,
        }
    }

    /// Set the server-dictated sub-board.
    #[must_use]
    pub fn with_next_board(mut self, next_board: Option<usize>) -> Self {
        self.next_board = next_board;
        self
    }

    /// Get sub-board at index (0-8)
    pub fn board(&self, idx: usize) -> &SubBoard {
        &self.boards[idx]
    }

    /// Resolve the sub-board the player must (or may) move in.
    ///
    /// The server's `next_board` is authoritative whatever the playable flags
    /// say; otherwise the lowest-indexed playable sub-board is chosen.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPosition`] for a `next_board` beyond 8 and
    /// [`crate::Error::NoPlayableBoard`] when nothing is playable, which means
    /// the game is already finished.
    pub fn active_board(&self) -> Result<usize, crate::Error> {
        match self.next_board {
            Some(idx) if idx >= 9 => Err(crate::Error::InvalidPosition { position: idx }),
            Some(idx) => Ok(idx),
            None => self
                .boards
                .iter()
                .position(|board| board.playable)
                .ok_or(crate::Error::NoPlayableBoard),
        }
    }
}

impl Default for MetaBoard {
    fn default() -> Self {
        Self::new()
    }
}
