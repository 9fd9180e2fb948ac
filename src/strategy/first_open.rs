//! Baseline policy that ignores threats entirely.

use tracing::debug;

use crate::{
    Result,
    ports::MovePolicy,
    strategy::{MoveIntent, TokenPair},
    tictactoe::MetaBoard,
};

/// Picks the first empty cell of the active sub-board.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstOpenPolicy;

impl FirstOpenPolicy {
    pub fn new() -> Self {
        FirstOpenPolicy
    }
}

impl MovePolicy for FirstOpenPolicy {
    fn choose_move(&self, game: &MetaBoard, _tokens: TokenPair) -> Result<MoveIntent> {
        let board = game.active_board()?;
        let cell = game
            .board(board)
            .first_empty()
            .ok_or(crate::Error::BoardFull { board })?;
        debug!(board, cell, "first open cell");
        Ok(MoveIntent::new(board, cell))
    }

    fn name(&self) -> &str {
        "first-open"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::{SubBoard, Token};

    #[test]
    fn ignores_threats() {
        let mut game = MetaBoard::new().with_next_board(Some(2));
        game.boards[2] = SubBoard::from_string("O.. O.. ...").unwrap();
        let tokens = TokenPair::new(Token::new('X'), Token::new('O'));
        let intent = FirstOpenPolicy::new().choose_move(&game, tokens).unwrap();
        assert_eq!(intent, MoveIntent::new(2, 1));
    }
}
