//! Policy port - abstraction over move choosing strategies
//!
//! The session loop and the local robot partner only ever see this trait,
//! so the heuristic engine and simpler baselines are interchangeable.

use crate::{
    Result,
    strategy::{MoveIntent, TokenPair},
    tictactoe::MetaBoard,
};

/// Move policy trait - one decision per observed "my turn" snapshot
///
/// Implementations must be pure functions of their inputs: the board is only
/// read, and nothing is remembered between calls. That is what lets a single
/// policy value be shared between threads and games.
///
/// # Examples
///
/// ```
/// use uttt::{
///     ports::MovePolicy,
///     strategy::{HeuristicSelector, TokenPair},
///     tictactoe::{MetaBoard, Token},
/// };
///
/// let policy = HeuristicSelector::new();
/// let tokens = TokenPair::new(Token::new('X'), Token::new('O'));
/// let intent = policy.choose_move(&MetaBoard::new(), tokens)?;
/// assert_eq!((intent.board, intent.cell), (0, 0));
/// # Ok::<(), uttt::Error>(())
/// ```
pub trait MovePolicy: Send + Sync {
    /// Choose where to place `tokens.own` on the given meta-board.
    ///
    /// # Errors
    ///
    /// Returns an error if no sub-board is playable or the active sub-board
    /// has no empty cell. Callers should not ask for a move on a finished game.
    fn choose_move(&self, game: &MetaBoard, tokens: TokenPair) -> Result<MoveIntent>;

    /// Get the policy's name.
    ///
    /// Used for identification in logs and CLI output.
    fn name(&self) -> &str;
}
