//! Observer port - hooks into the session loop
//!
//! Rendering and reporting are kept out of the loop itself; anything that
//! wants to watch a game implements this trait.

use crate::{
    Result,
    protocol::GameView,
    strategy::MoveIntent,
};

/// Observer trait for watching a session
///
/// # Event Sequence
///
/// 1. `on_snapshot(game)` - for every snapshot received, including the first
/// 2. `on_move(game_id, intent)` - before each move is submitted
/// 3. `on_game_end(game)` - once, with the terminal snapshot
///
/// # Examples
///
/// ```
/// use uttt::{ports::SessionObserver, protocol::GameView};
///
/// struct Counter {
///     snapshots: usize,
/// }
///
/// impl SessionObserver for Counter {
///     fn on_snapshot(&mut self, _game: &GameView) -> uttt::Result<()> {
///         self.snapshots += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait SessionObserver {
    /// Called for each snapshot the session receives.
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn on_snapshot(&mut self, _game: &GameView) -> Result<()> {
        Ok(())
    }

    /// Called after a move is chosen and before it is submitted.
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn on_move(&mut self, _game_id: &str, _intent: &MoveIntent) -> Result<()> {
        Ok(())
    }

    /// Called once when the game leaves the in-progress state.
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn on_game_end(&mut self, _game: &GameView) -> Result<()> {
        Ok(())
    }
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl SessionObserver for NullObserver {}
