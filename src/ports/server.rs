//! Game server port.
//!
//! This module defines the trait boundary between the session loop and
//! whatever hosts the game: a remote HTTP service, or the in-process referee
//! used for offline play and tests.

use crate::{
    Result,
    protocol::{GameView, JoinRequest, MoveRequest},
};

/// Port for creating, joining and playing games.
///
/// Every method returns the game as seen by the caller: the caller's own
/// secret is included, the opponent's never is.
///
/// # Examples
///
/// ```
/// use uttt::adapters::LocalServer;
/// use uttt::ports::GameServer;
/// use uttt::protocol::{JoinRequest, MoveRequest};
///
/// let mut server = LocalServer::new();
/// let id = server.create_game()?;
/// let game = server.join_game(&id, &JoinRequest::new("alice", true))?;
/// let secret = game.current_secret().unwrap().to_string();
/// let after = server.play(&id, &secret, MoveRequest { board: 4, cell: 4 })?;
/// assert!(after.is_in_progress());
/// # Ok::<(), uttt::Error>(())
/// ```
pub trait GameServer {
    /// Create a new empty game and return its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the server refuses to create a game.
    fn create_game(&mut self) -> Result<String>;

    /// Register a player in an existing game.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The game does not exist
    /// - The game already has two players
    fn join_game(&mut self, game_id: &str, request: &JoinRequest) -> Result<GameView>;

    /// Submit a move on behalf of the player owning `secret`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The game does not exist or is already over
    /// - `secret` does not belong to the player on move
    /// - The move is outside the active sub-board or hits an occupied cell
    fn play(&mut self, game_id: &str, secret: &str, request: MoveRequest) -> Result<GameView>;

    /// Fetch the current state of a game as seen by `viewer`.
    ///
    /// # Errors
    ///
    /// Returns an error if the game does not exist.
    fn game(&self, game_id: &str, viewer: &str) -> Result<GameView>;
}
