//! Wire types mirroring the game server's JSON
//!
//! A game looks like this on the wire:
//!
//! ```json
//! {
//!   "id": "g1",
//!   "boards": [{ "rows": [["X", null, null], [null, null, null], [null, null, null]], "playable": true }],
//!   "nextBoard": 4,
//!   "players": [{ "name": "alice", "token": "X" }, { "name": "robot", "token": "O" }],
//!   "state": "inProgress",
//!   "currentPlayer": { "name": "alice", "token": "X", "secret": "..." }
//! }
//! ```
//!
//! (`boards` always carries nine entries; one is shown for brevity.)

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    strategy::{MoveIntent, TokenPair},
    tictactoe::{MetaBoard, SubBoard, Token},
};

/// Lifecycle state reported by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameStatus {
    InProgress,
    Won,
    Drawn,
    /// Any other terminal value the server may report
    #[serde(other)]
    Finished,
}

/// One sub-board as sent by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub rows: [[Option<Token>; 3]; 3],
    pub playable: bool,
}

impl From<&SubBoard> for BoardView {
    fn from(board: &SubBoard) -> Self {
        BoardView {
            rows: board.rows(),
            playable: board.playable,
        }
    }
}

impl From<&BoardView> for SubBoard {
    fn from(view: &BoardView) -> Self {
        SubBoard::from_rows(view.rows, view.playable)
    }
}

/// A registered player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub name: String,
    pub token: Token,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

impl PlayerView {
    /// Copy without the secret, for showing a player to the other side
    #[must_use]
    pub fn public(&self) -> Self {
        PlayerView {
            secret: None,
            ..self.clone()
        }
    }
}

/// Full game snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub id: String,
    pub boards: Vec<BoardView>,
    #[serde(default)]
    pub next_board: Option<usize>,
    #[serde(default)]
    pub players: Vec<PlayerView>,
    pub state: GameStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_player: Option<PlayerView>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<PlayerView>,
}

impl GameView {
    /// Parse a snapshot from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read a snapshot from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| crate::Error::Io {
            operation: format!("read game file {}", path.display()),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn is_in_progress(&self) -> bool {
        self.state == GameStatus::InProgress
    }

    /// Build the engine's view of the board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MalformedGame`] unless exactly nine boards are
    /// present and `nextBoard`, when set, is within 0-8.
    pub fn meta_board(&self) -> Result<MetaBoard> {
        let boards: [SubBoard; 9] = self
            .boards
            .iter()
            .map(SubBoard::from)
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|_| crate::Error::MalformedGame {
                message: format!("expected 9 boards, got {}", self.boards.len()),
            })?;

        if let Some(next) = self.next_board
            && next >= 9
        {
            return Err(crate::Error::MalformedGame {
                message: format!("nextBoard {next} is out of range"),
            });
        }

        Ok(MetaBoard {
            boards,
            next_board: self.next_board,
        })
    }

    /// Find a player by name.
    pub fn player(&self, name: &str) -> Option<&PlayerView> {
        self.players.iter().find(|player| player.name == name)
    }

    /// Resolve `name`'s token and the opponent's token.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownPlayer`] if `name` has not joined, and
    /// [`crate::Error::MalformedGame`] if no opponent with a different token
    /// is registered.
    pub fn tokens_for(&self, name: &str) -> Result<TokenPair> {
        let own = self
            .player(name)
            .ok_or_else(|| crate::Error::UnknownPlayer {
                name: name.to_string(),
            })?
            .token;
        let opponent = self
            .players
            .iter()
            .find(|player| player.name != name && player.token != own)
            .ok_or_else(|| crate::Error::MalformedGame {
                message: format!("no opponent registered for '{name}'"),
            })?
            .token;
        Ok(TokenPair::new(own, opponent))
    }

    /// True when the named player is the one on move.
    pub fn is_turn_of(&self, name: &str) -> bool {
        self.current_player
            .as_ref()
            .is_some_and(|player| player.name == name)
    }

    /// Secret of the player on move, if the server revealed it.
    pub fn current_secret(&self) -> Option<&str> {
        self.current_player
            .as_ref()
            .and_then(|player| player.secret.as_deref())
    }
}

/// Body of a create-game response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedGame {
    pub id: String,
}

/// Body of a join request; `pair: 1` asks for a robot partner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pair: Option<u8>,
}

impl JoinRequest {
    pub fn new(name: impl Into<String>, auto_pair: bool) -> Self {
        JoinRequest {
            name: name.into(),
            pair: auto_pair.then_some(1),
        }
    }

    pub fn wants_robot(&self) -> bool {
        self.pair.is_some_and(|pair| pair > 0)
    }
}

/// Body of a move submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub board: usize,
    pub cell: usize,
}

impl From<MoveIntent> for MoveRequest {
    fn from(intent: MoveIntent) -> Self {
        MoveRequest {
            board: intent.board,
            cell: intent.cell,
        }
    }
}
