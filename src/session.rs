//! The polling loop that plays one game to completion.
//!
//! Each iteration looks at the latest snapshot and does exactly one thing:
//! stop if the game is over, wait if it is not our turn, otherwise choose a
//! move and submit it. The policy is consulted once per snapshot.

use std::{thread, time::Duration};

use tracing::{info, warn};

use crate::{
    Result,
    app::ClientConfig,
    error::Error,
    ports::{GameServer, MovePolicy, SessionObserver},
    protocol::{GameStatus, GameView, JoinRequest},
};

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub game_id: String,
    pub moves_played: usize,
    pub final_game: GameView,
}

impl SessionSummary {
    pub fn state(&self) -> GameStatus {
        self.final_game.state
    }

    pub fn is_finished(&self) -> bool {
        !self.final_game.is_in_progress()
    }

    /// Name of the winning player, if the game was won
    pub fn winner_name(&self) -> Option<&str> {
        self.final_game
            .winner
            .as_ref()
            .map(|player| player.name.as_str())
    }
}

/// One player's seat at one game.
pub struct Session<'a, S: GameServer> {
    server: &'a mut S,
    policy: &'a dyn MovePolicy,
    config: &'a ClientConfig,
}

impl<'a, S: GameServer> Session<'a, S> {
    pub fn new(server: &'a mut S, policy: &'a dyn MovePolicy, config: &'a ClientConfig) -> Self {
        Self {
            server,
            policy,
            config,
        }
    }

    /// Join (creating the game if no id is configured) and play until the
    /// game leaves the in-progress state.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration is invalid
    /// - The server rejects the join or a move
    /// - A snapshot cannot be turned into a board
    /// - The game is still running after `max_turns` iterations
    pub fn run(&mut self, observer: &mut dyn SessionObserver) -> Result<SessionSummary> {
        self.config.validate()?;
        let name = self.config.player_name.as_str();

        let game_id = match &self.config.game_id {
            Some(id) => id.clone(),
            None => self.server.create_game()?,
        };
        let request = JoinRequest::new(name, self.config.auto_pair);
        let mut game = self.server.join_game(&game_id, &request)?;
        info!(game = %game_id, player = name, policy = self.policy.name(), "joined game");

        let mut moves_played = 0;
        for _ in 0..self.config.max_turns {
            observer.on_snapshot(&game)?;

            if !game.is_in_progress() {
                observer.on_game_end(&game)?;
                let summary = SessionSummary {
                    game_id,
                    moves_played,
                    final_game: game,
                };
                info!(
                    game = %summary.game_id,
                    state = ?summary.state(),
                    winner = summary.winner_name().unwrap_or("none"),
                    moves = summary.moves_played,
                    "game finished"
                );
                return Ok(summary);
            }

            if game.players.len() < 2 || !game.is_turn_of(name) {
                thread::sleep(Duration::from_millis(self.config.poll_interval_ms));
                game = self.server.game(&game_id, name)?;
                continue;
            }

            let tokens = game.tokens_for(name)?;
            let intent = self.policy.choose_move(&game.meta_board()?, tokens)?;
            let secret = game
                .current_secret()
                .ok_or_else(|| Error::MalformedGame {
                    message: "current player secret is missing".to_string(),
                })?
                .to_string();

            observer.on_move(&game_id, &intent)?;
            game = match self.server.play(&game_id, &secret, intent.into()) {
                Ok(next) => next,
                Err(err) => {
                    warn!(game = %game_id, %intent, error = %err, "move rejected");
                    return Err(err);
                }
            };
            moves_played += 1;
            info!(game = %game_id, %intent, "move submitted");
        }

        Err(Error::TurnLimitReached {
            max_turns: self.config.max_turns,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{adapters::LocalServer, ports::NullObserver, strategy::HeuristicSelector};

    #[test]
    fn plays_to_completion_against_robot() {
        let mut server = LocalServer::with_seed(11);
        let config = ClientConfig::new("alice")
            .with_auto_pair(true)
            .with_poll_interval_ms(0);
        let policy = HeuristicSelector::new();
        let summary = Session::new(&mut server, &policy, &config)
            .run(&mut NullObserver)
            .unwrap();
        assert!(summary.is_finished());
        assert!(summary.moves_played > 0);
    }

    #[test]
    fn turn_limit_is_enforced() {
        let mut server = LocalServer::with_seed(11);
        let config = ClientConfig::new("alice")
            .with_auto_pair(true)
            .with_max_turns(2)
            .with_poll_interval_ms(0);
        let policy = HeuristicSelector::new();
        let err = Session::new(&mut server, &policy, &config)
            .run(&mut NullObserver)
            .unwrap_err();
        assert!(matches!(err, Error::TurnLimitReached { max_turns: 2 }));
    }
}
