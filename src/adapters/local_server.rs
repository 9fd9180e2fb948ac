//! In-memory game server.
//!
//! This adapter referees complete ultimate tic-tac-toe games without any
//! network I/O, enabling offline play and fast tests of the session loop.

use std::collections::HashMap;

use rand::{Rng, SeedableRng, random, rngs::StdRng};
use tracing::{debug, info};

use crate::{
    Result,
    error::Error,
    ports::{GameServer, MovePolicy},
    protocol::{BoardView, GameStatus, GameView, JoinRequest, MoveRequest, PlayerView},
    strategy::{HeuristicSelector, TokenPair},
    tictactoe::{LineAnalyzer, MetaBoard, SubBoard, Token},
};

const SEAT_TOKENS: [Token; 2] = [Token::new('X'), Token::new('O')];
const ROBOT_NAME: &str = "robot";

#[derive(Debug, Clone)]
struct Seat {
    name: String,
    token: Token,
    secret: String,
    robot: bool,
}

impl Seat {
    fn view(&self, viewer: &str) -> PlayerView {
        PlayerView {
            name: self.name.clone(),
            token: self.token,
            secret: (self.name == viewer).then(|| self.secret.clone()),
        }
    }
}

#[derive(Debug, Clone)]
struct LocalGame {
    id: String,
    boards: [SubBoard; 9],
    next_board: Option<usize>,
    seats: Vec<Seat>,
    to_move: usize,
    state: GameStatus,
    winner: Option<usize>,
}

impl LocalGame {
    fn new(id: String) -> Self {
        LocalGame {
            id,
            boards: [SubBoard::new(); 9],
            next_board: None,
            seats: Vec::with_capacity(2),
            to_move: 0,
            state: GameStatus::InProgress,
            winner: None,
        }
    }

    fn meta_board(&self) -> MetaBoard {
        MetaBoard {
            boards: self.boards,
            next_board: self.next_board,
        }
    }

    fn view(&self, viewer: &str) -> GameView {
        let current_player = (self.state == GameStatus::InProgress)
            .then(|| self.seats.get(self.to_move))
            .flatten()
            .map(|seat| seat.view(viewer));

        GameView {
            id: self.id.clone(),
            boards: self.boards.iter().map(BoardView::from).collect(),
            next_board: self.next_board,
            players: self.seats.iter().map(|seat| seat.view(viewer)).collect(),
            state: self.state,
            current_player,
            winner: self
                .winner
                .and_then(|idx| self.seats.get(idx))
                .map(|seat| seat.view(viewer).public()),
        }
    }

    fn tokens_of(&self, seat: usize) -> TokenPair {
        TokenPair::new(self.seats[seat].token, self.seats[1 - seat].token)
    }

    /// Apply a move for the seat on move and advance the game.
    fn apply(&mut self, request: MoveRequest) -> Result<()> {
        let MoveRequest { board, cell } = request;
        if board >= 9 {
            return Err(Error::InvalidPosition { position: board });
        }
        if cell >= 9 {
            return Err(Error::InvalidPosition { position: cell });
        }

        let illegal = |reason: String| Error::IllegalMove {
            board,
            cell,
            reason,
        };

        match self.next_board {
            Some(required) if required != board => {
                return Err(illegal(format!("must play in board {required}")));
            }
            None if !self.boards[board].playable => {
                return Err(illegal("board is not playable".to_string()));
            }
            _ => {}
        }
        if !self.boards[board].is_empty(cell) {
            return Err(illegal("cell is occupied".to_string()));
        }

        let token = self.seats[self.to_move].token;
        self.boards[board] = self.boards[board].with_mark(cell, token)?;
        for sub in &mut self.boards {
            sub.playable = sub.winner().is_none() && !sub.is_full();
        }
        self.next_board = self.boards[cell].playable.then_some(cell);

        let mut board_winners = [None; 9];
        for (idx, sub) in self.boards.iter().enumerate() {
            board_winners[idx] = sub.winner();
        }

        if LineAnalyzer::has_won(&board_winners, token) {
            self.state = GameStatus::Won;
            self.winner = Some(self.to_move);
            self.next_board = None;
        } else if self.boards.iter().all(|sub| !sub.playable) {
            self.state = GameStatus::Drawn;
            self.next_board = None;
        } else {
            self.to_move = 1 - self.to_move;
        }

        debug!(
            game = %self.id,
            board,
            cell,
            token = %token,
            next_board = ?self.next_board,
            "move applied"
        );
        Ok(())
    }
}

/// In-memory referee implementing [`GameServer`].
///
/// The first player to join gets `X` and moves first. A join request with
/// `pair` set seats a robot as the second player; the robot answers every
/// move immediately using its [`MovePolicy`].
///
/// # Examples
///
/// ```
/// use uttt::adapters::LocalServer;
/// use uttt::ports::GameServer;
/// use uttt::strategy::FirstOpenPolicy;
///
/// let mut server = LocalServer::with_seed(7).with_robot(Box::new(FirstOpenPolicy::new()));
/// let id = server.create_game()?;
/// assert_eq!(server.robot_name(), "first-open");
/// assert!(server.contains(&id));
/// # Ok::<(), uttt::Error>(())
/// ```
pub struct LocalServer {
    games: HashMap<String, LocalGame>,
    robot: Box<dyn MovePolicy>,
    rng: StdRng,
    next_id: u64,
}

impl LocalServer {
    /// Create a server with a heuristic robot and a random seed.
    pub fn new() -> Self {
        Self::with_seed(random())
    }

    /// Create a server whose secrets are derived from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            games: HashMap::new(),
            robot: Box::new(HeuristicSelector::new()),
            rng: StdRng::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Replace the robot partner's policy.
    pub fn with_robot(mut self, robot: Box<dyn MovePolicy>) -> Self {
        self.robot = robot;
        self
    }

    /// Name of the robot partner's policy
    pub fn robot_name(&self) -> &str {
        self.robot.name()
    }

    /// Check if a game with this id exists.
    pub fn contains(&self, game_id: &str) -> bool {
        self.games.contains_key(game_id)
    }

    /// Host a game under a caller-chosen id, keeping any game already there.
    pub fn open_game(&mut self, game_id: &str) {
        if !self.contains(game_id) {
            self.games
                .insert(game_id.to_string(), LocalGame::new(game_id.to_string()));
            info!(game = %game_id, "game opened");
        }
    }

    fn game_mut(&mut self, game_id: &str) -> Result<&mut LocalGame> {
        self.games.get_mut(game_id).ok_or_else(|| Error::UnknownGame {
            id: game_id.to_string(),
        })
    }

    fn new_secret(&mut self) -> String {
        format!("{:016x}", self.rng.random::<u64>())
    }

    /// Refuse a join up front so a failed request never takes a seat.
    fn check_seats(&self, game_id: &str, request: &JoinRequest) -> Result<()> {
        let game = self.games.get(game_id).ok_or_else(|| Error::UnknownGame {
            id: game_id.to_string(),
        })?;
        let wanted = 1 + usize::from(request.wants_robot());
        if game.seats.len() + wanted > 2 {
            return Err(Error::GameFull {
                id: game_id.to_string(),
            });
        }
        let taken = game.seats.iter().any(|seat| seat.name == request.name)
            || (request.wants_robot() && request.name == ROBOT_NAME);
        if taken {
            return Err(Error::InvalidConfiguration {
                message: format!("player name '{}' is already taken", request.name),
            });
        }
        Ok(())
    }

    fn seat_player(&mut self, game_id: &str, name: &str, robot: bool) -> Result<()> {
        let secret = self.new_secret();
        let game = self.game_mut(game_id)?;
        if game.seats.len() >= 2 {
            return Err(Error::GameFull {
                id: game_id.to_string(),
            });
        }
        if game.seats.iter().any(|seat| seat.name == name) {
            return Err(Error::InvalidConfiguration {
                message: format!("player name '{name}' is already taken"),
            });
        }
        let token = SEAT_TOKENS[game.seats.len()];
        game.seats.push(Seat {
            name: name.to_string(),
            token,
            secret,
            robot,
        });
        info!(game = %game_id, player = name, token = %token, robot, "player joined");
        Ok(())
    }

    /// Let robot seats move until a human is on move or the game ends.
    fn run_robots(&mut self, game_id: &str) -> Result<()> {
        let robot = &self.robot;
        let game = self.games.get_mut(game_id).ok_or_else(|| Error::UnknownGame {
            id: game_id.to_string(),
        })?;

        while game.state == GameStatus::InProgress
            && game.seats.len() == 2
            && game.seats[game.to_move].robot
        {
            let tokens = game.tokens_of(game.to_move);
            let intent = robot.choose_move(&game.meta_board(), tokens)?;
            game.apply(intent.into())?;
        }
        Ok(())
    }
}

impl Default for LocalServer {
    fn default() -> Self {
        Self::new()
    }
}

impl GameServer for LocalServer {
    fn create_game(&mut self) -> Result<String> {
        let id = format!("local-{}", self.next_id);
        self.next_id += 1;
        self.games.insert(id.clone(), LocalGame::new(id.clone()));
        info!(game = %id, "game created");
        Ok(id)
    }

    fn join_game(&mut self, game_id: &str, request: &JoinRequest) -> Result<GameView> {
        if request.name.trim().is_empty() {
            return Err(Error::InvalidConfiguration {
                message: "player name must not be empty".to_string(),
            });
        }
        self.check_seats(game_id, request)?;
        self.seat_player(game_id, &request.name, false)?;
        if request.wants_robot() {
            self.seat_player(game_id, ROBOT_NAME, true)?;
            debug!(game = %game_id, policy = self.robot_name(), "robot partner seated");
        }
        self.run_robots(game_id)?;
        self.game(game_id, &request.name)
    }

    fn play(&mut self, game_id: &str, secret: &str, request: MoveRequest) -> Result<GameView> {
        let game = self.game_mut(game_id)?;
        if game.state != GameStatus::InProgress {
            return Err(Error::GameOver);
        }
        if game.seats.len() < 2 {
            return Err(Error::IllegalMove {
                board: request.board,
                cell: request.cell,
                reason: "waiting for an opponent".to_string(),
            });
        }
        let mover = &game.seats[game.to_move];
        if mover.secret != secret {
            return Err(Error::NotYourTurn);
        }
        let mover_name = mover.name.clone();

        game.apply(request)?;
        self.run_robots(game_id)?;
        self.game(game_id, &mover_name)
    }

    fn game(&self, game_id: &str, viewer: &str) -> Result<GameView> {
        self.games
            .get(game_id)
            .map(|game| game.view(viewer))
            .ok_or_else(|| Error::UnknownGame {
                id: game_id.to_string(),
            })
    }
}
