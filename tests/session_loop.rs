//! Session loop behaviour against the in-memory referee and a scripted server

use uttt::{
    Error, Result,
    adapters::LocalServer,
    app::{App, ClientConfig},
    ports::{GameServer, NullObserver, SessionObserver},
    protocol::{BoardView, GameStatus, GameView, JoinRequest, MoveRequest, PlayerView},
    render::ConsoleObserver,
    session::Session,
    strategy::{FirstOpenPolicy, HeuristicSelector, MoveIntent, PolicyKind},
    tictactoe::{SubBoard, Token},
};

#[derive(Default)]
struct CountingObserver {
    snapshots: usize,
    moves: Vec<MoveIntent>,
    endings: usize,
}

impl SessionObserver for CountingObserver {
    fn on_snapshot(&mut self, _game: &GameView) -> Result<()> {
        self.snapshots += 1;
        Ok(())
    }

    fn on_move(&mut self, _game_id: &str, intent: &MoveIntent) -> Result<()> {
        self.moves.push(*intent);
        Ok(())
    }

    fn on_game_end(&mut self, _game: &GameView) -> Result<()> {
        self.endings += 1;
        Ok(())
    }
}

fn config(name: &str) -> ClientConfig {
    ClientConfig::new(name)
        .with_auto_pair(true)
        .with_poll_interval_ms(0)
}

mod local_games {
    use super::*;

    #[test]
    fn heuristic_mirror_match_finishes() {
        let mut server = LocalServer::with_seed(5);
        let config = config("alice");
        let policy = HeuristicSelector::new();
        let mut observer = CountingObserver::default();

        let summary = Session::new(&mut server, &policy, &config)
            .run(&mut observer)
            .unwrap();

        assert!(summary.is_finished());
        assert_eq!(observer.moves.len(), summary.moves_played);
        assert_eq!(observer.snapshots, summary.moves_played + 1);
        assert_eq!(observer.endings, 1);
        match summary.state() {
            GameStatus::Won => assert!(matches!(summary.winner_name(), Some("alice" | "robot"))),
            GameStatus::Drawn => assert_eq!(summary.winner_name(), None),
            other => panic!("unexpected final state {other:?}"),
        }
    }

    #[test]
    fn same_seed_replays_the_same_game() {
        let app = App::builder()
            .with_robot(PolicyKind::FirstOpen)
            .with_default_seed(21)
            .build();
        let config = config("alice");

        let mut first = CountingObserver::default();
        let mut server = app.create_server(&config);
        Session::new(&mut server, &HeuristicSelector::new(), &config)
            .run(&mut first)
            .unwrap();

        let mut second = CountingObserver::default();
        let mut server = app.create_server(&config);
        Session::new(&mut server, &HeuristicSelector::new(), &config)
            .run(&mut second)
            .unwrap();

        assert_eq!(first.moves, second.moves);
    }

    #[test]
    fn every_submitted_move_was_legal() {
        // The referee rejects illegal moves, so a clean finish means each
        // intent hit an empty cell in the active sub-board.
        let mut server = LocalServer::with_seed(8).with_robot(Box::new(FirstOpenPolicy::new()));
        let config = config("bob");
        let summary = Session::new(&mut server, &FirstOpenPolicy::new(), &config)
            .run(&mut NullObserver)
            .unwrap();
        assert!(summary.is_finished());
    }

    #[test]
    fn console_observer_prints_board_and_moves() {
        let mut server = LocalServer::with_seed(2);
        let config = config("carol");
        let mut observer = ConsoleObserver::new(Vec::new());
        Session::new(&mut server, &HeuristicSelector::new(), &config)
            .run(&mut observer)
            .unwrap();
        let text = String::from_utf8(observer.into_inner()).unwrap();
        assert!(text.starts_with("- - -  - - -  - - -\n"));
        assert!(text.contains("MY MOVE BOARD 0 CELL 0"));
        assert!(text.contains("Game state:"));
    }

    #[test]
    fn joining_missing_game_fails() {
        let mut server = LocalServer::with_seed(2);
        let config = config("dave").with_game_id("local-404");
        let err = Session::new(&mut server, &HeuristicSelector::new(), &config)
            .run(&mut NullObserver)
            .unwrap_err();
        assert!(matches!(err, Error::UnknownGame { .. }));
    }
}

mod scripted_server {
    use super::*;

    const X: Token = Token::new('X');
    const O: Token = Token::new('O');

    /// Serves one "my turn" snapshot, records the reply, then ends the game.
    struct ScriptedServer {
        opening: GameView,
        submitted: Vec<(String, MoveRequest)>,
        reject: bool,
    }

    impl ScriptedServer {
        fn new(reject: bool) -> Self {
            let mut boards: Vec<BoardView> = (0..9).map(|_| BoardView::from(&SubBoard::new())).collect();
            boards[4] = BoardView::from(&SubBoard::from_string("XX. O.. O..").unwrap());
            let me = PlayerView {
                name: "alice".to_string(),
                token: X,
                secret: Some("alice-secret".to_string()),
            };
            let opening = GameView {
                id: "scripted".to_string(),
                boards,
                next_board: Some(4),
                players: vec![
                    me.clone(),
                    PlayerView {
                        name: "robot".to_string(),
                        token: O,
                        secret: None,
                    },
                ],
                state: GameStatus::InProgress,
                current_player: Some(me),
                winner: None,
            };
            Self {
                opening,
                submitted: Vec::new(),
                reject,
            }
        }
    }

    impl GameServer for ScriptedServer {
        fn create_game(&mut self) -> Result<String> {
            Ok(self.opening.id.clone())
        }

        fn join_game(&mut self, _game_id: &str, request: &JoinRequest) -> Result<GameView> {
            assert_eq!(request.name, "alice");
            Ok(self.opening.clone())
        }

        fn play(&mut self, _game_id: &str, secret: &str, request: MoveRequest) -> Result<GameView> {
            self.submitted.push((secret.to_string(), request));
            if self.reject {
                return Err(Error::NotYourTurn);
            }
            let mut done = self.opening.clone();
            done.state = GameStatus::Won;
            done.current_player = None;
            done.winner = Some(done.players[0].public());
            Ok(done)
        }

        fn game(&self, _game_id: &str, _viewer: &str) -> Result<GameView> {
            Ok(self.opening.clone())
        }
    }

    #[test]
    fn one_snapshot_one_move() {
        let mut server = ScriptedServer::new(false);
        let config = ClientConfig::new("alice").with_poll_interval_ms(0);
        let summary = Session::new(&mut server, &HeuristicSelector::new(), &config)
            .run(&mut NullObserver)
            .unwrap();

        assert_eq!(summary.moves_played, 1);
        assert_eq!(summary.winner_name(), Some("alice"));
        assert_eq!(
            server.submitted,
            vec![(
                "alice-secret".to_string(),
                MoveRequest { board: 4, cell: 2 }
            )]
        );
    }

    #[test]
    fn rejected_move_surfaces_error() {
        let mut server = ScriptedServer::new(true);
        let config = ClientConfig::new("alice").with_poll_interval_ms(0);
        let err = Session::new(&mut server, &HeuristicSelector::new(), &config)
            .run(&mut NullObserver)
            .unwrap_err();
        assert!(matches!(err, Error::NotYourTurn));
        assert_eq!(server.submitted.len(), 1);
    }
}
