//! Loading configuration and game snapshots from disk

use std::{fs, path::Path};

use tempfile::tempdir;
use uttt::{
    Error, HeuristicSelector, app::ClientConfig, protocol::GameView, strategy::Decision,
};

const SNAPSHOT: &str = r#"{
  "id": "g-42",
  "boards": [
    {"rows": [[null,null,null],[null,null,null],[null,null,null]], "playable": false},
    {"rows": [[null,null,null],[null,null,null],[null,null,null]], "playable": false},
    {"rows": [["O","O",null],["X",null,null],[null,null,null]], "playable": true},
    {"rows": [[null,null,null],[null,null,null],[null,null,null]], "playable": true},
    {"rows": [[null,null,null],[null,null,null],[null,null,null]], "playable": true},
    {"rows": [[null,null,null],[null,null,null],[null,null,null]], "playable": true},
    {"rows": [[null,null,null],[null,null,null],[null,null,null]], "playable": true},
    {"rows": [[null,null,null],[null,null,null],[null,null,null]], "playable": true},
    {"rows": [[null,null,null],[null,null,null],[null,null,null]], "playable": true}
  ],
  "nextBoard": null,
  "players": [
    {"name": "sam", "token": "X"},
    {"name": "robot", "token": "O"}
  ],
  "state": "inProgress",
  "currentPlayer": {"name": "sam", "token": "X", "secret": "abc"}
}"#;

fn write(dir: &Path, name: &str, text: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn snapshot_file_drives_a_block() {
    let dir = tempdir().unwrap();
    let path = write(dir.path(), "game.json", SNAPSHOT);

    let game = GameView::from_json_file(&path).unwrap();
    let tokens = game.tokens_for("sam").unwrap();
    let (intent, decision) = HeuristicSelector::plan(&game.meta_board().unwrap(), tokens).unwrap();

    // Boards 0 and 1 are closed, so the free choice lands on board 2.
    assert_eq!((intent.board, intent.cell), (2, 2));
    assert_eq!(decision, Decision::Block);
}

#[test]
fn snapshot_survives_a_round_trip_through_disk() {
    let dir = tempdir().unwrap();
    let game = GameView::from_json(SNAPSHOT).unwrap();
    let path = write(dir.path(), "copy.json", &serde_json::to_string_pretty(&game).unwrap());
    assert_eq!(GameView::from_json_file(&path).unwrap(), game);
}

#[test]
fn config_file_is_loaded_with_defaults() {
    let dir = tempdir().unwrap();
    let path = write(
        dir.path(),
        "client.json",
        r#"{"player_name": "sam", "game_id": "g-42", "seed": 7}"#,
    );
    let config = ClientConfig::from_json_file(&path).unwrap();
    assert_eq!(config, ClientConfig::new("sam").with_game_id("g-42").with_seed(7));
    assert!(config.validate().is_ok());
}

#[test]
fn missing_file_reports_io_context() {
    let dir = tempdir().unwrap();
    let err = ClientConfig::from_json_file(&dir.path().join("absent.json")).unwrap_err();
    match err {
        Error::Io { operation, .. } => assert!(operation.starts_with("read config")),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn bad_json_is_a_serialization_error() {
    let dir = tempdir().unwrap();
    let path = write(dir.path(), "broken.json", "{ not json");
    assert!(matches!(
        GameView::from_json_file(&path),
        Err(Error::Serialization(_))
    ));
}

#[test]
fn multi_character_token_is_rejected() {
    let text = SNAPSHOT.replace(r#""token": "X""#, r#""token": "XX""#);
    assert!(matches!(
        GameView::from_json(&text),
        Err(Error::Serialization(_))
    ));
}
