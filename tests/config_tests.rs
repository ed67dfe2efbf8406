//! Loading irregular boards from JSON config files.

use std::io::Write;

use goban_rules::config::BoardConfig;
use goban_rules::{ConfigError, Game, MoveError, TopologyError};

fn write_config(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_irregular_board_and_play() {
    let file = write_config(
        r#"{
            "board": [[0, 1, 1, 0], [1, 1, 1, 1], [0, 1, 1, 0]],
            "background": "boards/cross.png",
            "offset_x": 40, "offset_y": 40,
            "scale_x": 1.0, "scale_y": 1.0
        }"#,
    );
    let config = BoardConfig::load(file.path()).unwrap();
    let topo = config.topology().unwrap();
    assert_eq!(topo.rows(), 3);
    assert_eq!(topo.cols(), 4);
    assert_eq!(topo.playable_count(), 8);

    let mut game = Game::new(topo);
    assert_eq!(game.play(0, 0), Err(MoveError::InvalidPosition));
    assert!(game.play(1, 0).is_ok());
    // White closes the only liberty of Black's (1,0) stone.
    assert!(game.play(1, 1).is_ok());
    assert_eq!(game.state().captured().black, 1);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = BoardConfig::load(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_malformed_json_is_json_error() {
    let file = write_config("{ board: ");
    let err = BoardConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn test_unusable_mask_is_rejected_on_load() {
    let file = write_config(r#"{"board": [[0, 0], [0, 0]]}"#);
    let err = BoardConfig::load(file.path()).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Topology(TopologyError::NoPlayableCell)
    ));
}
