//! Tests for JSON board files.

use five_in_a_row::{AnalysisReport, board_to_json, load_board, parse_board, save_board};
use strictly_gomoku::{Board, Cell, Direction, GameStatus, Line, Player};

#[test]
fn test_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.json");

    let mut board = Board::new(9, false);
    board.place(Cell::new(4, 4)).unwrap();
    save_board(&path, &board).unwrap();

    let loaded = load_board(&path).unwrap();
    assert_eq!(loaded, board);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_board(dir.path().join("missing.json")).unwrap_err();
    assert!(err.message.contains("Failed to read board file"));
}

#[test]
fn test_parse_rejects_ply_gap() {
    let json = r#"{"x_on_even": false, "tiles": [[1, 0, 3], [0, 0, 0]], "turn": 4}"#;
    let err = parse_board(json).unwrap_err();
    assert!(err.message.contains("Failed to parse board"));
    assert!(err.message.contains("Ply 2"));
}

#[test]
fn test_parse_rejects_wrong_turn() {
    let json = r#"{"x_on_even": false, "tiles": [[1, 2, 0]], "turn": 7}"#;
    assert!(parse_board(json).is_err());
}

#[test]
fn test_stored_winner_is_recomputed() {
    let json = r#"{
        "x_on_even": false,
        "tiles": [[1, 0, 0], [0, 2, 0]],
        "turn": 3,
        "winner": [{"anchor": {"x": 0, "y": 0}, "direction": "East"}]
    }"#;
    let board = parse_board(json).unwrap();
    assert_eq!(board.winner(), None);
    assert_eq!(board.status(), GameStatus::InProgress);
}

#[test]
fn test_json_round_trip_with_winner() {
    let json = r#"{
        "x_on_even": true,
        "tiles": [[1, 3, 5, 7, 9], [2, 4, 6, 8, 0]],
        "turn": 10
    }"#;
    let board = parse_board(json).unwrap();
    assert_eq!(board.status(), GameStatus::Won(Player::First));

    let encoded = board_to_json(&board).unwrap();
    assert!(encoded.contains("\"winner\""));
    assert_eq!(parse_board(&encoded).unwrap(), board);
}

#[test]
fn test_analysis_report() {
    let json = r#"{
        "x_on_even": false,
        "tiles": [
            [0, 0, 0, 0, 0, 0],
            [0, 8, 0, 0, 0, 0],
            [1, 3, 4, 7, 9, 0],
            [0, 0, 0, 2, 0, 0],
            [0, 0, 0, 0, 12, 0],
            [0, 0, 0, 13, 0, 0]
        ],
        "turn": 14
    }"#;
    let board = parse_board(json);
    // Plies 5, 6, 10 and 11 are missing, so the file is rejected.
    assert!(board.is_err());

    let board = Board::from_tiles(
        vec![
            vec![0, 0, 0, 0, 0, 0],
            vec![0, 8, 0, 0, 0, 0],
            vec![1, 3, 4, 7, 9, 0],
            vec![0, 0, 0, 2, 0, 0],
            vec![0, 0, 0, 0, 12, 0],
            vec![0, 0, 0, 13, 0, 0],
        ],
        false,
    )
    .unwrap();
    let report = AnalysisReport::analyze(&board);
    let diagonal = Line::new(Cell::new(0, 0), Direction::SouthEast);
    assert_eq!(report.turn, 14);
    assert_eq!(report.to_move, Player::Second);
    assert_eq!(report.completed, None);
    assert_eq!(report.immediate, Some(diagonal));
    assert!(report.forced.as_ref().is_some_and(|set| set.contains(&diagonal)));
    assert_eq!(report.status, GameStatus::Forced(Player::Second));
}
