use xiangqi_rules::{
    Board, Game, Move, Piece, PieceKind, Placement, RulesError, Ruleset, Setup, Side, Square,
    StalemateRule,
};

fn sq(row: i32, col: i32) -> Square {
    Square::new(row, col).unwrap()
}

#[test]
fn initial_setup_survives_json() {
    let setup = Setup::initial();
    let text = setup.to_json_pretty().unwrap();
    let back = Setup::from_json(&text).unwrap();
    assert_eq!(back, setup);
    assert_eq!(Board::from_setup(&back).unwrap(), Board::initial());
}

#[test]
fn missing_fields_take_defaults() {
    let setup = Setup::from_json(r#"{"pieces":[]}"#).unwrap();
    assert_eq!(setup.to_move, Side::Red);
    assert_eq!(setup.ruleset, Ruleset::default());
    assert_eq!(Board::from_setup(&setup).unwrap(), Board::empty());
}

#[test]
fn placement_uses_lowercase_names() {
    let p = Placement::new(PieceKind::Cannon, Side::Black, 2, 7);
    let json = serde_json::to_string(&p).unwrap();
    assert_eq!(json, r#"{"kind":"cannon","side":"black","row":2,"col":7}"#);
}

#[test]
fn two_pieces_on_one_cell_are_rejected() {
    let pieces = [
        Placement::new(PieceKind::Rook, Side::Red, 5, 5),
        Placement::new(PieceKind::Horse, Side::Black, 5, 5),
    ];
    let err = Board::from_placements(&pieces).unwrap_err();
    assert!(matches!(err, RulesError::Occupied { square } if square == sq(5, 5)));
}

#[test]
fn second_general_of_a_side_is_rejected() {
    let pieces = [
        Placement::new(PieceKind::General, Side::Black, 0, 4),
        Placement::new(PieceKind::General, Side::Black, 1, 4),
    ];
    let err = Board::from_placements(&pieces).unwrap_err();
    assert!(matches!(
        err,
        RulesError::DuplicateGeneral { side: Side::Black }
    ));
}

#[test]
fn off_board_setup_is_rejected() {
    let setup = Setup::from_json(
        r#"{"pieces":[{"kind":"pawn","side":"red","row":4,"col":9}]}"#,
    )
    .unwrap();
    assert!(matches!(
        Board::from_setup(&setup),
        Err(RulesError::OffBoard { row: 4, col: 9 })
    ));
}

#[test]
fn malformed_json_is_a_json_error() {
    assert!(matches!(
        Setup::from_json("{\"pieces\": [1, 2"),
        Err(RulesError::Json(_))
    ));
    assert!(matches!(
        Setup::from_json(r#"{"pieces":[{"kind":"queen","side":"red","row":0,"col":0}]}"#),
        Err(RulesError::Json(_))
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("golden")
        .join("does_not_exist.json");
    assert!(matches!(
        Setup::from_path(&path),
        Err(RulesError::Io { .. })
    ));
}

#[test]
fn golden_setup_loads_from_disk() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("opening.json");
    let setup = Setup::from_path(&path).unwrap();
    assert_eq!(Board::from_setup(&setup).unwrap(), Board::initial());
    assert_eq!(setup.ruleset.stalemate, StalemateRule::Draw);
}

#[test]
fn game_round_trips_through_setup() {
    let mut game = Game::new();
    game.play(Move::new(sq(7, 1), sq(7, 4))).unwrap();
    game.play(Move::new(sq(0, 1), sq(2, 2))).unwrap();

    let setup = game.to_setup();
    assert_eq!(setup.to_move, Side::Red);
    let text = setup.to_json_pretty().unwrap();
    let back = Game::from_setup(&Setup::from_json(&text).unwrap()).unwrap();
    assert_eq!(back.board, game.board);
    assert_eq!(back.to_move, game.to_move);
    assert_eq!(back.ruleset, game.ruleset);
}

#[test]
fn play_returns_captures_and_passes_the_turn() {
    let mut game = Game::new();
    let captured = game.play(Move::new(sq(7, 1), sq(0, 1))).unwrap();
    assert_eq!(captured, Some(Piece::new(PieceKind::Horse, Side::Black)));
    assert_eq!(game.to_move, Side::Black);
    assert_eq!(game.board.count(Side::Black), 15);
}

#[test]
fn play_rejects_bad_moves_without_changing_the_game() {
    let mut game = Game::new();

    let err = game.play(Move::new(sq(4, 4), sq(3, 4))).unwrap_err();
    assert!(matches!(err, RulesError::EmptySquare { .. }));

    let err = game.play(Move::new(sq(3, 0), sq(4, 0))).unwrap_err();
    assert!(matches!(
        err,
        RulesError::WrongSide {
            expected: Side::Red,
            ..
        }
    ));

    // The rook is blocked by its own pawn.
    let err = game.play(Move::new(sq(9, 0), sq(5, 0))).unwrap_err();
    assert!(matches!(err, RulesError::IllegalMove { .. }));
    assert_eq!(err.to_string(), "illegal move (9,0)->(5,0)");

    assert_eq!(game.board, Board::initial());
    assert_eq!(game.to_move, Side::Red);
}
