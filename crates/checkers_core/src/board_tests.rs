use super::*;

fn s(row: i8, col: i8) -> u8 {
    sq(row, col).unwrap()
}

#[test]
fn test_startpos_layout() {
    let pos = Position::startpos();
    assert_eq!(pos.side_to_move, Color::Red);
    assert_eq!(pos.piece_count(Color::Red), 12);
    assert_eq!(pos.piece_count(Color::Black), 12);

    for sq in 0..64u8 {
        match pos.piece_at(sq) {
            Some(pc) => {
                assert!(is_playable(sq), "piece on light square {}", sq_to_coord(sq));
                assert!(!pc.king);
                assert!(pc.color.home_rows().contains(&row_of(sq)));
            }
            None => {
                let row = row_of(sq);
                assert!(!is_playable(sq) || (3..=4).contains(&row));
            }
        }
    }
}

#[test]
fn test_from_diagram() {
    let pos = Position::from_diagram(
        "
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . b . . . . . .
        . . r . . . . .
        . . . . . . . .
        R . . . . . . .
        ",
        Color::Black,
    )
    .unwrap();
    assert_eq!(pos.side_to_move, Color::Black);
    assert_eq!(pos.piece_at(s(4, 1)), Some(Piece::man(Color::Black)));
    assert_eq!(pos.piece_at(s(5, 2)), Some(Piece::man(Color::Red)));
    // 7,0 is a dark square
    assert_eq!(pos.piece_at(s(7, 0)), Some(Piece::king(Color::Red)));
    assert_eq!(pos.piece_count(Color::Red), 2);
}

#[test]
fn test_from_diagram_errors() {
    assert_eq!(
        Position::from_diagram("........", Color::Red),
        Err(BoardError::RowCount(1))
    );

    let short_row = "........\n".repeat(7) + ".......";
    assert_eq!(
        Position::from_diagram(&short_row, Color::Red),
        Err(BoardError::ColCount { row: 7, found: 7 })
    );

    let light = "r.......\n".to_string() + &"........\n".repeat(7);
    assert_eq!(
        Position::from_diagram(&light, Color::Red),
        Err(BoardError::LightSquare { row: 0, col: 0 })
    );

    let bad = ".x......\n".to_string() + &"........\n".repeat(7);
    assert_eq!(
        Position::from_diagram(&bad, Color::Red),
        Err(BoardError::BadChar {
            ch: 'x',
            row: 0,
            col: 1
        })
    );
}

#[test]
fn test_simple_move_passes_turn() {
    let mut pos = Position::startpos();
    let captured = pos.make_move(Move::step(s(5, 0), s(4, 1)));
    assert_eq!(captured, None);
    assert_eq!(pos.piece_at(s(5, 0)), None);
    assert_eq!(pos.piece_at(s(4, 1)), Some(Piece::man(Color::Red)));
    assert_eq!(pos.side_to_move, Color::Black);
}

#[test]
fn test_capture_removes_jumped_piece() {
    let mut pos = Position::empty(Color::Red);
    pos.set_piece(s(5, 2), Some(Piece::man(Color::Red)));
    pos.set_piece(s(4, 1), Some(Piece::man(Color::Black)));
    pos.set_piece(s(0, 7), Some(Piece::man(Color::Black)));

    let captured = pos.make_move(Move::jump(s(5, 2), s(3, 0)));

    assert_eq!(captured, Some(Piece::man(Color::Black)));
    assert_eq!(pos.piece_at(s(5, 2)), None);
    assert_eq!(pos.piece_at(s(4, 1)), None);
    assert_eq!(pos.piece_at(s(3, 0)), Some(Piece::man(Color::Red)));
    assert_eq!(pos.piece_count(Color::Black), 1);
}

#[test]
fn test_promotion() {
    let mut pos = Position::empty(Color::Red);
    pos.set_piece(s(1, 2), Some(Piece::man(Color::Red)));
    pos.set_piece(s(6, 5), Some(Piece::man(Color::Black)));

    pos.make_move(Move::step(s(1, 2), s(0, 1)));
    assert_eq!(pos.piece_at(s(0, 1)), Some(Piece::king(Color::Red)));

    pos.make_move(Move::step(s(6, 5), s(7, 4)));
    assert_eq!(pos.piece_at(s(7, 4)), Some(Piece::king(Color::Black)));
}

#[test]
fn test_king_stays_king() {
    let mut pos = Position::empty(Color::Red);
    pos.set_piece(s(0, 1), Some(Piece::king(Color::Red)));
    pos.make_move(Move::step(s(0, 1), s(1, 2)));
    assert_eq!(pos.piece_at(s(1, 2)), Some(Piece::king(Color::Red)));
}

#[test]
fn test_man_on_own_back_row_is_not_crowned() {
    // A black man cannot normally reach row 0, but make_move only crowns on the far row.
    let mut pos = Position::empty(Color::Black);
    pos.set_piece(s(1, 2), Some(Piece::man(Color::Black)));
    pos.make_move(Move::step(s(1, 2), s(0, 1)));
    assert_eq!(pos.piece_at(s(0, 1)), Some(Piece::man(Color::Black)));
}

#[test]
fn test_winner() {
    let pos = Position::startpos();
    assert_eq!(pos.winner(), None);

    let mut pos = Position::empty(Color::Black);
    pos.set_piece(s(5, 0), Some(Piece::man(Color::Red)));
    assert_eq!(pos.winner(), Some(Color::Red));

    let mut pos = Position::empty(Color::Red);
    pos.set_piece(s(2, 1), Some(Piece::king(Color::Black)));
    assert_eq!(pos.winner(), Some(Color::Black));
}

#[test]
fn test_display_marks_pieces() {
    let text = Position::startpos().to_string();
    assert!(text.starts_with("  0 1 2 3 4 5 6 7"));
    assert!(text.contains("5 r . r . r . r ."));
    assert!(text.contains("0 . b . b . b . b"));
    assert!(text.ends_with("red to move"));
}
