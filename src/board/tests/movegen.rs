//! Move generation counts and castling legality rules.

use crate::board::{Board, Color, Piece};

fn legal_count(fen: &str) -> usize {
    Board::from_fen(fen).generate_moves().len()
}

#[test]
fn test_starting_position_has_twenty_moves() {
    assert_eq!(Board::new().generate_moves().len(), 20);
}

#[test]
fn test_known_move_counts() {
    // well-known positions with published depth-1 counts
    let cases = [
        (
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            48,
        ),
        ("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1", 14),
        (
            "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
            6,
        ),
        (
            "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
            44,
        ),
        (
            "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
            46,
        ),
    ];
    for (fen, expected) in cases {
        assert_eq!(legal_count(fen), expected, "position {fen}");
    }
}

#[test]
fn test_blocked_pawn_cannot_push() {
    // white pawn e4 blocked by black pawn e5
    let board = Board::from_fen("k7/8/8/4p3/4P3/8/8/K7 w - - 0 1");
    let moves = board.generate_moves();
    assert!(moves.iter().all(|m| m.from() != crate::board::Square(3, 4)));
}

#[test]
fn test_double_push_requires_both_squares_vacant() {
    // knight on e3 blocks the double push but not the single push... it
    // blocks both since the pawn cannot jump
    let board = Board::from_fen("k7/8/8/8/8/4n3/4P3/K7 w - - 0 1");
    let pawn_moves: Vec<_> = board
        .generate_moves()
        .iter()
        .copied()
        .filter(|m| m.from() == crate::board::Square(1, 4))
        .collect();
    assert!(pawn_moves.is_empty());

    // blocker on e4 permits the single push only
    let board = Board::from_fen("k7/8/8/8/4n3/8/4P3/K7 w - - 0 1");
    let pawn_moves: Vec<_> = board
        .generate_moves()
        .iter()
        .copied()
        .filter(|m| m.from() == crate::board::Square(1, 4))
        .collect();
    assert_eq!(pawn_moves.len(), 1);
    assert!(!pawn_moves[0].is_double_pawn_push());
}

#[test]
fn test_promotion_generates_four_moves_per_target() {
    let board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let promotions: Vec<_> = board
        .generate_moves()
        .iter()
        .copied()
        .filter(|m| m.is_promotion())
        .collect();
    assert_eq!(promotions.len(), 4);
    for piece in [Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight] {
        assert!(promotions.iter().any(|m| m.promotion() == Some(piece)));
    }
}

#[test]
fn test_en_passant_is_generated_when_available() {
    let board = Board::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3");
    assert!(board.generate_moves().iter().any(|m| m.is_en_passant()));

    // same position without the en-passant square
    let board = Board::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq - 0 3");
    assert!(!board.generate_moves().iter().any(|m| m.is_en_passant()));
}

#[test]
fn test_castles_are_generated_with_clear_path() {
    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let moves = board.generate_moves();
    assert!(moves.iter().any(|m| m.is_kingside_castle()));
    assert!(moves.iter().any(|m| m.is_queenside_castle()));
}

#[test]
fn test_no_castle_while_in_check() {
    // black rook on e5 checks the e1 king
    let board = Board::from_fen("r3k2r/8/8/4r3/8/8/8/R3K2R w KQkq - 0 1");
    let moves = board.generate_moves();
    assert!(!moves.iter().any(|m| m.is_castle()));
}

#[test]
fn test_no_castle_through_attacked_square() {
    // black rook on f5 attacks f1, the square the king slides across
    let board = Board::from_fen("r3k2r/8/8/5r2/8/8/8/R3K2R w KQkq - 0 1");
    let moves = board.generate_moves();
    assert!(!moves.iter().any(|m| m.is_kingside_castle()));
    // queenside path (d1, c1) is untouched
    assert!(moves.iter().any(|m| m.is_queenside_castle()));
}

#[test]
fn test_no_castle_through_occupied_square() {
    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R2QK2R w KQkq - 0 1");
    let moves = board.generate_moves();
    assert!(moves.iter().any(|m| m.is_kingside_castle()));
    assert!(!moves.iter().any(|m| m.is_queenside_castle()));
}

#[test]
fn test_queenside_castle_allowed_with_b_file_attacked() {
    // the b1 square is crossed only by the rook, so an attack on it does
    // not forbid castling
    let board = Board::from_fen("r3k2r/8/8/1r6/8/8/8/R3K2R w KQkq - 0 1");
    let moves = board.generate_moves();
    assert!(moves.iter().any(|m| m.is_queenside_castle()));
}

#[test]
fn test_pinned_piece_moves_are_pseudo_legal_but_not_legal() {
    // the white knight on e4 is pinned against the king by the e8 rook
    let board = Board::from_fen("4r3/8/8/8/4N3/8/8/4K3 w - - 0 1");
    let pseudo = board.generate_pseudo_legal_moves();
    assert!(pseudo.iter().any(|m| m.from() == crate::board::Square(3, 4)));

    let legal = board.generate_moves();
    assert!(legal.iter().all(|m| m.from() != crate::board::Square(3, 4)));
}

#[test]
fn test_king_cannot_move_into_attack() {
    // a1 king against an undefended rook on b2: a2 and b1 are both
    // covered by the rook, so taking it is the only legal move
    let board = Board::from_fen("8/8/8/8/8/8/1r6/K7 w - - 0 1");
    let legal = board.generate_moves();
    assert_eq!(legal.len(), 1);
    assert_eq!(legal[0].to(), crate::board::Square(1, 1));
    assert!(legal[0].is_capture());
}

#[test]
fn test_side_to_move_is_respected() {
    let board = Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1");
    for mv in &board.generate_moves() {
        let (color, _) = board.piece_at(mv.from()).unwrap();
        assert_eq!(color, Color::Black);
    }
}
