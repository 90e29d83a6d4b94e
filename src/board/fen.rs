//! FEN parsing and serialization, plus UCI move notation.

use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::types::{file_to_index, rank_to_index, Color, Move, Piece, Square};
use super::Board;

impl Board {
    /// Parse a position from FEN notation.
    ///
    /// All six fields are required: piece placement, side to move,
    /// castling rights, en-passant square, halfmove clock, fullmove
    /// number.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let mut fields = fen.split_whitespace();

        let placement = fields.next().ok_or(FenError::UnexpectedEnd)?;
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::UnexpectedEnd);
        }

        // ranks are encoded highest first
        for (i, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - i;
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if !(1..=8).contains(&skip) {
                        return Err(FenError::InvalidDigit { found: c });
                    }
                    file += skip as usize;
                } else {
                    let piece =
                        Piece::from_char(c).ok_or(FenError::InvalidPiece { found: c })?;
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if file >= 8 {
                        return Err(FenError::BadRankWidth { rank });
                    }
                    board.add_piece(Square(rank, file), color, piece);
                    file += 1;
                }
            }
            if file != 8 {
                return Err(FenError::BadRankWidth { rank });
            }
        }

        let side = fields.next().ok_or(FenError::UnexpectedEnd)?;
        board.side_to_move = match side {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let castling = fields.next().ok_or(FenError::UnexpectedEnd)?;
        if castling != "-" {
            for c in castling.chars() {
                match c {
                    'K' => board.castling_rights.grant(Color::White, true),
                    'Q' => board.castling_rights.grant(Color::White, false),
                    'k' => board.castling_rights.grant(Color::Black, true),
                    'q' => board.castling_rights.grant(Color::Black, false),
                    _ => return Err(FenError::InvalidCastling { found: c }),
                }
            }
        }

        let ep = fields.next().ok_or(FenError::UnexpectedEnd)?;
        board.en_passant_target = if ep == "-" {
            None
        } else {
            Some(ep.parse::<Square>().map_err(|_| FenError::InvalidEnPassant {
                found: ep.to_string(),
            })?)
        };

        let halfmove = fields.next().ok_or(FenError::UnexpectedEnd)?;
        board.halfmove_clock = halfmove.parse().map_err(|_| FenError::InvalidHalfmove {
            found: halfmove.to_string(),
        })?;

        let fullmove = fields.next().ok_or(FenError::UnexpectedEnd)?;
        board.fullmove_clock = fullmove.parse().map_err(|_| FenError::InvalidFullmove {
            found: fullmove.to_string(),
        })?;

        Ok(board)
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use
    /// [`try_from_fen`](Board::try_from_fen) for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("invalid FEN string")
    }

    /// Serialize the position to FEN notation.
    ///
    /// Parsing a canonical FEN and serializing it again reproduces the
    /// input byte for byte.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let side = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };

        let mut castling = String::new();
        if self.can_castle_kingside(Color::White) {
            castling.push('K');
        }
        if self.can_castle_queenside(Color::White) {
            castling.push('Q');
        }
        if self.can_castle_kingside(Color::Black) {
            castling.push('k');
        }
        if self.can_castle_queenside(Color::Black) {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            side,
            castling,
            ep,
            self.halfmove_clock,
            self.fullmove_clock
        )
    }

    /// Parse a move in UCI long algebraic notation (e.g. "e2e4", "e7e8q").
    ///
    /// Returns the matching legal move if one exists.
    pub fn parse_move(&self, uci: &str) -> Result<Move, MoveParseError> {
        if uci.len() < 4 || uci.len() > 5 {
            return Err(MoveParseError::InvalidLength { len: uci.len() });
        }

        let chars: Vec<char> = uci.chars().collect();
        if !('a'..='h').contains(&chars[0])
            || !('1'..='8').contains(&chars[1])
            || !('a'..='h').contains(&chars[2])
            || !('1'..='8').contains(&chars[3])
        {
            return Err(MoveParseError::InvalidSquare {
                notation: uci.to_string(),
            });
        }

        let from = Square(rank_to_index(chars[1]), file_to_index(chars[0]));
        let to = Square(rank_to_index(chars[3]), file_to_index(chars[2]));

        let promotion = if uci.len() == 5 {
            let piece = Piece::from_char(chars[4])
                .ok_or(MoveParseError::InvalidPromotion { found: chars[4] })?;
            if matches!(piece, Piece::Pawn | Piece::King) {
                return Err(MoveParseError::InvalidPromotion { found: chars[4] });
            }
            Some(piece)
        } else {
            None
        };

        for &legal in &self.generate_moves() {
            if legal.from() == from && legal.to() == to && legal.promotion() == promotion {
                return Ok(legal);
            }
        }

        Err(MoveParseError::IllegalMove {
            notation: uci.to_string(),
        })
    }

    /// Parse a UCI move and apply it to the board in one call.
    pub fn apply_move_uci(&mut self, uci: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(uci)?;
        self.apply_move(mv);
        Ok(mv)
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_is_byte_exact() {
        let fens = [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/8/8/8/8/8/8/K1k5 w - - 42 99",
            "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        ];
        for fen in fens {
            let board = Board::try_from_fen(fen).unwrap();
            assert_eq!(board.to_fen(), fen);
        }
    }

    #[test]
    fn test_parse_black_to_move_with_en_passant() {
        let board =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
                .unwrap();
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.en_passant_target(), Some(Square(2, 4)));
    }

    #[test]
    fn test_parse_clocks() {
        let board = Board::try_from_fen("8/8/8/8/8/8/8/K1k5 w - - 42 17").unwrap();
        assert_eq!(board.halfmove_clock(), 42);
        assert_eq!(board.fullmove_clock(), 17);
    }

    #[test]
    fn test_error_unexpected_end() {
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -");
        assert_eq!(result, Err(FenError::UnexpectedEnd));
        assert_eq!(Board::try_from_fen(""), Err(FenError::UnexpectedEnd));
    }

    #[test]
    fn test_error_invalid_digit() {
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(result, Err(FenError::InvalidDigit { found: '9' }));
    }

    #[test]
    fn test_error_bad_rank_width() {
        let result =
            Board::try_from_fen("rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(result, Err(FenError::BadRankWidth { .. })));
    }

    #[test]
    fn test_error_invalid_piece() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppxpppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(result, Err(FenError::InvalidPiece { found: 'x' }));
    }

    #[test]
    fn test_error_invalid_side_to_move() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR z KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidSideToMove { .. })));
    }

    #[test]
    fn test_error_invalid_castling() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XQkq - 0 1");
        assert_eq!(result, Err(FenError::InvalidCastling { found: 'X' }));
    }

    #[test]
    fn test_error_invalid_en_passant() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9 0 1");
        assert!(matches!(result, Err(FenError::InvalidEnPassant { .. })));
    }

    #[test]
    fn test_error_invalid_halfmove() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - x 1");
        assert!(matches!(result, Err(FenError::InvalidHalfmove { .. })));
    }

    #[test]
    fn test_error_invalid_fullmove() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 x");
        assert!(matches!(result, Err(FenError::InvalidFullmove { .. })));
    }

    #[test]
    fn test_partial_castling_rights() {
        let board =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w Kq - 0 1").unwrap();
        assert!(board.can_castle_kingside(Color::White));
        assert!(!board.can_castle_queenside(Color::White));
        assert!(!board.can_castle_kingside(Color::Black));
        assert!(board.can_castle_queenside(Color::Black));
    }

    #[test]
    fn test_parse_move_quiet() {
        let board = Board::new();
        let mv = board.parse_move("e2e4").unwrap();
        assert_eq!(mv.from(), Square(1, 4));
        assert_eq!(mv.to(), Square(3, 4));
        assert!(mv.is_double_pawn_push());
    }

    #[test]
    fn test_parse_move_promotion() {
        let board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
        let mv = board.parse_move("a7a8q").unwrap();
        assert_eq!(mv.promotion(), Some(Piece::Queen));
        let mv = board.parse_move("a7a8n").unwrap();
        assert_eq!(mv.promotion(), Some(Piece::Knight));
    }

    #[test]
    fn test_parse_move_errors() {
        let board = Board::new();
        assert!(matches!(
            board.parse_move("e2"),
            Err(MoveParseError::InvalidLength { .. })
        ));
        assert!(matches!(
            board.parse_move("z9z9"),
            Err(MoveParseError::InvalidSquare { .. })
        ));
        assert!(matches!(
            board.parse_move("e2e5"),
            Err(MoveParseError::IllegalMove { .. })
        ));

        let promo_board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
        assert!(matches!(
            promo_board.parse_move("a7a8k"),
            Err(MoveParseError::InvalidPromotion { .. })
        ));
    }

    #[test]
    fn test_apply_move_uci() {
        let mut board = Board::new();
        board.apply_move_uci("e2e4").unwrap();
        assert_eq!(board.side_to_move(), Color::Black);
        board.apply_move_uci("c7c5").unwrap();
        assert_eq!(board.to_fen(), "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2");
    }
}
