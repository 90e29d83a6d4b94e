//! The apply-move state transition.

use super::types::{Color, Move, Piece, Square};
use super::Board;

impl Board {
    /// Apply a pseudo-legal move for the side to move.
    ///
    /// The move must have been produced by
    /// [`generate_pseudo_legal_moves`](Board::generate_pseudo_legal_moves)
    /// (or be the null move) for the current position; applying anything
    /// else violates the state machine's invariants and panics.
    ///
    /// A null move toggles the side to move and changes nothing else.
    pub fn apply_move(&mut self, mv: Move) {
        if mv.is_null() {
            self.side_to_move = self.side_to_move.opponent();
            return;
        }

        let mover = self.side_to_move;
        let (moving_color, moving_piece) = self.remove_piece(mv.from());
        debug_assert_eq!(moving_color, mover, "moving the opponent's piece");

        if mv.is_capture() {
            self.apply_capture(mv);
        }

        if mv.is_castle() {
            self.apply_castle(mv);
        }

        // the piece that lands on the destination square is the mover,
        // except on promotion
        let placed = if mv.is_promotion() {
            mv.promotion_piece()
        } else {
            moving_piece
        };
        self.add_piece(mv.to(), mover, placed);

        // a double pawn push exposes the square behind the pawn; any
        // other move, whether or not it exploits a prior opportunity,
        // clears it
        self.en_passant_target = if mv.is_double_pawn_push() {
            Some(mv.to().towards(mover.en_passant_direction()))
        } else {
            None
        };

        self.update_castling_rights(mv, moving_piece);

        if mv.is_capture() || moving_piece == Piece::Pawn {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }

        if mover == Color::Black {
            self.fullmove_clock += 1;
        }

        self.side_to_move = mover.opponent();
    }

    /// Remove the captured piece.
    ///
    /// En passant is the only capture where the captured piece does not
    /// sit on the destination square: it sits directly behind the
    /// en-passant target, opposite the capturing pawn's direction.
    fn apply_capture(&mut self, mv: Move) {
        let mover = self.side_to_move;
        let target = if mv.is_en_passant() {
            mv.to().towards(mover.en_passant_direction())
        } else {
            mv.to()
        };

        self.remove_piece(target);

        // capturing on an opponent rook origin square kills the matching
        // castling right, whatever piece was actually standing there
        let opponent = mover.opponent();
        if self.can_castle_kingside(opponent) && target == Square(opponent.back_rank(), 7) {
            self.castling_rights.remove(opponent, true);
        }
        if self.can_castle_queenside(opponent) && target == Square(opponent.back_rank(), 0) {
            self.castling_rights.remove(opponent, false);
        }
    }

    /// Relocate the rook of a castle move.
    ///
    /// Castles are encoded by the king's start and stop squares; the rook
    /// ends up immediately adjacent to the king on the castling side.
    fn apply_castle(&mut self, mv: Move) {
        let rank = mv.to().rank();
        let (rook_from, rook_to) = if mv.is_kingside_castle() {
            (Square(rank, 7), Square(rank, 5))
        } else {
            (Square(rank, 0), Square(rank, 3))
        };

        let (rook_color, rook_piece) = self.remove_piece(rook_from);
        assert_eq!(rook_piece, Piece::Rook, "castling without a rook on {rook_from}");
        self.add_piece(rook_to, rook_color, rook_piece);
    }

    /// Clear castling rights invalidated by the moving piece.
    fn update_castling_rights(&mut self, mv: Move, moving_piece: Piece) {
        let mover = self.side_to_move;
        match moving_piece {
            Piece::King => self.castling_rights.remove_all(mover),
            Piece::Rook => {
                let back = mover.back_rank();
                if mv.from() == Square(back, 7) {
                    self.castling_rights.remove(mover, true);
                }
                if mv.from() == Square(back, 0) {
                    self.castling_rights.remove(mover, false);
                }
            }
            _ => {}
        }
    }
}
