//! Applies moves to a position
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use log::{debug, trace};
use super::*;

impl Position {
    /// Makes a move, updating the side to move, castling rights, en-passant square and clocks.
    ///
    /// The move is validated first. If it is illegal, `Error::IllegalMove` is returned and the
    /// position is left exactly as it was.
    ///
    /// ```
    /// use chessboard::{Position, Move, Square};
    ///
    /// let mut pos = Position::new();
    /// assert!(pos.apply_move(Move::new(Square::E2, Square::E5)).is_err());
    /// assert_eq!(pos, Position::new());
    ///
    /// pos.apply_move(Move::new(Square::G1, Square::F3))?;
    /// assert_eq!(pos.to_fen_str(), "rnbqkbnr/pppppppp/8/8/8/5N2/PPPPPPPP/RNBQKB1R b KQkq - 1 1");
    /// # Ok::<(), chessboard::Error>(())
    /// ```
    pub fn apply_move(&mut self, mv: Move) -> Result<()> {
        let (piece, move_type) = match self.check_move(mv) {
            Ok(checked) => checked,
            Err(e) => {
                debug!("illegal move {} in {}", mv, self);
                return Err(e);
            }
        };

        self.commit(piece, mv, move_type);
        trace!("{} -> {}", mv, self);

        Ok(())
    }

    /// Parses a move token (see [`Move`](struct.Move.html)) and applies it
    pub fn apply_move_str(&mut self, token: &str) -> Result<()> {
        self.apply_move(token.parse()?)
    }

    /// Applies an already validated move. Nothing here can fail.
    pub(super) fn commit(&mut self, piece: Piece, mv: Move, move_type: MoveType) {
        let color = self.turn;
        let capture = move_type == MoveType::EnPassant || self.board.piece_at(mv.to).is_some();

        self.board.play(color, piece, mv, move_type);

        // castling rights
        if piece == King {
            self.castling_rights[color as usize] = 0;
        }
        for &sq in &[mv.from, mv.to] {
            if let Some((c, right)) = Position::corner_right(sq) {
                self.castling_rights[c as usize] &= !right;
            }
        }

        // en passant square
        self.ep_square = if move_type == MoveType::Advance2 {
            mv.from.offset(0, color.forward())
        } else {
            None
        };

        // clocks
        if piece == Pawn || capture {
            self.draw_plies = 0;
        } else {
            self.draw_plies += 1;
        }
        if color == Black {
            self.move_num += 1;
        }

        self.turn = !color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(fen: &str, tokens: &[&str]) -> Position {
        let mut pos = Position::from_fen_str(fen).unwrap();
        for token in tokens {
            pos.apply_move_str(token).unwrap();
        }
        pos
    }

    #[test]
    fn double_push_sets_the_en_passant_square() {
        let pos = play(START_FEN, &["0e2e40"]);
        assert_eq!(pos.to_fen_str(), "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");

        let pos = play(START_FEN, &["0e2e40", "0g8f60"]);
        assert_eq!(pos.en_passant_square(), None);
        assert_eq!(pos.move_number(), 2);
        assert_eq!(pos.draw_plies(), 1);
    }

    #[test]
    fn en_passant_only_immediately() {
        let fen = "4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1";
        let pos = play(fen, &["0d7d50", "0e5d60"]);
        assert_eq!(pos.piece_at(Square::D5), None);
        assert_eq!(pos.piece_at(Square::D6), Some((White, Pawn)));

        let mut pos = play(fen, &["0d7d50", "0e1e20", "0e8e70"]);
        assert_eq!(pos.apply_move_str("0e5d60"), Err(Error::IllegalMove));
    }

    #[test]
    fn castling_moves_the_rook_and_clears_rights() {
        let pos = play("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 3 10", &["0e1g10"]);
        assert_eq!(pos.to_fen_str(), "r3k2r/8/8/8/8/8/8/R4RK1 b kq - 4 10");

        let pos = play("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 10", &["0e8c80"]);
        assert_eq!(pos.to_fen_str(), "2kr3r/8/8/8/8/8/8/R3K2R w KQ - 1 11");
    }

    #[test]
    fn rook_moves_and_captures_clear_rights() {
        let pos = play("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", &["0a1a80"]);
        assert_eq!(pos.to_fen_str(), "R3k2r/8/8/8/8/8/8/4K2R b Kk - 0 1");

        let pos = play("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", &["0h1h20"]);
        assert_eq!(pos.to_fen_str(), "r3k2r/8/8/8/8/8/7R/R3K3 b Qkq - 1 1");
    }

    #[test]
    fn each_promotion_yields_its_piece() {
        for (c, piece) in &[('Q', Queen), ('R', Rook), ('B', Bishop), ('N', Knight)] {
            let pos = play("4k3/1P6/8/8/8/8/8/4K3 w - - 5 30", &[format!("0b7b8{}", c).as_str()]);
            assert_eq!(pos.piece_at(Square::B8), Some((White, *piece)));
            assert_eq!(pos.piece_at(Square::B7), None);
            assert_eq!(pos.draw_plies(), 0);
        }
    }

    #[test]
    fn illegal_moves_leave_the_position_unchanged() {
        let mut pos = Position::new();
        assert_eq!(pos.apply_move_str("0e2e50"), Err(Error::IllegalMove));
        assert_eq!(pos.apply_move_str("0e7e50"), Err(Error::IllegalMove));
        assert_eq!(pos.apply_move_str("e2e4"), Err(Error::Parse(ParseError::MoveToken)));
        assert_eq!(pos, Position::new());
    }
}
