//! Renders moves in Standard Algebraic Notation
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use super::*;

impl Position {
    /// Returns `mv` in Standard Algebraic Notation (eg Nf3, exd6, e8=Q+, O-O or Qxf7#), or
    /// `Error::IllegalMove` if the move is not legal here.
    pub fn san(&self, mv: Move) -> Result<String> {
        let (piece, move_type) = self.check_move(mv)?;

        let mut s = if move_type == MoveType::Castling {
            (if mv.to.file() == File::G { "O-O" } else { "O-O-O" }).to_string()
        } else {
            let capture = move_type == MoveType::EnPassant || self.piece_at(mv.to).is_some();
            let mut s = String::new();

            if piece == Pawn {
                if capture {
                    s.push(mv.from.file().to_char());
                }
            } else {
                s.push(piece.to_char(Color::White));
                s += &self.disambiguation(piece, mv);
            }

            if capture {
                s += "x";
            }
            s += &mv.to.to_string();

            if let MoveType::Promotion(p) = move_type {
                s += "=";
                s.push(p.to_char());
            }
            s
        };

        let mut after = self.clone();
        after.commit(piece, mv, move_type);
        if after.in_check() {
            s += if after.legal_moves().is_empty() { "#" } else { "+" };
        }

        Ok(s)
    }

    /// Returns whatever part of the origin square is needed to tell `mv` apart from other legal
    /// moves of the same kind of piece to the same square
    fn disambiguation(&self, piece: Piece, mv: Move) -> String {
        let rivals: Vec<_> = self.legal_moves().into_iter()
            .filter(|other| other.to == mv.to && other.from != mv.from)
            .filter(|other| self.piece_at(other.from) == Some((self.turn, piece)))
            .map(|other| other.from)
            .collect();

        if rivals.is_empty() {
            String::new()
        } else if rivals.iter().all(|sq| sq.file() != mv.from.file()) {
            mv.from.file().to_string()
        } else if rivals.iter().all(|sq| sq.rank() != mv.from.rank()) {
            mv.from.rank().to_string()
        } else {
            mv.from.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn san(fen: &str, from: Square, to: Square) -> String {
        Position::from_fen_str(fen).unwrap().san(Move::new(from, to)).unwrap()
    }

    #[test]
    fn pawn_and_piece_moves() {
        assert_eq!(san(START_FEN, Square::E2, Square::E4), "e4");
        assert_eq!(san(START_FEN, Square::G1, Square::F3), "Nf3");
    }

    #[test]
    fn captures_and_en_passant() {
        assert_eq!(san("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2", Square::E5, Square::D6), "exd6");
        assert_eq!(san("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 2", Square::E4, Square::D5), "exd5");
    }

    #[test]
    fn castling_and_checkmate() {
        assert_eq!(san("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", Square::E1, Square::G1), "O-O");
        assert_eq!(san("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", Square::E1, Square::C1), "O-O-O");
        assert_eq!(san("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1", Square::A1, Square::A8), "Ra8#");
        assert_eq!(san("6k1/8/8/8/8/8/8/R5K1 w - - 0 1", Square::A1, Square::A8), "Ra8+");
    }

    #[test]
    fn promotion() {
        let pos = Position::from_fen_str("8/1P5k/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let mv = Move::with_promotion(Square::B7, Square::B8, Promotion::ToKnight);
        assert_eq!(pos.san(mv).unwrap(), "b8=N");
        assert_eq!(pos.san(Move::new(Square::B7, Square::B8)), Err(Error::IllegalMove));
    }

    #[test]
    fn ambiguous_moves_are_disambiguated() {
        let fen = "4k3/8/8/8/8/8/8/1N2KN2 w - - 0 1";
        assert_eq!(san(fen, Square::B1, Square::D2), "Nbd2");

        let fen = "4k3/8/8/8/R7/8/8/R3K3 w - - 0 1";
        assert_eq!(san(fen, Square::A1, Square::A2), "R1a2");

        let fen = "7k/8/8/8/Q1Q5/8/Q7/4K3 w - - 0 1";
        assert_eq!(san(fen, Square::A4, Square::B3), "Qa4b3");
    }
}
