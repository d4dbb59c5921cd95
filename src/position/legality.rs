//! Decides whether a move is legal in a position
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use crate::bitboard::*;
use super::*;

use Error::IllegalMove;

impl Position {
    /// Checks that `mv` is legal in this position and returns the type of move it is.
    ///
    /// The position itself is never modified. Any move which is not legal, for whatever reason,
    /// is rejected with `Error::IllegalMove`.
    pub fn validate_move(&self, mv: Move) -> Result<MoveType> {
        self.check_move(mv).map(|(_, move_type)| move_type)
    }

    /// Returns `true` if `mv` is legal in this position
    pub fn is_legal(&self, mv: Move) -> bool {
        self.check_move(mv).is_ok()
    }

    /// Validates `mv`, returning the piece being moved along with the type of move
    pub(super) fn check_move(&self, mv: Move) -> Result<(Piece, MoveType)> {
        let color = self.turn;

        // Step 1: the mover's own piece must be on the origin square
        let piece = match self.board.piece_at(mv.from) {
            Some((c, p)) if c == color => p,
            _ => return Err(IllegalMove),
        };

        // Step 2: no capturing your own pieces
        if self.board.occupied_by(color).contains(mv.to) {
            return Err(IllegalMove);
        }

        // Step 3: castling is legal as soon as its own conditions hold
        if piece == King && self.is_castling_attempt(color, mv) {
            if mv.promotion.is_some() {
                return Err(IllegalMove);
            }
            self.check_castling(color, mv)?;
            return Ok((piece, MoveType::Castling));
        }

        // Step 4: the piece must be able to move that way
        let move_type = self.check_geometry(color, piece, mv)?;

        // Step 5: a pawn reaching the last rank must promote, and nothing else may
        let last_rank = piece == Pawn && mv.to.rank() == color.promotion_rank();
        let move_type = match (last_rank, mv.promotion) {
            (true, Some(p)) => MoveType::Promotion(p),
            (false, None) => move_type,
            _ => return Err(IllegalMove),
        };

        // Step 6: the mover's king must not be left under attack
        let mut board = self.board;
        board.play(color, piece, mv, move_type);
        if board.king_location(color).map_or(false, |k| board.is_attacked(!color, k)) {
            return Err(IllegalMove);
        }

        Ok((piece, move_type))
    }

    /// A king on its home square moving two files along the back rank
    fn is_castling_attempt(&self, color: Color, mv: Move) -> bool {
        let rank = color.back_rank();
        mv.from == Square::from_coord(File::E, rank)
            && (mv.to == Square::from_coord(File::G, rank)
                || mv.to == Square::from_coord(File::C, rank))
    }

    fn check_castling(&self, color: Color, mv: Move) -> Result<()> {
        let rank = color.back_rank();
        let (right, rook_file, step) = if mv.to.file() == File::G {
            (CASTLE_KING_SIDE, File::H, 1)
        } else {
            (CASTLE_QUEEN_SIDE, File::A, -1)
        };
        let rook_sq = Square::from_coord(rook_file, rank);

        if self.castling_rights[color as usize] & right == 0 {
            return Err(IllegalMove);
        }
        if self.board.piece_at(rook_sq) != Some((color, Rook)) {
            return Err(IllegalMove);
        }
        if between(mv.from, rook_sq).intersects(self.board.occupied()) {
            return Err(IllegalMove);
        }

        // the king may not castle out of, through, or into check
        let transit = mv.from.offset(step, 0).ok_or(IllegalMove)?;
        for &sq in &[mv.from, transit, mv.to] {
            if self.board.is_attacked(!color, sq) {
                return Err(IllegalMove);
            }
        }

        Ok(())
    }

    fn check_geometry(&self, color: Color, piece: Piece, mv: Move) -> Result<MoveType> {
        let occ = self.board.occupied();

        let reachable = match piece {
            Pawn => return self.check_pawn_geometry(color, mv),
            Knight => knight_attacks(mv.from),
            Bishop => bishop_attacks(mv.from, occ),
            Rook => rook_attacks(mv.from, occ),
            Queen => queen_attacks(mv.from, occ),
            King => king_attacks(mv.from),
        };

        if reachable.contains(mv.to) {
            Ok(MoveType::Standard)
        } else {
            Err(IllegalMove)
        }
    }

    fn check_pawn_geometry(&self, color: Color, mv: Move) -> Result<MoveType> {
        let fwd = color.forward();
        let occ = self.board.occupied();

        // single push
        if mv.from.offset(0, fwd) == Some(mv.to) {
            return if occ.contains(mv.to) { Err(IllegalMove) } else { Ok(MoveType::Standard) };
        }

        // double push from the starting rank with both squares empty
        if mv.from.rank() == color.pawn_rank() && mv.from.offset(0, 2 * fwd) == Some(mv.to) {
            let skipped = mv.from.offset(0, fwd).ok_or(IllegalMove)?;
            return if occ.contains(skipped) || occ.contains(mv.to) {
                Err(IllegalMove)
            } else {
                Ok(MoveType::Advance2)
            };
        }

        // diagonal capture, possibly en passant
        if pawn_attacks(color, mv.from).contains(mv.to) {
            if self.board.occupied_by(!color).contains(mv.to) {
                return Ok(MoveType::Standard);
            }
            if self.ep_square == Some(mv.to) {
                let victim = Square::from_coord(mv.to.file(), mv.from.rank());
                if self.board.piece_at(victim) == Some((!color, Pawn)) {
                    return Ok(MoveType::EnPassant);
                }
            }
        }

        Err(IllegalMove)
    }
}
