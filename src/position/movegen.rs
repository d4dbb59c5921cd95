//! Enumerates the legal moves of a position
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

impl Position {
    /// Returns every legal move for the side to move.
    ///
    /// Candidate destinations are collected for each of the mover's pieces and each candidate is
    /// then confirmed with [`is_legal`](#method.is_legal). A pawn reaching the last rank yields
    /// four moves, promoting to a queen, rook, bishop and knight in that order.
    pub fn legal_moves(&self) -> Vec<Move> {
        let color = self.turn;
        let mut moves = Vec::new();

        for from in self.board.occupied_by(color) {
            let piece = match self.board.piece_at(from) {
                Some((_, p)) => p,
                None => continue,
            };

            for to in self.candidate_targets(color, piece, from) {
                if piece == Pawn && to.rank() == color.promotion_rank() {
                    moves.extend(Promotion::ALL.iter()
                        .map(|&p| Move::with_promotion(from, to, p))
                        .filter(|&mv| self.is_legal(mv)));
                } else {
                    let mv = Move::new(from, to);
                    if self.is_legal(mv) {
                        moves.push(mv);
                    }
                }
            }
        }

        moves
    }

    /// Returns the squares `piece` on `from` might move to, before checking for check
    fn candidate_targets(&self, color: Color, piece: Piece, from: Square) -> Bitboard {
        let occ = self.board.occupied();
        let not_own = !self.board.occupied_by(color);

        match piece {
            Pawn => {
                let fwd = color.forward();
                let mut targets = Bitboard::new();

                if let Some(one) = from.offset(0, fwd).filter(|&sq| !occ.contains(sq)) {
                    targets.insert(one);
                    if from.rank() == color.pawn_rank() {
                        if let Some(two) = one.offset(0, fwd).filter(|&sq| !occ.contains(sq)) {
                            targets.insert(two);
                        }
                    }
                }

                let mut capturable = self.board.occupied_by(!color);
                if let Some(ep) = self.ep_square {
                    capturable.insert(ep);
                }

                targets | (pawn_attacks(color, from) & capturable)
            }
            Knight => knight_attacks(from) & not_own,
            Bishop => bishop_attacks(from, occ) & not_own,
            Rook => rook_attacks(from, occ) & not_own,
            Queen => queen_attacks(from, occ) & not_own,
            King => {
                let mut targets = king_attacks(from) & not_own;
                let rank = color.back_rank();

                if from == Square::from_coord(File::E, rank) {
                    if self.can_castle_king_side(color) {
                        targets.insert(Square::from_coord(File::G, rank));
                    }
                    if self.can_castle_queen_side(color) {
                        targets.insert(Square::from_coord(File::C, rank));
                    }
                }

                targets
            }
        }
    }
}
