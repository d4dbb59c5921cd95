//! Piece placement backed by one bitboard per kind of piece
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use crate::bitboard::*;
use crate::*;

use Color::*;
use Piece::*;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The placement of pieces on the board, without any of the other game state.
///
/// A `Board` is a small `Copy` value, so trying out a move means copying the board and moving
/// pieces on the copy. Only [`put`](#method.put) and [`clear`](#method.clear) write to it, which
/// keeps the per-color and overall occupancy in agreement with the twelve piece sets.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub(crate) struct Board {
    occ_squares: Bitboard,
    occ_by_color: [Bitboard; Color::COUNT],
    occ_by_piece: [[Bitboard; Piece::COUNT]; Color::COUNT],
}

impl Board {
    /// Returns an empty board
    pub fn new() -> Board {
        Default::default()
    }

    /// Returns the piece at `sq`, or `None` if the square is empty
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        if !self.occ_squares.contains(sq) {
            return None;
        }

        let color = if self.occ_by_color[White as usize].contains(sq) { White } else { Black };
        Piece::ALL.iter()
            .find(|&&p| self.occ_by_piece[color as usize][p as usize].contains(sq))
            .map(|&p| (color, p))
    }

    /// Removes whatever piece is at `sq`
    pub fn clear(&mut self, sq: Square) {
        if let Some((c, p)) = self.piece_at(sq) {
            self.occ_squares.remove(sq);
            self.occ_by_color[c as usize].remove(sq);
            self.occ_by_piece[c as usize][p as usize].remove(sq);
        }
    }

    /// Places a piece at `sq`, replacing anything already there
    pub fn put(&mut self, sq: Square, color: Color, piece: Piece) {
        self.clear(sq);
        self.occ_squares.insert(sq);
        self.occ_by_color[color as usize].insert(sq);
        self.occ_by_piece[color as usize][piece as usize].insert(sq);
    }

    /// Returns all occupied squares
    pub fn occupied(&self) -> Bitboard {
        self.occ_squares
    }

    /// Returns the squares occupied by `color`
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.occ_by_color[color as usize]
    }

    /// Returns the squares occupied by `color`'s pieces of type `piece`
    pub fn occupied_by_piece(&self, color: Color, piece: Piece) -> Bitboard {
        self.occ_by_piece[color as usize][piece as usize]
    }

    /// Returns the location of `color`'s king, if it has one
    pub fn king_location(&self, color: Color) -> Option<Square> {
        self.occupied_by_piece(color, King).peek()
    }

    /// Returns `true` if any piece of color `by` attacks `target`
    ///
    /// Each kind of attack is checked from the target outward: the attacker is found by looking
    /// from `target` the way that kind of piece would look at it.
    pub fn is_attacked(&self, by: Color, target: Square) -> bool {
        let queens = self.occupied_by_piece(by, Queen);
        let diag = self.occupied_by_piece(by, Bishop) | queens;
        let orth = self.occupied_by_piece(by, Rook) | queens;

        pawn_attacks(!by, target).intersects(self.occupied_by_piece(by, Pawn))
            || knight_attacks(target).intersects(self.occupied_by_piece(by, Knight))
            || king_attacks(target).intersects(self.occupied_by_piece(by, King))
            || bishop_attacks(target, self.occ_squares).intersects(diag)
            || rook_attacks(target, self.occ_squares).intersects(orth)
    }

    /// Moves a piece for a move that has already been classified as `move_type`.
    ///
    /// Captures, the en-passant victim, the castling rook and promotion are all handled here.
    /// No legality checking is done.
    pub(crate) fn play(&mut self, color: Color, piece: Piece, mv: Move, move_type: MoveType) {
        self.clear(mv.from);

        match move_type {
            MoveType::EnPassant => {
                self.clear(Square::from_coord(mv.to.file(), mv.from.rank()));
            }
            MoveType::Castling => {
                let rank = mv.from.rank();
                let (rook_from, rook_to) = if mv.to.file() == File::G {
                    (File::H, File::F)
                } else {
                    (File::A, File::D)
                };
                self.clear(Square::from_coord(rook_from, rank));
                self.put(Square::from_coord(rook_to, rank), color, Rook);
            }
            _ => { }
        }

        let piece = match move_type {
            MoveType::Promotion(p) => p.piece(),
            _ => piece,
        };
        self.put(mv.to, color, piece);
    }
}
