//! Provides direction tables and functions used to compute attacks
//!
//! Attacks are computed by stepping from a square with the offsets in a direction table. Knights
//! and kings take a single step in each direction; bishops, rooks and queens repeat the step
//! until they leave the board or reach an occupied square, which is included in the result.
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use super::*;

/// A `(file, rank)` offset
pub type Step = (i8, i8);

/// The eight jumps of a knight
pub const KNIGHT_STEPS: [Step; 8] = [
    (1, 2), (2, 1), (2, -1), (1, -2), (-1, -2), (-2, -1), (-2, 1), (-1, 2),
];

/// The eight single steps of a king
pub const KING_STEPS: [Step; 8] = [
    (0, 1), (1, 1), (1, 0), (1, -1), (0, -1), (-1, -1), (-1, 0), (-1, 1),
];

/// The four diagonal directions used by bishops and queens
pub const DIAGONALS: [Step; 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

/// The four orthogonal directions used by rooks and queens
pub const ORTHOGONALS: [Step; 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Computes the squares reached from `sq` by taking exactly one of `steps`
pub fn step_attacks(sq: Square, steps: &[Step]) -> Bitboard {
    steps.iter().filter_map(|&(df, dr)| sq.offset(df, dr)).collect()
}

/// Computes the squares reached from `sq` by repeating each of `dirs` until the edge of the
/// board or the first square in `occ`
///
/// # Example
/// ```
/// use chessboard::{Square, bitboard::*};
///
/// let occ = Bitboard::from(Square::E6);
/// let att = ray_attacks(Square::E4, occ, &ORTHOGONALS);
/// assert!(att.contains(Square::E6));
/// assert!(!att.contains(Square::E7));
/// assert!(att.contains(Square::A4));
/// ```
pub fn ray_attacks(sq: Square, occ: Bitboard, dirs: &[Step]) -> Bitboard {
    let mut att = Bitboard::new();

    for &(df, dr) in dirs {
        let mut cur = sq;
        while let Some(next) = cur.offset(df, dr) {
            att.insert(next);
            if occ.contains(next) {
                break;
            }
            cur = next;
        }
    }

    att
}

/// Computes knight-like attacks to or from `sq`
#[inline]
pub fn knight_attacks(sq: Square) -> Bitboard {
    step_attacks(sq, &KNIGHT_STEPS)
}

/// Computes king-like attacks to or from `sq`
#[inline]
pub fn king_attacks(sq: Square) -> Bitboard {
    step_attacks(sq, &KING_STEPS)
}

/// Computes bishop-like attacks to or from `sq` based on the occupied squares given by `occ`
#[inline]
pub fn bishop_attacks(sq: Square, occ: Bitboard) -> Bitboard {
    ray_attacks(sq, occ, &DIAGONALS)
}

/// Computes rook-like attacks to or from `sq` based on the occupied squares given by `occ`
#[inline]
pub fn rook_attacks(sq: Square, occ: Bitboard) -> Bitboard {
    ray_attacks(sq, occ, &ORTHOGONALS)
}

/// Computes queen-like attacks to or from `sq` based on the occupied squares given by `occ`
#[inline]
pub fn queen_attacks(sq: Square, occ: Bitboard) -> Bitboard {
    rook_attacks(sq, occ) | bishop_attacks(sq, occ)
}

/// Computes the squares attacked by a pawn of color `c` standing on `sq`
///
/// Passing the opposite color gives the squares from which a pawn of color `c` would attack
/// `sq`.
pub fn pawn_attacks(c: Color, sq: Square) -> Bitboard {
    let fwd = c.forward();
    step_attacks(sq, &[(-1, fwd), (1, fwd)])
}

/// Returns the squares strictly between `a` and `b` if they share a rank, file or diagonal, or
/// an empty set otherwise.
pub fn between(a: Square, b: Square) -> Bitboard {
    let df = b.file() as i8 - a.file() as i8;
    let dr = b.rank() as i8 - a.rank() as i8;

    if (df == 0 && dr == 0) || (df != 0 && dr != 0 && df.abs() != dr.abs()) {
        return Bitboard::new();
    }

    let step = (df.signum(), dr.signum());
    let mut squares = Bitboard::new();
    let mut cur = a;
    while let Some(next) = cur.offset(step.0, step.1) {
        if next == b {
            break;
        }
        squares.insert(next);
        cur = next;
    }

    squares
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knight_in_the_corner_has_two_moves() {
        assert_eq!(knight_attacks(Square::A1), [Square::C2, Square::B3].iter().copied().collect());
        assert_eq!(knight_attacks(Square::D4).len(), 8);
        assert_eq!(knight_attacks(Square::H8).len(), 2);
    }

    #[test]
    fn king_steps_stop_at_the_edge() {
        assert_eq!(king_attacks(Square::A1).len(), 3);
        assert_eq!(king_attacks(Square::E1).len(), 5);
        assert_eq!(king_attacks(Square::E4).len(), 8);
    }

    #[test]
    fn rays_stop_at_the_first_blocker() {
        let occ: Bitboard = [Square::D5, Square::F3].iter().copied().collect();
        let att = bishop_attacks(Square::E4, occ);

        assert!(att.contains(Square::D5));
        assert!(!att.contains(Square::C6));
        assert!(att.contains(Square::F3));
        assert!(!att.contains(Square::G2));
        assert!(att.contains(Square::H7));
        assert!(att.contains(Square::B1));
        assert_eq!(att.len(), 2 + 3 + 3);
    }

    #[test]
    fn empty_board_rook_and_queen_counts() {
        assert_eq!(rook_attacks(Square::A1, Bitboard::new()).len(), 14);
        assert_eq!(queen_attacks(Square::D4, Bitboard::new()).len(), 27);
    }

    #[test]
    fn pawn_attacks_point_forward() {
        assert_eq!(
            pawn_attacks(Color::White, Square::E4),
            [Square::D5, Square::F5].iter().copied().collect(),
        );
        assert_eq!(pawn_attacks(Color::Black, Square::A7), Square::B6.into());
        assert!(pawn_attacks(Color::White, Square::E8).is_empty());
    }

    #[test]
    fn between_only_follows_lines() {
        let expected: Bitboard = [Square::F1, Square::G1].iter().copied().collect();
        assert_eq!(between(Square::E1, Square::H1), expected);
        assert_eq!(between(Square::A1, Square::D4).len(), 2);
        assert!(between(Square::A1, Square::B3).is_empty());
        assert!(between(Square::E1, Square::E2).is_empty());
    }
}
