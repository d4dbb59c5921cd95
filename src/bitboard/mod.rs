//! Provides a set of squares backed by a single `u64`
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::convert::TryFrom;
use std::iter::FusedIterator;
use std::iter::FromIterator;
use std::ops;
use std::fmt;
use crate::*;

mod attacks;
pub use attacks::*;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A set of squares with bit `rank * 8 + file` representing each square
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(u64);

impl Bitboard {
    /// The empty set
    pub fn new() -> Bitboard {
        Bitboard(0)
    }

    /// Number of squares in the set
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// `true` for the empty set
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// `true` if `sq` is a member
    pub fn contains(self, sq: Square) -> bool {
        self.intersects(sq.into())
    }

    /// `true` if the two sets share at least one square
    pub fn intersects(self, other: Bitboard) -> bool {
        !(self & other).is_empty()
    }

    /// Adds `sq` to the set
    pub fn insert(&mut self, sq: Square) {
        *self |= sq.into();
    }

    /// Takes `sq` out of the set
    pub fn remove(&mut self, sq: Square) {
        *self &= !Bitboard::from(sq);
    }

    /// Removes the lowest-numbered square and returns it, or `None` if the set is empty
    pub fn pop(&mut self) -> Option<Square> {
        let lowest = self.peek()?;
        self.remove(lowest);
        Some(lowest)
    }

    /// Returns the lowest-numbered square without removing it
    pub fn peek(self) -> Option<Square> {
        match self.0.trailing_zeros() as usize {
            Square::COUNT => None,
            index => Square::try_from(index).ok(),
        }
    }
}

impl ops::Not for Bitboard {
    type Output = Self;

    fn not(self) -> Self::Output {
        Bitboard(!self.0)
    }
}

impl ops::BitAnd for Bitboard {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 & rhs.0)
    }
}

impl ops::BitAndAssign for Bitboard {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0
    }
}

impl ops::BitOr for Bitboard {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 | rhs.0)
    }
}

impl ops::BitOrAssign for Bitboard {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0
    }
}

impl fmt::Display for Bitboard {
    /// Draws the set as an 8x8 grid, rank 8 at the top, with `x` for members
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in (0..Rank::COUNT).rev() {
            let rank = Rank::try_from(r).expect("INFALLIBLE");
            for file in (0..File::COUNT).map(|i| File::try_from(i).expect("INFALLIBLE")) {
                let c = if self.contains(Square::from_coord(file, rank)) { 'x' } else { '.' };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl From<Square> for Bitboard {
    fn from(square: Square) -> Bitboard {
        Bitboard(1u64 << square as u8)
    }
}

impl From<File> for Bitboard {
    fn from(file: File) -> Bitboard {
        Bitboard(0x0101_0101_0101_0101 << file as u8)
    }
}

impl From<Rank> for Bitboard {
    fn from(rank: Rank) -> Bitboard {
        Bitboard(0xff << (8 * rank as u8))
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(squares: I) -> Self {
        squares.into_iter().fold(Bitboard::new(), |bd, sq| bd | sq.into())
    }
}

/// Iterator over the squares of a `Bitboard`, lowest index first
#[derive(Debug, Copy, Clone)]
pub struct IntoIter(Bitboard);

impl Iterator for IntoIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.0.len();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for IntoIter { }
impl FusedIterator for IntoIter { }
