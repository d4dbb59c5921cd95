//! A bitboard chess position engine.
//!
//! The crate decides whether a move is legal, enumerates the legal moves of a position, applies
//! moves while keeping castling rights, the en-passant square and the clocks up to date, and
//! reads and writes positions in [Forsyth-Edwards Notation
//! (FEN)](https://en.wikipedia.org/wiki/Forsyth%E2%80%93Edwards_Notation).
//!
//! ```rust
//! use chessboard::{Position, Move};
//!
//! let mut pos = Position::new();
//! assert_eq!(pos.legal_moves().len(), 20);
//!
//! pos.apply_move("0e2e40".parse::<Move>()?)?;
//! assert_eq!(pos.to_fen_str(), "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
//! # Ok::<(), chessboard::Error>(())
//! ```
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
#![warn(missing_docs, missing_debug_implementations, unused_extern_crates)]
#![warn(clippy::unimplemented, clippy::todo)]

use std::ops;
use std::fmt;
use std::mem;
use std::str::FromStr;
use std::convert::TryFrom;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// One of the two sides. White moves first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors
    pub const COUNT: usize = 2;

    /// Direction in which this color's pawns advance, as a rank offset.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// The rank on which this color's king and rooks start.
    pub fn back_rank(self) -> Rank {
        match self {
            Color::White => Rank::R1,
            Color::Black => Rank::R8,
        }
    }

    /// The rank from which this color's pawns may advance two squares.
    pub fn pawn_rank(self) -> Rank {
        match self {
            Color::White => Rank::R2,
            Color::Black => Rank::R7,
        }
    }

    /// The rank on which this color's pawns promote.
    pub fn promotion_rank(self) -> Rank {
        (!self).back_rank()
    }
}

impl ops::Not for Color {
    type Output = Color;

    /// The other side
    ///
    /// ```
    /// use chessboard::Color;
    /// assert_eq!(!Color::Black, Color::White);
    /// ```
    fn not(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => 'w'.fmt(f),
            Color::Black => 'b'.fmt(f),
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "w" => Ok(Color::White),
            "b" => Ok(Color::Black),
            _   => Err(ParseError::Color.into()),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::White
    }
}

impl From<Color> for usize {
    fn from(value: Color) -> Self {
        value as Self
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Kind of piece, without its color
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Piece {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl Piece {
    /// Six kinds of piece
    pub const COUNT: usize = Piece::King as usize + 1;

    /// All piece types, in discriminant order
    pub const ALL: [Piece; Piece::COUNT] = [
        Piece::Pawn, Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen, Piece::King,
    ];

    /// Returns the FEN letter for this piece: uppercase for `White`, lowercase for `Black`.
    pub fn to_char(self, color: Color) -> char {
        let c = match self {
            Piece::Pawn => 'P',
            Piece::Knight => 'N',
            Piece::Bishop => 'B',
            Piece::Rook => 'R',
            Piece::Queen => 'Q',
            Piece::King => 'K',
        };

        match color {
            Color::White => c,
            Color::Black => c.to_ascii_lowercase(),
        }
    }

    /// Returns the color and piece for a FEN letter, or `None` if it is not a piece letter.
    pub fn from_char(c: char) -> Option<(Color, Piece)> {
        let piece = match c.to_ascii_uppercase() {
            'P' => Piece::Pawn,
            'N' => Piece::Knight,
            'B' => Piece::Bishop,
            'R' => Piece::Rook,
            'Q' => Piece::Queen,
            'K' => Piece::King,
            _ => return None,
        };
        let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };

        Some((color, piece))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_char(Color::White).fmt(f)
    }
}

impl FromStr for Piece {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Piece::from_char(c)
                .map(|(_, piece)| piece)
                .ok_or(Error::Parse(ParseError::Piece)),
            _ => Err(ParseError::Piece.into()),
        }
    }
}

impl TryFrom<usize> for Piece {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        Piece::ALL.get(value).copied().ok_or(Error::OutOfBounds)
    }
}

impl From<Piece> for usize {
    fn from(value: Piece) -> Self {
        value as Self
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A column, `a` (white's queen rook) to `h`
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
#[repr(u8)]
pub enum File {
    // dense from zero: `TryFrom<usize>` transmutes
    A = 0, B = 1, C = 2, D = 3, E = 4, F = 5, G = 6, H = 7,
}

impl File {
    /// Files on the board
    pub const COUNT: usize = File::H as usize + 1;

    /// Returns the file for a letter `'a'` through `'h'`.
    pub fn from_char(c: char) -> Option<File> {
        match c {
            'a' ..= 'h' => File::try_from(c as usize - 'a' as usize).ok(),
            _ => None,
        }
    }

    /// Returns the lowercase letter of the file.
    pub fn to_char(self) -> char {
        (b'a' + self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_char().fmt(f)
    }
}

impl FromStr for File {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => File::from_char(c).ok_or(Error::Parse(ParseError::File)),
            _ => Err(ParseError::File.into()),
        }
    }
}

impl Default for File {
    fn default() -> Self {
        File::A
    }
}

impl TryFrom<usize> for File {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        if value < Self::COUNT {
            unsafe { Ok(mem::transmute::<u8, File>(value as u8)) }
        } else {
            Err(Error::OutOfBounds)
        }
    }
}

impl From<File> for usize {
    fn from(value: File) -> Self {
        value as Self
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A row, `R1` (white's back rank) to `R8`
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
#[repr(u8)]
pub enum Rank {
    // dense from zero: `TryFrom<usize>` transmutes
    R1 = 0, R2 = 1, R3 = 2, R4 = 3, R5 = 4, R6 = 5, R7 = 6, R8 = 7,
}

impl Rank {
    /// Ranks on the board
    pub const COUNT: usize = Rank::R8 as usize + 1;

    /// Returns the rank for a digit `'1'` through `'8'`.
    pub fn from_char(c: char) -> Option<Rank> {
        match c {
            '1' ..= '8' => Rank::try_from(c as usize - '1' as usize).ok(),
            _ => None,
        }
    }

    /// Returns the digit of the rank.
    pub fn to_char(self) -> char {
        (b'1' + self as u8) as char
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_char().fmt(f)
    }
}

impl FromStr for Rank {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Rank::from_char(c).ok_or(Error::Parse(ParseError::Rank)),
            _ => Err(ParseError::Rank.into()),
        }
    }
}

impl Default for Rank {
    fn default() -> Self {
        Rank::R1
    }
}

impl TryFrom<usize> for Rank {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        if value < Self::COUNT {
            unsafe { Ok(mem::transmute::<u8, Rank>(value as u8)) }
        } else {
            Err(Error::OutOfBounds)
        }
    }
}

impl From<Rank> for usize {
    fn from(value: Rank) -> Self {
        value as Self
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// One of the 64 squares.
///
/// Squares are numbered rank by rank, so the index of a square is `rank * 8 + file`: `A1` is 0,
/// `H1` is 7 and `H8` is 63. A coordinate that falls off the board is never a `Square`; see
/// [`offset`](#method.offset).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
#[repr(u8)]
pub enum Square {
    // octal: the high digit is the rank, the low digit the file
    A1 = 0o00, B1 = 0o01, C1 = 0o02, D1 = 0o03, E1 = 0o04, F1 = 0o05, G1 = 0o06, H1 = 0o07,
    A2 = 0o10, B2 = 0o11, C2 = 0o12, D2 = 0o13, E2 = 0o14, F2 = 0o15, G2 = 0o16, H2 = 0o17,
    A3 = 0o20, B3 = 0o21, C3 = 0o22, D3 = 0o23, E3 = 0o24, F3 = 0o25, G3 = 0o26, H3 = 0o27,
    A4 = 0o30, B4 = 0o31, C4 = 0o32, D4 = 0o33, E4 = 0o34, F4 = 0o35, G4 = 0o36, H4 = 0o37,
    A5 = 0o40, B5 = 0o41, C5 = 0o42, D5 = 0o43, E5 = 0o44, F5 = 0o45, G5 = 0o46, H5 = 0o47,
    A6 = 0o50, B6 = 0o51, C6 = 0o52, D6 = 0o53, E6 = 0o54, F6 = 0o55, G6 = 0o56, H6 = 0o57,
    A7 = 0o60, B7 = 0o61, C7 = 0o62, D7 = 0o63, E7 = 0o64, F7 = 0o65, G7 = 0o66, H7 = 0o67,
    A8 = 0o70, B8 = 0o71, C8 = 0o72, D8 = 0o73, E8 = 0o74, F8 = 0o75, G8 = 0o76, H8 = 0o77,
}

impl Square {
    /// Squares on the board
    pub const COUNT: usize = Square::H8 as usize + 1;

    /// The square where `file` and `rank` cross
    pub fn from_coord(file: File, rank: Rank) -> Square {
        Square::try_from(((rank as usize) << 3) + file as usize).expect("INFALLIBLE")
    }

    /// Column of the square
    pub fn file(self) -> File {
        File::try_from((self as usize) & 7).expect("INFALLIBLE")
    }

    /// Row of the square
    pub fn rank(self) -> Rank {
        Rank::try_from((self as usize) >> 3).expect("INFALLIBLE")
    }

    /// Returns the square `df` files and `dr` ranks away from this one, or `None` if that would
    /// be off the board.
    pub fn offset(self, df: i8, dr: i8) -> Option<Square> {
        let f = self.file() as i8 + df;
        let r = self.rank() as i8 + dr;

        if (0..File::COUNT as i8).contains(&f) && (0..Rank::COUNT as i8).contains(&r) {
            Some(Square::from_coord(
                File::try_from(f as usize).ok()?,
                Rank::try_from(r as usize).ok()?,
            ))
        } else {
            None
        }
    }

    /// Returns an iterator over all 64 squares, from `A1` to `H8`.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Square::COUNT).map(|i| Square::try_from(i).expect("INFALLIBLE"))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl FromStr for Square {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(f), Some(r), None) => File::from_char(f)
                .zip(Rank::from_char(r))
                .map(|(file, rank)| Square::from_coord(file, rank))
                .ok_or(Error::Parse(ParseError::Square)),
            _ => Err(ParseError::Square.into()),
        }
    }
}

impl Default for Square {
    fn default() -> Self {
        Square::A1
    }
}

impl TryFrom<usize> for Square {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        if value < Self::COUNT {
            unsafe { Ok(mem::transmute::<u8, Square>(value as u8)) }
        } else {
            Err(Error::OutOfBounds)
        }
    }
}

impl From<Square> for usize {
    fn from(value: Square) -> Self {
        value as Self
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
pub mod bitboard;
mod position;
pub use position::{Position, PositionBuilder, START_FEN};
mod moves;
pub use moves::{Move, MoveType, Promotion};

pub mod variations;
pub mod game;
pub mod pgn;
pub mod config;

mod error;
pub use error::{Error, ParseError, Result};


#[cfg(test)]
mod piece_tests {
    use std::convert::TryFrom;
    use super::*;

    #[test]
    fn fen_letters_round_trip() {
        for p in &Piece::ALL {
            for c in &[Color::White, Color::Black] {
                assert_eq!(Piece::from_char(p.to_char(*c)), Some((*c, *p)));
            }
        }
        assert_eq!(Piece::Knight.to_char(Color::Black), 'n');
        assert_eq!(Piece::from_char('x'), None);
    }

    #[test]
    fn fromstr_accepts_both_cases() {
        assert_eq!("q".parse::<Piece>().unwrap(), Piece::Queen);
        assert_eq!("Q".parse::<Piece>().unwrap(), Piece::Queen);
        assert!("QQ".parse::<Piece>().is_err());
        assert!("".parse::<Piece>().is_err());
    }

    #[test]
    fn usize_conversions_are_consistent() {
        for (i, p) in Piece::ALL.iter().enumerate() {
            assert_eq!(usize::from(*p), i);
            assert_eq!(Piece::try_from(i).unwrap(), *p);
        }
        assert_eq!(Piece::try_from(Piece::COUNT), Err(Error::OutOfBounds));
    }
}

#[cfg(test)]
mod square_tests {
    use std::convert::TryFrom;
    use super::*;

    #[test]
    fn index_is_rank_times_eight_plus_file() {
        assert_eq!(Square::A1 as usize, 0);
        assert_eq!(Square::H1 as usize, 7);
        assert_eq!(Square::A2 as usize, 8);
        assert_eq!(Square::E4 as usize, 3 * 8 + 4);
        assert_eq!(Square::H8 as usize, 63);
    }

    #[test]
    fn file_and_rank_methods_match_from_coord() {
        for i in 0..File::COUNT {
            for j in 0..Rank::COUNT {
                let (f, r) = (File::try_from(i).unwrap(), Rank::try_from(j).unwrap());
                let s = Square::from_coord(f, r);
                assert_eq!(f, s.file());
                assert_eq!(r, s.rank());
                assert_eq!(s.to_string(), format!("{}{}", f, r));
                assert_eq!(s.to_string().parse::<Square>().unwrap(), s);
            }
        }
    }

    #[test]
    fn fromstr_trait_produces_errors_when_it_should() {
        assert!("a".parse::<Square>().is_err());
        assert!("1".parse::<Square>().is_err());
        assert!("a0".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("i1".parse::<Square>().is_err());
        assert!("`1".parse::<Square>().is_err());
        assert!("a1x".parse::<Square>().is_err());
    }

    #[test]
    fn offset_stays_on_the_board() {
        assert_eq!(Square::E4.offset(1, 2), Some(Square::F6));
        assert_eq!(Square::E4.offset(-4, -3), Some(Square::A1));
        assert_eq!(Square::A1.offset(-1, 0), None);
        assert_eq!(Square::H8.offset(0, 1), None);
        assert_eq!(Square::H4.offset(1, 0), None);
        assert_eq!(Square::A5.offset(-2, 1), None);
    }

    #[test]
    fn out_of_bound_usize_conversion_is_an_error() {
        assert_eq!(Square::try_from(Square::COUNT), Err(Error::OutOfBounds));
        assert_eq!(Square::all().count(), Square::COUNT);
    }
}
