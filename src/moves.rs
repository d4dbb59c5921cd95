//! Contains the move value and its text token
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;
use std::str::FromStr;
use lazy_static::lazy_static;
use regex::Regex;
use super::*;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The type of move, as determined by checking it against a position
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MoveType {
    /// Any move which is not castling, a two-square pawn advancement, en-passant capture, or pawn
    /// promotion
    Standard,
    /// A castling move
    Castling,
    /// A two-square pawn advancement
    Advance2,
    /// An en passant capture
    EnPassant,
    /// A pawn promotion to the given piece type
    Promotion(Promotion),
}

impl MoveType {
    /// Returns `true` if the `MoveType` is a promotion.
    pub fn is_promotion(self) -> bool {
        matches!(self, MoveType::Promotion(_))
    }
}

impl Default for MoveType {
    fn default() -> Self {
        MoveType::Standard
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Which piece to promote to for a promotion move
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Promotion {
    ToKnight,
    ToBishop,
    ToRook,
    ToQueen,
}

use Promotion::*;

impl Promotion {
    /// Every promotion, strongest first
    pub const ALL: [Promotion; 4] = [ToQueen, ToRook, ToBishop, ToKnight];

    /// Returns the piece the pawn becomes
    pub fn piece(self) -> Piece {
        match self {
            ToKnight => Piece::Knight,
            ToBishop => Piece::Bishop,
            ToRook => Piece::Rook,
            ToQueen => Piece::Queen,
        }
    }

    /// Returns the uppercase letter used in move tokens
    pub fn to_char(self) -> char {
        self.piece().to_char(Color::White)
    }

    /// Returns the promotion for an uppercase letter `Q`, `R`, `B` or `N`
    pub fn from_char(c: char) -> Option<Promotion> {
        match c {
            'Q' => Some(ToQueen),
            'R' => Some(ToRook),
            'B' => Some(ToBishop),
            'N' => Some(ToKnight),
            _ => None,
        }
    }
}

impl Default for Promotion {
    fn default() -> Self {
        ToQueen
    }
}

impl From<Promotion> for Piece {
    fn from(prom: Promotion) -> Self {
        prom.piece()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A move from one square to another, possibly promoting a pawn.
///
/// A `Move` is only a description: it holds no reference to any position, and may or may not be
/// legal in a given one. See
/// [`Position::validate_move`](struct.Position.html#method.validate_move).
///
/// # Text format
/// Moves are read and written as six-character tokens: the version tag `0`, the origin square,
/// the destination square, and either the promotion letter (`Q`, `R`, `B`, `N`) or `0`.
/// The alternate form (`{:#}`) writes plain coordinate notation instead.
///
/// ```
/// use chessboard::{Move, Promotion, Square};
///
/// let mv: Move = "0e7e8Q".parse()?;
/// assert_eq!(mv, Move::with_promotion(Square::E7, Square::E8, Promotion::ToQueen));
/// assert_eq!(mv.to_string(), "0e7e8Q");
/// assert_eq!(format!("{:#}", mv), "e7e8q");
/// # Ok::<(), chessboard::Error>(())
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    /// The square the piece moves from
    pub from: Square,
    /// The square the piece moves to
    pub to: Square,
    /// The piece a pawn promotes to, if any
    pub promotion: Option<Promotion>,
}

impl Move {
    /// Creates a move without promotion
    pub fn new(from: Square, to: Square) -> Move {
        Move { from, to, promotion: None }
    }

    /// Creates a promoting move
    pub fn with_promotion(from: Square, to: Square, promotion: Promotion) -> Move {
        Move { from, to, promotion: Some(promotion) }
    }
}

lazy_static! {
    static ref MOVE_TOKEN: Regex =
        Regex::new(r"^0([a-h][1-8])([a-h][1-8])([0QRBN])$").expect("INFALLIBLE");
}

impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let caps = MOVE_TOKEN.captures(s).ok_or(Error::Parse(ParseError::MoveToken))?;

        let from = caps[1].parse()?;
        let to = caps[2].parse()?;
        let promotion = caps[3].chars().next().and_then(Promotion::from_char);

        Ok(Move { from, to, promotion })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}{}", self.from, self.to)?;
            if let Some(p) = self.promotion {
                write!(f, "{}", p.to_char().to_ascii_lowercase())?;
            }
            Ok(())
        } else {
            let p = self.promotion.map_or('0', Promotion::to_char);
            write!(f, "0{}{}{}", self.from, self.to, p)
        }
    }
}
