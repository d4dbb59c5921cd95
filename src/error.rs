//! Defines the error types used throughout the crate
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The part of a string that could not be parsed
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Empty input
    Empty,
    /// A FEN string without exactly six fields
    FieldCount,
    /// Piece placement field of a FEN string
    Board,
    /// Side-to-move field of a FEN string
    Turn,
    /// Castling field of a FEN string
    Castling,
    /// En-passant field of a FEN string
    EnPassant,
    /// Halfmove clock field of a FEN string
    HalfmoveClock,
    /// Fullmove number field of a FEN string
    FullmoveNumber,
    /// A color
    Color,
    /// A piece letter
    Piece,
    /// A file letter
    File,
    /// A rank digit
    Rank,
    /// A square name
    Square,
    /// A move token
    MoveToken,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ParseError::*;

        match self {
            Empty => "empty string",
            FieldCount => "FEN string must have exactly six fields",
            Board => "invalid piece placement",
            Turn => "invalid side to move",
            Castling => "invalid castling rights",
            EnPassant => "invalid en-passant square",
            HalfmoveClock => "invalid halfmove clock",
            FullmoveNumber => "invalid fullmove number",
            Color => "invalid color",
            Piece => "invalid piece",
            File => "invalid file",
            Rank => "invalid rank",
            Square => "invalid square",
            MoveToken => "invalid move token",
        }.fmt(f)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Everything that can go wrong in this crate
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed text; the payload says which part
    Parse(ParseError),
    /// Failed to convert an integer to a coordinate
    OutOfBounds,
    /// The move breaks the rules in the current position
    IllegalMove,
    /// The side not to move is in check
    KingCapturable,
    /// A side has no king or more than one
    InvalidKingCount,
    /// A pawn stands on rank 1 or rank 8
    InvalidPawnRank,
    /// A castling right without the king and that rook on their home squares
    InvalidCastlingFlags,
    /// No pawn that just double-pushed past the en passant square
    MissingEnPassantPawn,
    /// Something stands on the en passant square
    EnPassantSquareOccupied,
    /// No move has been made which could be undone
    NoMoveToUndo,
    /// The game already has a result
    GameOver,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Error::*;

        match self {
            Parse(part) => return write!(f, "parse error: {}", part),
            OutOfBounds => "integer out of range",
            IllegalMove => "illegal move",
            KingCapturable => "the side not to move is in check",
            InvalidKingCount => "each side needs exactly one king",
            InvalidPawnRank => "pawns cannot stand on rank 1 or 8",
            InvalidCastlingFlags => "castling right without king and rook at home",
            MissingEnPassantPawn => "no pawn to capture en passant",
            EnPassantSquareOccupied => "en passant square is not empty",
            NoMoveToUndo => "no move to undo",
            GameOver => "the game is over",
        }.fmt(f)
    }
}

impl std::error::Error for Error { }

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Parse(e)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// `std::result::Result` with this crate's `Error`
pub type Result<T> = std::result::Result<T, Error>;
