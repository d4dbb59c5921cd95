//! Provides the `Position` type, a chess position with all of its game state
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;
use std::convert::TryFrom;
use std::str::FromStr;
use crate::*;

use Color::*;
use Piece::*;

mod board;
use board::Board;
mod builder;
pub use builder::PositionBuilder;
mod fen;
mod legality;
mod movegen;
mod apply;
mod san;

const CASTLE_KING_SIDE: u8 = 0x1;
const CASTLE_QUEEN_SIDE: u8 = 0x2;
const CASTLE_BOTH_SIDES: u8 = CASTLE_KING_SIDE | CASTLE_QUEEN_SIDE;

/// FEN of the standard starting position
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A chess position: piece placement, side to move, castling rights, en-passant target and
/// the two move clocks.
///
/// A `Position` always holds a consistent game state. It can only be created by
/// [`new`](#method.new), by parsing FEN, or through a [`PositionBuilder`], and it only changes
/// through [`apply_move`](#method.apply_move), which rejects illegal moves without touching the
/// position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    board: Board,
    turn: Color,
    ep_square: Option<Square>,
    castling_rights: [u8; Color::COUNT],
    draw_plies: usize,
    move_num: usize,
}

impl Position {
    /// Returns the standard starting position
    pub fn new() -> Position {
        let mut board = Board::new();
        let back_rank = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        for c in &[White, Black] {
            let pawn_rank = c.pawn_rank();
            let back = c.back_rank();
            for (f, p) in back_rank.iter().enumerate() {
                let file = File::try_from(f).expect("INFALLIBLE");
                board.put(Square::from_coord(file, back), *c, *p);
                board.put(Square::from_coord(file, pawn_rank), *c, Pawn);
            }
        }

        Position {
            board,
            turn: White,
            ep_square: None,
            castling_rights: [CASTLE_BOTH_SIDES; Color::COUNT],
            draw_plies: 0,
            move_num: 1,
        }
    }

    /// Returns a position with an empty board
    fn empty_board() -> Position {
        Position {
            board: Board::new(),
            turn: White,
            ep_square: None,
            castling_rights: [0; Color::COUNT],
            draw_plies: 0,
            move_num: 1,
        }
    }

    /// Returns the color whose turn it is
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Returns the square a pawn may move to when capturing en passant, if any
    pub fn en_passant_square(&self) -> Option<Square> {
        self.ep_square
    }

    /// Returns the number of plies since the last capture or pawn move
    pub fn draw_plies(&self) -> usize {
        self.draw_plies
    }

    /// Returns the fullmove number, which starts at 1 and increments after Black moves
    pub fn move_number(&self) -> usize {
        self.move_num
    }

    /// Returns `true` if `color` may still castle on the king side
    pub fn can_castle_king_side(&self, color: Color) -> bool {
        self.castling_rights[color as usize] & CASTLE_KING_SIDE != 0
    }

    /// Returns `true` if `color` may still castle on the queen side
    pub fn can_castle_queen_side(&self, color: Color) -> bool {
        self.castling_rights[color as usize] & CASTLE_QUEEN_SIDE != 0
    }

    /// Returns the piece at `sq`, if any
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.board.piece_at(sq)
    }

    /// Returns the location of `color`'s king
    pub fn king_location(&self, color: Color) -> Option<Square> {
        self.board.king_location(color)
    }

    /// Returns `true` if `sq` is attacked by any piece of color `by`
    pub fn is_attacked(&self, by: Color, sq: Square) -> bool {
        self.board.is_attacked(by, sq)
    }

    /// Returns `true` if `color`'s king is attacked
    pub fn is_in_check(&self, color: Color) -> bool {
        self.king_location(color).map_or(false, |k| self.is_attacked(!color, k))
    }

    /// Returns `true` if the side to move is in check
    pub fn in_check(&self) -> bool {
        self.is_in_check(self.turn)
    }

    /// Returns `true` if the fifty-move rule allows a draw
    pub fn fifty_moves(&self) -> bool {
        self.draw_plies >= 100
    }

    /// Returns `true` if neither side can possibly checkmate: only kings remain, or kings and a
    /// single knight or bishop.
    pub fn insufficient_material(&self) -> bool {
        let heavy = [Pawn, Rook, Queen].iter().any(|&p| {
            !(self.board.occupied_by_piece(White, p) | self.board.occupied_by_piece(Black, p))
                .is_empty()
        });
        if heavy {
            return false;
        }

        let minors = [White, Black].iter()
            .map(|&c| (self.board.occupied_by_piece(c, Knight)
                | self.board.occupied_by_piece(c, Bishop)).len())
            .sum::<usize>();

        minors <= 1
    }

    /// Returns `true` if `other` counts as the same position for repetition: the same piece
    /// placement, side to move, castling rights and en-passant capture. The clocks are ignored,
    /// and so is an en-passant square that no pawn can legally capture on.
    pub fn is_repetition_of(&self, other: &Position) -> bool {
        self.board == other.board
            && self.turn == other.turn
            && self.castling_rights == other.castling_rights
            && self.en_passant_capture() == other.en_passant_capture()
    }

    /// Returns the en-passant square if the side to move has a legal capture onto it
    fn en_passant_capture(&self) -> Option<Square> {
        let ep = self.ep_square?;
        let pawns = bitboard::pawn_attacks(!self.turn, ep)
            & self.board.occupied_by_piece(self.turn, Pawn);

        if pawns.into_iter().any(|from| self.is_legal(Move::new(from, ep))) {
            Some(ep)
        } else {
            None
        }
    }

    /// Returns the piece placement
    pub(crate) fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the castling right lost when a rook leaves or is captured on `sq`
    fn corner_right(sq: Square) -> Option<(Color, u8)> {
        match sq {
            Square::A1 => Some((White, CASTLE_QUEEN_SIDE)),
            Square::H1 => Some((White, CASTLE_KING_SIDE)),
            Square::A8 => Some((Black, CASTLE_QUEEN_SIDE)),
            Square::H8 => Some((Black, CASTLE_KING_SIDE)),
            _ => None,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

impl fmt::Display for Position {
    /// Writes the FEN string, or with `{:#}` a board diagram with rank 8 at the top
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            for r in (0..Rank::COUNT).rev() {
                let rank = Rank::try_from(r).expect("INFALLIBLE");
                write!(f, "{} ", rank)?;
                for i in 0..File::COUNT {
                    let sq = Square::from_coord(File::try_from(i).expect("INFALLIBLE"), rank);
                    let c = self.piece_at(sq).map_or('.', |(c, p)| p.to_char(c));
                    write!(f, " {}", c)?;
                }
                writeln!(f)?;
            }
            writeln!(f, "\n   a b c d e f g h")
        } else {
            self.to_fen_str().fmt(f)
        }
    }
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Position::from_fen_str(s)
    }
}
