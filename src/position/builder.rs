//! Contains a builder for `Position`
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

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Sets up a `Position` one piece at a time. Nothing is checked until `validate`.
///
/// ```
/// use chessboard::{PositionBuilder, Color::*, Piece::*, Square};
///
/// let pos = PositionBuilder::new()
///     .piece(White, King, Square::E1)
///     .piece(White, Rook, Square::H1)
///     .piece(Black, King, Square::E8)
///     .can_castle_king_side(White, true)
///     .validate()?;
/// assert_eq!(pos.to_fen_str(), "4k3/8/8/8/8/8/8/4K2R w K - 0 1");
/// # Ok::<(), chessboard::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct PositionBuilder {
    pos: Position,
}

impl PositionBuilder {
    /// An empty board, white to move, no castling rights, move 1
    pub fn new() -> Self {
        PositionBuilder { pos: Position::empty_board() }
    }

    /// Puts a piece on `square`, replacing whatever was there
    pub fn piece(&mut self, color: Color, piece: Piece, square: Square) -> &mut Self {
        self.pos.board.put(square, color, piece);
        self
    }

    /// Empties `square`
    pub fn clear(&mut self, square: Square) -> &mut Self {
        self.pos.board.clear(square);
        self
    }

    /// Side to move
    pub fn turn(&mut self, color: Color) -> &mut Self {
        self.pos.turn = color;
        self
    }

    /// Grants or revokes `color`'s right to castle with the h-file rook
    pub fn can_castle_king_side(&mut self, color: Color, available: bool) -> &mut Self {
        self.set_right(color, CASTLE_KING_SIDE, available)
    }

    /// Grants or revokes `color`'s right to castle with the a-file rook
    pub fn can_castle_queen_side(&mut self, color: Color, available: bool) -> &mut Self {
        self.set_right(color, CASTLE_QUEEN_SIDE, available)
    }

    fn set_right(&mut self, color: Color, right: u8, available: bool) -> &mut Self {
        let rights = &mut self.pos.castling_rights[color as usize];
        if available {
            *rights |= right;
        } else {
            *rights &= !right;
        }
        self
    }

    /// The square a pawn skipped over with a double push on the previous move, if any
    pub fn en_passant_square(&mut self, square: Option<Square>) -> &mut Self {
        self.pos.ep_square = square;
        self
    }

    /// Halfmove clock: plies since the last capture or pawn move
    pub fn draw_plies(&mut self, plies: usize) -> &mut Self {
        self.pos.draw_plies = plies;
        self
    }

    /// Fullmove number, starting at 1 and incremented after each black move
    pub fn move_number(&mut self, num: usize) -> &mut Self {
        self.pos.move_num = num;
        self
    }

    /// Checks that the position could arise in a game and returns it.
    ///
    /// # Errors
    ///
    /// In the order checked: `InvalidKingCount`, `InvalidPawnRank`, `KingCapturable`,
    /// `EnPassantSquareOccupied` or `MissingEnPassantPawn`, and `InvalidCastlingFlags`.
    pub fn validate(&self) -> Result<Position> {
        let pos = &self.pos;
        let board = &pos.board;
        let back_ranks = Bitboard::from(Rank::R1) | Rank::R8.into();

        for &c in &[White, Black] {
            if board.occupied_by_piece(c, King).len() != 1 {
                return Err(Error::InvalidKingCount);
            }
            if board.occupied_by_piece(c, Pawn).intersects(back_ranks) {
                return Err(Error::InvalidPawnRank);
            }
        }

        // the side that just moved cannot have left its king en prise
        if pos.is_in_check(!pos.turn) {
            return Err(Error::KingCapturable);
        }

        if let Some(ep_square) = pos.ep_square {
            PositionBuilder::check_en_passant(board, !pos.turn, ep_square)?;
        }

        for &c in &[White, Black] {
            let home = |f, piece| {
                board.piece_at(Square::from_coord(f, c.back_rank())) == Some((c, piece))
            };
            let king_home = home(File::E, King);
            if pos.can_castle_king_side(c) && !(king_home && home(File::H, Rook)) {
                return Err(Error::InvalidCastlingFlags);
            }
            if pos.can_castle_queen_side(c) && !(king_home && home(File::A, Rook)) {
                return Err(Error::InvalidCastlingFlags);
            }
        }

        Ok(pos.clone())
    }

    /// `pushed` is the side that would have made the double push
    fn check_en_passant(board: &Board, pushed: Color, ep_square: Square) -> Result<()> {
        if board.piece_at(ep_square).is_some() {
            return Err(Error::EnPassantSquareOccupied);
        }

        let skipped_rank = if pushed == White { Rank::R3 } else { Rank::R6 };
        let pawn = ep_square.offset(0, pushed.forward()).and_then(|sq| board.piece_at(sq));
        if ep_square.rank() != skipped_rank || pawn != Some((pushed, Pawn)) {
            return Err(Error::MissingEnPassantPawn);
        }

        Ok(())
    }
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&Position> for PositionBuilder {
    fn from(pos: &Position) -> Self {
        PositionBuilder { pos: pos.clone() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kings() -> PositionBuilder {
        let mut builder = PositionBuilder::new();
        builder.piece(White, King, Square::E1).piece(Black, King, Square::E8);
        builder
    }

    #[test]
    fn missing_or_extra_kings_are_rejected() {
        assert_eq!(PositionBuilder::new().validate(), Err(Error::InvalidKingCount));
        assert_eq!(
            kings().piece(White, King, Square::A1).validate(),
            Err(Error::InvalidKingCount),
        );
        assert!(kings().validate().is_ok());
    }

    #[test]
    fn pawns_on_back_ranks_are_rejected() {
        assert_eq!(kings().piece(White, Pawn, Square::A8).validate(), Err(Error::InvalidPawnRank));
        assert_eq!(kings().piece(Black, Pawn, Square::A1).validate(), Err(Error::InvalidPawnRank));
    }

    #[test]
    fn side_not_to_move_cannot_be_in_check() {
        assert_eq!(
            kings().piece(White, Rook, Square::A8).validate(),
            Err(Error::KingCapturable),
        );
        assert!(kings().piece(White, Rook, Square::A8).turn(Black).validate().is_ok());
    }

    #[test]
    fn en_passant_square_needs_a_pushed_pawn() {
        assert_eq!(
            kings().turn(Black).en_passant_square(Some(Square::D3)).validate(),
            Err(Error::MissingEnPassantPawn),
        );
        assert_eq!(
            kings().turn(Black).piece(White, Pawn, Square::D3)
                .en_passant_square(Some(Square::D3)).validate(),
            Err(Error::EnPassantSquareOccupied),
        );
        assert_eq!(
            kings().piece(White, Pawn, Square::D4).en_passant_square(Some(Square::D3)).validate(),
            Err(Error::MissingEnPassantPawn),
        );
        let pos = kings().turn(Black).piece(White, Pawn, Square::D4)
            .en_passant_square(Some(Square::D3)).validate().unwrap();
        assert_eq!(pos.en_passant_square(), Some(Square::D3));
    }

    #[test]
    fn castling_flags_need_king_and_rook_at_home() {
        assert_eq!(
            kings().can_castle_king_side(White, true).validate(),
            Err(Error::InvalidCastlingFlags),
        );
        assert_eq!(
            kings().piece(Black, Rook, Square::A8).can_castle_queen_side(White, true).validate(),
            Err(Error::InvalidCastlingFlags),
        );
        let pos = kings().piece(Black, Rook, Square::A8).can_castle_queen_side(Black, true)
            .validate().unwrap();
        assert!(pos.can_castle_queen_side(Black));
        assert!(!pos.can_castle_king_side(Black));
    }

    #[test]
    fn position_round_trips_through_the_builder() {
        let pos = Position::new();
        assert_eq!(PositionBuilder::from(&pos).validate(), Ok(pos));
    }
}
