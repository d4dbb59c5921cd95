//! Reads and writes positions in Forsyth-Edwards Notation
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use super::*;

impl Position {
    /// Parses a position from a FEN string.
    ///
    /// All six fields are required. Syntax errors are reported as `Error::Parse`; a string that
    /// parses but does not describe a consistent position is rejected with the same errors as
    /// [`PositionBuilder::validate`](struct.PositionBuilder.html#method.validate).
    pub fn from_fen_str(s: &str) -> Result<Position> {
        let fields: Vec<_> = s.split_whitespace().collect();
        if fields.is_empty() {
            return Err(ParseError::Empty.into());
        }
        if fields.len() != 6 {
            return Err(ParseError::FieldCount.into());
        }

        let mut builder = PositionBuilder::new();

        // the board, from rank 8 down to rank 1
        let ranks: Vec<_> = fields[0].split('/').collect();
        if ranks.len() != Rank::COUNT {
            return Err(ParseError::Board.into());
        }
        for (row, text) in ranks.iter().enumerate() {
            let rank = Rank::try_from(Rank::COUNT - 1 - row).expect("INFALLIBLE");
            let mut f = 0;
            for c in text.chars() {
                match c {
                    '1' ..= '8' => {
                        f += c.to_digit(10).expect("INFALLIBLE") as usize;
                    }
                    _ => {
                        let (color, piece) = Piece::from_char(c)
                            .ok_or(Error::Parse(ParseError::Board))?;
                        let file = File::try_from(f)
                            .map_err(|_| Error::Parse(ParseError::Board))?;
                        builder.piece(color, piece, Square::from_coord(file, rank));
                        f += 1;
                    }
                }
                if f > File::COUNT {
                    return Err(ParseError::Board.into());
                }
            }
            if f != File::COUNT {
                return Err(ParseError::Board.into());
            }
        }

        // whose turn it is
        builder.turn(fields[1].parse().map_err(|_| Error::Parse(ParseError::Turn))?);

        // castling rights
        if fields[2] != "-" {
            let mut seen = String::new();
            for c in fields[2].chars() {
                if seen.contains(c) {
                    return Err(ParseError::Castling.into());
                }
                match c {
                    'K' => builder.can_castle_king_side(Color::White, true),
                    'Q' => builder.can_castle_queen_side(Color::White, true),
                    'k' => builder.can_castle_king_side(Color::Black, true),
                    'q' => builder.can_castle_queen_side(Color::Black, true),
                    _ => return Err(ParseError::Castling.into()),
                };
                seen.push(c);
            }
        }

        // en passant square
        if fields[3] != "-" {
            let sq: Square = fields[3].parse().map_err(|_| Error::Parse(ParseError::EnPassant))?;
            if sq.rank() != Rank::R3 && sq.rank() != Rank::R6 {
                return Err(ParseError::EnPassant.into());
            }
            builder.en_passant_square(Some(sq));
        }

        // halfmove clock
        let plies = parse_count(fields[4]).ok_or(Error::Parse(ParseError::HalfmoveClock))?;
        builder.draw_plies(plies);

        // fullmove number
        match parse_count(fields[5]) {
            Some(n) if n >= 1 => builder.move_number(n),
            _ => return Err(ParseError::FullmoveNumber.into()),
        };

        builder.validate()
    }

    /// Converts the position to a FEN string
    pub fn to_fen_str(&self) -> String {
        // the board
        let mut board = String::new();
        for r in (0..Rank::COUNT).rev() {
            let rank = Rank::try_from(r).expect("INFALLIBLE");
            let mut count = 0;
            for f in 0..File::COUNT {
                let file = File::try_from(f).expect("INFALLIBLE");
                if let Some((c, p)) = self.piece_at(Square::from_coord(file, rank)) {
                    if count > 0 {
                        board += &count.to_string();
                        count = 0;
                    }
                    board.push(p.to_char(c));
                } else {
                    count += 1;
                }
            }
            if count > 0 {
                board += &count.to_string();
            }
            if r > 0 {
                board += "/";
            }
        }

        // castling rights
        let mut castling = String::new();
        for (c, k, q) in &[(Color::White, 'K', 'Q'), (Color::Black, 'k', 'q')] {
            if self.can_castle_king_side(*c) {
                castling.push(*k);
            }
            if self.can_castle_queen_side(*c) {
                castling.push(*q);
            }
        }
        if castling.is_empty() {
            castling += "-";
        }

        // en passant square
        let ep_square = match self.ep_square {
            Some(sq) => sq.to_string(),
            None => "-".to_string(),
        };

        format!("{} {} {} {} {} {}", board, self.turn, castling, ep_square,
                                     self.draw_plies, self.move_num)
    }
}

/// Parses a clock field, which is plain decimal digits with no sign
fn parse_count(field: &str) -> Option<usize> {
    if field.bytes().all(|b| b.is_ascii_digit()) {
        field.parse().ok()
    } else {
        None
    }
}
