//! Module for counting and listing the number of variations from a given position
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use crate::*;

/// Count the number of variations of the given `depth` from `pos`
///
/// ```
/// use chessboard::{Position, variations};
///
/// assert_eq!(variations::count(&Position::new(), 2), 400);
/// ```
pub fn count(pos: &Position, depth: usize) -> usize {
    if depth < 1 {
        return 1;
    }

    let moves = pos.legal_moves();
    if depth == 1 {
        return moves.len();
    }

    moves.into_iter()
        .map(|mv| {
            let mut next = pos.clone();
            match next.apply_move(mv) {
                Ok(()) => count(&next, depth - 1),
                Err(_) => 0,
            }
        })
        .sum()
}

/// Returns the number of variations of `depth` plies that start with each legal move from `pos`
pub fn divide(pos: &Position, depth: usize) -> Vec<(Move, usize)> {
    if depth < 1 {
        return Vec::new();
    }

    pos.legal_moves().into_iter()
        .filter_map(|mv| {
            let mut next = pos.clone();
            next.apply_move(mv).ok()?;
            Some((mv, count(&next, depth - 1)))
        })
        .collect()
}

/// Print the number of variations of the given `depth` for each legal move from `pos`, and
/// return the total
pub fn print(pos: &Position, depth: usize) -> usize {
    if depth < 1 {
        return 1;
    }

    let mut total = 0;
    for (mv, count) in divide(pos, depth) {
        total += count;
        println!("\t{:7}\t{:12}", format!("{:#}", mv), count);
    }

    total
}
