//! Tests the rules of play: move legality, special moves, FEN handling and games
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use chessboard::*;

fn position(fen: &str) -> Position {
    fen.parse().expect("valid FEN")
}

fn legal(fen: &str, token: &str) -> bool {
    position(fen).is_legal(token.parse().expect("valid token"))
}

mod castling {
    use super::*;

    const BOTH: &str = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";

    #[test]
    fn allowed_with_rights_and_a_clear_path() {
        assert!(legal(BOTH, "0e1g10"));
        assert!(legal(BOTH, "0e1c10"));
        assert_eq!(position(BOTH).validate_move("0e1g10".parse().unwrap()), Ok(MoveType::Castling));
    }

    #[test]
    fn needs_the_right() {
        assert!(!legal("r3k2r/8/8/8/8/8/8/R3K2R w Qkq - 0 1", "0e1g10"));
        assert!(!legal("r3k2r/8/8/8/8/8/8/R3K2R w Kkq - 0 1", "0e1c10"));
    }

    #[test]
    fn needs_empty_squares_between_king_and_rook() {
        assert!(!legal("r3k2r/8/8/8/8/8/8/R3K1NR w KQkq - 0 1", "0e1g10"));
        assert!(!legal("r3k2r/8/8/8/8/8/8/RN2K2R w KQkq - 0 1", "0e1c10"));
    }

    #[test]
    fn not_out_of_through_or_into_check() {
        // out of check
        assert!(!legal("r3k2r/8/8/8/8/8/4r3/R3K2R w KQ - 0 1", "0e1g10"));
        // through check
        assert!(!legal("r3k2r/8/8/8/8/8/5r2/R3K2R w KQ - 0 1", "0e1g10"));
        // into check
        assert!(!legal("r3k2r/8/8/8/8/8/6r1/R3K2R w KQ - 0 1", "0e1g10"));
        // only b1 attacked, which the king never crosses
        assert!(legal("4k3/8/8/8/8/8/1r6/R3K3 w Q - 0 1", "0e1c10"));
    }

    #[test]
    fn rights_are_lost_for_good() {
        let mut pos = position(BOTH);
        for token in &["0e1f10", "0e8f80", "0f1e10", "0f8e80"] {
            pos.apply_move_str(token).unwrap();
        }
        assert!(!pos.is_legal("0e1g10".parse().unwrap()));
        assert_eq!(pos.to_fen_str(), "r3k2r/8/8/8/8/8/8/R3K2R w - - 4 3");
    }
}

mod en_passant {
    use super::*;

    #[test]
    fn only_right_after_the_double_push() {
        let mut pos = position("4k3/2p5/8/3P4/8/8/8/4K3 b - - 0 1");
        pos.apply_move_str("0c7c50").unwrap();
        assert_eq!(pos.en_passant_square(), Some(Square::C6));
        assert_eq!(pos.validate_move("0d5c60".parse().unwrap()), Ok(MoveType::EnPassant));

        pos.apply_move_str("0e1e20").unwrap();
        pos.apply_move_str("0e8e70").unwrap();
        assert_eq!(pos.en_passant_square(), None);
        assert!(!pos.is_legal("0d5c60".parse().unwrap()));
    }

    #[test]
    fn not_when_it_would_expose_the_king() {
        // capturing would clear the fifth rank between the rook and the king
        let pos = position("4k3/8/8/K1pP3r/8/8/8/8 w - c6 0 2");
        assert!(!pos.is_legal("0d5c60".parse().unwrap()));
        assert!(pos.is_legal("0d5d60".parse().unwrap()));
    }
}

mod promotion {
    use super::*;

    #[test]
    fn requires_a_piece_choice() {
        let fen = "8/4P3/8/8/8/2k5/8/4K3 w - - 0 1";
        assert!(!legal(fen, "0e7e80"));
        for c in &['Q', 'R', 'B', 'N'] {
            assert!(legal(fen, &format!("0e7e8{}", c)));
        }
    }

    #[test]
    fn choice_only_on_the_last_rank() {
        assert!(!legal("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1", "0e4e5Q"));
        assert!(!legal("4k3/8/8/8/8/8/8/4K2R w K - 0 1", "0h1h8Q"));
    }

    #[test]
    fn generated_queen_first() {
        let moves = position("2r1k3/1P6/8/8/8/8/8/4K3 w - - 0 1").legal_moves();
        let promotions: Vec<_> = moves.iter()
            .filter(|mv| mv.from == Square::B7 && mv.to == Square::B8)
            .map(|mv| mv.promotion)
            .collect();
        assert_eq!(promotions, vec![
            Some(Promotion::ToQueen),
            Some(Promotion::ToRook),
            Some(Promotion::ToBishop),
            Some(Promotion::ToKnight),
        ]);
        assert_eq!(moves.iter().filter(|mv| mv.to == Square::C8).count(), 4);
    }
}

mod fen {
    use super::*;

    fn parse_error(fen: &str) -> Error {
        fen.parse::<Position>().unwrap_err()
    }

    #[test]
    fn syntax_errors() {
        assert_eq!(parse_error(""), Error::Parse(ParseError::Empty));
        assert_eq!(parse_error("8/8/8/8/8/8/8/8 w - -"), Error::Parse(ParseError::FieldCount));
        assert_eq!(parse_error("4k3/8/8/8/8/8/8/4K3 w - - 0 1 x"),
            Error::Parse(ParseError::FieldCount));
        assert_eq!(parse_error("4k3/8/8/8/8/8/4K3 w - - 0 1"), Error::Parse(ParseError::Board));
        assert_eq!(parse_error("4k4/8/8/8/8/8/8/4K3 w - - 0 1"), Error::Parse(ParseError::Board));
        assert_eq!(parse_error("4x3/8/8/8/8/8/8/4K3 w - - 0 1"), Error::Parse(ParseError::Board));
        assert_eq!(parse_error("4k3/8/8/8/8/8/8/4K3 x - - 0 1"), Error::Parse(ParseError::Turn));
        assert_eq!(parse_error("4k3/8/8/8/8/8/8/4K3 w KK - 0 1"),
            Error::Parse(ParseError::Castling));
        assert_eq!(parse_error("4k3/8/8/8/8/8/8/4K3 w - e4 0 1"),
            Error::Parse(ParseError::EnPassant));
        assert_eq!(parse_error("4k3/8/8/8/8/8/8/4K3 w - - x 1"),
            Error::Parse(ParseError::HalfmoveClock));
        assert_eq!(parse_error("4k3/8/8/8/8/8/8/4K3 w - - 0 0"),
            Error::Parse(ParseError::FullmoveNumber));
    }

    #[test]
    fn inconsistent_positions() {
        assert_eq!(parse_error("8/8/8/8/8/8/8/4K3 w - - 0 1"), Error::InvalidKingCount);
        assert_eq!(parse_error("P3k3/8/8/8/8/8/8/4K3 w - - 0 1"), Error::InvalidPawnRank);
        assert_eq!(parse_error("4k3/8/8/8/8/8/8/4K2r b - - 0 1"), Error::KingCapturable);
        assert_eq!(parse_error("4k3/8/8/8/8/8/8/4K3 w K - 0 1"), Error::InvalidCastlingFlags);
        assert_eq!(parse_error("4k3/8/8/8/8/8/8/4K3 w - e6 0 1"), Error::MissingEnPassantPawn);
        assert_eq!(parse_error("4k3/8/4p3/4p3/8/8/8/4K3 w - e6 0 1"),
            Error::EnPassantSquareOccupied);
    }

    #[test]
    fn castling_letters_in_any_order() {
        let pos = position("r3k2r/8/8/8/8/8/8/R3K2R w qkQK - 0 1");
        assert_eq!(pos.to_fen_str(), "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    }
}

mod playouts {
    use super::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    /// Plays random legal moves from the standard position, checking each position on the way
    fn playout(seed: u64, max_plies: usize) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut pos = Position::new();

        for ply in 0..max_plies {
            let moves = pos.legal_moves();

            // no legal move leaves the mover in check
            for &mv in &moves {
                let mut next = pos.clone();
                next.apply_move(mv).unwrap();
                assert!(!next.is_in_check(pos.turn()), "{} leaves the king in check: {}", mv, pos);
            }

            // the FEN says everything about the position
            assert_eq!(position(&pos.to_fen_str()), pos);

            // the generator and the legality check agree
            if ply % 16 == 0 {
                for from in Square::all() {
                    for to in Square::all() {
                        let mv = Move::new(from, to);
                        assert_eq!(pos.is_legal(mv), moves.contains(&mv), "{:#} in {}", mv, pos);
                    }
                }
            }

            match moves.choose(&mut rng) {
                Some(&mv) => pos.apply_move(mv).unwrap(),
                None => break,
            }
            if pos.fifty_moves() || pos.insufficient_material() {
                break;
            }
        }
    }

    #[test]
    fn random_games() {
        for seed in 0..8 {
            playout(seed, 160);
        }
    }

    #[test]
    fn random_games_with_undo() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut game = game::Game::new();
        let mut fens = vec![game.position().to_fen_str()];

        while !game.is_over() && fens.len() < 80 {
            let mv = *game.position().legal_moves().choose(&mut rng).unwrap();
            game.make_move(mv).unwrap();
            fens.push(game.position().to_fen_str());
        }

        while let Ok(_) = game.undo() {
            fens.pop();
            assert_eq!(game.position().to_fen_str(), *fens.last().unwrap());
        }
        assert_eq!(game.position(), &Position::new());
    }
}
