//! Long-algebraic move text.
//!
//! Converts between coordinate move text (e.g., `e2e4`, `a7a8q`) and packed
//! move values, inferring the capture/double-push/castling/en-passant flags
//! from the position. Used to script move sequences in tests and to label
//! move history in UIs.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::*;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn move_description_to_long_algebraic(
    move_description: u64,
    game_state: &GameState,
) -> Result<String, String> {
    let from = move_from(move_description);
    let to = move_to(move_description);
    let promotion_code = move_promotion_piece_code(move_description);
    let moved_piece_code = move_moved_piece_code(move_description);

    let piece_on_from = game_state
        .board
        .piece_on(from)
        .ok_or_else(|| format!("No piece found on from-square {}", from))?;
    let moved_piece = piece_kind_from_code(moved_piece_code).ok_or_else(|| {
        format!("Invalid moved-piece code in move description: {moved_piece_code}")
    })?;

    if moved_piece != piece_on_from.kind {
        return Err(format!(
            "Move description moved-piece mismatch: encoded={moved_piece:?}, board={:?}",
            piece_on_from.kind
        ));
    }

    if piece_on_from.color != game_state.side_to_move {
        return Err("From-square piece does not belong to side to move".to_owned());
    }

    let mut out = String::new();
    out.push_str(&square_to_algebraic(from)?);
    out.push_str(&square_to_algebraic(to)?);

    if promotion_code != NO_PIECE_CODE {
        let promotion_piece = piece_kind_from_code(promotion_code)
            .ok_or_else(|| format!("Invalid promotion piece code: {promotion_code}"))?;
        out.push(promotion_to_char(promotion_piece)?);
    }

    Ok(out)
}

pub fn long_algebraic_to_move_description(
    long_algebraic: &str,
    game_state: &GameState,
) -> Result<u64, String> {
    let bytes = long_algebraic.as_bytes();
    if bytes.len() != 4 && bytes.len() != 5 {
        return Err(format!("Invalid long algebraic move: {long_algebraic}"));
    }

    let from = algebraic_to_square(&long_algebraic[0..2])?;
    let to = algebraic_to_square(&long_algebraic[2..4])?;

    let moving_piece = game_state
        .board
        .piece_on(from)
        .ok_or_else(|| format!("No piece on from-square: {}", &long_algebraic[0..2]))?;

    if moving_piece.color != game_state.side_to_move {
        return Err("Attempted to move a piece that is not on side to move".to_owned());
    }
    let moved_piece = moving_piece.kind;

    let target_piece = game_state.board.piece_on(to);
    let mut captured_piece = target_piece.map(|piece| piece.kind);
    let mut flags = 0u64;

    if captured_piece.is_some() {
        flags |= FLAG_CAPTURE;
    }

    if moved_piece == PieceKind::Pawn && from.abs_diff(to) == 16 {
        flags |= FLAG_DOUBLE_PAWN_PUSH;
    }

    if moved_piece == PieceKind::King && from.abs_diff(to) == 2 {
        flags |= if to > from {
            FLAG_CASTLE_KINGSIDE
        } else {
            FLAG_CASTLE_QUEENSIDE
        };
    }

    if moved_piece == PieceKind::Pawn
        && game_state.en_passant_square == Some(to)
        && (from % 8 != to % 8)
        && target_piece.is_none()
    {
        let capture_square = if moving_piece.color == Color::Light {
            to.checked_sub(8)
                .ok_or("Invalid en-passant capture square (light)")?
        } else {
            to.checked_add(8)
                .ok_or("Invalid en-passant capture square (dark)")?
        };

        match game_state.board.piece_on(capture_square) {
            Some(piece) if piece.kind == PieceKind::Pawn && piece.color != moving_piece.color => {
                captured_piece = Some(PieceKind::Pawn);
                flags |= FLAG_CAPTURE | FLAG_EN_PASSANT;
            }
            _ => {
                return Err("En-passant target set but no capturable pawn found".to_owned());
            }
        }
    }

    let promotion_piece = if bytes.len() == 5 {
        if moved_piece != PieceKind::Pawn {
            return Err("Only pawns may promote".to_owned());
        }

        let rank = to / 8;
        if rank != 0 && rank != 7 {
            return Err("Promotion move must end on back rank".to_owned());
        }

        Some(char_to_promotion(bytes[4] as char)?)
    } else {
        if moved_piece == PieceKind::Pawn {
            let rank = to / 8;
            if rank == 0 || rank == 7 {
                return Err("Missing promotion piece in long algebraic move".to_owned());
            }
        }
        None
    };

    Ok(pack_move_description(
        from,
        to,
        moved_piece,
        captured_piece,
        promotion_piece,
        flags,
    ))
}

fn promotion_to_char(piece_kind: PieceKind) -> Result<char, String> {
    match piece_kind {
        PieceKind::Knight => Ok('n'),
        PieceKind::Bishop => Ok('b'),
        PieceKind::Rook => Ok('r'),
        PieceKind::Queen => Ok('q'),
        _ => Err(format!("Invalid promotion piece: {piece_kind:?}")),
    }
}

fn char_to_promotion(ch: char) -> Result<PieceKind, String> {
    match ch.to_ascii_lowercase() {
        'n' => Ok(PieceKind::Knight),
        'b' => Ok(PieceKind::Bishop),
        'r' => Ok(PieceKind::Rook),
        'q' => Ok(PieceKind::Queen),
        _ => Err(format!("Invalid promotion piece character: {ch}")),
    }
}

#[cfg(test)]
mod tests {
    use super::{long_algebraic_to_move_description, move_description_to_long_algebraic};
    use crate::game_state::chess_types::{
        Color, CASTLE_LIGHT_KINGSIDE, CASTLE_LIGHT_QUEENSIDE,
    };
    use crate::game_state::game_state::GameState;
    use crate::moves::move_descriptions::{
        FLAG_CASTLE_KINGSIDE, FLAG_CASTLE_QUEENSIDE, FLAG_DOUBLE_PAWN_PUSH, FLAG_EN_PASSANT,
    };

    #[test]
    fn long_algebraic_round_trip_simple_move() {
        let game_state =
            GameState::from_placement("4k3/8/8/8/8/8/4P3/4K3").expect("placement should parse");
        let move_description =
            long_algebraic_to_move_description("e2e4", &game_state).expect("move should parse");

        let round_trip = move_description_to_long_algebraic(move_description, &game_state)
            .expect("move description should convert");
        assert_eq!(round_trip, "e2e4");
        assert_ne!(move_description & FLAG_DOUBLE_PAWN_PUSH, 0);
    }

    #[test]
    fn long_algebraic_round_trip_promotion() {
        let game_state =
            GameState::from_placement("8/P7/8/8/8/8/8/k6K").expect("placement should parse");
        let move_description =
            long_algebraic_to_move_description("a7a8q", &game_state).expect("move should parse");
        let round_trip = move_description_to_long_algebraic(move_description, &game_state)
            .expect("move description should convert");

        assert_eq!(round_trip, "a7a8q");
    }

    #[test]
    fn long_algebraic_tags_both_castling_sides() {
        let mut castle_state =
            GameState::from_placement("r3k2r/8/8/8/8/8/8/R3K2R").expect("placement should parse");
        castle_state.castling_rights = CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE;

        let king_side = long_algebraic_to_move_description("e1g1", &castle_state)
            .expect("king-side castle should parse");
        assert_ne!(king_side & FLAG_CASTLE_KINGSIDE, 0);
        assert_eq!(king_side & FLAG_CASTLE_QUEENSIDE, 0);

        let queen_side = long_algebraic_to_move_description("e1c1", &castle_state)
            .expect("queen-side castle should parse");
        assert_ne!(queen_side & FLAG_CASTLE_QUEENSIDE, 0);
        assert_eq!(queen_side & FLAG_CASTLE_KINGSIDE, 0);
    }

    #[test]
    fn long_algebraic_detects_en_passant() {
        let mut en_passant_state =
            GameState::from_placement("4k3/8/8/3pP3/8/8/8/4K3").expect("placement should parse");
        en_passant_state.side_to_move = Color::Light;
        en_passant_state.en_passant_square = Some(43); // d6

        let ep_move = long_algebraic_to_move_description("e5d6", &en_passant_state)
            .expect("en-passant should parse");
        assert_ne!(ep_move & FLAG_EN_PASSANT, 0);
    }

    #[test]
    fn promotion_suffix_is_required_on_the_back_rank() {
        let game_state =
            GameState::from_placement("8/P7/8/8/8/8/8/k6K").expect("placement should parse");

        assert!(long_algebraic_to_move_description("a7a8", &game_state).is_err());
        assert!(long_algebraic_to_move_description("a7a8x", &game_state).is_err());
    }
}
