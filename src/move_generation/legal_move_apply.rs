use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::{
    move_from, move_promotion_piece_code, move_to, pack_move_description, piece_kind_from_code,
    FLAG_CASTLE_KINGSIDE, FLAG_CASTLE_QUEENSIDE,
};

/// Apply a move to a state and return the successor state.
///
/// The input state is never touched; the board is cloned and rebuilt.
/// Fails only when the from-square does not hold a piece of the side to
/// move, which indicates a move that was not drawn from this state's
/// legal set.
pub fn apply_move(game_state: &GameState, move_description: u64) -> Result<GameState, String> {
    let from = move_from(move_description);
    let to = move_to(move_description);

    let moving_color = game_state.side_to_move;
    let enemy_color = moving_color.opposite();

    let moved_piece = game_state
        .board
        .piece_on(from)
        .filter(|piece| piece.color == moving_color)
        .map(|piece| piece.kind)
        .ok_or_else(|| format!("No piece of side to move on from-square {from}"))?;

    let mut next = game_state.clone();

    next.board.clear(from);
    let mut captured_piece = next.board.clear(to);

    // En-passant: a pawn moving diagonally onto the empty target square
    // captures the pawn beside it, on the from-square's rank.
    if moved_piece == PieceKind::Pawn
        && captured_piece.is_none()
        && from % 8 != to % 8
        && game_state.en_passant_square == Some(to)
    {
        let capture_square = match moving_color {
            Color::Light => to
                .checked_sub(8)
                .ok_or("Invalid en-passant capture square for light")?,
            Color::Dark => to
                .checked_add(8)
                .ok_or("Invalid en-passant capture square for dark")?,
        };
        captured_piece = next.board.clear(capture_square);
    }

    // Promotion: the requested piece, Queen when the move carries none.
    let promotion_rank: Square = match moving_color {
        Color::Light => 7,
        Color::Dark => 0,
    };
    let placed_kind = if moved_piece == PieceKind::Pawn && to / 8 == promotion_rank {
        piece_kind_from_code(move_promotion_piece_code(move_description))
            .unwrap_or(PieceKind::Queen)
    } else {
        moved_piece
    };
    next.board.place(
        to,
        Piece {
            color: moving_color,
            kind: placed_kind,
        },
    );

    // Castling relocates the rook on the same rank.
    if moved_piece == PieceKind::King {
        if (move_description & FLAG_CASTLE_KINGSIDE) != 0 {
            match moving_color {
                Color::Light => move_rook(&mut next.board, 7, 5),
                Color::Dark => move_rook(&mut next.board, 63, 61),
            }
        } else if (move_description & FLAG_CASTLE_QUEENSIDE) != 0 {
            match moving_color {
                Color::Light => move_rook(&mut next.board, 0, 3),
                Color::Dark => move_rook(&mut next.board, 56, 59),
            }
        }
    }

    update_castling_rights(&mut next, moving_color, from, to, moved_piece);

    // The en-passant target lives for exactly one reply: set on a double
    // pawn push, cleared by every other transition.
    next.en_passant_square = if moved_piece == PieceKind::Pawn && (from / 8).abs_diff(to / 8) == 2 {
        Some((from + to) / 2)
    } else {
        None
    };

    if moved_piece == PieceKind::Pawn || captured_piece.is_some() {
        next.halfmove_clock = 0;
    } else {
        next.halfmove_clock = next.halfmove_clock.saturating_add(1);
    }
    if moving_color == Color::Dark {
        next.fullmove_number = next.fullmove_number.saturating_add(1);
    }

    next.side_to_move = enemy_color;

    Ok(next)
}

#[inline]
pub fn build_move(
    from: Square,
    to: Square,
    moved_piece: PieceKind,
    captured_piece: Option<PieceKind>,
    promotion_piece: Option<PieceKind>,
    flags: u64,
) -> u64 {
    pack_move_description(from, to, moved_piece, captured_piece, promotion_piece, flags)
}

fn move_rook(board: &mut Board, from: Square, to: Square) {
    if let Some(rook) = board.clear(from) {
        board.place(to, rook);
    }
}

fn update_castling_rights(
    game_state: &mut GameState,
    moving_color: Color,
    from: Square,
    to: Square,
    moved_piece: PieceKind,
) {
    if moved_piece == PieceKind::King {
        if moving_color == Color::Light {
            game_state.castling_rights &= !(CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE);
        } else {
            game_state.castling_rights &= !(CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE);
        }
    }

    if moved_piece == PieceKind::Rook {
        match from {
            0 => game_state.castling_rights &= !CASTLE_LIGHT_QUEENSIDE,
            7 => game_state.castling_rights &= !CASTLE_LIGHT_KINGSIDE,
            56 => game_state.castling_rights &= !CASTLE_DARK_QUEENSIDE,
            63 => game_state.castling_rights &= !CASTLE_DARK_KINGSIDE,
            _ => {}
        }
    }

    // Landing on a rook home square also removes rights; this covers the
    // rook-captured case.
    match to {
        0 => game_state.castling_rights &= !CASTLE_LIGHT_QUEENSIDE,
        7 => game_state.castling_rights &= !CASTLE_LIGHT_KINGSIDE,
        56 => game_state.castling_rights &= !CASTLE_DARK_QUEENSIDE,
        63 => game_state.castling_rights &= !CASTLE_DARK_KINGSIDE,
        _ => {}
    }
}
