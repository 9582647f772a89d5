use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{
    first_piece_along_ray, BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRECTIONS,
};

pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    (0..64u8).find(|&square| {
        board.piece_on(square)
            == Some(Piece {
                color,
                kind: PieceKind::King,
            })
    })
}

/// Whether `color`'s king currently stands attacked. A board without that
/// king reports `false`; the legality filter treats the missing-king case
/// separately.
#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = king_square(&game_state.board, color) else {
        return false;
    };
    is_square_attacked(&game_state.board, king_sq, color.opposite())
}

/// Could a piece of `attacker_color` capture on `square` right now?
///
/// Probes outward from the target square: the two pawn-attack origins,
/// knight offsets, king adjacency, then diagonal and orthogonal rays for
/// the sliders. Independent of whose turn it is.
pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    // A pawn attacks from one rank behind its target, relative to its own
    // direction of travel.
    let pawn_origin_rank_delta: i8 = match attacker_color {
        Color::Light => -1,
        Color::Dark => 1,
    };
    for d_file in [-1i8, 1i8] {
        if let Some(origin) = offset_square(square, d_file, pawn_origin_rank_delta) {
            if board.piece_on(origin)
                == Some(Piece {
                    color: attacker_color,
                    kind: PieceKind::Pawn,
                })
            {
                return true;
            }
        }
    }

    for (d_file, d_rank) in KNIGHT_OFFSETS {
        if let Some(origin) = offset_square(square, d_file, d_rank) {
            if board.piece_on(origin)
                == Some(Piece {
                    color: attacker_color,
                    kind: PieceKind::Knight,
                })
            {
                return true;
            }
        }
    }

    for (d_file, d_rank) in KING_OFFSETS {
        if let Some(origin) = offset_square(square, d_file, d_rank) {
            if board.piece_on(origin)
                == Some(Piece {
                    color: attacker_color,
                    kind: PieceKind::King,
                })
            {
                return true;
            }
        }
    }

    for (d_file, d_rank) in BISHOP_DIRECTIONS {
        if let Some((_, piece)) = first_piece_along_ray(board, square, d_file, d_rank) {
            if piece.color == attacker_color
                && matches!(piece.kind, PieceKind::Bishop | PieceKind::Queen)
            {
                return true;
            }
        }
    }

    for (d_file, d_rank) in ROOK_DIRECTIONS {
        if let Some((_, piece)) = first_piece_along_ray(board, square, d_file, d_rank) {
            if piece.color == attacker_color
                && matches!(piece.kind, PieceKind::Rook | PieceKind::Queen)
            {
                return true;
            }
        }
    }

    false
}
