use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::build_move;
use crate::move_generation::legal_move_checks::king_square;
use crate::move_generation::legal_move_shared::KING_OFFSETS;
use crate::moves::move_descriptions::{FLAG_CAPTURE, FLAG_CASTLE_KINGSIDE, FLAG_CASTLE_QUEENSIDE};

/// King steps plus castling candidates.
///
/// Castling is emitted on rights and square emptiness alone; whether the
/// king stands in, passes through, or lands on an attacked square is the
/// legality filter's concern, which keeps this generator check-agnostic.
pub fn generate_king_moves(game_state: &GameState, out: &mut Vec<u64>) {
    let side = game_state.side_to_move;
    let Some(from) = king_square(&game_state.board, side) else {
        return;
    };

    for (d_file, d_rank) in KING_OFFSETS {
        let Some(to) = offset_square(from, d_file, d_rank) else {
            continue;
        };

        match game_state.board.piece_on(to) {
            None => out.push(build_move(from, to, PieceKind::King, None, None, 0)),
            Some(target) if target.color != side => out.push(build_move(
                from,
                to,
                PieceKind::King,
                Some(target.kind),
                None,
                FLAG_CAPTURE,
            )),
            Some(_) => {}
        }
    }

    generate_castling_moves(game_state, out, from);
}

fn generate_castling_moves(game_state: &GameState, out: &mut Vec<u64>, king_from: Square) {
    let rights = game_state.castling_rights;
    let empty = |square: Square| game_state.board.piece_on(square).is_none();

    match game_state.side_to_move {
        Color::Light => {
            if king_from == 4 && (rights & CASTLE_LIGHT_KINGSIDE) != 0 && empty(5) && empty(6) {
                out.push(build_move(
                    4,
                    6,
                    PieceKind::King,
                    None,
                    None,
                    FLAG_CASTLE_KINGSIDE,
                ));
            }
            if king_from == 4
                && (rights & CASTLE_LIGHT_QUEENSIDE) != 0
                && empty(1)
                && empty(2)
                && empty(3)
            {
                out.push(build_move(
                    4,
                    2,
                    PieceKind::King,
                    None,
                    None,
                    FLAG_CASTLE_QUEENSIDE,
                ));
            }
        }
        Color::Dark => {
            if king_from == 60 && (rights & CASTLE_DARK_KINGSIDE) != 0 && empty(61) && empty(62) {
                out.push(build_move(
                    60,
                    62,
                    PieceKind::King,
                    None,
                    None,
                    FLAG_CASTLE_KINGSIDE,
                ));
            }
            if king_from == 60
                && (rights & CASTLE_DARK_QUEENSIDE) != 0
                && empty(57)
                && empty(58)
                && empty(59)
            {
                out.push(build_move(
                    60,
                    58,
                    PieceKind::King,
                    None,
                    None,
                    FLAG_CASTLE_QUEENSIDE,
                ));
            }
        }
    }
}
