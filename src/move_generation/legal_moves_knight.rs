use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::build_move;
use crate::move_generation::legal_move_shared::KNIGHT_OFFSETS;
use crate::moves::move_descriptions::FLAG_CAPTURE;

pub fn generate_knight_moves(game_state: &GameState, out: &mut Vec<u64>) {
    let side = game_state.side_to_move;

    for from in 0..64u8 {
        match game_state.board.piece_on(from) {
            Some(piece) if piece.color == side && piece.kind == PieceKind::Knight => {}
            _ => continue,
        }

        for (d_file, d_rank) in KNIGHT_OFFSETS {
            let Some(to) = offset_square(from, d_file, d_rank) else {
                continue;
            };

            match game_state.board.piece_on(to) {
                None => out.push(build_move(from, to, PieceKind::Knight, None, None, 0)),
                Some(target) if target.color != side => out.push(build_move(
                    from,
                    to,
                    PieceKind::Knight,
                    Some(target.kind),
                    None,
                    FLAG_CAPTURE,
                )),
                Some(_) => {}
            }
        }
    }
}
