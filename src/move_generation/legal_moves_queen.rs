use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{push_ray_moves, BISHOP_DIRECTIONS, ROOK_DIRECTIONS};

pub fn generate_queen_moves(game_state: &GameState, out: &mut Vec<u64>) {
    let side = game_state.side_to_move;

    for from in 0..64u8 {
        match game_state.board.piece_on(from) {
            Some(piece) if piece.color == side && piece.kind == PieceKind::Queen => {}
            _ => continue,
        }

        push_ray_moves(game_state, from, PieceKind::Queen, &BISHOP_DIRECTIONS, out);
        push_ray_moves(game_state, from, PieceKind::Queen, &ROOK_DIRECTIONS, out);
    }
}
