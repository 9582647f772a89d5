//! Full legal move generation pipeline.
//!
//! Orchestrates piece-wise pseudo-legal generation, applies candidate
//! moves, and filters the outcomes that leave the mover's own king
//! attacked. Castling additionally gets its transit squares vetted here,
//! since the generic post-move check only sees the king's final square.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::{is_square_attacked, king_square};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::{
    GeneratedMove, MoveGenResult, MoveGenerationError, MoveGenerator,
};
use crate::moves::move_descriptions::{move_from, move_is_castling, move_to};

pub struct LegalMoveGenerator;

/// Every move consistent with piece movement and occupancy, before any
/// king-safety filtering.
pub fn pseudo_legal_moves(game_state: &GameState) -> Vec<u64> {
    let mut out = Vec::<u64>::with_capacity(128);

    generate_pawn_moves(game_state, &mut out);
    generate_knight_moves(game_state, &mut out);
    generate_bishop_moves(game_state, &mut out);
    generate_rook_moves(game_state, &mut out);
    generate_queen_moves(game_state, &mut out);
    generate_king_moves(game_state, &mut out);

    out
}

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> MoveGenResult<Vec<GeneratedMove>> {
        let mover = game_state.side_to_move;
        let enemy = mover.opposite();

        let pseudo = pseudo_legal_moves(game_state);
        let mut legal = Vec::<GeneratedMove>::with_capacity(pseudo.len());

        for mv in pseudo {
            let next = apply_move(game_state, mv).map_err(|x| {
                MoveGenerationError::InvalidState(format!("apply_move failed: {x}"))
            })?;

            // A mover without a king has no playable moves at all.
            let Some(king_sq) = king_square(&next.board, mover) else {
                continue;
            };
            if is_square_attacked(&next.board, king_sq, enemy) {
                continue;
            }

            if move_is_castling(mv) && !castling_path_is_safe(game_state, mv) {
                continue;
            }

            legal.push(GeneratedMove {
                move_description: mv,
                game_after_move: next,
            });
        }

        Ok(legal)
    }
}

/// May not castle out of, through, or into check: the king's own square,
/// the one-step square, and the destination must all be safe on the
/// pre-move board. For the queen side that covers both squares the king
/// transits (d- and c-file for Light); the b-file square only had to be
/// empty.
fn castling_path_is_safe(game_state: &GameState, move_description: u64) -> bool {
    let from = move_from(move_description);
    let to = move_to(move_description);
    let enemy = game_state.side_to_move.opposite();

    let step: i8 = if to > from { 1 } else { -1 };
    let transit = (from as i8 + step) as Square;

    for square in [from, transit, to] {
        if is_square_attacked(&game_state.board, square, enemy) {
            return false;
        }
    }

    true
}
