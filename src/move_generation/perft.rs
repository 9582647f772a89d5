//! Move-path enumeration used to validate the generator against published
//! reference counts. Purely a correctness instrument; the asserted depths
//! stay below the first promotion in each reference position so the
//! queen-preset promotion policy cannot alter the totals.

use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenResult, MoveGenerator};
use crate::moves::move_descriptions::{
    move_is_castling, move_promotion_piece_code, FLAG_CAPTURE, FLAG_EN_PASSANT, NO_PIECE_CODE,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
}

pub fn perft<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> MoveGenResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let root_moves = generator.generate_legal_moves(game_state)?;
    let mut total = PerftCounts::default();

    for mv in root_moves {
        perft_recurse(generator, &mv, depth, 1, &mut total)?;
    }

    Ok(total)
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    mv: &GeneratedMove,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) -> MoveGenResult<()> {
    if current_depth == search_depth {
        counts.nodes += 1;

        if (mv.move_description & FLAG_CAPTURE) != 0 {
            counts.captures += 1;
        }
        if (mv.move_description & FLAG_EN_PASSANT) != 0 {
            counts.en_passant += 1;
        }
        if move_is_castling(mv.move_description) {
            counts.castles += 1;
        }
        if move_promotion_piece_code(mv.move_description) != NO_PIECE_CODE {
            counts.promotions += 1;
        }

        return Ok(());
    }

    let moves = generator.generate_legal_moves(&mv.game_after_move)?;
    for child in moves {
        perft_recurse(generator, &child, search_depth, current_depth + 1, counts)?;
    }

    Ok(())
}
