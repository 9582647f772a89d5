use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::build_move;
use crate::moves::move_descriptions::{FLAG_CAPTURE, FLAG_DOUBLE_PAWN_PUSH, FLAG_EN_PASSANT};

/// Pawn pushes, double pushes, captures, and en-passant captures.
///
/// Promoting moves are emitted once with the promotion piece preset to
/// Queen; callers wanting an underpromotion override the piece on the
/// packed move before applying.
pub fn generate_pawn_moves(game_state: &GameState, out: &mut Vec<u64>) {
    let side = game_state.side_to_move;
    let forward: i8 = match side {
        Color::Light => 1,
        Color::Dark => -1,
    };
    let start_rank: Square = match side {
        Color::Light => 1,
        Color::Dark => 6,
    };
    let promotion_rank: Square = match side {
        Color::Light => 7,
        Color::Dark => 0,
    };

    for from in 0..64u8 {
        match game_state.board.piece_on(from) {
            Some(piece) if piece.color == side && piece.kind == PieceKind::Pawn => {}
            _ => continue,
        }

        // Forward pushes.
        if let Some(to) = offset_square(from, 0, forward) {
            if game_state.board.piece_on(to).is_none() {
                if to / 8 == promotion_rank {
                    out.push(build_move(
                        from,
                        to,
                        PieceKind::Pawn,
                        None,
                        Some(PieceKind::Queen),
                        0,
                    ));
                } else {
                    out.push(build_move(from, to, PieceKind::Pawn, None, None, 0));

                    if from / 8 == start_rank {
                        if let Some(two_step) = offset_square(from, 0, 2 * forward) {
                            if game_state.board.piece_on(two_step).is_none() {
                                out.push(build_move(
                                    from,
                                    two_step,
                                    PieceKind::Pawn,
                                    None,
                                    None,
                                    FLAG_DOUBLE_PAWN_PUSH,
                                ));
                            }
                        }
                    }
                }
            }
        }

        // Diagonal captures and en-passant.
        for d_file in [-1i8, 1i8] {
            let Some(to) = offset_square(from, d_file, forward) else {
                continue;
            };

            match game_state.board.piece_on(to) {
                Some(target) if target.color != side => {
                    let promotion_piece = if to / 8 == promotion_rank {
                        Some(PieceKind::Queen)
                    } else {
                        None
                    };
                    out.push(build_move(
                        from,
                        to,
                        PieceKind::Pawn,
                        Some(target.kind),
                        promotion_piece,
                        FLAG_CAPTURE,
                    ));
                }
                Some(_) => {}
                None => {
                    if game_state.en_passant_square == Some(to) {
                        out.push(build_move(
                            from,
                            to,
                            PieceKind::Pawn,
                            Some(PieceKind::Pawn),
                            None,
                            FLAG_CAPTURE | FLAG_EN_PASSANT,
                        ));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::chess_types::{Color, PieceKind};
    use crate::game_state::game_state::GameState;
    use crate::moves::move_descriptions::{
        move_from, move_promotion_piece_code, move_to, piece_kind_from_code,
        FLAG_DOUBLE_PAWN_PUSH, FLAG_EN_PASSANT,
    };

    #[test]
    fn startpos_pawns_have_sixteen_moves() {
        let game_state = GameState::new_game();
        let mut out = Vec::new();
        generate_pawn_moves(&game_state, &mut out);

        assert_eq!(out.len(), 16);
        let double_pushes = out
            .iter()
            .filter(|mv| (*mv & FLAG_DOUBLE_PAWN_PUSH) != 0)
            .count();
        assert_eq!(double_pushes, 8);
    }

    #[test]
    fn blocked_pawn_generates_nothing() {
        // Light pawn on e2 blocked by a dark rook on e3.
        let game_state = GameState::from_placement("4k3/8/8/8/8/4r3/4P3/4K3")
            .expect("placement should parse");
        let mut out = Vec::new();
        generate_pawn_moves(&game_state, &mut out);

        assert!(out.is_empty(), "blocked pawn should have no moves");
    }

    #[test]
    fn double_push_requires_both_squares_empty() {
        // Light pawn on e2, dark knight on e4: single push only.
        let game_state = GameState::from_placement("4k3/8/8/8/4n3/8/4P3/4K3")
            .expect("placement should parse");
        let mut out = Vec::new();
        generate_pawn_moves(&game_state, &mut out);

        assert_eq!(out.len(), 1);
        assert_eq!(move_to(out[0]), 20); // e3
    }

    #[test]
    fn en_passant_capture_is_generated_onto_the_target() {
        // Light pawn e5, dark pawn d5 just double-pushed past d6.
        let mut game_state = GameState::from_placement("4k3/8/8/3pP3/8/8/8/4K3")
            .expect("placement should parse");
        game_state.en_passant_square = Some(43); // d6

        let mut out = Vec::new();
        generate_pawn_moves(&game_state, &mut out);

        let en_passant: Vec<u64> = out
            .iter()
            .copied()
            .filter(|mv| (mv & FLAG_EN_PASSANT) != 0)
            .collect();
        assert_eq!(en_passant.len(), 1);
        assert_eq!(move_from(en_passant[0]), 36); // e5
        assert_eq!(move_to(en_passant[0]), 43); // d6
    }

    #[test]
    fn promotion_push_presets_queen_only() {
        let mut game_state =
            GameState::from_placement("4k3/P7/8/8/8/8/8/4K3").expect("placement should parse");
        game_state.side_to_move = Color::Light;

        let mut out = Vec::new();
        generate_pawn_moves(&game_state, &mut out);

        assert_eq!(out.len(), 1);
        assert_eq!(
            piece_kind_from_code(move_promotion_piece_code(out[0])),
            Some(PieceKind::Queen)
        );
    }
}
