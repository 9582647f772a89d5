//! Terminal-status classification.
//!
//! A position with legal moves is ongoing. A position without any is
//! checkmate when the side to move stands in check (that side loses) and
//! stalemate otherwise. Status is a pure function of the state and must be
//! recomputed after every transition; castling-rights and en-passant
//! changes invalidate any cached legal-move set.

use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { loser: Color },
    Stalemate,
}

pub fn game_status<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
) -> MoveGenResult<GameStatus> {
    if !generator.generate_legal_moves(game_state)?.is_empty() {
        return Ok(GameStatus::Ongoing);
    }

    if is_king_in_check(game_state, game_state.side_to_move) {
        Ok(GameStatus::Checkmate {
            loser: game_state.side_to_move,
        })
    } else {
        Ok(GameStatus::Stalemate)
    }
}

#[cfg(test)]
mod tests {
    use super::{game_status, GameStatus};
    use crate::game_state::chess_types::Color;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_checks::{is_king_in_check, king_square};
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;
    use crate::move_generation::move_generator::MoveGenerator;
    use crate::utils::long_algebraic::long_algebraic_to_move_description;

    fn play(game_state: &GameState, moves: &[&str]) -> GameState {
        let mut current = game_state.clone();
        for text in moves {
            let mv = long_algebraic_to_move_description(text, &current)
                .unwrap_or_else(|e| panic!("move {text} should parse: {e}"));
            let legal = LegalMoveGenerator
                .generate_legal_moves(&current)
                .expect("legal move generation should succeed");
            current = legal
                .into_iter()
                .find(|candidate| candidate.move_description == mv)
                .unwrap_or_else(|| panic!("move {text} should be legal"))
                .game_after_move;
        }
        current
    }

    #[test]
    fn startpos_is_ongoing() {
        let game_state = GameState::new_game();
        let status =
            game_status(&LegalMoveGenerator, &game_state).expect("status should evaluate");
        assert_eq!(status, GameStatus::Ongoing);
    }

    #[test]
    fn fools_mate_is_checkmate_against_light() {
        let game_state = GameState::new_game();
        let mated = play(&game_state, &["f2f3", "e7e5", "g2g4", "d8h4"]);

        let status = game_status(&LegalMoveGenerator, &mated).expect("status should evaluate");
        assert_eq!(
            status,
            GameStatus::Checkmate {
                loser: Color::Light
            }
        );
    }

    #[test]
    fn cornered_king_against_queen_is_stalemate() {
        // Dark king a8, light queen b6: every flight square is covered but
        // the king is not in check.
        let mut game_state =
            GameState::from_placement("k7/8/1Q6/8/8/8/8/7K").expect("placement should parse");
        game_state.side_to_move = Color::Dark;

        let status =
            game_status(&LegalMoveGenerator, &game_state).expect("status should evaluate");
        assert_eq!(status, GameStatus::Stalemate);
    }

    #[test]
    fn status_is_idempotent_between_transitions() {
        let game_state = GameState::new_game();
        let position = play(&game_state, &["e2e4", "e7e5"]);

        let first = game_status(&LegalMoveGenerator, &position).expect("status should evaluate");
        let second = game_status(&LegalMoveGenerator, &position).expect("status should evaluate");
        assert_eq!(first, second);
    }

    #[test]
    fn random_playouts_preserve_state_invariants() {
        use rand::prelude::IndexedRandom;

        let mut rng = rand::rng();

        for _game in 0..20 {
            let mut current = GameState::new_game();

            for _ply in 0..120 {
                let status = game_status(&LegalMoveGenerator, &current)
                    .expect("status should evaluate");
                if status != GameStatus::Ongoing {
                    break;
                }

                let legal = LegalMoveGenerator
                    .generate_legal_moves(&current)
                    .expect("legal move generation should succeed");
                let picked = legal
                    .as_slice()
                    .choose(&mut rng)
                    .expect("ongoing positions must offer a move");
                let next = picked.game_after_move.clone();

                // The mover may never end its own turn in check, and both
                // kings survive every legal transition.
                assert!(king_square(&next.board, Color::Light).is_some());
                assert!(king_square(&next.board, Color::Dark).is_some());
                assert!(!is_king_in_check(&next, current.side_to_move));
                assert_eq!(next.side_to_move, current.side_to_move.opposite());

                current = next;
            }
        }
    }
}
