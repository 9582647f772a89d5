use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::build_move;
use crate::moves::move_descriptions::FLAG_CAPTURE;

// Offsets are (d_file, d_rank) pairs fed to `offset_square`.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// First occupied square walking from `from` in the given direction,
/// `None` when the ray exits the board without hitting anything.
pub fn first_piece_along_ray(
    board: &Board,
    from: Square,
    d_file: i8,
    d_rank: i8,
) -> Option<(Square, Piece)> {
    let mut current = from;
    while let Some(next) = offset_square(current, d_file, d_rank) {
        if let Some(piece) = board.piece_on(next) {
            return Some((next, piece));
        }
        current = next;
    }
    None
}

/// Ray-walk move emission shared by the three sliding piece generators:
/// empty squares extend the ray, an enemy piece ends it with a capture, an
/// own piece ends it excluded.
pub fn push_ray_moves(
    game_state: &GameState,
    from: Square,
    moved_piece: PieceKind,
    directions: &[(i8, i8)],
    out: &mut Vec<u64>,
) {
    let side = game_state.side_to_move;

    for &(d_file, d_rank) in directions {
        let mut current = from;
        while let Some(to) = offset_square(current, d_file, d_rank) {
            match game_state.board.piece_on(to) {
                None => out.push(build_move(from, to, moved_piece, None, None, 0)),
                Some(target) if target.color != side => {
                    out.push(build_move(
                        from,
                        to,
                        moved_piece,
                        Some(target.kind),
                        None,
                        FLAG_CAPTURE,
                    ));
                    break;
                }
                Some(_) => break,
            }
            current = to;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_walk_stops_at_first_piece() {
        let mut board = Board::empty();
        board.place(
            35, // d5
            Piece {
                color: Color::Dark,
                kind: PieceKind::Rook,
            },
        );

        let hit = first_piece_along_ray(&board, 3, 0, 1).expect("ray up the d-file should hit");
        assert_eq!(hit.0, 35);
        assert_eq!(hit.1.kind, PieceKind::Rook);

        assert_eq!(first_piece_along_ray(&board, 3, 1, 1), None);
    }
}
