use crate::game_state::chess_types::{Board, Color, PieceKind};

/// Inverse of `parse_placement`: encode a board as the rank-by-rank
/// placement string, ranks listed from rank 8 down to rank 1.
pub fn generate_placement(board: &Board) -> String {
    let mut out = String::new();

    for rank in (0..8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8 {
            let square = (rank * 8 + file) as u8;
            if let Some(piece) = board.piece_on(square) {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece_to_placement_char(piece.color, piece.kind));
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn piece_to_placement_char(color: Color, kind: PieceKind) -> char {
    let base = match kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match color {
        Color::Light => base.to_ascii_uppercase(),
        Color::Dark => base,
    }
}
