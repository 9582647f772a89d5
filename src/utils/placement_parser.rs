//! Placement-string-to-Board parser.
//!
//! Decodes the rank-by-rank piece placement used to seed games and test
//! fixtures: eight rank descriptions separated by `/`, listed from rank 8
//! down to rank 1, with digit runs for consecutive empty squares. Malformed
//! input is surfaced to the caller, never silently patched.

use crate::game_state::chess_types::{Board, Color, Piece, PieceKind};

pub fn parse_placement(placement: &str) -> Result<Board, String> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err("Board layout must contain 8 ranks".to_owned());
    }

    let mut board = Board::empty();

    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7usize.saturating_sub(rank_idx);
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                let step = usize::try_from(empty_count).map_err(|_| "Digit conversion failed")?;
                if !(1..=8).contains(&step) {
                    return Err(format!("Invalid empty-square count '{ch}'"));
                }
                file += step;
                continue;
            }

            let piece = piece_from_placement_char(ch)
                .ok_or_else(|| format!("Invalid piece character '{ch}' in board layout"))?;

            if file >= 8 {
                return Err("Board rank has too many files".to_owned());
            }

            board.place((board_rank * 8 + file) as u8, piece);
            file += 1;
        }

        if file != 8 {
            return Err("Board rank does not sum to 8 files".to_owned());
        }
    }

    Ok(board)
}

fn piece_from_placement_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece { color, kind })
}
