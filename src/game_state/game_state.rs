//! Immutable snapshot of a chess position.
//!
//! `GameState` is the central model for the rules core. It stores the
//! mailbox board, turn flag, castling rights, en-passant target, and move
//! clocks. States are never mutated in place: the only way to obtain a
//! successor is `legal_move_apply::apply_move`, which clones and rebuilds,
//! so callers retaining old values get an undo history for free.

use crate::game_state::chess_rules::STARTING_POSITION_PLACEMENT;
use crate::game_state::chess_types::*;
use crate::utils::placement_parser::parse_placement;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,

    // --- Side and state flags ---
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    // --- Clocks / move counters ---
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl GameState {
    #[inline]
    pub fn new_game() -> Self {
        Self {
            board: parse_placement(STARTING_POSITION_PLACEMENT)
                .expect("starting placement should always parse"),
            side_to_move: Color::Light,
            castling_rights: CASTLE_ALL_RIGHTS,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Seed a position from a bare placement string. Side to move defaults
    /// to Light and no castling right or en-passant target is assumed;
    /// fixtures set those fields explicitly since piece placement alone
    /// cannot establish move history.
    pub fn from_placement(placement: &str) -> Result<Self, String> {
        Ok(Self {
            board: parse_placement(placement)?,
            side_to_move: Color::Light,
            castling_rights: 0,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        })
    }
}
