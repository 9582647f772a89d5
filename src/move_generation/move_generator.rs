use std::error::Error;
use std::fmt;

use crate::game_state::game_state::GameState;

pub type MoveGenResult<T> = Result<T, MoveGenerationError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveGenerationError {
    InvalidState(String),
}

impl fmt::Display for MoveGenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveGenerationError::InvalidState(msg) => write!(f, "invalid game state: {msg}"),
        }
    }
}

impl Error for MoveGenerationError {}

/// A legal move together with the successor state the legality filter
/// already computed while vetting it. Callers commit the move by taking
/// `game_after_move`.
#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub move_description: u64,
    pub game_after_move: GameState,
}

/// Seam between the rules core and its consumers. The set carries no
/// ordering guarantee; callers must not depend on enumeration order.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState) -> MoveGenResult<Vec<GeneratedMove>>;
}
