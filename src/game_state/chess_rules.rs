//! Canonical chess-rule constants.
//!
//! This module stores static rule-related literals such as the standard
//! starting placement used to initialize and validate game state setup.

/// Standard starting placement, ranks listed from rank 8 down to rank 1.
pub const STARTING_POSITION_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";
