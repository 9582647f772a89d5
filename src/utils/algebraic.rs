//! Square conversions for coordinate notation.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and internal
//! square indices reused by the placement codec and move-text components.

use crate::game_state::chess_types::Square;

/// Convert coordinate notation (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, String> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {square}"));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    let file_index = file - b'a';
    let rank_index = rank - b'1';
    Ok(rank_index * 8 + file_index)
}

/// Convert a square index (`0..=63`) to coordinate notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, String> {
    if square > 63 {
        return Err(format!("Square index out of bounds: {square}"));
    }

    let file = square % 8;
    let rank = square / 8;
    let file_char = char::from(b'a' + file);
    let rank_char = char::from(b'1' + rank);

    Ok(format!("{file_char}{rank_char}"))
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};

    #[test]
    fn round_trip_square_conversions() {
        assert_eq!(algebraic_to_square("a1").expect("a1 should parse"), 0);
        assert_eq!(algebraic_to_square("h8").expect("h8 should parse"), 63);
        assert_eq!(algebraic_to_square("e4").expect("e4 should parse"), 28);
        assert_eq!(square_to_algebraic(0).expect("0 should convert"), "a1");
        assert_eq!(square_to_algebraic(63).expect("63 should convert"), "h8");
    }

    #[test]
    fn malformed_coordinates_are_rejected() {
        assert!(algebraic_to_square("e9").is_err());
        assert!(algebraic_to_square("i4").is_err());
        assert!(algebraic_to_square("e44").is_err());
        assert!(square_to_algebraic(64).is_err());
    }
}
