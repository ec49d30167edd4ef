//! Material evaluation

use crate::core::board::{Color, Position};

/// Centipawns per unit of material, for reporting over UCI.
pub const CENTIPAWNS_PER_POINT: i32 = 100;

/// Material balance from White's point of view: the sum of White's piece
/// values minus the sum of Black's.
pub fn material_balance(position: &Position) -> i32 {
    position
        .board
        .iter()
        .flatten()
        .map(|piece| match piece.color {
            Color::White => piece.value(),
            Color::Black => -piece.value(),
        })
        .sum()
}

/// Balance seen from `side`, in centipawns.
pub fn relative_centipawns(balance: i32, side: Color) -> i32 {
    let cp = balance * CENTIPAWNS_PER_POINT;
    match side {
        Color::White => cp,
        Color::Black => -cp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startpos_is_balanced() {
        assert_eq!(material_balance(&Position::startpos()), 0);
    }

    #[test]
    fn missing_black_queen() {
        let position =
            Position::from_fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1").unwrap();
        assert_eq!(material_balance(&position), 9);
        assert_eq!(relative_centipawns(9, Color::Black), -900);
    }
}
