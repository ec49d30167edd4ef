//! Square attack detection
//!
//! Looks outward from the target square instead of generating the attacker's
//! moves: knight jumps, the first piece on each ray and the two pawn squares.

use super::movegen::{DIAGONAL_DIRECTIONS, KNIGHT_OFFSETS, ORTHOGONAL_DIRECTIONS};
use crate::core::board::{Color, Piece, PieceType, Position, Square};

/// First occupied square reached walking from `from` (exclusive).
fn first_piece_in_direction(
    position: &Position,
    from: Square,
    row_delta: i8,
    file_delta: i8,
) -> Option<Piece> {
    let mut current = from;
    while let Some(next) = current.offset(row_delta, file_delta) {
        if let Some(piece) = position.piece_at(next) {
            return Some(piece);
        }
        current = next;
    }
    None
}

fn slider_hits(
    position: &Position,
    sq: Square,
    directions: &[(i8, i8)],
    slider: PieceType,
    by_color: Color,
) -> bool {
    directions.iter().any(|&(row_delta, file_delta)| {
        first_piece_in_direction(position, sq, row_delta, file_delta).is_some_and(|p| {
            p.color == by_color && (p.piece_type == slider || p.piece_type == PieceType::Queen)
        })
    })
}

fn piece_on(position: &Position, sq: Square, row_delta: i8, file_delta: i8, expected: Piece) -> bool {
    sq.offset(row_delta, file_delta)
        .and_then(|from| position.piece_at(from))
        .is_some_and(|p| p == expected)
}

/// Whether `by_color` has a knight, slider or pawn that could capture on
/// `sq`. Kings are not considered attackers here.
pub fn is_attacked(position: &Position, sq: Square, by_color: Color) -> bool {
    let knight = Piece::new(PieceType::Knight, by_color);
    if KNIGHT_OFFSETS
        .iter()
        .any(|&(dr, df)| piece_on(position, sq, dr, df, knight))
    {
        return true;
    }

    if slider_hits(position, sq, &ORTHOGONAL_DIRECTIONS, PieceType::Rook, by_color) {
        return true;
    }
    if slider_hits(position, sq, &DIAGONAL_DIRECTIONS, PieceType::Bishop, by_color) {
        return true;
    }

    // An attacking pawn sits one row behind the target, from its own point of view.
    let pawn = Piece::new(PieceType::Pawn, by_color);
    let behind = -by_color.pawn_direction();
    piece_on(position, sq, behind, -1, pawn) || piece_on(position, sq, behind, 1, pawn)
}
