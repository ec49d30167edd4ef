//! Pseudo-legal move generation
//!
//! Moves are produced from the piece geometry alone: step tables for knights
//! and kings, ray walks for sliding pieces and the pawn push/capture rules.
//! Whether a move leaves the mover's king attacked is decided later by
//! [`crate::engine::search::is_legal_position`].

use crate::core::board::{Color, PieceType, Position, Square};
use crate::core::moves::{Move, Promotion};

/// (row, file) deltas of a knight jump
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (2, -1),
    (2, 1),
    (1, -2),
    (1, 2),
];

/// (row, file) deltas of a king step
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

pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Generate every move the side to move can make by piece geometry alone.
pub fn pseudo_legal_moves(position: &Position) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    let us = position.active_player;

    for from in Square::all() {
        let piece = match position.piece_at(from) {
            Some(p) if p.color == us => p,
            _ => continue,
        };

        match piece.piece_type {
            PieceType::Pawn => generate_pawn_moves(position, from, us, &mut moves),
            PieceType::Knight => generate_step_moves(position, from, &KNIGHT_OFFSETS, &mut moves),
            PieceType::Bishop => {
                generate_slider_moves(position, from, &DIAGONAL_DIRECTIONS, &mut moves)
            }
            PieceType::Rook => {
                generate_slider_moves(position, from, &ORTHOGONAL_DIRECTIONS, &mut moves)
            }
            PieceType::Queen => {
                generate_slider_moves(position, from, &DIAGONAL_DIRECTIONS, &mut moves);
                generate_slider_moves(position, from, &ORTHOGONAL_DIRECTIONS, &mut moves);
            }
            PieceType::King => generate_step_moves(position, from, &KING_OFFSETS, &mut moves),
        }
    }

    moves
}

/// True when `sq` is empty or holds a piece the side to move may capture.
#[inline]
fn is_enterable(position: &Position, sq: Square) -> bool {
    match position.piece_at(sq) {
        None => true,
        Some(piece) => piece.color != position.active_player,
    }
}

fn generate_step_moves(
    position: &Position,
    from: Square,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(row_delta, file_delta) in offsets {
        if let Some(to) = from.offset(row_delta, file_delta) {
            if is_enterable(position, to) {
                moves.push(Move::new(from, to));
            }
        }
    }
}

fn generate_slider_moves(
    position: &Position,
    from: Square,
    directions: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(row_delta, file_delta) in directions {
        let mut current = from;
        while let Some(to) = current.offset(row_delta, file_delta) {
            match position.piece_at(to) {
                None => moves.push(Move::new(from, to)),
                Some(blocker) => {
                    if blocker.color != position.active_player {
                        moves.push(Move::new(from, to));
                    }
                    break;
                }
            }
            current = to;
        }
    }
}

fn generate_pawn_moves(position: &Position, from: Square, us: Color, moves: &mut Vec<Move>) {
    let forward = us.pawn_direction();
    let mut targets: [Option<Square>; 4] = [None; 4];
    let mut count = 0;

    // Captures need an enemy piece on the diagonal; en passant is not modelled.
    for file_delta in [-1, 1] {
        if let Some(to) = from.offset(forward, file_delta) {
            if position.piece_at(to).is_some_and(|p| p.color != us) {
                targets[count] = Some(to);
                count += 1;
            }
        }
    }

    if let Some(one_step) = from.offset(forward, 0) {
        if position.piece_at(one_step).is_none() {
            targets[count] = Some(one_step);
            count += 1;

            if from.row() == us.pawn_home_row() {
                if let Some(two_step) = one_step.offset(forward, 0) {
                    if position.piece_at(two_step).is_none() {
                        targets[count] = Some(two_step);
                        count += 1;
                    }
                }
            }
        }
    }

    let targets = targets[..count].iter().flatten();
    if from.row() + forward == us.promotion_row() {
        for promotion in Promotion::GENERATION_ORDER {
            for &to in targets.clone() {
                moves.push(Move::with_promotion(from, to, promotion));
            }
        }
    } else {
        moves.extend(targets.map(|&to| Move::new(from, to)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::Piece;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn knight_in_corner_has_two_moves() {
        let mut position = Position::empty();
        position.put_piece(Piece::new(PieceType::Knight, Color::White), Square::A1);
        assert_eq!(pseudo_legal_moves(&position).len(), 2);
    }

    #[test]
    fn rook_on_empty_board_has_fourteen_moves() {
        let mut position = Position::empty();
        position.put_piece(Piece::new(PieceType::Rook, Color::White), sq("e4"));
        assert_eq!(pseudo_legal_moves(&position).len(), 14);
    }

    #[test]
    fn bishop_on_empty_board_has_thirteen_moves() {
        let mut position = Position::empty();
        position.put_piece(Piece::new(PieceType::Bishop, Color::White), sq("e4"));
        assert_eq!(pseudo_legal_moves(&position).len(), 13);
    }

    #[test]
    fn blocked_pawn_cannot_double_push() {
        let mut position = Position::empty();
        position.put_piece(Piece::new(PieceType::Pawn, Color::White), sq("e2"));
        position.put_piece(Piece::new(PieceType::Knight, Color::Black), sq("e3"));
        assert!(pseudo_legal_moves(&position).is_empty());
    }

    #[test]
    fn promotion_order_is_bishop_knight_rook_queen() {
        let mut position = Position::empty();
        position.put_piece(Piece::new(PieceType::Pawn, Color::White), sq("a7"));
        let promotions: Vec<_> = pseudo_legal_moves(&position)
            .iter()
            .map(|m| m.promotion())
            .collect();
        assert_eq!(
            promotions,
            vec![
                Some(Promotion::Bishop),
                Some(Promotion::Knight),
                Some(Promotion::Rook),
                Some(Promotion::Queen)
            ]
        );
    }
}
