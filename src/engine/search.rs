//! Legality filter and one-ply move selection
//!
//! The engine does not search in depth. Every pseudo-legal move is played on a
//! copy of the position and scored by the material left on the board; the
//! candidates are ordered greedily for the side to move and the first one
//! that does not leave the mover's king attacked is chosen.

use super::attacks::is_attacked;
use super::error::EngineError;
use super::eval::material_balance;
use super::movegen::pseudo_legal_moves;
use crate::core::board::{Color, Position};
use crate::core::moves::Move;
use std::cmp::Reverse;

/// Outcome of a call to [`Engine::search`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` when no legal move exists.
    pub best_move: Option<Move>,
    /// Material balance (White minus Black) after `best_move`, or of the
    /// current position when there is no move.
    pub score: i32,
    /// Candidates simulated and checked for legality.
    pub nodes: u64,
}

/// Checks the position reached after a move: the side that just moved
/// (`!active_player`) must not have left its king attacked. Kings do not
/// count as attackers, so a king may step next to the enemy king.
pub fn is_legal_position(position: &Position) -> Result<bool, EngineError> {
    let mover = !position.active_player;
    let king = position
        .king_square(mover)
        .ok_or(EngineError::MissingKing(mover))?;
    Ok(!is_attacked(position, king, position.active_player))
}

fn require_king(position: &Position) -> Result<(), EngineError> {
    let us = position.active_player;
    match position.king_square(us) {
        Some(_) => Ok(()),
        None => Err(EngineError::MissingKing(us)),
    }
}

/// Pseudo-legal moves that pass [`is_legal_position`], in generation order.
pub fn legal_moves(position: &Position) -> Result<Vec<Move>, EngineError> {
    require_king(position)?;
    let mut moves = Vec::new();
    for mv in pseudo_legal_moves(position) {
        let mut next = *position;
        next.play_move(mv);
        if is_legal_position(&next)? {
            moves.push(mv);
        }
    }
    Ok(moves)
}

/// Count the leaf nodes of the legal move tree
pub fn perft(position: &Position, depth: u32) -> Result<u64, EngineError> {
    if depth == 0 {
        return Ok(1);
    }
    let moves = legal_moves(position)?;
    if depth == 1 {
        return Ok(moves.len() as u64);
    }
    let mut nodes = 0;
    for mv in moves {
        let mut next = *position;
        next.play_move(mv);
        nodes += perft(&next, depth - 1)?;
    }
    Ok(nodes)
}

/// Greedy one-ply selection for a position.
pub fn select_move(position: &Position) -> Result<SearchResult, EngineError> {
    require_king(position)?;

    let mut candidates: Vec<(Move, Position, i32)> = pseudo_legal_moves(position)
        .into_iter()
        .map(|mv| {
            let mut next = *position;
            next.play_move(mv);
            (mv, next, material_balance(&next))
        })
        .collect();

    // Stable sort: equal scores keep generation order.
    match position.active_player {
        Color::White => candidates.sort_by_key(|&(_, _, score)| Reverse(score)),
        Color::Black => candidates.sort_by_key(|&(_, _, score)| score),
    }

    let mut nodes = 0;
    for (mv, next, score) in candidates {
        nodes += 1;
        if is_legal_position(&next)? {
            return Ok(SearchResult {
                best_move: Some(mv),
                score,
                nodes,
            });
        }
    }

    Ok(SearchResult {
        best_move: None,
        score: material_balance(position),
        nodes,
    })
}

/// Engine front object. Holds the position entered by the controller and
/// answers best-move requests without modifying it.
#[derive(Clone, Debug, Default)]
pub struct Engine {
    current_position: Option<Position>,
}

impl Engine {
    pub fn new() -> Self {
        Engine {
            current_position: None,
        }
    }

    pub fn enter_position(&mut self, position: &Position) {
        self.current_position = Some(*position);
    }

    pub fn position(&self) -> Option<&Position> {
        self.current_position.as_ref()
    }

    /// Called before `best_move` by the controller. The selection is
    /// immediate, so there is nothing to start.
    pub fn start_search(&mut self) {}

    pub fn search(&self) -> Result<SearchResult, EngineError> {
        let position = self
            .current_position
            .as_ref()
            .ok_or(EngineError::NoPosition)?;
        select_move(position)
    }

    /// The chosen move, `None` when the side to move has no legal move.
    pub fn best_move(&self) -> Result<Option<Move>, EngineError> {
        self.search().map(|result| result.best_move)
    }
}
