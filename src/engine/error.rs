//! Faults surfaced by the engine

use crate::core::board::Color;
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EngineError {
    /// `best_move` was called before any position was entered.
    NoPosition,
    /// The position has no king of the given color, so king safety cannot
    /// be judged.
    MissingKing(Color),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::NoPosition => write!(f, "no position has been entered"),
            EngineError::MissingKing(color) => write!(f, "position has no {} king", color),
        }
    }
}

impl std::error::Error for EngineError {}
