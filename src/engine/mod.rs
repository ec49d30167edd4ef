//! Chess engine components
//!
//! This module contains the rules and move selection:
//! - Pseudo-legal move generation
//! - Attack detection for king safety
//! - Material evaluation
//! - Legality filter and one-ply greedy selection

pub mod attacks;
pub mod error;
pub mod eval;
pub mod movegen;
pub mod search;

pub use attacks::is_attacked;
pub use error::EngineError;
pub use eval::material_balance;
pub use movegen::pseudo_legal_moves;
pub use search::{is_legal_position, legal_moves, perft, select_move, Engine, SearchResult};
