//! Core chess types and representations
//!
//! This module contains the fundamental building blocks of the chess engine:
//! - Board state and position
//! - Move encoding and coordinate notation
//! - FEN import/export

pub mod board;
pub mod fen;
pub mod moves;

pub use board::{Color, Piece, PieceType, Position, Square};
pub use moves::{Move, Promotion};
