pub mod core;
pub mod engine;
pub mod uci;

pub use self::core::{Color, Move, Piece, PieceType, Position, Promotion, Square};
pub use engine::{Engine, EngineError, SearchResult};
pub use uci::UCI;
