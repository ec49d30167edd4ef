//! FEN import and export
//!
//! Parsing goes through shakmaty's FEN reader. Only piece placement and side
//! to move are kept, since castling rights, en passant and the move clocks
//! have no counterpart in [`Position`].

use super::board::{Color, Piece, PieceType, Position, Square, BOARD_SIZE};
use shakmaty::fen::Fen;

fn from_shakmaty_piece(piece: shakmaty::Piece) -> Piece {
    let piece_type = match piece.role {
        shakmaty::Role::Pawn => PieceType::Pawn,
        shakmaty::Role::Knight => PieceType::Knight,
        shakmaty::Role::Bishop => PieceType::Bishop,
        shakmaty::Role::Rook => PieceType::Rook,
        shakmaty::Role::Queen => PieceType::Queen,
        shakmaty::Role::King => PieceType::King,
    };
    let color = match piece.color {
        shakmaty::Color::White => Color::White,
        shakmaty::Color::Black => Color::Black,
    };
    Piece::new(piece_type, color)
}

impl Position {
    /// Parse a position from FEN notation
    pub fn from_fen(fen: &str) -> Result<Self, String> {
        let parsed: Fen = fen
            .trim()
            .parse()
            .map_err(|e| format!("Invalid FEN '{}': {}", fen.trim(), e))?;
        let setup = parsed.into_setup();

        let mut position = Position::empty();
        for sq in shakmaty::Square::ALL {
            if let Some(piece) = setup.board.piece_at(sq) {
                position.put_piece(from_shakmaty_piece(piece), Square::new(sq as u8));
            }
        }
        position.active_player = match setup.turn {
            shakmaty::Color::White => Color::White,
            shakmaty::Color::Black => Color::Black,
        };
        Ok(position)
    }

    /// Convert the position to FEN notation. Castling and en passant fields
    /// are always empty.
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        for row in (0..BOARD_SIZE).rev() {
            let mut empty = 0;
            for file in 0..BOARD_SIZE {
                match Square::from_row_file(row, file).and_then(|sq| self.piece_at(sq)) {
                    Some(piece) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(piece.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if row > 0 {
                fen.push('/');
            }
        }

        fen.push_str(match self.active_player {
            Color::White => " w",
            Color::Black => " b",
        });
        fen.push_str(" - - 0 1");
        fen
    }
}
