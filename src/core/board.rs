//! Chess board representation
//!
//! A position is a plain 64-entry mailbox plus the side to move. Squares are
//! indexed `row * 8 + file`, with White starting on the low rows.

use super::moves::Move;
use std::fmt;

pub const BOARD_SIZE: i8 = 8;
pub const NUM_SQUARES: usize = 64;

/// Square representation (0-63, a1=0, h8=63)
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
pub struct Square(pub u8);

impl Square {
    pub const A1: Square = Square(0);
    pub const E1: Square = Square(4);
    pub const H1: Square = Square(7);
    pub const E8: Square = Square(60);
    pub const H8: Square = Square(63);

    #[inline]
    pub const fn new(sq: u8) -> Self {
        Square(sq)
    }

    /// Build a square from signed coordinates, `None` when off the board.
    #[inline]
    pub const fn from_row_file(row: i8, file: i8) -> Option<Self> {
        if row < 0 || row >= BOARD_SIZE || file < 0 || file >= BOARD_SIZE {
            None
        } else {
            Some(Square((row * BOARD_SIZE + file) as u8))
        }
    }

    #[inline]
    pub const fn row(self) -> i8 {
        (self.0 >> 3) as i8
    }

    #[inline]
    pub const fn file(self) -> i8 {
        (self.0 & 7) as i8
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Step by a row/file delta without wrapping around the board edge.
    #[inline]
    pub const fn offset(self, row_delta: i8, file_delta: i8) -> Option<Self> {
        Square::from_row_file(self.row() + row_delta, self.file() + file_delta)
    }

    /// Parse a square from algebraic notation (e.g., "e4")
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].wrapping_sub(b'a');
        let row = bytes[1].wrapping_sub(b'1');
        if file < 8 && row < 8 {
            Some(Square(row * 8 + file))
        } else {
            None
        }
    }

    /// Convert to algebraic notation
    pub fn to_algebraic(self) -> String {
        let file = (b'a' + self.file() as u8) as char;
        let row = (b'1' + self.row() as u8) as char;
        format!("{}{}", file, row)
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..NUM_SQUARES as u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

/// Piece color
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn step
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Row pawns start on (and may double push from)
    #[inline]
    pub const fn pawn_home_row(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Row on which pawns promote
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Color;
    fn not(self) -> Self::Output {
        self.opposite()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Piece type. Discriminants are contiguous from 1 so a promotion can be
/// described as an offset from `Pawn`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum PieceType {
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];

    /// Material value used by the greedy evaluation. The king counts for
    /// nothing.
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            PieceType::Pawn => 1,
            PieceType::Knight | PieceType::Bishop => 3,
            PieceType::Rook => 5,
            PieceType::Queen => 9,
            PieceType::King => 0,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceType::Pawn),
            'n' => Some(PieceType::Knight),
            'b' => Some(PieceType::Bishop),
            'r' => Some(PieceType::Rook),
            'q' => Some(PieceType::Queen),
            'k' => Some(PieceType::King),
            _ => None,
        }
    }
}

/// A colored piece
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(piece_type: PieceType, color: Color) -> Self {
        Piece { piece_type, color }
    }

    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Same piece type for the other side.
    #[inline]
    pub const fn toggle_color(self) -> Self {
        Piece::new(self.piece_type, self.color.opposite())
    }

    #[inline]
    pub const fn value(self) -> i32 {
        self.piece_type.value()
    }

    #[inline]
    pub fn is(self, piece_type: PieceType, color: Color) -> bool {
        self.piece_type == piece_type && self.color == color
    }

    /// Uppercase for white, lowercase for black
    pub fn to_char(self) -> char {
        let c = self.piece_type.to_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        let piece_type = PieceType::from_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(piece_type, color))
    }
}

const BACK_ROW: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// Board contents and side to move. Cheap to copy; move simulation works on
/// copies.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub active_player: Color,
    pub board: [Option<Piece>; NUM_SQUARES],
}

impl Position {
    /// An empty board with White to move
    pub const fn empty() -> Self {
        Position {
            active_player: Color::White,
            board: [None; NUM_SQUARES],
        }
    }

    /// The standard starting layout, White on rows 0 and 1
    pub fn startpos() -> Self {
        let mut position = Position::empty();
        for (file, &piece_type) in BACK_ROW.iter().enumerate() {
            let white = Piece::new(piece_type, Color::White);
            position.board[file] = Some(white);
            position.board[56 + file] = Some(white.toggle_color());
            position.board[8 + file] = Some(Piece::new(PieceType::Pawn, Color::White));
            position.board[48 + file] = Some(Piece::new(PieceType::Pawn, Color::Black));
        }
        position
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board[sq.index()]
    }

    #[inline]
    pub fn put_piece(&mut self, piece: Piece, sq: Square) {
        self.board[sq.index()] = Some(piece);
    }

    #[inline]
    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        self.board[sq.index()].take()
    }

    /// First square holding this color's king, scanning from a1.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| {
            self.piece_at(sq)
                .is_some_and(|p| p.is(PieceType::King, color))
        })
    }

    /// Apply a move in place and hand the turn to the other side.
    ///
    /// No legality is checked: whatever stands on the origin square is moved
    /// (promoted if the move says so) and anything on the destination is
    /// overwritten.
    pub fn play_move(&mut self, mv: Move) {
        let piece = self.remove_piece(mv.from()).map(|piece| match mv.promotion() {
            Some(promotion) => Piece::new(promotion.piece_type(), piece.color),
            None => piece,
        });
        self.board[mv.to().index()] = piece;
        self.active_player = !self.active_player;
    }

    /// Like [`Position::play_move`], but refuses moves whose origin does not
    /// hold a piece of the side to move.
    pub fn try_play_move(&mut self, mv: Move) -> Result<(), String> {
        match self.piece_at(mv.from()) {
            Some(piece) if piece.color == self.active_player => {
                self.play_move(mv);
                Ok(())
            }
            Some(_) => Err(format!(
                "{} moves a piece that does not belong to {}",
                mv, self.active_player
            )),
            None => Err(format!("{} starts on an empty square", mv)),
        }
    }

    /// Position reached from the starting layout after playing notated moves.
    pub fn from_notation_moves<'a, I>(moves: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut position = Position::startpos();
        for text in moves {
            position.try_play_move(Move::from_notation(text)?)?;
        }
        Ok(position)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::startpos()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for row in (0..BOARD_SIZE).rev() {
            write!(f, "  {} ", row + 1)?;
            for file in 0..BOARD_SIZE {
                match Square::from_row_file(row, file).and_then(|sq| self.piece_at(sq)) {
                    Some(piece) => write!(f, "{} ", piece.to_char())?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "    a b c d e f g h")?;
        writeln!(f)?;
        writeln!(f, "  FEN: {}", self.to_fen())?;
        Ok(())
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
