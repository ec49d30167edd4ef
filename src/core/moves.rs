//! Move representation
//!
//! Moves are encoded in a compact 16-bit format:
//! - bits 0-5: from square (0-63)
//! - bits 6-11: to square (0-63)
//! - bits 12-14: promotion offset from pawn (0 = none, 1 = knight ... 4 = queen)

use super::board::{PieceType, Square};
use std::fmt;

/// Piece a pawn turns into on the far row
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Promotion {
    Knight,
    Bishop,
    Rook,
    Queen,
}

impl Promotion {
    /// Order in which the generator offers promotions.
    pub const GENERATION_ORDER: [Promotion; 4] = [
        Promotion::Bishop,
        Promotion::Knight,
        Promotion::Rook,
        Promotion::Queen,
    ];

    #[inline]
    pub const fn piece_type(self) -> PieceType {
        match self {
            Promotion::Knight => PieceType::Knight,
            Promotion::Bishop => PieceType::Bishop,
            Promotion::Rook => PieceType::Rook,
            Promotion::Queen => PieceType::Queen,
        }
    }

    /// Distance of the target type from `PieceType::Pawn`.
    #[inline]
    pub const fn offset(self) -> u8 {
        self.piece_type() as u8 - PieceType::Pawn as u8
    }

    #[inline]
    pub const fn from_offset(offset: u8) -> Option<Self> {
        match offset {
            1 => Some(Promotion::Knight),
            2 => Some(Promotion::Bishop),
            3 => Some(Promotion::Rook),
            4 => Some(Promotion::Queen),
            _ => None,
        }
    }

    pub const fn to_char(self) -> char {
        self.piece_type().to_char()
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'n' => Some(Promotion::Knight),
            'b' => Some(Promotion::Bishop),
            'r' => Some(Promotion::Rook),
            'q' => Some(Promotion::Queen),
            _ => None,
        }
    }
}

/// A chess move encoded in 16 bits
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u16);

impl Move {
    const FROM_MASK: u16 = 0x003F;
    const TO_MASK: u16 = 0x0FC0;
    const TO_SHIFT: u16 = 6;
    const PROMO_MASK: u16 = 0x7000;
    const PROMO_SHIFT: u16 = 12;

    /// Create a non-promoting move
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move((from.0 as u16) | ((to.0 as u16) << Self::TO_SHIFT))
    }

    /// Create a promotion move
    #[inline]
    pub const fn with_promotion(from: Square, to: Square, promotion: Promotion) -> Self {
        Move(Self::new(from, to).0 | ((promotion.offset() as u16) << Self::PROMO_SHIFT))
    }

    #[inline]
    pub const fn from(self) -> Square {
        Square((self.0 & Self::FROM_MASK) as u8)
    }

    #[inline]
    pub const fn to(self) -> Square {
        Square(((self.0 & Self::TO_MASK) >> Self::TO_SHIFT) as u8)
    }

    #[inline]
    pub const fn promotion(self) -> Option<Promotion> {
        Promotion::from_offset(self.promotion_offset())
    }

    /// Raw promotion offset, 0 when the move does not promote
    #[inline]
    pub const fn promotion_offset(self) -> u8 {
        ((self.0 & Self::PROMO_MASK) >> Self::PROMO_SHIFT) as u8
    }

    /// Convert to UCI notation (e.g., "e2e4", "e7e8q")
    pub fn to_uci(self) -> String {
        let mut s = self.from().to_algebraic();
        s.push_str(&self.to().to_algebraic());
        if let Some(promotion) = self.promotion() {
            s.push(promotion.to_char());
        }
        s
    }

    /// Parse a move from coordinate notation.
    ///
    /// Accepts plain UCI text ("e2e4", "e7e8q") as well as a leading piece
    /// letter ("Ng1f3") and a capture marker between the squares ("e4xd5").
    pub fn from_notation(s: &str) -> Result<Self, String> {
        let mut rest = s.trim();
        if !rest.is_ascii() {
            return Err(format!("Invalid move '{}': non-ASCII text", s));
        }

        if let Some(first) = rest.chars().next().filter(|c| c.is_ascii_uppercase()) {
            if PieceType::from_char(first).is_none() {
                return Err(format!("Invalid move '{}': unknown piece '{}'", s, first));
            }
            rest = &rest[1..];
        }

        let from = rest
            .get(0..2)
            .and_then(Square::from_algebraic)
            .ok_or_else(|| format!("Invalid move '{}': bad origin square", s))?;
        rest = &rest[2..];

        if let Some(stripped) = rest.strip_prefix('x') {
            rest = stripped;
        }

        let to = rest
            .get(0..2)
            .and_then(Square::from_algebraic)
            .ok_or_else(|| format!("Invalid move '{}': bad destination square", s))?;
        rest = &rest[2..];

        let mut chars = rest.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Ok(Move::new(from, to)),
            (Some(c), None) => Promotion::from_char(c)
                .map(|promotion| Move::with_promotion(from, to, promotion))
                .ok_or_else(|| format!("Invalid move '{}': unknown promotion '{}'", s, c)),
            _ => Err(format!("Invalid move '{}': trailing characters", s)),
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}

impl std::str::FromStr for Move {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::from_notation(s)
    }
}
