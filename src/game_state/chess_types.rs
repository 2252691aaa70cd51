//! Primitive value types shared by every engine layer.
//!
//! Colors, piece kinds, colored pieces and board squares live here. They are
//! all small `Copy` values; nothing in this module refers back into a board.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Side of a piece or side to move. `Light` plays from rows 0/1 (white),
/// `Dark` from rows 6/7 (black).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Row delta of a single pawn step for this color.
    #[inline]
    pub const fn forward_direction(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }

    /// Row on which this color's pawns promote.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Color::Light => 7,
            Color::Dark => 0,
        }
    }

    /// Row holding this color's back rank in the standard setup.
    #[inline]
    pub const fn home_row(self) -> i8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => write!(f, "White"),
            Color::Dark => write!(f, "Black"),
        }
    }
}

/// Piece kind (color is carried separately by [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        )
    }
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

/// Kinds a pawn may become, in the order promotion moves are generated.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// A colored piece. An empty square is `Option::<Piece>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Letter used in long algebraic promotion suffixes and FEN-like dumps:
    /// upper case for light, lower case for dark.
    pub const fn symbol(self) -> char {
        let lower = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match self.color {
            Color::Light => lower.to_ascii_uppercase(),
            Color::Dark => lower,
        }
    }
}

/// Board coordinate. Column 0 is file a, row 0 is rank 1.
///
/// Fields are signed so off-board coordinates can be represented and
/// rejected by the board API instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub column: i8,
    pub row: i8,
}

impl Square {
    #[inline]
    pub const fn new(column: i8, row: i8) -> Self {
        Self { column, row }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.column >= 0 && self.column < 8 && self.row >= 0 && self.row < 8
    }

    /// Shift by `(d_column, d_row)`; `None` when the result leaves the board.
    #[inline]
    pub const fn offset(self, d_column: i8, d_row: i8) -> Option<Square> {
        let next = Square::new(self.column + d_column, self.row + d_row);
        if next.is_on_board() {
            Some(next)
        } else {
            None
        }
    }

    /// Every on-board square, column-major (a1, a2, ..., h8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8i8).flat_map(|column| (0..8i8).map(move |row| Square::new(column, row)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            let file = char::from(b'a' + self.column as u8);
            let rank = char::from(b'1' + self.row as u8);
            write!(f, "{file}{rank}")
        } else {
            write!(f, "({},{})", self.column, self.row)
        }
    }
}
