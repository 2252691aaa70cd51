//! Move value type plus the helpers every per-piece generator shares.
//!
//! A [`Move`] is origin, destination and an optional promotion piece. Move
//! lists are plain vectors that grow through [`push_move`], so an allocation
//! failure becomes [`ChessErrors::MoveListAllocation`] instead of an abort.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub origin: Square,
    pub destination: Square,
    pub promotion: Option<Piece>,
}

impl Move {
    #[inline]
    pub const fn new(origin: Square, destination: Square) -> Self {
        Self {
            origin,
            destination,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(origin: Square, destination: Square, promotion: Piece) -> Self {
        Self {
            origin,
            destination,
            promotion: Some(promotion),
        }
    }

    /// True when both moves travel between the same squares, ignoring
    /// the promotion piece.
    #[inline]
    pub fn same_path(&self, other: &Move) -> bool {
        self.origin == other.origin && self.destination == other.destination
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.origin, self.destination)?;
        if let Some(piece) = self.promotion {
            write!(f, "{}", piece.symbol().to_ascii_lowercase())?;
        }
        Ok(())
    }
}

pub type MoveList = Vec<Move>;

/// Append `mv`, reporting allocation failure as a chess error.
#[inline]
pub fn push_move(out: &mut MoveList, mv: Move) -> ChessResult<()> {
    out.try_reserve(1)
        .map_err(|_| ChessErrors::MoveListAllocation)?;
    out.push(mv);
    Ok(())
}

/// Single-step targets (knight and king): each on-board offset that is empty
/// or holds an opposing piece.
pub(crate) fn step_moves(
    board: &Board,
    origin: Square,
    color: Color,
    offsets: &[(i8, i8)],
    out: &mut MoveList,
) -> ChessResult<()> {
    for &(d_column, d_row) in offsets {
        let Some(target) = origin.offset(d_column, d_row) else {
            continue;
        };
        match board.piece_on(target) {
            Some(occupant) if occupant.color == color => {}
            _ => push_move(out, Move::new(origin, target))?,
        }
    }
    Ok(())
}

/// Slider targets: walk each direction until the edge, stopping after the
/// first occupied square (included only when it holds an opponent).
pub(crate) fn ray_moves(
    board: &Board,
    origin: Square,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut MoveList,
) -> ChessResult<()> {
    for &(d_column, d_row) in directions {
        let mut cursor = origin;
        while let Some(target) = cursor.offset(d_column, d_row) {
            match board.piece_on(target) {
                None => push_move(out, Move::new(origin, target))?,
                Some(occupant) => {
                    if occupant.color != color {
                        push_move(out, Move::new(origin, target))?;
                    }
                    break;
                }
            }
            cursor = target;
        }
    }
    Ok(())
}
