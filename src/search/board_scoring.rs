//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Search delegates static scoring to [`BoardScorer`], so alternate
//! heuristics can be swapped in without touching the minimax code. Scores are
//! always from the perspective of the color passed in.

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::move_generation::mate_detection::{is_checkmate, is_stalemate};

/// Score of a checkmate, and the widest search window.
pub const MATE_SCORE: i32 = 50_000;
/// Score of a stalemate.
pub const TIE_SCORE: i32 = 25_000;

/// True for mate and stalemate scores of either sign. Search stops expanding
/// a line once it hits one.
#[inline]
pub const fn is_terminal_score(score: i32) -> bool {
    let magnitude = score.abs();
    magnitude == MATE_SCORE || magnitude == TIE_SCORE
}

pub trait BoardScorer: Send + Sync {
    fn score(&self, board: &Board, color: Color) -> ChessResult<i32>;
}

/// Plain material count.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 400,
        }
    }

    #[inline]
    pub fn material_balance_white_minus_black(board: &Board) -> i32 {
        board
            .pieces()
            .map(|(_, piece)| match piece.color {
                Color::Light => Self::piece_value(piece.kind),
                Color::Dark => -Self::piece_value(piece.kind),
            })
            .sum()
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board, color: Color) -> ChessResult<i32> {
        let white_minus_black = Self::material_balance_white_minus_black(board);
        Ok(match color {
            Color::Light => white_minus_black,
            Color::Dark => -white_minus_black,
        })
    }
}

/// Game-over aware evaluation: mate and stalemate first, material otherwise.
///
/// Checks run in a fixed order: `color` mated, opponent mated, `color`
/// stalemated, opponent stalemated.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutcomeScorer<S = MaterialScorer> {
    pub fallback: S,
}

impl<S: BoardScorer> BoardScorer for OutcomeScorer<S> {
    fn score(&self, board: &Board, color: Color) -> ChessResult<i32> {
        let opponent = color.opposite();
        if is_checkmate(board, color)? {
            return Ok(-MATE_SCORE);
        }
        if is_checkmate(board, opponent)? {
            return Ok(MATE_SCORE);
        }
        if is_stalemate(board, color)? {
            return Ok(-TIE_SCORE);
        }
        if is_stalemate(board, opponent)? {
            return Ok(TIE_SCORE);
        }
        self.fallback.score(board, color)
    }
}

/// Standard evaluation of `board` for `color`.
pub fn evaluate(board: &Board, color: Color) -> ChessResult<i32> {
    OutcomeScorer::<MaterialScorer>::default().score(board, color)
}
