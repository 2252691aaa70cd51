//! Engine abstraction used by the game controller.
//!
//! An engine receives a board, the side to move and a search depth, and
//! answers with a chosen move plus the diagnostics that led to it.

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::moves::chess_move::{Move, MoveList};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub best_score: Option<i32>,
    /// Every move the engine considered equally good.
    pub candidates: MoveList,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn choose_move(&mut self, board: &Board, color: Color, depth: u8)
        -> ChessResult<EngineOutput>;
}
