use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::moves::chess_move::MoveList;

/// Seam between move consumers (perft, search) and a generation strategy.
pub trait MoveGenerator: Send + Sync {
    fn generate_moves(&self, board: &Board, color: Color) -> ChessResult<MoveList>;
}
