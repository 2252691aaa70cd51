use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::chess_move::{ray_moves, MoveList};

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub fn generate_bishop_moves(
    board: &Board,
    origin: Square,
    color: Color,
    out: &mut MoveList,
) -> ChessResult<()> {
    ray_moves(board, origin, color, &BISHOP_DIRECTIONS, out)
}
