use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::chess_move::MoveList;
use crate::moves::rook_moves::generate_rook_moves;

/// Queen moves are the rook moves followed by the bishop moves.
pub fn generate_queen_moves(
    board: &Board,
    origin: Square,
    color: Color,
    out: &mut MoveList,
) -> ChessResult<()> {
    generate_rook_moves(board, origin, color, out)?;
    generate_bishop_moves(board, origin, color, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queen_on_d4_has_twenty_seven_targets() {
        let mut out = MoveList::new();
        generate_queen_moves(&Board::empty(), Square::new(3, 3), Color::Dark, &mut out)
            .expect("generation");
        assert_eq!(out.len(), 27);
    }
}
