use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::chess_move::{step_moves, MoveList};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub fn generate_knight_moves(
    board: &Board,
    origin: Square,
    color: Color,
    out: &mut MoveList,
) -> ChessResult<()> {
    step_moves(board, origin, color, &KNIGHT_OFFSETS, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knight_on_d4_has_eight_targets() {
        let mut out = MoveList::new();
        generate_knight_moves(&Board::empty(), Square::new(3, 3), Color::Light, &mut out)
            .expect("generation");
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn knight_in_start_position_has_two_targets() {
        let mut out = MoveList::new();
        generate_knight_moves(&Board::standard(), Square::new(1, 0), Color::Light, &mut out)
            .expect("generation");
        assert_eq!(out.len(), 2);
    }
}
