use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::chess_move::{ray_moves, MoveList};

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub fn generate_rook_moves(
    board: &Board,
    origin: Square,
    color: Color,
    out: &mut MoveList,
) -> ChessResult<()> {
    ray_moves(board, origin, color, &ROOK_DIRECTIONS, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Piece, PieceKind};

    #[test]
    fn rook_on_empty_board_has_fourteen_targets() {
        let mut out = MoveList::new();
        generate_rook_moves(&Board::empty(), Square::new(3, 3), Color::Light, &mut out)
            .expect("generation");
        assert_eq!(out.len(), 14);
    }

    #[test]
    fn rook_ray_stops_at_first_piece() {
        let mut board = Board::empty();
        let origin = Square::new(0, 0);
        board.place(Square::new(0, 2), Some(Piece::new(Color::Dark, PieceKind::Knight)));
        board.place(Square::new(2, 0), Some(Piece::new(Color::Light, PieceKind::Bishop)));

        let mut out = MoveList::new();
        generate_rook_moves(&board, origin, Color::Light, &mut out).expect("generation");
        let targets: Vec<Square> = out.iter().map(|mv| mv.destination).collect();
        assert_eq!(
            targets,
            vec![Square::new(0, 1), Square::new(0, 2), Square::new(1, 0)]
        );
    }
}
