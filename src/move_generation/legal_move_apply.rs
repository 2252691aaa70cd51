//! Pure move application.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceKind};
use crate::moves::chess_move::Move;

/// Copy of `board` with `mv` played.
///
/// The origin is emptied and the destination receives the moving piece (any
/// occupant is captured). A pawn arriving on its promotion row becomes the
/// move's promotion piece, or a queen when none was given. The move is not
/// validated.
pub fn board_after_move(board: &Board, mv: &Move) -> Board {
    let mut next = board.clone();
    apply_move_in_place(&mut next, mv);
    next
}

/// In-place variant of [`board_after_move`] for callers that already own a
/// scratch board.
pub fn apply_move_in_place(board: &mut Board, mv: &Move) {
    let moving = board.piece_on(mv.origin);
    let landing = match moving {
        Some(piece)
            if piece.kind == PieceKind::Pawn
                && mv.destination.row == piece.color.promotion_row() =>
        {
            Some(
                mv.promotion
                    .unwrap_or_else(|| Piece::new(piece.color, PieceKind::Queen)),
            )
        }
        other => other,
    };
    board.place(mv.origin, None);
    board.place(mv.destination, landing);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, Square};

    #[test]
    fn move_leaves_source_board_untouched() {
        let board = Board::standard();
        let mv = Move::new(Square::new(6, 0), Square::new(5, 2));
        let next = board_after_move(&board, &mv);
        assert_eq!(board, Board::standard());
        assert_eq!(next.piece_on(Square::new(6, 0)), None);
        assert_eq!(
            next.piece_on(Square::new(5, 2)),
            Some(Piece::new(Color::Light, PieceKind::Knight))
        );
    }

    #[test]
    fn capture_replaces_occupant() {
        let mut board = Board::empty();
        board.place(Square::new(3, 0), Some(Piece::new(Color::Light, PieceKind::Rook)));
        board.place(Square::new(3, 4), Some(Piece::new(Color::Dark, PieceKind::Knight)));
        let next = board_after_move(&board, &Move::new(Square::new(3, 0), Square::new(3, 4)));
        assert_eq!(
            next.piece_on(Square::new(3, 4)),
            Some(Piece::new(Color::Light, PieceKind::Rook))
        );
        assert_eq!(next.pieces().count(), 1);
    }

    #[test]
    fn pawn_without_promotion_piece_becomes_queen() {
        let mut board = Board::empty();
        board.place(Square::new(2, 1), Some(Piece::new(Color::Dark, PieceKind::Pawn)));
        let next = board_after_move(&board, &Move::new(Square::new(2, 1), Square::new(2, 0)));
        assert_eq!(
            next.piece_on(Square::new(2, 0)),
            Some(Piece::new(Color::Dark, PieceKind::Queen))
        );
    }

    #[test]
    fn pawn_takes_requested_promotion_piece() {
        let mut board = Board::empty();
        board.place(Square::new(0, 6), Some(Piece::new(Color::Light, PieceKind::Pawn)));
        let knight = Piece::new(Color::Light, PieceKind::Knight);
        let mv = Move::with_promotion(Square::new(0, 6), Square::new(0, 7), knight);
        assert_eq!(board_after_move(&board, &mv).piece_on(Square::new(0, 7)), Some(knight));
    }
}
