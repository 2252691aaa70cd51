//! Full move generation pipeline.
//!
//! Dispatches per-piece pseudo-legal generation and, when asked, drops every
//! move that leaves the mover's own king in check.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::move_generation::legal_move_apply::board_after_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::chess_move::MoveList;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;

/// Legal moves (self-check filtered).
#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator;

/// Pseudo-legal moves; used where only reachability matters, e.g. asking
/// whether any reply can land on a king.
#[derive(Debug, Clone, Copy, Default)]
pub struct PseudoLegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_moves(&self, board: &Board, color: Color) -> ChessResult<MoveList> {
        all_moves(board, color, true)
    }
}

impl MoveGenerator for PseudoLegalMoveGenerator {
    fn generate_moves(&self, board: &Board, color: Color) -> ChessResult<MoveList> {
        all_moves(board, color, false)
    }
}

/// Moves of the piece on `square`.
///
/// Fails with `InvalidBoardPosition` for off-board squares and `InvalidPiece`
/// when the square does not hold a piece of `color`.
pub fn moves_for_square(
    board: &Board,
    square: Square,
    color: Color,
    filter_self_check: bool,
) -> ChessResult<MoveList> {
    let piece = board
        .piece_at(square)?
        .filter(|piece| piece.color == color)
        .ok_or(ChessErrors::InvalidPiece(square))?;

    let mut out = MoveList::new();
    piece_moves(board, square, piece, &mut out)?;
    if filter_self_check {
        retain_king_safe(board, color, &mut out);
    }
    Ok(out)
}

/// Every move of `color`, scanning the board column by column.
pub fn all_moves(board: &Board, color: Color, filter_self_check: bool) -> ChessResult<MoveList> {
    let mut out = MoveList::new();
    for (square, piece) in board.pieces_of(color) {
        piece_moves(board, square, piece, &mut out)?;
    }
    if filter_self_check {
        retain_king_safe(board, color, &mut out);
    }
    Ok(out)
}

fn piece_moves(board: &Board, square: Square, piece: Piece, out: &mut MoveList) -> ChessResult<()> {
    let color = piece.color;
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, square, color, out),
        PieceKind::Knight => generate_knight_moves(board, square, color, out),
        PieceKind::Bishop => generate_bishop_moves(board, square, color, out),
        PieceKind::Rook => generate_rook_moves(board, square, color, out),
        PieceKind::Queen => generate_queen_moves(board, square, color, out),
        PieceKind::King => generate_king_moves(board, square, color, out),
    }
}

/// Drop moves after which `color`'s king is in check.
fn retain_king_safe(board: &Board, color: Color, moves: &mut MoveList) {
    moves.retain(|mv| !is_king_in_check(&board_after_move(board, mv), color));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: &mut Board, column: i8, row: i8, color: Color, kind: PieceKind) {
        board.place(Square::new(column, row), Some(Piece::new(color, kind)));
    }

    #[test]
    fn start_position_has_twelve_moves_for_each_side() {
        let board = Board::standard();
        assert_eq!(all_moves(&board, Color::Light, true).expect("moves").len(), 12);
        assert_eq!(all_moves(&board, Color::Dark, true).expect("moves").len(), 12);
    }

    #[test]
    fn generation_is_repeatable() {
        let board = Board::standard();
        let first = all_moves(&board, Color::Light, true).expect("moves");
        let second = all_moves(&board, Color::Light, true).expect("moves");
        assert_eq!(first, second);
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        let mut board = Board::empty();
        place(&mut board, 4, 0, Color::Light, PieceKind::King);
        place(&mut board, 4, 1, Color::Light, PieceKind::Knight);
        place(&mut board, 4, 7, Color::Dark, PieceKind::Rook);
        place(&mut board, 0, 7, Color::Dark, PieceKind::King);

        let pseudo = moves_for_square(&board, Square::new(4, 1), Color::Light, false)
            .expect("moves");
        assert!(!pseudo.is_empty());
        let legal = moves_for_square(&board, Square::new(4, 1), Color::Light, true)
            .expect("moves");
        assert!(legal.is_empty());
    }

    #[test]
    fn legal_moves_never_leave_own_king_in_check() {
        let mut board = Board::empty();
        place(&mut board, 3, 3, Color::Light, PieceKind::King);
        place(&mut board, 3, 6, Color::Dark, PieceKind::Rook);
        place(&mut board, 6, 6, Color::Dark, PieceKind::Bishop);
        place(&mut board, 7, 7, Color::Dark, PieceKind::King);

        let legal = all_moves(&board, Color::Light, true).expect("moves");
        assert!(!legal.is_empty());
        for mv in &legal {
            assert!(!is_king_in_check(&board_after_move(&board, mv), Color::Light));
        }
        let pseudo = all_moves(&board, Color::Light, false).expect("moves");
        assert!(legal.len() < pseudo.len());
    }

    #[test]
    fn moves_for_square_validates_origin() {
        let board = Board::standard();
        assert_eq!(
            moves_for_square(&board, Square::new(-1, 0), Color::Light, true),
            Err(ChessErrors::InvalidBoardPosition(Square::new(-1, 0)))
        );
        assert_eq!(
            moves_for_square(&board, Square::new(4, 4), Color::Light, true),
            Err(ChessErrors::InvalidPiece(Square::new(4, 4)))
        );
        assert_eq!(
            moves_for_square(&board, Square::new(4, 6), Color::Light, true),
            Err(ChessErrors::InvalidPiece(Square::new(4, 6)))
        );
    }
}
