//! Checkmate, stalemate and position classification.
//!
//! Checkmate is decided by asking, for every legal move of the side in check,
//! whether any unfiltered reply of the opponent lands on the king afterwards.
//! The side is mated only when every move leaves the king capturable.

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_apply::board_after_move;
use crate::move_generation::legal_move_checks::{is_king_in_check, king_square};
use crate::move_generation::legal_move_generator::{all_moves, PseudoLegalMoveGenerator};
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::chess_move::Move;

/// Game-theoretic state of a position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionState {
    Normal,
    Check,
    Checkmate,
    Stalemate,
}

/// True when some reply of the opponent can capture `color`'s king once `mv`
/// has been played. A board that loses the king counts as capturable.
pub fn king_capturable_after(board: &Board, mv: &Move, color: Color) -> ChessResult<bool> {
    let next = board_after_move(board, mv);
    let Some(king_sq) = king_square(&next, color) else {
        return Ok(true);
    };
    let replies = PseudoLegalMoveGenerator.generate_moves(&next, color.opposite())?;
    Ok(replies.iter().any(|reply| reply.destination == king_sq))
}

/// `color` is in check and no legal move saves the king.
pub fn is_checkmate(board: &Board, color: Color) -> ChessResult<bool> {
    if !is_king_in_check(board, color) {
        return Ok(false);
    }
    for mv in all_moves(board, color, true)? {
        if !king_capturable_after(board, &mv, color)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// `color` is not in check and has no legal move.
pub fn is_stalemate(board: &Board, color: Color) -> ChessResult<bool> {
    if is_king_in_check(board, color) {
        return Ok(false);
    }
    Ok(all_moves(board, color, true)?.is_empty())
}

pub fn classify_position(board: &Board, color: Color) -> ChessResult<PositionState> {
    let in_check = is_king_in_check(board, color);
    let has_moves = !all_moves(board, color, true)?.is_empty();
    Ok(match (in_check, has_moves) {
        (true, false) => PositionState::Checkmate,
        (true, true) => PositionState::Check,
        (false, false) => PositionState::Stalemate,
        (false, true) => PositionState::Normal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Piece, PieceKind, Square};

    fn board_with(pieces: &[(i8, i8, Color, PieceKind)]) -> Board {
        let mut board = Board::empty();
        for &(column, row, color, kind) in pieces {
            board.place(Square::new(column, row), Some(Piece::new(color, kind)));
        }
        board
    }

    fn queen_mate() -> Board {
        // White Ka1, black Qb2 defended by Kc3.
        board_with(&[
            (0, 0, Color::Light, PieceKind::King),
            (1, 1, Color::Dark, PieceKind::Queen),
            (2, 2, Color::Dark, PieceKind::King),
        ])
    }

    fn queen_stalemate() -> Board {
        // White Ka1, black Kc2 and Qb3.
        board_with(&[
            (0, 0, Color::Light, PieceKind::King),
            (2, 1, Color::Dark, PieceKind::King),
            (1, 2, Color::Dark, PieceKind::Queen),
        ])
    }

    #[test]
    fn defended_queen_next_to_king_is_mate() {
        let board = queen_mate();
        assert!(is_checkmate(&board, Color::Light).expect("mate"));
        assert!(!is_stalemate(&board, Color::Light).expect("stalemate"));
        assert_eq!(
            classify_position(&board, Color::Light).expect("classify"),
            PositionState::Checkmate
        );
    }

    #[test]
    fn cornered_king_without_moves_is_stalemate() {
        let board = queen_stalemate();
        assert!(is_stalemate(&board, Color::Light).expect("stalemate"));
        assert!(!is_checkmate(&board, Color::Light).expect("mate"));
        assert_eq!(
            classify_position(&board, Color::Light).expect("classify"),
            PositionState::Stalemate
        );
    }

    #[test]
    fn undefended_queen_can_be_captured() {
        let board = board_with(&[
            (0, 0, Color::Light, PieceKind::King),
            (1, 1, Color::Dark, PieceKind::Queen),
            (7, 7, Color::Dark, PieceKind::King),
        ]);
        assert!(!is_checkmate(&board, Color::Light).expect("mate"));
        assert_eq!(
            classify_position(&board, Color::Light).expect("classify"),
            PositionState::Check
        );
    }

    #[test]
    fn mate_and_stalemate_are_exclusive() {
        for board in [Board::standard(), queen_mate(), queen_stalemate()] {
            for color in [Color::Light, Color::Dark] {
                let mate = is_checkmate(&board, color).expect("mate");
                let stale = is_stalemate(&board, color).expect("stalemate");
                assert!(!(mate && stale));
            }
        }
    }

    #[test]
    fn king_capture_probe_sees_hanging_king() {
        let board = board_with(&[
            (0, 0, Color::Light, PieceKind::King),
            (2, 7, Color::Dark, PieceKind::Rook),
            (7, 7, Color::Dark, PieceKind::King),
        ]);
        let safe_step = Move::new(Square::new(0, 0), Square::new(1, 0));
        let onto_rook_file = Move::new(Square::new(0, 0), Square::new(2, 0));
        assert!(!king_capturable_after(&board, &safe_step, Color::Light).expect("probe"));
        assert!(king_capturable_after(&board, &onto_rook_file, Color::Light).expect("probe"));
    }
}
