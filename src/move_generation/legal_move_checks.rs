//! Attack and check detection on the mailbox board.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::king_moves::KING_OFFSETS;
use crate::moves::knight_moves::KNIGHT_OFFSETS;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

/// First king of `color` found in column-major order.
#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board
        .pieces_of(color)
        .find(|(_, piece)| piece.kind == PieceKind::King)
        .map(|(square, _)| square)
}

/// True when `color`'s king is attacked. A board without that king is never
/// in check.
#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    let is_attacker = |target: Square, kinds: &[PieceKind]| {
        matches!(
            board.piece_on(target),
            Some(piece) if piece.color == attacker_color && kinds.contains(&piece.kind)
        )
    };

    // A pawn attacks diagonally forward, so look one row behind `square`
    // from the attacker's point of view.
    let pawn_row = -attacker_color.forward_direction();
    for d_column in [-1i8, 1i8] {
        if let Some(from) = square.offset(d_column, pawn_row) {
            if is_attacker(from, &[PieceKind::Pawn]) {
                return true;
            }
        }
    }

    let hits_offset = |offsets: &[(i8, i8)], kind: PieceKind| {
        offsets.iter().any(|&(d_column, d_row)| {
            square
                .offset(d_column, d_row)
                .is_some_and(|from| is_attacker(from, &[kind]))
        })
    };
    if hits_offset(&KNIGHT_OFFSETS, PieceKind::Knight) || hits_offset(&KING_OFFSETS, PieceKind::King)
    {
        return true;
    }

    let hits_ray = |directions: &[(i8, i8)], kinds: &[PieceKind]| {
        directions.iter().any(|&(d_column, d_row)| {
            let mut cursor = square;
            while let Some(next) = cursor.offset(d_column, d_row) {
                if board.piece_on(next).is_some() {
                    return is_attacker(next, kinds);
                }
                cursor = next;
            }
            false
        })
    };
    hits_ray(&ROOK_DIRECTIONS, &[PieceKind::Rook, PieceKind::Queen])
        || hits_ray(&BISHOP_DIRECTIONS, &[PieceKind::Bishop, PieceKind::Queen])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Piece;

    fn board_with(pieces: &[(i8, i8, Color, PieceKind)]) -> Board {
        let mut board = Board::empty();
        for &(column, row, color, kind) in pieces {
            board.place(Square::new(column, row), Some(Piece::new(color, kind)));
        }
        board
    }

    #[test]
    fn start_position_has_no_checks() {
        let board = Board::standard();
        assert!(!is_king_in_check(&board, Color::Light));
        assert!(!is_king_in_check(&board, Color::Dark));
    }

    #[test]
    fn missing_king_is_never_in_check() {
        let board = board_with(&[(0, 0, Color::Dark, PieceKind::Queen)]);
        assert!(!is_king_in_check(&board, Color::Light));
    }

    #[test]
    fn dark_pawn_attacks_light_king_from_above() {
        let board = board_with(&[
            (4, 3, Color::Light, PieceKind::King),
            (5, 4, Color::Dark, PieceKind::Pawn),
        ]);
        assert!(is_king_in_check(&board, Color::Light));

        let behind = board_with(&[
            (4, 3, Color::Light, PieceKind::King),
            (5, 2, Color::Dark, PieceKind::Pawn),
        ]);
        assert!(!is_king_in_check(&behind, Color::Light));
    }

    #[test]
    fn light_pawn_attacks_dark_king_from_below() {
        let board = board_with(&[
            (4, 5, Color::Dark, PieceKind::King),
            (3, 4, Color::Light, PieceKind::Pawn),
        ]);
        assert!(is_king_in_check(&board, Color::Dark));
    }

    #[test]
    fn slider_attack_is_blocked_by_first_piece() {
        let open = board_with(&[
            (0, 0, Color::Light, PieceKind::King),
            (0, 7, Color::Dark, PieceKind::Rook),
        ]);
        assert!(is_king_in_check(&open, Color::Light));

        let blocked = board_with(&[
            (0, 0, Color::Light, PieceKind::King),
            (0, 3, Color::Dark, PieceKind::Knight),
            (0, 7, Color::Dark, PieceKind::Rook),
        ]);
        assert!(!is_king_in_check(&blocked, Color::Light));
    }

    #[test]
    fn rook_does_not_attack_diagonally() {
        let board = board_with(&[
            (0, 0, Color::Light, PieceKind::King),
            (5, 5, Color::Dark, PieceKind::Rook),
        ]);
        assert!(!is_king_in_check(&board, Color::Light));
        let queen = board_with(&[
            (0, 0, Color::Light, PieceKind::King),
            (5, 5, Color::Dark, PieceKind::Queen),
        ]);
        assert!(is_king_in_check(&queen, Color::Light));
    }

    #[test]
    fn knight_and_king_attacks() {
        let board = board_with(&[
            (4, 4, Color::Dark, PieceKind::King),
            (5, 2, Color::Light, PieceKind::Knight),
        ]);
        assert!(is_king_in_check(&board, Color::Dark));
        assert!(is_square_attacked(&board, Square::new(3, 3), Color::Dark));
        assert!(!is_square_attacked(&board, Square::new(2, 2), Color::Dark));
    }
}
