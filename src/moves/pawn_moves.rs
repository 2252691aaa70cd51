use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, Square, PROMOTION_KINDS};
use crate::moves::chess_move::{push_move, Move, MoveList};

/// Pseudo-legal pawn moves: one step forward onto an empty square, diagonal
/// forward captures of opposing pieces. Moves reaching the last row expand
/// into one move per promotion kind.
pub fn generate_pawn_moves(
    board: &Board,
    origin: Square,
    color: Color,
    out: &mut MoveList,
) -> ChessResult<()> {
    let forward = color.forward_direction();

    if let Some(target) = origin.offset(0, forward) {
        if board.piece_on(target).is_none() {
            push_pawn_move(origin, target, color, out)?;
        }
    }

    for d_column in [-1i8, 1i8] {
        let Some(target) = origin.offset(d_column, forward) else {
            continue;
        };
        if matches!(board.piece_on(target), Some(occupant) if occupant.color != color) {
            push_pawn_move(origin, target, color, out)?;
        }
    }
    Ok(())
}

fn push_pawn_move(
    origin: Square,
    target: Square,
    color: Color,
    out: &mut MoveList,
) -> ChessResult<()> {
    if target.row == color.promotion_row() {
        for kind in PROMOTION_KINDS {
            push_move(out, Move::with_promotion(origin, target, Piece::new(color, kind)))?;
        }
        Ok(())
    } else {
        push_move(out, Move::new(origin, target))
    }
}
