//! Long algebraic coordinate parsing (`e4`, `e2e3`, `a7a8q`).
//!
//! Formatting goes through the `Display` impls of `Square` and `Move`.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::moves::chess_move::Move;

/// Convert long algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    Ok(Square::new((file - b'a') as i8, (rank - b'1') as i8))
}

/// Parse a move such as "e2e3" or "a7a8q".
///
/// The promotion piece takes the color whose pawns promote on the
/// destination row.
pub fn parse_long_algebraic(text: &str) -> ChessResult<Move> {
    let text = text.trim();
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(ChessErrors::InvalidAlgebraicString(text.to_owned()));
    }

    let origin = algebraic_to_square(&text[0..2])?;
    let destination = algebraic_to_square(&text[2..4])?;
    let Some(suffix) = text[4..].chars().next() else {
        return Ok(Move::new(origin, destination));
    };

    let kind = match suffix.to_ascii_lowercase() {
        'q' => PieceKind::Queen,
        'r' => PieceKind::Rook,
        'b' => PieceKind::Bishop,
        'n' => PieceKind::Knight,
        _ => return Err(ChessErrors::InvalidAlgebraicString(text.to_owned())),
    };
    let color = if destination.row == Color::Light.promotion_row() {
        Color::Light
    } else if destination.row == Color::Dark.promotion_row() {
        Color::Dark
    } else {
        return Err(ChessErrors::InvalidAlgebraicString(text.to_owned()));
    };
    Ok(Move::with_promotion(origin, destination, Piece::new(color, kind)))
}
