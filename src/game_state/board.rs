//! Mailbox board representation.
//!
//! The board is an 8x8 array of optional pieces indexed `[column][row]`.
//! Setup mutations go through [`Board::set_piece`] / [`Board::remove_piece`],
//! which validate coordinates and per-kind piece limits; move application
//! uses the crate-private [`Board::place`] and never validates.

use std::fmt;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::{max_pieces_of_kind, BOARD_SIZE, STANDARD_BACK_RANK};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square, ALL_PIECE_KINDS};
use crate::utils::render_game_state::render_board;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn standard() -> Self {
        let mut board = Self::empty();
        board.initialize_standard();
        board
    }

    /// Reset to the standard starting array: back ranks on rows 0 and 7,
    /// pawns on rows 1 and 6.
    pub fn initialize_standard(&mut self) {
        self.clear();
        for color in [Color::Light, Color::Dark] {
            let home = color.home_row();
            let pawn_row = home + color.forward_direction();
            for (column, kind) in STANDARD_BACK_RANK.iter().enumerate() {
                let column = column as i8;
                self.place(Square::new(column, home), Some(Piece::new(color, *kind)));
                self.place(
                    Square::new(column, pawn_row),
                    Some(Piece::new(color, PieceKind::Pawn)),
                );
            }
        }
    }

    pub fn clear(&mut self) {
        self.squares = [[None; BOARD_SIZE]; BOARD_SIZE];
    }

    /// Occupant of `square`; `None` for empty or off-board squares.
    #[inline]
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        if square.is_on_board() {
            self.squares[square.column as usize][square.row as usize]
        } else {
            None
        }
    }

    /// Occupant of `square`, rejecting off-board coordinates.
    pub fn piece_at(&self, square: Square) -> ChessResult<Option<Piece>> {
        if !square.is_on_board() {
            return Err(ChessErrors::InvalidBoardPosition(square));
        }
        Ok(self.piece_on(square))
    }

    /// Unchecked write used by move application and setup. Off-board writes
    /// are ignored.
    #[inline]
    pub(crate) fn place(&mut self, square: Square, piece: Option<Piece>) {
        if square.is_on_board() {
            self.squares[square.column as usize][square.row as usize] = piece;
        }
    }

    /// Put `piece` on `square`, replacing any occupant.
    ///
    /// Rejects off-board squares and pawns on their own promotion row with
    /// `InvalidBoardPosition`. If the placement pushes the piece's color over
    /// the limit for its kind the board is rolled back and
    /// `IllegalBoardInitialization` is returned.
    pub fn set_piece(&mut self, square: Square, piece: Piece) -> ChessResult<()> {
        if !square.is_on_board() {
            warn!("rejected placement of {:?} on off-board square {square}", piece);
            return Err(ChessErrors::InvalidBoardPosition(square));
        }
        if piece.kind == PieceKind::Pawn && square.row == piece.color.promotion_row() {
            warn!("rejected {} pawn on its promotion row at {square}", piece.color);
            return Err(ChessErrors::InvalidBoardPosition(square));
        }

        let previous = self.piece_on(square);
        self.place(square, Some(piece));

        let count = self.count_pieces(piece.color, piece.kind);
        let limit = max_pieces_of_kind(piece.kind);
        if count > limit {
            self.place(square, previous);
            warn!(
                "rejected {:?}: {} would have {count} of a maximum {limit}",
                piece.kind, piece.color
            );
            return Err(ChessErrors::IllegalBoardInitialization(format!(
                "{} may hold at most {limit} {:?}",
                piece.color, piece.kind
            )));
        }
        Ok(())
    }

    /// Clear `square`, returning whatever stood there.
    pub fn remove_piece(&mut self, square: Square) -> ChessResult<Option<Piece>> {
        let previous = self.piece_at(square)?;
        self.place(square, None);
        Ok(previous)
    }

    /// Copy every square of `other` verbatim. No limit validation is done;
    /// this is the restore path for saved games.
    pub fn load_complete(&mut self, other: &Board) {
        self.squares = other.squares;
    }

    /// Occupied squares, column-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.piece_on(square).map(|piece| (square, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn count_pieces(&self, color: Color, kind: PieceKind) -> u8 {
        self.pieces_of(color)
            .filter(|(_, piece)| piece.kind == kind)
            .count() as u8
    }

    /// True when neither side exceeds any per-kind limit.
    pub fn respects_piece_limits(&self) -> bool {
        [Color::Light, Color::Dark].into_iter().all(|color| {
            ALL_PIECE_KINDS
                .into_iter()
                .all(|kind| self.count_pieces(color, kind) <= max_pieces_of_kind(kind))
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}
