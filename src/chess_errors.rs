//! Errors used throughout the chess engine.
//!
//! This module defines the canonical error type returned by the board setup
//! API, the game controller, move generation and search. `ChessErrors` is the
//! single error type across the crate so failures propagate with `?` from the
//! lowest layer (move-list allocation) up to the controller.
//!
//! Usage guidelines:
//! - Setup and move-entry variants (`InvalidBoardPosition`, `InvalidPiece`,
//!   `IllegalMove`, `PawnPromotionRequired`, `IllegalBoardInitialization`)
//!   describe caller input the controller refused. The game state is left
//!   exactly as it was before the call.
//! - `MoveListAllocation` is the only variant that can surface from deep
//!   inside generation or search; callers normally just propagate it.
//! - Successful controller outcomes (check, checkmate, tie) are not errors;
//!   see [`crate::move_status::MoveStatus`].

use thiserror::Error;

use crate::game_state::chess_types::Square;
use crate::moves::chess_move::Move;

/// Unified error type for the chess engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// A square outside the 8x8 board was supplied, or a pawn was placed on
    /// its own promotion row during setup.
    ///
    /// Payload: the offending square.
    #[error("invalid board position {0}")]
    InvalidBoardPosition(Square),

    /// The origin square does not hold a piece belonging to the side to move.
    ///
    /// Payload: the origin square that was inspected.
    #[error("no piece of the side to move on {0}")]
    InvalidPiece(Square),

    /// The origin/destination pair is not in the side to move's legal list.
    #[error("illegal move {0}")]
    IllegalMove(Move),

    /// A setup mutation exceeded a per-kind piece limit, or a game was started
    /// without both kings on the board.
    ///
    /// Payload: human-readable reason for diagnostics.
    #[error("illegal board initialization: {0}")]
    IllegalBoardInitialization(String),

    /// A pawn move reaches the last row but carries no promotion piece.
    #[error("pawn move {0} requires a promotion piece")]
    PawnPromotionRequired(Move),

    /// An unrecognised game-mode or difficulty value was supplied.
    ///
    /// Payload: the rejected input.
    #[error("invalid game setting: {0}")]
    InvalidSetting(String),

    /// A square or move in long algebraic notation failed to parse.
    ///
    /// Payload: the original text.
    #[error("invalid algebraic string {0:?}")]
    InvalidAlgebraicString(String),

    /// A move list could not grow.
    #[error("failed to allocate move list")]
    MoveListAllocation,

    /// A perft worker thread panicked before reporting its subtree.
    #[error("perft worker thread panicked")]
    WorkerPanicked,

    /// No legal moves are available for the side asked to move (used when a
    /// computer move is requested in a finished position).
    #[error("no legal moves available")]
    NoLegalMoves,
}

/// Result alias used by every fallible engine operation.
pub type ChessResult<T> = Result<T, ChessErrors>;
