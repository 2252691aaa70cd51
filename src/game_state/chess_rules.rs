//! Canonical chess-rule constants.
//!
//! Static rule literals: the standard back rank, per-kind piece limits that
//! setup mutations must respect, and the mobility weights behind the adaptive
//! search depth.

use crate::game_state::chess_types::PieceKind;

pub const BOARD_SIZE: usize = 8;

/// Back rank of the standard starting position, from file a to file h.
pub const STANDARD_BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Maximum number of pieces of `kind` one side may hold during setup.
#[inline]
pub const fn max_pieces_of_kind(kind: PieceKind) -> u8 {
    match kind {
        PieceKind::Pawn => 8,
        PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook => 2,
        PieceKind::Queen | PieceKind::King => 1,
    }
}

/// Rough upper bound on the moves a piece of `kind` can have. Summed over the
/// board it estimates the branching factor for [`ADAPTIVE_NODE_BUDGET`].
#[inline]
pub const fn mobility_weight(kind: PieceKind) -> u32 {
    match kind {
        PieceKind::Pawn => 3,
        PieceKind::Knight => 8,
        PieceKind::Bishop => 14,
        PieceKind::Rook => 14,
        PieceKind::Queen => 27,
        PieceKind::King => 8,
    }
}

/// Node budget the adaptive ("best") difficulty aims to stay within.
pub const ADAPTIVE_NODE_BUDGET: f64 = 1_000_000.0;
