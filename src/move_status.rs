use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of a successful move or game start, reported for the side that
/// must answer it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveStatus {
    /// The move was applied; the game goes on normally.
    MoveSuccessful,
    /// The side to answer is in check but has a way out.
    Check,
    /// The side to answer is checkmated.
    CheckMate,
    /// The side to answer has no legal moves and is not in check.
    GameTie,
}

impl MoveStatus {
    #[inline]
    pub const fn is_game_over(self) -> bool {
        matches!(self, MoveStatus::CheckMate | MoveStatus::GameTie)
    }
}

impl fmt::Display for MoveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MoveStatus::MoveSuccessful => "move successful",
            MoveStatus::Check => "check",
            MoveStatus::CheckMate => "checkmate",
            MoveStatus::GameTie => "game tie",
        };
        f.write_str(label)
    }
}
