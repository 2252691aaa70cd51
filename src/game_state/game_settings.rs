//! Game configuration: mode, computer difficulty and player colors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{mobility_weight, ADAPTIVE_NODE_BUDGET};
use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    TwoPlayers,
    ComputerAi,
}

impl TryFrom<u8> for GameMode {
    type Error = ChessErrors;

    fn try_from(value: u8) -> ChessResult<Self> {
        match value {
            1 => Ok(GameMode::TwoPlayers),
            2 => Ok(GameMode::ComputerAi),
            other => Err(ChessErrors::InvalidSetting(format!("game mode {other}"))),
        }
    }
}

/// Who makes the moves for a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerType {
    Human,
    ComputerAi,
}

/// Computer search depth: a fixed depth of 1 to 4 plies, or `Best`, which
/// picks a depth from the material on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Depth(u8),
    Best,
}

impl Difficulty {
    pub const MAX_FIXED_DEPTH: u8 = 4;

    /// Plies to search on `board`.
    ///
    /// `Best` estimates the branching factor as the summed mobility weight of
    /// every piece and picks the deepest search that stays within the node
    /// budget, never less than one ply.
    pub fn search_depth(self, board: &Board) -> u8 {
        match self {
            Difficulty::Depth(depth) => depth.clamp(1, Self::MAX_FIXED_DEPTH),
            Difficulty::Best => {
                let total: u32 = board
                    .pieces()
                    .map(|(_, piece)| mobility_weight(piece.kind))
                    .sum();
                if total <= 1 {
                    return 1;
                }
                let depth = (ADAPTIVE_NODE_BUDGET.log10() / f64::from(total).log10()).floor();
                (depth as u8).max(1)
            }
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Depth(2)
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = ChessErrors;

    fn try_from(depth: u8) -> ChessResult<Self> {
        if (1..=Self::MAX_FIXED_DEPTH).contains(&depth) {
            Ok(Difficulty::Depth(depth))
        } else {
            Err(ChessErrors::InvalidSetting(format!("difficulty {depth}")))
        }
    }
}

impl FromStr for Difficulty {
    type Err = ChessErrors;

    fn from_str(s: &str) -> ChessResult<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("best") {
            return Ok(Difficulty::Best);
        }
        trimmed
            .parse::<u8>()
            .map_err(|_| ChessErrors::InvalidSetting(format!("difficulty {trimmed:?}")))
            .and_then(Difficulty::try_from)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Depth(depth) => write!(f, "{depth}"),
            Difficulty::Best => f.write_str("best"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    pub game_mode: GameMode,
    pub difficulty: Difficulty,
    /// Color the human plays in `ComputerAi` mode.
    pub user_color: Color,
    pub next_player: Color,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            game_mode: GameMode::TwoPlayers,
            difficulty: Difficulty::default(),
            user_color: Color::Light,
            next_player: Color::Light,
        }
    }
}

impl GameSettings {
    pub fn player_type(&self, color: Color) -> PlayerType {
        if self.game_mode == GameMode::TwoPlayers || color == self.user_color {
            PlayerType::Human
        } else {
            PlayerType::ComputerAi
        }
    }
}
