//! Serializable picture of a game in progress.
//!
//! The crate does not define a file format; a snapshot is the hand-off value
//! a front end serializes however it likes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::game_state::board::Board;
use crate::game_state::game_settings::GameSettings;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Board,
    pub settings: GameSettings,
    pub saved_at: DateTime<Utc>,
}

impl GameSnapshot {
    pub fn capture(board: &Board, settings: &GameSettings) -> Self {
        Self {
            board: board.clone(),
            settings: *settings,
            saved_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Color;
    use crate::game_state::game_settings::{Difficulty, GameMode};

    #[test]
    fn snapshot_survives_json_round_trip() {
        let settings = GameSettings {
            game_mode: GameMode::ComputerAi,
            difficulty: Difficulty::Best,
            user_color: Color::Dark,
            next_player: Color::Dark,
        };
        let snapshot = GameSnapshot::capture(&Board::standard(), &settings);

        let json = serde_json::to_string(&snapshot).expect("serialize snapshot");
        let restored: GameSnapshot = serde_json::from_str(&json).expect("deserialize snapshot");
        assert_eq!(restored, snapshot);
    }
}
