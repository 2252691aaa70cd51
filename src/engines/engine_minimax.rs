use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::search::minimax::{best_moves, SearchRules, StandardRules};

/// Minimax engine that breaks ties between equally scored moves at random.
#[derive(Debug, Clone)]
pub struct MinimaxEngine<R = StandardRules> {
    rules: R,
    rng: StdRng,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self::with_rules(StandardRules::default(), StdRng::from_os_rng())
    }

    /// Deterministic tie-breaking, for tests and reproducible self-play.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rules(StandardRules::default(), StdRng::seed_from_u64(seed))
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: SearchRules> MinimaxEngine<R> {
    pub fn with_rules(rules: R, rng: StdRng) -> Self {
        Self { rules, rng }
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }
}

impl<R: SearchRules> Engine for MinimaxEngine<R> {
    fn name(&self) -> &str {
        "Mailbox Minimax"
    }

    fn choose_move(
        &mut self,
        board: &Board,
        color: Color,
        depth: u8,
    ) -> ChessResult<EngineOutput> {
        let result = best_moves(&self.rules, board, color, depth)?;

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string minimax depth {} nodes {}",
            result.depth, result.nodes
        ));

        if result.best_moves.is_empty() {
            return Ok(out);
        }

        let picked = *result
            .best_moves
            .as_slice()
            .choose(&mut self.rng)
            .ok_or(ChessErrors::NoLegalMoves)?;

        if let Some(score) = result.best_score {
            out.info_lines.push(format!(
                "info string minimax score {score} ties {}",
                result.best_moves.len()
            ));
        }
        out.best_move = Some(picked);
        out.best_score = result.best_score;
        out.candidates = result.best_moves;
        Ok(out)
    }
}
