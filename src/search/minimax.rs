//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! Every candidate move is scored from the mover's point of view: the move is
//! applied, the resulting board evaluated, and if the line is neither at the
//! horizon nor decided (mate or stalemate) the opponent's replies are searched
//! recursively. The root keeps every move tied at the best score so callers
//! can pick among equals.
//!
//! The rules used by the search (move list, move application, evaluation)
//! come in through [`SearchRules`], so the recursion can be exercised with
//! stand-in rules in tests.

use log::{debug, trace};

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_apply;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::chess_move::{push_move, Move, MoveList};
use crate::search::board_scoring::{is_terminal_score, BoardScorer, OutcomeScorer, MATE_SCORE};

pub trait SearchRules: Send + Sync {
    fn legal_moves(&self, board: &Board, color: Color) -> ChessResult<MoveList>;

    fn board_after_move(&self, board: &Board, mv: &Move) -> Board {
        legal_move_apply::board_after_move(board, mv)
    }

    fn evaluate(&self, board: &Board, color: Color) -> ChessResult<i32>;
}

/// Rules assembled from a move generator and a scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRules<G = LegalMoveGenerator, S = OutcomeScorer> {
    pub generator: G,
    pub scorer: S,
}

impl<G: MoveGenerator, S: BoardScorer> SearchRules for StandardRules<G, S> {
    fn legal_moves(&self, board: &Board, color: Color) -> ChessResult<MoveList> {
        self.generator.generate_moves(board, color)
    }

    fn evaluate(&self, board: &Board, color: Color) -> ChessResult<i32> {
        self.scorer.score(board, color)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// Every root move sharing the best score, in generation order.
    pub best_moves: MoveList,
    /// `None` when the side had no legal moves.
    pub best_score: Option<i32>,
    pub depth: u8,
    pub nodes: u64,
}

/// Score of playing `mv` for `mover`, searched `depth` plies deep.
///
/// `maximizing_color` is the side whose replies get expanded below this
/// node; at the root it is the opponent of `mover`. A depth of 0 is treated
/// as 1.
#[allow(clippy::too_many_arguments)]
pub fn search<R: SearchRules + ?Sized>(
    rules: &R,
    board: &Board,
    mv: &Move,
    mover: Color,
    depth: u8,
    maximizing_color: Color,
    alpha: i32,
    beta: i32,
) -> ChessResult<i32> {
    let mut nodes = 0u64;
    search_counted(
        rules,
        board,
        mv,
        mover,
        depth,
        maximizing_color,
        alpha,
        beta,
        &mut nodes,
    )
}

#[allow(clippy::too_many_arguments)]
fn search_counted<R: SearchRules + ?Sized>(
    rules: &R,
    board: &Board,
    mv: &Move,
    mover: Color,
    depth: u8,
    maximizing_color: Color,
    mut alpha: i32,
    mut beta: i32,
    nodes: &mut u64,
) -> ChessResult<i32> {
    *nodes += 1;
    let child = rules.board_after_move(board, mv);
    let score = rules.evaluate(&child, mover)?;
    if depth <= 1 || is_terminal_score(score) {
        return Ok(score);
    }

    let replies = rules.legal_moves(&child, maximizing_color)?;
    if replies.is_empty() {
        return Ok(score);
    }

    let next_color = maximizing_color.opposite();
    if maximizing_color == mover {
        let mut best = -MATE_SCORE;
        for reply in &replies {
            let value = search_counted(
                rules, &child, reply, mover, depth - 1, next_color, alpha, beta, nodes,
            )?;
            best = best.max(value);
            alpha = alpha.max(best);
            if alpha >= beta {
                break;
            }
        }
        Ok(best)
    } else {
        let mut best = MATE_SCORE;
        for reply in &replies {
            let value = search_counted(
                rules, &child, reply, mover, depth - 1, next_color, alpha, beta, nodes,
            )?;
            best = best.min(value);
            beta = beta.min(best);
            if alpha >= beta {
                break;
            }
        }
        Ok(best)
    }
}

/// Root score of `mv` for `color` with a full window.
pub fn score_move<R: SearchRules + ?Sized>(
    rules: &R,
    board: &Board,
    mv: &Move,
    color: Color,
    depth: u8,
) -> ChessResult<i32> {
    search(
        rules,
        board,
        mv,
        color,
        depth,
        color.opposite(),
        -MATE_SCORE,
        MATE_SCORE,
    )
}

/// All legal moves of `color` tied at the highest root score.
pub fn best_moves<R: SearchRules + ?Sized>(
    rules: &R,
    board: &Board,
    color: Color,
    depth: u8,
) -> ChessResult<SearchResult> {
    let depth = depth.max(1);
    let candidates = rules.legal_moves(board, color)?;
    let mut result = SearchResult {
        depth,
        ..SearchResult::default()
    };

    for mv in &candidates {
        let score = search_counted(
            rules,
            board,
            mv,
            color,
            depth,
            color.opposite(),
            -MATE_SCORE,
            MATE_SCORE,
            &mut result.nodes,
        )?;
        trace!("root move {mv} scored {score} at depth {depth}");

        match result.best_score {
            Some(best) if score < best => {}
            Some(best) if score == best => push_move(&mut result.best_moves, *mv)?,
            _ => {
                result.best_score = Some(score);
                result.best_moves.clear();
                push_move(&mut result.best_moves, *mv)?;
            }
        }
    }

    debug!(
        "{color} depth {depth}: {} of {} moves tied at {:?} ({} nodes)",
        result.best_moves.len(),
        candidates.len(),
        result.best_score,
        result.nodes
    );
    Ok(result)
}
