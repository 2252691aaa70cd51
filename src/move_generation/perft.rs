use std::sync::Arc;
use std::thread;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_apply::board_after_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Count leaf positions `depth` plies below `board` with `color` to move.
pub fn perft<G: MoveGenerator>(
    generator: &G,
    board: &Board,
    color: Color,
    depth: u8,
) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_moves(board, color)? {
        perft_recurse(generator, board, &mv, color, depth, 1, &mut total)?;
    }
    Ok(total)
}

/// [`perft`] with one worker thread per root move.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    board: &Board,
    color: Color,
    depth: u8,
) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let root_moves = generator.generate_moves(board, color)?;
    let mut handles = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let generator_ref = Arc::clone(&generator);
        let root = board.clone();
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            let result = perft_recurse(
                generator_ref.as_ref(),
                &root,
                &mv,
                color,
                depth,
                1,
                &mut local,
            );
            (result, local)
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let Ok((result, local)) = handle.join() else {
            return Err(ChessErrors::WorkerPanicked);
        };
        result?;
        total.merge(local);
    }
    Ok(total)
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    board: &Board,
    mv: &Move,
    mover: Color,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) -> ChessResult<()> {
    let next = board_after_move(board, mv);
    let opponent = mover.opposite();

    if current_depth == search_depth {
        counts.nodes += 1;
        if board.piece_on(mv.destination).is_some() {
            counts.captures += 1;
        }
        if mv.promotion.is_some() {
            counts.promotions += 1;
        }
        if is_king_in_check(&next, opponent) {
            counts.checks += 1;
            if generator.generate_moves(&next, opponent)?.is_empty() {
                counts.checkmates += 1;
            }
        }
        return Ok(());
    }

    for child in generator.generate_moves(&next, opponent)? {
        perft_recurse(
            generator,
            &next,
            &child,
            opponent,
            search_depth,
            current_depth + 1,
            counts,
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Piece, PieceKind, Square};
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;

    #[test]
    fn start_position_perft_depth_one_and_two() {
        let board = Board::standard();
        let depth_one = perft(&LegalMoveGenerator, &board, Color::Light, 1).expect("perft");
        assert_eq!(depth_one.nodes, 12);
        assert_eq!(depth_one.captures, 0);

        let depth_two = perft(&LegalMoveGenerator, &board, Color::Light, 2).expect("perft");
        assert_eq!(depth_two.nodes, 144);
        assert_eq!(depth_two.checks, 0);
    }

    #[test]
    fn depth_zero_counts_the_root() {
        let counts = perft(&LegalMoveGenerator, &Board::standard(), Color::Dark, 0).expect("perft");
        assert_eq!(counts.nodes, 1);
    }

    #[test]
    fn promotion_position_counts_promotions_and_checks() {
        let mut board = Board::empty();
        board.place(Square::new(0, 6), Some(Piece::new(Color::Light, PieceKind::Pawn)));
        board.place(Square::new(7, 0), Some(Piece::new(Color::Light, PieceKind::King)));
        board.place(Square::new(7, 7), Some(Piece::new(Color::Dark, PieceKind::King)));

        let counts = perft(&LegalMoveGenerator, &board, Color::Light, 1).expect("perft");
        assert_eq!(counts.nodes, 7);
        assert_eq!(counts.promotions, 4);
        // a8=Q and a8=R check along the back rank.
        assert_eq!(counts.checks, 2);
        assert_eq!(counts.checkmates, 0);
    }

    #[test]
    fn multi_threaded_matches_single_thread() {
        let board = Board::standard();
        let single = perft(&LegalMoveGenerator, &board, Color::Light, 2).expect("perft");
        let multi =
            perft_multi_threaded(Arc::new(LegalMoveGenerator), &board, Color::Light, 2)
                .expect("perft");
        assert_eq!(single, multi);
    }
}
