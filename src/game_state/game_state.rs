//! Game controller.
//!
//! `GameState` owns the board, the game settings and a lazily computed cache
//! of legal moves for both colors. It validates every move entered through
//! [`GameState::perform_move`] against that cache and reports how the game
//! stands for the side that has to answer. Turn order is driven by the
//! caller through [`GameState::advance_turn`].

use log::{debug, trace};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_trait::Engine;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::game_state::game_settings::{Difficulty, GameMode, GameSettings, PlayerType};
use crate::game_state::snapshot::GameSnapshot;
use crate::move_generation::legal_move_apply::board_after_move;
use crate::move_generation::legal_move_checks::{is_king_in_check, king_square};
use crate::move_generation::legal_move_generator::{all_moves, moves_for_square};
use crate::move_generation::mate_detection::is_checkmate;
use crate::move_status::MoveStatus;
use crate::moves::chess_move::{Move, MoveList};
use crate::search::minimax::{best_moves, score_move};

#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    settings: GameSettings,
    // Legal moves indexed by `Color::index`; `None` after any board change.
    move_cache: Option<[MoveList; 2]>,
    engine: MinimaxEngine,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Standard starting position with default settings.
    pub fn new() -> Self {
        Self::with_engine(MinimaxEngine::new())
    }

    /// Like [`GameState::new`] but with reproducible computer moves.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_engine(MinimaxEngine::with_seed(seed))
    }

    fn with_engine(engine: MinimaxEngine) -> Self {
        Self {
            board: Board::standard(),
            settings: GameSettings::default(),
            move_cache: None,
            engine,
        }
    }

    // --- Board setup ---

    pub fn initialize_standard_board(&mut self) {
        self.board.initialize_standard();
        self.invalidate_moves();
    }

    pub fn clear_board(&mut self) {
        self.board.clear();
        self.invalidate_moves();
    }

    pub fn set_piece(&mut self, square: Square, color: Color, kind: PieceKind) -> ChessResult<()> {
        self.invalidate_moves();
        self.board.set_piece(square, Piece::new(color, kind))
    }

    pub fn remove_piece(&mut self, square: Square) -> ChessResult<Option<Piece>> {
        self.invalidate_moves();
        self.board.remove_piece(square)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access for front ends that edit the board directly. The move
    /// cache is dropped since any edit may change it.
    pub fn board_mut(&mut self) -> &mut Board {
        self.invalidate_moves();
        &mut self.board
    }

    pub fn board_copy(&self) -> Board {
        self.board.clone()
    }

    // --- Settings ---

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn set_game_mode(&mut self, game_mode: GameMode) {
        self.settings.game_mode = game_mode;
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.settings.difficulty = difficulty;
    }

    pub fn set_user_color(&mut self, color: Color) {
        self.settings.user_color = color;
    }

    pub fn set_next_player(&mut self, color: Color) {
        self.settings.next_player = color;
    }

    /// Default settings and a fresh standard board.
    pub fn reset_default_settings(&mut self) {
        self.settings = GameSettings::default();
        self.initialize_standard_board();
    }

    pub fn next_player(&self) -> Color {
        self.settings.next_player
    }

    pub fn next_player_type(&self) -> PlayerType {
        self.settings.player_type(self.settings.next_player)
    }

    // --- Play ---

    /// Check the position is playable and report its state for the side to
    /// move.
    pub fn start_game(&mut self) -> ChessResult<MoveStatus> {
        for color in [Color::Light, Color::Dark] {
            if king_square(&self.board, color).is_none() {
                debug!("start_game: {color} king is missing");
                return Err(ChessErrors::IllegalBoardInitialization(format!(
                    "{color} king is missing"
                )));
            }
        }
        self.refresh_moves()?;

        let color = self.settings.next_player;
        let in_check = is_king_in_check(&self.board, color);
        let has_moves = !self.legal_moves(color)?.is_empty();
        let status = match (in_check, has_moves) {
            (true, false) => MoveStatus::CheckMate,
            (true, true) => MoveStatus::Check,
            (false, false) => MoveStatus::GameTie,
            (false, true) => MoveStatus::MoveSuccessful,
        };
        debug!("start_game: {status} for {color}");
        Ok(status)
    }

    /// Validate and play `mv` for the side to move.
    ///
    /// On error the board is unchanged. On success the returned status
    /// describes the opponent's situation. The turn is not advanced.
    pub fn perform_move(&mut self, mv: Move) -> ChessResult<MoveStatus> {
        for square in [mv.origin, mv.destination] {
            if !square.is_on_board() {
                debug!("perform_move {mv}: square {square} is off the board");
                return Err(ChessErrors::InvalidBoardPosition(square));
            }
        }

        let color = self.settings.next_player;
        let piece = self
            .board
            .piece_on(mv.origin)
            .filter(|piece| piece.color == color)
            .ok_or(ChessErrors::InvalidPiece(mv.origin))?;

        let listed = self
            .legal_moves(color)?
            .iter()
            .any(|legal| legal.same_path(&mv));
        if !listed {
            debug!("perform_move {mv}: not a legal move for {color}");
            return Err(ChessErrors::IllegalMove(mv));
        }

        let mv = if piece.kind == PieceKind::Pawn && mv.destination.row == color.promotion_row() {
            match mv.promotion {
                None => {
                    debug!("perform_move {mv}: promotion piece required");
                    return Err(ChessErrors::PawnPromotionRequired(mv));
                }
                Some(promotion)
                    if promotion.color != color || !promotion.kind.is_promotion_target() =>
                {
                    debug!("perform_move {mv}: invalid promotion piece");
                    return Err(ChessErrors::InvalidPiece(mv.origin));
                }
                Some(_) => mv,
            }
        } else {
            Move::new(mv.origin, mv.destination)
        };

        self.board = board_after_move(&self.board, &mv);
        self.invalidate_moves();
        self.refresh_moves()?;

        let opponent = color.opposite();
        let in_check = is_king_in_check(&self.board, opponent);
        let status = if in_check && is_checkmate(&self.board, opponent)? {
            MoveStatus::CheckMate
        } else if !in_check && self.legal_moves(opponent)?.is_empty() {
            MoveStatus::GameTie
        } else if in_check {
            MoveStatus::Check
        } else {
            MoveStatus::MoveSuccessful
        };
        debug!("perform_move {mv} by {color}: {status}");
        Ok(status)
    }

    pub fn advance_turn(&mut self) {
        self.settings.next_player = self.settings.next_player.opposite();
    }

    /// Legal moves of the piece on `square`, which must belong to the side
    /// to move.
    pub fn get_moves(&self, square: Square) -> ChessResult<MoveList> {
        moves_for_square(&self.board, square, self.settings.next_player, true)
    }

    /// Every move of the side to move tied at the best score for `difficulty`.
    pub fn get_best_moves(&self, difficulty: Difficulty) -> ChessResult<MoveList> {
        let depth = difficulty.search_depth(&self.board);
        let result = best_moves(
            self.engine.rules(),
            &self.board,
            self.settings.next_player,
            depth,
        )?;
        Ok(result.best_moves)
    }

    /// Search score of `mv` for the side to move.
    pub fn get_score(&self, difficulty: Difficulty, mv: Move) -> ChessResult<i32> {
        for square in [mv.origin, mv.destination] {
            if !square.is_on_board() {
                return Err(ChessErrors::InvalidBoardPosition(square));
            }
        }
        let depth = difficulty.search_depth(&self.board);
        score_move(
            self.engine.rules(),
            &self.board,
            &mv,
            self.settings.next_player,
            depth,
        )
    }

    /// Move the engine would play for the side to move at the configured
    /// difficulty.
    pub fn next_computer_move(&mut self) -> ChessResult<Move> {
        let color = self.settings.next_player;
        let depth = self.settings.difficulty.search_depth(&self.board);
        let out = self.engine.choose_move(&self.board, color, depth)?;
        for line in &out.info_lines {
            trace!("{line}");
        }
        out.best_move.ok_or(ChessErrors::NoLegalMoves)
    }

    /// Play the engine's move and pass the turn unless the game is over.
    pub fn perform_computer_move(&mut self) -> ChessResult<(Move, MoveStatus)> {
        let mv = self.next_computer_move()?;
        let status = self.perform_move(mv)?;
        if !status.is_game_over() {
            self.advance_turn();
        }
        Ok((mv, status))
    }

    // --- Persistence ---

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(&self.board, &self.settings)
    }

    /// Replace board and settings with a saved game. Piece limits are not
    /// re-validated.
    pub fn load_snapshot(&mut self, snapshot: &GameSnapshot) {
        self.board.load_complete(&snapshot.board);
        self.settings = snapshot.settings;
        self.invalidate_moves();
    }

    // --- Move cache ---

    /// Cached legal moves of `color`, computed on first use after a change.
    pub fn legal_moves(&mut self, color: Color) -> ChessResult<&[Move]> {
        if self.move_cache.is_none() {
            self.refresh_moves()?;
        }
        Ok(self
            .move_cache
            .as_ref()
            .map_or(&[][..], |cache| cache[color.index()].as_slice()))
    }

    fn refresh_moves(&mut self) -> ChessResult<()> {
        let light = all_moves(&self.board, Color::Light, true)?;
        let dark = all_moves(&self.board, Color::Dark, true)?;
        self.move_cache = Some([light, dark]);
        Ok(())
    }

    fn invalidate_moves(&mut self) {
        self.move_cache = None;
    }
}
