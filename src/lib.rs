//! Crate root module declarations for the mailbox chess engine.
//!
//! This file exposes the subsystems (board and game controller, per-piece
//! move generation, legality and mate detection, minimax search, engines and
//! utility helpers) so binaries, benches and front ends can import stable
//! module paths.

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_settings;
    pub mod game_state;
    pub mod snapshot;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod chess_move;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod mate_detection;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod render_game_state;
}

pub mod chess_errors;
pub mod move_status;
