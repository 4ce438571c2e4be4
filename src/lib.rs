//! Crate root module declarations for the Duel Chess engine.
//!
//! Exposes the rules engine (game state, move generation, classification),
//! the negamax search and its engines, the game session that a user
//! interface drives, and notation and persistence helpers.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_result;
    pub mod game_state;
    pub mod zobrist;
}

pub mod moves {
    pub mod chess_move;
    pub mod movement_rules;
    pub mod pawn_moves;
    pub mod sliding_moves;
    pub mod step_tables;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_executor;
    pub mod perft;
    pub mod pseudo_legal_moves;
}

pub mod search {
    pub mod board_scoring;
    pub mod move_ordering;
    pub mod negamax;
    pub mod piece_square_tables;
    pub mod search_worker;
}

pub mod engines {
    pub mod engine_negamax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod session {
    pub mod game_session;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
    pub mod save_game;
}
