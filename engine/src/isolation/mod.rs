mod bot_controller;
mod error;
mod game_state;
mod match_runner;
mod search;
mod types;

pub use bot_controller::{calculate_move, BotType};
pub use error::IsolationError;
pub use game_state::IsolationGameState;
pub use match_runner::{run_match, MatchOutcome, MatchRecord, Turn};
pub use search::{
    evaluate_terminal, max_value, min_value, minimax_value, select_move,
    select_move_with_stats, SearchStats, LOSS_SCORE, WIN_SCORE,
};
pub use types::{Cell, Player, Position};
