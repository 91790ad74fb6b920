use serde::{Deserialize, Serialize};

use crate::session_rng::SessionRng;
use super::error::IsolationError;
use super::game_state::IsolationGameState;
use super::search::select_move;
use super::types::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BotType {
    Minimax,
    Random,
    FirstLegal,
}

pub fn calculate_move(
    bot_type: BotType,
    state: &IsolationGameState,
    rng: &mut SessionRng,
) -> Result<Position, IsolationError> {
    match bot_type {
        BotType::Minimax => select_move(state),
        BotType::Random => calculate_random_move(state, rng),
        BotType::FirstLegal => state
            .get_legal_moves()
            .first()
            .copied()
            .ok_or(IsolationError::NoLegalMoves),
    }
}

fn calculate_random_move(
    state: &IsolationGameState,
    rng: &mut SessionRng,
) -> Result<Position, IsolationError> {
    let available_moves = state.get_legal_moves();
    if available_moves.is_empty() {
        return Err(IsolationError::NoLegalMoves);
    }
    let idx = rng.random_index(available_moves.len());
    Ok(available_moves[idx])
}
