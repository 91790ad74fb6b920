use crate::{debug_log, session_rng::SessionRng};
use super::bot_controller::{calculate_move, BotType};
use super::error::IsolationError;
use super::game_state::IsolationGameState;
use super::types::{Player, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    PlayerOneWins,
    PlayerTwoWins,
    /// Both sides ran out of moves without anyone reaching the far edge.
    Draw,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Move { player: Player, position: Position },
    Pass { player: Player },
}

#[derive(Clone, Debug, PartialEq)]
pub struct MatchRecord {
    pub outcome: MatchOutcome,
    pub turns: Vec<Turn>,
    pub final_state: IsolationGameState,
}

/// Plays a game to the end, one half-move at a time.
///
/// A side with no legal move passes and is marked exhausted. The winner is
/// checked after every half-move; the game is a draw once both sides are
/// exhausted. `on_turn` sees every turn together with the state it produced.
pub fn run_match(
    initial: IsolationGameState,
    player_one: BotType,
    player_two: BotType,
    rng: &mut SessionRng,
    mut on_turn: impl FnMut(&Turn, &IsolationGameState),
) -> Result<MatchRecord, IsolationError> {
    let mut state = initial;
    let mut exhausted = [false, false];
    let mut turns = Vec::new();

    let outcome = loop {
        if exhausted.iter().all(|&e| e) {
            break MatchOutcome::Draw;
        }

        let player = state.active_player();
        let turn = if state.is_terminal() {
            exhausted[player.index()] = true;
            state = state.pass_turn();
            debug_log!("{} has no moves and passes", player);
            Turn::Pass { player }
        } else {
            let bot_type = match player {
                Player::One => player_one,
                Player::Two => player_two,
            };
            let position = calculate_move(bot_type, &state, &mut *rng)?;
            let next = state.forecast_move(position)?;
            debug_log!("Parity before: {}, after: {}", state.parity(), next.parity());
            state = next;
            Turn::Move { player, position }
        };

        on_turn(&turn, &state);
        turns.push(turn);

        match state.get_winner() {
            Some(Player::One) => break MatchOutcome::PlayerOneWins,
            Some(Player::Two) => break MatchOutcome::PlayerTwoWins,
            None => {}
        }
    };

    Ok(MatchRecord {
        outcome,
        turns,
        final_state: state,
    })
}
