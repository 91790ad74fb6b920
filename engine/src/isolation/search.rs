//! Full-depth minimax with alpha-beta pruning.
//!
//! Player one maximizes and player two minimizes. The only scores are the
//! terminal ones below; there is no depth limit and no intermediate heuristic,
//! so every search runs until each line ends in a win or a stuck player.

use crate::debug_log;
use super::error::IsolationError;
use super::game_state::IsolationGameState;
use super::types::{Player, Position};

pub const WIN_SCORE: i32 = 10;
pub const LOSS_SCORE: i32 = -10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}

/// Score of a finished position, or `None` while play can continue.
///
/// A stuck side scores [`LOSS_SCORE`] no matter which player is stuck, the
/// same as a player two win.
pub fn evaluate_terminal(state: &IsolationGameState) -> Option<i32> {
    match state.get_winner() {
        Some(Player::One) => Some(WIN_SCORE),
        Some(Player::Two) => Some(LOSS_SCORE),
        None if state.is_terminal() => Some(LOSS_SCORE),
        None => None,
    }
}

pub fn min_value(state: &IsolationGameState, alpha: i32, beta: i32) -> i32 {
    min_search(state, alpha, beta, &mut SearchStats::default())
}

pub fn max_value(state: &IsolationGameState, alpha: i32, beta: i32) -> i32 {
    max_search(state, alpha, beta, &mut SearchStats::default())
}

fn min_search(state: &IsolationGameState, alpha: i32, mut beta: i32, stats: &mut SearchStats) -> i32 {
    stats.nodes += 1;
    if let Some(score) = evaluate_terminal(state) {
        return score;
    }

    let mut v = i32::MAX;
    for position in state.get_legal_moves() {
        v = v.min(max_search(&state.apply_move(position), alpha, beta, stats));
        beta = beta.min(v);
        if alpha >= beta {
            stats.cutoffs += 1;
            break;
        }
    }
    v
}

fn max_search(state: &IsolationGameState, mut alpha: i32, beta: i32, stats: &mut SearchStats) -> i32 {
    stats.nodes += 1;
    if let Some(score) = evaluate_terminal(state) {
        return score;
    }

    let mut v = i32::MIN;
    for position in state.get_legal_moves() {
        v = v.max(min_search(&state.apply_move(position), alpha, beta, stats));
        alpha = alpha.max(v);
        if alpha >= beta {
            stats.cutoffs += 1;
            break;
        }
    }
    v
}

/// Unpruned minimax over the same tree, for checking the pruned search.
pub fn minimax_value(state: &IsolationGameState, maximizing: bool) -> i32 {
    if let Some(score) = evaluate_terminal(state) {
        return score;
    }

    let values = state
        .get_legal_moves()
        .into_iter()
        .map(|position| minimax_value(&state.apply_move(position), !maximizing));

    let best = if maximizing { values.max() } else { values.min() };
    best.unwrap_or(LOSS_SCORE)
}

pub fn select_move(state: &IsolationGameState) -> Result<Position, IsolationError> {
    select_move_with_stats(state).map(|(position, _)| position)
}

/// Picks the move for the active player. Each root candidate is searched with
/// a fresh `(-inf, +inf)` window; ties go to the earliest candidate.
pub fn select_move_with_stats(
    state: &IsolationGameState,
) -> Result<(Position, SearchStats), IsolationError> {
    let player = state.active_player();
    let mut stats = SearchStats::default();
    let mut best: Option<(Position, i32)> = None;

    for position in state.get_legal_moves() {
        let child = state.apply_move(position);
        let score = match player {
            Player::One => min_search(&child, i32::MIN, i32::MAX, &mut stats),
            Player::Two => max_search(&child, i32::MIN, i32::MAX, &mut stats),
        };
        debug_log!("{} candidate {} has value {}", player, position, score);

        let improves = match best {
            None => true,
            Some((_, best_score)) => match player {
                Player::One => score > best_score,
                Player::Two => score < best_score,
            },
        };
        if improves {
            best = Some((position, score));
        }
    }

    let (position, score) = best.ok_or(IsolationError::NoLegalMoves)?;
    debug_log!(
        "{} selects {} (value {}, {} nodes, {} cutoffs)",
        player,
        position,
        score,
        stats.nodes,
        stats.cutoffs
    );
    Ok((position, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::isolation::types::Cell;

    fn collect_reachable(state: &IsolationGameState, out: &mut Vec<IsolationGameState>) {
        out.push(state.clone());
        for position in state.get_legal_moves() {
            collect_reachable(&state.apply_move(position), out);
        }
    }

    #[test]
    fn test_evaluate_terminal_scores() {
        let state = IsolationGameState::new(3, 3).unwrap();
        assert_eq!(evaluate_terminal(&state), None);

        let mut one_wins = state.clone();
        one_wins.set_player(Player::One, Position::new(2, 1));
        assert_eq!(evaluate_terminal(&one_wins), Some(WIN_SCORE));

        let mut two_wins = state.clone();
        two_wins.set_player(Player::Two, Position::new(0, 0));
        assert_eq!(evaluate_terminal(&two_wins), Some(LOSS_SCORE));
    }

    #[test]
    fn test_stuck_player_scores_as_loss_for_either_side() {
        let start = IsolationGameState::new(2, 2).unwrap();
        let two_stuck = start.forecast_move(Position::new(0, 0)).unwrap();
        assert_eq!(two_stuck.active_player(), Player::Two);
        assert_eq!(evaluate_terminal(&two_stuck), Some(LOSS_SCORE));

        let one_stuck = two_stuck.pass_turn();
        assert_eq!(one_stuck.active_player(), Player::One);
        assert!(one_stuck.is_terminal());
        assert_eq!(evaluate_terminal(&one_stuck), Some(LOSS_SCORE));
    }

    #[test]
    fn test_alpha_beta_matches_exhaustive_minimax() {
        for (rows, cols) in [(2, 2), (3, 3), (3, 2), (2, 3)] {
            let mut states = Vec::new();
            collect_reachable(&IsolationGameState::new(rows, cols).unwrap(), &mut states);
            for state in &states {
                assert_eq!(
                    max_value(state, i32::MIN, i32::MAX),
                    minimax_value(state, true),
                    "max_value mismatch on {}x{}\n{}",
                    rows,
                    cols,
                    state
                );
                assert_eq!(
                    min_value(state, i32::MIN, i32::MAX),
                    minimax_value(state, false),
                    "min_value mismatch on {}x{}\n{}",
                    rows,
                    cols,
                    state
                );
            }
        }
    }

    #[test]
    fn test_alpha_beta_matches_exhaustive_minimax_on_larger_roots() {
        let roots = [
            IsolationGameState::new(4, 3).unwrap(),
            IsolationGameState::new(3, 4).unwrap(),
            IsolationGameState::unplaced(3, 3).unwrap(),
        ];
        for root in &roots {
            assert_eq!(max_value(root, i32::MIN, i32::MAX), minimax_value(root, true));
            assert_eq!(min_value(root, i32::MIN, i32::MAX), minimax_value(root, false));
        }
    }

    #[test]
    fn test_single_legal_move_is_selected() {
        let state = IsolationGameState::new(2, 2).unwrap();
        let (position, stats) = select_move_with_stats(&state).unwrap();
        assert_eq!(position, Position::new(0, 0));
        assert_eq!(stats, SearchStats { nodes: 1, cutoffs: 0 });
    }

    #[test]
    fn test_select_move_on_terminal_state_fails() {
        let state = IsolationGameState::new(2, 2)
            .unwrap()
            .forecast_move(Position::new(0, 0))
            .unwrap();
        assert_eq!(select_move(&state), Err(IsolationError::NoLegalMoves));
    }

    #[test]
    fn test_player_one_takes_immediate_win() {
        let mut state = IsolationGameState::new(3, 3).unwrap();
        state.set_cell(Position::new(0, 2), Cell::Open);
        state.set_player(Player::One, Position::new(1, 1));

        assert_eq!(state.get_legal_moves()[0], Position::new(2, 1));
        assert_eq!(select_move(&state), Ok(Position::new(2, 1)));
    }

    #[test]
    fn test_player_two_picks_minimal_value() {
        let mut state = IsolationGameState::new(3, 3).unwrap().pass_turn();
        state.set_cell(Position::new(2, 0), Cell::Open);
        state.set_player(Player::Two, Position::new(1, 0));

        let chosen = select_move(&state).unwrap();
        let chosen_value = max_value(&state.forecast_move(chosen).unwrap(), i32::MIN, i32::MAX);
        assert_eq!(chosen_value, LOSS_SCORE);

        for position in state.get_legal_moves() {
            let value = max_value(&state.forecast_move(position).unwrap(), i32::MIN, i32::MAX);
            assert!(chosen_value <= value);
        }
    }

    #[test]
    fn test_select_move_breaks_ties_by_move_order() {
        let state = IsolationGameState::new(4, 4).unwrap();
        let moves = state.get_legal_moves();
        let values: Vec<i32> = moves
            .iter()
            .map(|&m| min_value(&state.forecast_move(m).unwrap(), i32::MIN, i32::MAX))
            .collect();
        let best = *values.iter().max().unwrap();
        let first_best = moves[values.iter().position(|&v| v == best).unwrap()];

        assert_eq!(select_move(&state), Ok(first_best));
        assert_eq!(select_move(&state), select_move(&state));
    }

    #[test]
    fn test_search_stats_count_visited_nodes() {
        let state = IsolationGameState::new(3, 3).unwrap();
        let (_, stats) = select_move_with_stats(&state).unwrap();
        assert!(stats.nodes > 1);
        let legal = state.get_legal_moves().len() as u64;
        assert!(stats.nodes >= legal);
    }
}
