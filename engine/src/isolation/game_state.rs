use std::fmt;

use super::error::IsolationError;
use super::types::{Cell, Player, Position};

/// Row/column deltas checked around the active player, one step each.
/// Search tie-breaks depend on this order.
const STEPS: [(isize, isize); 8] = [
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// One position of the game. Values are never mutated once handed out:
/// every move produces a fresh state and leaves its parent untouched.
///
/// `cells` is indexed `[row][col]`, with `rows` rows of `cols` columns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IsolationGameState {
    cells: Vec<Vec<Cell>>,
    rows: usize,
    cols: usize,
    active_player: Player,
    positions: [Option<Position>; 2],
}

impl IsolationGameState {
    /// Builds the starting position: lower-right corner blocked, player one in
    /// the top-right cell, player two in the bottom-left cell, player one to move.
    pub fn new(rows: usize, cols: usize) -> Result<Self, IsolationError> {
        Self::unplaced(rows, cols).map(Self::with_players)
    }

    /// Same grid as [`IsolationGameState::new`] but with neither player on the
    /// board yet. Each player's first move may then go to any open cell.
    pub fn unplaced(rows: usize, cols: usize) -> Result<Self, IsolationError> {
        if rows == 0 || cols == 0 {
            return Err(IsolationError::InvalidConfiguration { rows, cols });
        }
        Ok(Self::empty_grid(rows, cols))
    }

    // Callers guarantee both dimensions are positive.
    fn empty_grid(rows: usize, cols: usize) -> Self {
        let mut cells = vec![vec![Cell::Open; cols]; rows];
        cells[rows - 1][cols - 1] = Cell::Blocked;

        Self {
            cells,
            rows,
            cols,
            active_player: Player::One,
            positions: [None, None],
        }
    }

    fn with_players(mut self) -> Self {
        self.place(Player::One, Position::new(0, self.cols - 1));
        self.place(Player::Two, Position::new(self.rows - 1, 0));
        self
    }

    fn place(&mut self, player: Player, position: Position) {
        self.cells[position.row][position.col] = player.marker();
        self.positions[player.index()] = Some(position);
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cells(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    pub fn cell(&self, position: Position) -> Option<Cell> {
        self.cells.get(position.row)?.get(position.col).copied()
    }

    pub fn active_player(&self) -> Player {
        self.active_player
    }

    pub fn parity(&self) -> usize {
        self.active_player.index()
    }

    pub fn player_position(&self, player: Player) -> Option<Position> {
        self.positions[player.index()]
    }

    /// Moves open to the active player, in step order. A player that has not
    /// been placed yet may go to any open cell.
    pub fn get_legal_moves(&self) -> Vec<Position> {
        let Some(current) = self.positions[self.active_player.index()] else {
            return self.get_blank_spaces();
        };

        STEPS
            .iter()
            .filter_map(|&(d_row, d_col)| current.offset(d_row, d_col, self.rows, self.cols))
            .filter(|target| self.cells[target.row][target.col].is_open())
            .collect()
    }

    // Column by column, top to bottom within a column.
    fn get_blank_spaces(&self) -> Vec<Position> {
        (0..self.cols)
            .flat_map(|col| (0..self.rows).map(move |row| Position::new(row, col)))
            .filter(|p| self.cells[p.row][p.col].is_open())
            .collect()
    }

    /// Returns the state reached when the active player moves to `position`.
    pub fn forecast_move(&self, position: Position) -> Result<Self, IsolationError> {
        if !self.get_legal_moves().contains(&position) {
            return Err(IsolationError::IllegalMove { position });
        }
        Ok(self.apply_move(position))
    }

    /// Unchecked transition for moves taken straight from `get_legal_moves`.
    /// The vacated cell keeps its marker and stays impassable for both players.
    pub(crate) fn apply_move(&self, position: Position) -> Self {
        let mut next = self.clone();
        next.place(self.active_player, position);
        next.active_player = self.active_player.opponent();
        next
    }

    /// Hands the move to the opponent without touching the grid. Used by the
    /// match runner when the side to move is stuck.
    pub fn pass_turn(&self) -> Self {
        let mut next = self.clone();
        next.active_player = self.active_player.opponent();
        next
    }

    /// Player one wins on reaching the bottom row, player two on reaching the
    /// top row. `None` covers both "still playing" and "drawn"; callers tell
    /// them apart with [`IsolationGameState::is_terminal`].
    pub fn get_winner(&self) -> Option<Player> {
        if let Some(one) = self.positions[Player::One.index()]
            && one.row == self.rows - 1
        {
            return Some(Player::One);
        }
        if let Some(two) = self.positions[Player::Two.index()]
            && two.row == 0
        {
            return Some(Player::Two);
        }
        None
    }

    /// True when the active player has nowhere to go.
    pub fn is_terminal(&self) -> bool {
        self.get_legal_moves().is_empty()
    }

    #[cfg(test)]
    pub(crate) fn set_cell(&mut self, position: Position, cell: Cell) {
        self.cells[position.row][position.col] = cell;
    }

    #[cfg(test)]
    pub(crate) fn set_player(&mut self, player: Player, position: Position) {
        self.place(player, position);
    }
}

impl Default for IsolationGameState {
    /// The 3x3 starting position.
    fn default() -> Self {
        Self::empty_grid(3, 3).with_players()
    }
}

impl fmt::Display for IsolationGameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.iter().enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(|cell| cell.symbol().to_string()).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
