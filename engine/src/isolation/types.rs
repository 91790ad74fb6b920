use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Open,
    Blocked,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    pub fn symbol(&self) -> char {
        match self {
            Cell::Open => 'O',
            Cell::Blocked => 'X',
            Cell::PlayerOne => '1',
            Cell::PlayerTwo => '2',
        }
    }

    pub fn is_open(&self) -> bool {
        *self == Cell::Open
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Parity bit: 0 for player one, 1 for player two.
    pub fn index(&self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    pub fn opponent(&self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn marker(&self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Neighbouring cell at `(d_row, d_col)`, or `None` when it falls off the grid.
    pub fn offset(&self, d_row: isize, d_col: isize, rows: usize, cols: usize) -> Option<Position> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        if row < rows && col < cols {
            Some(Position::new(row, col))
        } else {
            None
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
