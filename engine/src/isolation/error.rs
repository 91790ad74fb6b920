use super::types::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IsolationError {
    IllegalMove { position: Position },
    NoLegalMoves,
    InvalidConfiguration { rows: usize, cols: usize },
}

impl std::fmt::Display for IsolationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IsolationError::IllegalMove { position } => {
                write!(f, "Attempted forecast of illegal move {}", position)
            }
            IsolationError::NoLegalMoves => {
                write!(f, "No legal moves available for the active player")
            }
            IsolationError::InvalidConfiguration { rows, cols } => {
                write!(f, "Invalid board dimensions {}x{}: both must be positive", rows, cols)
            }
        }
    }
}

impl std::error::Error for IsolationError {}
