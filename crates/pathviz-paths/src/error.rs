use std::fmt;

use pathviz_core::Point;

/// A search precondition the caller failed to establish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    /// A barrier changed since the last [`refresh_adjacency`](crate::Board::refresh_adjacency).
    StaleAdjacency,
    /// The start or end cell lies outside the board.
    EndpointOutOfBounds(Point),
    /// The start or end cell is a barrier.
    EndpointIsBarrier(Point),
}

/// Errors raised by [`Board`](crate::Board) and [`search`](crate::search).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Board construction with a non-positive dimension.
    InvalidSize(i32),
    /// Cell lookup outside the board.
    OutOfBounds(Point),
    /// Search invoked without its preconditions.
    PreconditionViolated(Precondition),
}

impl fmt::Display for Precondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaleAdjacency => f.write_str("adjacency is stale, refresh it after editing barriers"),
            Self::EndpointOutOfBounds(p) => {
                write!(f, "endpoint at row {}, col {} is outside the board", p.row(), p.col())
            }
            Self::EndpointIsBarrier(p) => {
                write!(f, "endpoint at row {}, col {} is a barrier", p.row(), p.col())
            }
        }
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize(n) => write!(f, "board size must be positive, got {n}"),
            Self::OutOfBounds(p) => {
                write!(f, "cell at row {}, col {} is out of bounds", p.row(), p.col())
            }
            Self::PreconditionViolated(pre) => write!(f, "search precondition violated: {pre}"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<Precondition> for PathError {
    fn from(pre: Precondition) -> Self {
        Self::PreconditionViolated(pre)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_row_and_col() {
        let err = PathError::OutOfBounds(Point::from_row_col(3, 9));
        assert_eq!(err.to_string(), "cell at row 3, col 9 is out of bounds");
        let err: PathError = Precondition::StaleAdjacency.into();
        assert!(err.to_string().starts_with("search precondition violated"));
    }
}
