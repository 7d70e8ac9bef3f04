use std::fmt;

use gridpath_core::Point;

/// Why [`find_path`](crate::find_path) did not produce a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Start or goal lies outside the grid.
    OutOfBounds(Point),
    /// Start or goal is not walkable.
    NotWalkable(Point),
    /// The frontier ran dry before reaching the goal.
    NoPathFound { start: Point, goal: Point },
    /// The configured expansion budget ran out.
    BudgetExhausted { expanded: usize },
}

impl SearchError {
    /// Whether the caller passed invalid endpoints; the search never started.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::OutOfBounds(_) | Self::NotWalkable(_))
    }

    /// Whether the search completed and proved the goal unreachable.
    pub fn is_no_path(&self) -> bool {
        matches!(self, Self::NoPathFound { .. })
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "search: endpoint {p} is out of bounds"),
            Self::NotWalkable(p) => write!(f, "search: endpoint {p} is not walkable"),
            Self::NoPathFound { start, goal } => {
                write!(f, "search: no path from {start} to {goal}")
            }
            Self::BudgetExhausted { expanded } => {
                write!(f, "search: gave up after expanding {expanded} cells")
            }
        }
    }
}

impl std::error::Error for SearchError {}

/// Errors from querying a [`PathView`](crate::PathView).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The cell's predecessor chain does not lead back to the start.
    NotOnPath(Point),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotOnPath(p) => write!(f, "path: {p} is not connected to the start"),
        }
    }
}

impl std::error::Error for PathError {}
