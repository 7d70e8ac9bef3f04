//! Heuristic-guided shortest-path search over `gridpath-core` grids.
//!
//! [`PathSearchEngine`] runs A* from an explicit start cell to an explicit
//! goal cell and materializes the result as a [`PathView`]: a read-only,
//! start-to-goal traversal over the grid's cells.
//!
//! ```
//! use gridpath_core::{Grid, Point};
//! use gridpath_search::{Euclidean, find_path};
//!
//! let mut grid = Grid::new(5, 5).unwrap();
//! let view = find_path(&mut grid, Point::new(0, 0), Point::new(4, 4), &Euclidean).unwrap();
//! assert_eq!(view.len(), 5);
//! ```
//!
//! # Movement and admissibility
//!
//! | Heuristic | `Cardinal` | `Octile` |
//! |---|---|---|
//! | [`Euclidean`] | admissible | admissible |
//! | [`Manhattan`] | exact on open grids | overestimates |
//! | [`Octile`] | admissible | exact on open grids |
//! | [`Zero`] | admissible (Dijkstra) | admissible (Dijkstra) |
//!
//! Equal-score frontier entries are expanded in insertion order, so the
//! same grid and endpoints always yield the same path.

mod config;
mod distance;
mod engine;
mod error;
mod frontier;
mod heuristic;
mod path;

pub use config::SearchConfig;
pub use distance::{chebyshev, euclidean, manhattan, octile};
pub use engine::{PathSearchEngine, SearchStats, SearchStatus, find_path};
pub use error::{PathError, SearchError};
pub use heuristic::{Euclidean, Heuristic, Manhattan, Octile, Zero};
pub use path::{PathIter, PathView};
