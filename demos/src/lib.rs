//! Shared pieces of the gridpath demos: a sample map, CLI value types and a
//! plain-text renderer that overlays a found path on the map.

use clap::ValueEnum;
use gridpath_core::{Grid, Movement, grid};
use gridpath_search::{Euclidean, Heuristic, Manhattan, Octile, PathView, Zero};

/// Map character for cells on the found path.
pub const PATH: char = '*';

pub const DEFAULT_MAP: &str = "\
S.......#...........
.######.#.#########.
.#......#.#.......#.
.#.######.#.#####.#.
.#........#.#...#.#.
.##########.#.#.#.#.
............#.#G#...
.############.###.#.
..................#.";

/// Movement model selectable from the command line.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum MovementArg {
    Cardinal,
    #[default]
    Octile,
}

impl From<MovementArg> for Movement {
    fn from(m: MovementArg) -> Self {
        match m {
            MovementArg::Cardinal => Movement::Cardinal,
            MovementArg::Octile => Movement::Octile,
        }
    }
}

/// Heuristic selectable from the command line.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum HeuristicArg {
    #[default]
    Euclidean,
    Manhattan,
    Octile,
    Zero,
}

impl HeuristicArg {
    pub fn heuristic(self) -> Box<dyn Heuristic> {
        match self {
            Self::Euclidean => Box::new(Euclidean),
            Self::Manhattan => Box::new(Manhattan),
            Self::Octile => Box::new(Octile),
            Self::Zero => Box::new(Zero),
        }
    }
}

/// Render the grid as ASCII, marking `path` cells (other than the start
/// and objectives) with [`PATH`].
pub fn render(grid: &Grid, path: Option<&PathView<'_>>) -> String {
    let width = grid.width().max(0) as usize;
    let mut out = String::with_capacity(grid.len() + grid.height().max(0) as usize);
    for (i, cell) in grid.iter().enumerate() {
        if i > 0 && i % width == 0 {
            out.push('\n');
        }
        let ch = if cell.is_start() {
            grid::START
        } else if cell.is_objective() {
            grid::OBJECTIVE
        } else if !cell.is_walkable() {
            grid::WALL
        } else if path.is_some_and(|v| v.contains(cell.pos())) {
            PATH
        } else {
            grid::FLOOR
        };
        out.push(ch);
    }
    out
}
