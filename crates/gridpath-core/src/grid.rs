//! The [`Grid`] type: a fixed-size arena of [`Cell`]s addressed by [`Point`].
//!
//! Cells are stored row-major in a single `Vec`. Search links between cells
//! are coordinates into this arena, so the grid is the sole owner of every
//! cell and no reference cycles can form.

use std::fmt;

use crate::cell::{Cell, Terrain};
use crate::geom::{Point, Range};
use crate::movement::Movement;

/// Map character for walkable floor in [`Grid::from_ascii`].
pub const FLOOR: char = '.';
/// Map character for blocked terrain.
pub const WALL: char = '#';
/// Map character for the start cell.
pub const START: char = 'S';
/// Map character for an objective cell.
pub const OBJECTIVE: char = 'G';

/// A rectangular grid of cells with origin (0, 0).
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
}

impl Grid {
    /// Create a grid of open, walkable cells.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidSize { width, height });
        }
        let bounds = Range::new(0, 0, width, height);
        let cells = bounds.iter().map(|p| Cell::new(p, Terrain::OPEN)).collect();
        Ok(Self { cells, bounds })
    }

    /// Build a grid from an ASCII map.
    ///
    /// `.` is floor, `#` is a wall, `S` is the start and `G` an objective.
    /// Leading/trailing whitespace of the whole string is trimmed; every
    /// line must have the same width.
    pub fn from_ascii(s: &str) -> Result<Self, GridError> {
        let s = s.trim();
        let rows: Vec<&str> = s.lines().collect();
        let width = rows.first().map_or(0, |r| r.chars().count()) as i32;
        let mut grid = Self::new(width, rows.len() as i32)?;

        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() as i32 != width {
                return Err(GridError::InconsistentSize {
                    expected: width,
                    line: y as i32,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let p = Point::new(x as i32, y as i32);
                match ch {
                    FLOOR => {}
                    WALL => grid.set_walkable(p, false)?,
                    START => {
                        if grid.set_start(p)?.is_some() {
                            return Err(GridError::MultipleStarts(p));
                        }
                    }
                    OBJECTIVE => grid.set_objective(p, true)?,
                    _ => return Err(GridError::InvalidRune { ch, pos: p }),
                }
            }
        }
        Ok(grid)
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of cells, `width * height`.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a grid has positive dimensions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.y as usize * self.bounds.width() as usize + p.x as usize)
    }

    /// The cell at `p`.
    pub fn cell_at(&self, p: Point) -> Result<&Cell, GridError> {
        self.index(p)
            .map(|i| &self.cells[i])
            .ok_or(GridError::OutOfBounds(p))
    }

    /// Mutable access to the cell at `p`.
    pub fn cell_at_mut(&mut self, p: Point) -> Result<&mut Cell, GridError> {
        let i = self.index(p).ok_or(GridError::OutOfBounds(p))?;
        Ok(&mut self.cells[i])
    }

    /// Whether `p` is inside the grid and walkable.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.index(p).is_some_and(|i| self.cells[i].is_walkable())
    }

    pub fn set_walkable(&mut self, p: Point, walkable: bool) -> Result<(), GridError> {
        self.cell_at_mut(p)?.terrain_mut().walkable = walkable;
        Ok(())
    }

    pub fn set_objective(&mut self, p: Point, objective: bool) -> Result<(), GridError> {
        self.cell_at_mut(p)?.terrain_mut().objective = objective;
        Ok(())
    }

    /// Flag `p` as the start cell, clearing the flag on the previous start.
    ///
    /// Returns the previous start, if it was a different cell.
    pub fn set_start(&mut self, p: Point) -> Result<Option<Point>, GridError> {
        let i = self.index(p).ok_or(GridError::OutOfBounds(p))?;
        let previous = self.clear_start().filter(|&old| old != p);
        self.cells[i].terrain_mut().start = true;
        Ok(previous)
    }

    /// Remove the start flag from the grid, returning where it was.
    pub fn clear_start(&mut self) -> Option<Point> {
        let cell = self.cells.iter_mut().find(|c| c.is_start())?;
        cell.terrain_mut().start = false;
        Some(cell.pos())
    }

    /// Position of the cell flagged as start, if any.
    pub fn start(&self) -> Option<Point> {
        self.cells.iter().find(|c| c.is_start()).map(Cell::pos)
    }

    /// Positions of all objective cells, row-major.
    pub fn objectives(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells
            .iter()
            .filter(|c| c.is_objective())
            .map(Cell::pos)
    }

    /// In-bounds neighbours of `p` under `movement`, in the model's fixed
    /// clockwise order starting from up.
    pub fn neighbors_of(&self, p: Point, movement: Movement) -> Vec<Point> {
        let mut buf = Vec::with_capacity(8);
        self.neighbors_into(p, movement, &mut buf);
        buf
    }

    /// Like [`neighbors_of`](Self::neighbors_of) but appends into `buf`.
    /// The caller clears `buf` before calling.
    pub fn neighbors_into(&self, p: Point, movement: Movement, buf: &mut Vec<Point>) {
        for &d in movement.directions() {
            let n = p + d;
            if self.contains(n) {
                buf.push(n);
            }
        }
    }

    /// Clear the search marks of every cell.
    pub fn reset_search_state(&mut self) {
        for c in self.cells.iter_mut() {
            c.clear_marks();
        }
    }

    /// Row-major iterator over all cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Errors from building or addressing a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Coordinate outside `[0, width) x [0, height)`.
    OutOfBounds(Point),
    /// Width or height not positive.
    InvalidSize { width: i32, height: i32 },
    /// An ASCII map line has a different width than the first line.
    InconsistentSize { expected: i32, line: i32 },
    /// An ASCII map contains an unknown character.
    InvalidRune { ch: char, pos: Point },
    /// An ASCII map flags more than one start cell.
    MultipleStarts(Point),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "grid: position {p} is out of bounds"),
            Self::InvalidSize { width, height } => {
                write!(f, "grid: invalid size {width}x{height}")
            }
            Self::InconsistentSize { expected, line } => {
                write!(f, "grid: line {line} is not {expected} cells wide")
            }
            Self::InvalidRune { ch, pos } => {
                write!(f, "grid: invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::MultipleStarts(p) => write!(f, "grid: second start cell at {p}"),
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "
S..#
.#..
...G
";

    #[test]
    fn new_rejects_non_positive_sizes() {
        assert_eq!(
            Grid::new(0, 3).unwrap_err(),
            GridError::InvalidSize {
                width: 0,
                height: 3
            }
        );
        assert!(Grid::new(3, -1).is_err());
    }

    #[test]
    fn cell_at_bounds() {
        let g = Grid::new(4, 3).unwrap();
        assert_eq!(g.len(), 12);
        assert_eq!(g.cell_at(Point::new(3, 2)).unwrap().pos(), Point::new(3, 2));
        assert_eq!(
            g.cell_at(Point::new(4, 0)).unwrap_err(),
            GridError::OutOfBounds(Point::new(4, 0))
        );
        assert!(g.cell_at(Point::new(0, -1)).is_err());
    }

    #[test]
    fn every_coordinate_has_its_cell() {
        let g = Grid::new(5, 4).unwrap();
        for p in g.bounds() {
            assert_eq!(g.cell_at(p).unwrap().pos(), p);
        }
    }

    #[test]
    fn from_ascii_flags() {
        let g = Grid::from_ascii(ROOM).unwrap();
        assert_eq!(g.size(), Point::new(4, 3));
        assert_eq!(g.start(), Some(Point::new(0, 0)));
        assert_eq!(g.objectives().collect::<Vec<_>>(), vec![Point::new(3, 2)]);
        assert!(!g.is_passable(Point::new(3, 0)));
        assert!(!g.is_passable(Point::new(1, 1)));
        assert!(g.is_passable(Point::new(3, 2)));
        assert!(!g.is_passable(Point::new(9, 9)));
    }

    #[test]
    fn from_ascii_errors() {
        assert_eq!(
            Grid::from_ascii("..\n...").unwrap_err(),
            GridError::InconsistentSize {
                expected: 2,
                line: 1
            }
        );
        assert_eq!(
            Grid::from_ascii(".x").unwrap_err(),
            GridError::InvalidRune {
                ch: 'x',
                pos: Point::new(1, 0)
            }
        );
        assert_eq!(
            Grid::from_ascii("S.S").unwrap_err(),
            GridError::MultipleStarts(Point::new(2, 0))
        );
        assert!(matches!(
            Grid::from_ascii("   ").unwrap_err(),
            GridError::InvalidSize { .. }
        ));
    }

    #[test]
    fn set_start_moves_the_flag() {
        let mut g = Grid::new(3, 3).unwrap();
        assert_eq!(g.set_start(Point::new(0, 0)).unwrap(), None);
        assert_eq!(g.set_start(Point::new(0, 0)).unwrap(), None);
        assert_eq!(g.set_start(Point::new(2, 1)).unwrap(), Some(Point::new(0, 0)));
        assert_eq!(g.iter().filter(|c| c.is_start()).count(), 1);
        assert_eq!(g.start(), Some(Point::new(2, 1)));
        assert_eq!(g.clear_start(), Some(Point::new(2, 1)));
        assert_eq!(g.start(), None);
    }

    #[test]
    fn neighbors_are_in_bounds() {
        let g = Grid::new(3, 3).unwrap();
        let corner = g.neighbors_of(Point::new(0, 0), Movement::Cardinal);
        assert_eq!(corner, vec![Point::new(1, 0), Point::new(0, 1)]);
        let corner8 = g.neighbors_of(Point::new(0, 0), Movement::Octile);
        assert_eq!(
            corner8,
            vec![Point::new(1, 0), Point::new(1, 1), Point::new(0, 1)]
        );
        assert_eq!(g.neighbors_of(Point::new(1, 1), Movement::Octile).len(), 8);
        assert_eq!(g.neighbors_of(Point::new(1, 1), Movement::Cardinal).len(), 4);
    }

    #[test]
    fn neighbors_include_blocked_cells() {
        let mut g = Grid::new(3, 1).unwrap();
        g.set_walkable(Point::new(1, 0), false).unwrap();
        let ns = g.neighbors_of(Point::new(0, 0), Movement::Cardinal);
        assert_eq!(ns, vec![Point::new(1, 0)]);
    }

    #[test]
    fn reset_clears_marks() {
        let mut g = Grid::new(2, 2).unwrap();
        let m = g.cell_at_mut(Point::new(1, 1)).unwrap().marks_mut();
        m.score = Some(3.0);
        m.predecessor = Some(Point::new(0, 1));
        g.reset_search_state();
        assert!(g.iter().all(|c| c.marks().is_clear()));
    }
}
