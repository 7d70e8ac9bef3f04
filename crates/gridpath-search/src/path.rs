use gridpath_core::{Cell, Grid, Point};

use crate::error::PathError;

/// Read-only view of a path finalized by a successful search.
///
/// The view borrows the grid; traversal re-derives the sequence from the
/// start cell's `successor` links on every call.
#[derive(Debug, Clone, Copy)]
pub struct PathView<'g> {
    grid: &'g Grid,
    start: Point,
    goal: Point,
    len: usize,
}

impl<'g> PathView<'g> {
    /// Walk predecessors back from `goal`, writing forward `successor` links
    /// along the way.
    pub(crate) fn link(grid: &'g mut Grid, start: Point, goal: Point) -> Self {
        let mut len = 1;
        let mut cur = goal;
        while cur != start {
            let prev = grid.cell_at(cur).ok().and_then(Cell::predecessor);
            let Some(prev) = prev else {
                debug_assert!(false, "predecessor chain from {goal} stops at {cur}");
                break;
            };
            if let Ok(cell) = grid.cell_at_mut(prev) {
                cell.marks_mut().successor = Some(cur);
            }
            cur = prev;
            len += 1;
            if len > grid.len() {
                debug_assert!(false, "predecessor cycle through {cur}");
                break;
            }
        }
        let grid: &'g Grid = grid;
        Self {
            grid,
            start,
            goal,
            len,
        }
    }

    /// Number of cells from start to goal inclusive.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: a path holds at least its start cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// The grid this path runs through.
    #[inline]
    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    /// Accumulated step cost at the goal.
    pub fn cost(&self) -> f64 {
        self.grid
            .cell_at(self.goal)
            .ok()
            .and_then(|c| c.marks().cost)
            .unwrap_or(0.0)
    }

    /// Cells from start to goal.
    pub fn iter(&self) -> PathIter<'g> {
        PathIter {
            grid: self.grid,
            next: Some(self.start),
            remaining: self.len,
        }
    }

    /// Positions from start to goal.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<'g> {
        self.iter().map(Cell::pos)
    }

    /// Collect the path, start first.
    pub fn to_sequence(&self) -> Vec<&'g Cell> {
        self.iter().collect()
    }

    /// Whether `p` lies on this path.
    pub fn contains(&self, p: Point) -> bool {
        p == self.goal
            || self
                .grid
                .cell_at(p)
                .is_ok_and(|c| c.successor().is_some())
    }

    /// Hops from the start to `p`, which must lie on this path.
    pub fn depth_of(&self, p: Point) -> Result<usize, PathError> {
        if !self.contains(p) {
            return Err(PathError::NotOnPath(p));
        }
        let mut cur = p;
        for hops in 0..self.grid.len() {
            if cur == self.start {
                return Ok(hops);
            }
            match self.grid.cell_at(cur).ok().and_then(Cell::predecessor) {
                Some(prev) => cur = prev,
                None => return Err(PathError::NotOnPath(p)),
            }
        }
        debug_assert!(false, "predecessor cycle reached from {p}");
        Err(PathError::NotOnPath(p))
    }
}

impl<'g> IntoIterator for &PathView<'g> {
    type Item = &'g Cell;
    type IntoIter = PathIter<'g>;

    fn into_iter(self) -> PathIter<'g> {
        self.iter()
    }
}

/// Start-to-goal iterator over the cells of a [`PathView`].
#[derive(Debug, Clone)]
pub struct PathIter<'g> {
    grid: &'g Grid,
    next: Option<Point>,
    remaining: usize,
}

impl<'g> Iterator for PathIter<'g> {
    type Item = &'g Cell;

    fn next(&mut self) -> Option<&'g Cell> {
        if self.remaining == 0 {
            return None;
        }
        let cell = self.grid.cell_at(self.next?).ok()?;
        self.remaining -= 1;
        self.next = cell.successor();
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}
