//! The [`Cell`] type: one grid square with terrain flags and search marks.

use crate::geom::Point;

/// Terrain flags of a cell, set by whoever edits the map.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Terrain {
    pub walkable: bool,
    pub objective: bool,
    pub start: bool,
}

impl Terrain {
    /// Open floor: walkable, neither start nor objective.
    pub const OPEN: Self = Self {
        walkable: true,
        objective: false,
        start: false,
    };

    /// Blocked terrain.
    pub const BLOCKED: Self = Self {
        walkable: false,
        objective: false,
        start: false,
    };

    /// Set the walkable flag (builder).
    #[inline]
    pub const fn with_walkable(mut self, walkable: bool) -> Self {
        self.walkable = walkable;
        self
    }

    /// Set the objective flag (builder).
    #[inline]
    pub const fn with_objective(mut self, objective: bool) -> Self {
        self.objective = objective;
        self
    }
}

impl Default for Terrain {
    #[inline]
    fn default() -> Self {
        Self::OPEN
    }
}

/// Transient bookkeeping written by a search run.
///
/// Links are coordinates into the owning [`Grid`](crate::Grid), never owning
/// references, so stale links are cleared by simply resetting the marks.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SearchMarks {
    /// Accumulated cost from the start along the best known route.
    pub cost: Option<f64>,
    /// Best known total estimate: `cost` plus the heuristic to the goal.
    pub score: Option<f64>,
    /// Cell this one was reached from on the best known route.
    pub predecessor: Option<Point>,
    /// Next cell towards the goal; only set on a finalized path.
    pub successor: Option<Point>,
}

impl SearchMarks {
    /// Whether no search has touched this cell since the last reset.
    #[inline]
    pub fn is_clear(&self) -> bool {
        self.cost.is_none()
            && self.score.is_none()
            && self.predecessor.is_none()
            && self.successor.is_none()
    }
}

/// A single grid cell.
///
/// The position is fixed once the cell is placed in a grid. Terrain is
/// edited through the grid so that the single-start rule holds.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pos: Point,
    terrain: Terrain,
    marks: SearchMarks,
}

impl Cell {
    pub(crate) fn new(pos: Point, terrain: Terrain) -> Self {
        Self {
            pos,
            terrain,
            marks: SearchMarks::default(),
        }
    }

    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn terrain(&self) -> Terrain {
        self.terrain
    }

    #[inline]
    pub fn is_walkable(&self) -> bool {
        self.terrain.walkable
    }

    #[inline]
    pub fn is_objective(&self) -> bool {
        self.terrain.objective
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        self.terrain.start
    }

    pub(crate) fn terrain_mut(&mut self) -> &mut Terrain {
        &mut self.terrain
    }

    /// Search bookkeeping from the most recent run.
    #[inline]
    pub fn marks(&self) -> &SearchMarks {
        &self.marks
    }

    /// Mutable search bookkeeping. Only search engines should write here.
    #[inline]
    pub fn marks_mut(&mut self) -> &mut SearchMarks {
        &mut self.marks
    }

    #[inline]
    pub fn score(&self) -> Option<f64> {
        self.marks.score
    }

    #[inline]
    pub fn predecessor(&self) -> Option<Point> {
        self.marks.predecessor
    }

    #[inline]
    pub fn successor(&self) -> Option<Point> {
        self.marks.successor
    }

    pub(crate) fn clear_marks(&mut self) {
        self.marks = SearchMarks::default();
    }
}
