//! Movement models: which cells are adjacent and what a step costs.

use std::f64::consts::SQRT_2;

use crate::geom::Point;

const CARDINAL: [Point; 4] = [
    Point::new(0, -1),
    Point::new(1, 0),
    Point::new(0, 1),
    Point::new(-1, 0),
];

const OCTILE: [Point; 8] = [
    Point::new(0, -1),
    Point::new(1, -1),
    Point::new(1, 0),
    Point::new(1, 1),
    Point::new(0, 1),
    Point::new(-1, 1),
    Point::new(-1, 0),
    Point::new(-1, -1),
];

/// Neighbourhood and step-cost model used by a search.
///
/// | Model | Neighbours | Cardinal step | Diagonal step |
/// |---|---|---|---|
/// | `Cardinal` | 4 | 1 | n/a |
/// | `Octile` | 8 | 1 | √2 |
///
/// Under both models a step never costs less than the straight-line
/// distance it covers, so a Euclidean heuristic stays admissible.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Movement {
    Cardinal,
    #[default]
    Octile,
}

impl Movement {
    /// Unit offsets of adjacent cells, clockwise starting from up.
    #[inline]
    pub fn directions(self) -> &'static [Point] {
        match self {
            Self::Cardinal => &CARDINAL,
            Self::Octile => &OCTILE,
        }
    }

    /// Cost of a single step by `delta`, which must be one of
    /// [`directions`](Self::directions).
    #[inline]
    pub fn step_cost(self, delta: Point) -> f64 {
        if delta.x != 0 && delta.y != 0 {
            SQRT_2
        } else {
            1.0
        }
    }

    /// Number of hops on a shortest route between two cells of an open grid.
    #[inline]
    pub fn hop_distance(self, a: Point, b: Point) -> i32 {
        let dx = (a.x - b.x).abs();
        let dy = (a.y - b.y).abs();
        match self {
            Self::Cardinal => dx + dy,
            Self::Octile => dx.max(dy),
        }
    }
}
