use gridpath_core::{Movement, Point};

use crate::distance::{euclidean, manhattan, octile};

/// Estimate of the remaining cost from a cell to the goal.
///
/// Implementations must be pure. A heuristic that never overestimates the
/// true remaining cost (admissible) keeps the returned paths optimal.
pub trait Heuristic {
    /// Estimated cost of travelling from `from` to `to`.
    fn estimate(&self, from: Point, to: Point) -> f64;

    /// Whether this heuristic never overestimates under `movement`.
    ///
    /// Defaults to `true`, so closures report themselves admissible
    /// without any check.
    fn is_admissible_for(&self, movement: Movement) -> bool {
        let _ = movement;
        true
    }
}

impl<F: Fn(Point, Point) -> f64> Heuristic for F {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> f64 {
        self(from, to)
    }
}

/// Straight-line distance. Admissible under every [`Movement`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Euclidean;

impl Heuristic for Euclidean {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> f64 {
        euclidean(from, to)
    }
}

/// Grid-step distance. Exact on open 4-connected grids; overestimates
/// diagonal routes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> f64 {
        f64::from(manhattan(from, to))
    }

    fn is_admissible_for(&self, movement: Movement) -> bool {
        movement == Movement::Cardinal
    }
}

/// Octile distance. Exact on open 8-connected grids.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Octile;

impl Heuristic for Octile {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> f64 {
        octile(from, to)
    }
}

/// Always zero: turns the search into Dijkstra's algorithm.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Zero;

impl Heuristic for Zero {
    #[inline]
    fn estimate(&self, _from: Point, _to: Point) -> f64 {
        0.0
    }
}
