use gridpath_core::{Grid, Point};
use log::{debug, trace};

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::heuristic::Heuristic;
use crate::path::PathView;

/// Lifecycle of a [`PathSearchEngine`] run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SearchStatus {
    /// No run started, or the last call was rejected before it began.
    #[default]
    Idle,
    /// A run is exploring the frontier.
    Running,
    /// The last run reached the goal.
    Succeeded,
    /// The last run ended without reaching the goal.
    Failed,
}

/// Counters from the most recent run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cells closed and expanded (the goal is popped but not expanded).
    pub expanded: usize,
    /// Entries pushed onto the frontier, stale re-insertions included.
    pub pushed: usize,
    /// Largest frontier size seen.
    pub peak_frontier: usize,
}

/// A* search over a [`Grid`].
///
/// The engine owns its frontier, closed set and neighbour buffer and reuses
/// them between runs, so repeated searches on same-sized grids do not
/// allocate after the first one. Per-cell scores and links are written into
/// the grid's [`SearchMarks`](gridpath_core::SearchMarks), which every run
/// resets first.
#[derive(Debug, Default)]
pub struct PathSearchEngine {
    config: SearchConfig,
    status: SearchStatus,
    frontier: Frontier,
    closed: Vec<bool>,
    nbuf: Vec<Point>,
    popped: Vec<Point>,
    stats: SearchStats,
}

impl PathSearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            nbuf: Vec::with_capacity(8),
            ..Self::default()
        }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    #[inline]
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Cells in the order they were popped from the frontier during the last
    /// run, goal included.
    #[inline]
    pub fn expansion_order(&self) -> &[Point] {
        &self.popped
    }

    /// Find the cheapest path from `start` to `goal`.
    ///
    /// Endpoints are validated before any search state is touched: an
    /// endpoint outside the grid yields [`SearchError::OutOfBounds`] and a
    /// blocked one [`SearchError::NotWalkable`]. An exhausted frontier yields
    /// [`SearchError::NoPathFound`], which is an ordinary outcome rather
    /// than a fault.
    ///
    /// On success the returned [`PathView`] borrows the grid, so the grid
    /// cannot be edited or searched again while the view is alive.
    pub fn find_path<'g, H: Heuristic + ?Sized>(
        &mut self,
        grid: &'g mut Grid,
        start: Point,
        goal: Point,
        heuristic: &H,
    ) -> Result<PathView<'g>, SearchError> {
        self.status = SearchStatus::Idle;
        check_endpoint(grid, start)?;
        check_endpoint(grid, goal)?;

        debug!(
            "search {start} -> {goal} ({:?}, corner cutting {})",
            self.config.movement, self.config.corner_cutting
        );
        self.status = SearchStatus::Running;

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let outcome = self.run(grid, start, goal, heuristic, &mut nbuf);
        self.nbuf = nbuf;

        match outcome {
            Ok(()) => {
                self.status = SearchStatus::Succeeded;
                let view = PathView::link(grid, start, goal);
                debug!(
                    "path {start} -> {goal}: {} cells, cost {:.3}, {} expanded",
                    view.len(),
                    view.cost(),
                    self.stats.expanded
                );
                Ok(view)
            }
            Err(err) => {
                self.status = SearchStatus::Failed;
                debug!("{err} ({} expanded)", self.stats.expanded);
                Err(err)
            }
        }
    }

    fn run<H: Heuristic + ?Sized>(
        &mut self,
        grid: &mut Grid,
        start: Point,
        goal: Point,
        heuristic: &H,
        nbuf: &mut Vec<Point>,
    ) -> Result<(), SearchError> {
        grid.reset_search_state();
        self.frontier.clear();
        self.closed.clear();
        self.closed.resize(grid.len(), false);
        self.popped.clear();
        self.stats = SearchStats::default();

        let movement = self.config.movement;
        let seed = heuristic.estimate(start, goal);
        {
            let marks = grid
                .cell_at_mut(start)
                .map_err(|_| SearchError::OutOfBounds(start))?
                .marks_mut();
            marks.cost = Some(0.0);
            marks.score = Some(seed);
        }
        self.push(start, seed);

        loop {
            let Some(current) = self.frontier.pop() else {
                return Err(SearchError::NoPathFound { start, goal });
            };
            let Some(ci) = grid.index(current.pos) else {
                continue;
            };
            // Stale entry: a cheaper copy was already expanded.
            if self.closed[ci] {
                continue;
            }

            self.popped.push(current.pos);
            if current.pos == goal {
                return Ok(());
            }
            if let Some(max) = self.config.max_expansions {
                if self.stats.expanded >= max {
                    return Err(SearchError::BudgetExhausted {
                        expanded: self.stats.expanded,
                    });
                }
            }

            self.closed[ci] = true;
            self.stats.expanded += 1;
            trace!("expand {} score {:.3}", current.pos, current.score);

            let current_cost = grid
                .cell_at(current.pos)
                .map_err(|_| SearchError::OutOfBounds(current.pos))?
                .marks().cost.unwrap_or(0.0);
            nbuf.clear();
            grid.neighbors_into(current.pos, movement, nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                if self.closed[ni] || !grid.is_passable(np) || !self.may_step(grid, current.pos, np)
                {
                    continue;
                }
                let tentative_cost = current_cost + movement.step_cost(np - current.pos);
                let tentative_score = tentative_cost + heuristic.estimate(np, goal);

                let marks = grid
                    .cell_at_mut(np)
                    .map_err(|_| SearchError::OutOfBounds(np))?
                    .marks_mut();
                if marks.score.is_some_and(|s| tentative_score >= s) {
                    continue;
                }
                marks.cost = Some(tentative_cost);
                marks.score = Some(tentative_score);
                marks.predecessor = Some(current.pos);
                self.push(np, tentative_score);
            }
        }
    }

    fn push(&mut self, p: Point, score: f64) {
        self.frontier.push(p, score);
        self.stats.pushed += 1;
        self.stats.peak_frontier = self.stats.peak_frontier.max(self.frontier.len());
    }

    /// Diagonal steps need both orthogonal corners open unless corner
    /// cutting is enabled.
    fn may_step(&self, grid: &Grid, from: Point, to: Point) -> bool {
        if self.config.corner_cutting || from.x == to.x || from.y == to.y {
            return true;
        }
        grid.is_passable(Point::new(to.x, from.y)) && grid.is_passable(Point::new(from.x, to.y))
    }
}

fn check_endpoint(grid: &Grid, p: Point) -> Result<(), SearchError> {
    match grid.cell_at(p) {
        Ok(cell) if cell.is_walkable() => Ok(()),
        Ok(_) => Err(SearchError::NotWalkable(p)),
        Err(_) => Err(SearchError::OutOfBounds(p)),
    }
}

/// One-shot search with the default [`SearchConfig`] (octile movement, no
/// corner cutting, no budget).
pub fn find_path<'g, H: Heuristic + ?Sized>(
    grid: &'g mut Grid,
    start: Point,
    goal: Point,
    heuristic: &H,
) -> Result<PathView<'g>, SearchError> {
    PathSearchEngine::new(SearchConfig::default()).find_path(grid, start, goal, heuristic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::{Euclidean, Manhattan};
    use gridpath_core::Movement;

    fn cardinal() -> PathSearchEngine {
        PathSearchEngine::new(SearchConfig::new(Movement::Cardinal))
    }

    fn points(view: &PathView<'_>) -> Vec<Point> {
        view.iter().map(|c| c.pos()).collect()
    }

    #[test]
    fn equal_scores_expand_first_inserted() {
        // From (0,0), (1,0) and (0,1) tie on score; (1,0) was pushed first,
        // so the goal is first reached from it.
        let mut grid = Grid::new(2, 2).unwrap();
        let mut engine = cardinal();
        let view = engine
            .find_path(&mut grid, Point::new(0, 0), Point::new(1, 1), &Euclidean)
            .unwrap();
        assert_eq!(
            points(&view),
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)]
        );
        assert_eq!(
            engine.expansion_order(),
            &[
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(0, 1),
                Point::new(1, 1)
            ]
        );
    }

    #[test]
    fn tie_break_holds_with_manhattan() {
        let mut grid = Grid::new(3, 3).unwrap();
        let mut engine = cardinal();
        let view = engine
            .find_path(&mut grid, Point::new(0, 0), Point::new(2, 2), &Manhattan)
            .unwrap();
        // Every monotone route ties; FIFO ordering keeps expanding along the
        // first-inserted (rightward) branch.
        assert_eq!(
            points(&view),
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(2, 1),
                Point::new(2, 2)
            ]
        );
    }

    #[test]
    fn status_transitions() {
        let mut grid = Grid::new(3, 1).unwrap();
        let mut engine = cardinal();
        assert_eq!(engine.status(), SearchStatus::Idle);
        engine
            .find_path(&mut grid, Point::new(0, 0), Point::new(2, 0), &Euclidean)
            .unwrap();
        assert_eq!(engine.status(), SearchStatus::Succeeded);

        grid.set_walkable(Point::new(1, 0), false).unwrap();
        let err = engine
            .find_path(&mut grid, Point::new(0, 0), Point::new(2, 0), &Euclidean)
            .unwrap_err();
        assert!(err.is_no_path());
        assert_eq!(engine.status(), SearchStatus::Failed);

        let err = engine
            .find_path(&mut grid, Point::new(1, 0), Point::new(2, 0), &Euclidean)
            .unwrap_err();
        assert_eq!(err, SearchError::NotWalkable(Point::new(1, 0)));
        assert_eq!(engine.status(), SearchStatus::Idle);
    }

    #[test]
    fn rejected_endpoints_leave_grid_untouched() {
        let mut grid = Grid::new(4, 4).unwrap();
        let mut engine = cardinal();
        engine
            .find_path(&mut grid, Point::new(0, 0), Point::new(3, 3), &Euclidean)
            .unwrap();
        let before: Vec<_> = grid.iter().map(|c| *c.marks()).collect();

        let err = engine
            .find_path(&mut grid, Point::new(0, 0), Point::new(4, 0), &Euclidean)
            .unwrap_err();
        assert_eq!(err, SearchError::OutOfBounds(Point::new(4, 0)));
        assert!(err.is_caller_error());
        let after: Vec<_> = grid.iter().map(|c| *c.marks()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn budget_stops_the_search() {
        let mut grid = Grid::new(10, 10).unwrap();
        let mut engine =
            PathSearchEngine::new(SearchConfig::default().with_max_expansions(Some(3)));
        let err = engine
            .find_path(&mut grid, Point::new(0, 0), Point::new(9, 9), &Euclidean)
            .unwrap_err();
        assert_eq!(err, SearchError::BudgetExhausted { expanded: 3 });
        assert_eq!(engine.status(), SearchStatus::Failed);

        // A budget large enough for the whole route succeeds.
        engine.set_config(SearchConfig::default().with_max_expansions(Some(9)));
        let view = engine
            .find_path(&mut grid, Point::new(0, 0), Point::new(9, 9), &Euclidean)
            .unwrap();
        assert_eq!(view.len(), 10);
    }

    #[test]
    fn corner_cutting_is_configurable() {
        let map = "
S#
.G
";
        let mut grid = Grid::from_ascii(map).unwrap();
        let start = Point::new(0, 0);
        let goal = Point::new(1, 1);

        let mut engine = PathSearchEngine::new(SearchConfig::default());
        assert_eq!(
            engine.find_path(&mut grid, start, goal, &Euclidean).unwrap().len(),
            3
        );

        engine.set_config(SearchConfig::default().with_corner_cutting(true));
        assert_eq!(
            engine.find_path(&mut grid, start, goal, &Euclidean).unwrap().len(),
            2
        );
    }

    #[test]
    fn stats_are_counted() {
        let mut grid = Grid::new(5, 1).unwrap();
        let mut engine = cardinal();
        engine
            .find_path(&mut grid, Point::new(0, 0), Point::new(4, 0), &Euclidean)
            .unwrap();
        let stats = engine.stats();
        assert_eq!(stats.expanded, 4);
        assert_eq!(stats.pushed, 5);
        assert_eq!(stats.peak_frontier, 1);
        assert_eq!(engine.expansion_order().len(), 5);
    }

    #[test]
    fn free_function_uses_octile_default() {
        let mut grid = Grid::new(4, 4).unwrap();
        let view = find_path(&mut grid, Point::new(0, 0), Point::new(3, 3), &Euclidean).unwrap();
        assert_eq!(view.len(), 4);
        assert!((view.cost() - 3.0 * std::f64::consts::SQRT_2).abs() < 1e-9);
    }
}
