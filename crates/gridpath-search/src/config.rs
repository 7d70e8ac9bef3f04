use gridpath_core::Movement;

/// Tunables for a [`PathSearchEngine`](crate::PathSearchEngine).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Neighbourhood and step-cost model.
    pub movement: Movement,
    /// Allow diagonal steps that squeeze past a blocked orthogonal cell.
    /// Only meaningful for [`Movement::Octile`].
    pub corner_cutting: bool,
    /// Give up after expanding this many cells. Reaching the goal and
    /// skipping stale frontier entries do not count.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    pub const fn new(movement: Movement) -> Self {
        Self {
            movement,
            corner_cutting: false,
            max_expansions: None,
        }
    }

    /// Set the movement model (builder).
    #[inline]
    pub const fn with_movement(mut self, movement: Movement) -> Self {
        self.movement = movement;
        self
    }

    /// Enable or disable corner cutting (builder).
    #[inline]
    pub const fn with_corner_cutting(mut self, corner_cutting: bool) -> Self {
        self.corner_cutting = corner_cutting;
        self
    }

    /// Set the expansion budget (builder).
    #[inline]
    pub const fn with_max_expansions(mut self, max: Option<usize>) -> Self {
        self.max_expansions = max;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(Movement::default())
    }
}
