//! Sparse storage for the set of live cells

use super::Point;
use rayon::prelude::*;
use std::collections::HashSet;

/// The set of currently live cells.
///
/// Absence from the set means dead, and no bounds are stored: the active
/// region is inferred from the members whenever it is needed. One generation
/// owns exactly one `Grid`; the step algorithm reads it as an immutable
/// snapshot and builds a fresh successor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cells: HashSet<Point>,
}

impl Grid {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a live cell. Returns `true` if the cell was not already present.
    pub fn insert(&mut self, cell: Point) -> bool {
        self.cells.insert(cell)
    }

    /// Whether the cell is alive. Amortized O(1).
    pub fn contains(&self, cell: Point) -> bool {
        self.cells.contains(&cell)
    }

    /// Number of live cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid holds no live cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over the live cells in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells.iter().copied()
    }

    /// Parallel iterator over the live cells.
    pub fn par_iter(&self) -> impl ParallelIterator<Item = Point> + '_ {
        self.cells.par_iter().copied()
    }

    /// The axis-aligned bounding box covering every live cell, as an
    /// inclusive `(min, max)` pair, or `None` for an empty grid.
    ///
    /// Recomputed by folding over all members on every call; nothing is
    /// cached.
    pub fn extent(&self) -> Option<(Point, Point)> {
        self.iter().fold(None, |extent, cell| match extent {
            None => Some((cell, cell)),
            Some((min, max)) => Some((min.component_min(cell), max.component_max(cell))),
        })
    }
}

impl FromIterator<Point> for Grid {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl FromParallelIterator<Point> for Grid {
    fn from_par_iter<I>(par_iter: I) -> Self
    where
        I: IntoParallelIterator<Item = Point>,
    {
        Self {
            cells: par_iter.into_par_iter().collect(),
        }
    }
}
