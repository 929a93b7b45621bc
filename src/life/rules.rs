//! Game of Life rules over the sparse grid

use super::{Grid, Point};
use rayon::prelude::*;

/// The standard B3/S23 rules engine.
pub struct LifeRules;

impl LifeRules {
    /// Count how many of the 8 Moore neighbors of `cell` are alive in `grid`.
    ///
    /// Pure query against the grid snapshot; the result is always in `0..=8`.
    pub fn count_neighbors(grid: &Grid, cell: Point) -> u8 {
        cell.neighbors()
            .filter(|&neighbor| grid.contains(neighbor))
            .count() as u8
    }

    /// Whether a cell is alive in the next generation, given its current
    /// state and live-neighbor count.
    pub fn should_be_alive(alive_now: bool, neighbors: u8) -> bool {
        match (alive_now, neighbors) {
            (true, 2) | (true, 3) | (false, 3) => true, // Survival or birth
            _ => false,                                 // Death
        }
    }

    /// Produce the next generation from an immutable snapshot of the
    /// current one.
    ///
    /// Every live cell contributes its full 3x3 neighborhood as candidate
    /// cells, so births in dead regions adjacent to life are reached without
    /// tracking dead cells. Overlapping neighborhoods emit the same
    /// candidate several times; each emission recounts neighbors against the
    /// snapshot and the set collection deduplicates the insertions.
    pub fn evolve(current: &Grid) -> Grid {
        current
            .par_iter()
            .flat_map_iter(Point::neighborhood)
            .filter(|&candidate| {
                let neighbors = Self::count_neighbors(current, candidate);
                Self::should_be_alive(current.contains(candidate), neighbors)
            })
            .collect()
    }

    /// Evolve a grid over several generations.
    pub fn evolve_generations(mut grid: Grid, generations: usize) -> Grid {
        for _ in 0..generations {
            grid = Self::evolve(&grid);
        }
        grid
    }
}
