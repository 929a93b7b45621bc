//! Sparse Game of Life Simulator
//!
//! This library simulates Conway's Game of Life on an unbounded integer
//! lattice. Live cells are stored as a sparse set of coordinates, so
//! patterns may drift arbitrarily far from the origin, and each frame is
//! rendered from the live cells' bounding box.

pub mod config;
pub mod life;
pub mod simulation;
pub mod utils;

pub use config::Settings;
pub use life::{load_cells_from_file, Grid, LifeRules, Point};
pub use simulation::{RunSummary, Simulation, SimulationState};

use anyhow::Result;
use std::io::Write;

/// Run a grid to extinction, writing one frame block per generation
pub fn simulate<W: Write>(grid: Grid, settings: &Settings, out: &mut W) -> Result<RunSummary> {
    let mut simulation = Simulation::new(grid, settings);
    simulation.run(out)
}
