//! The generation loop: render, evolve, pace, report

use crate::config::Settings;
use crate::life::{Grid, LifeRules};
use crate::utils::display::{format_generation_time, GridRenderer};
use anyhow::Result;
use std::io::Write;
use std::thread;
use std::time::{Duration, Instant};

/// Whether the simulation can still advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationState {
    Running,
    Stopped,
}

/// Totals reported once a simulation has run to extinction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub generations: u64,
    pub peak_population: usize,
}

/// Drives a grid generation by generation, writing one frame block per step
/// and pacing the loop to the configured minimum frame interval.
///
/// Each generation owns its grid snapshot outright: the successor is built
/// from an immutable borrow of the current grid and only published as the
/// new current grid once complete.
pub struct Simulation {
    grid: Grid,
    renderer: GridRenderer,
    frame_interval: Duration,
    generation: u64,
    peak_population: usize,
}

impl Simulation {
    /// Create a simulation over an initial grid
    pub fn new(grid: Grid, settings: &Settings) -> Self {
        let peak_population = grid.len();
        Self {
            grid,
            renderer: GridRenderer::from_config(&settings.display),
            frame_interval: settings.simulation.frame_interval(),
            generation: 0,
            peak_population,
        }
    }

    /// `Stopped` once every cell has died; `Running` otherwise.
    pub fn state(&self) -> SimulationState {
        if self.grid.is_empty() {
            SimulationState::Stopped
        } else {
            SimulationState::Running
        }
    }

    /// The current grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Completed generation count
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance one generation.
    ///
    /// Writes the current frame, computes the successor grid, sleeps out the
    /// remainder of the frame interval when the computation finished early,
    /// then writes the compute duration line and a blank separator. Slow
    /// generations are never delayed further. Does nothing once `Stopped`.
    pub fn advance<W: Write>(&mut self, out: &mut W) -> Result<()> {
        if self.state() == SimulationState::Stopped {
            return Ok(());
        }

        out.write_all(self.renderer.render(&self.grid).as_bytes())?;

        let started = Instant::now();
        let next = LifeRules::evolve(&self.grid);
        let elapsed = started.elapsed();

        if elapsed < self.frame_interval {
            thread::sleep(self.frame_interval - elapsed);
        }

        writeln!(out, "{}", format_generation_time(elapsed))?;
        writeln!(out)?;
        out.flush()?;

        self.grid = next;
        self.generation += 1;
        self.peak_population = self.peak_population.max(self.grid.len());
        log::debug!(
            "generation {} complete, {} cells alive",
            self.generation,
            self.grid.len()
        );

        Ok(())
    }

    /// Run generations until the grid dies out
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<RunSummary> {
        while self.state() == SimulationState::Running {
            self.advance(out)?;
        }

        Ok(RunSummary {
            generations: self.generation,
            peak_population: self.peak_population,
        })
    }
}
