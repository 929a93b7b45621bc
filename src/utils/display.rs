//! Display and output formatting utilities

use crate::config::DisplayConfig;
use crate::life::{Grid, Point};
use std::time::Duration;

/// Renders the bounding box of a sparse grid as rows of glyphs.
///
/// Empty lattice positions inside the box are drawn with the dead glyph,
/// so the same pattern looks identical wherever it sits on the lattice.
pub struct GridRenderer {
    alive: String,
    dead: String,
}

impl GridRenderer {
    /// Create a renderer with explicit glyphs
    pub fn new(alive: impl Into<String>, dead: impl Into<String>) -> Self {
        Self {
            alive: alive.into(),
            dead: dead.into(),
        }
    }

    /// Create a renderer from display configuration
    pub fn from_config(config: &DisplayConfig) -> Self {
        Self::new(config.alive_glyph.clone(), config.dead_glyph.clone())
    }

    /// Render the grid's bounding box, top row (minimum y) first, with a
    /// trailing newline per row. An empty grid renders as an empty string.
    pub fn render(&self, grid: &Grid) -> String {
        let (min, max) = match grid.extent() {
            Some(extent) => extent,
            None => return String::new(),
        };

        let mut output = String::new();
        for y in min.y..=max.y {
            for x in min.x..=max.x {
                if grid.contains(Point::new(x, y)) {
                    output.push_str(&self.alive);
                } else {
                    output.push_str(&self.dead);
                }
            }
            output.push('\n');
        }

        output
    }
}

impl Default for GridRenderer {
    fn default() -> Self {
        Self::from_config(&DisplayConfig::default())
    }
}

/// Format an elapsed generation time the way the simulator reports it
pub fn format_generation_time(elapsed: Duration) -> String {
    format!("generation time = {:.6} s", elapsed.as_secs_f64())
}
