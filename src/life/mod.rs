//! Sparse Game of Life: lattice points, the live-cell set, the birth and
//! survival rules, and cell-file input.

pub mod grid;
pub mod io;
pub mod point;
pub mod rules;

pub use grid::Grid;
pub use io::{load_cells_from_file, parse_cells, CellParseError};
pub use point::Point;
pub use rules::LifeRules;
