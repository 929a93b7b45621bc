//! Configuration management for the sparse Game of Life simulator

pub mod settings;

pub use settings::{CliOverrides, DisplayConfig, Settings, SimulationConfig};
