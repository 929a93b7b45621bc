//! Simulation driver and run reporting

pub mod driver;

pub use driver::{RunSummary, Simulation, SimulationState};
