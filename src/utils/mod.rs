//! Shared formatting helpers

pub mod display;

pub use display::{format_generation_time, GridRenderer};
