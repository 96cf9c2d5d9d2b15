// src/lib.rs - Library root for drillbook

pub mod cli;
pub mod infra;
pub mod io;
pub mod tasks;

pub use infra::errors::{DrillError, Result};
