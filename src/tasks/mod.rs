// src/tasks/mod.rs - The drills themselves
//
// Every drill is a pure function over borrowed input. Reading and printing
// live in `crate::io`; wiring to the command line lives in `crate::cli::run`.

pub mod coins;
pub mod combinatorics;
pub mod matrix;
pub mod numbers;
pub mod registry;
pub mod sequences;
pub mod text;
