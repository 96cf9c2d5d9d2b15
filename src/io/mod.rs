// src/io/mod.rs - Reading drill input and rendering results

pub mod input;
pub mod output;
