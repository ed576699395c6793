// src/core.rs
pub mod analyzer;
pub mod loader;
pub mod report;
pub mod tally;
pub mod validate;
