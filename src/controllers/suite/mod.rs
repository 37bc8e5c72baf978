//! Runs the benchmark scenarios back to back and reports their timings.

pub mod demo;
pub mod errors;
pub mod report;
pub mod runner;
