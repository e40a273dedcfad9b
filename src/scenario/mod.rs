//! Seeded synthetic scenarios and the basic-versus-optimized benchmark.
//!
//! Generation never touches global RNG state; every run is driven by an
//! explicit seed.

mod benchmark;
mod generator;

pub use benchmark::{format_table, run_benchmark, BenchmarkRow};
pub use generator::{default_scenarios, generate, ScenarioSpec};
