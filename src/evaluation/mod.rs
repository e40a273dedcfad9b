//! Solution measurement and validation.
//!
//! - [`SolutionAssembler`] — per-truck distance, duration and leg geometry
//! - [`check_solution`] — capacity, coverage and source invariants

mod assembler;
mod checker;

pub use assembler::SolutionAssembler;
pub use checker::check_solution;
