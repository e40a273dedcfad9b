//! Local search operators for improving routes.
//!
//! - [`two_opt_improve`] — Intra-route 2-opt edge reversal

mod two_opt;

pub use two_opt::{pass_ceiling, two_opt_improve, TwoOptOutcome};
