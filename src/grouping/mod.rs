//! Container grouping.
//!
//! Partitions containers by source (the one hard boundary of the whole
//! algorithm) and, within a source, by destination with per-temperature
//! load totals.

mod source_group;

pub use source_group::{group_by_source, DestinationDemand, SourceGroup};
