//! # u-dispatch
//!
//! Multi-source container dispatch: temperature-classed containers leave
//! one of several sources, each bound for a destination, and ride in trucks
//! with separate ambient and refrigerated compartments. Every request is
//! solved twice, by a greedy rule list and by Clarke-Wright savings refined
//! with 2-opt, so the two plans can be compared side by side.
//!
//! ## Modules
//!
//! - [`api`] — JSON request/response types and validation
//! - [`engine`] — Entry point running both strategies
//! - [`models`] — Domain types (Location, Container, Load, Truck, Solution, Problem)
//! - [`distance`] — Distance oracles and the distance matrix
//! - [`grouping`] — Per-source and per-destination partitions
//! - [`constructive`] — Greedy rule list and Clarke-Wright savings
//! - [`sequencing`] — Nearest-neighbor stop ordering
//! - [`local_search`] — 2-opt route improvement
//! - [`strategy`] — Basic and optimized strategies
//! - [`evaluation`] — Solution assembly and invariant checks
//! - [`geometry`] — Road-network leg geometry with straight-line fallback
//! - [`scenario`] — Seeded synthetic scenarios and benchmark
//!
//! ## Example
//!
//! ```
//! use u_dispatch::api::OptimizationRequest;
//! use u_dispatch::Engine;
//!
//! let request: OptimizationRequest = serde_json::from_str(r#"{
//!     "sources": [{ "id": "dc", "lat": "39.3601", "lon": "-84.3101" }],
//!     "destinations": [{ "id": "dayton", "lat": "39.7589", "lon": "-84.1916" }],
//!     "containers": [
//!         { "container_id": "C1", "source_id": "dc", "destination_id": "dayton", "size": 4, "temperature": "AM" },
//!         { "container_id": "C2", "source_id": "dc", "destination_id": "dayton", "size": 2, "temperature": "RE" }
//!     ],
//!     "truck_size": { "AM": 10, "RE": 5 }
//! }"#).unwrap();
//!
//! let response = Engine::default().optimize(&request).unwrap();
//! assert_eq!(response.basic.trucks.len(), 1);
//! assert_eq!(response.optimized.trucks[0].container_ids, vec!["C1", "C2"]);
//! ```

pub mod api;
pub mod constructive;
pub mod distance;
pub mod engine;
pub mod evaluation;
pub mod geometry;
pub mod grouping;
pub mod local_search;
pub mod models;
pub mod scenario;
pub mod sequencing;
pub mod strategy;

mod cancel;
mod config;
mod error;
mod parallel;

#[cfg(test)]
mod fixtures;

pub use cancel::CancelToken;
pub use config::EngineConfig;
pub use engine::Engine;
pub use error::{OptimizeError, ValidationError};
