//! JSON request/response boundary.
//!
//! Requests reference locations and containers by string ID and may carry
//! coordinates as numbers or numeric strings. [`validate`] turns a request
//! into an index-based [`Problem`](crate::models::Problem); responses map
//! indices back to IDs and number trucks `T1`, `T2`, ….

mod request;
mod response;
mod validate;

pub use request::{ContainerInput, Coordinate, LocationInput, OptimizationRequest, TruckSize};
pub use response::{OptimizationResponse, SolutionOutput, TruckOutput};
pub use validate::{validate, Validated};
