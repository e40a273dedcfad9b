//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Tunable parameters of the optimization engine.
///
/// Every field has a default, so a partial JSON document is a valid config.
///
/// # Examples
///
/// ```
/// use u_dispatch::EngineConfig;
///
/// let config = EngineConfig::default()
///     .with_average_speed(20.0)
///     .with_parallel(false);
/// assert_eq!(config.average_speed_mps, 20.0);
///
/// let parsed: EngineConfig = serde_json::from_str(r#"{ "geometry_retries": 3 }"#).unwrap();
/// assert_eq!(parsed.geometry_retries, 3);
/// assert_eq!(parsed.two_opt_pass_factor, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Speed used to derive durations from distances when no geometry
    /// provider is configured, and for straight-line leg fallbacks.
    /// Default 13.89 m/s (~50 km/h).
    pub average_speed_mps: f64,
    /// 2-opt pass ceiling per route is `factor * n^2 + 1` for `n` stops.
    pub two_opt_pass_factor: usize,
    /// Extra attempts per leg before a geometry lookup falls back to a
    /// straight line.
    pub geometry_retries: usize,
    /// Run strategies, source groups, and per-truck refinement on the rayon
    /// pool.
    pub parallel: bool,
    /// Keep, per source, the greedy plan when it beats the savings plan.
    pub regression_guard: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            average_speed_mps: 13.89,
            two_opt_pass_factor: 4,
            geometry_retries: 1,
            parallel: true,
            regression_guard: true,
        }
    }
}

impl EngineConfig {
    /// Sets the fallback average speed in meters per second.
    pub fn with_average_speed(mut self, mps: f64) -> Self {
        self.average_speed_mps = mps;
        self
    }

    /// Sets the 2-opt pass ceiling factor.
    pub fn with_two_opt_pass_factor(mut self, factor: usize) -> Self {
        self.two_opt_pass_factor = factor;
        self
    }

    /// Sets the number of geometry retries per leg.
    pub fn with_geometry_retries(mut self, retries: usize) -> Self {
        self.geometry_retries = retries;
        self
    }

    /// Enables or disables parallel execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Enables or disables the per-source regression guard.
    pub fn with_regression_guard(mut self, enabled: bool) -> Self {
        self.regression_guard = enabled;
        self
    }

    /// Converts a distance in meters to seconds at the average speed.
    pub fn duration_for(&self, meters: f64) -> f64 {
        if self.average_speed_mps > 0.0 {
            meters / self.average_speed_mps
        } else {
            meters
        }
    }
}
