use std::fmt::Write as _;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use super::generator::{generate, ScenarioSpec};
use crate::engine::Engine;
use crate::error::OptimizeError;

/// Basic versus optimized on one scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRow {
    /// Scenario name.
    pub scenario: String,
    /// Containers in the request.
    pub containers: usize,
    /// Trucks used by the basic plan.
    pub basic_trucks: usize,
    /// Trucks used by the optimized plan.
    pub optimized_trucks: usize,
    /// Basic plan distance in kilometers.
    pub basic_distance_km: f64,
    /// Optimized plan distance in kilometers.
    pub optimized_distance_km: f64,
}

impl BenchmarkRow {
    /// Relative distance saving of the optimized plan, in percent.
    pub fn distance_saving_pct(&self) -> f64 {
        if self.basic_distance_km == 0.0 {
            return 0.0;
        }
        100.0 * (self.basic_distance_km - self.optimized_distance_km) / self.basic_distance_km
    }

    /// Trucks saved by the optimized plan (negative if it uses more).
    pub fn truck_saving(&self) -> i64 {
        self.basic_trucks as i64 - self.optimized_trucks as i64
    }
}

/// Generates and solves every scenario from a single seeded RNG.
pub fn run_benchmark(
    engine: &Engine,
    scenarios: &[ScenarioSpec],
    seed: u64,
) -> Result<Vec<BenchmarkRow>, OptimizeError> {
    let mut rng = StdRng::seed_from_u64(seed);
    scenarios
        .iter()
        .map(|spec| {
            let request = generate(spec, &mut rng);
            let response = engine.optimize(&request)?;
            let row = BenchmarkRow {
                scenario: spec.name.clone(),
                containers: request.containers.len(),
                basic_trucks: response.basic.trucks.len(),
                optimized_trucks: response.optimized.trucks.len(),
                basic_distance_km: response.basic.total_distance_meters / 1000.0,
                optimized_distance_km: response.optimized.total_distance_meters / 1000.0,
            };
            info!(
                scenario = %row.scenario,
                saving_pct = row.distance_saving_pct(),
                "scenario solved"
            );
            Ok(row)
        })
        .collect()
}

/// Renders rows as a fixed-width table with an average line.
pub fn format_table(rows: &[BenchmarkRow]) -> String {
    const WIDTHS: [usize; 8] = [28, 6, 8, 8, 10, 10, 10, 8];
    let line = |cells: [&str; 8]| {
        cells
            .iter()
            .zip(WIDTHS)
            .map(|(c, w)| format!("{c:<w$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };
    let sep = WIDTHS.map(|w| "-".repeat(w)).join("  ");

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        line([
            "Scenario",
            "Ctrs",
            "B.Trucks",
            "O.Trucks",
            "B.Dist km",
            "O.Dist km",
            "Dist save",
            "Trucks",
        ])
    );
    let _ = writeln!(out, "{sep}");
    for r in rows {
        let _ = writeln!(
            out,
            "{}",
            line([
                &r.scenario,
                &r.containers.to_string(),
                &r.basic_trucks.to_string(),
                &r.optimized_trucks.to_string(),
                &format!("{:.1}", r.basic_distance_km),
                &format!("{:.1}", r.optimized_distance_km),
                &format!("{:+.1}%", r.distance_saving_pct()),
                &format!("{:+}", r.truck_saving()),
            ])
        );
    }
    let _ = writeln!(out, "{sep}");
    if !rows.is_empty() {
        let n = rows.len() as f64;
        let avg_dist = rows.iter().map(BenchmarkRow::distance_saving_pct).sum::<f64>() / n;
        let avg_trucks = rows.iter().map(|r| r.truck_saving() as f64).sum::<f64>() / n;
        let _ = writeln!(
            out,
            "{}",
            line([
                "AVERAGE",
                "",
                "",
                "",
                "",
                "",
                &format!("{avg_dist:+.1}%"),
                &format!("{avg_trucks:+.1}"),
            ])
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::scenario::default_scenarios;

    #[test]
    fn test_benchmark_never_regresses() {
        let engine = Engine::new(EngineConfig::default());
        let rows = run_benchmark(&engine, &default_scenarios()[..4], 42).expect("solved");
        assert_eq!(rows.len(), 4);
        for r in &rows {
            assert!(r.optimized_distance_km <= r.basic_distance_km + 1e-9, "{r:?}");
            assert!(r.distance_saving_pct() >= -1e-6);
        }
    }

    #[test]
    fn test_benchmark_deterministic() {
        let engine = Engine::new(EngineConfig::default());
        let suite = &default_scenarios()[..2];
        let a = run_benchmark(&engine, suite, 42).expect("solved");
        let b = run_benchmark(&engine, suite, 42).expect("solved");
        assert_eq!(a, b);
    }

    #[test]
    fn test_table() {
        let rows = vec![BenchmarkRow {
            scenario: "demo".into(),
            containers: 10,
            basic_trucks: 4,
            optimized_trucks: 3,
            basic_distance_km: 200.0,
            optimized_distance_km: 150.0,
        }];
        let table = format_table(&rows);
        assert!(table.contains("demo"));
        assert!(table.contains("+25.0%"));
        assert!(table.contains("+1"));
        assert!(table.lines().last().expect("line").starts_with("AVERAGE"));
        assert_eq!(rows[0].truck_saving(), 1);
    }
}
