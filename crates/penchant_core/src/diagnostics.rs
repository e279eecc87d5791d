//! Self-test for probing a seed's observed output bounds

use crate::random::SeededRandom;
use serde::Serialize;

pub const DEFAULT_SELF_TEST_ITERATIONS: u64 = 1_000_000;

/// Summary of a [`SeededRandom::self_test`] run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelfTestReport {
    pub seed: String,
    pub iterations: u64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Draws that fell outside `[0, 1)`. Should always be zero.
    pub out_of_bounds: u64,
}

impl SelfTestReport {
    pub fn is_bounded(&self) -> bool {
        self.out_of_bounds == 0
    }
}

impl SeededRandom {
    /// Draw `iterations` values from the current position and report what was seen.
    ///
    /// Advances the call counter like any other draws; call [`SeededRandom::reset`]
    /// afterwards to replay from the start.
    pub fn self_test(&mut self, iterations: u64) -> SelfTestReport {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        let mut out_of_bounds = 0;

        for _ in 0..iterations {
            let value = self.draw_f64();
            min = min.min(value);
            max = max.max(value);
            sum += value;
            if !(0.0..1.0).contains(&value) {
                out_of_bounds += 1;
            }
        }

        let report = SelfTestReport {
            seed: self.seed().to_owned(),
            iterations,
            min,
            max,
            mean: if iterations > 0 { sum / iterations as f64 } else { 0.0 },
            out_of_bounds,
        };

        tracing::info!(
            seed = %report.seed,
            iterations,
            min = report.min,
            max = report.max,
            mean = report.mean,
            "self-test complete"
        );
        if !report.is_bounded() {
            tracing::warn!(count = report.out_of_bounds, "draws outside [0, 1)");
        }

        report
    }

    pub fn self_test_default(&mut self) -> SelfTestReport {
        self.self_test(DEFAULT_SELF_TEST_ITERATIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_bounds_are_observed_values() {
        let mut rng = SeededRandom::new("diagnostic");
        let report = rng.self_test(50_000);

        assert_eq!(report.iterations, 50_000);
        assert_eq!(report.seed, "diagnostic");
        assert!(report.is_bounded());
        assert!(0.0 <= report.min && report.min <= report.max && report.max < 1.0);
        // Plausibly spread, not collapsed near 0.5.
        assert!(report.min < 0.05 && report.max > 0.95);
        assert!((report.mean - 0.5).abs() < 0.05);
    }

    #[test]
    fn self_test_advances_counter() {
        let mut rng = SeededRandom::new("advance");
        rng.self_test(25);
        assert_eq!(rng.calls(), 25);
    }

    #[test]
    fn zero_iterations() {
        let mut rng = SeededRandom::new("none");
        let report = rng.self_test(0);
        assert_eq!(report.mean, 0.0);
        assert!(report.is_bounded());
        assert_eq!(rng.calls(), 0);
    }

    #[test]
    fn default_iterations_across_seeds() {
        for seed in ["", "abc", "penchant_example_seed"] {
            let report = SeededRandom::new(seed).self_test_default();
            assert_eq!(report.iterations, DEFAULT_SELF_TEST_ITERATIONS);
            assert!(report.is_bounded(), "seed {seed:?} escaped [0, 1)");
        }
    }
}
