// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.


//! Heuristic-versus-optimum experiments.
//!
//! `run_experiment` draws `trials` item lists from a `Distribution`, packs
//! each with all five heuristics and, when the list is small enough, with
//! the exact solver. The report averages bins used and wall-clock time per
//! algorithm and, over the trials where the exact solver ran, the ratio of
//! heuristic bins to the optimum.
//!
//! `run_experiment_with_oracle` additionally solves the smallest lists with
//! an `OptimalOracle`. The optimum of a trial is then the smaller of the two
//! counts, and every trial where they differ is counted as a mismatch and
//! logged at `error` level.

use crate::{crosscheck::check_against_oracle, error::ExperimentError, generator::Distribution};
use log::info;
use rand::Rng;
use std::time::{Duration, Instant};
use strippack_exact::ExactSolver;
use strippack_heuristics::HeuristicKind;
use strippack_model::instance::Instance;
use strippack_oracle::OptimalOracle;

/// Trial count and solver cutoffs for an experiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperimentConfig {
    trials: usize,
    exact_threshold: usize,
    mip_threshold: usize,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            trials: 20,
            exact_threshold: 18,
            mip_threshold: 12,
        }
    }
}

impl ExperimentConfig {
    /// Creates the default configuration: 20 trials, exact solver up to 18
    /// items, oracle up to 12 items.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of random lists per experiment.
    #[inline]
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Sets the largest item count the exact solver is run on.
    #[inline]
    pub fn with_exact_threshold(mut self, exact_threshold: usize) -> Self {
        self.exact_threshold = exact_threshold;
        self
    }

    /// Sets the largest item count the oracle is run on. The oracle only
    /// runs on trials where the exact solver ran as well.
    #[inline]
    pub fn with_mip_threshold(mut self, mip_threshold: usize) -> Self {
        self.mip_threshold = mip_threshold;
        self
    }

    #[inline]
    pub fn trials(&self) -> usize {
        self.trials
    }

    #[inline]
    pub fn exact_threshold(&self) -> usize {
        self.exact_threshold
    }

    #[inline]
    pub fn mip_threshold(&self) -> usize {
        self.mip_threshold
    }
}

/// Averages for one heuristic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicSummary {
    pub kind: HeuristicKind,
    pub avg_bins: f64,
    pub avg_time_ms: f64,
    /// Mean of `heuristic bins / optimal bins` over the trials where the
    /// exact solver ran; `None` if it never ran.
    pub avg_ratio: Option<f64>,
}

/// Averages for one optimal solver over the trials where it ran.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverSummary {
    pub name: String,
    pub runs: usize,
    pub avg_bins: f64,
    pub avg_time_ms: f64,
}

/// The result of one experiment.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentReport {
    pub name: String,
    pub distribution: Distribution,
    pub n: usize,
    pub capacity: i64,
    pub trials: usize,
    /// One entry per heuristic, in `HeuristicKind::ALL` order.
    pub heuristics: Vec<HeuristicSummary>,
    pub exact: Option<SolverSummary>,
    pub oracle: Option<SolverSummary>,
    /// Mean optimum per trial where the exact solver ran: the smaller of the
    /// exact and the oracle count.
    pub avg_optimum: Option<f64>,
    /// Trials where the exact solver and the oracle disagreed.
    pub mismatches: usize,
}

impl ExperimentReport {
    /// Returns the summary of `kind`.
    pub fn heuristic(&self, kind: HeuristicKind) -> Option<&HeuristicSummary> {
        self.heuristics.iter().find(|h| h.kind == kind)
    }
}

impl std::fmt::Display for ExperimentReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "=== Experiment: {}, n={}, L={}, trials={} ===",
            self.name, self.n, self.capacity, self.trials
        )?;
        writeln!(
            f,
            "{:<5}  {:>8}  {:>12}  {:>10}",
            "Algo", "avg_bins", "avg_time(ms)", "avg_ratio"
        )?;
        for h in &self.heuristics {
            match h.avg_ratio {
                Some(ratio) => writeln!(
                    f,
                    "{:<5}  {:>8.3}  {:>12.3}  {:>10.3}",
                    h.kind.abbreviation(),
                    h.avg_bins,
                    h.avg_time_ms,
                    ratio
                )?,
                None => writeln!(
                    f,
                    "{:<5}  {:>8.3}  {:>12.3}  {:>10}",
                    h.kind.abbreviation(),
                    h.avg_bins,
                    h.avg_time_ms,
                    "-"
                )?,
            }
        }

        let Some(exact) = &self.exact else {
            return write!(f, "Exact  skipped");
        };
        write!(
            f,
            "{}  avg_bins={:.3}, avg_time={:.3} ms ({} runs)",
            exact.name, exact.avg_bins, exact.avg_time_ms, exact.runs
        )?;
        if let Some(oracle) = &self.oracle {
            write!(
                f,
                "\n{}  avg_bins={:.3}, avg_time={:.3} ms ({} runs)\nMismatches: {}",
                oracle.name, oracle.avg_bins, oracle.avg_time_ms, oracle.runs, self.mismatches
            )?;
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct Accumulator {
    runs: usize,
    bins: usize,
    time: Duration,
    ratio_sum: f64,
}

impl Accumulator {
    fn summary(&self, name: &str) -> Option<SolverSummary> {
        (self.runs > 0).then(|| SolverSummary {
            name: name.to_string(),
            runs: self.runs,
            avg_bins: self.bins as f64 / self.runs as f64,
            avg_time_ms: ms(self.time) / self.runs as f64,
        })
    }
}

#[inline]
fn ms(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

/// Runs one experiment without an oracle.
///
/// The exact solver runs on a trial only if the generated list has at most
/// `config.exact_threshold()` items. For `PerfectPacking` this is checked
/// against the actual list length, not `n`.
///
/// # Errors
///
/// Returns `ExperimentError::Instance` if `capacity` is not positive.
pub fn run_experiment<R>(
    name: &str,
    distribution: Distribution,
    n: usize,
    capacity: i64,
    config: &ExperimentConfig,
    rng: &mut R,
) -> Result<ExperimentReport, ExperimentError>
where
    R: Rng + ?Sized,
{
    run(name, distribution, n, capacity, config, None, rng)
}

/// Runs one experiment and checks the exact solver against `oracle` on
/// every trial with at most `config.mip_threshold()` items.
///
/// # Errors
///
/// Returns `ExperimentError::Instance` if `capacity` is not positive and
/// `ExperimentError::Oracle` on the first oracle failure.
pub fn run_experiment_with_oracle<R>(
    name: &str,
    distribution: Distribution,
    n: usize,
    capacity: i64,
    config: &ExperimentConfig,
    oracle: &mut dyn OptimalOracle<i64>,
    rng: &mut R,
) -> Result<ExperimentReport, ExperimentError>
where
    R: Rng + ?Sized,
{
    run(name, distribution, n, capacity, config, Some(oracle), rng)
}

fn run<R>(
    name: &str,
    distribution: Distribution,
    n: usize,
    capacity: i64,
    config: &ExperimentConfig,
    mut oracle: Option<&mut dyn OptimalOracle<i64>>,
    rng: &mut R,
) -> Result<ExperimentReport, ExperimentError>
where
    R: Rng + ?Sized,
{
    // Reject the capacity before any list is drawn against it.
    Instance::new(Vec::new(), capacity)?;

    let mut heuristics = [Accumulator::default(); HeuristicKind::ALL.len()];
    let mut exact = Accumulator::default();
    let mut checked = Accumulator::default();
    let mut optimum_sum = 0usize;
    let mut mismatches = 0usize;
    // Grows to the largest list actually solved.
    let mut solver = ExactSolver::<i64>::new();

    for _ in 0..config.trials {
        let instance = Instance::new(distribution.generate(n, capacity, rng), capacity)?;

        let mut bins = [0usize; HeuristicKind::ALL.len()];
        for (slot, kind) in HeuristicKind::ALL.into_iter().enumerate() {
            let start = Instant::now();
            let placement = kind.pack(&instance);
            heuristics[slot].time += start.elapsed();
            heuristics[slot].bins += placement.num_bins();
            bins[slot] = placement.num_bins();
        }

        if instance.num_items() > config.exact_threshold {
            continue;
        }

        let start = Instant::now();
        let exact_bins = solver.solve(&instance).num_bins();
        exact.time += start.elapsed();
        exact.bins += exact_bins;
        exact.runs += 1;

        let mut optimum = exact_bins;
        let within_oracle_limit = instance.num_items() <= config.mip_threshold;
        if let Some(oracle) = oracle.as_deref_mut().filter(|_| within_oracle_limit) {
            let start = Instant::now();
            let check = check_against_oracle(&instance, exact_bins, oracle)?;
            checked.time += start.elapsed();
            checked.bins += check.oracle_bins();
            checked.runs += 1;
            if !check.is_agreement() {
                mismatches += 1;
            }
            optimum = optimum.min(check.oracle_bins());
        }
        optimum_sum += optimum;

        for (slot, used) in bins.into_iter().enumerate() {
            // An empty list packs into zero bins everywhere.
            heuristics[slot].ratio_sum += if optimum == 0 {
                1.0
            } else {
                used as f64 / optimum as f64
            };
        }
    }

    let trials = config.trials.max(1) as f64;
    let heuristics = HeuristicKind::ALL
        .into_iter()
        .zip(heuristics)
        .map(|(kind, acc)| HeuristicSummary {
            kind,
            avg_bins: acc.bins as f64 / trials,
            avg_time_ms: ms(acc.time) / trials,
            avg_ratio: (exact.runs > 0).then(|| acc.ratio_sum / exact.runs as f64),
        })
        .collect::<Vec<_>>();
    let oracle_summary = oracle
        .as_deref()
        .and_then(|oracle| checked.summary(oracle.name()));

    info!(
        "experiment `{}` ({}, n={}, L={}): {} trials, exact ran {} times, oracle ran {} times, {} mismatches",
        name, distribution, n, capacity, config.trials, exact.runs, checked.runs, mismatches
    );

    Ok(ExperimentReport {
        name: name.to_string(),
        distribution,
        n,
        capacity,
        trials: config.trials,
        heuristics,
        exact: exact.summary("Exact"),
        oracle: oracle_summary,
        avg_optimum: (exact.runs > 0).then(|| optimum_sum as f64 / exact.runs as f64),
        mismatches,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use strippack_model::{instance::InstanceError, placement::Placement};
    use strippack_oracle::OracleError;

    /// Puts every item in its own bin.
    struct OneItemPerBin;

    impl OptimalOracle<i64> for OneItemPerBin {
        fn name(&self) -> &str {
            "OneItemPerBin"
        }

        fn solve_optimal(&mut self, instance: &Instance<i64>) -> Result<Placement, OracleError<i64>> {
            Ok(Placement::from_raw(
                (0..instance.num_items()).map(|i| vec![i]).collect(),
            ))
        }
    }

    /// Answers with the exact solver and counts its calls.
    #[derive(Default)]
    struct CountingExact {
        calls: usize,
    }

    impl OptimalOracle<i64> for CountingExact {
        fn name(&self) -> &str {
            "CountingExact"
        }

        fn solve_optimal(&mut self, instance: &Instance<i64>) -> Result<Placement, OracleError<i64>> {
            self.calls += 1;
            Ok(strippack_exact::solve_exact(instance).into_placement())
        }
    }

    struct Failing;

    impl OptimalOracle<i64> for Failing {
        fn name(&self) -> &str {
            "Failing"
        }

        fn solve_optimal(&mut self, _: &Instance<i64>) -> Result<Placement, OracleError<i64>> {
            Err(OracleError::Solver("no solution".to_string()))
        }
    }

    #[test]
    fn test_config_defaults_and_setters() {
        let config = ExperimentConfig::new();
        assert_eq!(config.trials(), 20);
        assert_eq!(config.exact_threshold(), 18);
        assert_eq!(config.mip_threshold(), 12);
        let config = config
            .with_trials(3)
            .with_exact_threshold(0)
            .with_mip_threshold(5);
        assert_eq!(config.trials(), 3);
        assert_eq!(config.exact_threshold(), 0);
        assert_eq!(config.mip_threshold(), 5);
    }

    #[test]
    fn test_small_experiment_runs_exact_and_ratios_are_at_least_one() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let config = ExperimentConfig::new().with_trials(8);
        let report =
            run_experiment("uniform", Distribution::Uniform, 10, 10, &config, &mut rng).unwrap();

        assert_eq!(report.heuristics.len(), 5);
        let exact = report.exact.clone().expect("exact solver should have run");
        assert_eq!(exact.runs, 8);
        assert!(report.oracle.is_none());
        assert_eq!(report.mismatches, 0);
        assert_eq!(report.avg_optimum, Some(exact.avg_bins));
        for h in &report.heuristics {
            assert!(h.avg_bins >= exact.avg_bins - 1e-9, "{}", h.kind);
            assert!(h.avg_ratio.unwrap() >= 1.0 - 1e-9, "{}", h.kind);
        }
        let nf = report.heuristic(HeuristicKind::NextFit).unwrap();
        let ff = report.heuristic(HeuristicKind::FirstFit).unwrap();
        assert!(nf.avg_bins >= ff.avg_bins - 1e-9);
    }

    #[test]
    fn test_large_experiment_skips_exact() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let config = ExperimentConfig::new().with_trials(3);
        let report =
            run_experiment("big", Distribution::ManySmall, 100, 100, &config, &mut rng).unwrap();
        assert!(report.exact.is_none());
        assert!(report.avg_optimum.is_none());
        assert!(report.heuristics.iter().all(|h| h.avg_ratio.is_none()));
        assert!(report.to_string().contains("Exact  skipped"));
    }

    #[test]
    fn test_unbounded_exact_threshold_runs_exact_every_trial() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let config = ExperimentConfig::new()
            .with_trials(1)
            .with_exact_threshold(usize::MAX);
        let report =
            run_experiment("always", Distribution::Uniform, 5, 10, &config, &mut rng).unwrap();
        assert_eq!(report.exact.map(|e| e.runs), Some(1));
    }

    #[test]
    fn test_perfect_packing_exact_matches_bin_count() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        // Two bins of capacity 4 give at most 8 items.
        let config = ExperimentConfig::new().with_trials(5);
        let report =
            run_experiment("perfect", Distribution::PerfectPacking, 2, 4, &config, &mut rng)
                .unwrap();
        let exact = report.exact.unwrap();
        assert_eq!(exact.runs, 5);
        assert!((exact.avg_bins - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_wrong_oracle_is_reported_as_mismatches() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let config = ExperimentConfig::new().with_trials(6);
        let mut oracle = OneItemPerBin;
        let report = run_experiment_with_oracle(
            "wrong",
            Distribution::ManySmall,
            8,
            10,
            &config,
            &mut oracle,
            &mut rng,
        )
        .unwrap();

        let exact = report.exact.clone().unwrap();
        let checked = report.oracle.clone().unwrap();
        assert_eq!(checked.name, "OneItemPerBin");
        assert_eq!(checked.runs, 6);
        assert!((checked.avg_bins - 8.0).abs() < 1e-9);
        assert!(report.mismatches >= 1);
        // The smaller count is taken as the optimum.
        assert_eq!(report.avg_optimum, Some(exact.avg_bins));

        let text = report.to_string();
        assert!(text.contains("OneItemPerBin  avg_bins=8.000"));
        assert!(text.ends_with(&format!("Mismatches: {}", report.mismatches)));
    }

    #[test]
    fn test_agreeing_oracle_reports_no_mismatches() {
        let mut rng = ChaCha8Rng::seed_from_u64(22);
        let config = ExperimentConfig::new().with_trials(5);
        let mut oracle = CountingExact::default();
        let report = run_experiment_with_oracle(
            "agree",
            Distribution::Bimodal,
            7,
            20,
            &config,
            &mut oracle,
            &mut rng,
        )
        .unwrap();
        assert_eq!(oracle.calls, 5);
        assert_eq!(report.mismatches, 0);
        assert_eq!(report.oracle.as_ref().map(|o| o.runs), Some(5));
        assert!(report.to_string().ends_with("Mismatches: 0"));
    }

    #[test]
    fn test_oracle_is_skipped_above_its_threshold() {
        let mut rng = ChaCha8Rng::seed_from_u64(23);
        let config = ExperimentConfig::new().with_trials(3).with_mip_threshold(4);
        let mut oracle = CountingExact::default();
        let report = run_experiment_with_oracle(
            "skip",
            Distribution::Uniform,
            6,
            10,
            &config,
            &mut oracle,
            &mut rng,
        )
        .unwrap();
        assert_eq!(oracle.calls, 0);
        assert!(report.oracle.is_none());
        assert_eq!(report.exact.map(|e| e.runs), Some(3));
    }

    #[test]
    fn test_oracle_failure_stops_the_experiment() {
        let mut rng = ChaCha8Rng::seed_from_u64(24);
        let config = ExperimentConfig::new().with_trials(2);
        let result = run_experiment_with_oracle(
            "fail",
            Distribution::Uniform,
            4,
            10,
            &config,
            &mut Failing,
            &mut rng,
        );
        assert_eq!(
            result,
            Err(ExperimentError::Oracle(OracleError::Solver(
                "no solution".to_string()
            )))
        );
    }

    #[cfg(feature = "milp")]
    #[test]
    fn test_mip_oracle_agrees_with_exact() {
        use strippack_oracle::MipOracle;

        let mut rng = ChaCha8Rng::seed_from_u64(25);
        let config = ExperimentConfig::new().with_trials(3);
        let report = run_experiment_with_oracle(
            "mip",
            Distribution::Uniform,
            6,
            10,
            &config,
            &mut MipOracle::new(),
            &mut rng,
        )
        .unwrap();
        assert_eq!(report.mismatches, 0);
        assert_eq!(report.oracle.map(|o| o.runs), Some(3));
    }

    #[test]
    fn test_report_display_has_header_and_rows() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let config = ExperimentConfig::new().with_trials(2);
        let report =
            run_experiment("bimodal", Distribution::Bimodal, 6, 20, &config, &mut rng).unwrap();
        let text = report.to_string();
        assert!(text.starts_with("=== Experiment: bimodal, n=6, L=20, trials=2 ==="));
        assert!(text.contains("avg_time(ms)"));
        for kind in HeuristicKind::ALL {
            assert!(text.contains(kind.abbreviation()));
        }
        assert!(text.contains("Exact  avg_bins="));
        assert!(!text.contains("Mismatches"));
    }

    #[test]
    fn test_non_positive_capacity_is_an_error() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let config = ExperimentConfig::new().with_trials(1);
        let result = run_experiment("bad", Distribution::Uniform, 0, 0, &config, &mut rng);
        assert_eq!(
            result,
            Err(ExperimentError::Instance(InstanceError::InvalidCapacity {
                capacity: 0
            }))
        );
    }

    #[test]
    fn test_zero_trials_report_zero_averages() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let config = ExperimentConfig::new().with_trials(0);
        let report =
            run_experiment("none", Distribution::Uniform, 5, 10, &config, &mut rng).unwrap();
        assert!(report.exact.is_none());
        assert!(report.heuristics.iter().all(|h| h.avg_bins == 0.0));
    }
}
