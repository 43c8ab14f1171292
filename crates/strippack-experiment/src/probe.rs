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


//! Locating the practical size limit of the exact solver.
//!
//! For each item count, `probe_exact_limit` times the exact solver on
//! uniformly drawn lists and reports the mean and worst wall-clock time.

use crate::generator::Distribution;
use log::info;
use rand::Rng;
use std::time::{Duration, Instant};
use strippack_exact::ExactSolver;
use strippack_model::instance::{Instance, InstanceError};

/// Timings of the exact solver for one item count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeRow {
    pub n: usize,
    pub capacity: i64,
    pub trials: usize,
    pub avg_time: Duration,
    pub worst_time: Duration,
}

impl ProbeRow {
    #[inline]
    pub fn avg_ms(&self) -> f64 {
        self.avg_time.as_secs_f64() * 1000.0
    }

    #[inline]
    pub fn worst_ms(&self) -> f64 {
        self.worst_time.as_secs_f64() * 1000.0
    }
}

impl std::fmt::Display for ProbeRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "n={:>3}, L={}: avg_time={:.3} ms, worst_time={:.3} ms",
            self.n,
            self.capacity,
            self.avg_ms(),
            self.worst_ms()
        )
    }
}

/// `total / count` rounded down to whole nanoseconds; zero for an empty count.
#[inline]
fn mean_duration(total: Duration, count: usize) -> Duration {
    if count == 0 {
        return Duration::ZERO;
    }
    let nanos = total.as_nanos() / count as u128;
    Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
}

/// Times the exact solver on `trials` uniform lists for every `n` in
/// `n_values`, in order.
///
/// # Errors
///
/// Returns the instance error if `capacity` is not positive.
pub fn probe_exact_limit<R>(
    n_values: &[usize],
    capacity: i64,
    trials: usize,
    rng: &mut R,
) -> Result<Vec<ProbeRow>, InstanceError<i64>>
where
    R: Rng + ?Sized,
{
    Instance::new(Vec::new(), capacity)?;

    let largest = n_values.iter().copied().max().unwrap_or(0);
    let mut solver = ExactSolver::<i64>::preallocated(largest);
    let mut rows = Vec::with_capacity(n_values.len());

    for &n in n_values {
        let mut total = Duration::ZERO;
        let mut worst = Duration::ZERO;
        for _ in 0..trials {
            let instance = Instance::new(Distribution::Uniform.generate(n, capacity, rng), capacity)?;
            let start = Instant::now();
            solver.solve(&instance);
            let elapsed = start.elapsed();
            total += elapsed;
            worst = worst.max(elapsed);
        }

        let row = ProbeRow {
            n,
            capacity,
            trials,
            avg_time: mean_duration(total, trials),
            worst_time: worst,
        };
        info!("{}", row);
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_one_row_per_item_count() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let rows = probe_exact_limit(&[2, 6, 10], 10, 3, &mut rng).unwrap();
        assert_eq!(rows.iter().map(|r| r.n).collect::<Vec<_>>(), vec![2, 6, 10]);
        for row in &rows {
            assert_eq!(row.trials, 3);
            assert!(row.worst_time >= row.avg_time);
            assert!(row.worst_ms() >= row.avg_ms());
        }
    }

    #[test]
    fn test_zero_trials() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let rows = probe_exact_limit(&[4], 10, 0, &mut rng).unwrap();
        assert_eq!(rows[0].avg_time, Duration::ZERO);
        assert_eq!(rows[0].worst_time, Duration::ZERO);
    }

    #[test]
    fn test_mean_duration_handles_counts_beyond_u32() {
        assert_eq!(mean_duration(Duration::from_secs(3), 0), Duration::ZERO);
        assert_eq!(mean_duration(Duration::from_millis(10), 4), Duration::from_micros(2500));

        let count = u64::from(u32::MAX) + 1;
        let total = Duration::from_secs(count);
        let count = usize::try_from(count).unwrap_or(usize::MAX);
        if count > u32::MAX as usize {
            assert_eq!(mean_duration(total, count), Duration::from_secs(1));
        }
    }

    #[test]
    fn test_display() {
        let row = ProbeRow {
            n: 12,
            capacity: 10,
            trials: 1,
            avg_time: Duration::from_micros(1500),
            worst_time: Duration::from_millis(2),
        };
        assert_eq!(row.to_string(), "n= 12, L=10: avg_time=1.500 ms, worst_time=2.000 ms");
    }

    #[test]
    fn test_invalid_capacity() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(probe_exact_limit(&[3], -1, 1, &mut rng).is_err());
    }
}
