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


//! Progress reporting through the `log` facade.
//!
//! `LogMonitor` emits one `debug!` line per level, a throttled `debug!`
//! progress line while a level is being searched, and an `info!` line with
//! the optimum. Nothing is printed unless the application installs a logger.

use crate::{
    branching::Decision, monitor::tree_search_monitor::TreeSearchMonitor, state::SearchState,
    stats::ExactSolverStatistics,
};
use std::time::{Duration, Instant};
use strippack_core::num::SizeNumeric;
use strippack_model::{instance::Instance, placement::Placement};

#[derive(Debug, Clone)]
pub struct LogMonitor {
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
    current_level: usize,
}

impl LogMonitor {
    /// Creates a monitor that logs progress at most every `log_interval`,
    /// reading the clock only when `nodes_explored & clock_check_mask == 0`.
    pub fn new(log_interval: Duration, clock_check_mask: u64) -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_log_time: now,
            log_interval,
            clock_check_mask,
            current_level: 0,
        }
    }

    /// Sets the minimum time between two progress lines.
    pub fn with_log_interval(mut self, log_interval: Duration) -> Self {
        self.log_interval = log_interval;
        self
    }

    /// Sets the mask that throttles clock reads.
    pub fn with_clock_check_mask(mut self, clock_check_mask: u64) -> Self {
        self.clock_check_mask = clock_check_mask;
        self
    }

    /// Returns the minimum time between two progress lines.
    #[inline]
    pub fn log_interval(&self) -> Duration {
        self.log_interval
    }

    /// Returns the clock-check mask.
    #[inline]
    pub fn clock_check_mask(&self) -> u64 {
        self.clock_check_mask
    }

    fn log_progress<T>(&mut self, state: &SearchState<T>, stats: &ExactSolverStatistics)
    where
        T: SizeNumeric,
    {
        let now = Instant::now();
        log::debug!(
            "{:.1}s | k = {} | nodes {} | depth {}/{} | backtracks {} | symmetric {}",
            now.duration_since(self.start_time).as_secs_f32(),
            self.current_level,
            stats.nodes_explored,
            state.num_assigned(),
            state.num_items(),
            stats.backtracks,
            stats.prunings_symmetry
        );
        self.last_log_time = now;
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new(Duration::from_secs(1), 4095)
    }
}

impl std::fmt::Display for LogMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogMonitor(log_interval: {}s, clock_check_mask: {})",
            self.log_interval.as_secs(),
            self.clock_check_mask
        )
    }
}

impl<T> TreeSearchMonitor<T> for LogMonitor
where
    T: SizeNumeric,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_search(&mut self, instance: &Instance<T>, _stats: &ExactSolverStatistics) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        log::debug!(
            "exact search: {} items, capacity {}, lower bound {}",
            instance.num_items(),
            instance.capacity(),
            instance.lower_bound()
        );
    }

    fn on_exit_search(&mut self, stats: &ExactSolverStatistics) {
        log::debug!(
            "exact search finished in {:.2?}: {} nodes over {} levels",
            stats.time_total,
            stats.nodes_explored,
            stats.levels_tried
        );
    }

    fn on_enter_level(&mut self, num_bins: usize, _stats: &ExactSolverStatistics) {
        self.current_level = num_bins;
        log::debug!("trying {} bins", num_bins);
    }

    fn on_exit_level(&mut self, num_bins: usize, feasible: bool, stats: &ExactSolverStatistics) {
        if feasible {
            log::debug!("{} bins feasible after {} nodes", num_bins, stats.nodes_explored);
        } else {
            log::debug!("{} bins infeasible after {} nodes", num_bins, stats.nodes_explored);
        }
    }

    fn on_descend(
        &mut self,
        state: &SearchState<T>,
        _decision: Decision,
        stats: &ExactSolverStatistics,
    ) {
        if (stats.nodes_explored & self.clock_check_mask) == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            self.log_progress(state, stats);
        }
    }

    fn on_backtrack(&mut self, _state: &SearchState<T>, _stats: &ExactSolverStatistics) {}

    fn on_solution_found(&mut self, placement: &Placement, _stats: &ExactSolverStatistics) {
        log::info!(
            "optimal packing uses {} bins ({:.2?} elapsed)",
            placement.num_bins(),
            self.start_time.elapsed()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_setters() {
        let monitor = LogMonitor::default()
            .with_log_interval(Duration::from_secs(5))
            .with_clock_check_mask(255);
        assert_eq!(monitor.log_interval(), Duration::from_secs(5));
        assert_eq!(monitor.clock_check_mask(), 255);
        assert_eq!(
            monitor.to_string(),
            "LogMonitor(log_interval: 5s, clock_check_mask: 255)"
        );
    }
}
