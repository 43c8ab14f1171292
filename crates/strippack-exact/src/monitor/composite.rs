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


//! Fan-out monitor
//!
//! `CompositeTreeSearchMonitor` forwards every event to its children in
//! insertion order, so logging and custom counters can be combined without
//! the solver knowing about either.

use crate::{
    branching::Decision, monitor::tree_search_monitor::TreeSearchMonitor, state::SearchState,
    stats::ExactSolverStatistics,
};
use strippack_core::num::SizeNumeric;
use strippack_model::{instance::Instance, placement::Placement};

/// Forwards every event to all contained monitors.
pub struct CompositeTreeSearchMonitor<'a, T>
where
    T: SizeNumeric,
{
    monitors: Vec<Box<dyn TreeSearchMonitor<T> + 'a>>,
}

impl<'a, T> Default for CompositeTreeSearchMonitor<'a, T>
where
    T: SizeNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> CompositeTreeSearchMonitor<'a, T>
where
    T: SizeNumeric,
{
    /// Creates an empty composite.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Creates an empty composite with room for `capacity` monitors.
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Adds a monitor.
    #[inline(always)]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: TreeSearchMonitor<T> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds an already boxed monitor.
    #[inline(always)]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn TreeSearchMonitor<T> + 'a>) {
        self.monitors.push(monitor);
    }

    /// Returns the contained monitors.
    #[inline(always)]
    pub fn monitors(&self) -> &[Box<dyn TreeSearchMonitor<T> + 'a>] {
        &self.monitors
    }

    /// Returns the number of contained monitors.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Returns `true` if no monitor has been added.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a, T> FromIterator<Box<dyn TreeSearchMonitor<T> + 'a>> for CompositeTreeSearchMonitor<'a, T>
where
    T: SizeNumeric,
{
    #[inline(always)]
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn TreeSearchMonitor<T> + 'a>>,
    {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> TreeSearchMonitor<T> for CompositeTreeSearchMonitor<'a, T>
where
    T: SizeNumeric,
{
    #[inline(always)]
    fn name(&self) -> &str {
        "CompositeTreeSearchMonitor"
    }

    #[inline(always)]
    fn on_enter_search(&mut self, instance: &Instance<T>, statistics: &ExactSolverStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_enter_search(instance, statistics);
        }
    }

    #[inline(always)]
    fn on_exit_search(&mut self, statistics: &ExactSolverStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_exit_search(statistics);
        }
    }

    #[inline(always)]
    fn on_enter_level(&mut self, num_bins: usize, statistics: &ExactSolverStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_enter_level(num_bins, statistics);
        }
    }

    #[inline(always)]
    fn on_exit_level(&mut self, num_bins: usize, feasible: bool, statistics: &ExactSolverStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_exit_level(num_bins, feasible, statistics);
        }
    }

    #[inline(always)]
    fn on_decisions_enqueued(
        &mut self,
        state: &SearchState<T>,
        count: usize,
        statistics: &ExactSolverStatistics,
    ) {
        for monitor in &mut self.monitors {
            monitor.on_decisions_enqueued(state, count, statistics);
        }
    }

    #[inline(always)]
    fn on_symmetry_prune(
        &mut self,
        state: &SearchState<T>,
        skipped: usize,
        statistics: &ExactSolverStatistics,
    ) {
        for monitor in &mut self.monitors {
            monitor.on_symmetry_prune(state, skipped, statistics);
        }
    }

    #[inline(always)]
    fn on_descend(
        &mut self,
        state: &SearchState<T>,
        decision: Decision,
        statistics: &ExactSolverStatistics,
    ) {
        for monitor in &mut self.monitors {
            monitor.on_descend(state, decision, statistics);
        }
    }

    #[inline(always)]
    fn on_backtrack(&mut self, state: &SearchState<T>, statistics: &ExactSolverStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_backtrack(state, statistics);
        }
    }

    #[inline(always)]
    fn on_solution_found(&mut self, placement: &Placement, statistics: &ExactSolverStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_solution_found(placement, statistics);
        }
    }
}
