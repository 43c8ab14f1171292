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


//! Tree search monitoring interface
//!
//! Declares `TreeSearchMonitor`, the observer of the exact solver. The solver
//! calls it at every lifecycle point:
//!
//! enter search → { enter level k → (descend | backtrack | symmetry prune)* →
//! exit level k }* → solution → exit search
//!
//! Monitors only observe; the search cannot be steered or cancelled from
//! here. `ExactSolverStatistics` is passed along with every event.

use crate::{
    branching::Decision, state::SearchState, stats::ExactSolverStatistics,
};
use strippack_core::num::SizeNumeric;
use strippack_model::{instance::Instance, placement::Placement};

/// Observer of the exact solver's search.
pub trait TreeSearchMonitor<T>
where
    T: SizeNumeric,
{
    /// Returns the name of the monitor.
    fn name(&self) -> &str;
    /// Called once before the first level is searched.
    fn on_enter_search(&mut self, instance: &Instance<T>, statistics: &ExactSolverStatistics);
    /// Called once after the optimum has been found.
    fn on_exit_search(&mut self, statistics: &ExactSolverStatistics);
    /// Called when the feasibility search for `num_bins` bins starts.
    fn on_enter_level(&mut self, num_bins: usize, statistics: &ExactSolverStatistics);
    /// Called when the feasibility search for `num_bins` bins ends.
    fn on_exit_level(&mut self, num_bins: usize, feasible: bool, statistics: &ExactSolverStatistics);
    /// Called after the candidates of a node were pushed onto the stack.
    fn on_decisions_enqueued(
        &mut self,
        _state: &SearchState<T>,
        _count: usize,
        _statistics: &ExactSolverStatistics,
    ) {
    }
    /// Called when `skipped` fitting bins of a node were dropped as symmetric.
    fn on_symmetry_prune(
        &mut self,
        _state: &SearchState<T>,
        _skipped: usize,
        _statistics: &ExactSolverStatistics,
    ) {
    }
    /// Called after `decision` has been applied.
    fn on_descend(
        &mut self,
        state: &SearchState<T>,
        decision: Decision,
        statistics: &ExactSolverStatistics,
    );
    /// Called after a level of the tree has been abandoned and undone.
    fn on_backtrack(&mut self, state: &SearchState<T>, statistics: &ExactSolverStatistics);
    /// Called with the optimal placement, in original item indices.
    fn on_solution_found(&mut self, placement: &Placement, statistics: &ExactSolverStatistics);
}

impl<'a, T> std::fmt::Debug for dyn TreeSearchMonitor<T> + 'a
where
    T: SizeNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TreeSearchMonitor({})", self.name())
    }
}

impl<'a, T> std::fmt::Display for dyn TreeSearchMonitor<T> + 'a
where
    T: SizeNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TreeSearchMonitor({})", self.name())
    }
}
