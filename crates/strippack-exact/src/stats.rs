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


use std::time::Duration;

/// Counters collected during one exact solve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExactSolverStatistics {
    /// Search nodes entered, roots included.
    pub nodes_explored: u64,
    /// Levels abandoned because every candidate was exhausted.
    pub backtracks: u64,
    /// Candidate decisions pushed onto the stack.
    pub decisions_generated: u64,
    /// Fitting bins skipped because a lower bin had the same remaining capacity.
    pub prunings_symmetry: u64,
    /// The deepest level reached in any tree.
    pub max_depth: u64,
    /// Bin counts `k` for which a feasibility search was run.
    pub levels_tried: u64,
    /// `ceil(total / capacity)`, the first `k` tried.
    pub lower_bound: usize,
    /// The proven minimum number of bins.
    pub optimal_bins: usize,
    /// Wall-clock time of the whole solve.
    pub time_total: Duration,
}

impl ExactSolverStatistics {
    #[inline]
    pub fn on_node_explored(&mut self) {
        self.nodes_explored = self.nodes_explored.saturating_add(1);
    }

    #[inline]
    pub fn on_backtrack(&mut self) {
        self.backtracks = self.backtracks.saturating_add(1);
    }

    #[inline]
    pub fn on_decisions_generated(&mut self, count: usize) {
        self.decisions_generated = self.decisions_generated.saturating_add(count as u64);
    }

    #[inline]
    pub fn on_pruning_symmetry(&mut self, count: usize) {
        self.prunings_symmetry = self.prunings_symmetry.saturating_add(count as u64);
    }

    #[inline]
    pub fn on_depth_update(&mut self, depth: u64) {
        self.max_depth = self.max_depth.max(depth);
    }

    #[inline]
    pub fn on_level_entered(&mut self) {
        self.levels_tried = self.levels_tried.saturating_add(1);
    }

    #[inline]
    pub fn set_lower_bound(&mut self, bound: usize) {
        self.lower_bound = bound;
    }

    #[inline]
    pub fn set_optimal_bins(&mut self, bins: usize) {
        self.optimal_bins = bins;
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for ExactSolverStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Exact Solver Statistics:")?;
        writeln!(f, "  Nodes explored:       {}", self.nodes_explored)?;
        writeln!(f, "  Backtracks:           {}", self.backtracks)?;
        writeln!(f, "  Max depth reached:    {}", self.max_depth)?;
        writeln!(f, "  Decisions generated:  {}", self.decisions_generated)?;
        writeln!(f, "  Prunings (symmetry):  {}", self.prunings_symmetry)?;
        writeln!(f, "  Levels tried:         {}", self.levels_tried)?;
        writeln!(f, "  Lower bound:          {}", self.lower_bound)?;
        writeln!(f, "  Optimal bins:         {}", self.optimal_bins)?;
        writeln!(f, "  Total time:           {:.2?}", self.time_total)?;
        Ok(())
    }
}
