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


//! Strippack-Exact: provably minimal bin packing
//!
//! Iterative deepening over the bin count `k`, starting at the volume bound
//! `ceil(total / capacity)`. For each `k` a depth-first feasibility search
//! places the items in size-descending order; the first feasible `k` is the
//! optimum. The search tree is walked iteratively, so deep instances cannot
//! overflow the call stack.
//!
//! Core flow
//! - Validate input once as a `strippack_model::instance::Instance<T>`.
//! - Run `solver::ExactSolver::solve` (or `solver::solve_exact`).
//! - Optionally observe the search with a `monitor::tree_search_monitor::TreeSearchMonitor`.
//! - Read the placement and the `stats::ExactSolverStatistics` from the `result::ExactOutcome`.
//!
//! Design highlights
//! - Symmetry breaking: per node only the first bin of each distinct
//!   remaining capacity is branched on.
//! - Tight inner loop: state is mutated in place and restored via a trail.
//! - Deterministic: identical input gives the identical placement.
//!
//! Module map
//! - `solver`: the solver and its per-level search session.
//! - `branching`: decisions and the symmetry-breaking candidate builder.
//! - `monitor`: tree-search monitors (log, composite, no-op).
//! - `result`: the solver outcome.
//! - `state`: remaining capacities and the assignment map.
//! - `stats`: lightweight counters and timing.

pub mod branching;
pub mod monitor;
pub mod result;
pub mod solver;
mod stack;
pub mod state;
pub mod stats;
mod trail;

pub use result::ExactOutcome;
pub use solver::{ExactSolver, solve_exact};
