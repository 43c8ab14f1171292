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


//! Exact minimum-bin solver.
//!
//! The solver proves optimality by iterative deepening over the bin count:
//! starting at the volume bound `ceil(total / capacity)` it asks, for each
//! `k`, whether the items fit into `k` bins, and returns the first `k` that
//! works. Feasibility is monotone in `k`, so the first success is optimal,
//! and `k = n` always succeeds for a validated instance.
//!
//! Each feasibility question is answered by a depth-first search over the
//! items in size-descending order. A level of the tree places one item; its
//! candidate bins come from `SymmetryBreakingBuilder`. The tree is walked
//! with an explicit `SearchStack` of pending decisions and a `SearchTrail`
//! that undoes placements, so depth is bounded by memory rather than by the
//! call stack. Candidates are enqueued so that lower bins are explored first,
//! which makes the visit order identical to the textbook recursive search.
//!
//! The solver owns its scratch structures and reuses them across calls; a
//! `preallocated` solver does not allocate during the search.

use crate::{
    branching::SymmetryBreakingBuilder,
    monitor::{no_op::NoOperationMonitor, tree_search_monitor::TreeSearchMonitor},
    result::ExactOutcome,
    stack::SearchStack,
    state::SearchState,
    stats::ExactSolverStatistics,
    trail::SearchTrail,
};
use strippack_core::num::SizeNumeric;
use strippack_model::{
    index::SortedIndex, instance::Instance, ordering::SortedItems, placement::Placement,
};

/// Reusable exact solver.
#[derive(Clone, Debug)]
pub struct ExactSolver<T> {
    state: SearchState<T>,
    trail: SearchTrail<T>,
    stack: SearchStack,
    builder: SymmetryBreakingBuilder<T>,
}

impl<T> Default for ExactSolver<T>
where
    T: SizeNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ExactSolver<T>
where
    T: SizeNumeric,
{
    /// Creates a solver with empty scratch structures.
    #[inline]
    pub fn new() -> Self {
        Self {
            state: SearchState::default(),
            trail: SearchTrail::new(),
            stack: SearchStack::new(),
            builder: SymmetryBreakingBuilder::new(),
        }
    }

    /// Creates a solver whose scratch structures already fit `num_items` items.
    ///
    /// # Note
    ///
    /// The solver grows its structures on demand anyway; preallocating only
    /// moves the allocation cost to construction time.
    #[inline]
    pub fn preallocated(num_items: usize) -> Self {
        Self {
            state: SearchState::default(),
            trail: SearchTrail::preallocated(num_items),
            stack: SearchStack::preallocated(num_items, num_items),
            builder: SymmetryBreakingBuilder::new(),
        }
    }

    /// Returns the memory held by the search trail and the decision stack.
    #[inline]
    pub fn allocated_memory_bytes(&self) -> usize {
        self.trail.allocated_memory_bytes() + self.stack.allocated_memory_bytes()
    }

    /// Finds a packing with the minimum number of bins.
    #[inline]
    pub fn solve(&mut self, instance: &Instance<T>) -> ExactOutcome {
        let mut monitor = NoOperationMonitor::<T>::new();
        self.solve_with_monitor(instance, &mut monitor)
    }

    /// Finds a packing with the minimum number of bins, reporting to `monitor`.
    ///
    /// # Panics
    ///
    /// Panics if no `k <= n` admits a packing, which cannot happen for an
    /// `Instance` (every item fits a bin on its own).
    pub fn solve_with_monitor<S>(&mut self, instance: &Instance<T>, monitor: &mut S) -> ExactOutcome
    where
        S: TreeSearchMonitor<T> + ?Sized,
    {
        let start_time = std::time::Instant::now();
        let mut stats = ExactSolverStatistics::default();
        let lower_bound = instance.lower_bound();
        stats.set_lower_bound(lower_bound);

        monitor.on_enter_search(instance, &stats);

        let sorted = instance.sorted_items();
        let mut best = None;
        for num_bins in lower_bound..=instance.num_items() {
            stats.on_level_entered();
            monitor.on_enter_level(num_bins, &stats);

            let feasible = LevelSearchSession::new(
                self,
                &sorted,
                instance.capacity(),
                num_bins,
                &mut *monitor,
                &mut stats,
            )
            .run();

            monitor.on_exit_level(num_bins, feasible, &stats);
            log::trace!(
                "{} bins {} ({} nodes so far)",
                num_bins,
                if feasible { "feasible" } else { "infeasible" },
                stats.nodes_explored
            );

            if feasible {
                best = Some(self.extract_placement(&sorted));
                self.reset();
                break;
            }
            self.reset();
        }

        let placement = best.expect(
            "called `ExactSolver::solve_with_monitor` on an instance that does not fit one item per bin",
        );

        stats.set_optimal_bins(placement.num_bins());
        monitor.on_solution_found(&placement, &stats);
        stats.set_total_time(start_time.elapsed());
        monitor.on_exit_search(&stats);

        ExactOutcome::new(placement, stats)
    }

    /// Answers whether the items fit into exactly `num_bins` bins and, if so,
    /// returns such a packing (possibly with empty bins removed).
    pub fn find_packing(&mut self, instance: &Instance<T>, num_bins: usize) -> Option<Placement> {
        let sorted = instance.sorted_items();
        let mut stats = ExactSolverStatistics::default();
        let mut monitor = NoOperationMonitor::<T>::new();

        let feasible = LevelSearchSession::new(
            self,
            &sorted,
            instance.capacity(),
            num_bins,
            &mut monitor,
            &mut stats,
        )
        .run();

        let placement = feasible.then(|| {
            let bins = self
                .extract_placement(&sorted)
                .into_bins()
                .into_iter()
                .filter(|bin| !bin.is_empty())
                .collect();
            Placement::new(bins)
        });
        self.reset();
        placement
    }

    /// Groups the current complete assignment into bins of original indices.
    fn extract_placement(&self, sorted: &SortedItems<T>) -> Placement {
        debug_assert!(
            self.state.is_complete(),
            "called `ExactSolver::extract_placement` with {} of {} items assigned",
            self.state.num_assigned(),
            self.state.num_items()
        );

        let mut bins = vec![Vec::new(); self.state.num_bins()];
        for (p, assignment) in self.state.assignments().iter().enumerate() {
            if let Some(bin) = assignment {
                bins[bin.get()].push(sorted.item(SortedIndex::new(p)));
            }
        }
        Placement::new(bins)
    }

    /// Clears the per-run structures but keeps their allocations.
    #[inline]
    fn reset(&mut self) {
        self.trail.reset();
        self.stack.reset();
    }
}

/// Finds a minimum-bin packing with a throwaway solver.
///
/// # Examples
///
/// ```rust
/// use strippack_exact::solver::solve_exact;
/// use strippack_model::instance::Instance;
///
/// let instance = Instance::new(vec![6i64, 5, 3, 2, 2, 2], 10).unwrap();
/// let outcome = solve_exact(&instance);
/// assert_eq!(outcome.num_bins(), 2);
/// assert_eq!(outcome.placement().to_raw(), vec![vec![0, 3, 4], vec![1, 2, 5]]);
/// ```
pub fn solve_exact<T>(instance: &Instance<T>) -> ExactOutcome
where
    T: SizeNumeric,
{
    ExactSolver::preallocated(instance.num_items()).solve(instance)
}

/// One feasibility search for a fixed number of bins.
struct LevelSearchSession<'a, T, S>
where
    T: SizeNumeric,
    S: TreeSearchMonitor<T> + ?Sized,
{
    solver: &'a mut ExactSolver<T>,
    sorted: &'a SortedItems<T>,
    monitor: &'a mut S,
    stats: &'a mut ExactSolverStatistics,
}

impl<'a, T, S> LevelSearchSession<'a, T, S>
where
    T: SizeNumeric,
    S: TreeSearchMonitor<T> + ?Sized,
{
    #[inline]
    fn new(
        solver: &'a mut ExactSolver<T>,
        sorted: &'a SortedItems<T>,
        capacity: T,
        num_bins: usize,
        monitor: &'a mut S,
        stats: &'a mut ExactSolverStatistics,
    ) -> Self {
        let num_items = sorted.len();
        solver.state.reset(num_bins, num_items, capacity);
        solver.trail.reset();
        solver.stack.reset();
        solver.trail.ensure_capacity(num_items);
        solver.stack.ensure_capacity(num_bins, num_items);

        Self {
            solver,
            sorted,
            monitor,
            stats,
        }
    }

    /// Runs the search; on success the solver's state holds a complete assignment.
    fn run(mut self) -> bool {
        // Root frame. Must exist before the first decisions are enqueued.
        self.solver.trail.push_frame();
        self.solver.stack.push_frame();
        self.stats.on_node_explored();

        if self.solver.state.is_complete() {
            return true;
        }
        self.expand();

        loop {
            if self.solver.stack.is_current_level_empty() {
                if self.solver.stack.depth() <= 1 {
                    return false;
                }
                self.backtrack_step();
            } else if self.process_next_decision() {
                return true;
            }
        }
    }

    /// Enqueues the candidate bins for the next unplaced item.
    #[inline]
    fn expand(&mut self) {
        let Some(position) = self.solver.state.next_position() else {
            return;
        };
        let size = self.sorted.size(position);

        let count = self.solver.builder.build(&self.solver.state, size).len();
        let skipped = self.solver.builder.skipped();
        if skipped > 0 {
            self.stats.on_pruning_symmetry(skipped);
            self.monitor
                .on_symmetry_prune(&self.solver.state, skipped, self.stats);
        }

        self.solver
            .stack
            .extend(self.solver.builder.decisions_for_stack(position));
        self.stats.on_decisions_generated(count);
        self.monitor
            .on_decisions_enqueued(&self.solver.state, count, self.stats);
    }

    /// Applies the next pending decision; returns `true` if it completed the packing.
    #[inline]
    fn process_next_decision(&mut self) -> bool {
        debug_assert!(
            !self.solver.stack.is_current_level_empty(),
            "called `LevelSearchSession::process_next_decision` with empty decision stack"
        );

        let Some(decision) = self.solver.stack.pop() else {
            return false;
        };
        let size = self.sorted.size(decision.position());

        self.solver.trail.push_frame();
        self.solver.trail.apply_assignment(
            &mut self.solver.state,
            decision.position(),
            decision.bin(),
            size,
        );
        self.solver.stack.push_frame();

        self.stats.on_node_explored();
        self.stats
            .on_depth_update(self.solver.state.num_assigned() as u64);
        self.monitor
            .on_descend(&self.solver.state, decision, self.stats);

        if self.solver.state.is_complete() {
            return true;
        }
        self.expand();
        false
    }

    #[inline]
    fn backtrack_step(&mut self) {
        self.stats.on_backtrack();
        self.solver.trail.backtrack(&mut self.solver.state);
        self.solver.stack.pop_frame();
        self.monitor.on_backtrack(&self.solver.state, self.stats);
    }
}
