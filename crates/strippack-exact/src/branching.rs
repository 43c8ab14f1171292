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


//! Branching for the feasibility search
//!
//! A `Decision` places the item at one sorted position into one bin. At
//! every node only the next sorted position is branched on, and the
//! candidate bins are filtered by symmetry: two bins with the same remaining
//! capacity lead to isomorphic subtrees, so only the first bin (lowest index)
//! of each distinct remaining capacity is kept. `SymmetryBreakingBuilder`
//! computes that candidate set into reusable scratch buffers.
//!
//! Candidates are produced in ascending bin order. The solver pushes them onto
//! its LIFO stack in reverse, so the lowest bin is explored first.

use crate::state::SearchState;
use smallvec::SmallVec;
use strippack_core::num::SizeNumeric;
use strippack_model::index::{BinIndex, SortedIndex};

/// Put the item at `position` into `bin`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Decision {
    position: SortedIndex,
    bin: BinIndex,
}

impl Decision {
    #[inline(always)]
    pub const fn new(position: SortedIndex, bin: BinIndex) -> Self {
        Self { position, bin }
    }

    /// Returns the sorted position of the item being placed.
    #[inline(always)]
    pub const fn position(&self) -> SortedIndex {
        self.position
    }

    /// Returns the receiving bin.
    #[inline(always)]
    pub const fn bin(&self) -> BinIndex {
        self.bin
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Decision(position: {}, bin: {})", self.position.get(), self.bin.get())
    }
}

/// Inline capacity of the scratch buffers; larger `k` spills to the heap.
const INLINE_BINS: usize = 16;

/// Computes the symmetry-reduced candidate bins for the next item.
#[derive(Clone, Debug, Default)]
pub struct SymmetryBreakingBuilder<T> {
    seen: SmallVec<[T; INLINE_BINS]>,
    candidates: SmallVec<[BinIndex; INLINE_BINS]>,
    skipped: usize,
}

impl<T> SymmetryBreakingBuilder<T>
where
    T: SizeNumeric,
{
    /// Creates a builder with empty scratch buffers.
    #[inline]
    pub fn new() -> Self {
        Self {
            seen: SmallVec::new(),
            candidates: SmallVec::new(),
            skipped: 0,
        }
    }

    /// Collects the candidate bins for an item of `size` in `state`.
    ///
    /// A bin qualifies if it has at least `size` left and no lower bin has
    /// the same remaining capacity. Returns the candidates in ascending bin
    /// order; [`SymmetryBreakingBuilder::skipped`] reports how many fitting
    /// bins were dropped as duplicates.
    pub fn build(&mut self, state: &SearchState<T>, size: T) -> &[BinIndex] {
        self.seen.clear();
        self.candidates.clear();
        self.skipped = 0;

        for (b, &rem) in state.remaining_capacities().iter().enumerate() {
            if rem < size {
                continue;
            }
            if self.seen.contains(&rem) {
                self.skipped += 1;
                continue;
            }
            self.seen.push(rem);
            self.candidates.push(BinIndex::new(b));
        }

        &self.candidates
    }

    /// Returns the candidates of the last [`SymmetryBreakingBuilder::build`] call.
    #[inline]
    pub fn candidates(&self) -> &[BinIndex] {
        &self.candidates
    }

    /// Returns how many fitting bins the last build dropped as symmetric.
    #[inline]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Returns the decisions of the last build in the order they must be
    /// pushed onto a LIFO stack so that the lowest bin is popped first.
    #[inline]
    pub fn decisions_for_stack(
        &self,
        position: SortedIndex,
    ) -> impl ExactSizeIterator<Item = Decision> + '_ {
        self.candidates
            .iter()
            .rev()
            .map(move |&bin| Decision::new(position, bin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_loads(loads: &[i64], num_items: usize) -> SearchState<i64> {
        let mut state = SearchState::new(loads.len(), num_items, 10);
        let mut position = 0;
        for (b, &load) in loads.iter().enumerate() {
            if load > 0 {
                state.assign(SortedIndex::new(position), BinIndex::new(b), load);
                position += 1;
            }
        }
        state
    }

    fn bins(raw: &[usize]) -> Vec<BinIndex> {
        raw.iter().copied().map(BinIndex::new).collect()
    }

    #[test]
    fn test_all_empty_bins_collapse_to_first() {
        let state = SearchState::<i64>::new(4, 3, 10);
        let mut builder = SymmetryBreakingBuilder::new();
        assert_eq!(builder.build(&state, 5), bins(&[0]).as_slice());
        assert_eq!(builder.skipped(), 3);
    }

    #[test]
    fn test_distinct_capacities_are_kept_in_bin_order() {
        // remaining: [3, 10, 3, 6]
        let state = state_with_loads(&[7, 0, 7, 4], 5);
        let mut builder = SymmetryBreakingBuilder::new();

        assert_eq!(builder.build(&state, 3), bins(&[0, 1, 3]).as_slice());
        assert_eq!(builder.skipped(), 1);

        assert_eq!(builder.build(&state, 4), bins(&[1, 3]).as_slice());
        assert_eq!(builder.skipped(), 0);

        assert!(builder.build(&state, 11).is_empty());
    }

    #[test]
    fn test_decisions_for_stack_are_reversed() {
        let state = state_with_loads(&[7, 0, 4], 4);
        let mut builder = SymmetryBreakingBuilder::new();
        builder.build(&state, 2);
        let position = SortedIndex::new(2);

        let pushed: Vec<Decision> = builder.decisions_for_stack(position).collect();
        assert_eq!(
            pushed,
            vec![
                Decision::new(position, BinIndex::new(2)),
                Decision::new(position, BinIndex::new(1)),
                Decision::new(position, BinIndex::new(0)),
            ]
        );
        assert_eq!(builder.candidates().len(), 3);
    }

    #[test]
    fn test_decision_display() {
        let d = Decision::new(SortedIndex::new(3), BinIndex::new(1));
        assert_eq!(format!("{}", d), "Decision(position: 3, bin: 1)");
    }
}
