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


//! Search state for the fixed-k feasibility search.
//!
//! `SearchState` holds everything a node of the search tree needs to know:
//! the remaining capacity of each of the k bins and, for every item position
//! in size-descending order, the bin it currently occupies.
//!
//! Items are always assigned in sorted order, so the assigned positions are
//! exactly `0..num_assigned` and the next item to place is
//! `SortedIndex::new(num_assigned)`. The trail relies on this when undoing.
//!
//! Invariants (debug-checked):
//! - `remaining[b] >= 0` for every bin.
//! - `num_assigned <= num_items`.
//! - `assignment[p].is_some()` iff `p < num_assigned`.

use strippack_core::num::SizeNumeric;
use strippack_model::index::{BinIndex, SortedIndex};

/// Remaining capacities and the position-to-bin assignment of one search node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState<T> {
    remaining: Vec<T>,
    assignment: Vec<Option<BinIndex>>,
    num_assigned: usize,
}

impl<T> Default for SearchState<T> {
    fn default() -> Self {
        Self {
            remaining: Vec::new(),
            assignment: Vec::new(),
            num_assigned: 0,
        }
    }
}

impl<T> SearchState<T>
where
    T: SizeNumeric,
{
    /// Creates a state with `num_bins` empty bins of `capacity` and no item assigned.
    #[inline]
    pub fn new(num_bins: usize, num_items: usize, capacity: T) -> Self {
        Self {
            remaining: vec![capacity; num_bins],
            assignment: vec![None; num_items],
            num_assigned: 0,
        }
    }

    /// Reinitializes the state in place, keeping allocations.
    #[inline]
    pub fn reset(&mut self, num_bins: usize, num_items: usize, capacity: T) {
        self.remaining.clear();
        self.remaining.resize(num_bins, capacity);
        self.assignment.clear();
        self.assignment.resize(num_items, None);
        self.num_assigned = 0;
    }

    /// Returns the number of bins `k` this state is searching with.
    #[inline]
    pub fn num_bins(&self) -> usize {
        self.remaining.len()
    }

    /// Returns the number of items to place.
    #[inline]
    pub fn num_items(&self) -> usize {
        self.assignment.len()
    }

    /// Returns how many items are placed.
    #[inline]
    pub fn num_assigned(&self) -> usize {
        self.num_assigned
    }

    /// Returns `true` once every item has a bin.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.num_assigned == self.assignment.len()
    }

    /// Returns the sorted position that has to be placed next, if any.
    #[inline]
    pub fn next_position(&self) -> Option<SortedIndex> {
        (!self.is_complete()).then(|| SortedIndex::new(self.num_assigned))
    }

    /// Returns the remaining capacity of `bin`.
    ///
    /// # Panics
    ///
    /// Panics if `bin` is not in `0..num_bins`.
    #[inline]
    pub fn remaining(&self, bin: BinIndex) -> T {
        debug_assert!(
            bin.get() < self.num_bins(),
            "called `SearchState::remaining` with bin index out of bounds: the len is {} but the index is {}",
            self.num_bins(),
            bin.get()
        );

        self.remaining[bin.get()]
    }

    /// Returns the remaining capacities of all bins.
    #[inline]
    pub fn remaining_capacities(&self) -> &[T] {
        &self.remaining
    }

    /// Returns the bin holding the item at sorted `position`, if it is placed.
    #[inline]
    pub fn assignment(&self, position: SortedIndex) -> Option<BinIndex> {
        debug_assert!(
            position.get() < self.num_items(),
            "called `SearchState::assignment` with position out of bounds: the len is {} but the index is {}",
            self.num_items(),
            position.get()
        );

        self.assignment[position.get()]
    }

    /// Returns the whole assignment map, indexed by sorted position.
    #[inline]
    pub fn assignments(&self) -> &[Option<BinIndex>] {
        &self.assignment
    }

    /// Places the item at `position` (of `size`) into `bin`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `position` is not the next position, if the
    /// item does not fit, or if any index is out of bounds.
    #[inline]
    pub fn assign(&mut self, position: SortedIndex, bin: BinIndex, size: T) {
        debug_assert_eq!(
            position.get(),
            self.num_assigned,
            "called `SearchState::assign` out of order: expected position {} but got {}",
            self.num_assigned,
            position.get()
        );
        debug_assert!(
            self.remaining(bin) >= size,
            "called `SearchState::assign` with {} of size {} but {} only has {} left",
            position,
            size,
            bin,
            self.remaining(bin)
        );

        let b = bin.get();
        self.remaining[b] = self.remaining[b] - size;
        self.assignment[position.get()] = Some(bin);
        self.num_assigned += 1;
    }

    /// Reverts [`SearchState::assign`] for the most recently placed item.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `position` is not the last assigned position
    /// or if it is not held by `bin`.
    #[inline]
    pub fn unassign(&mut self, position: SortedIndex, bin: BinIndex, size: T) {
        debug_assert!(
            self.num_assigned > 0 && position.get() == self.num_assigned - 1,
            "called `SearchState::unassign` out of order: {} is not the last assigned position ({} assigned)",
            position,
            self.num_assigned
        );
        debug_assert_eq!(
            self.assignment[position.get()],
            Some(bin),
            "called `SearchState::unassign` with {} which is not held by {}",
            position,
            bin
        );

        let b = bin.get();
        self.remaining[b] = self.remaining[b] + size;
        self.assignment[position.get()] = None;
        self.num_assigned -= 1;
    }
}

impl<T> std::fmt::Display for SearchState<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchState(bins: {}, assigned: {}/{}, remaining: [",
            self.remaining.len(),
            self.num_assigned,
            self.assignment.len()
        )?;
        for (i, rem) in self.remaining.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", rem)?;
        }
        write!(f, "])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(i: usize) -> SortedIndex {
        SortedIndex::new(i)
    }

    fn bin(i: usize) -> BinIndex {
        BinIndex::new(i)
    }

    #[test]
    fn test_new_state_has_full_bins_and_no_assignment() {
        let state = SearchState::<i64>::new(3, 4, 10);
        assert_eq!(state.num_bins(), 3);
        assert_eq!(state.num_items(), 4);
        assert_eq!(state.num_assigned(), 0);
        assert!(!state.is_complete());
        assert_eq!(state.next_position(), Some(pos(0)));
        assert_eq!(state.remaining_capacities(), &[10, 10, 10]);
        assert!(state.assignments().iter().all(Option::is_none));
    }

    #[test]
    fn test_assign_and_unassign_roundtrip() {
        let mut state = SearchState::<i64>::new(2, 2, 10);
        state.assign(pos(0), bin(1), 7);
        assert_eq!(state.remaining(bin(1)), 3);
        assert_eq!(state.assignment(pos(0)), Some(bin(1)));
        assert_eq!(state.next_position(), Some(pos(1)));

        state.assign(pos(1), bin(1), 3);
        assert!(state.is_complete());
        assert_eq!(state.next_position(), None);
        assert_eq!(state.remaining(bin(1)), 0);

        state.unassign(pos(1), bin(1), 3);
        state.unassign(pos(0), bin(1), 7);
        assert_eq!(state, SearchState::new(2, 2, 10));
    }

    #[test]
    fn test_reset_reuses_state_for_different_shape() {
        let mut state = SearchState::<i32>::new(2, 3, 10);
        state.assign(pos(0), bin(0), 4);
        state.reset(4, 1, 6);
        assert_eq!(state, SearchState::new(4, 1, 6));
    }

    #[test]
    fn test_display_lists_remaining() {
        let mut state = SearchState::<i64>::new(2, 1, 10);
        state.assign(pos(0), bin(0), 4);
        assert_eq!(
            format!("{}", state),
            "SearchState(bins: 2, assigned: 1/1, remaining: [6, 10])"
        );
    }

    #[test]
    fn test_empty_instance_is_complete() {
        let state = SearchState::<i64>::new(0, 0, 10);
        assert!(state.is_complete());
        assert_eq!(state.next_position(), None);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn test_assign_out_of_order_panics_in_debug() {
        let mut state = SearchState::<i64>::new(2, 2, 10);
        state.assign(pos(1), bin(0), 1);
    }
}
