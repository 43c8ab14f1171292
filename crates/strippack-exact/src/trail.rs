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


use crate::state::SearchState;
use strippack_core::num::SizeNumeric;
use strippack_model::index::{BinIndex, SortedIndex};

/// Undo record of one placement: which item went where and how big it was.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TrailEntry<T> {
    size: T,
    position: SortedIndex,
    bin: BinIndex,
}

/// A linear undo log with frame markers.
///
/// 1. `push_frame` before descending into a child,
/// 2. `apply_assignment` for the child's decision,
/// 3. `backtrack` to restore the state to the last frame.
///
/// Backtracking a frame with `m` entries costs `O(m)`; in this search every
/// frame holds exactly one entry.
#[derive(Debug, Clone)]
pub struct SearchTrail<T> {
    entries: Vec<TrailEntry<T>>,
    /// `frames[d]` is the index in `entries` where depth `d` began.
    frames: Vec<usize>,
}

impl<T> Default for SearchTrail<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SearchTrail<T> {
    /// Creates an empty trail.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            frames: Vec::new(),
        }
    }

    /// Creates a trail with room for `num_items` placements.
    #[inline]
    pub fn preallocated(num_items: usize) -> Self {
        Self {
            entries: Vec::with_capacity(num_items),
            frames: Vec::with_capacity(num_items + 1),
        }
    }

    /// Reserves room for `num_items` placements.
    pub fn ensure_capacity(&mut self, num_items: usize) {
        if self.entries.capacity() < num_items {
            self.entries.reserve(num_items - self.entries.len());
        }
        if self.frames.capacity() < num_items + 1 {
            self.frames.reserve((num_items + 1) - self.frames.len());
        }
    }

    /// Marks the start of a new decision level.
    #[inline]
    pub fn push_frame(&mut self) {
        self.frames.push(self.entries.len());
    }

    /// Places the item at `position` into `bin` and records how to undo it.
    ///
    /// # Panics
    ///
    /// In debug builds, panics under the same conditions as
    /// [`SearchState::assign`].
    #[inline]
    pub fn apply_assignment(
        &mut self,
        state: &mut SearchState<T>,
        position: SortedIndex,
        bin: BinIndex,
        size: T,
    ) where
        T: SizeNumeric,
    {
        debug_assert!(
            bin.get() < state.num_bins(),
            "called `SearchTrail::apply_assignment` with bin index out of bounds: the len is {} but the index is {}",
            state.num_bins(),
            bin.get()
        );

        self.entries.push(TrailEntry {
            size,
            position,
            bin,
        });
        state.assign(position, bin, size);
    }

    /// Undoes every placement of the current frame and pops it.
    pub fn backtrack(&mut self, state: &mut SearchState<T>)
    where
        T: SizeNumeric,
    {
        let Some(start) = self.frames.pop() else {
            return;
        };

        while self.entries.len() > start {
            if let Some(entry) = self.entries.pop() {
                state.unassign(entry.position, entry.bin, entry.size);
            }
        }
    }

    /// Forgets all entries and frames without touching any state.
    #[inline]
    pub fn reset(&mut self) {
        self.entries.clear();
        self.frames.clear();
    }

    /// Returns the total allocated memory in bytes.
    #[inline]
    pub fn allocated_memory_bytes(&self) -> usize {
        self.entries.capacity() * std::mem::size_of::<TrailEntry<T>>()
            + self.frames.capacity() * std::mem::size_of::<usize>()
    }
}

impl<T> std::fmt::Display for SearchTrail<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchTrail(entries: {}, frames: {})",
            self.entries.len(),
            self.frames.len()
        )
    }
}
