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


use crate::branching::Decision;

/// Pending decisions of every open search level, stored in one LIFO buffer.
///
/// `entries` holds the decisions linearly; `frames` records where each level
/// begins. Popping a frame truncates `entries` back to that start, which
/// discards whatever the level had not explored yet.
#[derive(Clone, Debug, Default)]
pub struct SearchStack {
    entries: Vec<Decision>,
    /// `frames[d]` is the index in `entries` where depth `d` began.
    frames: Vec<usize>,
}

impl SearchStack {
    /// Creates an empty stack.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            frames: Vec::new(),
        }
    }

    /// Creates a stack sized for `num_items` items and at most `num_bins` bins.
    #[inline]
    pub fn preallocated(num_bins: usize, num_items: usize) -> Self {
        let mut stack = Self::new();
        stack.ensure_capacity(num_bins, num_items);
        stack
    }

    /// Reserves room so that a search over `num_items` items with up to
    /// `num_bins` candidates per level never reallocates.
    #[inline]
    pub fn ensure_capacity(&mut self, num_bins: usize, num_items: usize) {
        let entry_capacity = num_items.saturating_mul(num_bins);
        let frame_capacity = num_items.saturating_add(1);

        if self.entries.capacity() < entry_capacity {
            self.entries.reserve(entry_capacity - self.entries.len());
        }
        if self.frames.capacity() < frame_capacity {
            self.frames.reserve(frame_capacity - self.frames.len());
        }
    }

    /// Returns the number of open levels.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Opens a new level.
    #[inline]
    pub fn push_frame(&mut self) {
        self.frames.push(self.entries.len());
    }

    /// Closes the current level and drops its unexplored decisions.
    #[inline]
    pub fn pop_frame(&mut self) -> Option<()> {
        let start = self.frames.pop()?;
        self.entries.truncate(start);
        Some(())
    }

    /// Enqueues decisions on the current level; the last one is popped first.
    #[inline]
    pub fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = Decision>,
    {
        self.entries.extend(iter);
    }

    /// Pops the next decision.
    #[inline]
    pub fn pop(&mut self) -> Option<Decision> {
        self.entries.pop()
    }

    /// Returns `true` if the current level has nothing left to explore.
    #[inline]
    pub fn is_current_level_empty(&self) -> bool {
        match self.frames.last() {
            Some(&start) => self.entries.len() == start,
            None => true,
        }
    }

    /// Clears all levels but keeps the allocations.
    #[inline]
    pub fn reset(&mut self) {
        self.entries.clear();
        self.frames.clear();
    }

    /// Returns the total allocated memory in bytes.
    #[inline]
    pub fn allocated_memory_bytes(&self) -> usize {
        self.entries.capacity() * std::mem::size_of::<Decision>()
            + self.frames.capacity() * std::mem::size_of::<usize>()
    }
}

impl std::fmt::Display for SearchStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchStack(entries: {}, frames: {})",
            self.entries.len(),
            self.frames.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strippack_model::index::{BinIndex, SortedIndex};

    fn d(position: usize, bin: usize) -> Decision {
        Decision::new(SortedIndex::new(position), BinIndex::new(bin))
    }

    #[test]
    fn test_new_stack_is_empty() {
        let s = SearchStack::new();
        assert_eq!(s.depth(), 0);
        assert!(s.is_current_level_empty());
        assert_eq!(format!("{}", s), "SearchStack(entries: 0, frames: 0)");
    }

    #[test]
    fn test_preallocated_reserves_memory() {
        let s = SearchStack::preallocated(4, 10);
        assert!(s.entries.capacity() >= 40);
        assert!(s.frames.capacity() >= 11);
        assert!(s.allocated_memory_bytes() > 0);
    }

    #[test]
    fn test_levels_pop_lifo_and_truncate() {
        let mut s = SearchStack::new();
        s.push_frame();
        s.extend([d(0, 1), d(0, 0)]);

        assert_eq!(s.pop(), Some(d(0, 0)));
        s.push_frame();
        assert!(s.is_current_level_empty());
        s.extend([d(1, 2), d(1, 1), d(1, 0)]);
        assert_eq!(s.entries.len(), 4);
        assert_eq!(s.pop(), Some(d(1, 0)));

        // Abandoning level 1 drops its remaining two decisions.
        assert_eq!(s.pop_frame(), Some(()));
        assert_eq!(s.depth(), 1);
        assert_eq!(s.entries, vec![d(0, 1)]);
        assert_eq!(s.pop(), Some(d(0, 1)));
        assert!(s.is_current_level_empty());

        assert_eq!(s.pop_frame(), Some(()));
        assert_eq!(s.depth(), 0);
        assert_eq!(s.pop_frame(), None);
    }

    #[test]
    fn test_reset_keeps_capacity() {
        let mut s = SearchStack::preallocated(3, 4);
        let bytes = s.allocated_memory_bytes();
        s.push_frame();
        s.extend([d(0, 0), d(0, 1)]);
        s.reset();
        assert_eq!(s.depth(), 0);
        assert!(s.entries.is_empty());
        assert_eq!(s.allocated_memory_bytes(), bytes);
    }
}
