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


//! Bin ledger
//!
//! The per-run bookkeeping shared by every heuristic: for each bin opened so
//! far, how much capacity is left and which items it holds. Bins are numbered
//! in the order they were opened, and that order is what `FirstFit` scans and
//! what the final `Placement` reports.
//!
//! A ledger only grows. Items are never moved between bins and bins are never
//! closed, so a selection policy can rely on `remaining` being monotone
//! non-increasing for every bin.

use strippack_core::num::SizeNumeric;
use strippack_model::{
    index::{BinIndex, ItemIndex},
    placement::Placement,
};

/// Remaining capacity and contents of every bin opened during one packing run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinLedger<T> {
    capacity: T,
    remaining: Vec<T>,
    contents: Vec<Vec<ItemIndex>>,
}

impl<T> BinLedger<T>
where
    T: SizeNumeric,
{
    /// Creates an empty ledger for bins of the given capacity.
    #[inline]
    pub fn new(capacity: T) -> Self {
        Self {
            capacity,
            remaining: Vec::new(),
            contents: Vec::new(),
        }
    }

    /// Creates an empty ledger with room for `expected_bins` bins before reallocating.
    #[inline]
    pub fn with_expected_bins(capacity: T, expected_bins: usize) -> Self {
        Self {
            capacity,
            remaining: Vec::with_capacity(expected_bins),
            contents: Vec::with_capacity(expected_bins),
        }
    }

    /// Returns the capacity every bin starts with.
    #[inline]
    pub fn capacity(&self) -> T {
        self.capacity
    }

    /// Returns the number of bins opened so far.
    #[inline]
    pub fn num_bins(&self) -> usize {
        self.remaining.len()
    }

    /// Returns `true` if no bin has been opened yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Returns the remaining capacity of `bin`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `bin` has not been opened.
    #[inline]
    pub fn remaining(&self, bin: BinIndex) -> T {
        debug_assert!(
            bin.get() < self.num_bins(),
            "called `BinLedger::remaining` with bin index out of bounds: the len is {} but the index is {}",
            self.num_bins(),
            bin.get()
        );

        self.remaining[bin.get()]
    }

    /// Returns the remaining capacities of all bins, in opening order.
    #[inline]
    pub fn remaining_capacities(&self) -> &[T] {
        &self.remaining
    }

    /// Returns the items currently held by `bin`, in insertion order.
    #[inline]
    pub fn contents(&self, bin: BinIndex) -> &[ItemIndex] {
        debug_assert!(
            bin.get() < self.num_bins(),
            "called `BinLedger::contents` with bin index out of bounds: the len is {} but the index is {}",
            self.num_bins(),
            bin.get()
        );

        &self.contents[bin.get()]
    }

    /// Returns the most recently opened bin, if any.
    #[inline]
    pub fn last_bin(&self) -> Option<BinIndex> {
        self.num_bins().checked_sub(1).map(BinIndex::new)
    }

    /// Returns `true` if an item of `size` fits into `bin`.
    #[inline]
    pub fn fits(&self, bin: BinIndex, size: T) -> bool {
        self.remaining(bin) >= size
    }

    /// Opens a new bin holding `item` and returns its index.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `size` exceeds the bin capacity.
    #[inline]
    pub fn open(&mut self, item: ItemIndex, size: T) -> BinIndex {
        debug_assert!(
            size <= self.capacity,
            "called `BinLedger::open` with {} of size {} but the capacity is {}",
            item,
            size,
            self.capacity
        );

        let bin = BinIndex::new(self.num_bins());
        self.remaining.push(self.capacity - size);
        self.contents.push(vec![item]);
        bin
    }

    /// Places `item` into the already open `bin`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `bin` has not been opened or if the item
    /// does not fit.
    #[inline]
    pub fn place(&mut self, bin: BinIndex, item: ItemIndex, size: T) {
        debug_assert!(
            self.fits(bin, size),
            "called `BinLedger::place` with {} of size {} but {} only has {} left",
            item,
            size,
            bin,
            self.remaining(bin)
        );

        let index = bin.get();
        self.remaining[index] = self.remaining[index] - size;
        self.contents[index].push(item);
    }

    /// Converts the ledger into a placement with bins in opening order.
    #[inline]
    pub fn into_placement(self) -> Placement {
        Placement::new(self.contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(i: usize) -> ItemIndex {
        ItemIndex::new(i)
    }

    #[test]
    fn test_new_ledger_is_empty() {
        let ledger = BinLedger::<i64>::new(10);
        assert!(ledger.is_empty());
        assert_eq!(ledger.num_bins(), 0);
        assert_eq!(ledger.capacity(), 10);
        assert_eq!(ledger.last_bin(), None);
        assert!(ledger.remaining_capacities().is_empty());
    }

    #[test]
    fn test_open_assigns_consecutive_bins() {
        let mut ledger = BinLedger::<i64>::new(10);
        let b0 = ledger.open(item(0), 7);
        let b1 = ledger.open(item(1), 6);

        assert_eq!(b0, BinIndex::new(0));
        assert_eq!(b1, BinIndex::new(1));
        assert_eq!(ledger.last_bin(), Some(b1));
        assert_eq!(ledger.remaining_capacities(), &[3, 4]);
    }

    #[test]
    fn test_place_reduces_remaining_and_records_item() {
        let mut ledger = BinLedger::<i32>::with_expected_bins(10, 4);
        let bin = ledger.open(item(0), 6);
        assert!(ledger.fits(bin, 4));
        assert!(!ledger.fits(bin, 5));

        ledger.place(bin, item(3), 4);
        assert_eq!(ledger.remaining(bin), 0);
        assert_eq!(ledger.contents(bin), &[item(0), item(3)]);
    }

    #[test]
    fn test_into_placement_keeps_opening_order() {
        let mut ledger = BinLedger::<i64>::new(10);
        let b0 = ledger.open(item(2), 5);
        let _b1 = ledger.open(item(0), 9);
        ledger.place(b0, item(1), 5);

        let placement = ledger.into_placement();
        assert_eq!(placement.to_raw(), vec![vec![2, 1], vec![0]]);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn test_place_overfull_panics_in_debug() {
        let mut ledger = BinLedger::<i64>::new(10);
        let bin = ledger.open(item(0), 8);
        ledger.place(bin, item(1), 3);
    }
}
