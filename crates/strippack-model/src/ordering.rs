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


//! Size-descending item order.
//!
//! The decreasing heuristics and the exact solver all consume items largest
//! first. They must agree on what happens to items of equal size, otherwise
//! their results are not reproducible across implementations. The rule is:
//! sort by size descending and, among equal sizes, keep the original input
//! order (ascending `ItemIndex`). This is a stable sort on the reversed size
//! key, not a reversal of a stable ascending sort.

use crate::index::{ItemIndex, SortedIndex};
use num_traits::PrimInt;

/// Returns the item indices of `sizes` ordered by size descending, ties by
/// ascending original index.
///
/// ```rust
/// use strippack_model::ordering::decreasing_order;
///
/// let order: Vec<usize> = decreasing_order(&[3i64, 7, 3, 9])
///     .into_iter()
///     .map(|i| i.get())
///     .collect();
/// assert_eq!(order, vec![3, 1, 0, 2]);
/// ```
pub fn decreasing_order<T>(sizes: &[T]) -> Vec<ItemIndex>
where
    T: PrimInt,
{
    let mut order: Vec<ItemIndex> = ItemIndex::range(sizes.len()).collect();
    // `sort_by` is stable and `order` starts ascending, so ties keep input order.
    order.sort_by(|a, b| sizes[b.get()].cmp(&sizes[a.get()]));
    order
}

/// Items rearranged into size-descending order, remembering where each one
/// came from.
///
/// Position `p` (a `SortedIndex`) holds the `p`-th largest item; `item(p)`
/// maps it back to the caller's index and `size(p)` gives its size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortedItems<T> {
    items: Vec<ItemIndex>,
    sizes: Vec<T>,
}

impl<T> SortedItems<T>
where
    T: PrimInt,
{
    /// Sorts `sizes` with [`decreasing_order`].
    pub fn new(sizes: &[T]) -> Self {
        let items = decreasing_order(sizes);
        let sorted_sizes = items.iter().map(|item| sizes[item.get()]).collect();
        Self {
            items,
            sizes: sorted_sizes,
        }
    }

    /// Returns the number of items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the original index of the item at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of bounds.
    #[inline]
    pub fn item(&self, position: SortedIndex) -> ItemIndex {
        debug_assert!(
            position.get() < self.len(),
            "called `SortedItems::item` with position out of bounds: the len is {} but the index is {}",
            self.len(),
            position.get()
        );

        self.items[position.get()]
    }

    /// Returns the size of the item at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of bounds.
    #[inline]
    pub fn size(&self, position: SortedIndex) -> T {
        debug_assert!(
            position.get() < self.len(),
            "called `SortedItems::size` with position out of bounds: the len is {} but the index is {}",
            self.len(),
            position.get()
        );

        self.sizes[position.get()]
    }

    /// Returns the original indices in sorted order.
    #[inline]
    pub fn items(&self) -> &[ItemIndex] {
        &self.items
    }

    /// Returns the sizes in sorted order.
    #[inline]
    pub fn sizes(&self) -> &[T] {
        &self.sizes
    }

    /// Iterates over `(original index, size)` pairs, largest first.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (ItemIndex, T)> + '_ {
        self.items.iter().copied().zip(self.sizes.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn raw(order: &[ItemIndex]) -> Vec<usize> {
        order.iter().map(|i| i.get()).collect()
    }

    #[test]
    fn test_descending_with_ties_in_input_order() {
        let order = decreasing_order(&[2i64, 5, 2, 5, 1]);
        assert_eq!(raw(&order), vec![1, 3, 0, 2, 4]);
    }

    #[test]
    fn test_all_equal_keeps_identity_order() {
        let order = decreasing_order(&[4i32; 6]);
        assert_eq!(raw(&order), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_empty_input() {
        assert!(decreasing_order::<i64>(&[]).is_empty());
        let sorted = SortedItems::<i64>::new(&[]);
        assert!(sorted.is_empty());
        assert_eq!(sorted.len(), 0);
    }

    #[test]
    fn test_sorted_items_maps_back_to_original_indices() {
        let sizes = [7i64, 3, 9, 3];
        let sorted = SortedItems::new(&sizes);
        assert_eq!(sorted.sizes(), &[9, 7, 3, 3]);
        assert_eq!(raw(sorted.items()), vec![2, 0, 1, 3]);
        assert_eq!(sorted.item(SortedIndex::new(0)).get(), 2);
        assert_eq!(sorted.size(SortedIndex::new(3)), 3);

        let pairs: Vec<(usize, i64)> = sorted.iter().map(|(i, s)| (i.get(), s)).collect();
        assert_eq!(pairs, vec![(2, 9), (0, 7), (1, 3), (3, 3)]);
    }

    #[test]
    fn test_order_is_a_permutation_sorted_by_size_then_index() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let n = rng.random_range(0..20);
            let mut sizes: Vec<i64> = (0..n).map(|_| rng.random_range(1..=6)).collect();
            sizes.shuffle(&mut rng);

            let order = decreasing_order(&sizes);
            assert_eq!(order.len(), n);

            let mut seen = raw(&order);
            seen.sort_unstable();
            assert_eq!(seen, (0..n).collect::<Vec<_>>());

            for w in order.windows(2) {
                let (a, b) = (w[0].get(), w[1].get());
                assert!(sizes[a] > sizes[b] || (sizes[a] == sizes[b] && a < b));
            }
        }
    }
}
