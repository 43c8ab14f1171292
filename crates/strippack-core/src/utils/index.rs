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


//! # Strongly Typed Indices
//!
//! Packing code juggles two index spaces at once: positions of items in the
//! caller's input and positions of bins in a placement. The exact solver adds
//! a third view, positions in the size-sorted order. Raw `usize` makes it far
//! too easy to feed one where another is expected, so every index space gets
//! its own phantom tag.
//!
//! `TypedIndex<T>` is `#[repr(transparent)]` over `usize`; the tag only exists
//! at compile time. The tag's `NAME` shows up in `Debug`/`Display` output.
//!
//! ```rust
//! use strippack_core::utils::index::{TypedIndex, TypedIndexTag};
//!
//! #[derive(Clone, Copy)]
//! struct SlotTag;
//! impl TypedIndexTag for SlotTag { const NAME: &'static str = "SlotIndex"; }
//!
//! type SlotIndex = TypedIndex<SlotTag>;
//! let slot = SlotIndex::new(3);
//! assert_eq!(slot.get(), 3);
//! assert_eq!(format!("{}", slot), "SlotIndex(3)");
//! ```

/// Names an index space for diagnostics.
pub trait TypedIndexTag: Clone {
    const NAME: &'static str;
}

/// A `usize` index bound to the index space described by the tag `T`.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypedIndex<T> {
    index: usize,
    _marker: std::marker::PhantomData<T>,
}

impl<T> TypedIndex<T> {
    /// Wraps a raw `usize`.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            _marker: std::marker::PhantomData,
        }
    }

    /// Returns the raw `usize`.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.index
    }

    /// Returns the index directly after this one.
    #[inline(always)]
    pub const fn next(&self) -> Self {
        Self::new(self.index + 1)
    }

    /// Iterates over the first `len` indices of this space, in ascending order.
    ///
    /// ```rust
    /// use strippack_core::utils::index::{TypedIndex, TypedIndexTag};
    ///
    /// #[derive(Clone, Copy)]
    /// struct SlotTag;
    /// impl TypedIndexTag for SlotTag { const NAME: &'static str = "SlotIndex"; }
    ///
    /// let all: Vec<usize> = TypedIndex::<SlotTag>::range(3).map(|i| i.get()).collect();
    /// assert_eq!(all, vec![0, 1, 2]);
    /// ```
    #[inline]
    pub fn range(len: usize) -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..len).map(Self::new)
    }
}

impl<T> std::fmt::Debug for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> std::fmt::Display for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> From<usize> for TypedIndex<T> {
    #[inline(always)]
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl<T> From<TypedIndex<T>> for usize {
    #[inline(always)]
    fn from(typed_index: TypedIndex<T>) -> Self {
        typed_index.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    struct ShelfTag;

    impl TypedIndexTag for ShelfTag {
        const NAME: &'static str = "ShelfIdx";
    }

    type ShelfIndex = TypedIndex<ShelfTag>;

    #[test]
    fn test_new_get_and_next() {
        let idx = ShelfIndex::new(10);
        assert_eq!(idx.get(), 10);
        assert_eq!(idx.next().get(), 11);
        assert_eq!(idx.get(), 10);
    }

    #[test]
    fn test_conversions_round_trip_through_usize() {
        let idx: ShelfIndex = 42.into();
        let raw: usize = idx.into();
        assert_eq!(raw, 42);
    }

    #[test]
    fn test_debug_and_display_use_tag_name() {
        let idx = ShelfIndex::new(7);
        assert_eq!(format!("{}", idx), "ShelfIdx(7)");
        assert_eq!(format!("{:?}", idx), "ShelfIdx(7)");
    }

    #[test]
    fn test_range_is_ascending_and_exact_size() {
        let it = ShelfIndex::range(4);
        assert_eq!(it.len(), 4);
        let collected: Vec<usize> = ShelfIndex::range(4).map(|i| i.get()).collect();
        assert_eq!(collected, vec![0, 1, 2, 3]);

        let reversed: Vec<usize> = ShelfIndex::range(3).rev().map(|i| i.get()).collect();
        assert_eq!(reversed, vec![2, 1, 0]);

        assert_eq!(ShelfIndex::range(0).count(), 0);
    }

    #[test]
    fn test_ordering_follows_raw_index() {
        assert!(ShelfIndex::new(1) < ShelfIndex::new(2));
        assert_eq!(ShelfIndex::new(5), ShelfIndex::from(5));
    }
}
