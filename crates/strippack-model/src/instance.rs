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


//! Validated packing instances.
//!
//! An `Instance` is the only way item sizes and a capacity reach the packing
//! algorithms. Construction checks the input once, in a fixed order, and
//! reports the first violation it finds:
//!
//! 1. the capacity must be positive,
//! 2. every item, in input order, must have a positive size,
//! 3. every item, in input order, must fit into an empty bin,
//! 4. the total size must be representable in `T`.
//!
//! The empty item list is valid and describes a packing with zero bins.

use crate::index::ItemIndex;
use crate::ordering::SortedItems;
use strippack_core::num::{SizeNumeric, ceil_div, checked_total};

/// The error type for instance construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceError<T> {
    /// The bin capacity is zero or negative.
    InvalidCapacity {
        /// The rejected capacity.
        capacity: T,
    },
    /// An item has a zero or negative size.
    NonPositiveItem {
        /// The position of the item in the input.
        item: ItemIndex,
        /// The rejected size.
        size: T,
    },
    /// An item is larger than the bin capacity and can never be packed.
    OversizedItem {
        /// The position of the item in the input.
        item: ItemIndex,
        /// The size of the item.
        size: T,
        /// The bin capacity it was checked against.
        capacity: T,
    },
    /// The sum of all item sizes overflows the size type.
    TotalSizeOverflow,
}

impl<T> std::fmt::Display for InstanceError<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCapacity { capacity } => {
                write!(f, "Bin capacity must be positive, got {}", capacity)
            }
            Self::NonPositiveItem { item, size } => {
                write!(
                    f,
                    "Item {} has size {}, but item sizes must be positive",
                    item.get(),
                    size
                )
            }
            Self::OversizedItem {
                item,
                size,
                capacity,
            } => write!(
                f,
                "Item {} has size {} which exceeds the bin capacity {}",
                item.get(),
                size,
                capacity
            ),
            Self::TotalSizeOverflow => {
                write!(f, "The total item size overflows the size type")
            }
        }
    }
}

impl<T> std::error::Error for InstanceError<T> where T: std::fmt::Debug + std::fmt::Display {}

/// Item sizes together with the bin capacity they are packed against.
///
/// Items are identified by their position in `sizes` (`ItemIndex`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instance<T> {
    sizes: Vec<T>,
    capacity: T,
    total_size: T,
}

impl<T> Instance<T>
where
    T: SizeNumeric,
{
    /// Validates `sizes` against `capacity` and builds an instance.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strippack_model::instance::{Instance, InstanceError};
    /// use strippack_model::index::ItemIndex;
    ///
    /// let instance = Instance::new(vec![7i64, 6, 4, 4, 3, 3, 2, 2], 10).unwrap();
    /// assert_eq!(instance.num_items(), 8);
    /// assert_eq!(instance.total_size(), 31);
    ///
    /// let err = Instance::new(vec![12i64], 10).unwrap_err();
    /// assert_eq!(
    ///     err,
    ///     InstanceError::OversizedItem { item: ItemIndex::new(0), size: 12, capacity: 10 }
    /// );
    /// ```
    pub fn new(sizes: Vec<T>, capacity: T) -> Result<Self, InstanceError<T>> {
        if capacity <= T::zero() {
            return Err(InstanceError::InvalidCapacity { capacity });
        }

        for (i, &size) in sizes.iter().enumerate() {
            let item = ItemIndex::new(i);
            if size <= T::zero() {
                return Err(InstanceError::NonPositiveItem { item, size });
            }
            if size > capacity {
                return Err(InstanceError::OversizedItem {
                    item,
                    size,
                    capacity,
                });
            }
        }

        let total_size =
            checked_total(sizes.iter().copied()).ok_or(InstanceError::TotalSizeOverflow)?;

        Ok(Self {
            sizes,
            capacity,
            total_size,
        })
    }

    /// Validates a borrowed slice; see [`Instance::new`].
    #[inline]
    pub fn from_slice(sizes: &[T], capacity: T) -> Result<Self, InstanceError<T>> {
        Self::new(sizes.to_vec(), capacity)
    }

    /// Returns the bin capacity.
    #[inline]
    pub fn capacity(&self) -> T {
        self.capacity
    }

    /// Returns the number of items.
    #[inline]
    pub fn num_items(&self) -> usize {
        self.sizes.len()
    }

    /// Returns `true` if there is nothing to pack.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Returns all item sizes in input order.
    #[inline]
    pub fn sizes(&self) -> &[T] {
        &self.sizes
    }

    /// Returns the size of a single item.
    ///
    /// # Panics
    ///
    /// Panics if `item` is out of bounds.
    #[inline]
    pub fn size(&self, item: ItemIndex) -> T {
        debug_assert!(
            item.get() < self.num_items(),
            "called `Instance::size` with item index out of bounds: the len is {} but the index is {}",
            self.num_items(),
            item.get()
        );

        self.sizes[item.get()]
    }

    /// Returns the sum of all item sizes.
    #[inline]
    pub fn total_size(&self) -> T {
        self.total_size
    }

    /// Returns `ceil(total_size / capacity)`, the fewest bins any packing could use.
    ///
    /// The bound ignores whether the items can actually be combined, so it is
    /// necessary but not sufficient.
    #[inline]
    pub fn lower_bound(&self) -> usize {
        // Every item fits a bin, so the bound never exceeds `num_items`.
        ceil_div(self.total_size, self.capacity)
            .to_usize()
            .unwrap_or(self.num_items())
    }

    /// Returns the items in size-descending order with original-index tie-break.
    #[inline]
    pub fn sorted_items(&self) -> SortedItems<T> {
        SortedItems::new(&self.sizes)
    }
}

impl<T> std::fmt::Display for Instance<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance(capacity: {}, items: [", self.capacity)?;
        for (i, size) in self.sizes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", size)?;
        }
        write!(f, "])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ii(i: usize) -> ItemIndex {
        ItemIndex::new(i)
    }

    #[test]
    fn test_valid_instance_accessors() {
        let instance = Instance::new(vec![7i64, 6, 4, 4, 3, 3, 2, 2], 10).unwrap();
        assert_eq!(instance.capacity(), 10);
        assert_eq!(instance.num_items(), 8);
        assert!(!instance.is_empty());
        assert_eq!(instance.size(ii(1)), 6);
        assert_eq!(instance.total_size(), 31);
        assert_eq!(instance.lower_bound(), 4);
        assert_eq!(instance.sizes(), &[7, 6, 4, 4, 3, 3, 2, 2]);
    }

    #[test]
    fn test_empty_instance_is_valid_with_zero_lower_bound() {
        let instance = Instance::<i32>::new(Vec::new(), 10).unwrap();
        assert!(instance.is_empty());
        assert_eq!(instance.total_size(), 0);
        assert_eq!(instance.lower_bound(), 0);
    }

    #[test]
    fn test_item_equal_to_capacity_is_accepted() {
        let instance = Instance::new(vec![10i32, 10], 10).unwrap();
        assert_eq!(instance.lower_bound(), 2);
    }

    #[test]
    fn test_rejects_non_positive_capacity() {
        assert_eq!(
            Instance::new(vec![1i64], 0).unwrap_err(),
            InstanceError::InvalidCapacity { capacity: 0 }
        );
        assert_eq!(
            Instance::<i64>::new(Vec::new(), -3).unwrap_err(),
            InstanceError::InvalidCapacity { capacity: -3 }
        );
    }

    #[test]
    fn test_rejects_oversized_item_and_names_it() {
        let err = Instance::new(vec![3i64, 12, 15], 10).unwrap_err();
        assert_eq!(
            err,
            InstanceError::OversizedItem {
                item: ii(1),
                size: 12,
                capacity: 10
            }
        );
    }

    #[test]
    fn test_rejects_non_positive_item() {
        assert_eq!(
            Instance::new(vec![3i64, 0], 10).unwrap_err(),
            InstanceError::NonPositiveItem { item: ii(1), size: 0 }
        );
        assert_eq!(
            Instance::new(vec![-4i64], 10).unwrap_err(),
            InstanceError::NonPositiveItem { item: ii(0), size: -4 }
        );
    }

    #[test]
    fn test_capacity_is_checked_before_items() {
        assert_eq!(
            Instance::new(vec![12i64], -1).unwrap_err(),
            InstanceError::InvalidCapacity { capacity: -1 }
        );
    }

    #[test]
    fn test_rejects_total_size_overflow() {
        assert_eq!(
            Instance::new(vec![100i8, 100], 100).unwrap_err(),
            InstanceError::TotalSizeOverflow
        );
    }

    #[test]
    fn test_lower_bound_rounds_up() {
        let instance = Instance::new(vec![2i64, 2, 2, 2, 2, 2], 10).unwrap();
        assert_eq!(instance.lower_bound(), 2);
        let instance = Instance::new(vec![2i64, 2, 2, 2, 2], 10).unwrap();
        assert_eq!(instance.lower_bound(), 1);
    }

    #[test]
    fn test_error_display_messages() {
        let oversized = InstanceError::OversizedItem {
            item: ii(0),
            size: 12i64,
            capacity: 10,
        };
        assert_eq!(
            format!("{}", oversized),
            "Item 0 has size 12 which exceeds the bin capacity 10"
        );
        assert_eq!(
            format!("{}", InstanceError::InvalidCapacity { capacity: 0i64 }),
            "Bin capacity must be positive, got 0"
        );
        let boxed: Box<dyn std::error::Error> = Box::new(InstanceError::<i64>::TotalSizeOverflow);
        assert!(boxed.to_string().contains("overflows"));
    }

    #[test]
    fn test_display_lists_sizes() {
        let instance = Instance::new(vec![3i32, 5], 8).unwrap();
        assert_eq!(format!("{}", instance), "Instance(capacity: 8, items: [3, 5])");
    }
}
