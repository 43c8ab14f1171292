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


//! Placements: the result of every packing algorithm.
//!
//! A `Placement` is a list of bins in creation order; each bin lists the
//! original indices of the items assigned to it, in the order they were
//! assigned. The number of bins is the quantity all algorithms minimize.
//!
//! A placement produced by this workspace always satisfies two invariants
//! with respect to the instance it was computed for:
//!
//! - **capacity**: the sizes in every bin sum to at most the capacity;
//! - **partition**: every item index appears in exactly one bin, once.
//!
//! `Placement::verify` checks both (and rejects empty bins), which is how
//! tests and the oracle adapter validate results they did not build
//! themselves.

use crate::index::{BinIndex, ItemIndex};
use crate::instance::Instance;
use fixedbitset::FixedBitSet;
use strippack_core::num::{SizeNumeric, checked_total};

/// A violated placement invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError<T> {
    /// The items of a bin do not fit into the capacity.
    CapacityExceeded {
        /// The overfull bin.
        bin: BinIndex,
        /// The summed size of its items (saturated at `T::max_value()` on overflow).
        load: T,
        /// The capacity of the instance.
        capacity: T,
    },
    /// An item was placed more than once.
    DuplicateItem {
        /// The repeated item.
        item: ItemIndex,
    },
    /// An item was not placed at all.
    MissingItem {
        /// The first unplaced item.
        item: ItemIndex,
    },
    /// A bin refers to an item the instance does not have.
    UnknownItem {
        /// The out-of-range item.
        item: ItemIndex,
    },
    /// A bin without any items.
    EmptyBin {
        /// The empty bin.
        bin: BinIndex,
    },
}

impl<T> std::fmt::Display for PlacementError<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CapacityExceeded {
                bin,
                load,
                capacity,
            } => write!(
                f,
                "Bin {} holds a load of {} which exceeds the capacity {}",
                bin.get(),
                load,
                capacity
            ),
            Self::DuplicateItem { item } => {
                write!(f, "Item {} is placed more than once", item.get())
            }
            Self::MissingItem { item } => write!(f, "Item {} is not placed", item.get()),
            Self::UnknownItem { item } => {
                write!(f, "Item {} does not exist in the instance", item.get())
            }
            Self::EmptyBin { bin } => write!(f, "Bin {} is empty", bin.get()),
        }
    }
}

impl<T> std::error::Error for PlacementError<T> where T: std::fmt::Debug + std::fmt::Display {}

/// A partition of items into bins.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Placement {
    bins: Vec<Vec<ItemIndex>>,
}

impl Placement {
    /// Creates a placement from bins listed in creation order.
    #[inline]
    pub fn new(bins: Vec<Vec<ItemIndex>>) -> Self {
        Self { bins }
    }

    /// Creates the placement of an empty instance.
    #[inline]
    pub fn empty() -> Self {
        Self { bins: Vec::new() }
    }

    /// Creates a placement from raw `usize` item indices.
    ///
    /// ```rust
    /// use strippack_model::placement::Placement;
    ///
    /// let placement = Placement::from_raw(vec![vec![0, 2], vec![1]]);
    /// assert_eq!(placement.num_bins(), 2);
    /// ```
    pub fn from_raw(bins: Vec<Vec<usize>>) -> Self {
        Self {
            bins: bins
                .into_iter()
                .map(|bin| bin.into_iter().map(ItemIndex::new).collect())
                .collect(),
        }
    }

    /// Returns the number of bins used.
    #[inline]
    pub fn num_bins(&self) -> usize {
        self.bins.len()
    }

    /// Returns `true` if no bin is used.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Returns the total number of placed items.
    #[inline]
    pub fn num_items(&self) -> usize {
        self.bins.iter().map(Vec::len).sum()
    }

    /// Returns all bins in creation order.
    #[inline]
    pub fn bins(&self) -> &[Vec<ItemIndex>] {
        &self.bins
    }

    /// Returns the items of a single bin.
    ///
    /// # Panics
    ///
    /// Panics if `bin` is out of bounds.
    #[inline]
    pub fn bin(&self, bin: BinIndex) -> &[ItemIndex] {
        debug_assert!(
            bin.get() < self.num_bins(),
            "called `Placement::bin` with bin index out of bounds: the len is {} but the index is {}",
            self.num_bins(),
            bin.get()
        );

        &self.bins[bin.get()]
    }

    /// Returns the bin holding `item`, if it was placed.
    pub fn bin_of(&self, item: ItemIndex) -> Option<BinIndex> {
        self.bins
            .iter()
            .position(|bin| bin.contains(&item))
            .map(BinIndex::new)
    }

    /// Returns the bins with raw `usize` item indices.
    pub fn to_raw(&self) -> Vec<Vec<usize>> {
        self.bins
            .iter()
            .map(|bin| bin.iter().map(|item| item.get()).collect())
            .collect()
    }

    /// Consumes the placement and returns its bins.
    #[inline]
    pub fn into_bins(self) -> Vec<Vec<ItemIndex>> {
        self.bins
    }

    /// Returns the item sizes of every bin, in placement order.
    ///
    /// # Panics
    ///
    /// Panics if a bin refers to an item outside `instance`.
    pub fn sizes<T>(&self, instance: &Instance<T>) -> Vec<Vec<T>>
    where
        T: SizeNumeric,
    {
        self.bins
            .iter()
            .map(|bin| bin.iter().map(|&item| instance.size(item)).collect())
            .collect()
    }

    /// Returns the summed item size of every bin.
    ///
    /// # Panics
    ///
    /// Panics if a bin refers to an item outside `instance`.
    pub fn loads<T>(&self, instance: &Instance<T>) -> Vec<T>
    where
        T: SizeNumeric,
    {
        self.bins
            .iter()
            .map(|bin| {
                checked_total(bin.iter().map(|&item| instance.size(item)))
                    .unwrap_or_else(T::max_value)
            })
            .collect()
    }

    /// Checks the capacity and partition invariants against `instance`.
    ///
    /// Bins are inspected in order and the first violation is returned;
    /// missing items are reported after all bins were scanned.
    pub fn verify<T>(&self, instance: &Instance<T>) -> Result<(), PlacementError<T>>
    where
        T: SizeNumeric,
    {
        let num_items = instance.num_items();
        let capacity = instance.capacity();
        let mut placed = FixedBitSet::with_capacity(num_items);

        for (b, bin) in self.bins.iter().enumerate() {
            let bin_index = BinIndex::new(b);
            if bin.is_empty() {
                return Err(PlacementError::EmptyBin { bin: bin_index });
            }

            let mut load = T::zero();
            for &item in bin {
                if item.get() >= num_items {
                    return Err(PlacementError::UnknownItem { item });
                }
                if placed.put(item.get()) {
                    return Err(PlacementError::DuplicateItem { item });
                }
                load = load
                    .checked_add(&instance.size(item))
                    .unwrap_or_else(T::max_value);
            }

            if load > capacity {
                return Err(PlacementError::CapacityExceeded {
                    bin: bin_index,
                    load,
                    capacity,
                });
            }
        }

        match placed.zeroes().next() {
            Some(missing) => Err(PlacementError::MissingItem {
                item: ItemIndex::new(missing),
            }),
            None => Ok(()),
        }
    }
}

impl From<Vec<Vec<ItemIndex>>> for Placement {
    fn from(bins: Vec<Vec<ItemIndex>>) -> Self {
        Self::new(bins)
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Placement Summary")?;
        writeln!(f, "   Bins Used: {}", self.num_bins())?;
        writeln!(f)?;

        if self.is_empty() {
            writeln!(f, "   (No bins used)")?;
            return Ok(());
        }

        writeln!(f, "   {:<10} | {:<12}", "Bin", "Items")?;
        writeln!(f, "   {:-<10}-+-{:-<12}", "", "")?;
        for (b, bin) in self.bins.iter().enumerate() {
            let items: Vec<String> = bin.iter().map(|item| item.get().to_string()).collect();
            writeln!(f, "   {:<10} | {:<12}", b, items.join(", "))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance(sizes: &[i64], capacity: i64) -> Instance<i64> {
        Instance::from_slice(sizes, capacity).unwrap()
    }

    fn bi(i: usize) -> BinIndex {
        BinIndex::new(i)
    }

    fn ii(i: usize) -> ItemIndex {
        ItemIndex::new(i)
    }

    #[test]
    fn test_accessors() {
        let placement = Placement::from_raw(vec![vec![0, 4], vec![1, 2], vec![3]]);
        assert_eq!(placement.num_bins(), 3);
        assert_eq!(placement.num_items(), 5);
        assert!(!placement.is_empty());
        assert_eq!(placement.bin(bi(1)), &[ii(1), ii(2)]);
        assert_eq!(placement.bin_of(ii(4)), Some(bi(0)));
        assert_eq!(placement.bin_of(ii(9)), None);
        assert_eq!(placement.to_raw(), vec![vec![0, 4], vec![1, 2], vec![3]]);
    }

    #[test]
    fn test_sizes_and_loads() {
        let inst = instance(&[7, 6, 4, 4, 3], 10);
        let placement = Placement::from_raw(vec![vec![0, 4], vec![1, 2], vec![3]]);
        assert_eq!(placement.sizes(&inst), vec![vec![7, 3], vec![6, 4], vec![4]]);
        assert_eq!(placement.loads(&inst), vec![10, 10, 4]);
    }

    #[test]
    fn test_verify_accepts_valid_partition() {
        let inst = instance(&[7, 6, 4, 4, 3], 10);
        let placement = Placement::from_raw(vec![vec![0, 4], vec![1, 2], vec![3]]);
        assert_eq!(placement.verify(&inst), Ok(()));
    }

    #[test]
    fn test_verify_empty_instance_and_empty_placement() {
        let inst = instance(&[], 10);
        assert_eq!(Placement::empty().verify(&inst), Ok(()));
    }

    #[test]
    fn test_verify_detects_capacity_violation() {
        let inst = instance(&[7, 6, 4], 10);
        let placement = Placement::from_raw(vec![vec![0, 2], vec![1]]);
        assert_eq!(
            placement.verify(&inst),
            Err(PlacementError::CapacityExceeded {
                bin: bi(0),
                load: 11,
                capacity: 10
            })
        );
    }

    #[test]
    fn test_verify_detects_duplicate_missing_unknown_and_empty() {
        let inst = instance(&[1, 1, 1], 10);

        let dup = Placement::from_raw(vec![vec![0, 1], vec![1, 2]]);
        assert_eq!(
            dup.verify(&inst),
            Err(PlacementError::DuplicateItem { item: ii(1) })
        );

        let missing = Placement::from_raw(vec![vec![0, 2]]);
        assert_eq!(
            missing.verify(&inst),
            Err(PlacementError::MissingItem { item: ii(1) })
        );

        let unknown = Placement::from_raw(vec![vec![0, 1, 2, 3]]);
        assert_eq!(
            unknown.verify(&inst),
            Err(PlacementError::UnknownItem { item: ii(3) })
        );

        let empty_bin = Placement::from_raw(vec![vec![0, 1, 2], vec![]]);
        assert_eq!(
            empty_bin.verify(&inst),
            Err(PlacementError::EmptyBin { bin: bi(1) })
        );
    }

    #[test]
    fn test_display_formatting_example() {
        let placement = Placement::from_raw(vec![vec![0, 3], vec![1]]);
        let displayed = format!("{}", placement);

        let mut expected = String::new();
        expected.push_str("Placement Summary\n");
        expected.push_str("   Bins Used: 2\n");
        expected.push('\n');
        expected.push_str("   Bin        | Items       \n");
        expected.push_str("   -----------+-------------\n");
        expected.push_str("   0          | 0, 3        \n");
        expected.push_str("   1          | 1           \n");

        assert_eq!(displayed, expected);
    }

    #[test]
    fn test_display_empty() {
        let displayed = format!("{}", Placement::empty());
        assert!(displayed.contains("Bins Used: 0"));
        assert!(displayed.contains("(No bins used)"));
    }

    #[test]
    fn test_error_display() {
        let err: PlacementError<i64> = PlacementError::MissingItem { item: ii(2) };
        assert_eq!(format!("{}", err), "Item 2 is not placed");
    }
}
