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


//! Bin-selection policies
//!
//! A policy answers one question: given the bins opened so far, which one
//! should receive the next item? Returning `None` tells the packing loop to
//! open a fresh bin. Policies never mutate the ledger.

pub mod best_fit;
pub mod first_fit;
pub mod next_fit;

pub use best_fit::BestFit;
pub use first_fit::FirstFit;
pub use next_fit::NextFit;

use strippack_core::num::SizeNumeric;
use strippack_model::index::BinIndex;

use crate::ledger::BinLedger;

/// Chooses an open bin for the next item, or `None` to open a new one.
///
/// Implementations must only return bins whose remaining capacity is at
/// least `size`.
pub trait BinSelector<T>
where
    T: SizeNumeric,
{
    /// Short human readable name of the rule, e.g. `"FirstFit"`.
    fn name(&self) -> &str;

    /// Picks the bin that should receive an item of `size`.
    fn select_bin(&self, ledger: &BinLedger<T>, size: T) -> Option<BinIndex>;
}

impl<T> std::fmt::Debug for dyn BinSelector<T>
where
    T: SizeNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BinSelector({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn BinSelector<T>
where
    T: SizeNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BinSelector({})", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strippack_model::index::ItemIndex;

    fn ledger_with(remaining_after: &[i64]) -> BinLedger<i64> {
        let mut ledger = BinLedger::new(10);
        for (i, &rem) in remaining_after.iter().enumerate() {
            ledger.open(ItemIndex::new(i), 10 - rem);
        }
        ledger
    }

    #[test]
    fn test_policies_on_empty_ledger_open_new_bin() {
        let ledger = BinLedger::<i64>::new(10);
        assert_eq!(NextFit.select_bin(&ledger, 1), None);
        assert_eq!(FirstFit.select_bin(&ledger, 1), None);
        assert_eq!(BestFit.select_bin(&ledger, 1), None);
    }

    #[test]
    fn test_policies_disagree_on_same_ledger() {
        // remaining: [5, 2, 3, 0]
        let ledger = ledger_with(&[5, 2, 3, 0]);
        assert_eq!(NextFit.select_bin(&ledger, 2), None);
        assert_eq!(FirstFit.select_bin(&ledger, 2), Some(BinIndex::new(0)));
        assert_eq!(BestFit.select_bin(&ledger, 2), Some(BinIndex::new(1)));
    }

    #[test]
    fn test_dyn_selector_formatting() {
        let selector: Box<dyn BinSelector<i64>> = Box::new(BestFit);
        assert_eq!(format!("{}", selector), "BinSelector(BestFit)");
        assert_eq!(format!("{:?}", selector), "BinSelector(BestFit)");
    }
}
