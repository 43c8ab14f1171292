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


use crate::{ledger::BinLedger, policy::BinSelector};
use strippack_core::num::SizeNumeric;
use strippack_model::index::BinIndex;

/// Only the most recently opened bin is a candidate.
///
/// Earlier bins are never revisited, which makes Next-Fit the only rule that
/// needs constant memory in a streaming setting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NextFit;

impl NextFit {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl<T> BinSelector<T> for NextFit
where
    T: SizeNumeric,
{
    #[inline]
    fn name(&self) -> &str {
        "NextFit"
    }

    #[inline]
    fn select_bin(&self, ledger: &BinLedger<T>, size: T) -> Option<BinIndex> {
        ledger.last_bin().filter(|&bin| ledger.fits(bin, size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strippack_model::index::ItemIndex;

    #[test]
    fn test_next_fit_ignores_earlier_bins() {
        let mut ledger = BinLedger::<i64>::new(10);
        ledger.open(ItemIndex::new(0), 1); // 9 left
        ledger.open(ItemIndex::new(1), 8); // 2 left

        assert_eq!(NextFit.select_bin(&ledger, 2), Some(BinIndex::new(1)));
        assert_eq!(NextFit.select_bin(&ledger, 3), None);
    }
}
