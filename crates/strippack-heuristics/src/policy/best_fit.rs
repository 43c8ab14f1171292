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

/// The fitting bin that is left with the least space after placement.
///
/// Ties go to the earliest-opened bin: a later bin only wins with a strictly
/// smaller leftover.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BestFit;

impl BestFit {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl<T> BinSelector<T> for BestFit
where
    T: SizeNumeric,
{
    #[inline]
    fn name(&self) -> &str {
        "BestFit"
    }

    fn select_bin(&self, ledger: &BinLedger<T>, size: T) -> Option<BinIndex> {
        let mut best: Option<(usize, T)> = None;
        for (i, &rem) in ledger.remaining_capacities().iter().enumerate() {
            if rem < size {
                continue;
            }
            let leftover = rem - size;
            match best {
                Some((_, best_leftover)) if leftover >= best_leftover => {}
                _ => best = Some((i, leftover)),
            }
        }
        best.map(|(i, _)| BinIndex::new(i))
    }
}
