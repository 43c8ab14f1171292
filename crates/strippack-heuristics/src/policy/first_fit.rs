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

/// The earliest-opened bin with enough room.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FirstFit;

impl FirstFit {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl<T> BinSelector<T> for FirstFit
where
    T: SizeNumeric,
{
    #[inline]
    fn name(&self) -> &str {
        "FirstFit"
    }

    #[inline]
    fn select_bin(&self, ledger: &BinLedger<T>, size: T) -> Option<BinIndex> {
        ledger
            .remaining_capacities()
            .iter()
            .position(|&rem| rem >= size)
            .map(BinIndex::new)
    }
}
