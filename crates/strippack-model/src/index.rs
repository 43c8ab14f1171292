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


use strippack_core::utils::index::{TypedIndex, TypedIndexTag};

/// A tag type for item indices (positions in the caller's input).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ItemIndexTag;

impl TypedIndexTag for ItemIndexTag {
    const NAME: &'static str = "ItemIndex";
}

/// A typed index for items.
pub type ItemIndex = TypedIndex<ItemIndexTag>;

/// A tag type for bin indices (positions in bin creation order).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct BinIndexTag;

impl TypedIndexTag for BinIndexTag {
    const NAME: &'static str = "BinIndex";
}

/// A typed index for bins.
pub type BinIndex = TypedIndex<BinIndexTag>;

/// A tag type for positions in the size-descending item order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct SortedIndexTag;

impl TypedIndexTag for SortedIndexTag {
    const NAME: &'static str = "SortedIndex";
}

/// A typed index for positions in the size-descending item order.
pub type SortedIndex = TypedIndex<SortedIndexTag>;
