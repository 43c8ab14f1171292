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


//! # Strippack Model
//!
//! **The data layer of the strippack packing library.**
//!
//! Every algorithm in the workspace reads an [`instance::Instance`] and
//! produces a [`placement::Placement`]. This crate owns both, together with
//! the one piece of preprocessing several algorithms share: the
//! size-descending item order.
//!
//! ## Architecture
//!
//! * **`index`**: typed indices for items (`ItemIndex`), bins (`BinIndex`),
//!   and positions in size-sorted order (`SortedIndex`).
//! * **`instance`**: items plus capacity, validated once on construction.
//!   `InstanceError` names the first offending input.
//! * **`placement`**: the partition of items into bins, in bin creation
//!   order, with a verifier for the capacity and partition invariants.
//! * **`ordering`**: the stable, size-descending order with original-index
//!   tie-break used by the decreasing heuristics and the exact solver.
//!
//! ## Design Philosophy
//!
//! 1.  **Fail-Fast**: an `Instance` cannot exist with a non-positive capacity,
//!     a non-positive item, or an item larger than the capacity. Algorithms
//!     take `&Instance` and therefore never see invalid input.
//! 2.  **Original indices everywhere**: placements always refer to positions in
//!     the caller's input, whatever order an algorithm consumed the items in.
//! 3.  **Immutable results**: a `Placement` is built once per run and handed
//!     out by value; nothing is shared between runs.

pub mod index;
pub mod instance;
pub mod ordering;
pub mod placement;
