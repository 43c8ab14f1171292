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


//! # Strippack
//!
//! Pack positive-sized items into the fewest bins of a fixed capacity.
//! This crate is the entry point over plain slices; the algorithms live in
//! the member crates and are re-exported here.
//!
//! ## Modules
//!
//! - `solver`: the six packing operations and the `Algorithm` dispatch.
//!
//! ## Crates
//!
//! - `strippack_model`: `Instance`, `Placement`, the size-descending order.
//! - `strippack_heuristics`: NF, FF, BF, FFD, BFD over a bin ledger.
//! - `strippack_exact`: the exact solver with search monitors and statistics.
//!
//! Invalid input (a non-positive capacity, a non-positive item, an item
//! larger than the capacity) is rejected with an `InstanceError` before any
//! algorithm runs. An empty slice packs into zero bins.

pub mod solver;

pub use solver::{
    Algorithm, best_fit, best_fit_decreasing, exact_solve, first_fit, first_fit_decreasing,
    next_fit, pack,
};
pub use strippack_core::num::SizeNumeric;
pub use strippack_exact::{ExactOutcome, ExactSolver};
pub use strippack_heuristics::HeuristicKind;
pub use strippack_model::{
    index::{BinIndex, ItemIndex},
    instance::{Instance, InstanceError},
    placement::{Placement, PlacementError},
};
