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


//! # Strippack Heuristics
//!
//! Fast, not necessarily optimal packing rules.
//!
//! Every heuristic here is the same loop: take the items in some order, ask a
//! bin-selection policy where the next item should go, and either place it
//! into that bin or open a new one. The loop lives in `heuristic`; the
//! policies live in `policy`; the per-run state lives in `ledger`.
//!
//! | Rule | Order | Policy |
//! |---|---|---|
//! | Next-Fit (NF) | input | last-opened bin only |
//! | First-Fit (FF) | input | first fitting bin in creation order |
//! | Best-Fit (BF) | input | fitting bin with the least space left afterwards |
//! | First-Fit-Decreasing (FFD) | size-descending | First-Fit |
//! | Best-Fit-Decreasing (BFD) | size-descending | Best-Fit |
//!
//! All rules are deterministic and stateless between runs; a fresh
//! `BinLedger` is built for every call. Placements always use the caller's
//! item indices, including for the decreasing rules.
//!
//! Module map
//! - `ledger`: remaining capacities and contents of the bins opened so far.
//! - `policy`: the `BinSelector` trait and the NF/FF/BF selection rules.
//! - `heuristic`: the packing loop, the `Decreasing` adapter, and the
//!   `HeuristicKind` enumeration of all five rules.

pub mod heuristic;
pub mod ledger;
pub mod policy;

pub use heuristic::{
    Decreasing, HeuristicKind, PackingHeuristic, best_fit, best_fit_decreasing, first_fit,
    first_fit_decreasing, next_fit,
};
