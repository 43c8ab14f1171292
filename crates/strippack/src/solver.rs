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


//! # Algorithm Dispatch
//!
//! The six packing operations over raw size slices. Each one validates the
//! input into an `Instance` exactly once and then runs a single algorithm:
//!
//! - `next_fit`, `first_fit`, `best_fit`: online rules, input order.
//! - `first_fit_decreasing`, `best_fit_decreasing`: the same rules after a
//!   stable size-descending sort.
//! - `exact_solve`: the minimum number of bins, proven by search.
//!
//! `pack` selects one of them through `Algorithm`. Every placement refers
//! to items by their position in the input slice.
//!
//! ## Usage
//!
//! ```rust
//! use strippack::solver::{Algorithm, pack};
//!
//! let items = [7i64, 6, 4, 4, 3, 3, 2, 2];
//! let ffd = pack(Algorithm::FirstFitDecreasing, &items, 10).unwrap();
//! let opt = pack(Algorithm::Exact, &items, 10).unwrap();
//! assert_eq!(ffd.num_bins(), 4);
//! assert_eq!(opt.num_bins(), 4);
//! ```

use strippack_core::num::SizeNumeric;
use strippack_exact::ExactSolver;
use strippack_heuristics::HeuristicKind;
use strippack_model::{
    instance::{Instance, InstanceError},
    placement::Placement,
};

/// A packing algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
    NextFit,
    FirstFit,
    BestFit,
    FirstFitDecreasing,
    BestFitDecreasing,
    Exact,
}

impl Algorithm {
    /// All algorithms, heuristics first.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::NextFit,
        Algorithm::FirstFit,
        Algorithm::BestFit,
        Algorithm::FirstFitDecreasing,
        Algorithm::BestFitDecreasing,
        Algorithm::Exact,
    ];

    /// The heuristic this algorithm runs, or `None` for the exact solver.
    pub const fn heuristic(self) -> Option<HeuristicKind> {
        match self {
            Algorithm::NextFit => Some(HeuristicKind::NextFit),
            Algorithm::FirstFit => Some(HeuristicKind::FirstFit),
            Algorithm::BestFit => Some(HeuristicKind::BestFit),
            Algorithm::FirstFitDecreasing => Some(HeuristicKind::FirstFitDecreasing),
            Algorithm::BestFitDecreasing => Some(HeuristicKind::BestFitDecreasing),
            Algorithm::Exact => None,
        }
    }

    /// Returns `true` if the placement is guaranteed to use the fewest bins.
    #[inline]
    pub const fn is_exact(self) -> bool {
        matches!(self, Algorithm::Exact)
    }

    /// Runs the algorithm on an already validated instance.
    pub fn run<T>(self, instance: &Instance<T>) -> Placement
    where
        T: SizeNumeric,
    {
        match self.heuristic() {
            Some(kind) => kind.pack(instance),
            None => ExactSolver::preallocated(instance.num_items())
                .solve(instance)
                .into_placement(),
        }
    }
}

impl From<HeuristicKind> for Algorithm {
    fn from(kind: HeuristicKind) -> Self {
        match kind {
            HeuristicKind::NextFit => Algorithm::NextFit,
            HeuristicKind::FirstFit => Algorithm::FirstFit,
            HeuristicKind::BestFit => Algorithm::BestFit,
            HeuristicKind::FirstFitDecreasing => Algorithm::FirstFitDecreasing,
            HeuristicKind::BestFitDecreasing => Algorithm::BestFitDecreasing,
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.heuristic() {
            Some(kind) => write!(f, "{}", kind),
            None => f.write_str("Exact"),
        }
    }
}

/// Validates `items` against `capacity` and packs them with `algorithm`.
///
/// # Errors
///
/// Returns the first validation failure: a non-positive capacity, then the
/// first non-positive or oversized item by index, then an overflowing total.
#[inline]
pub fn pack<T>(algorithm: Algorithm, items: &[T], capacity: T) -> Result<Placement, InstanceError<T>>
where
    T: SizeNumeric,
{
    let instance = Instance::from_slice(items, capacity)?;
    Ok(algorithm.run(&instance))
}

/// Next-Fit over `items` in input order. See [`pack`] for errors.
#[inline]
pub fn next_fit<T: SizeNumeric>(items: &[T], capacity: T) -> Result<Placement, InstanceError<T>> {
    pack(Algorithm::NextFit, items, capacity)
}

/// First-Fit over `items` in input order. See [`pack`] for errors.
#[inline]
pub fn first_fit<T: SizeNumeric>(items: &[T], capacity: T) -> Result<Placement, InstanceError<T>> {
    pack(Algorithm::FirstFit, items, capacity)
}

/// Best-Fit over `items` in input order. See [`pack`] for errors.
#[inline]
pub fn best_fit<T: SizeNumeric>(items: &[T], capacity: T) -> Result<Placement, InstanceError<T>> {
    pack(Algorithm::BestFit, items, capacity)
}

/// First-Fit over `items` sorted by decreasing size. See [`pack`] for errors.
#[inline]
pub fn first_fit_decreasing<T: SizeNumeric>(
    items: &[T],
    capacity: T,
) -> Result<Placement, InstanceError<T>> {
    pack(Algorithm::FirstFitDecreasing, items, capacity)
}

/// Best-Fit over `items` sorted by decreasing size. See [`pack`] for errors.
#[inline]
pub fn best_fit_decreasing<T: SizeNumeric>(
    items: &[T],
    capacity: T,
) -> Result<Placement, InstanceError<T>> {
    pack(Algorithm::BestFitDecreasing, items, capacity)
}

/// A placement with the minimum number of bins. See [`pack`] for errors.
///
/// The search is exponential in the worst case; a few dozen items are
/// usually fine, hundreds may not be.
#[inline]
pub fn exact_solve<T: SizeNumeric>(items: &[T], capacity: T) -> Result<Placement, InstanceError<T>> {
    pack(Algorithm::Exact, items, capacity)
}
