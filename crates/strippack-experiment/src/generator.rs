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


//! Random item lists.
//!
//! Five distributions of item sizes for a bin capacity `L`. Integer division
//! is floor division; every range is clamped so that its lower end is at
//! least 1 and its upper end is not below its lower end, which keeps every
//! generated size a valid item for any `L >= 1`.
//!
//! | Distribution | Sizes |
//! |---|---|
//! | `Uniform` | `[1, L]` |
//! | `ManySmall` | 70%: `[1, max(1, L/3)]`, else `[L/3 + 1, L]` |
//! | `ManyLarge` | 70%: `[L/2, L]`, else `[1, max(1, L/2 - 1)]` |
//! | `Bimodal` | 50%: `[1, max(1, L/4)]`, else `[L/2, min(L, 3L/4)]` |
//! | `PerfectPacking` | `n` bins cut into random pieces, shuffled |
//!
//! All generators draw from a caller-supplied `Rng`, so a seeded generator
//! reproduces the same lists.

use rand::{Rng, seq::SliceRandom};

/// A family of random item lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Distribution {
    Uniform,
    ManySmall,
    ManyLarge,
    Bimodal,
    /// Items that fill exactly `n` bins; `n` counts bins, not items.
    PerfectPacking,
}

impl Distribution {
    /// All distributions, in report order.
    pub const ALL: [Distribution; 5] = [
        Distribution::Uniform,
        Distribution::ManySmall,
        Distribution::ManyLarge,
        Distribution::Bimodal,
        Distribution::PerfectPacking,
    ];

    /// Human readable name used in reports.
    pub const fn name(self) -> &'static str {
        match self {
            Distribution::Uniform => "Uniform",
            Distribution::ManySmall => "Many small items",
            Distribution::ManyLarge => "Many large items",
            Distribution::Bimodal => "Bimodal",
            Distribution::PerfectPacking => "Perfect packing",
        }
    }

    /// Draws one item list.
    ///
    /// For `PerfectPacking`, `n` is the number of bins and the list has a
    /// random length with total size exactly `n * capacity`; for every
    /// other distribution the list has exactly `n` items.
    pub fn generate<R>(self, n: usize, capacity: i64, rng: &mut R) -> Vec<i64>
    where
        R: Rng + ?Sized,
    {
        debug_assert!(
            capacity >= 1,
            "called `Distribution::generate` with non-positive capacity {}",
            capacity
        );

        match self {
            Distribution::Uniform => (0..n).map(|_| uniform(rng, 1, capacity)).collect(),
            Distribution::ManySmall => (0..n)
                .map(|_| {
                    if rng.random_bool(0.7) {
                        uniform(rng, 1, capacity / 3)
                    } else {
                        uniform(rng, capacity / 3 + 1, capacity)
                    }
                })
                .collect(),
            Distribution::ManyLarge => (0..n)
                .map(|_| {
                    if rng.random_bool(0.7) {
                        uniform(rng, capacity / 2, capacity)
                    } else {
                        uniform(rng, 1, capacity / 2 - 1)
                    }
                })
                .collect(),
            Distribution::Bimodal => (0..n)
                .map(|_| {
                    if rng.random_bool(0.5) {
                        uniform(rng, 1, capacity / 4)
                    } else {
                        uniform(rng, capacity / 2, capacity.min(3 * capacity / 4))
                    }
                })
                .collect(),
            Distribution::PerfectPacking => perfect_packing(n, capacity, rng),
        }
    }
}

impl std::fmt::Display for Distribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Uniform integer in `[lo, hi]` after clamping `lo >= 1` and `hi >= lo`.
#[inline]
fn uniform<R>(rng: &mut R, lo: i64, hi: i64) -> i64
where
    R: Rng + ?Sized,
{
    let lo = lo.max(1);
    let hi = hi.max(lo);
    rng.random_range(lo..=hi)
}

fn perfect_packing<R>(num_bins: usize, capacity: i64, rng: &mut R) -> Vec<i64>
where
    R: Rng + ?Sized,
{
    let mut sizes = Vec::new();
    for _ in 0..num_bins {
        let mut remaining = capacity;
        while remaining > 0 {
            let piece = rng.random_range(1..=remaining);
            sizes.push(piece);
            remaining -= piece;
        }
    }
    sizes.shuffle(rng);
    sizes
}
