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


//! Packing heuristics
//!
//! `PackingHeuristic` is the public face of every rule: given a validated
//! `Instance`, produce a `Placement`. Online rules (`NextFit`, `FirstFit`,
//! `BestFit`) feed items in input order; `Decreasing` wraps any selection
//! policy and feeds items in size-descending order instead, breaking ties by
//! original index. Either way the placement reports original item indices.

use crate::{
    ledger::BinLedger,
    policy::{BestFit, BinSelector, FirstFit, NextFit},
};
use strippack_core::num::SizeNumeric;
use strippack_model::{index::ItemIndex, instance::Instance, placement::Placement};

/// A complete packing rule.
pub trait PackingHeuristic<T>
where
    T: SizeNumeric,
{
    /// Human readable name of the rule, e.g. `"FirstFitDecreasing"`.
    fn name(&self) -> &str;

    /// Packs every item of `instance`.
    ///
    /// The result uses at least `instance.lower_bound()` bins and never
    /// overfills one.
    fn pack(&self, instance: &Instance<T>) -> Placement;
}

impl<T> std::fmt::Debug for dyn PackingHeuristic<T>
where
    T: SizeNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PackingHeuristic({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn PackingHeuristic<T>
where
    T: SizeNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PackingHeuristic({})", self.name())
    }
}

/// Feeds `order` through `selector`, opening a bin whenever it declines.
fn pack_in_order<T, S, I>(name: &str, selector: &S, instance: &Instance<T>, order: I) -> Placement
where
    T: SizeNumeric,
    S: BinSelector<T> + ?Sized,
    I: IntoIterator<Item = ItemIndex>,
{
    let mut ledger = BinLedger::with_expected_bins(instance.capacity(), instance.lower_bound());
    for item in order {
        let size = instance.size(item);
        match selector.select_bin(&ledger, size) {
            Some(bin) => ledger.place(bin, item, size),
            None => {
                let bin = ledger.open(item, size);
                log::trace!("{}: opened {} for {} of size {}", name, bin, item, size);
            }
        }
    }

    log::debug!(
        "{}: packed {} items into {} bins (lower bound {})",
        name,
        instance.num_items(),
        ledger.num_bins(),
        instance.lower_bound()
    );
    ledger.into_placement()
}

macro_rules! impl_online_heuristic {
    ($($selector:ty),* $(,)?) => {
        $(
            impl<T> PackingHeuristic<T> for $selector
            where
                T: SizeNumeric,
            {
                #[inline]
                fn name(&self) -> &str {
                    BinSelector::<T>::name(self)
                }

                #[inline]
                fn pack(&self, instance: &Instance<T>) -> Placement {
                    let name = BinSelector::<T>::name(self);
                    pack_in_order(name, self, instance, ItemIndex::range(instance.num_items()))
                }
            }
        )*
    };
}

impl_online_heuristic!(NextFit, FirstFit, BestFit);

/// Runs a selection policy over the items in size-descending order.
///
/// Equal sizes keep their input order, so the result is a function of the
/// multiset of sizes and their original positions only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decreasing<S> {
    selector: S,
    name: String,
}

impl<S> Decreasing<S> {
    /// Wraps `selector`; the rule is named after it with a `Decreasing` suffix.
    pub fn new<T>(selector: S) -> Self
    where
        T: SizeNumeric,
        S: BinSelector<T>,
    {
        let name = format!("{}Decreasing", selector.name());
        Self { selector, name }
    }

    /// Returns the wrapped selection policy.
    #[inline]
    pub fn selector(&self) -> &S {
        &self.selector
    }
}

impl<T, S> PackingHeuristic<T> for Decreasing<S>
where
    T: SizeNumeric,
    S: BinSelector<T>,
{
    #[inline]
    fn name(&self) -> &str {
        &self.name
    }

    fn pack(&self, instance: &Instance<T>) -> Placement {
        let sorted = instance.sorted_items();
        pack_in_order(
            &self.name,
            &self.selector,
            instance,
            sorted.items().iter().copied(),
        )
    }
}

/// The five rules this crate provides, as a closed set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HeuristicKind {
    NextFit,
    FirstFit,
    BestFit,
    FirstFitDecreasing,
    BestFitDecreasing,
}

impl HeuristicKind {
    /// All rules, in the order reports list them.
    pub const ALL: [HeuristicKind; 5] = [
        HeuristicKind::NextFit,
        HeuristicKind::FirstFit,
        HeuristicKind::BestFit,
        HeuristicKind::FirstFitDecreasing,
        HeuristicKind::BestFitDecreasing,
    ];

    /// Short label used in tables, e.g. `"FFD"`.
    pub const fn abbreviation(self) -> &'static str {
        match self {
            HeuristicKind::NextFit => "NF",
            HeuristicKind::FirstFit => "FF",
            HeuristicKind::BestFit => "BF",
            HeuristicKind::FirstFitDecreasing => "FFD",
            HeuristicKind::BestFitDecreasing => "BFD",
        }
    }

    /// Returns `true` for the rules that sort items before packing.
    pub const fn is_decreasing(self) -> bool {
        matches!(
            self,
            HeuristicKind::FirstFitDecreasing | HeuristicKind::BestFitDecreasing
        )
    }

    /// Runs the rule on `instance`.
    pub fn pack<T>(self, instance: &Instance<T>) -> Placement
    where
        T: SizeNumeric,
    {
        match self {
            HeuristicKind::NextFit => next_fit(instance),
            HeuristicKind::FirstFit => first_fit(instance),
            HeuristicKind::BestFit => best_fit(instance),
            HeuristicKind::FirstFitDecreasing => first_fit_decreasing(instance),
            HeuristicKind::BestFitDecreasing => best_fit_decreasing(instance),
        }
    }
}

impl std::fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Next-Fit: keep only the newest bin open.
#[inline]
pub fn next_fit<T: SizeNumeric>(instance: &Instance<T>) -> Placement {
    NextFit.pack(instance)
}

/// First-Fit: earliest bin with enough room.
#[inline]
pub fn first_fit<T: SizeNumeric>(instance: &Instance<T>) -> Placement {
    FirstFit.pack(instance)
}

/// Best-Fit: bin with the least space left afterwards.
#[inline]
pub fn best_fit<T: SizeNumeric>(instance: &Instance<T>) -> Placement {
    BestFit.pack(instance)
}

/// First-Fit over the items in size-descending order.
#[inline]
pub fn first_fit_decreasing<T: SizeNumeric>(instance: &Instance<T>) -> Placement {
    Decreasing::new::<T>(FirstFit).pack(instance)
}

/// Best-Fit over the items in size-descending order.
#[inline]
pub fn best_fit_decreasing<T: SizeNumeric>(instance: &Instance<T>) -> Placement {
    Decreasing::new::<T>(BestFit).pack(instance)
}
