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


//! # Size Numerics
//!
//! Item sizes and bin capacities are plain integers, but the algorithms are
//! written once for every signed primitive integer. `SizeNumeric` collects
//! the bounds they need into a single name, in the same spirit as a trait
//! alias.
//!
//! Signed types are required on purpose: the public boundary accepts whatever
//! the caller hands in and must be able to see (and reject) a zero or negative
//! size or capacity instead of having it wrap around.
//!
//! `i128` is left out; nothing in the packing pipeline needs that range and it
//! is noticeably slower on most targets.

use num_traits::{PrimInt, Signed};

/// Integer types usable as item sizes and bin capacities.
pub trait SizeNumeric:
    PrimInt + Signed + std::fmt::Debug + std::fmt::Display + std::hash::Hash + Send + Sync + 'static
{
}

macro_rules! impl_size_numeric {
    ($($t:ty),* $(,)?) => {
        $(impl SizeNumeric for $t {})*
    };
}

impl_size_numeric!(i8, i16, i32, i64, isize);

/// Integer division rounding towards positive infinity.
///
/// # Panics
///
/// In debug builds, panics if `numerator` is negative or `denominator` is not
/// positive.
///
/// ```rust
/// use strippack_core::num::ceil_div;
///
/// assert_eq!(ceil_div(30i64, 10), 3);
/// assert_eq!(ceil_div(31i64, 10), 4);
/// assert_eq!(ceil_div(0i32, 7), 0);
/// ```
#[inline]
pub fn ceil_div<T>(numerator: T, denominator: T) -> T
where
    T: PrimInt,
{
    debug_assert!(
        numerator >= T::zero(),
        "called `ceil_div` with a negative numerator"
    );
    debug_assert!(
        denominator > T::zero(),
        "called `ceil_div` with a non-positive denominator"
    );

    let quotient = numerator / denominator;
    if numerator % denominator == T::zero() {
        quotient
    } else {
        quotient + T::one()
    }
}

/// Sums `values`, returning `None` on overflow.
///
/// ```rust
/// use strippack_core::num::checked_total;
///
/// assert_eq!(checked_total([1i8, 2, 3]), Some(6));
/// assert_eq!(checked_total([100i8, 100]), None);
/// ```
#[inline]
pub fn checked_total<T, I>(values: I) -> Option<T>
where
    T: PrimInt,
    I: IntoIterator<Item = T>,
{
    values
        .into_iter()
        .try_fold(T::zero(), |acc, value| acc.checked_add(&value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_size_numeric<T: SizeNumeric>() {}

    #[test]
    fn test_signed_primitives_are_size_numeric() {
        assert_size_numeric::<i8>();
        assert_size_numeric::<i16>();
        assert_size_numeric::<i32>();
        assert_size_numeric::<i64>();
        assert_size_numeric::<isize>();
    }

    #[test]
    fn test_ceil_div_exact_and_rounded() {
        assert_eq!(ceil_div(20i64, 10), 2);
        assert_eq!(ceil_div(21i64, 10), 3);
        assert_eq!(ceil_div(29i64, 10), 3);
        assert_eq!(ceil_div(1i64, 10), 1);
        assert_eq!(ceil_div(0i64, 10), 0);
    }

    #[test]
    fn test_ceil_div_near_type_limit_does_not_overflow() {
        assert_eq!(ceil_div(i8::MAX, 2), 64);
        assert_eq!(ceil_div(i8::MAX, 1), i8::MAX);
    }

    #[test]
    fn test_checked_total() {
        assert_eq!(checked_total(Vec::<i32>::new()), Some(0));
        assert_eq!(checked_total([7i32, 6, 4, 4, 3, 3, 2, 2]), Some(31));
        assert_eq!(checked_total([i16::MAX, 1]), None);
    }
}
