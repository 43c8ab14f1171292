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


use crate::error::OracleError;
use strippack_core::num::SizeNumeric;
use strippack_model::{instance::Instance, placement::Placement};

/// A source of optimal placements that is independent of the exact search.
pub trait OptimalOracle<T>
where
    T: SizeNumeric,
{
    /// Returns the name of the oracle.
    fn name(&self) -> &str;

    /// Returns a verified placement with the minimum number of bins.
    fn solve_optimal(&mut self, instance: &Instance<T>) -> Result<Placement, OracleError<T>>;
}

impl<T> std::fmt::Debug for dyn OptimalOracle<T>
where
    T: SizeNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OptimalOracle({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn OptimalOracle<T>
where
    T: SizeNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OptimalOracle({})", self.name())
    }
}
