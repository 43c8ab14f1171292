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


use crate::stats::ExactSolverStatistics;
use strippack_model::placement::Placement;

/// A proven-minimal placement together with the search statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactOutcome {
    placement: Placement,
    statistics: ExactSolverStatistics,
}

impl ExactOutcome {
    #[inline]
    pub fn new(placement: Placement, statistics: ExactSolverStatistics) -> Self {
        Self {
            placement,
            statistics,
        }
    }

    /// Returns the optimal placement.
    #[inline]
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Returns the minimum number of bins.
    #[inline]
    pub fn num_bins(&self) -> usize {
        self.placement.num_bins()
    }

    /// Returns the search statistics.
    #[inline]
    pub fn statistics(&self) -> &ExactSolverStatistics {
        &self.statistics
    }

    /// Splits the outcome into its parts.
    #[inline]
    pub fn into_parts(self) -> (Placement, ExactSolverStatistics) {
        (self.placement, self.statistics)
    }

    /// Drops the statistics and returns the placement.
    #[inline]
    pub fn into_placement(self) -> Placement {
        self.placement
    }
}

impl std::fmt::Display for ExactOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ExactOutcome(bins: {}, lower bound: {}, nodes: {})",
            self.placement.num_bins(),
            self.statistics.lower_bound,
            self.statistics.nodes_explored
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_and_display() {
        let placement = Placement::from_raw(vec![vec![0, 2], vec![1]]);
        let statistics = ExactSolverStatistics {
            lower_bound: 2,
            nodes_explored: 5,
            ..Default::default()
        };
        let outcome = ExactOutcome::new(placement.clone(), statistics.clone());

        assert_eq!(outcome.num_bins(), 2);
        assert_eq!(outcome.placement(), &placement);
        assert_eq!(outcome.statistics(), &statistics);
        assert_eq!(
            outcome.to_string(),
            "ExactOutcome(bins: 2, lower bound: 2, nodes: 5)"
        );
        assert_eq!(outcome.into_parts(), (placement, statistics));
    }
}
