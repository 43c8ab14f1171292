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


//! Exact solver against an independent optimal oracle.

use log::{debug, error};
use strippack_core::num::SizeNumeric;
use strippack_exact::ExactSolver;
use strippack_model::instance::Instance;
use strippack_oracle::{OptimalOracle, OracleError};

/// The outcome of one cross-check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrossCheck<T> {
    /// Both solvers used `bins` bins.
    Agreement { bins: usize },
    /// The solvers disagree on the optimum; `sizes` reproduces the case.
    Disagreement {
        sizes: Vec<T>,
        exact_bins: usize,
        oracle_bins: usize,
    },
}

impl<T> CrossCheck<T> {
    #[inline]
    pub fn is_agreement(&self) -> bool {
        matches!(self, CrossCheck::Agreement { .. })
    }

    /// Returns the oracle's bin count.
    #[inline]
    pub fn oracle_bins(&self) -> usize {
        match self {
            CrossCheck::Agreement { bins } => *bins,
            CrossCheck::Disagreement { oracle_bins, .. } => *oracle_bins,
        }
    }
}

impl<T> std::fmt::Display for CrossCheck<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CrossCheck::Agreement { bins } => write!(f, "Agreement(bins: {})", bins),
            CrossCheck::Disagreement {
                sizes,
                exact_bins,
                oracle_bins,
            } => write!(
                f,
                "Disagreement(exact: {}, oracle: {}, sizes: {:?})",
                exact_bins, oracle_bins, sizes
            ),
        }
    }
}

/// Solves `instance` with the exact solver and with `oracle` and compares
/// the bin counts.
///
/// # Errors
///
/// Propagates the oracle's error, including an oracle placement that fails
/// verification.
pub fn cross_check<T, O>(
    instance: &Instance<T>,
    oracle: &mut O,
) -> Result<CrossCheck<T>, OracleError<T>>
where
    T: SizeNumeric,
    O: OptimalOracle<T> + ?Sized,
{
    let exact_bins = ExactSolver::preallocated(instance.num_items())
        .solve(instance)
        .num_bins();
    check_against_oracle(instance, exact_bins, oracle)
}

/// Compares an already known exact bin count with the answer of `oracle`.
///
/// # Errors
///
/// Propagates the oracle's error, including an oracle placement that fails
/// verification.
pub fn check_against_oracle<T, O>(
    instance: &Instance<T>,
    exact_bins: usize,
    oracle: &mut O,
) -> Result<CrossCheck<T>, OracleError<T>>
where
    T: SizeNumeric,
    O: OptimalOracle<T> + ?Sized,
{
    let placement = oracle.solve_optimal(instance)?;
    placement.verify(instance)?;
    let oracle_bins = placement.num_bins();

    if exact_bins == oracle_bins {
        debug!(
            "cross-check with {}: both use {} bins",
            oracle.name(),
            exact_bins
        );
        return Ok(CrossCheck::Agreement { bins: exact_bins });
    }

    error!(
        "cross-check with {} failed: exact uses {} bins, oracle uses {} bins; sizes {:?}, capacity {}",
        oracle.name(),
        exact_bins,
        oracle_bins,
        instance.sizes(),
        instance.capacity()
    );
    Ok(CrossCheck::Disagreement {
        sizes: instance.sizes().to_vec(),
        exact_bins,
        oracle_bins,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use strippack_model::placement::{Placement, PlacementError};

    /// Puts every item in its own bin.
    struct OneItemPerBin;

    impl OptimalOracle<i64> for OneItemPerBin {
        fn name(&self) -> &str {
            "OneItemPerBin"
        }

        fn solve_optimal(&mut self, instance: &Instance<i64>) -> Result<Placement, OracleError<i64>> {
            Ok(Placement::from_raw(
                (0..instance.num_items()).map(|i| vec![i]).collect(),
            ))
        }
    }

    /// Returns an invalid placement.
    struct Broken;

    impl OptimalOracle<i64> for Broken {
        fn name(&self) -> &str {
            "Broken"
        }

        fn solve_optimal(&mut self, instance: &Instance<i64>) -> Result<Placement, OracleError<i64>> {
            Ok(Placement::from_raw(vec![(0..instance.num_items()).collect()]))
        }
    }

    /// Wraps the exact solver itself.
    struct ExactAsOracle;

    impl OptimalOracle<i64> for ExactAsOracle {
        fn name(&self) -> &str {
            "ExactAsOracle"
        }

        fn solve_optimal(&mut self, instance: &Instance<i64>) -> Result<Placement, OracleError<i64>> {
            Ok(strippack_exact::solve_exact(instance).into_placement())
        }
    }

    #[test]
    fn test_agreement() {
        let instance = Instance::new(vec![6, 5, 3, 2, 2, 2], 10).unwrap();
        let check = cross_check(&instance, &mut ExactAsOracle).unwrap();
        assert_eq!(check, CrossCheck::Agreement { bins: 2 });
        assert!(check.is_agreement());
        assert_eq!(check.to_string(), "Agreement(bins: 2)");
    }

    #[test]
    fn test_disagreement_keeps_the_sizes() {
        let instance = Instance::new(vec![5, 5, 5, 5], 10).unwrap();
        let check = cross_check(&instance, &mut OneItemPerBin).unwrap();
        assert_eq!(
            check,
            CrossCheck::Disagreement {
                sizes: vec![5, 5, 5, 5],
                exact_bins: 2,
                oracle_bins: 4,
            }
        );
        assert!(!check.is_agreement());
    }

    #[test]
    fn test_invalid_oracle_placement_is_an_error() {
        let instance = Instance::new(vec![6, 6], 10).unwrap();
        let err = cross_check(&instance, &mut Broken).unwrap_err();
        assert!(matches!(
            err,
            OracleError::InvalidPlacement(PlacementError::CapacityExceeded { .. })
        ));
    }

    #[test]
    fn test_known_exact_count_is_compared_as_given() {
        let instance = Instance::new(vec![5, 5, 5, 5], 10).unwrap();
        let check = check_against_oracle(&instance, 2, &mut ExactAsOracle).unwrap();
        assert_eq!(check.oracle_bins(), 2);
        assert!(check.is_agreement());

        let check = check_against_oracle(&instance, 3, &mut ExactAsOracle).unwrap();
        assert_eq!(check.oracle_bins(), 2);
        assert!(!check.is_agreement());
    }

    #[test]
    fn test_dyn_oracle() {
        let instance = Instance::new(vec![3, 3, 3], 10).unwrap();
        let oracle: &mut dyn OptimalOracle<i64> = &mut ExactAsOracle;
        assert!(cross_check(&instance, oracle).unwrap().is_agreement());
    }

    #[cfg(feature = "milp")]
    #[test]
    fn test_mip_oracle_agrees_on_small_instances() {
        use crate::generator::Distribution;
        use rand::SeedableRng;
        use rand_chacha::ChaCha8Rng;
        use strippack_oracle::MipOracle;

        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut oracle = MipOracle::new();
        for _ in 0..10 {
            let sizes = Distribution::Uniform.generate(7, 10, &mut rng);
            let instance = Instance::new(sizes, 10).unwrap();
            let check = cross_check(&instance, &mut oracle).unwrap();
            assert!(check.is_agreement(), "{}", check);
        }
    }
}
