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


//! Bin packing as a mixed-integer program.
//!
//! For `n` items the model has one candidate bin per item:
//!
//! - `x[i][j]` binary: item `i` is packed into bin `j`;
//! - `y[j]` binary: bin `j` is used;
//! - `Σ_j x[i][j] = 1` for every item;
//! - `Σ_i size_i · x[i][j] ≤ L · y[j]` for every bin;
//! - `y[j] ≥ y[j + 1]` so that used bins come first;
//! - minimize `Σ_j y[j]`.
//!
//! The program is handed to `good_lp`'s default solver. The result is read
//! back by thresholding the binaries at 0.5, empty bins are dropped, and the
//! placement is verified against the instance before it is returned.

use crate::{error::OracleError, oracle::OptimalOracle};
use strippack_core::num::SizeNumeric;
use strippack_model::{instance::Instance, placement::Placement};

#[cfg(feature = "milp")]
use good_lp::{
    Expression, ProblemVariables, Solution, SolverModel, Variable, constraint, default_solver,
    variable,
};
#[cfg(feature = "milp")]
use num_traits::ToPrimitive;
#[cfg(feature = "milp")]
use strippack_model::index::ItemIndex;

/// Optimal oracle backed by `good_lp`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MipOracle;

impl MipOracle {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl<T> OptimalOracle<T> for MipOracle
where
    T: SizeNumeric,
{
    fn name(&self) -> &str {
        "MipOracle"
    }

    fn solve_optimal(&mut self, instance: &Instance<T>) -> Result<Placement, OracleError<T>> {
        if instance.is_empty() {
            return Ok(Placement::empty());
        }

        let placement = solve_mip(instance)?;
        placement.verify(instance)?;
        Ok(placement)
    }
}

/// Returns `true` if the crate was built with a MIP backend.
pub fn is_milp_available() -> bool {
    cfg!(feature = "milp")
}

#[cfg(feature = "milp")]
fn to_f64<T>(value: T) -> Result<f64, OracleError<T>>
where
    T: SizeNumeric,
{
    value
        .to_f64()
        .ok_or_else(|| OracleError::Solver(format!("{} is not representable as f64", value)))
}

#[cfg(feature = "milp")]
fn solve_mip<T>(instance: &Instance<T>) -> Result<Placement, OracleError<T>>
where
    T: SizeNumeric,
{
    let n = instance.num_items();
    let capacity = to_f64(instance.capacity())?;
    let sizes = instance
        .sizes()
        .iter()
        .map(|&size| to_f64(size))
        .collect::<Result<Vec<f64>, _>>()?;

    let mut vars = ProblemVariables::new();
    let used: Vec<Variable> = (0..n)
        .map(|j| vars.add(variable().binary().name(format!("y_{}", j))))
        .collect();
    let assign: Vec<Vec<Variable>> = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| vars.add(variable().binary().name(format!("x_{}_{}", i, j))))
                .collect()
        })
        .collect();

    let objective: Expression = used.iter().map(|&y| Expression::from(y)).sum();
    let mut problem = vars.minimise(objective).using(default_solver);

    for row in &assign {
        let placed_once: Expression = row.iter().map(|&x| Expression::from(x)).sum();
        problem = problem.with(constraint!(placed_once == 1.0));
    }
    for j in 0..n {
        let load: Expression = (0..n).map(|i| sizes[i] * assign[i][j]).sum();
        problem = problem.with(constraint!(load <= capacity * used[j]));
        if j + 1 < n {
            problem = problem.with(constraint!(used[j] >= used[j + 1]));
        }
    }

    log::debug!(
        "solving bin packing MIP with {} items ({} binaries)",
        n,
        n * (n + 1)
    );
    let solution = problem.solve().map_err(|e| {
        log::error!("MIP solver error: {}", e);
        OracleError::Solver(e.to_string())
    })?;

    let mut bins: Vec<Vec<ItemIndex>> = vec![Vec::new(); n];
    for (i, row) in assign.iter().enumerate() {
        if let Some(j) = row.iter().position(|&x| solution.value(x) > 0.5) {
            bins[j].push(ItemIndex::new(i));
        }
    }
    bins.retain(|bin| !bin.is_empty());

    Ok(Placement::new(bins))
}

#[cfg(not(feature = "milp"))]
fn solve_mip<T>(_instance: &Instance<T>) -> Result<Placement, OracleError<T>>
where
    T: SizeNumeric,
{
    log::warn!("MIP oracle not available (compile with the `milp` feature)");
    Err(OracleError::Unavailable)
}
