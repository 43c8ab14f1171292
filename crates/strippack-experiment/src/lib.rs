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


//! # Strippack Experiment
//!
//! Tooling to measure the packing algorithms rather than to pack.
//!
//! - **`generator`**: five random item-size distributions over a capacity `L`.
//! - **`runner`**: repeated trials comparing every heuristic with the exact
//!   optimum, averaged into an `ExperimentReport` that prints as a table.
//!   With an oracle, small trials are also solved independently and every
//!   disagreement is counted.
//! - **`crosscheck`**: the exact solver against an `OptimalOracle`;
//!   disagreements are logged at `error` level with the offending sizes.
//! - **`probe`**: exact-solver timings per item count, to find where it stops
//!   being practical.
//!
//! Every entry point takes the random generator by `&mut`, so a seeded
//! generator makes runs reproducible.

pub mod crosscheck;
pub mod error;
pub mod generator;
pub mod probe;
pub mod runner;

pub use crosscheck::{CrossCheck, check_against_oracle, cross_check};
pub use error::ExperimentError;
pub use generator::Distribution;
pub use probe::{ProbeRow, probe_exact_limit};
pub use runner::{
    ExperimentConfig, ExperimentReport, HeuristicSummary, SolverSummary, run_experiment,
    run_experiment_with_oracle,
};
