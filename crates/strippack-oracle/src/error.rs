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


use strippack_model::placement::PlacementError;

/// Why an oracle could not deliver a verified optimal placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OracleError<T> {
    /// The backend failed or could not prove optimality.
    Solver(String),
    /// The backend returned a packing that does not satisfy the instance.
    InvalidPlacement(PlacementError<T>),
    /// The crate was built without a backend.
    Unavailable,
}

impl<T> std::fmt::Display for OracleError<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OracleError::Solver(message) => write!(f, "Solver error: {}", message),
            OracleError::InvalidPlacement(e) => write!(f, "Oracle returned an invalid placement: {}", e),
            OracleError::Unavailable => {
                write!(f, "No oracle backend available (compile with the `milp` feature)")
            }
        }
    }
}

impl<T> std::error::Error for OracleError<T>
where
    T: std::fmt::Debug + std::fmt::Display,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl<T> From<PlacementError<T>> for OracleError<T> {
    fn from(e: PlacementError<T>) -> Self {
        OracleError::InvalidPlacement(e)
    }
}
