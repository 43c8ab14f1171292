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


use strippack_model::instance::InstanceError;
use strippack_oracle::OracleError;

/// Why an experiment stopped before producing a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExperimentError {
    /// A generated list, or the capacity itself, is not a valid instance.
    Instance(InstanceError<i64>),
    /// The oracle failed on one of the trials.
    Oracle(OracleError<i64>),
}

impl std::fmt::Display for ExperimentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExperimentError::Instance(e) => write!(f, "Invalid instance: {}", e),
            ExperimentError::Oracle(e) => write!(f, "Oracle failed: {}", e),
        }
    }
}

impl std::error::Error for ExperimentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExperimentError::Instance(e) => Some(e),
            ExperimentError::Oracle(e) => Some(e),
        }
    }
}

impl From<InstanceError<i64>> for ExperimentError {
    fn from(e: InstanceError<i64>) -> Self {
        ExperimentError::Instance(e)
    }
}

impl From<OracleError<i64>> for ExperimentError {
    fn from(e: OracleError<i64>) -> Self {
        ExperimentError::Oracle(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_conversions_and_source() {
        let e: ExperimentError = InstanceError::InvalidCapacity { capacity: 0 }.into();
        assert!(matches!(e, ExperimentError::Instance(_)));
        assert!(e.source().is_some());
        assert!(e.to_string().starts_with("Invalid instance: "));

        let e: ExperimentError = OracleError::Unavailable.into();
        assert_eq!(e, ExperimentError::Oracle(OracleError::Unavailable));
        assert!(e.to_string().starts_with("Oracle failed: "));
    }
}
