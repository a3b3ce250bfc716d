// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// The ways [`solve_nth_degree`](crate::solve_nth_degree) can refuse a
/// polynomial.
///
/// Numerical trouble is never reported here: degenerate leading coefficients
/// fall through to a lower degree, and anything else shows up as non-finite
/// roots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum SolveError {
    /// The coefficient slice doesn't describe a polynomial of degree one
    /// through four.
    #[error("expected between 2 and 5 coefficients, got {coefficients}")]
    UnsupportedDegree {
        /// The number of coefficients that was passed.
        coefficients: usize,
    },
}
