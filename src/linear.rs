// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use num_complex::Complex;

use crate::Real;

/// Returns the root of `a x + b = 0`.
///
/// The caller is responsible for `a` being non-zero; higher-degree solvers
/// only get here after checking their own leading coefficient. If `a` is zero
/// the root is infinite or NaN.
pub fn solve_linear<T: Real>(a: T, b: T) -> [Complex<T>; 1] {
    [Complex::from(-b / a)]
}
