// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scalar types the solvers are generic over.

use core::fmt::Debug;

use num_traits::{Float, FloatConst};

/// A real floating-point scalar that coefficients and roots are built on.
///
/// This is implemented for `f32` and `f64`. All the solvers are written once
/// against this trait, so the same formulas (and the same branch decisions)
/// apply at both precisions; only the tolerances differ.
pub trait Real: Float + FloatConst + Debug + Default + 'static {
    /// A quadratic discriminant with absolute value below this is treated as
    /// exactly zero, producing a double root.
    const QUADRATIC_TOLERANCE: Self;

    /// A depressed-cubic discriminant `(q/2)² + (p/3)³` is treated as exactly
    /// zero, producing a repeated real root, when its absolute value is at
    /// most this fraction of the larger of its two terms.
    const CUBIC_TOLERANCE: Self;

    /// Converts a literal constant to this precision.
    ///
    /// Only meant for the small, exactly-known constants that appear in the
    /// formulas, so the narrowing to `f32` never matters.
    fn lit(x: f64) -> Self;
}

impl Real for f64 {
    const QUADRATIC_TOLERANCE: Self = 1e-12;
    const CUBIC_TOLERANCE: Self = 1e-8;

    #[inline]
    fn lit(x: f64) -> Self {
        x
    }
}

impl Real for f32 {
    const QUADRATIC_TOLERANCE: Self = 1e-5;
    const CUBIC_TOLERANCE: Self = 1e-4;

    #[inline]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "only used for formula constants"
    )]
    fn lit(x: f64) -> Self {
        x as f32
    }
}

#[cfg(test)]
mod tests {
    use super::Real;

    #[test]
    fn tolerances_shrink_with_precision() {
        assert!(f64::QUADRATIC_TOLERANCE < f64::CUBIC_TOLERANCE);
        assert!(f32::QUADRATIC_TOLERANCE < f32::CUBIC_TOLERANCE);
        assert!(f64::CUBIC_TOLERANCE < f64::from(f32::QUADRATIC_TOLERANCE));
    }

    #[test]
    fn literals() {
        assert_eq!(f32::lit(0.5), 0.5_f32);
        assert_eq!(f64::lit(1.0 / 3.0), 1.0 / 3.0);
    }
}
