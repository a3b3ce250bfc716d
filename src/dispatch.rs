// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Choosing a solver from a list of coefficients.

use arrayvec::ArrayVec;
use num_complex::Complex;

use crate::{solve_cubic, solve_linear, solve_quadratic, solve_quartic, Real, SolveError};

/// The roots of a polynomial of degree at most four.
///
/// The length is always the nominal degree of the polynomial, even when the
/// leading coefficient is zero (the extra slots then hold zero).
pub type Roots<T> = ArrayVec<Complex<T>, 4>;

/// The degree of a polynomial we have a closed-form solver for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[expect(
    clippy::exhaustive_enums,
    reason = "there is no closed-form solution past degree four"
)]
pub enum Degree {
    /// `a x + b`
    Linear,
    /// `a x² + b x + c`
    Quadratic,
    /// `a x³ + b x² + c x + d`
    Cubic,
    /// `a x⁴ + b x³ + c x² + d x + e`
    Quartic,
}

impl Degree {
    /// The degree of a polynomial with `count` coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::UnsupportedDegree`] unless `count` is between 2
    /// and 5.
    pub const fn from_coefficient_count(count: usize) -> Result<Self, SolveError> {
        match count {
            2 => Ok(Self::Linear),
            3 => Ok(Self::Quadratic),
            4 => Ok(Self::Cubic),
            5 => Ok(Self::Quartic),
            coefficients => Err(SolveError::UnsupportedDegree { coefficients }),
        }
    }

    /// The degree as a number, which is also the number of roots.
    pub const fn order(self) -> usize {
        match self {
            Self::Linear => 1,
            Self::Quadratic => 2,
            Self::Cubic => 3,
            Self::Quartic => 4,
        }
    }

    /// The number of coefficients of a polynomial of this degree.
    pub const fn coefficient_count(self) -> usize {
        self.order() + 1
    }
}

/// Returns the roots of the polynomial with the given coefficients, leading
/// coefficient first.
///
/// Two coefficients make a linear equation, three a quadratic, and so on up
/// to five for a quartic. The roots come out in the same order as from the
/// solver for that degree ([`solve_linear`], [`solve_quadratic`],
/// [`solve_cubic`] or [`solve_quartic`]).
///
/// ```
/// use polysolve::solve_nth_degree;
///
/// let roots = solve_nth_degree(&[1.0, -3.0, 2.0]).unwrap();
/// assert_eq!(roots.len(), 2);
/// assert_eq!(roots[0].re, 2.0);
/// assert_eq!(roots[1].re, 1.0);
/// ```
///
/// # Errors
///
/// Returns [`SolveError::UnsupportedDegree`] if there are fewer than two or
/// more than five coefficients.
pub fn solve_nth_degree<T: Real>(coeffs: &[T]) -> Result<Roots<T>, SolveError> {
    let degree = Degree::from_coefficient_count(coeffs.len())?;
    let c = |i: usize| coeffs[i];

    let mut roots = Roots::new();
    match degree {
        Degree::Linear => roots.extend(solve_linear(c(0), c(1))),
        Degree::Quadratic => roots.extend(solve_quadratic(c(0), c(1), c(2))),
        Degree::Cubic => roots.extend(solve_cubic(c(0), c(1), c(2), c(3))),
        Degree::Quartic => roots.extend(solve_quartic(c(0), c(1), c(2), c(3), c(4))),
    }
    debug_assert_eq!(roots.len(), degree.order(), "one root per degree");
    Ok(roots)
}
