// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::{Mul, MulAssign};

use num_complex::Complex;
use num_traits::Zero;

use crate::{solve_cubic, solve_linear, solve_quadratic, solve_quartic, Degree, Real};

/// A polynomial whose degree is known at compile-time.
///
/// `N` is the number of coefficients, so the degree is `N - 1`. Roots are
/// available for degrees one through four, through [`Poly::roots`].
///
/// The coefficients are stored leading coefficient first, in the same order
/// that the `solve_*` functions take them.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Poly<T, const N: usize> {
    coeffs: [T; N],
}

/// A polynomial of degree 1.
pub type Linear<T = f64> = Poly<T, 2>;

/// A polynomial of degree 2.
pub type Quadratic<T = f64> = Poly<T, 3>;

/// A polynomial of degree 3.
pub type Cubic<T = f64> = Poly<T, 4>;

/// A polynomial of degree 4.
pub type Quartic<T = f64> = Poly<T, 5>;

impl<T: Real, const N: usize> Poly<T, N> {
    /// Creates a new polynomial with the provided coefficients.
    ///
    /// The leading coefficient comes first. So if you pass `[a, b, c]` you'll
    /// get the polynomial `a x² + b x + c`.
    pub const fn new(coeffs: [T; N]) -> Self {
        Self { coeffs }
    }

    /// The coefficients of this polynomial, leading coefficient first.
    pub fn coeffs(&self) -> &[T; N] {
        &self.coeffs
    }

    /// Evaluates this polynomial at a point.
    pub fn eval(&self, x: T) -> T {
        let mut acc = T::zero();
        for &c in &self.coeffs {
            acc = acc * x + c;
        }
        acc
    }

    /// Evaluates this polynomial at a complex point, such as one of its roots.
    pub fn eval_complex(&self, x: Complex<T>) -> Complex<T> {
        let mut acc = Complex::zero();
        for &c in &self.coeffs {
            acc = acc * x + c;
        }
        acc
    }

    /// Returns the largest absolute value of any coefficient.
    ///
    /// Always returns a non-negative number, or NaN if some coefficient is NaN.
    pub fn magnitude(&self) -> T {
        let mut max = T::zero();
        for c in &self.coeffs {
            max = max.max(c.abs());
        }
        max
    }

    /// Are all the coefficients finite?
    pub fn is_finite(&self) -> bool {
        self.coeffs.iter().all(|c| c.is_finite())
    }
}

macro_rules! impl_roots {
    ($N:literal, $degree:ident, $solve:ident, [$($i:literal),+]) => {
        impl<T: Real> Poly<T, $N> {
            /// The degree of this polynomial.
            ///
            /// This is the nominal degree: a zero leading coefficient doesn't
            /// change it.
            pub const fn degree(&self) -> Degree {
                Degree::$degree
            }

            /// Computes all the roots of this polynomial, in closed form.
            ///
            #[doc = concat!("This is the same as calling [`", stringify!($solve), "`]")]
            /// on the coefficients, so the order of the roots is the same too.
            pub fn roots(&self) -> [Complex<T>; $N - 1] {
                $solve($(self.coeffs[$i]),+)
            }
        }
    };
}

impl_roots!(2, Linear, solve_linear, [0, 1]);
impl_roots!(3, Quadratic, solve_quadratic, [0, 1, 2]);
impl_roots!(4, Cubic, solve_cubic, [0, 1, 2, 3]);
impl_roots!(5, Quartic, solve_quartic, [0, 1, 2, 3, 4]);

impl<T: Real, const N: usize> Mul<T> for Poly<T, N> {
    type Output = Self;

    fn mul(mut self, scale: T) -> Self {
        self *= scale;
        self
    }
}

impl<T: Real, const N: usize> MulAssign<T> for Poly<T, N> {
    fn mul_assign(&mut self, scale: T) {
        for c in &mut self.coeffs {
            *c = *c * scale;
        }
    }
}

impl<T: Real, const N: usize> Mul<T> for &Poly<T, N> {
    type Output = Poly<T, N>;

    fn mul(self, scale: T) -> Poly<T, N> {
        (*self) * scale
    }
}
