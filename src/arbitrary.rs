// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Utilities for fuzz and/or property testing using `arbitrary`.
//!
//! The polynomials generated here are built from their roots, so a test
//! knows what the solvers ought to find.

use arbitrary::Unstructured;
use arrayvec::ArrayVec;
use num_complex::Complex;

use crate::{Poly, Real};

/// Roots generated by [`planted_poly`] are at most this far from the origin
/// in each coordinate.
pub const ROOT_BOUND: f64 = 8.0;

/// Distinct roots generated by [`planted_poly`] are at least this far apart,
/// and complex roots are at least this far from the real axis.
pub const ROOT_SEPARATION: f64 = 0.5;

/// An arbitrary float in `[lo, hi]`.
///
/// # Errors
///
/// Fails if the input runs out.
pub fn float_in_range(
    u: &mut Unstructured<'_>,
    lo: f64,
    hi: f64,
) -> Result<f64, arbitrary::Error> {
    let frac = f64::from(u.arbitrary::<u32>()?) / f64::from(u32::MAX);
    Ok(lo + (hi - lo) * frac)
}

/// A polynomial whose roots are known.
///
/// `N` is the number of coefficients and must be between 2 and 5. The roots
/// are well separated (see [`ROOT_SEPARATION`]), except that if
/// `allow_repeats` is true a real root may be repeated exactly. Non-real roots
/// always come in conjugate pairs, so the coefficients are real.
///
/// Returns the polynomial together with its roots (in no particular order).
///
/// # Errors
///
/// Fails if the input runs out, or if it would put two roots too close
/// together.
///
/// # Panics
///
/// Panics if `N` is outside `2..=5`.
pub fn planted_poly<const N: usize>(
    u: &mut Unstructured<'_>,
    allow_repeats: bool,
) -> Result<(Poly<f64, N>, ArrayVec<Complex<f64>, 4>), arbitrary::Error> {
    assert!((2..=5).contains(&N), "unsupported coefficient count {N}");

    let mut coeffs = [0.0; N];
    coeffs[0] = 1.0;
    let mut roots = ArrayVec::<Complex<f64>, 4>::new();

    while roots.len() < N - 1 {
        let last_real = roots.last().filter(|r| r.im == 0.0).map(|r| r.re);
        if let Some(re) = last_real {
            if allow_repeats && u.ratio(1, 3)? {
                mul_linear(&mut coeffs, roots.len(), re);
                roots.push(Complex::from(re));
                continue;
            }
        }

        let re = float_in_range(u, -ROOT_BOUND, ROOT_BOUND)?;
        let pair = roots.len() + 2 < N && u.arbitrary::<bool>()?;
        let root = if pair {
            Complex::new(re, float_in_range(u, ROOT_SEPARATION, ROOT_BOUND)?)
        } else {
            Complex::from(re)
        };
        let too_close = |z: Complex<f64>| roots.iter().any(|r| (r - z).norm() < ROOT_SEPARATION);
        if too_close(root) || too_close(root.conj()) {
            return Err(arbitrary::Error::IncorrectFormat);
        }

        if pair {
            mul_quadratic(&mut coeffs, roots.len(), -2.0 * re, root.norm_sqr());
            roots.push(root);
            roots.push(root.conj());
        } else {
            mul_linear(&mut coeffs, roots.len(), re);
            roots.push(root);
        }
    }

    let scale = float_in_range(u, 0.5, 4.0)?;
    let scale = if u.arbitrary()? { scale } else { -scale };
    Ok((Poly::new(coeffs) * scale, roots))
}

// Multiplies the degree-`deg` polynomial in `coeffs` (leading coefficient
// first) by `x - root`.
fn mul_linear<const N: usize>(coeffs: &mut [f64; N], deg: usize, root: f64) {
    for i in (1..=deg + 1).rev() {
        coeffs[i] -= root * coeffs[i - 1];
    }
}

// Multiplies the degree-`deg` polynomial in `coeffs` (leading coefficient
// first) by `x² + b x + c`.
fn mul_quadratic<const N: usize>(coeffs: &mut [f64; N], deg: usize, b: f64, c: f64) {
    for i in (1..=deg + 2).rev() {
        coeffs[i] += b * coeffs[i - 1];
        if i >= 2 {
            coeffs[i] += c * coeffs[i - 2];
        }
    }
}

/// Converts a polynomial to single precision.
///
/// # Errors
///
/// Fails if some coefficient doesn't fit in an `f32`.
pub fn to_f32<const N: usize>(p: &Poly<f64, N>) -> Result<Poly<f32, N>, arbitrary::Error> {
    let mut coeffs = [0.0_f32; N];
    for (c, d) in coeffs.iter_mut().zip(p.coeffs()) {
        *c = f32::lit(*d);
        if !c.is_finite() {
            return Err(arbitrary::Error::IncorrectFormat);
        }
    }
    Ok(Poly::new(coeffs))
}
