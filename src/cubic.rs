// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use num_complex::Complex;
use num_traits::Zero;

use crate::{solve_quadratic, Real};

/// Returns the roots of the depressed cubic `x³ + p x + q = 0`, using
/// Cardano's formula.
///
/// With `D = (q/2)² + (p/3)³` (note the sign convention, opposite to the
/// quadratic discriminant):
///
/// - if `|D|` is negligible compared to its two terms (see
///   [`Real::CUBIC_TOLERANCE`]), the roots are real and at least two of them
///   coincide: `-2∛(q/2)` first, then `∛(q/2)` twice;
/// - if `D > 0`, there's one real root (first) and a conjugate pair;
/// - if `D < 0`, there are three distinct real roots. These come from Viète's
///   trigonometric form, which avoids taking cube roots of complex numbers.
///
/// In every branch the first root is real.
pub fn solve_depressed_cubic<T: Real>(p: T, q: T) -> [Complex<T>; 3] {
    let p_3 = p / T::lit(3.0);
    let q_2 = q / T::lit(2.0);
    let q_2_sq = q_2 * q_2;
    let p_3_cubed = p_3 * p_3 * p_3;
    let disc = q_2_sq + p_3_cubed;

    // Both terms scale like the sixth power of the roots.
    if disc.abs() <= T::CUBIC_TOLERANCE * q_2_sq.max(p_3_cubed.abs()) {
        let u = q_2.cbrt();
        let double = Complex::from(u);
        [Complex::from(T::lit(-2.0) * u), double, double]
    } else if disc > T::zero() {
        let sqrt_disc = disc.sqrt();
        let u = (-q_2 + sqrt_disc).cbrt();
        let v = (-q_2 - sqrt_disc).cbrt();
        let x1 = u + v;
        let re = T::lit(-0.5) * x1;
        let im = T::lit(3.0).sqrt() * (u - v) * T::lit(0.5);
        [Complex::from(x1), Complex::new(re, im), Complex::new(re, -im)]
    } else {
        let r = T::lit(2.0) * (-p_3).sqrt();
        // arg(-q/2 + i √-D) / 3
        let theta = (-disc).sqrt().atan2(-q_2) / T::lit(3.0);
        let step = T::lit(2.0) * T::FRAC_PI_3();
        [
            Complex::from(r * theta.cos()),
            Complex::from(r * (theta + step).cos()),
            Complex::from(r * (theta + step + step).cos()),
        ]
    }
}

/// Returns the roots of the monic cubic `x³ + a x² + b x + c = 0`.
///
/// Substituting `x = y - a/3` removes the quadratic term; the roots of the
/// resulting depressed cubic are shifted back, keeping their order.
pub fn solve_monic_cubic<T: Real>(a: T, b: T, c: T) -> [Complex<T>; 3] {
    let shift = a / T::lit(3.0);
    let p = b - shift * a;
    let shift_cubed = shift * shift * shift;
    let q = shift_cubed + shift_cubed - shift * b + c;
    solve_depressed_cubic(p, q).map(|y| y - shift)
}

/// Returns the roots of `a x³ + b x² + c x + d = 0`.
///
/// If `a` is zero, this solves the quadratic `b x² + c x + d = 0` instead and
/// the third slot is zero.
pub fn solve_cubic<T: Real>(a: T, b: T, c: T, d: T) -> [Complex<T>; 3] {
    if a.is_zero() {
        log::trace!("cubic has zero leading coefficient, solving as quadratic");
        let [x1, x2] = solve_quadratic(b, c, d);
        return [x1, x2, Complex::zero()];
    }
    solve_monic_cubic(b / a, c / a, d / a)
}
