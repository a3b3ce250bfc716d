// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use num_complex::Complex;
use num_traits::{One, Zero};

use crate::{
    solve_cubic, solve_depressed_cubic, solve_monic_cubic, solve_quadratic,
    solve_quadratic_complex, Real,
};

/// Returns the roots of the biquadratic `a x⁴ + c x² + e = 0`.
///
/// This solves the quadratic in `x²` and takes both square roots of each of
/// its roots `y₁, y₂`. If those are real the output is `[√y₁, -√y₁, √y₂, -√y₂]`.
/// Otherwise they are conjugates, as are their square roots, and the
/// output is `[√y₁, √y₂, -√y₁, -√y₂]` to keep conjugate roots adjacent.
pub fn solve_biquadratic<T: Real>(a: T, c: T, e: T) -> [Complex<T>; 4] {
    let [y1, y2] = solve_quadratic(a, c, e);
    let (s1, s2) = (y1.sqrt(), y2.sqrt());
    if y1.im.is_zero() {
        [s1, -s1, s2, -s2]
    } else {
        [s1, s2, -s1, -s2]
    }
}

/// Returns the roots of the depressed quartic `x⁴ + p x² + q x + r = 0`.
///
/// There are two fast paths: if `q` is zero this is a biquadratic, and if `r`
/// is zero then `x` factors out, leaving a depressed cubic (the fourth slot
/// is then the zero root).
///
/// Otherwise we use Ferrari's method. For any root `t` of the resolvent cubic
///
/// ```text
/// t³ - (p/2) t² - r t + (p r / 2 - q² / 8) = 0
/// ```
///
/// the quartic factors as `(x² + m x + t + n) (x² - m x + t - n)`, where
/// `m = √(2t - p)` and `n = -q m / (2 (2t - p))`. (Equivalently, `n` is the
/// square root of `t² - r` with the sign of `-q`.) The first pair of roots
/// comes from the first factor. If `2t - p` is negative then `m` and `n` are
/// imaginary and the factors are solved with [`solve_quadratic_complex`].
/// The two factors are then conjugate to each other, and their roots are
/// interleaved so that conjugate roots stay adjacent.
///
/// The factorization breaks down when `2t - p` vanishes. In that case we try
/// the other real roots of the resolvent, and if none of them work then `q`
/// must be negligible, and we treat the quartic as biquadratic.
pub fn solve_depressed_quartic<T: Real>(p: T, q: T, r: T) -> [Complex<T>; 4] {
    if q.is_zero() {
        return solve_biquadratic(T::one(), p, r);
    }
    if r.is_zero() {
        let [x1, x2, x3] = solve_depressed_cubic(p, q);
        return [x1, x2, x3, Complex::zero()];
    }

    match resolvent_root(p, q, r) {
        Some(t) => factor_at(p, q, r, t),
        None => {
            log::debug!("no usable resolvent root for p={p:?} q={q:?} r={r:?}, dropping q");
            solve_biquadratic(T::one(), p, r)
        }
    }
}

/// Finds a real root `t` of the resolvent cubic for which `2t - p` is
/// safely non-zero.
///
/// The first root from the cubic solver is always real, and it's the one we
/// use unless it's singular. Then we fall back to whichever real root is
/// furthest from singular.
fn resolvent_root<T: Real>(p: T, q: T, r: T) -> Option<T> {
    let half_p = T::lit(0.5) * p;
    let roots = solve_monic_cubic(-half_p, -r, half_p * r - T::lit(0.125) * q * q);

    let usable = |t: T| {
        let scale = p.abs().max(t.abs()).max(T::one());
        (t + t - p).abs() > T::lit(4.0) * T::epsilon() * scale
    };
    let first = roots[0].re;
    if usable(first) {
        return Some(first);
    }

    let mut best: Option<T> = None;
    for t in roots.iter().filter(|t| t.im.is_zero()).map(|t| t.re) {
        let better = match best {
            Some(b) => (t + t - p).abs() > (b + b - p).abs(),
            None => true,
        };
        if usable(t) && better {
            best = Some(t);
        }
    }
    if let Some(t) = best {
        log::debug!("resolvent root {first:?} is singular for p={p:?}, using {t:?}");
    }
    best
}

/// Splits the depressed quartic into two quadratics, given a real root `t`
/// of its resolvent cubic with `2t - p` non-zero.
fn factor_at<T: Real>(p: T, q: T, r: T, t: T) -> [Complex<T>; 4] {
    let t2_minus_p = t + t - p;
    if t2_minus_p >= T::zero() {
        let m = t2_minus_p.sqrt();
        // Also n² = t² - r. Use that when m is small compared to t.
        let n_sq = t * t - r;
        let n = if n_sq > t.abs() * t2_minus_p {
            n_sq.sqrt().copysign(-q)
        } else {
            -q * m / (T::lit(2.0) * t2_minus_p)
        };
        let [x1, x2] = solve_quadratic(T::one(), m, t + n);
        let [x3, x4] = solve_quadratic(T::one(), -m, t - n);
        [x1, x2, x3, x4]
    } else {
        let m = Complex::new(T::zero(), (-t2_minus_p).sqrt());
        let n = m * (-q / (T::lit(2.0) * t2_minus_p));
        let (one, t_c) = (Complex::one(), Complex::from(t));
        let [x1, x2] = solve_quadratic_complex(one, m, t_c + n);
        let [x3, x4] = solve_quadratic_complex(one, -m, t_c - n);
        [x1, x3, x2, x4]
    }
}

/// Returns the roots of the monic quartic `x⁴ + a x³ + b x² + c x + d = 0`.
///
/// Substituting `x = y - a/4` removes the cubic term; the roots of the
/// resulting depressed quartic are shifted back, keeping their order.
pub fn solve_monic_quartic<T: Real>(a: T, b: T, c: T, d: T) -> [Complex<T>; 4] {
    let s = a / T::lit(4.0);
    let s2 = s * s;
    let s3 = s * s2;

    let p = T::lit(-6.0) * s2 + b;
    let q = T::lit(2.0) * (T::lit(4.0) * s3 - b * s) + c;
    let r = (T::lit(-3.0) * s3 - c) * s + b * s2 + d;
    solve_depressed_quartic(p, q, r).map(|y| y - s)
}

/// Returns the roots of `a x⁴ + b x³ + c x² + d x + e = 0`.
///
/// If `a` is zero, this solves the cubic `b x³ + c x² + d x + e = 0` instead
/// and the fourth slot is zero. If only even powers are present, this goes
/// straight to [`solve_biquadratic`].
pub fn solve_quartic<T: Real>(a: T, b: T, c: T, d: T, e: T) -> [Complex<T>; 4] {
    if a.is_zero() {
        log::trace!("quartic has zero leading coefficient, solving as cubic");
        let [x1, x2, x3] = solve_cubic(b, c, d, e);
        return [x1, x2, x3, Complex::zero()];
    }
    if b.is_zero() && d.is_zero() {
        log::trace!("quartic has only even powers, solving as biquadratic");
        return solve_biquadratic(a, c, e);
    }
    solve_monic_quartic(b / a, c / a, d / a, e / a)
}
