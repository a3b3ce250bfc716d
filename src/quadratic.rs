// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use num_complex::Complex;
use num_traits::Zero;

use crate::{different_signs, solve_linear, Real};

/// Returns both roots of `a x² + b x + c = 0`.
///
/// If `a` is zero, this solves the linear equation `b x + c = 0` instead and
/// the second slot is zero.
///
/// When the discriminant is within [`Real::QUADRATIC_TOLERANCE`] of zero we
/// return a double root. When it is negative we return a conjugate pair, with
/// the positive imaginary part (for positive `a`) first.
///
/// Otherwise the roots are real and distinct, and `(-b + √D) / 2a` comes
/// first. Only the larger root is computed from `-b - sign(b) √D`, which
/// never subtracts nearly equal numbers, and the other is recovered from the
/// product of the roots. So the result is accurate even when `b²` dwarfs
/// `4ac`. See <https://math.stackexchange.com/questions/866331>.
pub fn solve_quadratic<T: Real>(a: T, b: T, c: T) -> [Complex<T>; 2] {
    if a.is_zero() {
        log::trace!("quadratic has zero leading coefficient, solving as linear");
        let [x] = solve_linear(b, c);
        return [x, Complex::zero()];
    }

    let two_a = a + a;
    let disc = b * b - T::lit(4.0) * a * c;
    if disc.abs() < T::QUADRATIC_TOLERANCE {
        let root = Complex::from(-b / two_a);
        [root, root]
    } else if disc < T::zero() {
        let re = -b / two_a;
        let im = (-disc).sqrt() / two_a;
        [Complex::new(re, im), Complex::new(re, -im)]
    } else {
        let t = -b - disc.sqrt().copysign(b);
        let (large, small) = (Complex::from(t / two_a), Complex::from((c + c) / t));
        // `t` is `-b + √D` exactly when `b` is negative.
        if b.is_sign_negative() {
            [large, small]
        } else {
            [small, large]
        }
    }
}

/// Returns both roots of `a x² + b x + c = 0` for complex coefficients.
///
/// This is the same algorithm as [`solve_quadratic`], except that "the sign
/// of `b`" isn't a thing any more. Instead we compare the real and imaginary
/// parts of `b` and `√D` separately: if both parts agree in sign, `-b - √D`
/// is the numerically large one; if both disagree, `-b + √D` is. A zero part
/// agrees with anything. In the mixed case we can't tell cheaply which
/// combination cancels, so we give up on cancellation avoidance and use the
/// symmetric formula.
///
/// As for real coefficients, `(-b + √D) / 2a` comes first.
///
/// Unlike the real case, there's no conjugate-pair structure in the output.
pub fn solve_quadratic_complex<T: Real>(
    a: Complex<T>,
    b: Complex<T>,
    c: Complex<T>,
) -> [Complex<T>; 2] {
    if a.is_zero() {
        log::trace!("complex quadratic has zero leading coefficient, solving as linear");
        return [-c / b, Complex::zero()];
    }

    let two_a = a + a;
    let disc = b * b - a * c * T::lit(4.0);
    if disc.norm() < T::QUADRATIC_TOLERANCE {
        let root = -b / two_a;
        return [root, root];
    }

    let sqrt_disc = disc.sqrt();
    match signs_agree(b, sqrt_disc) {
        Some(true) => {
            let t = -b - sqrt_disc;
            [(c + c) / t, t / two_a]
        }
        Some(false) => {
            let t = -b + sqrt_disc;
            [t / two_a, (c + c) / t]
        }
        None => [(-b + sqrt_disc) / two_a, (-b - sqrt_disc) / two_a],
    }
}

/// Whether `x` and `y` point the same way, part by part.
///
/// Returns `None` if the parts contradict each other, or if every comparison
/// involved a zero.
fn signs_agree<T: Real>(x: Complex<T>, y: Complex<T>) -> Option<bool> {
    let part = |u: T, v: T| {
        if u.is_zero() || v.is_zero() {
            None
        } else {
            Some(!different_signs(u, v))
        }
    };
    match (part(x.re, y.re), part(x.im, y.im)) {
        (Some(re), Some(im)) if re == im => Some(re),
        (Some(agree), None) | (None, Some(agree)) => Some(agree),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(z: Complex<f64>, re: f64, im: f64, tol: f64) {
        assert!(
            (z.re - re).abs() <= tol && (z.im - im).abs() <= tol,
            "{z} is not within {tol} of {re} + {im}i"
        );
    }

    fn eval(coeffs: [Complex<f64>; 3], x: Complex<f64>) -> Complex<f64> {
        coeffs.iter().fold(Complex::zero(), |acc, &c| acc * x + c)
    }

    #[test]
    fn double_root() {
        let roots = solve_quadratic(1.0, 6.0, 9.0);
        assert_eq!(roots, [Complex::from(-3.0); 2]);

        let roots = solve_quadratic(1.0_f32, 6.0, 9.0);
        assert_eq!(roots, [Complex::from(-3.0_f32); 2]);
    }

    #[test]
    fn conjugate_pair() {
        let [x1, x2] = solve_quadratic(1.0, 2.0, 5.0);
        assert_close(x1, -1.0, 2.0, 1e-15);
        assert_close(x2, -1.0, -2.0, 1e-15);
    }

    #[test]
    fn distinct_real_roots_keep_their_order() {
        // (-b + √D) / 2a first, whatever the sign of b.
        let [x1, x2] = solve_quadratic(1.0, -5.0, 4.0);
        assert_eq!((x1, x2), (Complex::from(4.0), Complex::from(1.0)));

        let [x1, x2] = solve_quadratic(1.0, 5.0, 4.0);
        assert_eq!((x1, x2), (Complex::from(-1.0), Complex::from(-4.0)));

        let [x1, x2] = solve_quadratic(3.0, 14.0, 15.0);
        assert_close(x1, -5.0 / 3.0, 0.0, 1e-15);
        assert_close(x2, -3.0, 0.0, 1e-15);

        let [x1, x2] = solve_quadratic(1.0, 0.0, -4.0);
        assert_eq!((x1, x2), (Complex::from(2.0), Complex::from(-2.0)));
    }

    #[test]
    fn no_cancellation_in_small_root() {
        // The textbook formula loses about half the digits of the small root.
        let [x1, x2] = solve_quadratic(1.0, -1e8, 1.0);
        assert_close(x1, 1e8, 0.0, 1e-7);
        assert!((x2.re - 1e-8).abs() <= 1e-22, "{x2}");
        assert_eq!(x2.im, 0.0);
    }

    #[test]
    fn zero_leading_coefficient() {
        assert_eq!(
            solve_quadratic(0.0, 2.0, -4.0),
            [Complex::from(2.0), Complex::zero()]
        );
        assert_eq!(
            solve_quadratic_complex(Complex::zero(), Complex::from(2.0), Complex::new(-4.0, 2.0)),
            [Complex::new(2.0, -1.0), Complex::zero()]
        );
    }

    #[test]
    fn complex_coefficients() {
        // (x - (1 + 2i)) (x - (3 - i))
        let coeffs = [
            Complex::from(1.0),
            Complex::new(-4.0, -1.0),
            Complex::new(5.0, 5.0),
        ];
        let [x1, x2] = solve_quadratic_complex(coeffs[0], coeffs[1], coeffs[2]);
        for x in [x1, x2] {
            assert!(eval(coeffs, x).norm() <= 1e-12);
        }
        let (lo, hi) = if x1.re < x2.re { (x1, x2) } else { (x2, x1) };
        assert_close(lo, 1.0, 2.0, 1e-12);
        assert_close(hi, 3.0, -1.0, 1e-12);
    }

    #[test]
    fn complex_with_real_coefficients() {
        let [x1, x2] = solve_quadratic_complex(
            Complex::from(1.0),
            Complex::from(-5.0),
            Complex::from(4.0),
        );
        assert_close(x1, 4.0, 0.0, 1e-15);
        assert_close(x2, 1.0, 0.0, 1e-15);

        let [x1, x2] = solve_quadratic_complex(
            Complex::from(1.0),
            Complex::from(5.0),
            Complex::from(4.0),
        );
        assert_close(x1, -1.0, 0.0, 1e-15);
        assert_close(x2, -4.0, 0.0, 1e-15);
    }

    #[test]
    fn complex_double_root() {
        // (x - i)²
        let roots = solve_quadratic_complex(
            Complex::from(1.0),
            Complex::new(0.0, -2.0),
            Complex::from(-1.0),
        );
        assert_eq!(roots, [Complex::i(); 2]);
    }

    #[test]
    fn complex_small_root_survives() {
        let b = Complex::new(1e8, 1e8);
        let [x1, x2] = solve_quadratic_complex(Complex::from(1.0), b, Complex::from(1.0));
        let expected = -Complex::from(1.0) / b;
        assert!((x1 - expected).norm() <= 1e-14 * expected.norm(), "{x1}");
        assert!((x2 + b).norm() <= 1e-14 * b.norm(), "{x2}");
    }

    #[test]
    fn sign_agreement() {
        let z = |re, im| Complex::new(re, im);
        assert_eq!(signs_agree(z(1.0, 2.0), z(3.0, 4.0)), Some(true));
        assert_eq!(signs_agree(z(1.0, 2.0), z(-3.0, -4.0)), Some(false));
        assert_eq!(signs_agree(z(1.0, -2.0), z(3.0, 4.0)), None);
        assert_eq!(signs_agree(z(0.0, -2.0), z(3.0, -4.0)), Some(true));
        assert_eq!(signs_agree(z(0.0, 0.0), z(3.0, -4.0)), None);
    }
}
