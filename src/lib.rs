// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed-form roots of polynomials of degree one through four.
//!
//! Every solver takes the coefficients of the polynomial (leading coefficient
//! first) and returns all of its roots as complex numbers, in a fixed-size
//! array whose length is the degree:
//!
//! - [`solve_linear`] for `a x + b`,
//! - [`solve_quadratic`] (and [`solve_quadratic_complex`] for complex
//!   coefficients) for `a x² + b x + c`,
//! - [`solve_cubic`] for `a x³ + b x² + c x + d`, using Cardano's formula,
//! - [`solve_quartic`] for `a x⁴ + b x³ + c x² + d x + e`, using Ferrari's
//!   method.
//!
//! The cubic and quartic solvers also have depressed and monic entry points,
//! and [`solve_nth_degree`] picks the solver from the number of
//! coefficients. [`Poly`] wraps up a fixed-degree polynomial.
//!
//! Nothing here is iterative: the roots are computed directly from the
//! formulas, with some care taken to avoid catastrophic cancellation. Real
//! roots have an imaginary part of exactly zero, and for real coefficients
//! the non-real roots come out as adjacent conjugate pairs.
//!
//! ```
//! use polysolve::solve_cubic;
//!
//! // 2x³ - 3x² - 5x + 6 = (x - 2)(2x + 3)(x - 1)
//! let roots = solve_cubic(2.0_f64, -3.0, -5.0, 6.0);
//! for (root, expected) in roots.iter().zip([2.0, -1.5, 1.0]) {
//!     assert!((root.re - expected).abs() < 1e-12);
//!     assert_eq!(root.im, 0.0);
//! }
//! ```
//!
//! # Degenerate input
//!
//! A zero leading coefficient isn't an error: the solvers fall back to the
//! next lower degree and put a zero in the last slot, so the number of roots
//! is always the nominal degree. Discriminants that are very close to zero
//! are treated as zero (see [`Real`] for the tolerances), giving exactly
//! repeated roots. Non-finite coefficients give non-finite roots.
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments.
//!
//! The `serde` feature adds serialization for [`Degree`], [`SolveError`] and
//! (through `num-complex`) the roots. The `arbitrary` feature exposes the
//! generators we use for property testing.
//!
//! [`libm`]: https://docs.rs/libm

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("polysolve requires either the `std` or `libm` feature");

mod cubic;
mod dispatch;
mod error;
mod linear;
mod poly;
mod quadratic;
mod quartic;
mod real;

#[cfg(any(test, feature = "arbitrary"))]
pub mod arbitrary;

pub use cubic::{solve_cubic, solve_depressed_cubic, solve_monic_cubic};
pub use dispatch::{solve_nth_degree, Degree, Roots};
pub use error::SolveError;
pub use linear::solve_linear;
pub use poly::{Cubic, Linear, Poly, Quadratic, Quartic};
pub use quadratic::{solve_quadratic, solve_quadratic_complex};
pub use quartic::{solve_biquadratic, solve_depressed_quartic, solve_monic_quartic, solve_quartic};
pub use real::Real;

// Re-exported so that callers can name the root type without depending on
// `num-complex` themselves.
pub use num_complex::Complex;

fn different_signs<T: Real>(x: T, y: T) -> bool {
    (x < T::zero()) != (y < T::zero())
}
