// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

// These parameters should rarely need adjustment.

//! # **Configuration Constants** - *Numerical Behaviour Parameters*
//!
//! Compile-time constants bounding every iterative routine in the crate. Series, continued
//! fractions, quantile refinement, pmf summations and tail quadratures all stop at these caps,
//! so no call can loop unbounded. When a cap is reached the routine logs a `warn!` through the
//! `log` facade and returns its best estimate.

/// Maximum series terms or continued-fraction steps in the incomplete gamma and beta evaluators.
///
/// Near x ≈ a the series and continued fractions need on the order of √a steps, which would
/// reach this cap around a ≈ 10^7. Large shapes near the mode are therefore routed to
/// asymptotic expansions with a fixed term count, and the iterative forms only run where they
/// converge in a few hundred steps at most.
pub const SPECIAL_FUNCTION_MAX_ITER: usize = 10_000;

/// Relative size of the last series term (or continued-fraction correction) at which the
/// special-function evaluators stop.
pub const SPECIAL_FUNCTION_EPS: f64 = f64::EPSILON;

/// Replacement for vanishing denominators in the modified Lentz algorithm.
pub const LENTZ_TINY: f64 = 1e-300;

/// Maximum refinement steps for the continuous quantile solver.
///
/// Bisection runs on the ordered bit pattern of `f64`, so any bracket collapses to adjacent
/// doubles within 64 halvings. The remainder is headroom for rejected Newton steps.
pub const SOLVER_MAX_ITER: usize = 200;

/// Maximum outward doublings when growing a bracket toward an infinite support bound.
pub const SOLVER_MAX_BRACKET_STEPS: usize = 1_100;

/// Relative x-tolerance at which continuous quantile refinement stops.
pub const SOLVER_REL_TOL: f64 = 4.0 * f64::EPSILON;

/// Absolute x-tolerance at which continuous quantile refinement stops.
pub const SOLVER_ABS_TOL: f64 = f64::MIN_POSITIVE;

/// Largest integer represented exactly by `f64` (2^53). Discrete quantile searches over an
/// unbounded support never search past this point.
pub const DISCRETE_SEARCH_CEILING: f64 = 9_007_199_254_740_992.0;

/// Maximum pmf terms summed by distributions whose CDF is a finite sum without a special-function
/// identity (hypergeometric, beta-binomial, logarithmic).
///
/// Callers keep walks far below this: long tails are handed to quadrature or Euler–Maclaurin
/// forms first, so the cap is a backstop rather than a working limit.
pub const SUMMATION_MAX_TERMS: usize = 10_000_000;

/// Longest run of masses a beta-binomial tail is summed over term by term. Longer tails are
/// integrated as a Beta mixture of binomial CDFs instead.
pub const DIRECT_SUM_MAX_TERMS: usize = 100_000;

/// Standard deviation from which a hypergeometric tail is integrated over the continuous
/// extension of its pmf rather than walked lattice point by lattice point.
pub const LATTICE_CONTINUUM_MIN_SD: f64 = 1e4;

/// Maximum Gauss–Legendre panels marched outward in one direction by the tail quadratures.
pub const QUADRATURE_MAX_PANELS: usize = 4_096;

/// Accuracy callers may assume from every density, probability and survival evaluation.
///
/// Results are relative to the value (absolute below 1e-300). Typical errors are a small
/// multiple of machine epsilon; the floor bounds the worst case, including the far tails of
/// the quadrature-backed discrete CDFs. A result that breaches it is preceded by a `warn!`.
pub const ACCURACY_FLOOR: f64 = 1e-10;
