// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Quantile Solver Module** - *Generic Inversion of Monotone CDFs*
//!
//! Root-finding used by every distribution whose quantile has no closed form. The solver
//! works against plain closures, so a distribution supplies its CDF, survival function and
//! density as values rather than implementing a trait.
//!
//! ## Continuous supports
//! A bracket is grown outward from the initial guess by doubling toward any infinite bound
//! (finite bounds are used as-is), then refined by safeguarded Newton steps with a bisection
//! fallback. Bisection splits the bracket on the *ordered integer image* of the `f64` bit
//! pattern, so a bracket spanning many orders of magnitude, e.g. `[1e-300, 1e300]`, still
//! collapses to adjacent doubles within 64 halvings. The stopping rule is on x, not on F(x).
//!
//! ## Discrete supports
//! The quantile is the smallest support point k with F(k) ≥ p. It is found with an
//! exponential search outward from the guess followed by a binary search, so unbounded
//! supports terminate in O(log k) CDF evaluations.
//!
//! ## Tail precision
//! [`invert_continuous`] and [`invert_discrete`] compare against the CDF when p ≤ ½ and
//! against the survival function when p > ½, so quantiles close to 1 are located on the
//! accurately-computed tail.

use log::warn;

use crate::config::{
    DISCRETE_SEARCH_CEILING, SOLVER_ABS_TOL, SOLVER_MAX_BRACKET_STEPS, SOLVER_MAX_ITER,
    SOLVER_REL_TOL,
};

/// Outcome of a quantile search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Root {
    /// The located argument (best estimate when `converged` is false).
    pub x: f64,
    /// Residual or predicate evaluations spent.
    pub iterations: usize,
    /// False when an iteration cap or the discrete search ceiling was reached.
    pub converged: bool,
}

/// Maps a double onto a signed integer preserving order, with −0.0 and +0.0 both at 0.
#[inline(always)]
fn ordinal(x: f64) -> i64 {
    let bits = x.to_bits() as i64;
    if bits < 0 { i64::MIN - bits } else { bits }
}

#[inline(always)]
fn from_ordinal(o: i64) -> f64 {
    if o < 0 {
        f64::from_bits((i64::MIN - o) as u64)
    } else {
        f64::from_bits(o as u64)
    }
}

/// Midpoint of `[a, b]` in representation space.
#[inline(always)]
fn ordinal_midpoint(a: f64, b: f64) -> f64 {
    let mid = (ordinal(a) as i128 + ordinal(b) as i128) / 2;
    from_ordinal(mid as i64)
}

#[inline(always)]
fn resolved(a: f64, b: f64) -> bool {
    b - a <= SOLVER_REL_TOL * a.abs().max(b.abs()) + SOLVER_ABS_TOL
        || ordinal(b) - ordinal(a) <= 1
}

/// Finds the zero crossing of a non-decreasing `residual` on `[lower, upper]`.
///
/// `slope` is the derivative of `residual` (the density, for CDF inversion); return NaN or 0
/// where it is unavailable and the step falls back to bisection. Infinite bounds are allowed.
/// When the residual is still negative at the largest representable point the result is
/// `upper` (and symmetrically `lower`).
pub fn solve_continuous<R, S>(residual: R, slope: S, lower: f64, upper: f64, guess: f64) -> Root
where
    R: Fn(f64) -> f64,
    S: Fn(f64) -> f64,
{
    let lo_bound = lower.max(-f64::MAX);
    let hi_bound = upper.min(f64::MAX);

    let x = if guess.is_finite() {
        guess.max(lo_bound).min(hi_bound)
    } else {
        ordinal_midpoint(lo_bound, hi_bound)
    };
    let fx = residual(x);
    let mut evals = 1;

    if fx == 0.0 {
        return Root { x, iterations: evals, converged: true };
    }
    if fx.is_nan() {
        warn!("solve_continuous: residual is NaN at x={x}");
        return Root { x: f64::NAN, iterations: evals, converged: false };
    }

    // Bracket [a, b] with residual(a) < 0 ≤ residual(b).
    let (mut a, mut b) = (lo_bound, hi_bound);
    let (mut fa, mut fb) = (f64::NEG_INFINITY, f64::INFINITY);
    if fx < 0.0 {
        a = x;
        fa = fx;
        if upper.is_infinite() {
            let mut step = x.abs().max(1.0);
            let mut found = false;
            for _ in 0..SOLVER_MAX_BRACKET_STEPS {
                let cand = (a + step).min(hi_bound);
                let fc = residual(cand);
                evals += 1;
                if fc >= 0.0 {
                    b = cand;
                    fb = fc;
                    found = true;
                    break;
                }
                a = cand;
                fa = fc;
                if cand == hi_bound {
                    return Root { x: upper, iterations: evals, converged: true };
                }
                step *= 2.0;
            }
            if !found {
                warn!("solve_continuous: no upper bracket found above x={a}");
                return Root { x: a, iterations: evals, converged: false };
            }
        }
    } else {
        b = x;
        fb = fx;
        if lower.is_infinite() {
            let mut step = x.abs().max(1.0);
            let mut found = false;
            for _ in 0..SOLVER_MAX_BRACKET_STEPS {
                let cand = (b - step).max(lo_bound);
                let fc = residual(cand);
                evals += 1;
                if fc < 0.0 {
                    a = cand;
                    fa = fc;
                    found = true;
                    break;
                }
                b = cand;
                fb = fc;
                if cand == lo_bound {
                    return Root { x: lower, iterations: evals, converged: true };
                }
                step *= 2.0;
            }
            if !found {
                warn!("solve_continuous: no lower bracket found below x={b}");
                return Root { x: b, iterations: evals, converged: false };
            }
        }
    }

    let best = |a: f64, fa: f64, b: f64, fb: f64| if fa.abs() < fb.abs() { a } else { b };

    // Safeguarded Newton (rtsafe style) on the bracket.
    let mut x_last = if fx < 0.0 { a } else { b };
    let mut f_last = if fx < 0.0 { fa } else { fb };
    let mut dx_old = f64::INFINITY;
    let mut dx = f64::INFINITY;
    for _ in 0..SOLVER_MAX_ITER {
        if resolved(a, b) {
            return Root { x: best(a, fa, b, fb), iterations: evals, converged: true };
        }
        let d = slope(x_last);
        let newton = if d > 0.0 && d.is_finite() { x_last - f_last / d } else { f64::NAN };
        let use_newton = newton > a && newton < b && (2.0 * (newton - x_last)).abs() <= dx_old.abs();

        dx_old = dx;
        let next = if use_newton { newton } else { ordinal_midpoint(a, b) };
        dx = next - x_last;
        if next <= a || next >= b {
            return Root { x: best(a, fa, b, fb), iterations: evals, converged: true };
        }

        let fn_ = residual(next);
        evals += 1;
        if fn_ == 0.0 {
            return Root { x: next, iterations: evals, converged: true };
        }
        if fn_.is_nan() {
            warn!("solve_continuous: residual is NaN at x={next}");
            return Root { x: best(a, fa, b, fb), iterations: evals, converged: false };
        }
        if fn_ < 0.0 {
            a = next;
            fa = fn_;
        } else {
            b = next;
            fb = fn_;
        }
        x_last = next;
        f_last = fn_;

        if use_newton && dx.abs() <= SOLVER_REL_TOL * next.abs() + SOLVER_ABS_TOL {
            return Root { x: next, iterations: evals, converged: true };
        }
    }

    warn!(
        "solve_continuous: no convergence after {SOLVER_MAX_ITER} refinements, bracket [{a}, {b}]"
    );
    Root { x: best(a, fa, b, fb), iterations: evals, converged: false }
}

/// Smallest integer k in `[lower, upper]` for which the monotone predicate `reached(k)` holds.
///
/// `lower` must be a finite integer; `upper` may be `+∞`, in which case the search stops at
/// 2⁵³. If the predicate never holds the result is `upper` for a finite support, or the
/// ceiling with `converged = false` for an unbounded one.
pub fn solve_discrete<P>(reached: P, lower: f64, upper: f64, guess: f64) -> Root
where
    P: Fn(f64) -> bool,
{
    let top = upper.min(DISCRETE_SEARCH_CEILING);
    let start = if guess.is_nan() { lower } else { guess.floor().max(lower).min(top) };
    let mut evals = 1;

    let (mut lo, mut hi) = if reached(start) {
        // walk down until the predicate fails
        let mut hi = start;
        let mut step = 1.0;
        loop {
            if hi <= lower {
                return Root { x: lower, iterations: evals, converged: true };
            }
            let cand = (hi - step).max(lower);
            evals += 1;
            if reached(cand) {
                hi = cand;
                step *= 2.0;
            } else {
                break (cand, hi);
            }
        }
    } else {
        // walk up until the predicate holds
        let mut lo = start;
        let mut step = 1.0;
        loop {
            if lo >= top {
                if upper.is_finite() {
                    return Root { x: upper, iterations: evals, converged: true };
                }
                warn!("solve_discrete: quantile lies beyond 2^53");
                return Root { x: top, iterations: evals, converged: false };
            }
            let cand = (lo + step).min(top);
            evals += 1;
            if reached(cand) {
                break (lo, cand);
            }
            lo = cand;
            step *= 2.0;
        }
    };

    // reached(hi) holds, reached(lo) does not.
    while hi - lo > 1.0 {
        let mid = lo + ((hi - lo) / 2.0).floor();
        evals += 1;
        if reached(mid) {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    Root { x: hi, iterations: evals, converged: true }
}

/// Quantile of a continuous law from its CDF, survival function and density.
///
/// p ≤ 0 maps to `lower`, p ≥ 1 to `upper`, NaN propagates.
pub fn invert_continuous<C, S, D>(
    p: f64,
    lower: f64,
    upper: f64,
    guess: f64,
    cdf: C,
    sf: S,
    density: D,
) -> f64
where
    C: Fn(f64) -> f64,
    S: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    if p.is_nan() {
        return f64::NAN;
    }
    if p <= 0.0 {
        return lower;
    }
    if p >= 1.0 {
        return upper;
    }
    let root = if p <= 0.5 {
        solve_continuous(|x| cdf(x) - p, density, lower, upper, guess)
    } else {
        let q = 1.0 - p;
        solve_continuous(|x| q - sf(x), density, lower, upper, guess)
    };
    root.x
}

/// Quantile of a discrete law: the smallest support point k with F(k) ≥ p.
///
/// p ≤ 0 maps to `lower`, p ≥ 1 to `upper`, NaN propagates.
pub fn invert_discrete<C, S>(p: f64, lower: f64, upper: f64, guess: f64, cdf: C, sf: S) -> f64
where
    C: Fn(f64) -> f64,
    S: Fn(f64) -> f64,
{
    if p.is_nan() {
        return f64::NAN;
    }
    if p <= 0.0 {
        return lower;
    }
    if p >= 1.0 {
        return upper;
    }
    let root = if p <= 0.5 {
        solve_discrete(|k| cdf(k) >= p, lower, upper, guess)
    } else {
        let q = 1.0 - p;
        solve_discrete(|k| sf(k) <= q, lower, upper, guess)
    };
    root.x
}
