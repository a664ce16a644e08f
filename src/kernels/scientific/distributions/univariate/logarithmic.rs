// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Logarithmic Distribution
//!
//! Logarithmic-series law on {1, 2, …} with parameter p (`prob`):
//! p(x) = pˣ / (x · (−ln(1 − p))).
//!
//! The CDF has no closed form. For p < ½ the upper tail Σ_{j>k} pʲ/j is summed until its terms
//! vanish (they decrease monotonically); below the mean the lower sum Σ_{j≤k} is taken
//! directly. For p ≥ ½ the tail can span ~1/(1 − p) terms, so after a few exact terms the rest
//! is the Euler–Maclaurin sum of e^{−cx}/x, c = −ln p: an exponential integral plus Bernoulli
//! corrections.

use log::warn;

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::constants::BERNOULLI_OVER_FACTORIAL;
use crate::kernels::scientific::distributions::shared::params::{debug_check, open_probability};
use crate::kernels::scientific::distributions::shared::scalar::{exp_integral_e1, tail_series};
use crate::kernels::scientific::distributions::shared::solver::invert_discrete;
use crate::kernels::scientific::distributions::shared::support::Support;
use crate::kernels::scientific::distributions::univariate::common::univariate_kernels;

#[inline]
pub fn logarithmic_check(prob: f64) -> Result<(), KernelError> {
    open_probability("logarithmic", "prob", prob)
}

/// Support {1, 2, …}.
#[inline]
pub fn logarithmic_support(prob: f64) -> Support {
    debug_check!(logarithmic_check(prob));
    Support::Discrete { lower: 1.0, upper: f64::INFINITY }
}

/// −ln(1 − p)
#[inline(always)]
fn normaliser(prob: f64) -> f64 {
    -(-prob).ln_1p()
}

#[inline(always)]
fn mass(k: f64, prob: f64) -> f64 {
    (k * prob.ln()).exp() / (k * normaliser(prob))
}

/// Terms summed exactly before the Euler–Maclaurin remainder starts.
const EXACT_TERMS: usize = 10;

/// Σ_{j=0}^{r} r!/j!·cʲ/x^{r−j+1}, so that the r-th derivative of e^{−cx}/x is
/// (−1)ʳ·e^{−cx} times this sum.
fn derivative_sum(r: usize, c: f64, x: f64) -> f64 {
    let mut term = (1..=r).fold(1.0, |acc, i| acc * i as f64) * x.recip().powi(r as i32 + 1);
    let mut sum = term;
    for j in 0..r {
        term *= c * x / (j + 1) as f64;
        sum += term;
    }
    sum
}

/// Σ_{j>k} pʲ/j for p ≥ ½.
fn upper_sum(k: f64, prob: f64) -> f64 {
    // c = −ln p, with 1 − p exact on this range
    let c = -(-(1.0 - prob)).ln_1p();
    let mut sum = 0.0;
    for i in 1..=EXACT_TERMS {
        let j = k + i as f64;
        sum += (-c * j).exp() / j;
    }
    let m = k + EXACT_TERMS as f64 + 1.0;
    let decay = (-c * m).exp();
    let mut rest = exp_integral_e1(c * m) + 0.5 * decay / m;
    for (i, &w) in BERNOULLI_OVER_FACTORIAL.iter().enumerate() {
        rest += w * decay * derivative_sum(2 * i + 1, c, m);
    }
    sum + rest
}

/// (F(k), S(k)) for an integer k ≥ 1.
fn tails(k: f64, prob: f64) -> (f64, f64) {
    if prob >= 0.5 {
        // F(k) ≥ F(1) = p/(−ln(1 − p)) > 0.01 here, so 1 − S loses nothing.
        let sf = (upper_sum(k, prob) / normaliser(prob)).min(1.0);
        return (1.0 - sf, sf);
    }
    let ratio = |j: f64| prob * j / (j + 1.0);
    let mean = prob / ((1.0 - prob) * normaliser(prob));
    if k < mean {
        let (cdf, ok) = tail_series(mass(1.0, prob), 1.0, k, false, ratio);
        if !ok {
            warn!("logarithmic: lower sum truncated at k={k}");
        }
        let cdf = cdf.min(1.0);
        (cdf, 1.0 - cdf)
    } else {
        let (sf, ok) = tail_series(mass(k + 1.0, prob), k + 1.0, f64::INFINITY, true, ratio);
        if !ok {
            warn!("logarithmic: upper tail truncated at k={k}");
        }
        let sf = sf.min(1.0);
        (1.0 - sf, sf)
    }
}

#[inline]
pub fn logarithmic_density(x: f64, prob: f64) -> f64 {
    debug_check!(logarithmic_check(prob));
    if x.is_nan() {
        return f64::NAN;
    }
    if !logarithmic_support(prob).contains(x) || x == f64::INFINITY {
        return 0.0;
    }
    mass(x, prob)
}

#[inline]
pub fn logarithmic_probability(q: f64, prob: f64) -> f64 {
    debug_check!(logarithmic_check(prob));
    if q.is_nan() {
        return f64::NAN;
    }
    if q < 1.0 {
        return 0.0;
    }
    if q == f64::INFINITY {
        return 1.0;
    }
    tails(q.floor(), prob).0
}

#[inline]
pub fn logarithmic_survival(t: f64, prob: f64) -> f64 {
    debug_check!(logarithmic_check(prob));
    if t.is_nan() {
        return f64::NAN;
    }
    if t < 1.0 {
        return 1.0;
    }
    if t == f64::INFINITY {
        return 0.0;
    }
    tails(t.floor(), prob).1
}

#[inline]
pub fn logarithmic_quantile(p: f64, prob: f64) -> f64 {
    let support = logarithmic_support(prob);
    if let Some(edge) = support.edge_quantile(p) {
        return edge;
    }
    invert_discrete(
        p,
        support.lower(),
        support.upper(),
        1.0,
        |k| logarithmic_probability(k, prob),
        |k| logarithmic_survival(k, prob),
    )
}

univariate_kernels! {
    logarithmic_check, (prob: f64);
    /// Logarithmic PMF over `x`, null-aware.
    logarithmic_pmf => logarithmic_density,
    /// Logarithmic CDF over `x`, null-aware.
    logarithmic_cdf => logarithmic_probability,
    /// Logarithmic survival function over `x`, null-aware.
    logarithmic_sf => logarithmic_survival,
    /// Logarithmic quantile over probabilities `x`, null-aware.
    logarithmic_ppf => logarithmic_quantile,
}
