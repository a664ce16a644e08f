// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Bernoulli Distribution
//!
//! A single trial that succeeds (1) with probability p (`prob`) and fails (0) otherwise.
//!
//! - **PMF**: p(0) = 1 − p, p(1) = p
//! - **CDF**: 0 below 0, 1 − p on [0, 1), 1 from 1
//! - **Quantile**: 0 for u ≤ 1 − p, 1 above
//!
//! With p = 0 or p = 1 the law is a point mass and the support shrinks to that point.

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::params::{debug_check, probability};
use crate::kernels::scientific::distributions::shared::support::Support;
use crate::kernels::scientific::distributions::univariate::common::univariate_kernels;

#[inline]
pub fn bernoulli_check(prob: f64) -> Result<(), KernelError> {
    probability("bernoulli", "prob", prob)
}

/// Support {0, 1}; {0} when p = 0 and {1} when p = 1.
#[inline]
pub fn bernoulli_support(prob: f64) -> Support {
    debug_check!(bernoulli_check(prob));
    let lower = if prob == 1.0 { 1.0 } else { 0.0 };
    let upper = if prob == 0.0 { 0.0 } else { 1.0 };
    Support::Discrete { lower, upper }
}

#[inline]
pub fn bernoulli_density(x: f64, prob: f64) -> f64 {
    debug_check!(bernoulli_check(prob));
    if x.is_nan() {
        return f64::NAN;
    }
    if x == 0.0 {
        1.0 - prob
    } else if x == 1.0 {
        prob
    } else {
        0.0
    }
}

#[inline]
pub fn bernoulli_probability(q: f64, prob: f64) -> f64 {
    debug_check!(bernoulli_check(prob));
    if q.is_nan() {
        return f64::NAN;
    }
    if q < 0.0 {
        0.0
    } else if q < 1.0 {
        1.0 - prob
    } else {
        1.0
    }
}

#[inline]
pub fn bernoulli_survival(t: f64, prob: f64) -> f64 {
    debug_check!(bernoulli_check(prob));
    if t.is_nan() {
        return f64::NAN;
    }
    if t < 0.0 {
        1.0
    } else if t < 1.0 {
        prob
    } else {
        0.0
    }
}

#[inline]
pub fn bernoulli_quantile(p: f64, prob: f64) -> f64 {
    if let Some(edge) = bernoulli_support(prob).edge_quantile(p) {
        return edge;
    }
    if p <= 1.0 - prob { 0.0 } else { 1.0 }
}

univariate_kernels! {
    bernoulli_check, (prob: f64);
    /// Bernoulli PMF over `x`, null-aware.
    bernoulli_pmf => bernoulli_density,
    /// Bernoulli CDF over `x`, null-aware.
    bernoulli_cdf => bernoulli_probability,
    /// Bernoulli survival function over `x`, null-aware.
    bernoulli_sf => bernoulli_survival,
    /// Bernoulli quantile over probabilities `x`, null-aware.
    bernoulli_ppf => bernoulli_quantile,
}
