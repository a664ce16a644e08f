// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Discrete Uniform Distribution
//!
//! Equal mass 1/n on each of the n = b − a + 1 integers between `min` (a) and `max` (b).
//!
//! - **PMF**: p(x) = 1/n
//! - **CDF**: F(q) = (⌊q⌋ − a + 1)/n
//! - **Survival**: S(t) = (b − ⌊t⌋)/n
//! - **Quantile**: Q(p) = ⌈pn⌉ + a − 1

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::params::{at_least, debug_check};
use crate::kernels::scientific::distributions::shared::support::Support;
use crate::kernels::scientific::distributions::univariate::common::univariate_kernels;

#[inline]
pub fn discrete_uniform_check(min: i64, max: i64) -> Result<(), KernelError> {
    at_least("discrete_uniform", "max", max, min)
}

/// Support {a, …, b}.
#[inline]
pub fn discrete_uniform_support(min: i64, max: i64) -> Support {
    debug_check!(discrete_uniform_check(min, max));
    Support::Discrete { lower: min as f64, upper: max as f64 }
}

/// Number of support points, formed in i128 so the full i64 range cannot overflow.
#[inline(always)]
fn count(min: i64, max: i64) -> f64 {
    (max as i128 - min as i128 + 1) as f64
}

#[inline]
pub fn discrete_uniform_density(x: f64, min: i64, max: i64) -> f64 {
    debug_check!(discrete_uniform_check(min, max));
    if x.is_nan() {
        return f64::NAN;
    }
    if discrete_uniform_support(min, max).contains(x) { 1.0 / count(min, max) } else { 0.0 }
}

#[inline]
pub fn discrete_uniform_probability(q: f64, min: i64, max: i64) -> f64 {
    debug_check!(discrete_uniform_check(min, max));
    if q.is_nan() {
        return f64::NAN;
    }
    let k = q.floor();
    let (a, b) = (min as f64, max as f64);
    if k < a {
        0.0
    } else if k >= b {
        1.0
    } else {
        (k - a + 1.0) / count(min, max)
    }
}

#[inline]
pub fn discrete_uniform_survival(t: f64, min: i64, max: i64) -> f64 {
    debug_check!(discrete_uniform_check(min, max));
    if t.is_nan() {
        return f64::NAN;
    }
    let k = t.floor();
    let (a, b) = (min as f64, max as f64);
    if k < a {
        1.0
    } else if k >= b {
        0.0
    } else {
        (b - k) / count(min, max)
    }
}

#[inline]
pub fn discrete_uniform_quantile(p: f64, min: i64, max: i64) -> f64 {
    let support = discrete_uniform_support(min, max);
    if let Some(edge) = support.edge_quantile(p) {
        return edge;
    }
    let (a, b) = (support.lower(), support.upper());
    ((p * count(min, max)).ceil() + a - 1.0).max(a).min(b)
}

univariate_kernels! {
    discrete_uniform_check, (min: i64, max: i64);
    /// Discrete uniform PMF over `x`, null-aware.
    discrete_uniform_pmf => discrete_uniform_density,
    /// Discrete uniform CDF over `x`, null-aware.
    discrete_uniform_cdf => discrete_uniform_probability,
    /// Discrete uniform survival function over `x`, null-aware.
    discrete_uniform_sf => discrete_uniform_survival,
    /// Discrete uniform quantile over probabilities `x`, null-aware.
    discrete_uniform_ppf => discrete_uniform_quantile,
}
