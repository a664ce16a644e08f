// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Geometric Distribution
//!
//! Number of failures before the first success in independent trials of success
//! probability p (`prob`).
//!
//! - **PMF**: p(x) = p(1 − p)ˣ
//! - **CDF**: F(q) = 1 − (1 − p)^(⌊q⌋+1)
//! - **Survival**: S(t) = (1 − p)^(⌊t⌋+1)
//! - **Quantile**: Q(u) = ⌊ln(1 − u)/ln(1 − p)⌋
//!
//! Powers of 1 − p are taken as exp(n·ln1p(−p)), so tiny p keeps full precision.

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::params::{
    debug_check, positive_probability,
};
use crate::kernels::scientific::distributions::shared::support::Support;
use crate::kernels::scientific::distributions::univariate::common::univariate_kernels;

#[inline]
pub fn geometric_check(prob: f64) -> Result<(), KernelError> {
    positive_probability("geometric", "prob", prob)
}

/// Support {0, 1, …}; {0} when p = 1.
#[inline]
pub fn geometric_support(prob: f64) -> Support {
    debug_check!(geometric_check(prob));
    let upper = if prob == 1.0 { 0.0 } else { f64::INFINITY };
    Support::Discrete { lower: 0.0, upper }
}

#[inline]
pub fn geometric_density(x: f64, prob: f64) -> f64 {
    debug_check!(geometric_check(prob));
    if x.is_nan() {
        return f64::NAN;
    }
    if !geometric_support(prob).contains(x) {
        return 0.0;
    }
    if x == 0.0 {
        return prob;
    }
    prob * (x * (-prob).ln_1p()).exp()
}

#[inline]
pub fn geometric_probability(q: f64, prob: f64) -> f64 {
    debug_check!(geometric_check(prob));
    if q.is_nan() {
        return f64::NAN;
    }
    if q < 0.0 {
        return 0.0;
    }
    -((q.floor() + 1.0) * (-prob).ln_1p()).exp_m1()
}

#[inline]
pub fn geometric_survival(t: f64, prob: f64) -> f64 {
    debug_check!(geometric_check(prob));
    if t.is_nan() {
        return f64::NAN;
    }
    if t < 0.0 {
        return 1.0;
    }
    ((t.floor() + 1.0) * (-prob).ln_1p()).exp()
}

#[inline]
pub fn geometric_quantile(p: f64, prob: f64) -> f64 {
    if let Some(edge) = geometric_support(prob).edge_quantile(p) {
        return edge;
    }
    ((-p).ln_1p() / (-prob).ln_1p()).floor()
}

univariate_kernels! {
    geometric_check, (prob: f64);
    /// Geometric PMF over `x`, null-aware.
    geometric_pmf => geometric_density,
    /// Geometric CDF over `x`, null-aware.
    geometric_cdf => geometric_probability,
    /// Geometric survival function over `x`, null-aware.
    geometric_sf => geometric_survival,
    /// Geometric quantile over probabilities `x`, null-aware.
    geometric_ppf => geometric_quantile,
}
