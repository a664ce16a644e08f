// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Negative Binomial Distribution
//!
//! Number of failures before the n-th (`size`) success in trials of success probability p
//! (`prob`). The geometric law is the case n = 1.
//!
//! - **PMF**: p(x) = C(x + n − 1, x) pⁿ (1 − p)ˣ = n/(n + x) · b(n; n + x, p), with the binomial
//!   mass b in Loader's saddle-point form
//! - **CDF**: F(k) = I_p(n, k + 1)
//! - **Survival**: S(k) = 1 − I_p(n, k + 1), from the same evaluation
//! - **Quantile**: discrete search seeded by the normal approximation

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::params::{
    at_least, debug_check, positive_probability,
};
use crate::kernels::scientific::distributions::shared::scalar::{
    incomplete_beta_pair, ln_binomial_mass, normal_quantile_scalar,
};
use crate::kernels::scientific::distributions::shared::solver::invert_discrete;
use crate::kernels::scientific::distributions::shared::support::Support;
use crate::kernels::scientific::distributions::univariate::common::univariate_kernels;

#[inline]
pub fn negative_binomial_check(size: u64, prob: f64) -> Result<(), KernelError> {
    at_least("negative_binomial", "size", size, 1)?;
    positive_probability("negative_binomial", "prob", prob)
}

/// Support {0, 1, …}; {0} when p = 1.
#[inline]
pub fn negative_binomial_support(size: u64, prob: f64) -> Support {
    debug_check!(negative_binomial_check(size, prob));
    let upper = if prob == 1.0 { 0.0 } else { f64::INFINITY };
    Support::Discrete { lower: 0.0, upper }
}

#[inline]
pub fn negative_binomial_density(x: f64, size: u64, prob: f64) -> f64 {
    debug_check!(negative_binomial_check(size, prob));
    if x.is_nan() {
        return f64::NAN;
    }
    if !negative_binomial_support(size, prob).contains(x) || x == f64::INFINITY {
        return 0.0;
    }
    if prob == 1.0 {
        return 1.0;
    }
    let n = size as f64;
    ((n / (n + x)).ln() + ln_binomial_mass(n, n + x, prob, 1.0 - prob)).exp()
}

#[inline]
pub fn negative_binomial_probability(q: f64, size: u64, prob: f64) -> f64 {
    debug_check!(negative_binomial_check(size, prob));
    if q.is_nan() {
        return f64::NAN;
    }
    if q < 0.0 {
        return 0.0;
    }
    if q == f64::INFINITY {
        return 1.0;
    }
    incomplete_beta_pair(size as f64, q.floor() + 1.0, prob).value
}

#[inline]
pub fn negative_binomial_survival(t: f64, size: u64, prob: f64) -> f64 {
    debug_check!(negative_binomial_check(size, prob));
    if t.is_nan() {
        return f64::NAN;
    }
    if t < 0.0 {
        return 1.0;
    }
    if t == f64::INFINITY {
        return 0.0;
    }
    incomplete_beta_pair(size as f64, t.floor() + 1.0, prob).complement
}

#[inline]
pub fn negative_binomial_quantile(p: f64, size: u64, prob: f64) -> f64 {
    let support = negative_binomial_support(size, prob);
    if let Some(edge) = support.edge_quantile(p) {
        return edge;
    }
    let n = size as f64;
    let q = 1.0 - prob;
    let guess = n * q / prob + normal_quantile_scalar(p) * (n * q).sqrt() / prob;
    invert_discrete(
        p,
        support.lower(),
        support.upper(),
        guess,
        |k| negative_binomial_probability(k, size, prob),
        |k| negative_binomial_survival(k, size, prob),
    )
}

univariate_kernels! {
    negative_binomial_check, (size: u64, prob: f64);
    /// Negative binomial PMF over `x`, null-aware.
    negative_binomial_pmf => negative_binomial_density,
    /// Negative binomial CDF over `x`, null-aware.
    negative_binomial_cdf => negative_binomial_probability,
    /// Negative binomial survival function over `x`, null-aware.
    negative_binomial_sf => negative_binomial_survival,
    /// Negative binomial quantile over probabilities `x`, null-aware.
    negative_binomial_ppf => negative_binomial_quantile,
}
