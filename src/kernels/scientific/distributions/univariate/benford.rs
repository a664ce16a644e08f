// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Benford Distribution
//!
//! Leading-digit law in base b: digit d ∈ {1, …, b − 1} occurs with probability log_b(1 + 1/d).
//!
//! - **PMF**: p(x) = log_b(1 + 1/x)
//! - **CDF**: F(q) = log_b(1 + ⌊q⌋)
//! - **Survival**: S(t) = log_b(b / (1 + ⌊t⌋))
//! - **Quantile**: Q(p) = ⌈bᵖ⌉ − 1

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::params::{at_least, debug_check};
use crate::kernels::scientific::distributions::shared::support::Support;
use crate::kernels::scientific::distributions::univariate::common::univariate_kernels;

#[inline]
pub fn benford_check(base: u64) -> Result<(), KernelError> {
    at_least("benford", "base", base, 2)
}

/// Support {1, …, b − 1}.
#[inline]
pub fn benford_support(base: u64) -> Support {
    debug_check!(benford_check(base));
    Support::Discrete { lower: 1.0, upper: (base - 1) as f64 }
}

#[inline]
pub fn benford_density(x: f64, base: u64) -> f64 {
    debug_check!(benford_check(base));
    if x.is_nan() {
        return f64::NAN;
    }
    if !benford_support(base).contains(x) {
        return 0.0;
    }
    (1.0 / x).ln_1p() / (base as f64).ln()
}

#[inline]
pub fn benford_probability(q: f64, base: u64) -> f64 {
    debug_check!(benford_check(base));
    if q.is_nan() {
        return f64::NAN;
    }
    let k = q.floor();
    if k < 1.0 {
        return 0.0;
    }
    let b = base as f64;
    if k >= b - 1.0 {
        return 1.0;
    }
    k.ln_1p() / b.ln()
}

#[inline]
pub fn benford_survival(t: f64, base: u64) -> f64 {
    debug_check!(benford_check(base));
    if t.is_nan() {
        return f64::NAN;
    }
    let k = t.floor();
    if k < 1.0 {
        return 1.0;
    }
    let b = base as f64;
    if k >= b - 1.0 {
        return 0.0;
    }
    (b / (1.0 + k)).ln() / b.ln()
}

#[inline]
pub fn benford_quantile(p: f64, base: u64) -> f64 {
    let support = benford_support(base);
    if let Some(edge) = support.edge_quantile(p) {
        return edge;
    }
    ((base as f64).powf(p).ceil() - 1.0).max(support.lower()).min(support.upper())
}

univariate_kernels! {
    benford_check, (base: u64);
    /// Benford PMF over `x`, null-aware.
    benford_pmf => benford_density,
    /// Benford CDF over `x`, null-aware.
    benford_cdf => benford_probability,
    /// Benford survival function over `x`, null-aware.
    benford_sf => benford_survival,
    /// Benford quantile over probabilities `x`, null-aware.
    benford_ppf => benford_quantile,
}
