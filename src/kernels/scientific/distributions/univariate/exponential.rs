// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Exponential Distribution
//!
//! Waiting time between events of a Poisson process, parameterised by its mean σ (`scale`).
//!
//! ## Mathematical Definition
//! - **PDF**: f(x) = exp(−x/σ)/σ for x ≥ 0
//! - **CDF**: F(q) = 1 − exp(−q/σ), evaluated as −expm1(−q/σ)
//! - **Survival**: S(t) = exp(−t/σ)
//! - **Quantile**: Q(p) = −σ ln(1 − p), evaluated as −σ ln1p(−p)

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::params::{debug_check, positive};
use crate::kernels::scientific::distributions::shared::support::Support;
use crate::kernels::scientific::distributions::univariate::common::univariate_kernels;

/// Validates `scale ∈ (0, ∞)`.
#[inline]
pub fn exponential_check(scale: f64) -> Result<(), KernelError> {
    positive("exponential", "scale", scale)
}

/// Support [0, ∞).
#[inline]
pub fn exponential_support(scale: f64) -> Support {
    debug_check!(exponential_check(scale));
    Support::Continuous { lower: 0.0, upper: f64::INFINITY }
}

/// f(x) = exp(−x/σ)/σ
#[inline]
pub fn exponential_density(x: f64, scale: f64) -> f64 {
    debug_check!(exponential_check(scale));
    if x < 0.0 {
        return 0.0;
    }
    (-x / scale).exp() / scale
}

/// F(q) = 1 − exp(−q/σ)
#[inline]
pub fn exponential_probability(q: f64, scale: f64) -> f64 {
    debug_check!(exponential_check(scale));
    if q <= 0.0 {
        return 0.0;
    }
    -(-q / scale).exp_m1()
}

/// S(t) = exp(−t/σ)
#[inline]
pub fn exponential_survival(t: f64, scale: f64) -> f64 {
    debug_check!(exponential_check(scale));
    if t <= 0.0 {
        return 1.0;
    }
    (-t / scale).exp()
}

/// Q(p) = −σ ln(1 − p)
#[inline]
pub fn exponential_quantile(p: f64, scale: f64) -> f64 {
    if let Some(edge) = exponential_support(scale).edge_quantile(p) {
        return edge;
    }
    -scale * (-p).ln_1p()
}

univariate_kernels! {
    exponential_check, (scale: f64);
    /// Exponential PDF over `x`, null-aware.
    exponential_pdf => exponential_density,
    /// Exponential CDF over `x`, null-aware.
    exponential_cdf => exponential_probability,
    /// Exponential survival function over `x`, null-aware.
    exponential_sf => exponential_survival,
    /// Exponential quantile over probabilities `x`, null-aware.
    exponential_ppf => exponential_quantile,
}
