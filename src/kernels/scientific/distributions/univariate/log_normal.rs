// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Log-Normal Distribution
//!
//! X = exp(μ + σZ) for standard normal Z; μ is `log_location` and σ `log_scale`.
//!
//! - **PDF**: f(x) = exp(−z²/2)/(xσ√(2π)), z = (ln x − μ)/σ
//! - **CDF**: F(q) = Φ(z)
//! - **Survival**: S(t) = Φ(−z)
//! - **Quantile**: Q(p) = exp(μ + σΦ⁻¹(p))

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::constants::SQRT_2PI;
use crate::kernels::scientific::distributions::shared::params::{debug_check, finite, positive};
use crate::kernels::scientific::distributions::shared::scalar::{
    normal_cdf_scalar, normal_quantile_scalar,
};
use crate::kernels::scientific::distributions::shared::support::Support;
use crate::kernels::scientific::distributions::univariate::common::univariate_kernels;

#[inline]
pub fn log_normal_check(log_location: f64, log_scale: f64) -> Result<(), KernelError> {
    finite("log_normal", "log_location", log_location)?;
    positive("log_normal", "log_scale", log_scale)
}

/// Support [0, ∞).
#[inline]
pub fn log_normal_support(log_location: f64, log_scale: f64) -> Support {
    debug_check!(log_normal_check(log_location, log_scale));
    Support::Continuous { lower: 0.0, upper: f64::INFINITY }
}

#[inline]
pub fn log_normal_density(x: f64, log_location: f64, log_scale: f64) -> f64 {
    debug_check!(log_normal_check(log_location, log_scale));
    if x.is_nan() {
        return f64::NAN;
    }
    if x <= 0.0 || x == f64::INFINITY {
        return 0.0;
    }
    let z = (x.ln() - log_location) / log_scale;
    (-0.5 * z * z).exp() / (x * log_scale * SQRT_2PI)
}

#[inline]
pub fn log_normal_probability(q: f64, log_location: f64, log_scale: f64) -> f64 {
    debug_check!(log_normal_check(log_location, log_scale));
    if q <= 0.0 {
        return 0.0;
    }
    normal_cdf_scalar((q.ln() - log_location) / log_scale)
}

#[inline]
pub fn log_normal_survival(t: f64, log_location: f64, log_scale: f64) -> f64 {
    debug_check!(log_normal_check(log_location, log_scale));
    if t <= 0.0 {
        return 1.0;
    }
    normal_cdf_scalar((log_location - t.ln()) / log_scale)
}

#[inline]
pub fn log_normal_quantile(p: f64, log_location: f64, log_scale: f64) -> f64 {
    if let Some(edge) = log_normal_support(log_location, log_scale).edge_quantile(p) {
        return edge;
    }
    (log_location + log_scale * normal_quantile_scalar(p)).exp()
}

univariate_kernels! {
    log_normal_check, (log_location: f64, log_scale: f64);
    /// Log-normal PDF over `x`, null-aware.
    log_normal_pdf => log_normal_density,
    /// Log-normal CDF over `x`, null-aware.
    log_normal_cdf => log_normal_probability,
    /// Log-normal survival function over `x`, null-aware.
    log_normal_sf => log_normal_survival,
    /// Log-normal quantile over probabilities `x`, null-aware.
    log_normal_ppf => log_normal_quantile,
}
