// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Laplace Distribution
//!
//! Double-exponential law: two exponential tails glued at the location μ.
//!
//! - **PDF**: f(x) = exp(−|x − μ|/σ)/(2σ)
//! - **CDF**: ½exp(z) for z < 0, 1 − ½exp(−z) otherwise, z = (q − μ)/σ
//! - **Survival**: the mirror image, S(t) = F(2μ − t)
//! - **Quantile**: μ + σ ln(2p) below the median, μ − σ ln(2(1 − p)) above

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::params::{debug_check, finite, positive};
use crate::kernels::scientific::distributions::shared::support::Support;
use crate::kernels::scientific::distributions::univariate::common::univariate_kernels;

#[inline]
pub fn laplace_check(location: f64, scale: f64) -> Result<(), KernelError> {
    finite("laplace", "location", location)?;
    positive("laplace", "scale", scale)
}

/// Support (−∞, ∞).
#[inline]
pub fn laplace_support(location: f64, scale: f64) -> Support {
    debug_check!(laplace_check(location, scale));
    Support::Continuous { lower: f64::NEG_INFINITY, upper: f64::INFINITY }
}

#[inline]
pub fn laplace_density(x: f64, location: f64, scale: f64) -> f64 {
    debug_check!(laplace_check(location, scale));
    (-(x - location).abs() / scale).exp() / (2.0 * scale)
}

#[inline(always)]
fn standard_lower_tail(z: f64) -> f64 {
    if z < 0.0 { 0.5 * z.exp() } else { 1.0 - 0.5 * (-z).exp() }
}

#[inline]
pub fn laplace_probability(q: f64, location: f64, scale: f64) -> f64 {
    debug_check!(laplace_check(location, scale));
    standard_lower_tail((q - location) / scale)
}

#[inline]
pub fn laplace_survival(t: f64, location: f64, scale: f64) -> f64 {
    debug_check!(laplace_check(location, scale));
    standard_lower_tail((location - t) / scale)
}

#[inline]
pub fn laplace_quantile(p: f64, location: f64, scale: f64) -> f64 {
    if let Some(edge) = laplace_support(location, scale).edge_quantile(p) {
        return edge;
    }
    if p < 0.5 {
        location + scale * (2.0 * p).ln()
    } else {
        location - scale * (2.0 * (1.0 - p)).ln()
    }
}

univariate_kernels! {
    laplace_check, (location: f64, scale: f64);
    /// Laplace PDF over `x`, null-aware.
    laplace_pdf => laplace_density,
    /// Laplace CDF over `x`, null-aware.
    laplace_cdf => laplace_probability,
    /// Laplace survival function over `x`, null-aware.
    laplace_sf => laplace_survival,
    /// Laplace quantile over probabilities `x`, null-aware.
    laplace_ppf => laplace_quantile,
}
