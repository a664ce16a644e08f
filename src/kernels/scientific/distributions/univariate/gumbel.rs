// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Gumbel Distribution
//!
//! Type-I extreme value law for maxima.
//!
//! - **PDF**: f(x) = exp(−z − e^(−z))/σ, z = (x − μ)/σ
//! - **CDF**: F(q) = exp(−e^(−z))
//! - **Survival**: S(t) = 1 − exp(−e^(−z)), evaluated as −expm1(−e^(−z))
//! - **Quantile**: Q(p) = μ − σ ln(−ln p)

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::params::{debug_check, finite, positive};
use crate::kernels::scientific::distributions::shared::support::Support;
use crate::kernels::scientific::distributions::univariate::common::univariate_kernels;

#[inline]
pub fn gumbel_check(location: f64, scale: f64) -> Result<(), KernelError> {
    finite("gumbel", "location", location)?;
    positive("gumbel", "scale", scale)
}

/// Support (−∞, ∞).
#[inline]
pub fn gumbel_support(location: f64, scale: f64) -> Support {
    debug_check!(gumbel_check(location, scale));
    Support::Continuous { lower: f64::NEG_INFINITY, upper: f64::INFINITY }
}

#[inline]
pub fn gumbel_density(x: f64, location: f64, scale: f64) -> f64 {
    debug_check!(gumbel_check(location, scale));
    let z = (x - location) / scale;
    if z.is_infinite() {
        return 0.0;
    }
    (-z - (-z).exp()).exp() / scale
}

#[inline]
pub fn gumbel_probability(q: f64, location: f64, scale: f64) -> f64 {
    debug_check!(gumbel_check(location, scale));
    let z = (q - location) / scale;
    (-(-z).exp()).exp()
}

#[inline]
pub fn gumbel_survival(t: f64, location: f64, scale: f64) -> f64 {
    debug_check!(gumbel_check(location, scale));
    let z = (t - location) / scale;
    -(-(-z).exp()).exp_m1()
}

#[inline]
pub fn gumbel_quantile(p: f64, location: f64, scale: f64) -> f64 {
    if let Some(edge) = gumbel_support(location, scale).edge_quantile(p) {
        return edge;
    }
    location - scale * (-p.ln()).ln()
}

univariate_kernels! {
    gumbel_check, (location: f64, scale: f64);
    /// Gumbel PDF over `x`, null-aware.
    gumbel_pdf => gumbel_density,
    /// Gumbel CDF over `x`, null-aware.
    gumbel_cdf => gumbel_probability,
    /// Gumbel survival function over `x`, null-aware.
    gumbel_sf => gumbel_survival,
    /// Gumbel quantile over probabilities `x`, null-aware.
    gumbel_ppf => gumbel_quantile,
}
