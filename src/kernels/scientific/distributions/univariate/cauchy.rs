// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Cauchy Distribution
//!
//! Heavy-tailed location/scale law with no finite moments.
//!
//! - **PDF**: f(x) = 1/(πσ(1 + z²)), z = (x − μ)/σ
//! - **CDF**: F(q) = ½ + arctan(z)/π
//! - **Survival**: S(t) = ½ − arctan(z)/π
//! - **Quantile**: Q(p) = μ + σ tan(π(p − ½))
//!
//! The tails are evaluated as atan2(1, |z|)/π and the quantile as ∓σ/tan(π·min(p, 1 − p)), so
//! tiny tail probabilities do not cancel against ½.

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::constants::INV_PI;
use crate::kernels::scientific::distributions::shared::params::{debug_check, finite, positive};
use crate::kernels::scientific::distributions::shared::support::Support;
use crate::kernels::scientific::distributions::univariate::common::univariate_kernels;
use std::f64::consts::PI;

#[inline]
pub fn cauchy_check(location: f64, scale: f64) -> Result<(), KernelError> {
    finite("cauchy", "location", location)?;
    positive("cauchy", "scale", scale)
}

/// Support (−∞, ∞).
#[inline]
pub fn cauchy_support(location: f64, scale: f64) -> Support {
    debug_check!(cauchy_check(location, scale));
    Support::Continuous { lower: f64::NEG_INFINITY, upper: f64::INFINITY }
}

#[inline]
pub fn cauchy_density(x: f64, location: f64, scale: f64) -> f64 {
    debug_check!(cauchy_check(location, scale));
    let z = (x - location) / scale;
    INV_PI / (scale * (1.0 + z * z))
}

/// Lower tail of the standard Cauchy at z.
#[inline(always)]
fn standard_lower_tail(z: f64) -> f64 {
    if z < 0.0 {
        (1.0f64).atan2(-z) / PI
    } else {
        1.0 - (1.0f64).atan2(z) / PI
    }
}

#[inline]
pub fn cauchy_probability(q: f64, location: f64, scale: f64) -> f64 {
    debug_check!(cauchy_check(location, scale));
    standard_lower_tail((q - location) / scale)
}

#[inline]
pub fn cauchy_survival(t: f64, location: f64, scale: f64) -> f64 {
    debug_check!(cauchy_check(location, scale));
    standard_lower_tail((location - t) / scale)
}

#[inline]
pub fn cauchy_quantile(p: f64, location: f64, scale: f64) -> f64 {
    if let Some(edge) = cauchy_support(location, scale).edge_quantile(p) {
        return edge;
    }
    if p == 0.5 {
        return location;
    }
    let z = if p < 0.5 {
        -1.0 / (PI * p).tan()
    } else {
        1.0 / (PI * (1.0 - p)).tan()
    };
    location + scale * z
}

univariate_kernels! {
    cauchy_check, (location: f64, scale: f64);
    /// Cauchy PDF over `x`, null-aware.
    cauchy_pdf => cauchy_density,
    /// Cauchy CDF over `x`, null-aware.
    cauchy_cdf => cauchy_probability,
    /// Cauchy survival function over `x`, null-aware.
    cauchy_sf => cauchy_survival,
    /// Cauchy quantile over probabilities `x`, null-aware.
    cauchy_ppf => cauchy_quantile,
}
