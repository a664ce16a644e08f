// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Uniform Distribution
//!
//! Constant density on the closed interval [a, b].
//!
//! - **PDF**: f(x) = 1/(b − a) on [a, b]
//! - **CDF**: F(q) = (q − a)/(b − a)
//! - **Survival**: S(t) = (b − t)/(b − a)
//! - **Quantile**: Q(p) = a + (b − a)p
//!
//! `min == max` is accepted and describes a point mass at `a`: the CDF steps from 0 to 1 at `a`
//! and the density is +∞ there.

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::params::{at_least, debug_check, finite};
use crate::kernels::scientific::distributions::shared::support::Support;
use crate::kernels::scientific::distributions::univariate::common::univariate_kernels;

/// Validates finite bounds with `max ≥ min`.
#[inline]
pub fn uniform_check(min: f64, max: f64) -> Result<(), KernelError> {
    finite("uniform", "min", min)?;
    finite("uniform", "max", max)?;
    at_least("uniform", "max", max, min)
}

/// Support [a, b].
#[inline]
pub fn uniform_support(min: f64, max: f64) -> Support {
    debug_check!(uniform_check(min, max));
    Support::Continuous { lower: min, upper: max }
}

#[inline]
pub fn uniform_density(x: f64, min: f64, max: f64) -> f64 {
    debug_check!(uniform_check(min, max));
    if x.is_nan() {
        return f64::NAN;
    }
    if x < min || x > max {
        return 0.0;
    }
    1.0 / (max - min)
}

#[inline]
pub fn uniform_probability(q: f64, min: f64, max: f64) -> f64 {
    debug_check!(uniform_check(min, max));
    if q.is_nan() {
        return f64::NAN;
    }
    if q < min {
        0.0
    } else if q >= max {
        1.0
    } else {
        (q - min) / (max - min)
    }
}

#[inline]
pub fn uniform_survival(t: f64, min: f64, max: f64) -> f64 {
    debug_check!(uniform_check(min, max));
    if t.is_nan() {
        return f64::NAN;
    }
    if t < min {
        1.0
    } else if t >= max {
        0.0
    } else {
        (max - t) / (max - min)
    }
}

#[inline]
pub fn uniform_quantile(p: f64, min: f64, max: f64) -> f64 {
    if let Some(edge) = uniform_support(min, max).edge_quantile(p) {
        return edge;
    }
    (min + (max - min) * p).min(max)
}

univariate_kernels! {
    uniform_check, (min: f64, max: f64);
    /// Uniform PDF over `x`, null-aware.
    uniform_pdf => uniform_density,
    /// Uniform CDF over `x`, null-aware.
    uniform_cdf => uniform_probability,
    /// Uniform survival function over `x`, null-aware.
    uniform_sf => uniform_survival,
    /// Uniform quantile over probabilities `x`, null-aware.
    uniform_ppf => uniform_quantile,
}
