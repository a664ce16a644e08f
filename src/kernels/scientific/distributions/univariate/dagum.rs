// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Dagum Distribution
//!
//! Income-size law with shapes p (`shape1`), a (`shape2`) and scale σ.
//!
//! - **PDF**: f(x) = (ap/x)(x/σ)^(ap) / (1 + (x/σ)^a)^(p+1)
//! - **CDF**: F(q) = (1 + (q/σ)^(−a))^(−p)
//! - **Survival**: S(t) = 1 − F(t)
//! - **Quantile**: Q(u) = σ(u^(−1/p) − 1)^(−1/a)
//!
//! All powers are taken in log-space with L = ln(x/σ): ln F = −p·ln(1 + e^(−aL)), and the
//! survival is −expm1(ln F), so both tails avoid the cancellation of `1 − F`.

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::params::{debug_check, positive};
use crate::kernels::scientific::distributions::shared::scalar::log1pexp;
use crate::kernels::scientific::distributions::shared::support::Support;
use crate::kernels::scientific::distributions::univariate::common::univariate_kernels;

#[inline]
pub fn dagum_check(shape1: f64, shape2: f64, scale: f64) -> Result<(), KernelError> {
    positive("dagum", "shape1", shape1)?;
    positive("dagum", "shape2", shape2)?;
    positive("dagum", "scale", scale)
}

/// Support [0, ∞).
#[inline]
pub fn dagum_support(shape1: f64, shape2: f64, scale: f64) -> Support {
    debug_check!(dagum_check(shape1, shape2, scale));
    Support::Continuous { lower: 0.0, upper: f64::INFINITY }
}

/// ln F(q) for q > 0.
#[inline(always)]
fn ln_cdf(q: f64, shape1: f64, shape2: f64, scale: f64) -> f64 {
    -shape1 * log1pexp(-shape2 * (q / scale).ln())
}

#[inline]
pub fn dagum_density(x: f64, shape1: f64, shape2: f64, scale: f64) -> f64 {
    debug_check!(dagum_check(shape1, shape2, scale));
    if x.is_nan() {
        return f64::NAN;
    }
    if x < 0.0 || x == f64::INFINITY {
        return 0.0;
    }
    let ap = shape1 * shape2;
    if x == 0.0 {
        return if ap < 1.0 {
            f64::INFINITY
        } else if ap == 1.0 {
            ap / scale
        } else {
            0.0
        };
    }
    let l = (x / scale).ln();
    (ap.ln() - x.ln() + ap * l - (shape1 + 1.0) * log1pexp(shape2 * l)).exp()
}

#[inline]
pub fn dagum_probability(q: f64, shape1: f64, shape2: f64, scale: f64) -> f64 {
    debug_check!(dagum_check(shape1, shape2, scale));
    if q.is_nan() {
        return f64::NAN;
    }
    if q <= 0.0 {
        return 0.0;
    }
    ln_cdf(q, shape1, shape2, scale).exp()
}

#[inline]
pub fn dagum_survival(t: f64, shape1: f64, shape2: f64, scale: f64) -> f64 {
    debug_check!(dagum_check(shape1, shape2, scale));
    if t.is_nan() {
        return f64::NAN;
    }
    if t <= 0.0 {
        return 1.0;
    }
    -ln_cdf(t, shape1, shape2, scale).exp_m1()
}

#[inline]
pub fn dagum_quantile(p: f64, shape1: f64, shape2: f64, scale: f64) -> f64 {
    if let Some(edge) = dagum_support(shape1, shape2, scale).edge_quantile(p) {
        return edge;
    }
    // u^(−1/p) − 1 = expm1(−ln(u)/p)
    let w = (-p.ln() / shape1).exp_m1();
    scale * (-w.ln() / shape2).exp()
}

univariate_kernels! {
    dagum_check, (shape1: f64, shape2: f64, scale: f64);
    /// Dagum PDF over `x`, null-aware.
    dagum_pdf => dagum_density,
    /// Dagum CDF over `x`, null-aware.
    dagum_cdf => dagum_probability,
    /// Dagum survival function over `x`, null-aware.
    dagum_sf => dagum_survival,
    /// Dagum quantile over probabilities `x`, null-aware.
    dagum_ppf => dagum_quantile,
}
