// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Gompertz Distribution
//!
//! Lifetime law with an exponentially increasing hazard, shape α and scale σ.
//!
//! - **PDF**: f(x) = (α/σ) exp(α(1 − e^(x/σ)) + x/σ)
//! - **CDF**: F(q) = 1 − exp(α(1 − e^(q/σ)))
//! - **Survival**: S(t) = exp(α(1 − e^(t/σ)))
//! - **Quantile**: Q(p) = σ ln(1 − ln(1 − p)/α)
//!
//! Every `1 − e^z` is written as −expm1(z) and every `ln(1 + u)` as ln1p(u).

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::params::{debug_check, positive};
use crate::kernels::scientific::distributions::shared::support::Support;
use crate::kernels::scientific::distributions::univariate::common::univariate_kernels;

#[inline]
pub fn gompertz_check(shape: f64, scale: f64) -> Result<(), KernelError> {
    positive("gompertz", "shape", shape)?;
    positive("gompertz", "scale", scale)
}

/// Support [0, ∞).
#[inline]
pub fn gompertz_support(shape: f64, scale: f64) -> Support {
    debug_check!(gompertz_check(shape, scale));
    Support::Continuous { lower: 0.0, upper: f64::INFINITY }
}

#[inline]
pub fn gompertz_density(x: f64, shape: f64, scale: f64) -> f64 {
    debug_check!(gompertz_check(shape, scale));
    if x.is_nan() {
        return f64::NAN;
    }
    if x < 0.0 || x == f64::INFINITY {
        return 0.0;
    }
    let z = x / scale;
    shape / scale * (z - shape * z.exp_m1()).exp()
}

#[inline]
pub fn gompertz_probability(q: f64, shape: f64, scale: f64) -> f64 {
    debug_check!(gompertz_check(shape, scale));
    if q <= 0.0 {
        return 0.0;
    }
    -(-shape * (q / scale).exp_m1()).exp_m1()
}

#[inline]
pub fn gompertz_survival(t: f64, shape: f64, scale: f64) -> f64 {
    debug_check!(gompertz_check(shape, scale));
    if t <= 0.0 {
        return 1.0;
    }
    (-shape * (t / scale).exp_m1()).exp()
}

#[inline]
pub fn gompertz_quantile(p: f64, shape: f64, scale: f64) -> f64 {
    if let Some(edge) = gompertz_support(shape, scale).edge_quantile(p) {
        return edge;
    }
    scale * (-(-p).ln_1p() / shape).ln_1p()
}

univariate_kernels! {
    gompertz_check, (shape: f64, scale: f64);
    /// Gompertz PDF over `x`, null-aware.
    gompertz_pdf => gompertz_density,
    /// Gompertz CDF over `x`, null-aware.
    gompertz_cdf => gompertz_probability,
    /// Gompertz survival function over `x`, null-aware.
    gompertz_sf => gompertz_survival,
    /// Gompertz quantile over probabilities `x`, null-aware.
    gompertz_ppf => gompertz_quantile,
}
