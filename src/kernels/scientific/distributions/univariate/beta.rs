// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Beta Distribution
//!
//! The beta distribution on [0, 1] with shape parameters α (`shape1`) and β (`shape2`). It is
//! the conjugate prior of the Bernoulli and binomial success probability, and the law of
//! order statistics of uniform samples.
//!
//! ## Mathematical Definition
//! - **PDF**: f(x) = x^(α−1)(1−x)^(β−1) / B(α, β)
//! - **CDF**: F(q) = I_q(α, β)
//! - **Survival**: S(t) = I_{1−t}(β, α), taken from the same evaluation as F
//! - **Quantile**: the inverse incomplete beta, solved on the smaller of x and 1 − x
//!
//! ## Boundary Behaviour
//! At x = 0 the density is +∞ for α < 1, β for α = 1 and 0 for α > 1; x = 1 mirrors this in β.

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::params::{debug_check, positive};
use crate::kernels::scientific::distributions::shared::scalar::{
    beta_pdf_scalar, incomplete_beta_pair, inverse_incomplete_beta,
};
use crate::kernels::scientific::distributions::shared::support::Support;
use crate::kernels::scientific::distributions::univariate::common::univariate_kernels;

#[inline]
pub fn beta_check(shape1: f64, shape2: f64) -> Result<(), KernelError> {
    positive("beta", "shape1", shape1)?;
    positive("beta", "shape2", shape2)
}

/// Support [0, 1].
#[inline]
pub fn beta_support(shape1: f64, shape2: f64) -> Support {
    debug_check!(beta_check(shape1, shape2));
    Support::Continuous { lower: 0.0, upper: 1.0 }
}

/// Density of a shape parameter's own endpoint: +∞ below 1, `other` at 1, 0 above.
#[inline(always)]
fn endpoint_density(own: f64, other: f64) -> f64 {
    if own < 1.0 {
        f64::INFINITY
    } else if own == 1.0 {
        other
    } else {
        0.0
    }
}

#[inline]
pub fn beta_density(x: f64, shape1: f64, shape2: f64) -> f64 {
    debug_check!(beta_check(shape1, shape2));
    if x.is_nan() {
        return f64::NAN;
    }
    if !(0.0..=1.0).contains(&x) {
        return 0.0;
    }
    if x == 0.0 {
        return endpoint_density(shape1, shape2);
    }
    if x == 1.0 {
        return endpoint_density(shape2, shape1);
    }
    beta_pdf_scalar(shape1, shape2, x, 1.0 - x)
}

#[inline]
pub fn beta_probability(q: f64, shape1: f64, shape2: f64) -> f64 {
    debug_check!(beta_check(shape1, shape2));
    incomplete_beta_pair(shape1, shape2, q).value
}

#[inline]
pub fn beta_survival(t: f64, shape1: f64, shape2: f64) -> f64 {
    debug_check!(beta_check(shape1, shape2));
    incomplete_beta_pair(shape1, shape2, t).complement
}

#[inline]
pub fn beta_quantile(p: f64, shape1: f64, shape2: f64) -> f64 {
    if let Some(edge) = beta_support(shape1, shape2).edge_quantile(p) {
        return edge;
    }
    inverse_incomplete_beta(shape1, shape2, p, 1.0 - p).0
}

univariate_kernels! {
    beta_check, (shape1: f64, shape2: f64);
    /// Beta PDF over `x`, null-aware.
    beta_pdf => beta_density,
    /// Beta CDF over `x`, null-aware.
    beta_cdf => beta_probability,
    /// Beta survival function over `x`, null-aware.
    beta_sf => beta_survival,
    /// Beta quantile over probabilities `x`, null-aware.
    beta_ppf => beta_quantile,
}
