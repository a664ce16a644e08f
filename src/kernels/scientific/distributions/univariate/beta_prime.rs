// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Beta Prime Distribution
//!
//! The law of X/(1 − X) for X ~ Beta(α, β); also called the beta distribution of the
//! second kind. Through y = x/(1 + x) every function reduces to the beta case, with the
//! complement 1/(1 + x) formed directly so the right tail keeps precision.
//!
//! - **PDF**: f(x) = x^(α−1)(1+x)^(−α−β) / B(α, β)
//! - **CDF**: F(q) = I_{q/(1+q)}(α, β)
//! - **Quantile**: Q(p) = x/(1 − x) with x the beta quantile

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::params::{debug_check, positive};
use crate::kernels::scientific::distributions::shared::scalar::{
    IncompleteBeta, beta_pdf_scalar, incomplete_beta_pair, inverse_incomplete_beta,
};
use crate::kernels::scientific::distributions::shared::support::Support;
use crate::kernels::scientific::distributions::univariate::common::univariate_kernels;

#[inline]
pub fn beta_prime_check(shape1: f64, shape2: f64) -> Result<(), KernelError> {
    positive("beta_prime", "shape1", shape1)?;
    positive("beta_prime", "shape2", shape2)
}

/// Support [0, ∞).
#[inline]
pub fn beta_prime_support(shape1: f64, shape2: f64) -> Support {
    debug_check!(beta_prime_check(shape1, shape2));
    Support::Continuous { lower: 0.0, upper: f64::INFINITY }
}

#[inline]
pub fn beta_prime_density(x: f64, shape1: f64, shape2: f64) -> f64 {
    debug_check!(beta_prime_check(shape1, shape2));
    if x.is_nan() {
        return f64::NAN;
    }
    if x < 0.0 || x == f64::INFINITY {
        return 0.0;
    }
    if x == 0.0 {
        return if shape1 < 1.0 {
            f64::INFINITY
        } else if shape1 == 1.0 {
            shape2
        } else {
            0.0
        };
    }
    let y_bar = 1.0 / (1.0 + x);
    let y = x * y_bar;
    beta_pdf_scalar(shape1, shape2, y, y_bar) * y_bar * y_bar
}

/// I_y(α, β) and its complement for y = x/(1 + x), evaluating the tail that is small.
#[inline(always)]
fn mapped_pair(x: f64, shape1: f64, shape2: f64) -> IncompleteBeta {
    let y_bar = 1.0 / (1.0 + x);
    let y = x * y_bar;
    if y <= 0.5 {
        incomplete_beta_pair(shape1, shape2, y)
    } else {
        let flipped = incomplete_beta_pair(shape2, shape1, y_bar);
        IncompleteBeta {
            value: flipped.complement,
            complement: flipped.value,
            converged: flipped.converged,
        }
    }
}

#[inline]
pub fn beta_prime_probability(q: f64, shape1: f64, shape2: f64) -> f64 {
    debug_check!(beta_prime_check(shape1, shape2));
    if q.is_nan() {
        return f64::NAN;
    }
    if q <= 0.0 {
        return 0.0;
    }
    if q == f64::INFINITY {
        return 1.0;
    }
    mapped_pair(q, shape1, shape2).value
}

#[inline]
pub fn beta_prime_survival(t: f64, shape1: f64, shape2: f64) -> f64 {
    debug_check!(beta_prime_check(shape1, shape2));
    if t.is_nan() {
        return f64::NAN;
    }
    if t <= 0.0 {
        return 1.0;
    }
    if t == f64::INFINITY {
        return 0.0;
    }
    mapped_pair(t, shape1, shape2).complement
}

#[inline]
pub fn beta_prime_quantile(p: f64, shape1: f64, shape2: f64) -> f64 {
    if let Some(edge) = beta_prime_support(shape1, shape2).edge_quantile(p) {
        return edge;
    }
    let (x, y) = inverse_incomplete_beta(shape1, shape2, p, 1.0 - p);
    x / y
}

univariate_kernels! {
    beta_prime_check, (shape1: f64, shape2: f64);
    /// Beta prime PDF over `x`, null-aware.
    beta_prime_pdf => beta_prime_density,
    /// Beta prime CDF over `x`, null-aware.
    beta_prime_cdf => beta_prime_probability,
    /// Beta prime survival function over `x`, null-aware.
    beta_prime_sf => beta_prime_survival,
    /// Beta prime quantile over probabilities `x`, null-aware.
    beta_prime_ppf => beta_prime_quantile,
}
