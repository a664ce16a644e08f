// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Poisson Distribution
//!
//! Count of events in a fixed interval at rate λ (`lambda`).
//!
//! - **PMF**: p(x) = λˣ e^(−λ) / x!, the gamma prefactor at shape x + 1
//! - **CDF**: F(k) = Q(k + 1, λ)
//! - **Survival**: S(k) = P(k + 1, λ)
//! - **Quantile**: discrete search seeded by λ + z√λ

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::params::{debug_check, positive};
use crate::kernels::scientific::distributions::shared::scalar::{
    gamma_pdf_scalar, normal_quantile_scalar, reg_lower_gamma, reg_upper_gamma,
};
use crate::kernels::scientific::distributions::shared::solver::invert_discrete;
use crate::kernels::scientific::distributions::shared::support::Support;
use crate::kernels::scientific::distributions::univariate::common::univariate_kernels;

#[inline]
pub fn poisson_check(lambda: f64) -> Result<(), KernelError> {
    positive("poisson", "lambda", lambda)
}

/// Support {0, 1, …}.
#[inline]
pub fn poisson_support(lambda: f64) -> Support {
    debug_check!(poisson_check(lambda));
    Support::Discrete { lower: 0.0, upper: f64::INFINITY }
}

#[inline]
pub fn poisson_density(x: f64, lambda: f64) -> f64 {
    debug_check!(poisson_check(lambda));
    if x.is_nan() {
        return f64::NAN;
    }
    if !poisson_support(lambda).contains(x) || x == f64::INFINITY {
        return 0.0;
    }
    // λˣe^(−λ)/Γ(x + 1) is the gamma density of shape x + 1 evaluated at λ
    gamma_pdf_scalar(x + 1.0, lambda)
}

#[inline]
pub fn poisson_probability(q: f64, lambda: f64) -> f64 {
    debug_check!(poisson_check(lambda));
    if q.is_nan() {
        return f64::NAN;
    }
    if q < 0.0 {
        return 0.0;
    }
    if q == f64::INFINITY {
        return 1.0;
    }
    reg_upper_gamma(q.floor() + 1.0, lambda)
}

#[inline]
pub fn poisson_survival(t: f64, lambda: f64) -> f64 {
    debug_check!(poisson_check(lambda));
    if t.is_nan() {
        return f64::NAN;
    }
    if t < 0.0 {
        return 1.0;
    }
    if t == f64::INFINITY {
        return 0.0;
    }
    reg_lower_gamma(t.floor() + 1.0, lambda)
}

#[inline]
pub fn poisson_quantile(p: f64, lambda: f64) -> f64 {
    let support = poisson_support(lambda);
    if let Some(edge) = support.edge_quantile(p) {
        return edge;
    }
    let guess = lambda + normal_quantile_scalar(p) * lambda.sqrt();
    invert_discrete(
        p,
        support.lower(),
        support.upper(),
        guess,
        |k| poisson_probability(k, lambda),
        |k| poisson_survival(k, lambda),
    )
}

univariate_kernels! {
    poisson_check, (lambda: f64);
    /// Poisson PMF over `x`, null-aware.
    poisson_pmf => poisson_density,
    /// Poisson CDF over `x`, null-aware.
    poisson_cdf => poisson_probability,
    /// Poisson survival function over `x`, null-aware.
    poisson_sf => poisson_survival,
    /// Poisson quantile over probabilities `x`, null-aware.
    poisson_ppf => poisson_quantile,
}
