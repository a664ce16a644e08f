// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Chi-Squared Distribution
//!
//! Sum of ν squared standard normals; the gamma law with shape ν/2 and scale 2.
//!
//! - **PDF**: f(x) = (x/2)^(ν/2−1) exp(−x/2) / (2Γ(ν/2))
//! - **CDF**: F(q) = P(ν/2, q/2)
//! - **Survival**: S(t) = Q(ν/2, t/2)
//! - **Quantile**: inverted through the gamma quantile

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::params::{debug_check, positive};
use crate::kernels::scientific::distributions::shared::support::Support;
use crate::kernels::scientific::distributions::univariate::common::univariate_kernels;
use crate::kernels::scientific::distributions::univariate::gamma::{
    gamma_density, gamma_probability, gamma_quantile, gamma_survival,
};

#[inline]
pub fn chi_squared_check(df: f64) -> Result<(), KernelError> {
    positive("chi_squared", "df", df)
}

/// Support [0, ∞).
#[inline]
pub fn chi_squared_support(df: f64) -> Support {
    debug_check!(chi_squared_check(df));
    Support::Continuous { lower: 0.0, upper: f64::INFINITY }
}

#[inline]
pub fn chi_squared_density(x: f64, df: f64) -> f64 {
    debug_check!(chi_squared_check(df));
    gamma_density(x, 0.5 * df, 2.0)
}

#[inline]
pub fn chi_squared_probability(q: f64, df: f64) -> f64 {
    debug_check!(chi_squared_check(df));
    gamma_probability(q, 0.5 * df, 2.0)
}

#[inline]
pub fn chi_squared_survival(t: f64, df: f64) -> f64 {
    debug_check!(chi_squared_check(df));
    gamma_survival(t, 0.5 * df, 2.0)
}

#[inline]
pub fn chi_squared_quantile(p: f64, df: f64) -> f64 {
    if let Some(edge) = chi_squared_support(df).edge_quantile(p) {
        return edge;
    }
    gamma_quantile(p, 0.5 * df, 2.0)
}

univariate_kernels! {
    chi_squared_check, (df: f64);
    /// Chi-squared PDF over `x`, null-aware.
    chi_squared_pdf => chi_squared_density,
    /// Chi-squared CDF over `x`, null-aware.
    chi_squared_cdf => chi_squared_probability,
    /// Chi-squared survival function over `x`, null-aware.
    chi_squared_sf => chi_squared_survival,
    /// Chi-squared quantile over probabilities `x`, null-aware.
    chi_squared_ppf => chi_squared_quantile,
}
