// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Chi Distribution
//!
//! Euclidean norm of ν standard normals, X = √χ²_ν.
//!
//! - **PDF**: f(x) = x^(ν−1) exp(−x²/2) / (2^(ν/2−1) Γ(ν/2))
//! - **CDF**: F(q) = P(ν/2, q²/2)
//! - **Survival**: S(t) = Q(ν/2, t²/2)
//! - **Quantile**: Q(p) = √(χ²_ν quantile at p)

use std::f64::consts::{FRAC_2_PI, LN_2};

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::params::{debug_check, positive};
use crate::kernels::scientific::distributions::shared::scalar::{
    ln_gamma, reg_lower_gamma, reg_upper_gamma,
};
use crate::kernels::scientific::distributions::shared::support::Support;
use crate::kernels::scientific::distributions::univariate::common::univariate_kernels;
use crate::kernels::scientific::distributions::univariate::gamma::standard_gamma_quantile;

#[inline]
pub fn chi_check(df: f64) -> Result<(), KernelError> {
    positive("chi", "df", df)
}

/// Support [0, ∞).
#[inline]
pub fn chi_support(df: f64) -> Support {
    debug_check!(chi_check(df));
    Support::Continuous { lower: 0.0, upper: f64::INFINITY }
}

#[inline]
pub fn chi_density(x: f64, df: f64) -> f64 {
    debug_check!(chi_check(df));
    if x.is_nan() {
        return f64::NAN;
    }
    if x < 0.0 || x == f64::INFINITY {
        return 0.0;
    }
    if x == 0.0 {
        return if df < 1.0 {
            f64::INFINITY
        } else if df == 1.0 {
            FRAC_2_PI.sqrt()
        } else {
            0.0
        };
    }
    let k = 0.5 * df;
    ((df - 1.0) * x.ln() - 0.5 * x * x - (k - 1.0) * LN_2 - ln_gamma(k)).exp()
}

#[inline]
pub fn chi_probability(q: f64, df: f64) -> f64 {
    debug_check!(chi_check(df));
    if q <= 0.0 {
        return 0.0;
    }
    reg_lower_gamma(0.5 * df, 0.5 * q * q)
}

#[inline]
pub fn chi_survival(t: f64, df: f64) -> f64 {
    debug_check!(chi_check(df));
    if t <= 0.0 {
        return 1.0;
    }
    reg_upper_gamma(0.5 * df, 0.5 * t * t)
}

#[inline]
pub fn chi_quantile(p: f64, df: f64) -> f64 {
    if let Some(edge) = chi_support(df).edge_quantile(p) {
        return edge;
    }
    (2.0 * standard_gamma_quantile(p, 0.5 * df)).sqrt()
}

univariate_kernels! {
    chi_check, (df: f64);
    /// Chi PDF over `x`, null-aware.
    chi_pdf => chi_density,
    /// Chi CDF over `x`, null-aware.
    chi_cdf => chi_probability,
    /// Chi survival function over `x`, null-aware.
    chi_sf => chi_survival,
    /// Chi quantile over probabilities `x`, null-aware.
    chi_ppf => chi_quantile,
}
