// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Student's t Distribution
//!
//! Ratio of a standard normal to the root of an independent χ²_ν / ν. Heavier tailed than
//! the normal for small ν and converging to it as ν → ∞; ν = 1 is the standard Cauchy.
//!
//! ## Mathematical Definition
//! - **PDF**: f(t) = (1 + t²/ν)^(−(ν+1)/2) / (√ν B(ν/2, ½))
//! - **Tail**: P(T < −|t|) = ½ I_{ν/(ν+t²)}(ν/2, ½)
//! - **CDF**: the tail for t < 0, one minus the tail otherwise; S(t) = F(−t)
//! - **Quantile**: the inverse incomplete beta at 2·min(p, 1 − p)
//!
//! For |t| < √ν the tail is formed from I_{t²/(ν+t²)}(½, ν/2) instead, so the argument of the
//! incomplete beta is never the rounded complement of a small number.

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::params::{debug_check, positive};
use crate::kernels::scientific::distributions::shared::scalar::{
    incomplete_beta, incomplete_beta_pair, inverse_incomplete_beta, ln_beta,
};
use crate::kernels::scientific::distributions::shared::support::Support;
use crate::kernels::scientific::distributions::univariate::common::univariate_kernels;

#[inline]
pub fn t_check(df: f64) -> Result<(), KernelError> {
    positive("t", "df", df)
}

/// Support ℝ.
#[inline]
pub fn t_support(df: f64) -> Support {
    debug_check!(t_check(df));
    Support::Continuous { lower: f64::NEG_INFINITY, upper: f64::INFINITY }
}

#[inline]
pub fn t_density(x: f64, df: f64) -> f64 {
    debug_check!(t_check(df));
    (-0.5 * (df + 1.0) * (x * x / df).ln_1p() - 0.5 * df.ln() - ln_beta(0.5 * df, 0.5)).exp()
}

/// P(T < −|t|).
#[inline(always)]
fn lower_tail(t: f64, df: f64) -> f64 {
    let t2 = t * t;
    if t2 < df {
        0.5 * incomplete_beta_pair(0.5, 0.5 * df, t2 / (df + t2)).complement
    } else {
        0.5 * incomplete_beta(0.5 * df, 0.5, df / (df + t2))
    }
}

#[inline]
pub fn t_probability(q: f64, df: f64) -> f64 {
    debug_check!(t_check(df));
    if q.is_nan() {
        return f64::NAN;
    }
    let tail = lower_tail(q, df);
    if q < 0.0 { tail } else { 1.0 - tail }
}

#[inline]
pub fn t_survival(t: f64, df: f64) -> f64 {
    debug_check!(t_check(df));
    if t.is_nan() {
        return f64::NAN;
    }
    let tail = lower_tail(t, df);
    if t > 0.0 { tail } else { 1.0 - tail }
}

#[inline]
pub fn t_quantile(p: f64, df: f64) -> f64 {
    if let Some(edge) = t_support(df).edge_quantile(p) {
        return edge;
    }
    if p == 0.5 {
        return 0.0;
    }
    let tail = p.min(1.0 - p);
    // x = ν/(ν + t²) and y = t²/(ν + t²), each solved at full precision
    let (x, y) = inverse_incomplete_beta(0.5 * df, 0.5, 2.0 * tail, 1.0 - 2.0 * tail);
    let magnitude = (df * y / x).sqrt();
    if p < 0.5 { -magnitude } else { magnitude }
}

univariate_kernels! {
    t_check, (df: f64);
    /// Student's t PDF over `x`, null-aware.
    t_pdf => t_density,
    /// Student's t CDF over `x`, null-aware.
    t_cdf => t_probability,
    /// Student's t survival function over `x`, null-aware.
    t_sf => t_survival,
    /// Student's t quantile over probabilities `x`, null-aware.
    t_ppf => t_quantile,
}
