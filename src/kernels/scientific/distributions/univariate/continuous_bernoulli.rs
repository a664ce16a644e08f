// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Continuous Bernoulli Distribution
//!
//! Exponential-family law on [0, 1] with density proportional to λ^x (1 − λ)^(1−x).
//!
//! - **PDF**: f(x) = 2 artanh(1 − 2λ)/(1 − 2λ) · λ^x (1 − λ)^(1−x)
//! - **CDF**: F(q) = (λ^q (1 − λ)^(1−q) + λ − 1)/(2λ − 1)
//! - **Survival**: S(t) = (λ − λ^t (1 − λ)^(1−t))/(2λ − 1)
//! - **Quantile**: Q(p) = ln(((2λ − 1)p − λ + 1)/(1 − λ)) / ln(λ/(1 − λ))
//!
//! ## Evaluation
//! With the log-odds L = ln(λ/(1 − λ)) every form collapses to exponentials of multiples of L:
//!
//! ```text
//! f(x) = L e^(xL) / expm1(L)
//! F(q) = expm1(qL) / expm1(L)
//! S(t) = e^(tL) expm1((1 − t)L) / expm1(L)
//! ```
//!
//! which stay well-conditioned as λ → ½ (L → 0) and reduce to the uniform law at λ = ½.

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::params::{debug_check, open_probability};
use crate::kernels::scientific::distributions::shared::support::Support;
use crate::kernels::scientific::distributions::univariate::common::univariate_kernels;

#[inline]
pub fn continuous_bernoulli_check(shape: f64) -> Result<(), KernelError> {
    open_probability("continuous_bernoulli", "shape", shape)
}

/// Support [0, 1].
#[inline]
pub fn continuous_bernoulli_support(shape: f64) -> Support {
    debug_check!(continuous_bernoulli_check(shape));
    Support::Continuous { lower: 0.0, upper: 1.0 }
}

#[inline(always)]
fn log_odds(shape: f64) -> f64 {
    shape.ln() - (-shape).ln_1p()
}

#[inline]
pub fn continuous_bernoulli_density(x: f64, shape: f64) -> f64 {
    debug_check!(continuous_bernoulli_check(shape));
    if x.is_nan() {
        return f64::NAN;
    }
    if !(0.0..=1.0).contains(&x) {
        return 0.0;
    }
    let l = log_odds(shape);
    if l == 0.0 {
        return 1.0;
    }
    l * (x * l).exp() / l.exp_m1()
}

#[inline]
pub fn continuous_bernoulli_probability(q: f64, shape: f64) -> f64 {
    debug_check!(continuous_bernoulli_check(shape));
    if q.is_nan() {
        return f64::NAN;
    }
    if q <= 0.0 {
        return 0.0;
    }
    if q >= 1.0 {
        return 1.0;
    }
    let l = log_odds(shape);
    if l == 0.0 {
        return q;
    }
    (q * l).exp_m1() / l.exp_m1()
}

#[inline]
pub fn continuous_bernoulli_survival(t: f64, shape: f64) -> f64 {
    debug_check!(continuous_bernoulli_check(shape));
    if t.is_nan() {
        return f64::NAN;
    }
    if t <= 0.0 {
        return 1.0;
    }
    if t >= 1.0 {
        return 0.0;
    }
    let l = log_odds(shape);
    if l == 0.0 {
        return 1.0 - t;
    }
    (t * l).exp() * ((1.0 - t) * l).exp_m1() / l.exp_m1()
}

/// Quantile; above the median it is solved on the reflected law (λ → 1 − λ, p → 1 − p).
#[inline]
pub fn continuous_bernoulli_quantile(p: f64, shape: f64) -> f64 {
    if let Some(edge) = continuous_bernoulli_support(shape).edge_quantile(p) {
        return edge;
    }
    let l = log_odds(shape);
    if l == 0.0 {
        return p;
    }
    let x = if p <= 0.5 {
        (p * l.exp_m1()).ln_1p() / l
    } else {
        1.0 - ((1.0 - p) * (-l).exp_m1()).ln_1p() / -l
    };
    x.max(0.0).min(1.0)
}

univariate_kernels! {
    continuous_bernoulli_check, (shape: f64);
    /// Continuous Bernoulli PDF over `x`, null-aware.
    continuous_bernoulli_pdf => continuous_bernoulli_density,
    /// Continuous Bernoulli CDF over `x`, null-aware.
    continuous_bernoulli_cdf => continuous_bernoulli_probability,
    /// Continuous Bernoulli survival function over `x`, null-aware.
    continuous_bernoulli_sf => continuous_bernoulli_survival,
    /// Continuous Bernoulli quantile over probabilities `x`, null-aware.
    continuous_bernoulli_ppf => continuous_bernoulli_quantile,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::scientific::distributions::univariate::common::{
        assert_close, common_tests,
    };

    #[test]
    fn reference_values() {
        // λ = 0.2, direct evaluation of the defining formulas at 30 digits
        assert_close(continuous_bernoulli_density(0.3, 0.2), 1.2194842507717007, 1e-14);
        assert_close(continuous_bernoulli_probability(0.3, 0.2), 0.4536613928180705, 1e-15);
        assert_close(continuous_bernoulli_survival(0.3, 0.2), 0.5463386071819295, 1e-15);
        assert_close(continuous_bernoulli_quantile(0.7, 0.2), 0.5370002907218884, 1e-14);
    }

    #[test]
    fn near_half_is_well_conditioned() {
        let f = continuous_bernoulli_probability(0.3, 0.5 + 1e-9);
        assert_close(f, 0.29999999958, 1e-12);
        assert_eq!(continuous_bernoulli_density(0.7, 0.5), 1.0);
        assert_eq!(continuous_bernoulli_quantile(0.25, 0.5), 0.25);
    }

    #[test]
    fn quantile_round_trip() {
        for &lambda in &[0.05, 0.3, 0.8] {
            for &p in &[0.01, 0.4, 0.6, 0.99] {
                let x = continuous_bernoulli_quantile(p, lambda);
                assert_close(continuous_bernoulli_probability(x, lambda), p, 1e-13);
            }
        }
    }

    #[test]
    fn support_edges() {
        assert_eq!(continuous_bernoulli_density(1.5, 0.2), 0.0);
        assert_eq!(continuous_bernoulli_probability(1.0, 0.2), 1.0);
        assert_eq!(continuous_bernoulli_survival(0.0, 0.2), 1.0);
        assert_eq!(continuous_bernoulli_quantile(1.0, 0.2), 1.0);
        assert!(continuous_bernoulli_check(0.0).is_err());
        assert!(continuous_bernoulli_check(1.0).is_err());
    }

    common_tests!(pdf_common, continuous_bernoulli_pdf, continuous_bernoulli_density, (0.3), [0.0, 0.4, 1.0]);
    common_tests!(cdf_common, continuous_bernoulli_cdf, continuous_bernoulli_probability, (0.3), [0.0, 0.4, 1.0]);
    common_tests!(sf_common, continuous_bernoulli_sf, continuous_bernoulli_survival, (0.3), [0.0, 0.4, 1.0]);
    common_tests!(ppf_common, continuous_bernoulli_ppf, continuous_bernoulli_quantile, (0.3), [0.1, 0.5, 0.9]);
}
