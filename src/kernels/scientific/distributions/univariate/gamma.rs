// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Gamma Distribution
//!
//! The gamma distribution is a two-parameter continuous probability distribution widely used in
//! statistical modelling of positive-valued random variables. It generalises the exponential
//! (α = 1) and chi-squared (σ = 2) laws.
//!
//! ## Mathematical Definition
//!
//! Shape α and scale σ, both strictly positive:
//!
//! - **PDF**: f(x; α, σ) = (x/σ)^(α−1) exp(−x/σ) / (σΓ(α)) for x ≥ 0
//! - **CDF**: F(q) = P(α, q/σ), the regularised lower incomplete gamma
//! - **Survival**: S(t) = Q(α, t/σ), evaluated directly
//! - **Quantile**: no closed form; the pair (P, Q) is inverted with the shared solver,
//!   seeded by the Wilson–Hilferty cube-root approximation
//!
//! ## Common Applications
//!
//! - **Reliability engineering**: Time-to-failure analysis
//! - **Queuing theory**: Waiting time until the α-th Poisson event
//! - **Bayesian statistics**: Conjugate prior for precision parameters

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::params::{debug_check, positive};
use crate::kernels::scientific::distributions::shared::scalar::{
    gamma_pdf_scalar, ln_gamma, normal_quantile_scalar, reg_lower_gamma, reg_upper_gamma,
};
use crate::kernels::scientific::distributions::shared::solver::invert_continuous;
use crate::kernels::scientific::distributions::shared::support::Support;
use crate::kernels::scientific::distributions::univariate::common::univariate_kernels;

#[inline]
pub fn gamma_check(shape: f64, scale: f64) -> Result<(), KernelError> {
    positive("gamma", "shape", shape)?;
    positive("gamma", "scale", scale)
}

/// Support [0, ∞).
#[inline]
pub fn gamma_support(shape: f64, scale: f64) -> Support {
    debug_check!(gamma_check(shape, scale));
    Support::Continuous { lower: 0.0, upper: f64::INFINITY }
}

/// Density; at x = 0 it is +∞ for α < 1, 1/σ for α = 1 and 0 for α > 1.
#[inline]
pub fn gamma_density(x: f64, shape: f64, scale: f64) -> f64 {
    debug_check!(gamma_check(shape, scale));
    gamma_pdf_scalar(shape, x / scale) / scale
}

#[inline]
pub fn gamma_probability(q: f64, shape: f64, scale: f64) -> f64 {
    debug_check!(gamma_check(shape, scale));
    if q <= 0.0 {
        return 0.0;
    }
    reg_lower_gamma(shape, q / scale)
}

#[inline]
pub fn gamma_survival(t: f64, shape: f64, scale: f64) -> f64 {
    debug_check!(gamma_check(shape, scale));
    if t <= 0.0 {
        return 1.0;
    }
    reg_upper_gamma(shape, t / scale)
}

/// Starting point for inverting P(α, ·) at p.
///
/// Wilson–Hilferty in the body; for small shapes in the lower tail the leading series term
/// P(α, x) ≈ x^α / Γ(α + 1) is inverted instead.
#[inline]
pub(crate) fn standard_gamma_guess(p: f64, shape: f64) -> f64 {
    let c = 1.0 / (9.0 * shape);
    let z = normal_quantile_scalar(p);
    let wh = shape * (1.0 - c + z * c.sqrt()).powi(3);
    let head = ((p.ln() + ln_gamma(shape + 1.0)) / shape).exp();
    if wh.is_finite() && wh > 0.0 && (shape >= 1.0 || head >= 1.0) {
        wh
    } else if head.is_finite() && head > 0.0 {
        head
    } else {
        shape
    }
}

/// Quantile of the standard (σ = 1) gamma law.
#[inline]
pub(crate) fn standard_gamma_quantile(p: f64, shape: f64) -> f64 {
    invert_continuous(
        p,
        0.0,
        f64::INFINITY,
        standard_gamma_guess(p, shape),
        |x| reg_lower_gamma(shape, x),
        |x| reg_upper_gamma(shape, x),
        |x| gamma_pdf_scalar(shape, x),
    )
}

#[inline]
pub fn gamma_quantile(p: f64, shape: f64, scale: f64) -> f64 {
    if let Some(edge) = gamma_support(shape, scale).edge_quantile(p) {
        return edge;
    }
    scale * standard_gamma_quantile(p, shape)
}

univariate_kernels! {
    gamma_check, (shape: f64, scale: f64);
    /// Gamma PDF over `x`, null-aware.
    gamma_pdf => gamma_density,
    /// Gamma CDF over `x`, null-aware.
    gamma_cdf => gamma_probability,
    /// Gamma survival function over `x`, null-aware.
    gamma_sf => gamma_survival,
    /// Gamma quantile over probabilities `x`, null-aware.
    gamma_ppf => gamma_quantile,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::scientific::distributions::univariate::common::{
        assert_close, common_tests,
    };

    // see "./tests" for the scipy suite

    #[test]
    fn reference_values() {
        // scipy.stats.gamma.pdf(3, 2.5, scale=1.5) == 0.19196788093577974
        assert_close(gamma_density(3.0, 2.5, 1.5), 0.19196788093577974, 1e-15);
        // scipy.stats.gamma.cdf(3, 2.5, scale=1.5) == 0.4505840486472198
        assert_close(gamma_probability(3.0, 2.5, 1.5), 0.4505840486472198, 1e-15);
        // scipy.stats.gamma.ppf(0.9, 2.5, scale=1.5) == 6.927267674835839
        assert_close(gamma_quantile(0.9, 2.5, 1.5), 6.927267674835839, 1e-12);
    }

    #[test]
    fn survival_tail_keeps_relative_precision() {
        // scipy.stats.gamma.sf(40, 2.5, scale=1.5) == 2.872917588736244e-10
        let s = gamma_survival(40.0, 2.5, 1.5);
        assert!((s / 2.872917588736244e-10 - 1.0).abs() < 1e-12, "{s}");
    }

    #[test]
    fn unit_shape_is_exponential() {
        for &x in &[0.2, 1.0, 7.5] {
            assert_close(gamma_probability(x, 1.0, 2.0), -(-x / 2.0f64).exp_m1(), 1e-15);
            assert_close(gamma_density(x, 1.0, 2.0), (-x / 2.0f64).exp() / 2.0, 1e-15);
        }
    }

    #[test]
    fn density_at_origin() {
        assert_eq!(gamma_density(0.0, 0.5, 1.0), f64::INFINITY);
        assert_eq!(gamma_density(0.0, 1.0, 4.0), 0.25);
        assert_eq!(gamma_density(0.0, 3.0, 1.0), 0.0);
        assert_eq!(gamma_density(-1.0, 3.0, 1.0), 0.0);
    }

    #[test]
    fn quantile_round_trip_across_shapes() {
        for &shape in &[0.05, 0.5, 1.0, 7.0, 250.0] {
            for &p in &[1e-8, 0.01, 0.5, 0.9] {
                let x = gamma_quantile(p, shape, 2.0);
                let back = gamma_probability(x, shape, 2.0);
                assert!((back - p).abs() <= 1e-10 * p.max(1e-300) + 1e-15, "shape {shape} p {p}: {back}");
            }
            let x = gamma_quantile(1.0 - 1e-9, shape, 2.0);
            let s = gamma_survival(x, shape, 2.0);
            assert!((s / 1e-9 - 1.0).abs() < 1e-6, "shape {shape} upper: {s}");
        }
    }

    #[test]
    fn quantile_edges() {
        assert_eq!(gamma_quantile(0.0, 2.0, 1.0), 0.0);
        assert_eq!(gamma_quantile(1.0, 2.0, 1.0), f64::INFINITY);
        assert!(gamma_quantile(f64::NAN, 2.0, 1.0).is_nan());
    }

    common_tests!(pdf_common, gamma_pdf, gamma_density, (2.0, 1.5), [0.0, 1.0, 4.0]);
    common_tests!(cdf_common, gamma_cdf, gamma_probability, (2.0, 1.5), [0.0, 1.0, 4.0]);
    common_tests!(sf_common, gamma_sf, gamma_survival, (2.0, 1.5), [0.0, 1.0, 4.0]);
    common_tests!(ppf_common, gamma_ppf, gamma_quantile, (2.0, 1.5), [0.1, 0.5, 0.9]);
}
