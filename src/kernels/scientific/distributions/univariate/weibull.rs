// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Weibull Distribution
//!
//! Lifetime law with shape α and scale σ; α = 1 is the exponential, α = 2 the Rayleigh up to
//! a rescaling.
//!
//! - **PDF**: f(x) = (α/σ)(x/σ)^(α−1) exp(−(x/σ)^α)
//! - **CDF**: F(q) = 1 − exp(−(q/σ)^α)
//! - **Survival**: S(t) = exp(−(t/σ)^α)
//! - **Quantile**: Q(p) = σ(−ln(1 − p))^(1/α)

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::params::{debug_check, positive};
use crate::kernels::scientific::distributions::shared::support::Support;
use crate::kernels::scientific::distributions::univariate::common::univariate_kernels;

#[inline]
pub fn weibull_check(shape: f64, scale: f64) -> Result<(), KernelError> {
    positive("weibull", "shape", shape)?;
    positive("weibull", "scale", scale)
}

/// Support [0, ∞).
#[inline]
pub fn weibull_support(shape: f64, scale: f64) -> Support {
    debug_check!(weibull_check(shape, scale));
    Support::Continuous { lower: 0.0, upper: f64::INFINITY }
}

/// Density; at x = 0 it is +∞ for α < 1, 1/σ for α = 1 and 0 for α > 1.
#[inline]
pub fn weibull_density(x: f64, shape: f64, scale: f64) -> f64 {
    debug_check!(weibull_check(shape, scale));
    if x.is_nan() {
        return f64::NAN;
    }
    if x < 0.0 || x == f64::INFINITY {
        return 0.0;
    }
    if x == 0.0 {
        return if shape < 1.0 {
            f64::INFINITY
        } else if shape == 1.0 {
            1.0 / scale
        } else {
            0.0
        };
    }
    let z = x / scale;
    let zk = z.powf(shape);
    if zk == f64::INFINITY {
        return 0.0;
    }
    shape / x * zk * (-zk).exp()
}

#[inline]
pub fn weibull_probability(q: f64, shape: f64, scale: f64) -> f64 {
    debug_check!(weibull_check(shape, scale));
    if q <= 0.0 {
        return 0.0;
    }
    -(-(q / scale).powf(shape)).exp_m1()
}

#[inline]
pub fn weibull_survival(t: f64, shape: f64, scale: f64) -> f64 {
    debug_check!(weibull_check(shape, scale));
    if t <= 0.0 {
        return 1.0;
    }
    (-(t / scale).powf(shape)).exp()
}

#[inline]
pub fn weibull_quantile(p: f64, shape: f64, scale: f64) -> f64 {
    if let Some(edge) = weibull_support(shape, scale).edge_quantile(p) {
        return edge;
    }
    scale * (-(-p).ln_1p()).powf(1.0 / shape)
}

univariate_kernels! {
    weibull_check, (shape: f64, scale: f64);
    /// Weibull PDF over `x`, null-aware.
    weibull_pdf => weibull_density,
    /// Weibull CDF over `x`, null-aware.
    weibull_cdf => weibull_probability,
    /// Weibull survival function over `x`, null-aware.
    weibull_sf => weibull_survival,
    /// Weibull quantile over probabilities `x`, null-aware.
    weibull_ppf => weibull_quantile,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::scientific::distributions::univariate::common::{
        assert_close, common_tests,
    };

    #[test]
    fn reference_values() {
        // scipy.stats.weibull_min.pdf(1, 1.5, scale=2) == 0.37239168821942198
        assert_close(weibull_density(1.0, 1.5, 2.0), 0.37239168821942198, 1e-15);
        // scipy.stats.weibull_min.cdf(1, 1.5, scale=2) == 0.2978114986734404
        assert_close(weibull_probability(1.0, 1.5, 2.0), 0.2978114986734404, 1e-15);
        assert_close(weibull_survival(1.0, 1.5, 2.0), 1.0 - 0.2978114986734404, 1e-15);
        // scipy.stats.weibull_min.ppf(0.3, 1.5, scale=2) == 1.0058774298314368
        assert_close(weibull_quantile(0.3, 1.5, 2.0), 1.0058774298314368, 1e-14);
    }

    #[test]
    fn density_at_origin() {
        assert_eq!(weibull_density(0.0, 0.5, 1.0), f64::INFINITY);
        assert_eq!(weibull_density(0.0, 1.0, 4.0), 0.25);
        assert_eq!(weibull_density(0.0, 3.0, 1.0), 0.0);
    }

    #[test]
    fn unit_shape_matches_exponential() {
        for &x in &[0.1, 1.0, 5.0] {
            assert_close(weibull_probability(x, 1.0, 2.0), -(-x / 2.0f64).exp_m1(), 1e-15);
        }
    }

    common_tests!(pdf_common, weibull_pdf, weibull_density, (2.0, 1.5), [0.0, 1.0, 3.0]);
    common_tests!(cdf_common, weibull_cdf, weibull_probability, (2.0, 1.5), [0.0, 1.0, 3.0]);
    common_tests!(sf_common, weibull_sf, weibull_survival, (2.0, 1.5), [0.0, 1.0, 3.0]);
    common_tests!(ppf_common, weibull_ppf, weibull_quantile, (2.0, 1.5), [0.1, 0.5, 0.9]);
}
