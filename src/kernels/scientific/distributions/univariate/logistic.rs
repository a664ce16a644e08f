// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Logistic Distribution
//!
//! - **PDF**: f(x) = e^(−z)/(σ(1 + e^(−z))²), z = (x − μ)/σ
//! - **CDF**: F(q) = 1/(1 + e^(−z)), the sigmoid
//! - **Survival**: S(t) = 1/(1 + e^(z))
//! - **Quantile**: Q(p) = μ + σ ln(p/(1 − p))

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::params::{debug_check, finite, positive};
use crate::kernels::scientific::distributions::shared::scalar::sigmoid;
use crate::kernels::scientific::distributions::shared::support::Support;
use crate::kernels::scientific::distributions::univariate::common::univariate_kernels;

#[inline]
pub fn logistic_check(location: f64, scale: f64) -> Result<(), KernelError> {
    finite("logistic", "location", location)?;
    positive("logistic", "scale", scale)
}

/// Support (−∞, ∞).
#[inline]
pub fn logistic_support(location: f64, scale: f64) -> Support {
    debug_check!(logistic_check(location, scale));
    Support::Continuous { lower: f64::NEG_INFINITY, upper: f64::INFINITY }
}

/// Density, written in terms of e^(−|z|) so neither tail overflows.
#[inline]
pub fn logistic_density(x: f64, location: f64, scale: f64) -> f64 {
    debug_check!(logistic_check(location, scale));
    let e = (-((x - location) / scale).abs()).exp();
    let d = 1.0 + e;
    e / (scale * d * d)
}

#[inline]
pub fn logistic_probability(q: f64, location: f64, scale: f64) -> f64 {
    debug_check!(logistic_check(location, scale));
    sigmoid((q - location) / scale)
}

#[inline]
pub fn logistic_survival(t: f64, location: f64, scale: f64) -> f64 {
    debug_check!(logistic_check(location, scale));
    sigmoid((location - t) / scale)
}

#[inline]
pub fn logistic_quantile(p: f64, location: f64, scale: f64) -> f64 {
    if let Some(edge) = logistic_support(location, scale).edge_quantile(p) {
        return edge;
    }
    location + scale * (p.ln() - (-p).ln_1p())
}

univariate_kernels! {
    logistic_check, (location: f64, scale: f64);
    /// Logistic PDF over `x`, null-aware.
    logistic_pdf => logistic_density,
    /// Logistic CDF over `x`, null-aware.
    logistic_cdf => logistic_probability,
    /// Logistic survival function over `x`, null-aware.
    logistic_sf => logistic_survival,
    /// Logistic quantile over probabilities `x`, null-aware.
    logistic_ppf => logistic_quantile,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::scientific::distributions::univariate::common::{
        assert_close, common_tests,
    };

    #[test]
    fn reference_values() {
        // scipy.stats.logistic.pdf(1.0) == 0.19661193324148185
        assert_close(logistic_density(1.0, 0.0, 1.0), 0.19661193324148185, 1e-16);
        assert_close(logistic_density(-1.0, 0.0, 1.0), 0.19661193324148185, 1e-16);
        assert_eq!(logistic_probability(3.0, 3.0, 2.0), 0.5);
        // scipy.stats.logistic.sf(40) == 4.248354255291589e-18
        let s = logistic_survival(40.0, 0.0, 1.0);
        assert!((s - 4.248354255291589e-18).abs() < 1e-30, "{s}");
        // scipy.stats.logistic.ppf(0.2, 1, 2) == -1.772588722239781
        assert_close(logistic_quantile(0.2, 1.0, 2.0), -1.772588722239781, 1e-14);
    }

    #[test]
    fn extreme_arguments_do_not_overflow() {
        assert_eq!(logistic_density(1e6, 0.0, 1.0), 0.0);
        assert_eq!(logistic_probability(-1e6, 0.0, 1.0), 0.0);
        assert_eq!(logistic_probability(1e6, 0.0, 1.0), 1.0);
    }

    common_tests!(pdf_common, logistic_pdf, logistic_density, (1.0, 0.5), [-3.0, 1.0, 4.0]);
    common_tests!(cdf_common, logistic_cdf, logistic_probability, (1.0, 0.5), [-3.0, 1.0, 4.0]);
    common_tests!(sf_common, logistic_sf, logistic_survival, (1.0, 0.5), [-3.0, 1.0, 4.0]);
    common_tests!(ppf_common, logistic_ppf, logistic_quantile, (1.0, 0.5), [0.1, 0.5, 0.9]);
}
