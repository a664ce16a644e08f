// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Pareto Distribution
//!
//! Power-law tail above the minimum k with index α.
//!
//! - **PDF**: f(x) = αk^α / x^(α+1) for x ≥ k
//! - **CDF**: F(q) = 1 − (k/q)^α
//! - **Survival**: S(t) = (k/t)^α
//! - **Quantile**: Q(p) = k/(1 − p)^(1/α)

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::params::{debug_check, positive};
use crate::kernels::scientific::distributions::shared::support::Support;
use crate::kernels::scientific::distributions::univariate::common::univariate_kernels;

#[inline]
pub fn pareto_check(shape: f64, minimum: f64) -> Result<(), KernelError> {
    positive("pareto", "shape", shape)?;
    positive("pareto", "minimum", minimum)
}

/// Support [k, ∞).
#[inline]
pub fn pareto_support(shape: f64, minimum: f64) -> Support {
    debug_check!(pareto_check(shape, minimum));
    Support::Continuous { lower: minimum, upper: f64::INFINITY }
}

#[inline]
pub fn pareto_density(x: f64, shape: f64, minimum: f64) -> f64 {
    debug_check!(pareto_check(shape, minimum));
    if x.is_nan() {
        return f64::NAN;
    }
    if x < minimum || x == f64::INFINITY {
        return 0.0;
    }
    shape / x * (minimum / x).powf(shape)
}

#[inline]
pub fn pareto_probability(q: f64, shape: f64, minimum: f64) -> f64 {
    debug_check!(pareto_check(shape, minimum));
    if q <= minimum {
        return 0.0;
    }
    -(shape * (minimum / q).ln()).exp_m1()
}

#[inline]
pub fn pareto_survival(t: f64, shape: f64, minimum: f64) -> f64 {
    debug_check!(pareto_check(shape, minimum));
    if t <= minimum {
        return 1.0;
    }
    (minimum / t).powf(shape)
}

#[inline]
pub fn pareto_quantile(p: f64, shape: f64, minimum: f64) -> f64 {
    if let Some(edge) = pareto_support(shape, minimum).edge_quantile(p) {
        return edge;
    }
    minimum * (-(-p).ln_1p() / shape).exp()
}

univariate_kernels! {
    pareto_check, (shape: f64, minimum: f64);
    /// Pareto PDF over `x`, null-aware.
    pareto_pdf => pareto_density,
    /// Pareto CDF over `x`, null-aware.
    pareto_cdf => pareto_probability,
    /// Pareto survival function over `x`, null-aware.
    pareto_sf => pareto_survival,
    /// Pareto quantile over probabilities `x`, null-aware.
    pareto_ppf => pareto_quantile,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::scientific::distributions::univariate::common::{
        assert_close, common_tests,
    };

    #[test]
    fn reference_values() {
        // scipy.stats.pareto.pdf(3, 3, scale=2) == 0.2962962962962963
        assert_close(pareto_density(3.0, 3.0, 2.0), 0.2962962962962963, 1e-15);
        assert_close(pareto_probability(3.0, 3.0, 2.0), 0.7037037037037037, 1e-15);
        assert_close(pareto_survival(3.0, 3.0, 2.0), 8.0 / 27.0, 1e-15);
        // scipy.stats.pareto.ppf(0.5, 3, scale=2) == 2.5198420997897464
        assert_close(pareto_quantile(0.5, 3.0, 2.0), 2.5198420997897464, 1e-14);
    }

    #[test]
    fn below_minimum() {
        assert_eq!(pareto_density(1.9, 3.0, 2.0), 0.0);
        assert_eq!(pareto_probability(1.0, 3.0, 2.0), 0.0);
        assert_eq!(pareto_survival(2.0, 3.0, 2.0), 1.0);
        assert_eq!(pareto_quantile(0.0, 3.0, 2.0), 2.0);
        assert_eq!(pareto_density(2.0, 3.0, 2.0), 1.5);
    }

    common_tests!(pdf_common, pareto_pdf, pareto_density, (2.5, 1.0), [0.5, 1.0, 4.0]);
    common_tests!(cdf_common, pareto_cdf, pareto_probability, (2.5, 1.0), [0.5, 1.0, 4.0]);
    common_tests!(sf_common, pareto_sf, pareto_survival, (2.5, 1.0), [0.5, 1.0, 4.0]);
    common_tests!(ppf_common, pareto_ppf, pareto_quantile, (2.5, 1.0), [0.1, 0.5, 0.9]);
}
