// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Rayleigh Distribution
//!
//! Magnitude of a two-dimensional isotropic normal vector.
//!
//! - **PDF**: f(x) = (x/σ²) exp(−x²/(2σ²))
//! - **CDF**: F(q) = 1 − exp(−q²/(2σ²))
//! - **Survival**: S(t) = exp(−t²/(2σ²))
//! - **Quantile**: Q(p) = σ√(−2 ln(1 − p))

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::params::{debug_check, positive};
use crate::kernels::scientific::distributions::shared::support::Support;
use crate::kernels::scientific::distributions::univariate::common::univariate_kernels;

#[inline]
pub fn rayleigh_check(scale: f64) -> Result<(), KernelError> {
    positive("rayleigh", "scale", scale)
}

/// Support [0, ∞).
#[inline]
pub fn rayleigh_support(scale: f64) -> Support {
    debug_check!(rayleigh_check(scale));
    Support::Continuous { lower: 0.0, upper: f64::INFINITY }
}

#[inline]
pub fn rayleigh_density(x: f64, scale: f64) -> f64 {
    debug_check!(rayleigh_check(scale));
    if x.is_nan() {
        return f64::NAN;
    }
    if x < 0.0 || x == f64::INFINITY {
        return 0.0;
    }
    let z = x / scale;
    z / scale * (-0.5 * z * z).exp()
}

#[inline]
pub fn rayleigh_probability(q: f64, scale: f64) -> f64 {
    debug_check!(rayleigh_check(scale));
    if q <= 0.0 {
        return 0.0;
    }
    let z = q / scale;
    -(-0.5 * z * z).exp_m1()
}

#[inline]
pub fn rayleigh_survival(t: f64, scale: f64) -> f64 {
    debug_check!(rayleigh_check(scale));
    if t <= 0.0 {
        return 1.0;
    }
    let z = t / scale;
    (-0.5 * z * z).exp()
}

#[inline]
pub fn rayleigh_quantile(p: f64, scale: f64) -> f64 {
    if let Some(edge) = rayleigh_support(scale).edge_quantile(p) {
        return edge;
    }
    scale * (-2.0 * (-p).ln_1p()).sqrt()
}

univariate_kernels! {
    rayleigh_check, (scale: f64);
    /// Rayleigh PDF over `x`, null-aware.
    rayleigh_pdf => rayleigh_density,
    /// Rayleigh CDF over `x`, null-aware.
    rayleigh_cdf => rayleigh_probability,
    /// Rayleigh survival function over `x`, null-aware.
    rayleigh_sf => rayleigh_survival,
    /// Rayleigh quantile over probabilities `x`, null-aware.
    rayleigh_ppf => rayleigh_quantile,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::scientific::distributions::univariate::common::{
        assert_close, common_tests,
    };

    #[test]
    fn reference_values() {
        // scipy.stats.rayleigh.pdf(1, scale=2) == 0.22062422564614886
        assert_close(rayleigh_density(1.0, 2.0), 0.22062422564614886, 1e-16);
        // scipy.stats.rayleigh.sf(3, scale=2) == 0.32465246735834974
        assert_close(rayleigh_survival(3.0, 2.0), 0.32465246735834974, 1e-16);
        assert_close(rayleigh_probability(3.0, 2.0), 1.0 - 0.32465246735834974, 1e-15);
        // scipy.stats.rayleigh.ppf(0.3, scale=2) == 1.689200861801183
        assert_close(rayleigh_quantile(0.3, 2.0), 1.689200861801183, 1e-14);
    }

    #[test]
    fn origin_and_infinity() {
        assert_eq!(rayleigh_density(0.0, 1.0), 0.0);
        assert_eq!(rayleigh_density(f64::INFINITY, 1.0), 0.0);
        assert_eq!(rayleigh_probability(0.0, 1.0), 0.0);
        assert_eq!(rayleigh_quantile(1.0, 1.0), f64::INFINITY);
    }

    common_tests!(pdf_common, rayleigh_pdf, rayleigh_density, (1.5), [0.0, 1.0, 4.0]);
    common_tests!(cdf_common, rayleigh_cdf, rayleigh_probability, (1.5), [0.0, 1.0, 4.0]);
    common_tests!(sf_common, rayleigh_sf, rayleigh_survival, (1.5), [0.0, 1.0, 4.0]);
    common_tests!(ppf_common, rayleigh_ppf, rayleigh_quantile, (1.5), [0.1, 0.5, 0.9]);
}
