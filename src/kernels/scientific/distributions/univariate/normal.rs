// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Normal Distribution Module** - *Gaussian Distribution, Central Limit Foundation*
//!
//! - **PDF**: f(x) = exp(−z²/2)/(σ√(2π)), z = (x − μ)/σ
//! - **CDF**: F(q) = Φ(z), through Q(½, z²/2) so the lower tail keeps relative precision
//! - **Survival**: S(t) = Φ(−z)
//! - **Quantile**: Q(p) = μ + σΦ⁻¹(p), Acklam's rational seed refined by one Halley step
//!
//! ## Usage Examples
//! ```rust,ignore
//! use minarrow::vec64;
//! use rv_kernels::kernels::scientific::distributions::univariate::normal::*;
//!
//! let x = vec64![-2.0, -1.0, 0.0, 1.0, 2.0];
//! let pdf = normal_pdf(&x, 0.0, 1.0, None, None).unwrap();
//! let z = normal_quantile(0.975, 0.0, 1.0); // ≈ 1.959964
//! ```

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::constants::SQRT_2PI;
use crate::kernels::scientific::distributions::shared::params::{debug_check, finite, positive};
use crate::kernels::scientific::distributions::shared::scalar::{
    normal_cdf_scalar, normal_quantile_scalar,
};
use crate::kernels::scientific::distributions::shared::support::Support;
use crate::kernels::scientific::distributions::univariate::common::univariate_kernels;

#[inline]
pub fn normal_check(location: f64, scale: f64) -> Result<(), KernelError> {
    finite("normal", "location", location)?;
    positive("normal", "scale", scale)
}

/// Support (−∞, ∞).
#[inline]
pub fn normal_support(location: f64, scale: f64) -> Support {
    debug_check!(normal_check(location, scale));
    Support::Continuous { lower: f64::NEG_INFINITY, upper: f64::INFINITY }
}

#[inline]
pub fn normal_density(x: f64, location: f64, scale: f64) -> f64 {
    debug_check!(normal_check(location, scale));
    let z = (x - location) / scale;
    (-0.5 * z * z).exp() / (scale * SQRT_2PI)
}

#[inline]
pub fn normal_probability(q: f64, location: f64, scale: f64) -> f64 {
    debug_check!(normal_check(location, scale));
    normal_cdf_scalar((q - location) / scale)
}

#[inline]
pub fn normal_survival(t: f64, location: f64, scale: f64) -> f64 {
    debug_check!(normal_check(location, scale));
    normal_cdf_scalar((location - t) / scale)
}

/// location + scale·Φ⁻¹(p), with Φ⁻¹ from Acklam's approximation refined by one Halley step.
#[inline]
pub fn normal_quantile(p: f64, location: f64, scale: f64) -> f64 {
    if let Some(edge) = normal_support(location, scale).edge_quantile(p) {
        return edge;
    }
    location + scale * normal_quantile_scalar(p)
}

univariate_kernels! {
    normal_check, (location: f64, scale: f64);
    /// Normal PDF over `x`, null-aware.
    normal_pdf => normal_density,
    /// Normal CDF over `x`, null-aware.
    normal_cdf => normal_probability,
    /// Normal survival function over `x`, null-aware.
    normal_sf => normal_survival,
    /// Normal quantile over probabilities `x`, null-aware.
    normal_ppf => normal_quantile,
}

#[cfg(test)]
mod tests {
    use minarrow::vec64;

    use super::*;
    use crate::kernels::scientific::distributions::univariate::common::{
        assert_close, common_tests, dense_data,
    };

    // see "./tests" for the scipy suite

    #[test]
    fn centre_is_exact() {
        assert_eq!(normal_quantile(0.5, 5.0, 2.0), 5.0);
        assert_eq!(normal_probability(5.0, 5.0, 2.0), 0.5);
        assert_eq!(normal_survival(5.0, 5.0, 2.0), 0.5);
    }

    #[test]
    fn reference_values() {
        // scipy.stats.norm.pdf(1) == 0.24197072451914337
        assert_close(normal_density(1.0, 0.0, 1.0), 0.24197072451914337, 1e-16);
        assert_close(normal_density(7.0, 5.0, 2.0), 0.12098536225957168, 1e-16);
        // scipy.stats.norm.cdf(-3) == 0.0013498980316300946
        assert_close(normal_probability(-3.0, 0.0, 1.0), 0.0013498980316300946, 1e-17);
        assert_close(normal_probability(1.5, 1.0, 2.0), 0.5987063256829237, 1e-15);
        // scipy.stats.norm.ppf(0.025, 5, 2) == 1.0800720309198915
        assert_close(normal_quantile(0.025, 5.0, 2.0), 1.0800720309198915, 1e-13);
    }

    #[test]
    fn survival_upper_tail() {
        // scipy.stats.norm.sf(8.5) == 9.479534822203367e-18
        let s = normal_survival(8.5, 0.0, 1.0);
        assert!((s / 9.479534822203367e-18 - 1.0).abs() < 1e-12, "{s}");
    }

    #[test]
    fn quantile_edges() {
        assert_eq!(normal_quantile(0.0, 0.0, 1.0), f64::NEG_INFINITY);
        assert_eq!(normal_quantile(1.0, 0.0, 1.0), f64::INFINITY);
        assert_eq!(normal_quantile(-0.2, 0.0, 1.0), f64::NEG_INFINITY);
        assert!(normal_quantile(f64::NAN, 0.0, 1.0).is_nan());
        assert!(normal_quantile(1e-300, 0.0, 1.0) < -37.0);
    }

    #[test]
    fn bulk_pdf_matches_scalar() {
        let x = vec64![-2.0, -1.0, 0.0, 1.0, 2.0];
        let out = dense_data(normal_pdf(&x, 0.0, 1.0, None, None).unwrap());
        for (i, &xi) in x.iter().enumerate() {
            assert_eq!(out[i], normal_density(xi, 0.0, 1.0));
        }
    }

    #[test]
    fn invalid_parameters() {
        assert!(normal_pdf(&[0.0], 0.0, 0.0, None, None).is_err());
        assert!(normal_cdf(&[0.0], f64::INFINITY, 1.0, None, None).is_err());
        assert!(normal_ppf(&[0.5], 0.0, -1.0, None, None).is_err());
    }

    common_tests!(pdf_common, normal_pdf, normal_density, (1.0, 2.0), [-3.0, 1.0, 4.0]);
    common_tests!(cdf_common, normal_cdf, normal_probability, (1.0, 2.0), [-3.0, 1.0, 4.0]);
    common_tests!(sf_common, normal_sf, normal_survival, (1.0, 2.0), [-3.0, 1.0, 4.0]);
    common_tests!(ppf_common, normal_ppf, normal_quantile, (1.0, 2.0), [0.01, 0.5, 0.99]);
}
