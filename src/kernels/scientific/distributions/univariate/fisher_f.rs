// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # F Distribution
//!
//! Snedecor's F with numerator degrees of freedom d₁ (`df1`) and denominator d₂ (`df2`): the
//! ratio of two scaled chi-squared variables. The variable u = d₁x/d₂ is beta prime with
//! shapes (d₁/2, d₂/2), and every function is computed through that mapping.
//!
//! - **CDF**: F(q) = I_{d₁q/(d₁q+d₂)}(d₁/2, d₂/2)
//! - **Quantile**: (d₂/d₁) times the beta prime quantile

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::params::{debug_check, positive};
use crate::kernels::scientific::distributions::shared::support::Support;
use crate::kernels::scientific::distributions::univariate::beta_prime::{
    beta_prime_density, beta_prime_probability, beta_prime_quantile, beta_prime_survival,
};
use crate::kernels::scientific::distributions::univariate::common::univariate_kernels;

#[inline]
pub fn f_check(df1: f64, df2: f64) -> Result<(), KernelError> {
    positive("f", "df1", df1)?;
    positive("f", "df2", df2)
}

/// Support [0, ∞).
#[inline]
pub fn f_support(df1: f64, df2: f64) -> Support {
    debug_check!(f_check(df1, df2));
    Support::Continuous { lower: 0.0, upper: f64::INFINITY }
}

#[inline]
pub fn f_density(x: f64, df1: f64, df2: f64) -> f64 {
    debug_check!(f_check(df1, df2));
    let ratio = df1 / df2;
    ratio * beta_prime_density(ratio * x, 0.5 * df1, 0.5 * df2)
}

#[inline]
pub fn f_probability(q: f64, df1: f64, df2: f64) -> f64 {
    debug_check!(f_check(df1, df2));
    beta_prime_probability(df1 / df2 * q, 0.5 * df1, 0.5 * df2)
}

#[inline]
pub fn f_survival(t: f64, df1: f64, df2: f64) -> f64 {
    debug_check!(f_check(df1, df2));
    beta_prime_survival(df1 / df2 * t, 0.5 * df1, 0.5 * df2)
}

#[inline]
pub fn f_quantile(p: f64, df1: f64, df2: f64) -> f64 {
    if let Some(edge) = f_support(df1, df2).edge_quantile(p) {
        return edge;
    }
    df2 / df1 * beta_prime_quantile(p, 0.5 * df1, 0.5 * df2)
}

univariate_kernels! {
    f_check, (df1: f64, df2: f64);
    /// F PDF over `x`, null-aware.
    f_pdf => f_density,
    /// F CDF over `x`, null-aware.
    f_cdf => f_probability,
    /// F survival function over `x`, null-aware.
    f_sf => f_survival,
    /// F quantile over probabilities `x`, null-aware.
    f_ppf => f_quantile,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::scientific::distributions::univariate::common::{
        assert_close, common_tests,
    };

    #[test]
    fn reference_values() {
        // scipy.stats.f.pdf(2, 5, 10) == 0.16200574218011492
        assert_close(f_density(2.0, 5.0, 10.0), 0.16200574218011492, 1e-15);
        // scipy.stats.f.cdf(2, 5, 10) == 0.8358050491002612
        assert_close(f_probability(2.0, 5.0, 10.0), 0.8358050491002612, 1e-15);
        // scipy.stats.f.ppf(0.95, 5, 10) == 3.325834530413012
        assert_close(f_quantile(0.95, 5.0, 10.0), 3.325834530413012, 1e-12);
    }

    #[test]
    fn two_numerator_degrees_at_origin() {
        assert_close(f_density(0.0, 2.0, 7.0), 1.0, 1e-15);
        assert_eq!(f_density(0.0, 1.0, 7.0), f64::INFINITY);
        assert_eq!(f_density(0.0, 3.0, 7.0), 0.0);
        assert_eq!(f_probability(0.0, 3.0, 7.0), 0.0);
        assert_eq!(f_survival(-1.0, 3.0, 7.0), 1.0);
    }

    #[test]
    fn reciprocal_swaps_degrees_of_freedom() {
        // P(F(d1, d2) ≤ x) = P(F(d2, d1) ≥ 1/x)
        for &x in &[0.4, 1.0, 3.0] {
            assert_close(f_probability(x, 4.0, 9.0), f_survival(1.0 / x, 9.0, 4.0), 1e-14);
        }
    }

    common_tests!(pdf_common, f_pdf, f_density, (5.0, 10.0), [0.0, 1.0, 3.0]);
    common_tests!(cdf_common, f_cdf, f_probability, (5.0, 10.0), [0.0, 1.0, 3.0]);
    common_tests!(sf_common, f_sf, f_survival, (5.0, 10.0), [0.0, 1.0, 3.0]);
    common_tests!(ppf_common, f_ppf, f_quantile, (5.0, 10.0), [0.1, 0.5, 0.9]);
}
