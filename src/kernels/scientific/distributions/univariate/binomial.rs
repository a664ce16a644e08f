// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Binomial Distribution
//!
//! Number of successes in n (`size`) independent trials of success probability p (`prob`).
//!
//! ## Mathematical Definition
//! - **PMF**: p(x) = C(n, x) pˣ (1 − p)ⁿ⁻ˣ, in Loader's saddle-point form (Stirling
//!   corrections and deviances), which stays exact to rounding for n up to 2⁵³
//! - **CDF**: F(k) = 1 − I_p(k + 1, n − k)
//! - **Survival**: S(k) = I_p(k + 1, n − k), from the same incomplete beta evaluation
//! - **Quantile**: smallest k with F(k) ≥ u, found by the discrete solver from a normal seed
//!
//! The incomplete beta is evaluated at p itself rather than at 1 − p, so small success
//! probabilities are not rounded away.

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::params::{debug_check, probability};
use crate::kernels::scientific::distributions::shared::scalar::{
    incomplete_beta_pair, ln_binomial_mass, normal_quantile_scalar,
};
use crate::kernels::scientific::distributions::shared::solver::invert_discrete;
use crate::kernels::scientific::distributions::shared::support::Support;
use crate::kernels::scientific::distributions::univariate::common::univariate_kernels;

#[inline]
pub fn binomial_check(_size: u64, prob: f64) -> Result<(), KernelError> {
    probability("binomial", "prob", prob)
}

/// Support {0, …, n}; {0} when p = 0 and {n} when p = 1.
#[inline]
pub fn binomial_support(size: u64, prob: f64) -> Support {
    debug_check!(binomial_check(size, prob));
    let n = size as f64;
    let lower = if prob == 1.0 { n } else { 0.0 };
    let upper = if prob == 0.0 { 0.0 } else { n };
    Support::Discrete { lower, upper }
}

#[inline]
pub fn binomial_density(x: f64, size: u64, prob: f64) -> f64 {
    debug_check!(binomial_check(size, prob));
    if x.is_nan() {
        return f64::NAN;
    }
    let support = binomial_support(size, prob);
    if !support.contains(x) {
        return 0.0;
    }
    if support.lower() == support.upper() {
        return 1.0;
    }
    ln_binomial_mass(x, size as f64, prob, 1.0 - prob).exp()
}

#[inline]
pub fn binomial_probability(q: f64, size: u64, prob: f64) -> f64 {
    debug_check!(binomial_check(size, prob));
    if q.is_nan() {
        return f64::NAN;
    }
    let k = q.floor();
    let n = size as f64;
    if k < 0.0 {
        return 0.0;
    }
    if k >= n {
        return 1.0;
    }
    incomplete_beta_pair(k + 1.0, n - k, prob).complement
}

#[inline]
pub fn binomial_survival(t: f64, size: u64, prob: f64) -> f64 {
    debug_check!(binomial_check(size, prob));
    if t.is_nan() {
        return f64::NAN;
    }
    let k = t.floor();
    let n = size as f64;
    if k < 0.0 {
        return 1.0;
    }
    if k >= n {
        return 0.0;
    }
    incomplete_beta_pair(k + 1.0, n - k, prob).value
}

#[inline]
pub fn binomial_quantile(p: f64, size: u64, prob: f64) -> f64 {
    let support = binomial_support(size, prob);
    if let Some(edge) = support.edge_quantile(p) {
        return edge;
    }
    let n = size as f64;
    let guess = n * prob + normal_quantile_scalar(p) * (n * prob * (1.0 - prob)).sqrt();
    invert_discrete(
        p,
        support.lower(),
        support.upper(),
        guess,
        |k| binomial_probability(k, size, prob),
        |k| binomial_survival(k, size, prob),
    )
}

univariate_kernels! {
    binomial_check, (size: u64, prob: f64);
    /// Binomial PMF over `x`, null-aware.
    binomial_pmf => binomial_density,
    /// Binomial CDF over `x`, null-aware.
    binomial_cdf => binomial_probability,
    /// Binomial survival function over `x`, null-aware.
    binomial_sf => binomial_survival,
    /// Binomial quantile over probabilities `x`, null-aware.
    binomial_ppf => binomial_quantile,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::scientific::distributions::univariate::common::{
        assert_close, common_tests,
    };

    #[test]
    fn four_fair_coins() {
        assert_close(binomial_density(2.0, 4, 0.5), 0.375, 1e-15);
        assert_close(binomial_probability(2.0, 4, 0.5), 0.6875, 1e-15);
        assert_close(binomial_survival(2.0, 4, 0.5), 0.3125, 1e-15);
        assert_eq!(binomial_density(2.5, 4, 0.5), 0.0);
        assert_eq!(binomial_density(5.0, 4, 0.5), 0.0);
    }

    #[test]
    fn reference_values() {
        // scipy.stats.binom.pmf(6, 20, 0.3) == 0.19163898275344257
        assert_close(binomial_density(6.0, 20, 0.3), 0.19163898275344257, 1e-15);
        // scipy.stats.binom.cdf(6, 20, 0.3) == 0.6080098122009240
        assert_close(binomial_probability(6.0, 20, 0.3), 0.6080098122009240, 1e-14);
        // scipy.stats.binom.sf(15, 20, 0.3) == 5.550253078298760e-06
        let s = binomial_survival(15.0, 20, 0.3);
        assert!((s / 5.55025307829876e-06 - 1.0).abs() < 1e-12, "{s}");
    }

    #[test]
    fn large_counts_do_not_overflow() {
        // scipy.stats.binom.pmf(500000, 1000000, 0.5) == 7.978843613317501e-04
        let d = binomial_density(500_000.0, 1_000_000, 0.5);
        assert!((d / 7.978843613317501e-04 - 1.0).abs() < 1e-8, "{d}");
        assert_eq!(binomial_quantile(0.5, 1_000_000, 0.5), 500_000.0);
    }

    #[test]
    fn trials_near_f64_integer_limit_keep_mass_precision() {
        // 40-digit references: C(1e14, 5e13)/2^1e14 and the mass at 3e13 + 2e7 for p = 0.3
        let d = binomial_density(5e13, 100_000_000_000_000, 0.5);
        assert!((d / 7.9788456080286336117e-8 - 1.0).abs() < 1e-13, "{d}");
        let d = binomial_density(30_000_020_000_000.0, 100_000_000_000_000, 0.3);
        assert!((d / 6.3630148619262822569e-12 - 1.0).abs() < 1e-12, "{d}");
    }

    #[test]
    fn quantile_is_smallest_reaching_count() {
        for &u in &[0.01, 0.2, 0.6, 0.99] {
            let k = binomial_quantile(u, 20, 0.3);
            assert!(binomial_probability(k, 20, 0.3) >= u);
            assert!(k == 0.0 || binomial_probability(k - 1.0, 20, 0.3) < u);
        }
    }

    #[test]
    fn degenerate_probabilities() {
        assert_eq!(binomial_density(0.0, 7, 0.0), 1.0);
        assert_eq!(binomial_density(7.0, 7, 1.0), 1.0);
        assert_eq!(binomial_density(3.0, 7, 1.0), 0.0);
        assert_eq!(binomial_probability(0.0, 7, 0.0), 1.0);
        assert_eq!(binomial_probability(6.0, 7, 1.0), 0.0);
        assert_eq!(binomial_quantile(0.5, 7, 1.0), 7.0);
        assert_eq!(binomial_quantile(0.5, 7, 0.0), 0.0);
        assert_eq!(binomial_quantile(1.0, 7, 0.0), 0.0);
    }

    common_tests!(pmf_common, binomial_pmf, binomial_density, (20, 0.3), [0.0, 6.0, 20.0]);
    common_tests!(cdf_common, binomial_cdf, binomial_probability, (20, 0.3), [0.0, 6.0, 20.0]);
    common_tests!(sf_common, binomial_sf, binomial_survival, (20, 0.3), [0.0, 6.0, 20.0]);
    common_tests!(ppf_common, binomial_ppf, binomial_quantile, (20, 0.3), [0.1, 0.5, 0.9]);
}
