// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Hypergeometric Distribution
//!
//! Number of marked items in n draws (`tries`) without replacement from a population of N
//! (`total`) items of which K (`good`) are marked.
//!
//! ## Mathematical Definition
//! - **PMF**: p(x) = C(K, x) C(N − K, n − x) / C(N, n), assembled as three binomial masses
//!   with p = n/N in Loader's saddle-point form. Every deviance is taken against the single
//!   offset x − nK/N, so populations near 2⁵³ keep full relative precision.
//! - **CDF / Survival**: no closed form. The tail on the far side of the mode is summed
//!   outward with the mass-ratio recurrence until the terms vanish; the other side is its
//!   complement. Once the standard deviation passes `config::LATTICE_CONTINUUM_MIN_SD` the
//!   walk would run to millions of terms, so the tail is instead integrated over the real
//!   extension of the pmf with a midpoint Euler–Maclaurin correction.
//! - **Quantile**: discrete search over the support seeded at the mean nK/N
//!
//! The support is {max(0, n + K − N), …, min(n, K)}.

use log::warn;

use crate::config::{LATTICE_CONTINUUM_MIN_SD, SPECIAL_FUNCTION_EPS};
use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::constants::HALF_LOG_TWO_PI;
use crate::kernels::scientific::distributions::shared::params::{at_most, debug_check};
use crate::kernels::scientific::distributions::shared::quadrature::{
    Direction, March, integrate_outward,
};
use crate::kernels::scientific::distributions::shared::scalar::{
    deviance_term, ln_binomial_mass, stirling_correction, tail_series,
};
use crate::kernels::scientific::distributions::shared::solver::invert_discrete;
use crate::kernels::scientific::distributions::shared::support::Support;
use crate::kernels::scientific::distributions::univariate::common::univariate_kernels;

#[inline]
pub fn hypergeometric_check(total: u64, good: u64, tries: u64) -> Result<(), KernelError> {
    at_most("hypergeometric", "good", good, "total", total)?;
    at_most("hypergeometric", "tries", tries, "total", total)
}

/// Support {max(0, n + K − N), …, min(n, K)}.
#[inline]
pub fn hypergeometric_support(total: u64, good: u64, tries: u64) -> Support {
    debug_check!(hypergeometric_check(total, good, tries));
    Support::Discrete {
        lower: tries.saturating_sub(total - good) as f64,
        upper: tries.min(good) as f64,
    }
}

/// x − nK/N for real x, with nK formed exactly so the offset carries one rounding.
#[inline]
fn mean_offset(x: f64, n_pop: f64, n_good: f64, n: f64) -> f64 {
    let hi = n_good * n;
    let lo = n_good.mul_add(n, -hi);
    (x.mul_add(n_pop, -hi) - lo) / n_pop
}

/// ln p(x) for real x strictly inside the support, given d = x − nK/N.
///
/// p(x) = b(x; K, p)·b(n − x; N − K, p) / b(n; N, p) with p = n/N. The four deviations from
/// the binomial means are ±d and the last mass sits exactly on its mean, so only Stirling
/// corrections, four deviances and the ½ln(2π·…) normalisers remain.
#[inline]
fn ln_mass_centred(x: f64, d: f64, n_pop: f64, n_good: f64, n: f64) -> f64 {
    let n_bad = n_pop - n_good;
    let (a, b, c, e) = (x, n_good - x, n - x, n_bad - n + x);
    let stirling = stirling_correction(n_good) + stirling_correction(n_bad)
        - stirling_correction(n_pop)
        + stirling_correction(n)
        + stirling_correction(n_pop - n)
        - stirling_correction(a)
        - stirling_correction(b)
        - stirling_correction(c)
        - stirling_correction(e);
    let deviance =
        deviance_term(a, d) + deviance_term(b, -d) + deviance_term(c, -d) + deviance_term(e, d);
    let normaliser = 2.0 * HALF_LOG_TWO_PI + a.ln() + (-a / n_good).ln_1p() + c.ln()
        + (-c / n_bad).ln_1p()
        - n.ln()
        - (-n / n_pop).ln_1p();
    stirling - deviance - 0.5 * normaliser
}

/// ln p(k) for an integer k in a support with more than one point.
fn ln_mass(k: f64, n_pop: f64, n_good: f64, n: f64) -> f64 {
    let n_bad = n_pop - n_good;
    if k > 0.0 && k < n_good && k < n && n_bad - n + k > 0.0 {
        return ln_mass_centred(k, mean_offset(k, n_pop, n_good, n), n_pop, n_good, n);
    }
    // A support edge: one of the binomial masses sits at its own boundary.
    let p = n / n_pop;
    let q = (n_pop - n) / n_pop;
    ln_binomial_mass(k, n_good, p, q) + ln_binomial_mass(n - k, n_bad, p, q)
        - ln_binomial_mass(n, n_pop, p, q)
}

/// Tails of a wide distribution from the continuous extension f(x) of the pmf.
///
/// Σ_{j ≤ k} f(j) = ∫_{−∞}^{k+½} f − f′(k + ½)/24 to within a relative f‴/f·1e-3, which is
/// below 1e-15 once the standard deviation passes `LATTICE_CONTINUUM_MIN_SD`. The derivative is
/// f(k + ½)·ln(p(k + 1)/p(k)). The integral runs over t = x − k so nodes keep full precision.
fn continuum_tails(
    k: f64,
    support: Support,
    n_pop: f64,
    n_good: f64,
    n: f64,
    sd: f64,
) -> (f64, f64) {
    let n_bad = n_pop - n_good;
    let dk = mean_offset(k, n_pop, n_good, n);
    let density = |t: f64| [ln_mass_centred(k + t, dk + t, n_pop, n_good, n).exp()];
    let slope = ((n_good - k) * (n - k) / ((k + 1.0) * (n_bad - n + k + 1.0))).ln();
    let edge = density(0.5)[0] * slope / 24.0;
    let settled = |panel: &[f64; 1], previous: &[f64; 1], total: &[f64; 1]| {
        panel[0] <= SPECIAL_FUNCTION_EPS * total[0] && panel[0] <= previous[0]
    };

    // The mean sits at t = −dk.
    if dk < 0.0 {
        let march = March {
            from: 0.5,
            centre: -dk,
            scale: sd,
            direction: Direction::Down,
            limit: support.lower() - 0.5 - k,
        };
        let ([integral], ok) = integrate_outward(density, march, settled);
        if !ok {
            warn!("hypergeometric: lower tail quadrature truncated at k={k}");
        }
        let cdf = (integral - edge).clamp(0.0, 1.0);
        (cdf, 1.0 - cdf)
    } else {
        let march = March {
            from: 0.5,
            centre: -dk,
            scale: sd,
            direction: Direction::Up,
            limit: support.upper() + 0.5 - k,
        };
        let ([integral], ok) = integrate_outward(density, march, settled);
        if !ok {
            warn!("hypergeometric: upper tail quadrature truncated at k={k}");
        }
        let sf = (integral + edge).clamp(0.0, 1.0);
        (1.0 - sf, sf)
    }
}

/// (F(k), S(k)) for an integer k strictly inside the support.
fn tails(k: f64, total: u64, good: u64, tries: u64) -> (f64, f64) {
    let support = hypergeometric_support(total, good, tries);
    let (n_pop, n_good, n) = (total as f64, good as f64, tries as f64);
    let n_bad = n_pop - n_good;
    let frac = n_good / n_pop;
    let sd = (n * frac * (1.0 - frac) * (n_pop - n) / (n_pop - 1.0)).sqrt();
    if sd >= LATTICE_CONTINUUM_MIN_SD {
        return continuum_tails(k, support, n_pop, n_good, n, sd);
    }
    let mode = ((n + 1.0) * (n_good + 1.0) / (n_pop + 2.0)).floor();

    if k < mode {
        let first = ln_mass(k, n_pop, n_good, n).exp();
        let (cdf, ok) = tail_series(first, k, support.lower(), true, |j| {
            j * (n_bad - n + j) / ((n_good - j + 1.0) * (n - j + 1.0))
        });
        if !ok {
            warn!("hypergeometric: lower tail truncated at k={k}");
        }
        let cdf = cdf.min(1.0);
        (cdf, 1.0 - cdf)
    } else {
        let first = ln_mass(k + 1.0, n_pop, n_good, n).exp();
        let (sf, ok) = tail_series(first, k + 1.0, support.upper(), true, |j| {
            (n_good - j) * (n - j) / ((j + 1.0) * (n_bad - n + j + 1.0))
        });
        if !ok {
            warn!("hypergeometric: upper tail truncated at k={k}");
        }
        let sf = sf.min(1.0);
        (1.0 - sf, sf)
    }
}

#[inline]
pub fn hypergeometric_density(x: f64, total: u64, good: u64, tries: u64) -> f64 {
    debug_check!(hypergeometric_check(total, good, tries));
    if x.is_nan() {
        return f64::NAN;
    }
    let support = hypergeometric_support(total, good, tries);
    if !support.contains(x) {
        return 0.0;
    }
    if support.lower() == support.upper() {
        return 1.0;
    }
    ln_mass(x, total as f64, good as f64, tries as f64).exp()
}

#[inline]
pub fn hypergeometric_probability(q: f64, total: u64, good: u64, tries: u64) -> f64 {
    debug_check!(hypergeometric_check(total, good, tries));
    if q.is_nan() {
        return f64::NAN;
    }
    let support = hypergeometric_support(total, good, tries);
    let k = q.floor();
    if k < support.lower() {
        return 0.0;
    }
    if k >= support.upper() {
        return 1.0;
    }
    tails(k, total, good, tries).0
}

#[inline]
pub fn hypergeometric_survival(t: f64, total: u64, good: u64, tries: u64) -> f64 {
    debug_check!(hypergeometric_check(total, good, tries));
    if t.is_nan() {
        return f64::NAN;
    }
    let support = hypergeometric_support(total, good, tries);
    let k = t.floor();
    if k < support.lower() {
        return 1.0;
    }
    if k >= support.upper() {
        return 0.0;
    }
    tails(k, total, good, tries).1
}

#[inline]
pub fn hypergeometric_quantile(p: f64, total: u64, good: u64, tries: u64) -> f64 {
    let support = hypergeometric_support(total, good, tries);
    if let Some(edge) = support.edge_quantile(p) {
        return edge;
    }
    let mean = if total == 0 { 0.0 } else { tries as f64 * good as f64 / total as f64 };
    invert_discrete(
        p,
        support.lower(),
        support.upper(),
        mean,
        |k| hypergeometric_probability(k, total, good, tries),
        |k| hypergeometric_survival(k, total, good, tries),
    )
}

univariate_kernels! {
    hypergeometric_check, (total: u64, good: u64, tries: u64);
    /// Hypergeometric PMF over `x`, null-aware.
    hypergeometric_pmf => hypergeometric_density,
    /// Hypergeometric CDF over `x`, null-aware.
    hypergeometric_cdf => hypergeometric_probability,
    /// Hypergeometric survival function over `x`, null-aware.
    hypergeometric_sf => hypergeometric_survival,
    /// Hypergeometric quantile over probabilities `x`, null-aware.
    hypergeometric_ppf => hypergeometric_quantile,
}
