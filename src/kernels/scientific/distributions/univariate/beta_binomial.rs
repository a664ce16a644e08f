// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Beta-Binomial Distribution
//!
//! Binomial count over n (`size`) trials whose success probability is itself Beta(α, β)
//! distributed (`shape1`, `shape2`).
//!
//! - **PMF**: p(x) = C(n, x) B(x + α, n − x + β) / B(α, β), in log-space as ratios of Gamma
//!   functions offset by whichever of the shapes or the counts is smaller
//! - **CDF / Survival**: when the tail on the side of x away from the mean is short, it is
//!   summed with the mass-ratio recurrence and the other side is its complement. Otherwise
//!   F(k) = P(T < V) for T ~ Beta(α, β) and V ~ Beta(k + 1, n − k), integrated over the
//!   log-odds of the more concentrated of the two with the other's incomplete beta as the
//!   integrand. Both tails come out of the same quadrature, each with relative accuracy.
//! - **Quantile**: discrete search seeded at the mean nα/(α + β)
//!
//! With α < 1 (or β < 1) the masses rise again towards 0 (or n), so a summed tail on that side
//! runs to the end rather than stopping once terms look negligible.

use log::warn;

use crate::config::{DIRECT_SUM_MAX_TERMS, SPECIAL_FUNCTION_EPS};
use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::params::{debug_check, positive};
use crate::kernels::scientific::distributions::shared::quadrature::{
    Direction, March, integrate_outward,
};
use crate::kernels::scientific::distributions::shared::scalar::{
    incomplete_beta_split, ln_beta, ln_beta_prefactor, ln_choose, ln_gamma_ratio, log1pmx,
    sigmoid, tail_series,
};
use crate::kernels::scientific::distributions::shared::solver::invert_discrete;
use crate::kernels::scientific::distributions::shared::support::Support;
use crate::kernels::scientific::distributions::univariate::common::univariate_kernels;

#[inline]
pub fn beta_binomial_check(_size: u64, shape1: f64, shape2: f64) -> Result<(), KernelError> {
    positive("beta_binomial", "shape1", shape1)?;
    positive("beta_binomial", "shape2", shape2)
}

/// Support {0, …, n}.
#[inline]
pub fn beta_binomial_support(size: u64, shape1: f64, shape2: f64) -> Support {
    debug_check!(beta_binomial_check(size, shape1, shape2));
    Support::Discrete { lower: 0.0, upper: size as f64 }
}

/// ln p(k). The Gamma ratios are taken over the smaller of (α, β, α + β) and (k, n − k, n)
/// as offsets, so no two logarithms of the larger set are subtracted.
#[inline]
fn ln_mass(k: f64, n: f64, a: f64, b: f64) -> f64 {
    if a + b <= n {
        // Γ(k + α)/Γ(k + 1) · Γ(n − k + β)/Γ(n − k + 1) · Γ(n + 1)/Γ(n + α + β) / B(α, β)
        ln_gamma_ratio(k + 1.0, a - 1.0) + ln_gamma_ratio(n - k + 1.0, b - 1.0)
            - ln_gamma_ratio(n + 1.0, a + b - 1.0)
            - ln_beta(a, b)
    } else {
        // C(n, k) · Γ(α + k)/Γ(α) · Γ(β + n − k)/Γ(β) · Γ(α + β)/Γ(α + β + n)
        ln_choose(n, k) + ln_gamma_ratio(a, k) + ln_gamma_ratio(b, n - k)
            - ln_gamma_ratio(a + b, n)
    }
}

/// ln of the density of ℓ = logit(V) for V ~ Beta(a, b), at ℓ = ln(a/b) + d.
fn ln_log_odds_density(a: f64, b: f64, d: f64) -> f64 {
    let c = a + b;
    let v0 = a / c;
    let em1 = d.exp_m1();
    let e = v0 * em1;
    let shift = if e.abs() < 0.5 {
        -a * (em1 - d) - c * log1pmx(e)
    } else {
        a * d - c * e.ln_1p()
    };
    ln_beta_prefactor(a, b, v0, b / c) + shift
}

/// (F(k), S(k)) as the Beta mixture P(T < V), P(T ≥ V).
fn mixture_tails(k: f64, n: f64, a: f64, b: f64) -> (f64, f64) {
    let (va, vb) = (k + 1.0, n - k);
    let spread_v = (1.0 / va + 1.0 / vb).sqrt();
    let spread_t = (1.0 / a + 1.0 / b).sqrt();
    // Outer variable, its spread in log-odds, and the inner shapes.
    let outer_is_v = spread_v <= spread_t;
    let ((oa, ob), scale, (ia, ib)) = if outer_is_v {
        ((va, vb), spread_v, (a, b))
    } else {
        ((a, b), spread_t, (va, vb))
    };
    let logit0 = oa.ln() - ob.ln();

    let integrand = |d: f64| {
        let w = ln_log_odds_density(oa, ob, d).exp();
        if w == 0.0 {
            return [0.0; 3];
        }
        let l = logit0 + d;
        let inner = incomplete_beta_split(ia, ib, sigmoid(l), sigmoid(-l));
        // Given V = v, P(T < v) = I_v(α, β); given T = t, P(V > t) = 1 − I_t(k + 1, n − k).
        let (lower, upper) = if outer_is_v {
            (inner.value, inner.complement)
        } else {
            (inner.complement, inner.value)
        };
        [lower * w, upper * w, w]
    };
    let settled = |panel: &[f64; 3], previous: &[f64; 3], total: &[f64; 3]| {
        panel[2] <= SPECIAL_FUNCTION_EPS * total[0].min(total[1]) && panel[2] <= previous[2]
    };

    let mut lower = 0.0;
    let mut upper = 0.0;
    for direction in [Direction::Up, Direction::Down] {
        let limit = match direction {
            Direction::Up => f64::INFINITY,
            Direction::Down => f64::NEG_INFINITY,
        };
        let march = March { from: 0.0, centre: 0.0, scale, direction, limit };
        let (total, ok) = integrate_outward(integrand, march, settled);
        if !ok {
            warn!("beta_binomial: mixture quadrature truncated at k={k}, n={n}");
        }
        lower += total[0];
        upper += total[1];
    }
    let norm = lower + upper;
    (lower / norm, upper / norm)
}

/// (F(k), S(k)) for an integer 0 ≤ k < n.
fn tails(k: f64, size: u64, a: f64, b: f64) -> (f64, f64) {
    let n = size as f64;
    let c = a + b;
    let mean = n * a / c;
    let sd = (n * a * b * (c + n) / (c * c * (c + 1.0))).sqrt();
    let lower_side = k < mean;
    // A decreasing tail stops within a few dozen standard deviations; a rising one runs on.
    let run = if lower_side { k + 1.0 } else { n - k };
    let rising = if lower_side { a < 1.0 } else { b < 1.0 };
    let reach = if rising { run } else { run.min(40.0 * sd) };
    if reach > DIRECT_SUM_MAX_TERMS as f64 {
        return mixture_tails(k, n, a, b);
    }

    if lower_side {
        let first = ln_mass(k, n, a, b).exp();
        let (cdf, ok) = tail_series(first, k, 0.0, !rising, |j| {
            j * (n - j + b) / ((n - j + 1.0) * (j - 1.0 + a))
        });
        if !ok {
            warn!("beta_binomial: lower tail truncated at k={k}");
        }
        let cdf = cdf.min(1.0);
        (cdf, 1.0 - cdf)
    } else {
        let first = ln_mass(k + 1.0, n, a, b).exp();
        let (sf, ok) = tail_series(first, k + 1.0, n, !rising, |j| {
            (n - j) * (j + a) / ((j + 1.0) * (n - j - 1.0 + b))
        });
        if !ok {
            warn!("beta_binomial: upper tail truncated at k={k}");
        }
        let sf = sf.min(1.0);
        (1.0 - sf, sf)
    }
}

#[inline]
pub fn beta_binomial_density(x: f64, size: u64, shape1: f64, shape2: f64) -> f64 {
    debug_check!(beta_binomial_check(size, shape1, shape2));
    if x.is_nan() {
        return f64::NAN;
    }
    if !beta_binomial_support(size, shape1, shape2).contains(x) {
        return 0.0;
    }
    ln_mass(x, size as f64, shape1, shape2).exp()
}

#[inline]
pub fn beta_binomial_probability(q: f64, size: u64, shape1: f64, shape2: f64) -> f64 {
    debug_check!(beta_binomial_check(size, shape1, shape2));
    if q.is_nan() {
        return f64::NAN;
    }
    let k = q.floor();
    if k < 0.0 {
        return 0.0;
    }
    if k >= size as f64 {
        return 1.0;
    }
    tails(k, size, shape1, shape2).0
}

#[inline]
pub fn beta_binomial_survival(t: f64, size: u64, shape1: f64, shape2: f64) -> f64 {
    debug_check!(beta_binomial_check(size, shape1, shape2));
    if t.is_nan() {
        return f64::NAN;
    }
    let k = t.floor();
    if k < 0.0 {
        return 1.0;
    }
    if k >= size as f64 {
        return 0.0;
    }
    tails(k, size, shape1, shape2).1
}

#[inline]
pub fn beta_binomial_quantile(p: f64, size: u64, shape1: f64, shape2: f64) -> f64 {
    let support = beta_binomial_support(size, shape1, shape2);
    if let Some(edge) = support.edge_quantile(p) {
        return edge;
    }
    let mean = size as f64 * shape1 / (shape1 + shape2);
    invert_discrete(
        p,
        support.lower(),
        support.upper(),
        mean,
        |k| beta_binomial_probability(k, size, shape1, shape2),
        |k| beta_binomial_survival(k, size, shape1, shape2),
    )
}

univariate_kernels! {
    beta_binomial_check, (size: u64, shape1: f64, shape2: f64);
    /// Beta-binomial PMF over `x`, null-aware.
    beta_binomial_pmf => beta_binomial_density,
    /// Beta-binomial CDF over `x`, null-aware.
    beta_binomial_cdf => beta_binomial_probability,
    /// Beta-binomial survival function over `x`, null-aware.
    beta_binomial_sf => beta_binomial_survival,
    /// Beta-binomial quantile over probabilities `x`, null-aware.
    beta_binomial_ppf => beta_binomial_quantile,
}
