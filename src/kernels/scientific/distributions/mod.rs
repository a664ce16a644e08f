// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Statistical Distributions Module** - *Density, CDF, Survival and Quantile Functions*
//!
//! Thirty-one univariate distributions, each exposing the same four scalar functions:
//!
//! - `<d>_density(x, params…)`: density, or probability mass for discrete laws
//! - `<d>_probability(q, params…)`: cumulative probability F(q) = P(X ≤ q)
//! - `<d>_survival(t, params…)`: S(t) = P(X > t), computed directly rather than as 1 − F
//! - `<d>_quantile(p, params…)`: the generalised inverse of F
//!
//! plus `<d>_support` and a `<d>_check` parameter validator. Checked bulk kernels
//! (`<d>_pdf`/`_pmf`, `_cdf`, `_sf`, `_ppf`) evaluate the same functions over `&[f64]` with
//! Arrow validity masks.
//!
//! ## Computational Architecture
//! - **Closed forms** where the algebra allows (exponential, Weibull, Gumbel, ...), written with
//!   `ln_1p`/`exp_m1` so neither tail cancels.
//! - **Special-function identities** for the rest: gamma-family CDFs through the regularised
//!   incomplete gamma, beta-family and binomial-type CDFs through the regularised incomplete
//!   beta (see [`shared::scalar`]).
//! - **Generic inversion** through [`shared::solver`] wherever no closed-form quantile exists.
//!
//! ## Out-of-support arguments
//! Arguments outside the support are ordinary inputs: densities return 0, CDFs 0 or 1, and
//! quantiles of p ≤ 0 or p ≥ 1 return the support bounds. NaN propagates.
//!
//! ## Parameters
//! Scalar entry points do not validate in release builds; with `debug_assertions` an invalid
//! parameter panics with the validator's message. Bulk kernels always validate and return
//! `KernelError::InvalidArguments`.
//!
//! ## Numerical Precision
//! See `./tests` for the reference suites, measured against 40-digit mpmath evaluations.

/// # **Shared Distribution Utilities** - *Special Functions, Solver and Parameter Domains*
///
/// ## Modules
/// - **`constants`**: Mathematical constants and precomputed tables
/// - **`params`**: Parameter-domain predicates and the `debug_check!` macro
/// - **`quadrature`**: Gauss–Legendre panels marched outward for long discrete tails
/// - **`scalar`**: Incomplete gamma and beta, log-gamma, lattice masses and stability helpers
/// - **`solver`**: Generic continuous and discrete quantile inversion
/// - **`support`**: Support descriptors
pub mod shared {
    pub mod constants;
    pub mod params;
    pub mod quadrature;
    pub mod scalar;
    pub mod solver;
    pub mod support;
}

/// # **Univariate Distributions** - *Single-Variable Probability Distributions*
///
/// ## Distribution Categories
/// - **Continuous**: beta, beta_prime, cauchy, chi, chi_squared, continuous_bernoulli, dagum,
///   exponential, fisher_f, gamma, gompertz, gumbel, laplace, log_normal, logistic, normal,
///   pareto, rayleigh, student_t, uniform, weibull
/// - **Discrete**: benford, bernoulli, beta_binomial, binomial, discrete_uniform, geometric,
///   hypergeometric, logarithmic, negative_binomial, poisson
pub mod univariate {
    // common kernel patterns
    pub mod common;

    // distributions
    pub mod benford;
    pub mod bernoulli;
    pub mod beta;
    pub mod beta_binomial;
    pub mod beta_prime;
    pub mod binomial;
    pub mod cauchy;
    pub mod chi;
    pub mod chi_squared;
    pub mod continuous_bernoulli;
    pub mod dagum;
    /// Discrete uniform distribution - equal mass over a finite integer range.
    pub mod discrete_uniform;
    /// Exponential distribution - waiting times of a Poisson process.
    pub mod exponential;
    /// Snedecor's F distribution.
    pub mod fisher_f;
    pub mod gamma;
    pub mod geometric;
    pub mod gompertz;
    pub mod gumbel;
    pub mod hypergeometric;
    pub mod laplace;
    pub mod log_normal;
    pub mod logarithmic;
    pub mod logistic;
    pub mod negative_binomial;
    pub mod normal;
    pub mod pareto;
    pub mod poisson;
    pub mod rayleigh;
    pub mod student_t;
    pub mod uniform;
    pub mod weibull;
}
