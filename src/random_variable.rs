// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Random Variable Facade** - *Flat Scalar Entry Points*
//!
//! Every scalar `<distribution>_<function>` in one namespace, together with the matching
//! `<distribution>_support` descriptor and `<distribution>_check` validator.
//!
//! ```rust,ignore
//! use rv_kernels::random_variable::*;
//!
//! let p = exponential_probability(1.0, 2.0); // 1 − e^(−½)
//! let k = binomial_quantile(0.5, 10, 0.3);
//! ```
//!
//! Scalar functions do not validate their parameters in release builds; call the `_check`
//! function first when parameters come from untrusted input.

pub use crate::kernels::scientific::distributions::shared::support::Support;
pub use crate::kernels::scientific::distributions::univariate::benford::{
    benford_check, benford_support, benford_density, benford_probability, benford_survival,
    benford_quantile,
};
pub use crate::kernels::scientific::distributions::univariate::bernoulli::{
    bernoulli_check, bernoulli_support, bernoulli_density, bernoulli_probability,
    bernoulli_survival, bernoulli_quantile,
};
pub use crate::kernels::scientific::distributions::univariate::beta::{
    beta_check, beta_support, beta_density, beta_probability, beta_survival, beta_quantile,
};
pub use crate::kernels::scientific::distributions::univariate::beta_binomial::{
    beta_binomial_check, beta_binomial_support, beta_binomial_density, beta_binomial_probability,
    beta_binomial_survival, beta_binomial_quantile,
};
pub use crate::kernels::scientific::distributions::univariate::beta_prime::{
    beta_prime_check, beta_prime_support, beta_prime_density, beta_prime_probability,
    beta_prime_survival, beta_prime_quantile,
};
pub use crate::kernels::scientific::distributions::univariate::binomial::{
    binomial_check, binomial_support, binomial_density, binomial_probability, binomial_survival,
    binomial_quantile,
};
pub use crate::kernels::scientific::distributions::univariate::cauchy::{
    cauchy_check, cauchy_support, cauchy_density, cauchy_probability, cauchy_survival,
    cauchy_quantile,
};
pub use crate::kernels::scientific::distributions::univariate::chi::{
    chi_check, chi_support, chi_density, chi_probability, chi_survival, chi_quantile,
};
pub use crate::kernels::scientific::distributions::univariate::chi_squared::{
    chi_squared_check, chi_squared_support, chi_squared_density, chi_squared_probability,
    chi_squared_survival, chi_squared_quantile,
};
pub use crate::kernels::scientific::distributions::univariate::continuous_bernoulli::{
    continuous_bernoulli_check, continuous_bernoulli_support, continuous_bernoulli_density,
    continuous_bernoulli_probability, continuous_bernoulli_survival, continuous_bernoulli_quantile,
};
pub use crate::kernels::scientific::distributions::univariate::dagum::{
    dagum_check, dagum_support, dagum_density, dagum_probability, dagum_survival, dagum_quantile,
};
pub use crate::kernels::scientific::distributions::univariate::discrete_uniform::{
    discrete_uniform_check, discrete_uniform_support, discrete_uniform_density,
    discrete_uniform_probability, discrete_uniform_survival, discrete_uniform_quantile,
};
pub use crate::kernels::scientific::distributions::univariate::exponential::{
    exponential_check, exponential_support, exponential_density, exponential_probability,
    exponential_survival, exponential_quantile,
};
pub use crate::kernels::scientific::distributions::univariate::fisher_f::{
    f_check, f_support, f_density, f_probability, f_survival, f_quantile,
};
pub use crate::kernels::scientific::distributions::univariate::gamma::{
    gamma_check, gamma_support, gamma_density, gamma_probability, gamma_survival, gamma_quantile,
};
pub use crate::kernels::scientific::distributions::univariate::geometric::{
    geometric_check, geometric_support, geometric_density, geometric_probability,
    geometric_survival, geometric_quantile,
};
pub use crate::kernels::scientific::distributions::univariate::gompertz::{
    gompertz_check, gompertz_support, gompertz_density, gompertz_probability, gompertz_survival,
    gompertz_quantile,
};
pub use crate::kernels::scientific::distributions::univariate::gumbel::{
    gumbel_check, gumbel_support, gumbel_density, gumbel_probability, gumbel_survival,
    gumbel_quantile,
};
pub use crate::kernels::scientific::distributions::univariate::hypergeometric::{
    hypergeometric_check, hypergeometric_support, hypergeometric_density,
    hypergeometric_probability, hypergeometric_survival, hypergeometric_quantile,
};
pub use crate::kernels::scientific::distributions::univariate::laplace::{
    laplace_check, laplace_support, laplace_density, laplace_probability, laplace_survival,
    laplace_quantile,
};
pub use crate::kernels::scientific::distributions::univariate::log_normal::{
    log_normal_check, log_normal_support, log_normal_density, log_normal_probability,
    log_normal_survival, log_normal_quantile,
};
pub use crate::kernels::scientific::distributions::univariate::logarithmic::{
    logarithmic_check, logarithmic_support, logarithmic_density, logarithmic_probability,
    logarithmic_survival, logarithmic_quantile,
};
pub use crate::kernels::scientific::distributions::univariate::logistic::{
    logistic_check, logistic_support, logistic_density, logistic_probability, logistic_survival,
    logistic_quantile,
};
pub use crate::kernels::scientific::distributions::univariate::negative_binomial::{
    negative_binomial_check, negative_binomial_support, negative_binomial_density,
    negative_binomial_probability, negative_binomial_survival, negative_binomial_quantile,
};
pub use crate::kernels::scientific::distributions::univariate::normal::{
    normal_check, normal_support, normal_density, normal_probability, normal_survival,
    normal_quantile,
};
pub use crate::kernels::scientific::distributions::univariate::pareto::{
    pareto_check, pareto_support, pareto_density, pareto_probability, pareto_survival,
    pareto_quantile,
};
pub use crate::kernels::scientific::distributions::univariate::poisson::{
    poisson_check, poisson_support, poisson_density, poisson_probability, poisson_survival,
    poisson_quantile,
};
pub use crate::kernels::scientific::distributions::univariate::rayleigh::{
    rayleigh_check, rayleigh_support, rayleigh_density, rayleigh_probability, rayleigh_survival,
    rayleigh_quantile,
};
pub use crate::kernels::scientific::distributions::univariate::student_t::{
    t_check, t_support, t_density, t_probability, t_survival, t_quantile,
};
pub use crate::kernels::scientific::distributions::univariate::uniform::{
    uniform_check, uniform_support, uniform_density, uniform_probability, uniform_survival,
    uniform_quantile,
};
pub use crate::kernels::scientific::distributions::univariate::weibull::{
    weibull_check, weibull_support, weibull_density, weibull_probability, weibull_survival,
    weibull_quantile,
};
