// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under the Mozilla Public License (MPL) 2.0.
// See LICENSE for details.

//! # **rv-kernels** - *Univariate Distribution Functions*
//!
//! Density, cumulative probability, survival and quantile functions for 31 univariate
//! probability distributions, built on a shared special-function core (incomplete gamma and
//! beta) and a generic quantile solver.
//!
//! Two surfaces:
//! - **Scalar**: `<distribution>_<density|probability|survival|quantile>` in
//!   [`random_variable`], unchecked and branch-light.
//! - **Bulk**: `<distribution>_<pdf|pmf|cdf|sf|ppf>` in each
//!   `kernels::scientific::distributions::univariate` module, taking `&[f64]` with an optional
//!   Arrow validity mask and returning `Result<FloatArray<f64>, KernelError>`.

pub mod kernels {
    pub mod scientific {
        pub mod distributions;
        pub mod erf;
    }
}

pub mod config;
pub mod errors;
pub mod random_variable;
pub mod utils;
