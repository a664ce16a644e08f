// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Common Distribution Utilities** - *Bulk Kernel Plumbing and Test Helpers*
//!
//! Every distribution exposes four checked bulk kernels (`_pdf`/`_pmf`, `_cdf`, `_sf`, `_ppf`)
//! over `&[f64]` with an optional Arrow validity mask. They share one shape:
//!
//! 1. validate the parameters with the distribution's `<d>_check`,
//! 2. validate the mask length,
//! 3. evaluate the scalar entry point per lane, propagating nulls.
//!
//! [`univariate_kernels!`] stamps those kernels out from a distribution's scalar functions, so
//! each distribution module only declares its parameter list once.
//!
//! ## Test Macros
//! `common_tests!` generates the empty-input, bulk-vs-scalar and mask-propagation tests
//! for a kernel.

pub mod std;

use minarrow::{Bitmask, FloatArray};

use crate::errors::KernelError;
use crate::utils::{confirm_mask_len, has_nulls};
use self::std::{eval_dense_lanes, eval_masked_lanes};

/// Evaluates `scalar_body` over `x` with Arrow-style null propagation.
///
/// * Empty input → empty array without a mask.
/// * No nulls (per `null_count`, or no mask) → dense loop; a supplied mask is echoed as
///   all-valid.
/// * Otherwise null lanes yield `NaN` with a cleared validity bit.
#[inline(always)]
pub fn univariate_kernel<F>(
    fname: &str,
    x: &[f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
    scalar_body: F,
) -> Result<FloatArray<f64>, KernelError>
where
    F: Fn(f64) -> f64,
{
    confirm_mask_len(fname, x.len(), null_mask)?;
    if x.is_empty() {
        return Ok(FloatArray::from_slice(&[]));
    }

    match null_mask {
        Some(mask) if has_nulls(null_count, null_mask) => {
            let (out, validity) = eval_masked_lanes(x, mask, scalar_body);
            Ok(FloatArray {
                data: out.into(),
                null_mask: Some(validity),
            })
        }
        _ => Ok(FloatArray {
            data: eval_dense_lanes(x, scalar_body).into(),
            null_mask: null_mask.map(|_| Bitmask::new_set_all(x.len(), true)),
        }),
    }
}

/// Generates the checked bulk kernels of one distribution.
///
/// ```ignore
/// univariate_kernels! {
///     gamma_check, (shape: f64, scale: f64);
///     /// Gamma PDF over `x`.
///     gamma_pdf => gamma_density,
///     /// Gamma CDF over `x`.
///     gamma_cdf => gamma_probability,
/// }
/// ```
///
/// Each kernel validates its parameters, returning `KernelError::InvalidArguments`, before
/// touching the data.
macro_rules! univariate_kernels {
    (
        $check:path, $params:tt;
        $($(#[$doc:meta])* $kernel:ident => $scalar:path),+ $(,)?
    ) => {
        $(
            $crate::kernels::scientific::distributions::univariate::common::univariate_kernel_fn! {
                $check, $params; $(#[$doc])* $kernel => $scalar
            }
        )+
    };
}
pub(crate) use univariate_kernels;

macro_rules! univariate_kernel_fn {
    (
        $check:path, ($($param:ident: $ty:ty),*);
        $(#[$doc:meta])* $kernel:ident => $scalar:path
    ) => {
        $(#[$doc])*
        #[inline]
        pub fn $kernel(
            x: &[f64],
            $($param: $ty,)*
            null_mask: Option<&::minarrow::Bitmask>,
            null_count: Option<usize>,
        ) -> Result<::minarrow::FloatArray<f64>, $crate::errors::KernelError> {
            $check($($param),*)?;
            $crate::kernels::scientific::distributions::univariate::common::univariate_kernel(
                stringify!($kernel),
                x,
                null_mask,
                null_count,
                |xi| $scalar(xi, $($param),*),
            )
        }
    };
}
pub(crate) use univariate_kernel_fn;

// Common test helpers

/// Test Helper: unwrap `FloatArray`, assert *no* null mask, return data.
#[cfg(test)]
pub fn dense_data(arr: FloatArray<f64>) -> minarrow::Buffer<f64> {
    assert!(arr.null_mask.is_none(), "unexpected mask on dense path");
    arr.data
}

/// Create a mask of given length with exactly the lane `idx` null.
#[cfg(test)]
pub fn single_null_mask(len: usize, idx: usize) -> Bitmask {
    let mut m = Bitmask::new_set_all(len, true);
    unsafe { m.set_unchecked(idx, false) };
    m
}

/// Assert absolute difference ≤ `tol`.
#[cfg(test)]
pub fn assert_close(a: f64, b: f64, tol: f64) {
    assert!(
        (a - b).abs() < tol,
        "assert_close failed: {} vs {} (tol={})",
        a,
        b,
        tol
    );
}

/// Generates the empty-input, bulk-vs-scalar and mask-propagation tests for one kernel.
///
/// ```ignore
/// common_tests!(gamma_pdf_common, gamma_pdf, gamma_density, (2.0, 1.5), [0.5, 1.0, 3.0]);
/// ```
#[cfg(test)]
macro_rules! common_tests {
    ($name:ident, $kernel:path, $scalar:path, ($($param:expr),*), [$($x:expr),+ $(,)?]) => {
        mod $name {
            use super::*;
            use $crate::kernels::scientific::distributions::univariate::common::{
                dense_data, single_null_mask,
            };

            #[test]
            fn empty_input() {
                let arr = $kernel(&[], $($param,)* None, None).unwrap();
                assert!(arr.data.is_empty());
                assert!(arr.null_mask.is_none());
            }

            #[test]
            fn bulk_vs_scalar_consistency() {
                let xs: Vec<f64> = vec![$($x),+];
                let bulk = dense_data($kernel(&xs, $($param,)* None, None).unwrap());
                for (i, &x) in xs.iter().enumerate() {
                    let s = $scalar(x, $($param),*);
                    assert!(
                        bulk[i] == s || (bulk[i].is_nan() && s.is_nan()),
                        "lane {i}: {} vs {}",
                        bulk[i],
                        s
                    );
                }
            }

            #[test]
            fn mask_propagation() {
                let mut xs: Vec<f64> = vec![$($x),+];
                xs.push(xs[0]);
                let mask = single_null_mask(xs.len(), 1);
                let arr = $kernel(&xs, $($param,)* Some(&mask), Some(1)).unwrap();
                let out_mask = arr.null_mask.as_ref().unwrap();
                assert!(!out_mask.get(1));
                assert!(arr.data[1].is_nan());
                assert!(out_mask.get(0));
                assert_eq!(arr.data[0], $scalar(xs[0], $($param),*));
            }
        }
    };
}
#[cfg(test)]
pub(crate) use common_tests;
