// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Parameter Validation** - *Validity Domains for Distribution Parameters*
//!
//! Small predicates shared by every `<distribution>_check` validator. Each returns
//! `KernelError::InvalidArguments` naming the distribution, the parameter and the value.
//!
//! Scalar entry points run their validator through [`debug_check!`], which panics in
//! builds with `debug_assertions` and compiles away otherwise. Checked bulk kernels call the
//! same validator and propagate the error with `?`.

use crate::errors::KernelError;

/// Panics with the validator's message when `debug_assertions` are on; no-op otherwise.
macro_rules! debug_check {
    ($check:expr) => {
        if cfg!(debug_assertions) {
            if let Err(e) = $check {
                panic!("{}", e);
            }
        }
    };
}
pub(crate) use debug_check;

#[inline(never)]
#[cold]
fn invalid(dist: &str, name: &str, rule: &str, value: impl std::fmt::Display) -> KernelError {
    KernelError::InvalidArguments(format!("{dist}: `{name}` must be {rule}, got {value}"))
}

/// v ∈ (−∞, ∞)
#[inline]
pub(crate) fn finite(dist: &str, name: &str, v: f64) -> Result<(), KernelError> {
    if v.is_finite() { Ok(()) } else { Err(invalid(dist, name, "finite", v)) }
}

/// v ∈ (0, ∞)
#[inline]
pub(crate) fn positive(dist: &str, name: &str, v: f64) -> Result<(), KernelError> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(invalid(dist, name, "finite and > 0", v))
    }
}

/// v ∈ [0, 1]
#[inline]
pub(crate) fn probability(dist: &str, name: &str, v: f64) -> Result<(), KernelError> {
    if (0.0..=1.0).contains(&v) {
        Ok(())
    } else {
        Err(invalid(dist, name, "in [0, 1]", v))
    }
}

/// v ∈ (0, 1]
#[inline]
pub(crate) fn positive_probability(dist: &str, name: &str, v: f64) -> Result<(), KernelError> {
    if v > 0.0 && v <= 1.0 {
        Ok(())
    } else {
        Err(invalid(dist, name, "in (0, 1]", v))
    }
}

/// v ∈ (0, 1)
#[inline]
pub(crate) fn open_probability(dist: &str, name: &str, v: f64) -> Result<(), KernelError> {
    if v > 0.0 && v < 1.0 {
        Ok(())
    } else {
        Err(invalid(dist, name, "in (0, 1)", v))
    }
}

/// Integer-valued lower bound, e.g. `base ≥ 2`.
#[inline]
pub(crate) fn at_least<T>(dist: &str, name: &str, v: T, min: T) -> Result<(), KernelError>
where
    T: PartialOrd + std::fmt::Display,
{
    if v >= min {
        Ok(())
    } else {
        Err(invalid(dist, name, &format!(">= {min}"), v))
    }
}

/// Integer-valued upper bound tied to another parameter, e.g. `good ≤ total`.
#[inline]
pub(crate) fn at_most<T>(
    dist: &str,
    name: &str,
    v: T,
    bound_name: &str,
    bound: T,
) -> Result<(), KernelError>
where
    T: PartialOrd + std::fmt::Display,
{
    if v <= bound {
        Ok(())
    } else {
        Err(invalid(dist, name, &format!("<= `{bound_name}` ({bound})"), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates_accept_their_domains() {
        assert!(finite("d", "x", -3.0).is_ok());
        assert!(positive("d", "x", 1e-300).is_ok());
        assert!(probability("d", "p", 0.0).is_ok());
        assert!(probability("d", "p", 1.0).is_ok());
        assert!(positive_probability("d", "p", 1.0).is_ok());
        assert!(open_probability("d", "p", 0.5).is_ok());
        assert!(at_least("d", "n", 2u64, 2u64).is_ok());
        assert!(at_most("d", "k", 3u64, "n", 3u64).is_ok());
    }

    #[test]
    fn predicates_reject_outside_values() {
        assert!(finite("d", "x", f64::NAN).is_err());
        assert!(finite("d", "x", f64::INFINITY).is_err());
        assert!(positive("d", "x", 0.0).is_err());
        assert!(positive("d", "x", f64::INFINITY).is_err());
        assert!(probability("d", "p", 1.5).is_err());
        assert!(probability("d", "p", f64::NAN).is_err());
        assert!(positive_probability("d", "p", 0.0).is_err());
        assert!(open_probability("d", "p", 1.0).is_err());
        assert!(at_least("d", "n", 1u64, 2u64).is_err());
        assert!(at_most("d", "k", 4i64, "n", 3i64).is_err());
    }

    #[test]
    fn message_names_distribution_and_parameter() {
        let e = positive("gamma", "scale", -2.0).unwrap_err();
        assert_eq!(
            e,
            KernelError::InvalidArguments("gamma: `scale` must be finite and > 0, got -2".into())
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "`prob` must be in [0, 1]")]
    fn debug_check_panics_in_debug_builds() {
        debug_check!(probability("bernoulli", "prob", 2.0));
    }
}
