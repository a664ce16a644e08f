// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Lane loops behind every checked bulk kernel.
//!
//! Non-finite results are never nulled: a density of `+∞` at a pole or an infinite quantile at
//! p = 1 is a value, so only input nulls clear validity bits.

use minarrow::{Bitmask, Vec64};

/// Evaluates `scalar_body` on every lane.
#[inline(always)]
pub fn eval_dense_lanes<FScalar>(x: &[f64], scalar_body: FScalar) -> Vec64<f64>
where
    FScalar: Fn(f64) -> f64,
{
    let mut out = Vec64::with_capacity(x.len());
    for &xi in x {
        out.push(scalar_body(xi));
    }
    out
}

/// Evaluates `scalar_body` on the valid lanes of `x`; null lanes become `NaN`.
///
/// Returns the values with a fresh validity mask mirroring `mask` over `x.len()` lanes.
/// The caller guarantees `mask.len() >= x.len()`.
#[inline(always)]
pub fn eval_masked_lanes<FScalar>(
    x: &[f64],
    mask: &Bitmask,
    scalar_body: FScalar,
) -> (Vec64<f64>, Bitmask)
where
    FScalar: Fn(f64) -> f64,
{
    let mut out = Vec64::with_capacity(x.len());
    let mut validity = Bitmask::new_set_all(x.len(), true);

    for (lane, &xi) in x.iter().enumerate() {
        // SAFETY: lane < x.len() <= mask.len() == validity.len() for the bound we read
        let valid = unsafe { mask.get_unchecked(lane) };
        if valid {
            out.push(scalar_body(xi));
        } else {
            out.push(f64::NAN);
            unsafe { validity.set_unchecked(lane, false) };
        }
    }

    (out, validity)
}
