// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Tail Quadrature Module** - *Gauss–Legendre Panels Marched from a Peak*
//!
//! Integrates smooth, unimodal-looking integrands outward from a starting point with composite
//! 8-point Gauss–Legendre panels. Used where a discrete tail is too long to sum term by term
//! but has a smooth continuous counterpart: hypergeometric tails over the real extension of the
//! pmf, and the beta-binomial CDF as a Beta mixture of binomial CDFs.
//!
//! Panels are half a `scale` wide near `centre` and narrow in proportion to the distance from
//! it, so a Gaussian-like integrand is resolved to machine precision even where it falls off
//! by many orders of magnitude per unit of `scale`.
//!
//! The integrand returns `N` components evaluated at the same node, for instance a lower and
//! upper tail together with the mixing density, so one march yields all of them.

use log::warn;

use crate::config::QUADRATURE_MAX_PANELS;
use crate::kernels::scientific::distributions::shared::constants::{
    GAUSS_LEGENDRE_NODES, GAUSS_LEGENDRE_WEIGHTS,
};

/// 8-point Gauss–Legendre rule on [a, b], componentwise.
#[inline]
pub fn gauss_legendre_panel<const N: usize, F>(integrand: &mut F, a: f64, b: f64) -> [f64; N]
where
    F: FnMut(f64) -> [f64; N],
{
    let half_len = 0.5 * (b - a);
    let mid = 0.5 * (a + b);
    let mut acc = [0.0; N];
    for (&node, &weight) in GAUSS_LEGENDRE_NODES.iter().zip(&GAUSS_LEGENDRE_WEIGHTS) {
        for x in [mid - half_len * node, mid + half_len * node] {
            for (s, v) in acc.iter_mut().zip(integrand(x)) {
                *s += weight * v;
            }
        }
    }
    acc.map(|s| s * half_len)
}

/// Direction of a march along the real line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    #[inline(always)]
    fn sign(self) -> f64 {
        match self {
            Direction::Up => 1.0,
            Direction::Down => -1.0,
        }
    }
}

/// One outward march: where it starts, which way it goes and where it must stop.
#[derive(Debug, Clone, Copy)]
pub struct March {
    /// First panel edge.
    pub from: f64,
    /// Location of the peak the panel widths are measured from.
    pub centre: f64,
    /// Width scale of the integrand near its peak (a standard deviation).
    pub scale: f64,
    pub direction: Direction,
    /// Hard end of the domain; the last panel is clipped to it.
    pub limit: f64,
}

/// Integrates `integrand` from `march.from` toward `march.limit`.
///
/// After every panel `settled(panel, previous, total)` decides whether the remaining
/// contribution is negligible; `previous` is the panel before (infinite for the first). The
/// march ends at the limit, when `settled` returns true, or after
/// `config::QUADRATURE_MAX_PANELS` panels, in which case the flag is false.
pub fn integrate_outward<const N: usize, F, S>(
    mut integrand: F,
    march: March,
    mut settled: S,
) -> ([f64; N], bool)
where
    F: FnMut(f64) -> [f64; N],
    S: FnMut(&[f64; N], &[f64; N], &[f64; N]) -> bool,
{
    let sign = march.direction.sign();
    let mut total = [0.0; N];
    let mut previous = [f64::INFINITY; N];
    let mut a = march.from;
    for _ in 0..QUADRATURE_MAX_PANELS {
        let width = 0.5 * march.scale / ((a - march.centre).abs() / march.scale).max(1.0);
        let mut b = a + sign * width;
        let last = (b - march.limit) * sign >= 0.0;
        if last {
            b = march.limit;
        }
        let panel = gauss_legendre_panel(&mut integrand, a.min(b), a.max(b));
        for (t, p) in total.iter_mut().zip(panel) {
            *t += p;
        }
        if last || settled(&panel, &previous, &total) {
            return (total, true);
        }
        previous = panel;
        a = b;
    }
    warn!(
        "integrate_outward: stopped after {QUADRATURE_MAX_PANELS} panels at x={a}, total={:?}",
        total
    );
    (total, false)
}
