// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Support descriptors: the set of arguments where a density or mass is nonzero.

/// Domain of a distribution.
///
/// Bounds are the infimum and supremum; either may be infinite. They are also the values
/// returned by `quantile(0)` and `quantile(1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Support {
    /// Every real number between the bounds.
    Continuous { lower: f64, upper: f64 },
    /// Every integer between the bounds, inclusive.
    Discrete { lower: f64, upper: f64 },
}

impl Support {
    /// Infimum of the support.
    #[inline]
    pub fn lower(&self) -> f64 {
        match *self {
            Support::Continuous { lower, .. } | Support::Discrete { lower, .. } => lower,
        }
    }

    /// Supremum of the support.
    #[inline]
    pub fn upper(&self) -> f64 {
        match *self {
            Support::Continuous { upper, .. } | Support::Discrete { upper, .. } => upper,
        }
    }

    #[inline]
    pub fn is_discrete(&self) -> bool {
        matches!(self, Support::Discrete { .. })
    }

    /// Quantile outside the open unit interval: NaN for NaN, the infimum for p ≤ 0 and the
    /// supremum for p ≥ 1. `None` for 0 < p < 1.
    #[inline]
    pub fn edge_quantile(&self, p: f64) -> Option<f64> {
        if p.is_nan() {
            Some(f64::NAN)
        } else if p <= 0.0 {
            Some(self.lower())
        } else if p >= 1.0 {
            Some(self.upper())
        } else {
            None
        }
    }

    /// Whether `x` is a point of the support.
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        match *self {
            Support::Continuous { lower, upper } => x >= lower && x <= upper,
            Support::Discrete { lower, upper } => x >= lower && x <= upper && x.fract() == 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_and_membership() {
        let c = Support::Continuous { lower: 0.0, upper: f64::INFINITY };
        assert_eq!(c.lower(), 0.0);
        assert!(c.upper().is_infinite());
        assert!(c.contains(2.5));
        assert!(!c.contains(-1.0));
        assert!(!c.is_discrete());

        let d = Support::Discrete { lower: 1.0, upper: 9.0 };
        assert!(d.is_discrete());
        assert!(d.contains(3.0));
        assert!(!d.contains(3.5));
        assert!(!d.contains(10.0));
        assert!(!d.contains(f64::NAN));
    }

    #[test]
    fn edge_quantiles() {
        let s = Support::Continuous { lower: -1.0, upper: 2.0 };
        assert_eq!(s.edge_quantile(0.0), Some(-1.0));
        assert_eq!(s.edge_quantile(-3.0), Some(-1.0));
        assert_eq!(s.edge_quantile(1.0), Some(2.0));
        assert_eq!(s.edge_quantile(0.3), None);
        assert!(s.edge_quantile(f64::NAN).unwrap().is_nan());
    }
}
