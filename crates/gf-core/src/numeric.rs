use crate::{GfError, GfResult};

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> GfResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(GfError::NonFinite { what, value: v })
    }
}

/// Weighted mean `(w1*a + w2*b) / (w1 + w2)`.
///
/// No guard on the denominator: a zero total weight yields NaN or Inf.
#[inline]
pub fn weighted_mean(w1: Real, a: Real, w2: Real, b: Real) -> Real {
    (w1 * a + w2 * b) / (w1 + w2)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn weighted_mean_is_bounded(
            w1 in 0.01_f64..100.0,
            w2 in 0.01_f64..100.0,
            a in -1e3_f64..1e3,
            b in -1e3_f64..1e3,
        ) {
            let m = weighted_mean(w1, a, w2, b);
            let tol = Tolerances { abs: 1e-9, rel: 1e-9 };
            prop_assert!(m >= a.min(b) || nearly_equal(m, a.min(b), tol));
            prop_assert!(m <= a.max(b) || nearly_equal(m, a.max(b), tol));
        }

        #[test]
        fn weighted_mean_is_symmetric(
            w1 in 0.01_f64..100.0,
            w2 in 0.01_f64..100.0,
            a in -1e3_f64..1e3,
            b in -1e3_f64..1e3,
        ) {
            let tol = Tolerances::default();
            prop_assert!(nearly_equal(weighted_mean(w1, a, w2, b), weighted_mean(w2, b, w1, a), tol));
        }
    }
}
