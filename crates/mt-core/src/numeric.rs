use crate::CoreError;

/// Floating point type used throughout system
pub type Real = f64;

/// Absolute + relative tolerance pair.
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

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Finite and strictly positive, as required of densities, heat capacities
/// and transport coefficients.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, CoreError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(CoreError::InvalidArg { what })
    }
}

/// Caller-supplied output buffers must match the species count.
pub fn ensure_len(what: &'static str, expected: usize, got: usize) -> Result<(), CoreError> {
    if expected == got {
        Ok(())
    } else {
        Err(CoreError::LengthMismatch {
            what,
            expected,
            got,
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn nearly_equal_is_symmetric(a in -1e6_f64..1e6, b in -1e6_f64..1e6) {
            let tol = Tolerances::default();
            prop_assert_eq!(nearly_equal(a, b, tol), nearly_equal(b, a, tol));
        }
    }
}
