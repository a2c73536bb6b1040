//! Compile-time type predicates over scalar tags.
//!
//! Each predicate is a plain conjunction over a candidate list and is
//! vacuously true when the list is empty. All of them are `const fn`, so
//! the natural consumers are static assertions:
//!
//! ```
//! use geoforge_core::{dtypes, typecheck};
//!
//! const _: () = assert!(typecheck::all_floating_point(&dtypes![f32, f64]));
//! ```
//!
//! A false result only matters where a caller asserts on it; the
//! predicates themselves never fail. For erased-dtype entry points, the
//! `ensure_*` variants perform the same checks at runtime and report the
//! first offending tag as a [`GeoForgeError`].

use crate::dtype::DType;
use crate::error::{GeoForgeError, Result};

/// Returns true if every candidate tag is exactly `reference`.
///
/// No conversions are considered; `F32` and `F64` are different types
/// here. Empty candidate lists are vacuously true.
///
/// # Examples
///
/// ```
/// use geoforge_core::{dtypes, typecheck::all_same, DType};
///
/// assert!(all_same(DType::F64, &dtypes![f64, f64, f64]));
/// assert!(!all_same(DType::F64, &dtypes![f64, f32]));
/// ```
pub const fn all_same(reference: DType, candidates: &[DType]) -> bool {
    let mut i = 0;
    while i < candidates.len() {
        if !reference.same_as(candidates[i]) {
            return false;
        }
        i += 1;
    }
    true
}

/// Returns true if every candidate tag converts losslessly to `target`.
///
/// Conversion follows [`DType::converts_to`], the std `From` matrix for
/// numeric primitives. Empty candidate lists are vacuously true.
///
/// # Examples
///
/// ```
/// use geoforge_core::{dtypes, typecheck::all_convertible_to, DType};
///
/// assert!(all_convertible_to(DType::F64, &dtypes![u8, i32, f32]));
/// assert!(!all_convertible_to(DType::F64, &dtypes![u8, i64]));
/// ```
pub const fn all_convertible_to(target: DType, candidates: &[DType]) -> bool {
    let mut i = 0;
    while i < candidates.len() {
        if !candidates[i].converts_to(target) {
            return false;
        }
        i += 1;
    }
    true
}

/// Returns true if every candidate tag is a floating-point type.
///
/// Mixed widths pass; use [`all_same_floating_point`] to require a single
/// precision. Empty candidate lists are vacuously true.
pub const fn all_floating_point(candidates: &[DType]) -> bool {
    let mut i = 0;
    while i < candidates.len() {
        if !candidates[i].is_floating_point() {
            return false;
        }
        i += 1;
    }
    true
}

/// Returns true if every candidate tag is an integral type.
pub const fn all_integral(candidates: &[DType]) -> bool {
    let mut i = 0;
    while i < candidates.len() {
        if !candidates[i].is_integral() {
            return false;
        }
        i += 1;
    }
    true
}

/// Returns true if every candidate tag is `reference` and floating-point.
///
/// Strictly stronger than either [`all_same`] or [`all_floating_point`]
/// alone: a mix of `F32` and `F64` fails the identity half, and a uniform
/// integral tag fails the floating-point half. This is the check behind
/// kernels that stream coordinates from several iterators and require one
/// homogeneous precision across all of them.
///
/// # Examples
///
/// ```
/// use geoforge_core::{dtypes, typecheck::all_same_floating_point, DType};
///
/// assert!(all_same_floating_point(DType::F32, &dtypes![f32, f32]));
/// assert!(!all_same_floating_point(DType::F32, &dtypes![f32, f64]));
/// assert!(!all_same_floating_point(DType::I32, &dtypes![i32, i32]));
/// ```
pub const fn all_same_floating_point(reference: DType, candidates: &[DType]) -> bool {
    all_same(reference, candidates) && all_floating_point(candidates)
}

/// Runtime form of [`all_same`]: reports the first mismatched tag.
pub fn ensure_same(reference: DType, candidates: &[DType]) -> Result<()> {
    for &candidate in candidates {
        if !reference.same_as(candidate) {
            return Err(GeoForgeError::DTypeMismatch {
                expected: reference,
                found: candidate,
            });
        }
    }
    Ok(())
}

/// Runtime form of [`all_convertible_to`].
pub fn ensure_convertible_to(target: DType, candidates: &[DType]) -> Result<()> {
    for &candidate in candidates {
        if !candidate.converts_to(target) {
            return Err(GeoForgeError::NotConvertible {
                from: candidate,
                to: target,
            });
        }
    }
    Ok(())
}

/// Runtime form of [`all_floating_point`].
pub fn ensure_floating_point(candidates: &[DType]) -> Result<()> {
    for &candidate in candidates {
        if !candidate.is_floating_point() {
            return Err(GeoForgeError::NotFloatingPoint(candidate));
        }
    }
    Ok(())
}

/// Runtime form of [`all_integral`].
pub fn ensure_integral(candidates: &[DType]) -> Result<()> {
    for &candidate in candidates {
        if !candidate.is_integral() {
            return Err(GeoForgeError::NotIntegral(candidate));
        }
    }
    Ok(())
}

/// Runtime form of [`all_same_floating_point`].
///
/// The identity check runs first, so a uniform integral list is reported
/// as [`GeoForgeError::NotFloatingPoint`] rather than a mismatch.
pub fn ensure_same_floating_point(reference: DType, candidates: &[DType]) -> Result<()> {
    ensure_same(reference, candidates)?;
    ensure_floating_point(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtypes;

    // ========================================================================
    // Const predicates
    // ========================================================================

    #[test]
    fn test_all_same_repeated() {
        assert!(all_same(DType::F64, &dtypes![f64]));
        assert!(all_same(DType::F64, &dtypes![f64, f64, f64, f64]));
        assert!(all_same(DType::U8, &dtypes![u8, u8]));
    }

    #[test]
    fn test_all_same_wrong_reference() {
        assert!(!all_same(DType::F32, &dtypes![f64, f64]));
        assert!(!all_same(DType::I32, &dtypes![u32]));
    }

    #[test]
    fn test_all_same_mixed_candidates() {
        assert!(!all_same(DType::F64, &dtypes![f64, f32, f64]));
    }

    #[test]
    fn test_empty_lists_are_vacuously_true() {
        assert!(all_same(DType::I8, &[]));
        assert!(all_convertible_to(DType::I8, &[]));
        assert!(all_floating_point(&[]));
        assert!(all_integral(&[]));
        assert!(all_same_floating_point(DType::I8, &[]));
    }

    #[test]
    fn test_mixed_float_widths() {
        let pair = dtypes![f32, f64];
        assert!(all_floating_point(&pair));
        assert!(!all_same_floating_point(DType::F32, &pair));
        assert!(!all_same_floating_point(DType::F64, &pair));
    }

    #[test]
    fn test_integral_pair() {
        let pair = dtypes![i32, i64];
        assert!(all_integral(&pair));
        assert!(!all_floating_point(&pair));
    }

    #[test]
    fn test_all_integral_rejects_floats() {
        assert!(!all_integral(&dtypes![i32, f32]));
    }

    #[test]
    fn test_all_convertible_to_float_target() {
        assert!(all_convertible_to(DType::F64, &dtypes![u8, i32, f32, f64]));
        assert!(all_convertible_to(DType::F32, &dtypes![u8, i16]));
        assert!(!all_convertible_to(DType::F64, &dtypes![i64]));
        assert!(!all_convertible_to(DType::F64, &dtypes![u8, u64]));
        assert!(!all_convertible_to(DType::F32, &dtypes![f64]));
    }

    #[test]
    fn test_all_same_floating_point_rejects_uniform_integral() {
        assert!(all_same(DType::I32, &dtypes![i32, i32]));
        assert!(!all_same_floating_point(DType::I32, &dtypes![i32, i32]));
    }

    #[test]
    fn test_predicates_evaluate_in_const_context() {
        const SAME: bool = all_same_floating_point(DType::F64, &dtypes![f64, f64]);
        const MIXED: bool = all_same_floating_point(DType::F64, &dtypes![f64, f32]);
        assert!(SAME);
        assert!(!MIXED);
    }

    const _: () = assert!(all_integral(&dtypes![u8, u16, u32, u64]));
    const _: () = assert!(all_convertible_to(DType::I64, &dtypes![i8, u32]));

    // ========================================================================
    // Runtime validators
    // ========================================================================

    #[test]
    fn test_ensure_same() {
        assert!(ensure_same(DType::F64, &dtypes![f64, f64]).is_ok());

        let err = ensure_same(DType::F64, &dtypes![f64, f32]).unwrap_err();
        assert!(matches!(
            err,
            GeoForgeError::DTypeMismatch {
                expected: DType::F64,
                found: DType::F32,
            }
        ));
    }

    #[test]
    fn test_ensure_convertible_to() {
        assert!(ensure_convertible_to(DType::F64, &dtypes![u8, f32]).is_ok());

        let err = ensure_convertible_to(DType::F64, &dtypes![u8, u64]).unwrap_err();
        assert!(matches!(
            err,
            GeoForgeError::NotConvertible {
                from: DType::U64,
                to: DType::F64,
            }
        ));
    }

    #[test]
    fn test_ensure_floating_point() {
        assert!(ensure_floating_point(&dtypes![f32, f64]).is_ok());

        let err = ensure_floating_point(&dtypes![f32, i8]).unwrap_err();
        assert!(matches!(err, GeoForgeError::NotFloatingPoint(DType::I8)));
    }

    #[test]
    fn test_ensure_integral() {
        assert!(ensure_integral(&dtypes![u8, i64]).is_ok());

        let err = ensure_integral(&dtypes![f64]).unwrap_err();
        assert!(matches!(err, GeoForgeError::NotIntegral(DType::F64)));
    }

    #[test]
    fn test_ensure_same_floating_point_reports_float_failure() {
        let err = ensure_same_floating_point(DType::I32, &dtypes![i32, i32]).unwrap_err();
        assert!(matches!(err, GeoForgeError::NotFloatingPoint(DType::I32)));
    }
}
