//! Scalar identity tags.
//!
//! [`DType`] names every scalar type GeoForge can store in a coordinate
//! column. The tag is the value-level mirror of the [`Scalar`] trait family:
//! generic code constrains element types with trait bounds, while erased
//! code (column readers, format negotiation) carries a `DType` and checks it
//! with the predicates in [`crate::typecheck`].
//!
//! [`Scalar`]: crate::scalar::Scalar

use std::fmt;
use std::str::FromStr;

use crate::error::GeoForgeError;

/// Identity tag for a supported scalar type.
///
/// The universe is the ten fixed-width numeric primitives. Platform-sized
/// integers (`usize`, `isize`) are deliberately absent: a tag must mean the
/// same type on every machine that reads it.
///
/// # Examples
///
/// ```
/// use geoforge_core::DType;
///
/// assert!(DType::F64.is_floating_point());
/// assert!(DType::U32.is_integral());
/// assert!(DType::U8.converts_to(DType::F64));
/// assert_eq!("f32".parse::<DType>().unwrap(), DType::F32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DType {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
}

impl DType {
    /// Every supported tag, in declaration order.
    pub const ALL: [DType; 10] = [
        DType::I8,
        DType::I16,
        DType::I32,
        DType::I64,
        DType::U8,
        DType::U16,
        DType::U32,
        DType::U64,
        DType::F32,
        DType::F64,
    ];

    /// Returns true if this tag names a floating-point type.
    #[inline]
    pub const fn is_floating_point(self) -> bool {
        matches!(self, DType::F32 | DType::F64)
    }

    /// Returns true if this tag names an integral type.
    #[inline]
    pub const fn is_integral(self) -> bool {
        !self.is_floating_point()
    }

    /// Returns true if both tags name exactly the same type.
    ///
    /// This is `==` made `const fn` so the predicates in
    /// [`crate::typecheck`] can run in const contexts.
    #[inline]
    pub const fn same_as(self, other: DType) -> bool {
        self as u8 == other as u8
    }

    /// Returns true if the tagged type converts losslessly into `target`.
    ///
    /// "Losslessly" means the standard library provides a `From` impl for
    /// the pair: every value of `self` is exactly representable in
    /// `target`. Reflexive. Note the asymmetries this implies compared to
    /// looser conversion rules, e.g. `I64` does not convert to `F64`
    /// (53-bit mantissa) and `I32` does not convert to `F32`.
    pub const fn converts_to(self, target: DType) -> bool {
        match self {
            DType::I8 => matches!(
                target,
                DType::I8 | DType::I16 | DType::I32 | DType::I64 | DType::F32 | DType::F64
            ),
            DType::I16 => matches!(
                target,
                DType::I16 | DType::I32 | DType::I64 | DType::F32 | DType::F64
            ),
            DType::I32 => matches!(target, DType::I32 | DType::I64 | DType::F64),
            DType::I64 => matches!(target, DType::I64),
            DType::U8 => matches!(
                target,
                DType::U8
                    | DType::U16
                    | DType::U32
                    | DType::U64
                    | DType::I16
                    | DType::I32
                    | DType::I64
                    | DType::F32
                    | DType::F64
            ),
            DType::U16 => matches!(
                target,
                DType::U16 | DType::U32 | DType::U64 | DType::I32 | DType::I64 | DType::F32 | DType::F64
            ),
            DType::U32 => matches!(target, DType::U32 | DType::U64 | DType::I64 | DType::F64),
            DType::U64 => matches!(target, DType::U64),
            DType::F32 => matches!(target, DType::F32 | DType::F64),
            DType::F64 => matches!(target, DType::F64),
        }
    }

    /// Returns the width of the tagged type in bytes.
    #[inline]
    pub const fn size_of(self) -> usize {
        match self {
            DType::I8 | DType::U8 => 1,
            DType::I16 | DType::U16 => 2,
            DType::I32 | DType::U32 | DType::F32 => 4,
            DType::I64 | DType::U64 | DType::F64 => 8,
        }
    }

    /// Returns the canonical lowercase name of the tagged type.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            DType::I8 => "i8",
            DType::I16 => "i16",
            DType::I32 => "i32",
            DType::I64 => "i64",
            DType::U8 => "u8",
            DType::U16 => "u16",
            DType::U32 => "u32",
            DType::U64 => "u64",
            DType::F32 => "f32",
            DType::F64 => "f64",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DType {
    type Err = GeoForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "i8" => Ok(DType::I8),
            "i16" => Ok(DType::I16),
            "i32" => Ok(DType::I32),
            "i64" => Ok(DType::I64),
            "u8" => Ok(DType::U8),
            "u16" => Ok(DType::U16),
            "u32" => Ok(DType::U32),
            "u64" => Ok(DType::U64),
            "f32" => Ok(DType::F32),
            "f64" => Ok(DType::F64),
            other => Err(GeoForgeError::UnknownDType(other.to_string())),
        }
    }
}
