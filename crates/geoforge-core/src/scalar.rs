//! Scalar capability traits.
//!
//! These are the bound-level counterpart of [`DType`]: where erased code
//! compares tags, generic code constrains its type parameters. A generic
//! distance kernel takes `T: FloatScalar`; a column loader that has only a
//! runtime tag matches on `DType`. The associated const [`Scalar::DTYPE`]
//! ties the two worlds together.

use std::fmt;

use num_traits::{Float, Num, NumCast, PrimInt};

use crate::dtype::DType;

/// Base trait for every scalar type a coordinate may use.
///
/// Implemented for exactly the ten primitives named by [`DType`]; the
/// associated [`DTYPE`](Self::DTYPE) tag identifies which one, and is what
/// the compile-time predicates in [`crate::typecheck`] operate on.
///
/// # Examples
///
/// ```
/// use geoforge_core::{DType, Scalar};
///
/// assert_eq!(<f64 as Scalar>::DTYPE, DType::F64);
/// assert_eq!(<u16 as Scalar>::DTYPE.size_of(), 2);
/// ```
pub trait Scalar:
    Copy
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + Num
    + NumCast
    + 'static
{
    /// The identity tag of this type.
    const DTYPE: DType;
}

/// Marker trait for floating-point scalars (`f32`, `f64`).
///
/// Algorithms that assume real-valued arithmetic (distances, areas,
/// centroids) bound their element type with this trait, rejecting integral
/// coordinates at compile time.
pub trait FloatScalar: Scalar + Float {}

/// Marker trait for integral scalars.
pub trait IntScalar: Scalar + PrimInt {}

macro_rules! impl_int_scalar {
    ($($ty:ty => $tag:ident),+ $(,)?) => {$(
        impl Scalar for $ty {
            const DTYPE: DType = DType::$tag;
        }

        impl IntScalar for $ty {}
    )+};
}

macro_rules! impl_float_scalar {
    ($($ty:ty => $tag:ident),+ $(,)?) => {$(
        impl Scalar for $ty {
            const DTYPE: DType = DType::$tag;
        }

        impl FloatScalar for $ty {}
    )+};
}

impl_int_scalar!(
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
);

impl_float_scalar!(f32 => F32, f64 => F64);

/// Returns the identity tag of `T`.
///
/// A const-context bridge from a type parameter to its tag, for use in
/// static assertions inside generic code.
#[inline]
pub const fn dtype_of<T: Scalar>() -> DType {
    T::DTYPE
}

/// Expands to a `[DType; N]` array holding the tags of the listed scalar
/// types, in order.
///
/// This is the type-list surface of the predicates in
/// [`crate::typecheck`]: where the caller thinks in types, the predicates
/// think in tags.
///
/// # Examples
///
/// ```
/// use geoforge_core::{dtypes, DType};
///
/// assert_eq!(dtypes![f32, i64], [DType::F32, DType::I64]);
/// ```
#[macro_export]
macro_rules! dtypes {
    ($($ty:ty),* $(,)?) => {
        [$(<$ty as $crate::Scalar>::DTYPE),*]
    };
}
