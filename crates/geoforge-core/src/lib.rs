//! GeoForge Core - Scalar typing and coordinate traits for GeoForge
//!
//! This crate provides the fundamental abstractions for GeoForge:
//! - Scalar identity tags ([`DType`]) mirroring every supported element type
//! - Capability traits ([`Scalar`], [`FloatScalar`], [`IntScalar`]) for
//!   constraining generic kernels
//! - Compile-time predicates over scalar type sets ([`typecheck`])
//! - Type projections from coordinate iterators ([`IterValue`], [`IterScalar`])
//! - The concrete [`Vec2d`] coordinate type

pub mod coord;
pub mod dtype;
pub mod error;
pub mod scalar;
pub mod typecheck;
pub mod vec2d;

pub use coord::{Coord2d, IterScalar, IterValue};
pub use dtype::DType;
pub use error::{GeoForgeError, Result};
pub use scalar::{dtype_of, FloatScalar, IntScalar, Scalar};
pub use typecheck::{
    all_convertible_to, all_floating_point, all_integral, all_same, all_same_floating_point,
};
pub use vec2d::Vec2d;
