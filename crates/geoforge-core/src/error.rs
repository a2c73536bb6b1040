//! Error types for GeoForge

use thiserror::Error;

use crate::dtype::DType;

/// Main error type for GeoForge core operations.
///
/// The compile-time predicates in [`crate::typecheck`] never produce these;
/// only the runtime surfaces do (tag parsing and the `ensure_*` validators
/// used by erased-dtype entry points).
#[derive(Debug, Error)]
pub enum GeoForgeError {
    /// A scalar type name that no [`DType`] tag corresponds to
    #[error("Unknown scalar type name: '{0}'")]
    UnknownDType(String),

    /// A candidate tag differed from the required reference tag
    #[error("Scalar type mismatch: expected {expected}, found {found}")]
    DTypeMismatch {
        /// The tag every candidate was required to match
        expected: DType,
        /// The first candidate that did not
        found: DType,
    },

    /// A candidate tag was not a floating-point type
    #[error("Expected a floating-point type, found {0}")]
    NotFloatingPoint(DType),

    /// A candidate tag was not an integral type
    #[error("Expected an integral type, found {0}")]
    NotIntegral(DType),

    /// A candidate tag has no lossless conversion to the target tag
    #[error("{from} is not losslessly convertible to {to}")]
    NotConvertible {
        /// The candidate tag
        from: DType,
        /// The conversion target
        to: DType,
    },
}

/// Result type alias for GeoForge core operations
pub type Result<T> = std::result::Result<T, GeoForgeError>;
