//! Error types for era and active composition

use thiserror::Error;

use crate::{EndpointKind, EraKind};

/// Core Kairos errors
///
/// Every variant is produced eagerly when an era or active value is built
/// or combined. Sampling never fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KairosError {
    // Join errors
    #[error("Incompatible boundary kinds at join: upper {upper:?}, lower {lower:?}")]
    IncompatibleBoundaryKind {
        upper: EndpointKind,
        lower: EndpointKind,
    },

    #[error("Join point is not finite")]
    NonFiniteJoin,

    // Shape errors
    #[error("Invalid era shape: {0}")]
    InvalidEraShape(&'static str),

    #[error("Expected a {expected:?} era, found {found:?}")]
    EraKindMismatch { expected: EraKind, found: EraKind },

    #[error("Era is not bounded on both ends")]
    UnboundedEra,

    #[error("Scale factor must be positive and finite: {0}")]
    NonPositiveFactor(f64),
}

/// Result type for Kairos operations
pub type KairosResult<T> = Result<T, KairosError>;
