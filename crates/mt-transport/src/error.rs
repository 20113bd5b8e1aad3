//! Transport property errors.

use mt_core::CoreError;
use mt_phase::PhaseError;
use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors that can occur while evaluating transport coefficients.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    /// The active transport closure cannot supply this quantity.
    ///
    /// Never substituted with a default value: callers must pick another
    /// closure or another flux formulation.
    #[error("Not implemented: {what}")]
    NotImplemented { what: &'static str },

    /// Non-physical intermediate or result (zero conductivity, NaN, ...).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Phase species list differs from the one the model was built for.
    #[error("Species mismatch: model built for {expected:?}, phase has {got:?}")]
    SpeciesMismatch {
        expected: Vec<String>,
        got: Vec<String>,
    },

    /// Caller buffer does not match the species count.
    #[error("Buffer size mismatch for {what}: expected {expected}, got {got}")]
    BufferSize {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    /// Transport model name not recognized.
    #[error("Unknown transport model: {name}")]
    UnknownModel { name: String },

    #[error(transparent)]
    Phase(#[from] PhaseError),
}

impl From<CoreError> for TransportError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotImplemented { what } => TransportError::NotImplemented { what },
            CoreError::LengthMismatch {
                what,
                expected,
                got,
            } => TransportError::BufferSize {
                what,
                expected,
                got,
            },
            CoreError::NonFinite { what, .. }
            | CoreError::InvalidArg { what }
            | CoreError::Invariant { what } => TransportError::NonPhysical { what },
        }
    }
}

impl From<TransportError> for CoreError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::NotImplemented { what } => CoreError::NotImplemented { what },
            TransportError::NonPhysical { what } => CoreError::Invariant { what },
            TransportError::BufferSize {
                what,
                expected,
                got,
            } => CoreError::LengthMismatch {
                what,
                expected,
                got,
            },
            TransportError::SpeciesMismatch { .. } => CoreError::InvalidArg {
                what: "phase species differ from transport model species",
            },
            TransportError::UnknownModel { .. } => CoreError::InvalidArg {
                what: "unknown transport model",
            },
            TransportError::Phase(e) => e.into(),
        }
    }
}
