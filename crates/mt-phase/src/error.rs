//! Phase state errors.

use mt_core::CoreError;
use thiserror::Error;

/// Result type for phase operations.
pub type PhaseResult<T> = Result<T, PhaseError>;

/// Errors raised while building a phase snapshot.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhaseError {
    /// Non-physical values (negative density, pressure, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Same species listed twice in one composition.
    #[error("Duplicate species in composition: {species}")]
    DuplicateSpecies { species: &'static str },
}

impl From<CoreError> for PhaseError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NonFinite { what, .. } => PhaseError::NonPhysical { what },
            CoreError::InvalidArg { what } => PhaseError::NonPhysical { what },
            CoreError::LengthMismatch { what, .. } => PhaseError::InvalidArg { what },
            CoreError::NotImplemented { what } | CoreError::Invariant { what } => {
                PhaseError::InvalidArg { what }
            }
        }
    }
}

impl From<PhaseError> for CoreError {
    fn from(err: PhaseError) -> Self {
        match err {
            PhaseError::NonPhysical { what } => CoreError::Invariant { what },
            PhaseError::InvalidArg { what } => CoreError::InvalidArg { what },
            PhaseError::DuplicateSpecies { .. } => CoreError::InvalidArg {
                what: "duplicate species",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PhaseError::NonPhysical { what: "pressure" };
        assert!(err.to_string().contains("pressure"));

        let err = PhaseError::DuplicateSpecies { species: "N2" };
        assert!(err.to_string().contains("N2"));
    }

    #[test]
    fn phase_error_to_core_error() {
        let core: CoreError = PhaseError::DuplicateSpecies { species: "N2" }.into();
        assert!(matches!(core, CoreError::InvalidArg { .. }));
    }

    #[test]
    fn core_error_keeps_context() {
        let err: PhaseError = CoreError::NonFinite {
            what: "density",
            value: f64::NAN,
        }
        .into();
        assert_eq!(err, PhaseError::NonPhysical { what: "density" });
    }
}
