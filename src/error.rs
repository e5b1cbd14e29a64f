//! Error type shared by validation, the algorithms and the simulator.

use thiserror::Error;

use crate::validation::ValidationError;

/// Failure of a simulation request.
///
/// The simulation is deterministic and total on valid input, so there are
/// no transient variants: either the input was rejected up front, or an
/// internal invariant broke and the run was aborted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchedulerError {
    /// The input failed validation. Carries every problem found.
    #[error("invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),

    /// An algorithm reached a state that valid input cannot produce.
    #[error("internal inconsistency in {algorithm}: {message}")]
    InternalInconsistency {
        /// Short name of the algorithm that failed (e.g. "SRTF").
        algorithm: &'static str,
        /// What went wrong.
        message: String,
    },
}

impl SchedulerError {
    pub(crate) fn inconsistency(algorithm: &'static str, message: impl Into<String>) -> Self {
        Self::InternalInconsistency {
            algorithm,
            message: message.into(),
        }
    }

    /// Validation errors carried by an `InvalidInput`, empty otherwise.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidInput(errors) => errors,
            Self::InternalInconsistency { .. } => &[],
        }
    }
}

impl From<Vec<ValidationError>> for SchedulerError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_invalid_input_display_joins_messages() {
        let err = SchedulerError::InvalidInput(vec![
            ValidationError::new(ValidationErrorKind::EmptyProcessSet, "no processes"),
            ValidationError::new(ValidationErrorKind::NonPositiveQuantum, "quantum is 0"),
        ]);
        assert_eq!(err.to_string(), "invalid input: no processes; quantum is 0");
        assert_eq!(err.validation_errors().len(), 2);
    }

    #[test]
    fn test_inconsistency_display() {
        let err = SchedulerError::inconsistency("SJF", "no eligible process at tick 4");
        assert_eq!(
            err.to_string(),
            "internal inconsistency in SJF: no eligible process at tick 4"
        );
        assert!(err.validation_errors().is_empty());
    }
}
