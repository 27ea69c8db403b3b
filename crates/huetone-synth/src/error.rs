//! Error types for the sonification pipeline.

use huetone_spec::{SpecError, TraversalMode};
use thiserror::Error;

/// Result type for sonification operations.
pub type SonifyResult<T> = Result<T, SonifyError>;

/// Errors that can occur during a sonification run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SonifyError {
    /// Invalid configuration, detected before any synthesis work.
    #[error(transparent)]
    Spec(#[from] SpecError),

    /// Traversal mode is declared but has no implementation.
    #[error("traversal mode '{mode}' is not implemented")]
    NotImplemented {
        /// The unimplemented mode.
        mode: TraversalMode,
    },

    /// Zero-size grid or zero-length scale table.
    #[error("empty input: {what}")]
    EmptyInput {
        /// What turned out to be empty.
        what: &'static str,
    },

    /// The run was cancelled cooperatively between segments.
    #[error("sonification cancelled")]
    Cancelled,
}

impl SonifyError {
    /// Creates an empty-input error.
    pub fn empty_input(what: &'static str) -> Self {
        Self::EmptyInput { what }
    }

    /// Creates a not-implemented error for a traversal mode.
    pub fn not_implemented(mode: TraversalMode) -> Self {
        Self::NotImplemented { mode }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_error_converts() {
        let err: SonifyError = SpecError::InvalidSampleRate { rate: 1234 }.into();
        assert!(matches!(err, SonifyError::Spec(_)));
        assert!(err.to_string().contains("1234"));
    }

    #[test]
    fn test_not_implemented_names_the_mode() {
        let err = SonifyError::not_implemented(TraversalMode::Radial);
        assert!(err.to_string().contains("radial"));
    }
}
