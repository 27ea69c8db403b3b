//! Error types for the parameter surface.

use thiserror::Error;

/// Result type for parameter parsing and validation.
pub type SpecResult<T> = Result<T, SpecError>;

/// Errors produced while parsing or validating sonification parameters.
///
/// All of these are detected eagerly, before any synthesis work begins.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpecError {
    /// Key name is not one of the 12 chromatic pitch classes.
    #[error("unknown key: '{name}'")]
    UnknownKey {
        /// The rejected key name.
        name: String,
    },

    /// Scale name is not in the fixed catalog.
    #[error("unknown scale: '{name}'")]
    UnknownScale {
        /// The rejected scale name.
        name: String,
    },

    /// Traversal mode name is not recognized.
    #[error("unknown traversal mode: '{name}'")]
    UnknownTraversal {
        /// The rejected mode name.
        name: String,
    },

    /// Stride must be at least 1.
    #[error("invalid {axis} stride: {value} (must be >= 1)")]
    InvalidStride {
        /// Which stride axis was rejected ("row" or "col").
        axis: &'static str,
        /// The rejected stride value.
        value: u32,
    },

    /// Sample rate outside the supported set.
    #[error("invalid sample rate: {rate} Hz (supported: 22050, 44100, 48000)")]
    InvalidSampleRate {
        /// The rejected sample rate.
        rate: u32,
    },

    /// Note duration must be positive and finite.
    #[error("invalid note duration: {duration} seconds")]
    InvalidDuration {
        /// The rejected duration.
        duration: f64,
    },

    /// Reference octave outside the piano range.
    #[error("invalid octave: {octave} (must be 0..=8)")]
    InvalidOctave {
        /// The rejected octave.
        octave: u8,
    },
}

impl SpecError {
    /// Creates an unknown-key error.
    pub fn unknown_key(name: impl Into<String>) -> Self {
        Self::UnknownKey { name: name.into() }
    }

    /// Creates an unknown-scale error.
    pub fn unknown_scale(name: impl Into<String>) -> Self {
        Self::UnknownScale { name: name.into() }
    }

    /// Creates an unknown-traversal error.
    pub fn unknown_traversal(name: impl Into<String>) -> Self {
        Self::UnknownTraversal { name: name.into() }
    }
}
