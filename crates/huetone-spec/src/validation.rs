//! Eager parameter validation.
//!
//! Configuration problems are reported here, before any traversal or
//! synthesis work begins, so a failed run has no side effects.

use crate::error::{SpecError, SpecResult};
use crate::params::{SonifySpec, SAMPLE_RATES};

/// Highest octave present on the 88-key range.
pub const MAX_OCTAVE: u8 = 8;

/// Validates a sonification spec.
///
/// # Errors
/// Returns the first [`SpecError`] encountered, checking strides, sample
/// rate, note duration, and reference octave in that order.
pub fn validate(spec: &SonifySpec) -> SpecResult<()> {
    if spec.row_stride == 0 {
        return Err(SpecError::InvalidStride {
            axis: "row",
            value: spec.row_stride,
        });
    }
    if spec.col_stride == 0 {
        return Err(SpecError::InvalidStride {
            axis: "col",
            value: spec.col_stride,
        });
    }
    if !SAMPLE_RATES.contains(&spec.sample_rate) {
        return Err(SpecError::InvalidSampleRate {
            rate: spec.sample_rate,
        });
    }
    if !(spec.note_duration.is_finite() && spec.note_duration > 0.0) {
        return Err(SpecError::InvalidDuration {
            duration: spec.note_duration,
        });
    }
    if spec.octave > MAX_OCTAVE {
        return Err(SpecError::InvalidOctave {
            octave: spec.octave,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_spec_is_valid() {
        assert!(validate(&SonifySpec::default()).is_ok());
    }

    #[test]
    fn test_zero_stride_rejected() {
        let spec = SonifySpec {
            row_stride: 0,
            ..SonifySpec::default()
        };
        assert_eq!(
            validate(&spec),
            Err(SpecError::InvalidStride {
                axis: "row",
                value: 0
            })
        );
    }

    #[test]
    fn test_unsupported_sample_rate_rejected() {
        let spec = SonifySpec {
            sample_rate: 96000,
            ..SonifySpec::default()
        };
        assert_eq!(
            validate(&spec),
            Err(SpecError::InvalidSampleRate { rate: 96000 })
        );
    }

    #[test]
    fn test_nonpositive_or_nan_duration_rejected() {
        for duration in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            let spec = SonifySpec {
                note_duration: duration,
                ..SonifySpec::default()
            };
            assert!(validate(&spec).is_err(), "duration {duration} accepted");
        }
    }

    #[test]
    fn test_octave_out_of_range_rejected() {
        let spec = SonifySpec {
            octave: 9,
            ..SonifySpec::default()
        };
        assert_eq!(validate(&spec), Err(SpecError::InvalidOctave { octave: 9 }));
    }
}
