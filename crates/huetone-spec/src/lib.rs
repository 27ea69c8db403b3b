//! huetone parameter surface.
//!
//! This crate defines the typed settings that drive a sonification run:
//! which way the image is traversed, how densely it is sampled, and which
//! musical scale/key the sampled hues are quantized against. All selectors
//! are tagged enums resolved once at configuration-parse time; downstream
//! code never dispatches on display strings.
//!
//! # Example
//!
//! ```
//! use huetone_spec::{PitchClass, ScaleName, SonifySpec, TraversalMode};
//!
//! let spec = SonifySpec {
//!     traversal: TraversalMode::LeftToRight,
//!     key: PitchClass::A,
//!     scale: ScaleName::HarmonicMinor,
//!     ..SonifySpec::default()
//! };
//! assert!(spec.validate().is_ok());
//! ```
//!
//! # Crate Structure
//!
//! - [`params`] - `SonifySpec` and the selector enums
//! - [`validation`] - eager parameter validation
//! - [`error`] - `SpecError` taxonomy

pub mod error;
pub mod params;
pub mod validation;

pub use error::{SpecError, SpecResult};
pub use params::{PitchClass, ScaleName, SonifySpec, TraversalMode, SAMPLE_RATES};
