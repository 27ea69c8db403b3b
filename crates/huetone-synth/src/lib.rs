//! huetone sonification pipeline.
//!
//! This crate turns a grid of pixel hues into a mono audio signal:
//!
//! 1. the grid is traversed in a deterministic order ([`traverse`]),
//! 2. each sampled hue is quantized to a pitch drawn from the active
//!    musical scale/key ([`hue`], [`scale`], [`note`]),
//! 3. a short additive-harmonic tone is rendered per sample
//!    ([`synthesis`]),
//! 4. tones are concatenated in traversal order into a [`Song`], with
//!    per-segment progress reporting ([`engine`]).
//!
//! # Determinism
//!
//! The pipeline uses no randomness: the same grid and spec always produce
//! the same song, and traversals are restartable. Segment order encodes
//! image scan order, so synthesis is strictly sequential.
//!
//! # Example
//!
//! ```
//! use huetone_spec::{PitchClass, ScaleName, SonifySpec};
//! use huetone_synth::{sonify, HueGrid};
//!
//! let grid = HueGrid::from_fn(10, 10, |row, col| ((row + col) * 9) as u8);
//! let spec = SonifySpec {
//!     key: PitchClass::A,
//!     scale: ScaleName::HarmonicMinor,
//!     ..SonifySpec::default()
//! };
//! let song = sonify(&grid, &spec)?;
//! assert_eq!(song.sample_rate(), 44100);
//! # Ok::<(), huetone_synth::SonifyError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`note`] - note names and the 88-key frequency table
//! - [`scale`] - scale catalog, key rotation, quantization table
//! - [`hue`] - hue bucket thresholds and hue-to-frequency mapping
//! - [`traverse`] - hue grids and traversal iterators
//! - [`synthesis`] - additive harmonic tone rendering
//! - [`engine`] - orchestration, background worker, progress events

pub mod engine;
pub mod error;
pub mod hue;
pub mod note;
pub mod scale;
pub mod synthesis;
pub mod traverse;

// Re-export main types at crate root
pub use engine::{sonify, sonify_with_progress, Progress, Song, SonifyEvent, SonifyHandle};
pub use error::{SonifyError, SonifyResult};
pub use note::{FrequencyTable, NoteName, Pitch};
pub use scale::{resolve_scale, ScaleTable};
pub use traverse::{traverse, HueGrid, TraversalConfig};
