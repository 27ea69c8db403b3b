//! huetone collaborator adapters.
//!
//! The sonification pipeline in `huetone-synth` works on hue grids and
//! produces [`Song`](huetone_synth::Song)s; this crate connects both ends
//! to the outside world:
//!
//! - [`source`] - decode a raster file and extract its hue channel
//! - [`export`] - persist a song as a 16-bit mono PCM WAV file
//! - [`playback`] - the audio-sink seam with the single-playback invariant
//!
//! # Example
//!
//! ```no_run
//! use huetone_io::{export_song_to_path, load_hue_grid};
//! use huetone_spec::SonifySpec;
//! use huetone_synth::sonify;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let grid = load_hue_grid("input.png")?;
//! let song = sonify(&grid, &SonifySpec::default())?;
//! export_song_to_path(&song, "output.wav")?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod export;
pub mod playback;
pub mod source;

// Re-export main types at crate root
pub use error::{ExportError, ExportResult, SourceError, SourceResult};
pub use export::{export_song, export_song_to_path, ExportFormat};
pub use playback::{AudioSink, Playback};
pub use source::{hue_grid_from_rgb, load_hue_grid, rgb_to_hue};
