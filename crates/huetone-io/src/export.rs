//! Song export to audio files.
//!
//! WAV is written as 16-bit mono integer PCM at the song's sample rate.
//! Other target formats are rejected up front, before touching the
//! filesystem.

use std::fmt;
use std::path::Path;

use log::info;

use huetone_synth::Song;

use crate::error::{ExportError, ExportResult};

/// Audio file formats offered by the export surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Uncompressed RIFF waveform.
    Wav,
    /// MPEG layer 3; recognized but has no encoder.
    Mp3,
}

impl ExportFormat {
    /// Infers the format from a path's extension.
    pub fn from_path(path: impl AsRef<Path>) -> ExportResult<Self> {
        let path = path.as_ref();
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("wav") => Ok(ExportFormat::Wav),
            Some("mp3") => Ok(ExportFormat::Mp3),
            _ => Err(ExportError::UnknownExtension {
                path: path.display().to_string(),
            }),
        }
    }

    /// Extension string for this format.
    pub fn as_str(self) -> &'static str {
        match self {
            ExportFormat::Wav => "wav",
            ExportFormat::Mp3 => "mp3",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Writes `song` to `path` in the given format.
///
/// # Errors
/// - `UnsupportedFormat` for formats without an encoder (`Mp3`), reported
///   before any file is created.
/// - `Encode` for WAV encoding or I/O failures.
pub fn export_song(song: &Song, path: impl AsRef<Path>, format: ExportFormat) -> ExportResult<()> {
    match format {
        ExportFormat::Wav => write_wav(song, path.as_ref()),
        ExportFormat::Mp3 => Err(ExportError::UnsupportedFormat { format }),
    }
}

/// Writes `song` to `path`, inferring the format from the extension.
pub fn export_song_to_path(song: &Song, path: impl AsRef<Path>) -> ExportResult<()> {
    let format = ExportFormat::from_path(path.as_ref())?;
    export_song(song, path, format)
}

fn write_wav(song: &Song, path: &Path) -> ExportResult<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: song.sample_rate(),
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;
    for &sample in song.samples() {
        // Clip to [-1, 1] and scale to 16-bit signed PCM.
        let pcm = (sample.clamp(-1.0, 1.0) * 32767.0).round() as i16;
        writer.write_sample(pcm)?;
    }
    writer.finalize()?;
    info!(
        "exported {:.2} s of audio to '{}'",
        song.duration_seconds(),
        path.display()
    );
    Ok(())
}
