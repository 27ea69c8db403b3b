//! Error types for collaborator adapters.

use thiserror::Error;

use crate::export::ExportFormat;

/// Result type for image-source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Errors while turning a raster file into a hue grid.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The file could not be opened or decoded as an image.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// The decoded image has zero area.
    #[error("image '{path}' has zero area")]
    EmptyImage {
        /// Offending file path.
        path: String,
    },
}

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors while persisting a song to an audio file.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The target format has no encoder.
    #[error("exporting to {format} is not supported")]
    UnsupportedFormat {
        /// The rejected format.
        format: ExportFormat,
    },

    /// The target path carries no recognized audio extension.
    #[error("cannot infer an audio format from '{path}'")]
    UnknownExtension {
        /// Offending file path.
        path: String,
    },

    /// WAV encoding or file I/O failed.
    #[error("WAV encoding failed: {0}")]
    Encode(#[from] hound::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_names_the_format() {
        let err = ExportError::UnsupportedFormat {
            format: ExportFormat::Mp3,
        };
        assert!(err.to_string().contains("mp3"));
    }
}
