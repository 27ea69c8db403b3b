//! Image decoding into hue grids.
//!
//! Pixels are converted to HSV and only the hue channel is kept, using the
//! half-range convention (0..=180) the quantizer expects.

use std::path::Path;

use image::RgbImage;
use log::debug;

use huetone_synth::HueGrid;

use crate::error::{SourceError, SourceResult};

/// Hue of an RGB pixel in the half-range convention.
///
/// The full 0..360 HSV angle is halved and rounded, landing in 0..=180.
/// Achromatic pixels (zero saturation) report hue 0.
pub fn rgb_to_hue(r: u8, g: u8, b: u8) -> u8 {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    if delta == 0.0 {
        return 0;
    }
    let angle = if max == r {
        60.0 * (g - b) / delta
    } else if max == g {
        120.0 + 60.0 * (b - r) / delta
    } else {
        240.0 + 60.0 * (r - g) / delta
    };
    let angle = if angle < 0.0 { angle + 360.0 } else { angle };
    (angle / 2.0).round() as u8
}

/// Extracts the hue channel of a decoded RGB image.
pub fn hue_grid_from_rgb(img: &RgbImage) -> HueGrid {
    let (width, height) = img.dimensions();
    HueGrid::from_fn(width as usize, height as usize, |row, col| {
        let pixel = img.get_pixel(col as u32, row as u32);
        rgb_to_hue(pixel[0], pixel[1], pixel[2])
    })
}

/// Opens a raster file and extracts its hue channel.
///
/// # Errors
/// - `Decode` if the file cannot be read or is not a supported image.
/// - `EmptyImage` for a zero-area image.
pub fn load_hue_grid(path: impl AsRef<Path>) -> SourceResult<HueGrid> {
    let path = path.as_ref();
    let img = image::open(path)?.to_rgb8();
    if img.width() == 0 || img.height() == 0 {
        return Err(SourceError::EmptyImage {
            path: path.display().to_string(),
        });
    }
    debug!(
        "loaded '{}': {}x{} pixels",
        path.display(),
        img.width(),
        img.height()
    );
    Ok(hue_grid_from_rgb(&img))
}
