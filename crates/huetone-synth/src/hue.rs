//! Hue-to-pitch quantization.
//!
//! Hues use the half-range OpenCV convention (0..=180). Fixed ascending
//! thresholds cut that domain into 8 buckets, each naming a degree letter;
//! the letter resolves to a frequency through the active [`ScaleTable`],
//! falling back to the nearest in-scale degree when the bucket letter is
//! not part of the scale.

use huetone_spec::PitchClass;

use crate::scale::ScaleTable;

/// Upper bound of the half-range hue domain.
pub const HUE_MAX: u8 = 180;

/// Ascending bucket boundaries over the hue domain.
pub const HUE_THRESHOLDS: [u8; 7] = [26, 52, 78, 104, 128, 154, 180];

/// Degree letter for each bucket, last entry doubling as the clamp
/// fallback for out-of-range hues.
const BUCKET_LETTERS: [PitchClass; 8] = [
    PitchClass::A,
    PitchClass::G,
    PitchClass::F,
    PitchClass::E,
    PitchClass::B,
    PitchClass::A,
    PitchClass::G,
    PitchClass::F,
];

/// Degree letter for a hue value.
///
/// A deterministic step function: hues at or below the first threshold map
/// to the first bucket, each following half-open interval to the next, and
/// anything above the domain clamps into the last bucket.
pub fn degree_for_hue(hue: u8) -> PitchClass {
    let bucket = HUE_THRESHOLDS
        .iter()
        .position(|&threshold| hue <= threshold)
        .unwrap_or(HUE_THRESHOLDS.len());
    BUCKET_LETTERS[bucket]
}

/// Quantizes a hue sample to a frequency from the active scale.
pub fn hue_to_frequency(hue: u8, scale: &ScaleTable) -> f64 {
    let degree = degree_for_hue(hue);
    scale
        .frequency_of(degree)
        .unwrap_or_else(|| scale.quantize(degree))
}
