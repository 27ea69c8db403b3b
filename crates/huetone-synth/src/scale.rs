//! Scale catalog and key rotation.
//!
//! The catalog is an immutable static mapping from [`ScaleName`] to its
//! semitone offsets. Resolving a scale rotates the chromatic sequence to
//! begin at the requested key and selects the offsets in order; the result
//! feeds the scale table the hue quantizer runs against.

use huetone_spec::{PitchClass, ScaleName};

use crate::error::{SonifyError, SonifyResult};
use crate::note::FrequencyTable;

/// Semitone offsets for each scale in the fixed catalog.
///
/// Offsets are strictly increasing, each in 0..=11.
pub fn intervals(scale: ScaleName) -> &'static [u8] {
    match scale {
        ScaleName::Aeolian => &[0, 2, 3, 5, 7, 8, 10],
        ScaleName::Blues => &[0, 2, 3, 4, 5, 7, 9, 10, 11],
        ScaleName::Phrygian => &[0, 1, 3, 5, 7, 8, 10],
        ScaleName::Chromatic => &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
        ScaleName::Dorian => &[0, 2, 3, 5, 7, 9, 10],
        ScaleName::HarmonicMinor => &[0, 2, 3, 5, 7, 8, 11],
        ScaleName::Lydian => &[0, 2, 4, 6, 7, 9, 11],
        ScaleName::Major => &[0, 2, 4, 5, 7, 9, 11],
        ScaleName::MelodicMinor => &[0, 2, 3, 5, 7, 8, 9, 10, 11],
        ScaleName::Minor => &[0, 2, 3, 5, 7, 8, 10],
        ScaleName::Mixolydian => &[0, 2, 4, 5, 7, 9, 10],
        ScaleName::NaturalMinor => &[0, 2, 3, 5, 7, 8, 10],
        ScaleName::Pentatonic => &[0, 2, 4, 7, 9],
    }
}

/// The scale's degree letters in the requested key, in offset order.
///
/// Rotates the chromatic sequence so it begins at `key`, then selects the
/// rotated letters at the scale's semitone offsets. Key and scale arrive as
/// enums, so there is no failure path here; bad names are rejected at parse
/// time.
pub fn resolve_scale(key: PitchClass, scale: ScaleName) -> Vec<PitchClass> {
    let root = key.semitone() as usize;
    intervals(scale)
        .iter()
        .map(|&offset| PitchClass::ALL[(root + offset as usize) % 12])
        .collect()
}

/// Frequencies of a resolved scale's letters at a reference octave.
///
/// Invariant: never empty (construction fails with `EmptyInput` instead).
#[derive(Debug, Clone)]
pub struct ScaleTable {
    entries: Vec<(PitchClass, f64)>,
}

impl ScaleTable {
    /// Builds the quantization table for `key`/`scale` at `octave`.
    ///
    /// Degrees whose note at `octave` falls off the 88-key range are
    /// dropped (possible only at the extreme octaves 0 and 8).
    ///
    /// # Errors
    /// `EmptyInput` if no degree survives the range check.
    pub fn build(
        key: PitchClass,
        scale: ScaleName,
        octave: u8,
        table: &FrequencyTable,
    ) -> SonifyResult<Self> {
        let entries: Vec<(PitchClass, f64)> = resolve_scale(key, scale)
            .into_iter()
            .filter_map(|class| table.get(class, octave).map(|freq| (class, freq)))
            .collect();
        if entries.is_empty() {
            return Err(SonifyError::empty_input("scale table"));
        }
        Ok(Self { entries })
    }

    /// Frequency of an exact degree letter, if present in the scale.
    pub fn frequency_of(&self, class: PitchClass) -> Option<f64> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == class)
            .map(|(_, freq)| *freq)
    }

    /// Frequency of the in-table pitch class nearest to `class`.
    ///
    /// Distance is semitones on the chromatic circle; ties resolve toward
    /// the flat side. Falls back to this only when `class` itself is not a
    /// degree of the active scale.
    pub fn quantize(&self, class: PitchClass) -> f64 {
        let target = class.semitone() as i32;
        self.entries
            .iter()
            .min_by_key(|(entry, _)| {
                let down = (target - entry.semitone() as i32).rem_euclid(12);
                let up = (entry.semitone() as i32 - target).rem_euclid(12);
                (down.min(up), down)
            })
            .map(|(_, freq)| *freq)
            .expect("scale table is never empty")
    }

    /// Degree letters in offset order.
    pub fn letters(&self) -> impl Iterator<Item = PitchClass> + '_ {
        self.entries.iter().map(|(class, _)| *class)
    }

    /// Number of degrees in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false by construction.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_catalog_offsets_strictly_increase() {
        for scale in ScaleName::ALL {
            let offsets = intervals(scale);
            assert!(!offsets.is_empty());
            for pair in offsets.windows(2) {
                assert!(pair[0] < pair[1], "{scale}: {offsets:?}");
            }
            assert!(*offsets.last().unwrap() <= 11);
        }
    }

    #[test]
    fn test_minor_aliases_share_the_natural_minor_pattern() {
        assert_eq!(intervals(ScaleName::Minor), intervals(ScaleName::NaturalMinor));
        assert_eq!(intervals(ScaleName::Aeolian), intervals(ScaleName::NaturalMinor));
    }

    #[test]
    fn test_resolve_c_major() {
        let letters = resolve_scale(PitchClass::C, ScaleName::Major);
        assert_eq!(
            letters,
            vec![
                PitchClass::C,
                PitchClass::D,
                PitchClass::E,
                PitchClass::F,
                PitchClass::G,
                PitchClass::A,
                PitchClass::B,
            ]
        );
    }

    #[test]
    fn test_resolve_a_harmonic_minor() {
        let letters = resolve_scale(PitchClass::A, ScaleName::HarmonicMinor);
        assert_eq!(
            letters,
            vec![
                PitchClass::A,
                PitchClass::B,
                PitchClass::C,
                PitchClass::D,
                PitchClass::E,
                PitchClass::F,
                PitchClass::GSharp,
            ]
        );
    }

    #[test]
    fn test_every_key_and_scale_resolves_without_duplicates() {
        for key in PitchClass::ALL {
            for scale in ScaleName::ALL {
                let letters = resolve_scale(key, scale);
                assert_eq!(letters.len(), intervals(scale).len());
                assert_eq!(letters[0], key, "scale does not start at its key");
                let mut seen = letters.clone();
                seen.sort_by_key(|pc| pc.semitone());
                seen.dedup();
                assert_eq!(seen.len(), letters.len(), "{key} {scale}");
            }
        }
    }

    #[test]
    fn test_scale_table_holds_reference_octave_frequencies() {
        let table = FrequencyTable::build();
        let scale = ScaleTable::build(PitchClass::A, ScaleName::Aeolian, 4, &table).unwrap();
        assert_eq!(scale.len(), 7);
        assert_eq!(scale.frequency_of(PitchClass::A), Some(440.0));
        // C5 is not in the table; the A-minor third lives at octave 4.
        let c4 = table.get(PitchClass::C, 4).unwrap();
        assert_eq!(scale.frequency_of(PitchClass::C), Some(c4));
    }

    #[test]
    fn test_scale_table_drops_off_range_degrees_at_octave_8() {
        let table = FrequencyTable::build();
        // At octave 8 only C8 exists on the piano.
        let scale = ScaleTable::build(PitchClass::C, ScaleName::Major, 8, &table).unwrap();
        assert_eq!(scale.len(), 1);
        assert_eq!(scale.letters().next(), Some(PitchClass::C));
    }

    #[test]
    fn test_quantize_prefers_exact_then_nearest() {
        let table = FrequencyTable::build();
        let scale = ScaleTable::build(PitchClass::C, ScaleName::Pentatonic, 4, &table).unwrap();
        // C major pentatonic: C D E G A. E is exact.
        assert_eq!(scale.quantize(PitchClass::E), table.get(PitchClass::E, 4).unwrap());
        // F is one semitone from E (down) and two from G (up): E wins.
        assert_eq!(scale.quantize(PitchClass::F), table.get(PitchClass::E, 4).unwrap());
        // B is one semitone from C (up) and two from A (down): C wins.
        assert_eq!(scale.quantize(PitchClass::B), table.get(PitchClass::C, 4).unwrap());
        // D# is equidistant from D and E; the tie resolves flat, to D.
        assert_eq!(
            scale.quantize(PitchClass::DSharp),
            table.get(PitchClass::D, 4).unwrap()
        );
    }
}
