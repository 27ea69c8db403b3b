//! Note names and the 88-key frequency table.
//!
//! The table covers the standard piano range A0..=C8 in key order, anchored
//! to A4 = 440 Hz with the equal-tempered semitone ratio, plus a single
//! rest sentinel at exactly 0.0 Hz.

use std::fmt;

use huetone_spec::PitchClass;

/// Reference frequency of A4 in Hz.
pub const CONCERT_PITCH_HZ: f64 = 440.0;

/// Number of named keys on the standard piano.
pub const PIANO_KEYS: usize = 88;

/// Key index of A4 within the 88-key range (A0 = 0).
const REFERENCE_KEY_INDEX: i32 = 48;

/// A concrete pitch: a pitch class at an octave, e.g. "A#4".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoteName {
    /// Letter component.
    pub class: PitchClass,
    /// Octave digit, 0..=8.
    pub octave: u8,
}

impl NoteName {
    /// Creates a note name.
    pub fn new(class: PitchClass, octave: u8) -> Self {
        Self { class, octave }
    }

    /// Piano key index (A0 = 0, C8 = 87), or `None` outside the 88-key range.
    pub fn key_index(self) -> Option<usize> {
        let index = self.octave as i32 * 12 + self.class.semitone() as i32 - 9;
        (0..PIANO_KEYS as i32).contains(&index).then_some(index as usize)
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.class, self.octave)
    }
}

/// A pitch as seen by the synthesizer: a named note, or rest (silence).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pitch {
    /// A named note with a positive frequency.
    Note(NoteName),
    /// Silence; always maps to exactly 0.0 Hz.
    Rest,
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pitch::Note(name) => name.fmt(f),
            Pitch::Rest => Ok(()),
        }
    }
}

/// Read-only mapping from pitch to frequency, in piano-key order.
///
/// Holds 89 entries: the 88 named keys A0..=C8 with strictly increasing
/// frequencies, followed by the rest sentinel (the only 0.0 entry).
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    entries: Vec<(Pitch, f64)>,
}

impl FrequencyTable {
    /// Builds the table. Pure function of fixed constants; no error path.
    pub fn build() -> Self {
        let mut entries = Vec::with_capacity(PIANO_KEYS + 1);
        // Cross the chromatic octave pattern with octaves 0..=8, keeping
        // the contiguous A0..=C8 span in key order.
        for octave in 0..=8u8 {
            for class in PitchClass::ALL {
                let name = NoteName::new(class, octave);
                if let Some(n) = name.key_index() {
                    let freq = CONCERT_PITCH_HZ
                        * 2f64.powf((n as i32 - REFERENCE_KEY_INDEX) as f64 / 12.0);
                    entries.push((Pitch::Note(name), freq));
                }
            }
        }
        entries.push((Pitch::Rest, 0.0));
        Self { entries }
    }

    /// Frequency of a pitch; `None` for notes outside the 88-key range.
    pub fn frequency(&self, pitch: Pitch) -> Option<f64> {
        match pitch {
            Pitch::Note(name) => name.key_index().map(|n| self.entries[n].1),
            Pitch::Rest => Some(0.0),
        }
    }

    /// Frequency of a pitch class at an octave, if on the piano.
    pub fn get(&self, class: PitchClass, octave: u8) -> Option<f64> {
        self.frequency(Pitch::Note(NoteName::new(class, octave)))
    }

    /// Entries in piano-key order, rest sentinel last.
    pub fn iter(&self) -> impl Iterator<Item = (Pitch, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of entries, including the rest sentinel.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; the table is fixed-size.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
