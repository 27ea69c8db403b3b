//! Sonification parameters and selector enums.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SpecError;
use crate::validation;

/// Sample rates accepted by the engine, in Hz.
pub const SAMPLE_RATES: [u32; 3] = [22050, 44100, 48000];

/// One of the 12 chromatic pitch classes.
///
/// Doubles as the key selector and as the letter component of note names.
/// Sharps use the `#` marker in display form; parsing also accepts the
/// lowercase-letter shorthand (`"a"` for A#, `"c"` for C#, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PitchClass {
    /// C
    C,
    /// C# (D-flat)
    #[serde(rename = "c_sharp")]
    CSharp,
    /// D
    D,
    /// D# (E-flat)
    #[serde(rename = "d_sharp")]
    DSharp,
    /// E
    E,
    /// F
    F,
    /// F# (G-flat)
    #[serde(rename = "f_sharp")]
    FSharp,
    /// G
    G,
    /// G# (A-flat)
    #[serde(rename = "g_sharp")]
    GSharp,
    /// A
    A,
    /// A# (B-flat)
    #[serde(rename = "a_sharp")]
    ASharp,
    /// B
    B,
}

impl PitchClass {
    /// All 12 pitch classes in chromatic order starting at C.
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
    ];

    /// Semitone offset from C (C=0, C#=1, ..., B=11).
    pub fn semitone(self) -> u8 {
        match self {
            PitchClass::C => 0,
            PitchClass::CSharp => 1,
            PitchClass::D => 2,
            PitchClass::DSharp => 3,
            PitchClass::E => 4,
            PitchClass::F => 5,
            PitchClass::FSharp => 6,
            PitchClass::G => 7,
            PitchClass::GSharp => 8,
            PitchClass::A => 9,
            PitchClass::ASharp => 10,
            PitchClass::B => 11,
        }
    }

    /// Whether this is a sharp (black-key) pitch class.
    pub fn is_sharp(self) -> bool {
        matches!(
            self,
            PitchClass::CSharp
                | PitchClass::DSharp
                | PitchClass::FSharp
                | PitchClass::GSharp
                | PitchClass::ASharp
        )
    }

    /// Display name with the `#` sharp marker.
    pub fn as_str(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PitchClass {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // Lowercase single letter is the sharp shorthand.
        let sharp_shorthand = trimmed.len() == 1
            && trimmed
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_lowercase());

        let natural = match trimmed.to_ascii_uppercase().chars().next() {
            Some('C') => PitchClass::C,
            Some('D') => PitchClass::D,
            Some('E') => PitchClass::E,
            Some('F') => PitchClass::F,
            Some('G') => PitchClass::G,
            Some('A') => PitchClass::A,
            Some('B') => PitchClass::B,
            _ => return Err(SpecError::unknown_key(trimmed)),
        };

        let wants_sharp = sharp_shorthand || trimmed.ends_with('#');
        if trimmed.len() > 2 || (trimmed.len() == 2 && !trimmed.ends_with('#')) {
            return Err(SpecError::unknown_key(trimmed));
        }
        if !wants_sharp {
            return Ok(natural);
        }

        let sharp_semitone = (natural.semitone() + 1) % 12;
        PitchClass::ALL
            .iter()
            .copied()
            .find(|pc| pc.semitone() == sharp_semitone && pc.is_sharp())
            .ok_or_else(|| SpecError::unknown_key(trimmed))
    }
}

/// Named scale patterns in the fixed catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleName {
    /// Aeolian mode (natural minor pattern).
    Aeolian,
    /// Blues scale (nine-note variant).
    Blues,
    /// Phrygian mode.
    Phrygian,
    /// Full chromatic scale.
    Chromatic,
    /// Dorian mode.
    Dorian,
    /// Harmonic minor.
    HarmonicMinor,
    /// Lydian mode.
    Lydian,
    /// Major (Ionian).
    Major,
    /// Melodic minor (nine-note variant).
    MelodicMinor,
    /// Minor (alias of the natural-minor pattern).
    Minor,
    /// Mixolydian mode.
    Mixolydian,
    /// Natural minor.
    NaturalMinor,
    /// Major pentatonic.
    Pentatonic,
}

impl ScaleName {
    /// All catalog entries.
    pub const ALL: [ScaleName; 13] = [
        ScaleName::Aeolian,
        ScaleName::Blues,
        ScaleName::Phrygian,
        ScaleName::Chromatic,
        ScaleName::Dorian,
        ScaleName::HarmonicMinor,
        ScaleName::Lydian,
        ScaleName::Major,
        ScaleName::MelodicMinor,
        ScaleName::Minor,
        ScaleName::Mixolydian,
        ScaleName::NaturalMinor,
        ScaleName::Pentatonic,
    ];

    /// Returns the scale name as its wire string.
    pub fn as_str(self) -> &'static str {
        match self {
            ScaleName::Aeolian => "aeolian",
            ScaleName::Blues => "blues",
            ScaleName::Phrygian => "phrygian",
            ScaleName::Chromatic => "chromatic",
            ScaleName::Dorian => "dorian",
            ScaleName::HarmonicMinor => "harmonic_minor",
            ScaleName::Lydian => "lydian",
            ScaleName::Major => "major",
            ScaleName::MelodicMinor => "melodic_minor",
            ScaleName::Minor => "minor",
            ScaleName::Mixolydian => "mixolydian",
            ScaleName::NaturalMinor => "natural_minor",
            ScaleName::Pentatonic => "pentatonic",
        }
    }
}

impl fmt::Display for ScaleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScaleName {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        ScaleName::ALL
            .iter()
            .copied()
            .find(|scale| scale.as_str() == name)
            .ok_or_else(|| SpecError::unknown_scale(s.trim()))
    }
}

/// Order in which pixel positions are visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalMode {
    /// Columns ascending, rows fastest.
    LeftToRight,
    /// Columns descending, rows fastest.
    RightToLeft,
    /// Rows ascending, columns fastest.
    TopToBottom,
    /// Rows descending, columns fastest.
    BottomToTop,
    /// Radial sweep (not implemented).
    Radial,
    /// Circular sweep (not implemented).
    Circular,
}

impl TraversalMode {
    /// Returns the mode as its wire string.
    pub fn as_str(self) -> &'static str {
        match self {
            TraversalMode::LeftToRight => "left_to_right",
            TraversalMode::RightToLeft => "right_to_left",
            TraversalMode::TopToBottom => "top_to_bottom",
            TraversalMode::BottomToTop => "bottom_to_top",
            TraversalMode::Radial => "radial",
            TraversalMode::Circular => "circular",
        }
    }
}

impl fmt::Display for TraversalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TraversalMode {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        [
            TraversalMode::LeftToRight,
            TraversalMode::RightToLeft,
            TraversalMode::TopToBottom,
            TraversalMode::BottomToTop,
            TraversalMode::Radial,
            TraversalMode::Circular,
        ]
        .iter()
        .copied()
        .find(|mode| mode.as_str() == name)
        .ok_or_else(|| SpecError::unknown_traversal(s.trim()))
    }
}

/// Parameters for one sonification run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SonifySpec {
    /// Pixel visiting order.
    #[serde(default = "default_traversal")]
    pub traversal: TraversalMode,
    /// Rows skipped between samples.
    #[serde(default = "default_stride")]
    pub row_stride: u32,
    /// Columns skipped between samples.
    #[serde(default = "default_stride")]
    pub col_stride: u32,
    /// Output sample rate in Hz (22050, 44100, or 48000).
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    /// Duration of each synthesized note in seconds.
    #[serde(default = "default_note_duration")]
    pub note_duration: f64,
    /// Scale the quantized pitches are drawn from.
    pub scale: ScaleName,
    /// Key (root pitch class) of the scale.
    pub key: PitchClass,
    /// Reference octave for quantization lookups.
    #[serde(default = "default_octave")]
    pub octave: u8,
}

fn default_traversal() -> TraversalMode {
    TraversalMode::LeftToRight
}

fn default_stride() -> u32 {
    5
}

fn default_sample_rate() -> u32 {
    44100
}

fn default_note_duration() -> f64 {
    0.1
}

fn default_octave() -> u8 {
    4
}

impl Default for SonifySpec {
    fn default() -> Self {
        Self {
            traversal: default_traversal(),
            row_stride: default_stride(),
            col_stride: default_stride(),
            sample_rate: default_sample_rate(),
            note_duration: default_note_duration(),
            scale: ScaleName::Aeolian,
            key: PitchClass::A,
            octave: default_octave(),
        }
    }
}

impl SonifySpec {
    /// Checks every parameter eagerly; see [`validation::validate`].
    pub fn validate(&self) -> crate::SpecResult<()> {
        validation::validate(self)
    }
}
