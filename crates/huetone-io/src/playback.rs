//! Playback seam.
//!
//! The actual audio device lives outside this crate; it is reached through
//! the [`AudioSink`] trait. [`Playback`] wraps a sink and enforces the
//! at-most-one-active-playback invariant: starting a song always stops the
//! previous one first.

use log::debug;

use huetone_synth::Song;

/// An output device that can play a mono signal or stop playing.
pub trait AudioSink {
    /// Starts playing `samples` at `sample_rate`, replacing any current
    /// output of this sink.
    fn play(&mut self, samples: &[f64], sample_rate: u32);

    /// Stops any current output.
    fn stop(&mut self);
}

/// Controller that holds the single active playback.
pub struct Playback<S: AudioSink> {
    sink: S,
    playing: bool,
}

impl<S: AudioSink> Playback<S> {
    /// Wraps a sink; nothing is playing initially.
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            playing: false,
        }
    }

    /// Plays `song`, stopping any previously started playback first.
    pub fn play(&mut self, song: &Song) {
        if self.playing {
            self.sink.stop();
        }
        debug!(
            "starting playback: {:.2} s at {} Hz",
            song.duration_seconds(),
            song.sample_rate()
        );
        self.sink.play(song.samples(), song.sample_rate());
        self.playing = true;
    }

    /// Stops playback if one was started.
    pub fn stop(&mut self) {
        if self.playing {
            self.sink.stop();
            self.playing = false;
        }
    }

    /// Whether a playback has been started and not stopped.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Releases the underlying sink.
    pub fn into_sink(mut self) -> S {
        self.stop();
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use huetone_spec::{PitchClass, ScaleName, SonifySpec};
    use huetone_synth::{sonify, HueGrid};
    use pretty_assertions::assert_eq;

    use super::*;

    /// Records every call so tests can check ordering.
    #[derive(Default)]
    struct RecordingSink {
        calls: Vec<String>,
    }

    impl AudioSink for RecordingSink {
        fn play(&mut self, samples: &[f64], sample_rate: u32) {
            self.calls.push(format!("play {} @{sample_rate}", samples.len()));
        }

        fn stop(&mut self) {
            self.calls.push("stop".to_string());
        }
    }

    fn short_song() -> Song {
        let grid = HueGrid::from_fn(5, 5, |_, _| 100);
        let spec = SonifySpec {
            key: PitchClass::E,
            scale: ScaleName::Phrygian,
            sample_rate: 22050,
            note_duration: 0.01,
            ..SonifySpec::default()
        };
        sonify(&grid, &spec).unwrap()
    }

    #[test]
    fn test_restarting_playback_stops_the_previous_one() {
        let song = short_song();
        let mut playback = Playback::new(RecordingSink::default());

        playback.play(&song);
        playback.play(&song);
        playback.stop();

        let sink = playback.into_sink();
        let expected_play = format!("play {} @22050", song.len());
        assert_eq!(
            sink.calls,
            vec![
                expected_play.clone(),
                "stop".to_string(),
                expected_play,
                "stop".to_string(),
            ]
        );
    }

    #[test]
    fn test_stop_without_play_is_a_no_op() {
        let mut playback = Playback::new(RecordingSink::default());
        playback.stop();
        assert!(!playback.is_playing());
        assert!(playback.into_sink().calls.is_empty());
    }
}
