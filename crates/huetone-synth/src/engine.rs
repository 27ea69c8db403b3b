//! Sonification engine: orchestration, progress, and the background worker.
//!
//! The synchronous core walks the pipeline end to end; the worker wraps it
//! on a dedicated thread and reports through a channel so a long run never
//! blocks an interactive caller. Segments are appended strictly in
//! traversal order, and a failed run discards all partial output.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread::JoinHandle;

use log::{debug, info, warn};

use huetone_spec::SonifySpec;

use crate::error::{SonifyError, SonifyResult};
use crate::hue::hue_to_frequency;
use crate::note::FrequencyTable;
use crate::scale::ScaleTable;
use crate::synthesis::{time_axis, HarmonicTone, DEFAULT_AMPLITUDE};
use crate::traverse::{traverse, HueGrid, TraversalConfig};

/// A finished sonification: mono samples plus the parameters that shaped it.
#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    samples: Vec<f64>,
    sample_rate: u32,
    note_duration: f64,
}

impl Song {
    /// Sample data in [-1.0, 1.0], segments in traversal order.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Consumes the song, returning its sample data.
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Per-note duration in seconds.
    pub fn note_duration(&self) -> f64 {
        self.note_duration
    }

    /// Total number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the song holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Playable length in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// Fraction of a run completed, reported after each appended segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Segments appended so far (1-based by the time it is reported).
    pub completed: usize,
    /// Total segments the run will produce.
    pub total: usize,
}

impl Progress {
    /// Whole-number percentage; reaches exactly 100 on the final segment.
    pub fn percent(self) -> u8 {
        (self.completed * 100 / self.total) as u8
    }
}

/// Runs the full pipeline synchronously.
///
/// Convenience wrapper over [`sonify_with_progress`] for callers that do
/// not observe progress.
pub fn sonify(grid: &HueGrid, spec: &SonifySpec) -> SonifyResult<Song> {
    sonify_with_progress(grid, spec, |_| {})
}

/// Runs the full pipeline synchronously, reporting per-segment progress.
///
/// Steps: validate the spec, resolve the frequency and scale tables,
/// traverse the grid, quantize each hue, render one segment per sample,
/// and concatenate in traversal order. `on_progress` fires after each
/// appended segment with a monotonically increasing [`Progress`].
///
/// # Errors
/// Configuration errors and `NotImplemented`/`EmptyInput` surface before
/// any segment is synthesized; no partial song is ever returned.
pub fn sonify_with_progress(
    grid: &HueGrid,
    spec: &SonifySpec,
    mut on_progress: impl FnMut(Progress),
) -> SonifyResult<Song> {
    run(grid, spec, &mut on_progress, None)
}

fn run(
    grid: &HueGrid,
    spec: &SonifySpec,
    on_progress: &mut dyn FnMut(Progress),
    cancel: Option<&AtomicBool>,
) -> SonifyResult<Song> {
    spec.validate()?;

    let table = FrequencyTable::build();
    let scale = ScaleTable::build(spec.key, spec.scale, spec.octave, &table)?;
    let config = TraversalConfig::from(spec);
    let hues = traverse(grid, &config)?;
    let total = hues.len();

    debug!(
        "sonifying {}x{} grid: {} segments, {} {} at octave {}",
        grid.width(),
        grid.height(),
        total,
        spec.key,
        spec.scale,
        spec.octave
    );

    let axis = time_axis(spec.note_duration, spec.sample_rate);
    let mut samples = Vec::with_capacity(total * axis.len());

    for (index, hue) in hues.enumerate() {
        if cancel.is_some_and(|flag| flag.load(Ordering::Acquire)) {
            warn!("sonification cancelled after {index}/{total} segments");
            return Err(SonifyError::Cancelled);
        }
        let frequency = hue_to_frequency(hue, &scale);
        let segment = HarmonicTone::new(frequency, DEFAULT_AMPLITUDE).render(&axis);
        samples.extend_from_slice(&segment);
        on_progress(Progress {
            completed: index + 1,
            total,
        });
    }

    let song = Song {
        samples,
        sample_rate: spec.sample_rate,
        note_duration: spec.note_duration,
    };
    info!(
        "sonification complete: {} segments, {:.2} s of audio",
        total,
        song.duration_seconds()
    );
    Ok(song)
}

/// Events emitted by a background sonification run, in order: zero or more
/// `Progress`, then exactly one terminal event.
#[derive(Debug)]
pub enum SonifyEvent {
    /// A segment was appended.
    Progress(Progress),
    /// The run completed; ownership of the song transfers to the receiver.
    Finished(Song),
    /// The run failed; any partial output was discarded.
    Failed(SonifyError),
    /// The run observed the cancellation flag between segments.
    Cancelled,
}

/// Handle to a sonification run on a dedicated worker thread.
///
/// The grid is shared read-only with the worker; the growing song is owned
/// by the worker until the `Finished` event hands it over.
pub struct SonifyHandle {
    events: Receiver<SonifyEvent>,
    cancel: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl SonifyHandle {
    /// Spawns a run of `spec` over `grid` on a new worker thread.
    pub fn spawn(grid: Arc<HueGrid>, spec: SonifySpec) -> Self {
        let (tx, rx) = mpsc::channel();
        let cancel = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancel);

        let thread = std::thread::spawn(move || {
            let progress_tx = tx.clone();
            let mut on_progress = move |progress: Progress| {
                // A disconnected receiver just means nobody is watching.
                let _ = progress_tx.send(SonifyEvent::Progress(progress));
            };
            let event = match run(&grid, &spec, &mut on_progress, Some(&flag)) {
                Ok(song) => SonifyEvent::Finished(song),
                Err(SonifyError::Cancelled) => SonifyEvent::Cancelled,
                Err(err) => SonifyEvent::Failed(err),
            };
            let _ = tx.send(event);
        });

        Self {
            events: rx,
            cancel,
            thread: Some(thread),
        }
    }

    /// Event stream for this run.
    pub fn events(&self) -> &Receiver<SonifyEvent> {
        &self.events
    }

    /// Requests cooperative cancellation; the worker stops between
    /// segments and emits [`SonifyEvent::Cancelled`].
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Release);
    }

    /// Blocks until the run ends, discarding progress, and returns the
    /// song or the terminal error.
    pub fn wait(mut self) -> SonifyResult<Song> {
        let mut outcome = Err(SonifyError::Cancelled);
        while let Ok(event) = self.events.recv() {
            match event {
                SonifyEvent::Progress(_) => {}
                SonifyEvent::Finished(song) => outcome = Ok(song),
                SonifyEvent::Failed(err) => outcome = Err(err),
                SonifyEvent::Cancelled => outcome = Err(SonifyError::Cancelled),
            }
        }
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
        outcome
    }
}

impl Drop for SonifyHandle {
    fn drop(&mut self) {
        // Abandoning the handle should not leave unbounded background work.
        self.cancel.store(true, Ordering::Release);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use huetone_spec::{PitchClass, ScaleName, TraversalMode};
    use pretty_assertions::assert_eq;

    use super::*;

    fn uniform_grid(width: usize, height: usize, hue: u8) -> HueGrid {
        HueGrid::from_fn(width, height, |_, _| hue)
    }

    fn default_spec() -> SonifySpec {
        SonifySpec {
            key: PitchClass::A,
            scale: ScaleName::HarmonicMinor,
            ..SonifySpec::default()
        }
    }

    #[test]
    fn test_uniform_grid_produces_identical_segments() {
        let grid = uniform_grid(10, 10, 0);
        let spec = default_spec();
        let song = sonify(&grid, &spec).unwrap();

        // 4 segments of note_duration * sample_rate samples each.
        let segment_len = (0.1 * 44100.0) as usize;
        assert_eq!(song.len(), 4 * segment_len);
        let first = &song.samples()[..segment_len];
        for i in 1..4 {
            let segment = &song.samples()[i * segment_len..(i + 1) * segment_len];
            assert_eq!(segment, first);
        }
    }

    #[test]
    fn test_progress_reaches_exactly_100() {
        let grid = uniform_grid(10, 10, 90);
        let spec = default_spec();
        let mut percents = Vec::new();
        sonify_with_progress(&grid, &spec, |p| percents.push(p.percent())).unwrap();
        assert_eq!(percents, vec![25, 50, 75, 100]);
    }

    #[test]
    fn test_radial_fails_before_any_progress() {
        let grid = uniform_grid(10, 10, 0);
        let spec = SonifySpec {
            traversal: TraversalMode::Radial,
            ..default_spec()
        };
        let mut events = 0;
        let err = sonify_with_progress(&grid, &spec, |_| events += 1).unwrap_err();
        assert_eq!(
            err,
            SonifyError::NotImplemented {
                mode: TraversalMode::Radial
            }
        );
        assert_eq!(events, 0);
    }

    #[test]
    fn test_invalid_spec_rejected_before_synthesis() {
        let grid = uniform_grid(4, 4, 0);
        let spec = SonifySpec {
            sample_rate: 11025,
            ..default_spec()
        };
        assert!(matches!(
            sonify(&grid, &spec),
            Err(SonifyError::Spec(_))
        ));
    }

    #[test]
    fn test_empty_grid_rejected() {
        let grid = HueGrid::from_raw(0, 0, vec![]).unwrap();
        assert_eq!(
            sonify(&grid, &default_spec()),
            Err(SonifyError::EmptyInput { what: "image grid" })
        );
    }

    #[test]
    fn test_song_duration_accounting() {
        let grid = uniform_grid(10, 10, 45);
        let spec = SonifySpec {
            sample_rate: 22050,
            note_duration: 0.25,
            ..default_spec()
        };
        let song = sonify(&grid, &spec).unwrap();
        assert_eq!(song.sample_rate(), 22050);
        assert_eq!(song.note_duration(), 0.25);
        // 4 segments of 0.25 s.
        assert!((song.duration_seconds() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_worker_emits_progress_then_finished() {
        let grid = Arc::new(uniform_grid(10, 10, 120));
        let handle = SonifyHandle::spawn(Arc::clone(&grid), default_spec());

        let mut percents = Vec::new();
        let mut finished = None;
        for event in handle.events().iter() {
            match event {
                SonifyEvent::Progress(p) => percents.push(p.percent()),
                SonifyEvent::Finished(song) => {
                    finished = Some(song);
                    break;
                }
                other => panic!("unexpected event: {other:?}"),
            }
        }
        assert_eq!(percents, vec![25, 50, 75, 100]);
        let song = finished.expect("no finished event");
        assert_eq!(song.len(), 4 * (0.1 * 44100.0) as usize);

        // The background result matches a synchronous run exactly.
        let reference = sonify(&grid, &default_spec()).unwrap();
        assert_eq!(song, reference);
    }

    #[test]
    fn test_worker_wait_returns_song() {
        let grid = Arc::new(uniform_grid(6, 6, 60));
        let song = SonifyHandle::spawn(grid, default_spec()).wait().unwrap();
        assert_eq!(song.len(), 4 * (0.1 * 44100.0) as usize);
    }

    #[test]
    fn test_worker_failure_reports_error_and_no_song() {
        let grid = Arc::new(uniform_grid(6, 6, 60));
        let spec = SonifySpec {
            traversal: TraversalMode::Circular,
            ..default_spec()
        };
        let err = SonifyHandle::spawn(grid, spec).wait().unwrap_err();
        assert_eq!(
            err,
            SonifyError::NotImplemented {
                mode: TraversalMode::Circular
            }
        );
    }

    #[test]
    fn test_cancelled_run_ends_with_cancelled_event() {
        // A dense grid keeps the worker busy long enough to observe the flag.
        let grid = Arc::new(uniform_grid(100, 100, 30));
        let spec = SonifySpec {
            row_stride: 1,
            col_stride: 1,
            note_duration: 0.01,
            sample_rate: 22050,
            ..default_spec()
        };
        let handle = SonifyHandle::spawn(grid, spec);
        handle.cancel();
        let err = handle.wait().unwrap_err();
        assert_eq!(err, SonifyError::Cancelled);
    }
}
