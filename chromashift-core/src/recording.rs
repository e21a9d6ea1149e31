//! Frame capture for the attempt currently being played.
use serde::{Deserialize, Serialize};

use crate::geometry::Vec2;
use crate::snapshot::{MoveMode, PlayerSnapshot};

/// One sampled pose inside an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Seconds since the attempt started.
    pub timestamp: f32,
    pub position: Vec2,
    pub rotation: f32,
    pub velocity: f32,
    pub mode: MoveMode,
    pub flipped: bool,
}

impl Frame {
    #[must_use]
    pub fn from_snapshot(snapshot: &PlayerSnapshot, timestamp: f32) -> Self {
        Self {
            timestamp,
            position: snapshot.position,
            rotation: snapshot.rotation,
            velocity: snapshot.velocity,
            mode: snapshot.mode,
            flipped: snapshot.flipped,
        }
    }
}

/// A single play-through from spawn to death or completion.
///
/// Mutable while being recorded; immutable once archived as a ghost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Attempt {
    pub frames: Vec<Frame>,
    /// Level percent reached when the attempt ended, in [0, 100].
    pub death_percent: f32,
    pub attempt_index: u32,
}

impl Attempt {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Samples player snapshots into the in-progress attempt.
#[derive(Debug, Clone, Default)]
pub struct AttemptRecorder {
    current: Attempt,
}

impl AttemptRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a frame built from `snapshot`. The caller controls sampling
    /// cadence; no resampling happens here. Frames that would move the
    /// timeline backward are dropped to keep timestamps non-decreasing.
    pub fn record_frame(&mut self, snapshot: &PlayerSnapshot, timestamp: f32) {
        if let Some(last) = self.current.frames.last()
            && timestamp < last.timestamp
        {
            return;
        }
        self.current
            .frames
            .push(Frame::from_snapshot(snapshot, timestamp));
    }

    /// Close the in-progress attempt at `death_percent` and start a fresh
    /// one with the next attempt index.
    pub fn finalize(&mut self, death_percent: f32) -> Attempt {
        self.current.death_percent = death_percent.clamp(0.0, 100.0);
        let next_index = self.current.attempt_index + 1;
        let finished = std::mem::take(&mut self.current);
        self.current.attempt_index = next_index;
        finished
    }

    /// Discard in-progress frames, keeping the attempt index.
    pub fn reset(&mut self) {
        self.current.frames.clear();
    }

    /// The attempt currently being recorded.
    #[must_use]
    pub fn current(&self) -> &Attempt {
        &self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_at(x: f32) -> PlayerSnapshot {
        PlayerSnapshot {
            position: Vec2::new(x, 0.0),
            ..PlayerSnapshot::default()
        }
    }

    #[test]
    fn frames_append_in_sample_order() {
        let mut recorder = AttemptRecorder::new();
        recorder.record_frame(&snapshot_at(0.0), 0.0);
        recorder.record_frame(&snapshot_at(10.0), 0.033);
        recorder.record_frame(&snapshot_at(20.0), 0.066);
        let frames = &recorder.current().frames;
        assert_eq!(frames.len(), 3);
        assert!(frames.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    }

    #[test]
    fn backward_timestamps_are_dropped() {
        let mut recorder = AttemptRecorder::new();
        recorder.record_frame(&snapshot_at(0.0), 1.0);
        recorder.record_frame(&snapshot_at(10.0), 0.5);
        assert_eq!(recorder.current().frames.len(), 1);
    }

    #[test]
    fn finalize_closes_and_advances_index() {
        let mut recorder = AttemptRecorder::new();
        recorder.record_frame(&snapshot_at(0.0), 0.0);
        let finished = recorder.finalize(150.0);
        assert!((finished.death_percent - 100.0).abs() <= f32::EPSILON);
        assert_eq!(finished.attempt_index, 0);
        assert_eq!(finished.frames.len(), 1);
        assert!(recorder.current().is_empty());
        assert_eq!(recorder.current().attempt_index, 1);
    }

    #[test]
    fn reset_keeps_attempt_index() {
        let mut recorder = AttemptRecorder::new();
        recorder.finalize(10.0);
        recorder.record_frame(&snapshot_at(0.0), 0.0);
        recorder.reset();
        assert!(recorder.current().is_empty());
        assert_eq!(recorder.current().attempt_index, 1);
    }
}
