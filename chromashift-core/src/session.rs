//! Per-level telemetry session coordinating recording, estimation, and
//! playback.
use log::debug;
use smallvec::SmallVec;

use crate::archive::GhostArchive;
use crate::clock::Clock;
use crate::config::ChromaConfig;
use crate::constants::{MIN_ATTEMPT_SECS, RECORD_INTERVAL_SECS};
use crate::death_points::{DeathPoint, DeathPointIndex};
use crate::emotion::{EmotionClassifier, EmotionInputs, EmotionState, Rgb};
use crate::frustration::FrustrationEstimator;
use crate::geometry::Vec2;
use crate::momentum::momentum;
use crate::recording::{Attempt, AttemptRecorder};
use crate::replay::{GhostPlayback, GhostPose};
use crate::rhythm::RhythmPulse;
use crate::snapshot::PlayerSnapshot;

/// Poses produced for one tick of ghost playback, tagged with the
/// archive slot each pose belongs to. Sized for the default ghost cap.
pub type GhostPoses = SmallVec<[(usize, GhostPose); 8]>;

/// Owns every telemetry component for the level currently being played
/// and sequences them within each simulation tick: frame recording and
/// death finalization first, then the classifier, then ghost playback.
///
/// Single-threaded by design; all calls happen inside the host's tick
/// callback. The clock is injected so windowed statistics stay
/// deterministic under test.
#[derive(Debug)]
pub struct TelemetrySession<C: Clock> {
    config: ChromaConfig,
    clock: C,
    death_points: DeathPointIndex,
    recorder: AttemptRecorder,
    archive: GhostArchive,
    frustration: FrustrationEstimator,
    classifier: EmotionClassifier,
    rhythm: RhythmPulse,
    playbacks: Vec<GhostPlayback>,
    progress_history: Vec<f32>,
    total_deaths: u32,
    best_percent: f32,
    last_percent: f32,
    attempt_time: f32,
    record_interval: f32,
}

impl<C: Clock> TelemetrySession<C> {
    #[must_use]
    pub fn new(config: ChromaConfig, clock: C) -> Self {
        Self {
            config,
            clock,
            death_points: DeathPointIndex::new(),
            recorder: AttemptRecorder::new(),
            archive: GhostArchive::new(),
            frustration: FrustrationEstimator::new(),
            classifier: EmotionClassifier::new(),
            rhythm: RhythmPulse::new(),
            playbacks: Vec::new(),
            progress_history: Vec::new(),
            total_deaths: 0,
            best_percent: 0.0,
            last_percent: 0.0,
            attempt_time: 0.0,
            record_interval: 0.0,
        }
    }

    /// Advance the session by one simulation tick. Samples the player at
    /// roughly 30 Hz, then re-evaluates the emotional state so consumers
    /// reading after this call see this tick's signals.
    pub fn tick(&mut self, dt: f32, snapshot: Option<&PlayerSnapshot>) {
        if !self.config.enabled {
            return;
        }

        self.attempt_time += dt;
        self.record_interval += dt;

        if self.record_interval >= RECORD_INTERVAL_SECS {
            if let Some(snapshot) = snapshot {
                self.recorder.record_frame(snapshot, self.attempt_time);
            }
            self.record_interval = 0.0;
        }

        let inputs = self.emotion_inputs();
        self.classifier.update(dt, inputs);

        if self.config.rhythm_pulse {
            self.rhythm.update(dt, self.config.pulse_intensity);
        }
    }

    /// Record a death at `position` with the percent reached. Feeds both
    /// the spatial index and the frustration window.
    pub fn record_death(&mut self, position: Vec2, percent: f32) {
        if !self.config.enabled {
            return;
        }
        self.total_deaths += 1;
        self.death_points.record(position, percent);
        self.frustration.record_death(self.clock.now());
    }

    /// Close the in-progress attempt. Aggregates and progress history
    /// always update; the attempt is archived as a ghost only if it
    /// captured at least one frame.
    pub fn finalize_attempt(&mut self, death_percent: f32) {
        if !self.config.enabled {
            return;
        }
        let percent = death_percent.clamp(0.0, 100.0);
        self.last_percent = percent;
        if percent > self.best_percent {
            self.best_percent = percent;
        }
        self.progress_history.push(percent);

        let attempt = self.recorder.finalize(percent);
        debug!(
            "attempt {} finalized at {percent:.1}% ({} frames)",
            attempt.attempt_index,
            attempt.frames.len()
        );
        if !attempt.is_empty() {
            self.archive.push(attempt, self.config.max_ghosts);
        }
        self.rebuild_playbacks();
        self.attempt_time = 0.0;
        self.record_interval = 0.0;
    }

    /// End the attempt the way the host's reset hook does: attempts
    /// shorter than the minimum duration are treated as spurious resets
    /// and produce no death or history entry.
    pub fn end_attempt(&mut self, death_position: Vec2, death_percent: f32) {
        if !self.config.enabled {
            return;
        }
        if self.attempt_time > MIN_ATTEMPT_SECS {
            self.record_death(death_position, death_percent);
            self.finalize_attempt(death_percent);
        } else {
            self.reset_attempt();
        }
    }

    /// The player finished the level; counts as a 100% attempt.
    pub fn level_complete(&mut self) {
        self.finalize_attempt(100.0);
    }

    /// Discard in-progress frames and restart attempt timing without
    /// touching history or counters. Ghost playback restarts from the
    /// top since the attempt clock does too.
    pub fn reset_attempt(&mut self) {
        self.recorder.reset();
        self.rebuild_playbacks();
        self.attempt_time = 0.0;
        self.record_interval = 0.0;
    }

    /// Drop all per-level state. Called when the player moves to a
    /// different level.
    pub fn clear_for_new_level(&mut self) {
        debug!("telemetry cleared for new level");
        self.death_points.clear();
        self.archive.clear();
        self.playbacks.clear();
        self.recorder = AttemptRecorder::new();
        self.frustration.clear();
        self.classifier = EmotionClassifier::new();
        self.rhythm.reset();
        self.progress_history.clear();
        self.total_deaths = 0;
        self.best_percent = 0.0;
        self.last_percent = 0.0;
        self.attempt_time = 0.0;
        self.record_interval = 0.0;
    }

    /// Advance every archived ghost to `current_time` and collect the
    /// poses of those still visible, tagged with their archive slot.
    pub fn advance_ghosts(&mut self, current_time: f32) -> GhostPoses {
        let mut poses = GhostPoses::new();
        if !self.config.enabled || !self.config.ghost_trail {
            return poses;
        }
        for (slot, (playback, attempt)) in self
            .playbacks
            .iter_mut()
            .zip(self.archive.all())
            .enumerate()
        {
            if let Some(pose) = playback.advance(attempt, current_time) {
                poses.push((slot, pose));
            }
        }
        poses
    }

    // Read-only surface -----------------------------------------------

    #[must_use]
    pub fn emotion_state(&self) -> EmotionState {
        self.classifier.current()
    }

    #[must_use]
    pub fn emotion_target(&self) -> EmotionState {
        self.classifier.target()
    }

    #[must_use]
    pub fn transition_progress(&self) -> f32 {
        self.classifier.transition_progress()
    }

    #[must_use]
    pub fn current_tint(&self) -> Rgb {
        self.classifier.current_tint()
    }

    #[must_use]
    pub fn background_overlay(&self) -> Rgb {
        self.classifier.background_overlay()
    }

    #[must_use]
    pub fn screen_shake_intensity(&self) -> f32 {
        self.classifier.screen_shake_intensity()
    }

    #[must_use]
    pub fn vignette_intensity(&self) -> f32 {
        self.classifier.vignette_intensity()
    }

    #[must_use]
    pub fn emotion_intensity(&self) -> f32 {
        self.classifier.emotion_intensity()
    }

    /// Current frustration score in [0, 1].
    #[must_use]
    pub fn frustration_level(&self) -> f32 {
        self.frustration
            .level(self.clock.now(), &self.progress_history)
    }

    /// Current momentum score in [0, 1].
    #[must_use]
    pub fn momentum_level(&self) -> f32 {
        momentum(&self.progress_history)
    }

    /// Deaths recorded strictly within `radius` of `position`.
    #[must_use]
    pub fn death_count_near(&self, position: Vec2, radius: f32) -> u32 {
        self.death_points.count_near(position, radius)
    }

    /// Strength of the time-echo field at `position`, 0 when the effect
    /// is disabled in settings.
    #[must_use]
    pub fn echo_influence_at(&self, position: Vec2) -> f32 {
        if self.config.time_echo {
            self.death_points.influence_at(position)
        } else {
            0.0
        }
    }

    #[must_use]
    pub fn death_points(&self) -> &[DeathPoint] {
        self.death_points.all()
    }

    #[must_use]
    pub fn ghosts(&self) -> &[Attempt] {
        self.archive.all()
    }

    #[must_use]
    pub fn current_recording(&self) -> &Attempt {
        self.recorder.current()
    }

    #[must_use]
    pub const fn total_deaths(&self) -> u32 {
        self.total_deaths
    }

    #[must_use]
    pub fn attempt_index(&self) -> u32 {
        self.recorder.current().attempt_index
    }

    #[must_use]
    pub const fn best_percent(&self) -> f32 {
        self.best_percent
    }

    #[must_use]
    pub const fn last_percent(&self) -> f32 {
        self.last_percent
    }

    /// Seconds since the current attempt started.
    #[must_use]
    pub const fn attempt_elapsed(&self) -> f32 {
        self.attempt_time
    }

    #[must_use]
    pub const fn rhythm(&self) -> &RhythmPulse {
        &self.rhythm
    }

    /// The injected time source. Manual clocks are driven through this
    /// handle in tests.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    #[must_use]
    pub const fn config(&self) -> &ChromaConfig {
        &self.config
    }

    /// Swap in new settings; archive capacity changes apply lazily on
    /// the next finalize.
    pub fn set_config(&mut self, config: ChromaConfig) {
        self.config = config;
    }

    fn emotion_inputs(&self) -> EmotionInputs {
        EmotionInputs {
            frustration: self.frustration_level(),
            momentum: self.momentum_level(),
            best_percent: self.best_percent,
            total_deaths: self.total_deaths,
            attempt_index: self.attempt_index(),
        }
    }

    fn rebuild_playbacks(&mut self) {
        self.playbacks = vec![GhostPlayback::new(); self.archive.len()];
    }
}
