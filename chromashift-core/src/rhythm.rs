//! Fixed-tempo rhythm pulse.
//!
//! Tempo is a hardcoded constant rather than detected from audio; the
//! pulse is just a beat accumulator plus an exponential decay back to
//! rest scale.
use crate::constants::{
    DEFAULT_BPM, PULSE_ALPHA_CEIL, PULSE_ALPHA_GAIN, PULSE_DECAY_BASE, PULSE_SCALE_PER_INTENSITY,
};

#[derive(Debug, Clone)]
pub struct RhythmPulse {
    bpm: f32,
    beat_accumulator: f32,
    pulse_scale: f32,
}

impl Default for RhythmPulse {
    fn default() -> Self {
        Self {
            bpm: DEFAULT_BPM,
            beat_accumulator: 0.0,
            pulse_scale: 1.0,
        }
    }
}

impl RhythmPulse {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn bpm(&self) -> f32 {
        self.bpm
    }

    pub fn set_bpm(&mut self, bpm: f32) {
        if bpm > 0.0 {
            self.bpm = bpm;
        }
    }

    /// Advance the pulse by `dt` seconds. Returns true when a beat fired
    /// this tick. `intensity` scales the kick applied on each beat.
    pub fn update(&mut self, dt: f32, intensity: f32) -> bool {
        let beat_interval = 60.0 / self.bpm;
        self.beat_accumulator += dt;

        let mut beat = false;
        if self.beat_accumulator >= beat_interval {
            self.beat_accumulator -= beat_interval;
            self.pulse_scale = PULSE_SCALE_PER_INTENSITY.mul_add(intensity.max(0.0), 1.0);
            beat = true;
        }

        // Exponential decay back toward rest between beats.
        self.pulse_scale = 1.0 + (self.pulse_scale - 1.0) * PULSE_DECAY_BASE.powf(dt);
        beat
    }

    /// Current scale multiplier for pulse-reactive elements, >= 1.
    #[must_use]
    pub const fn pulse_scale(&self) -> f32 {
        self.pulse_scale
    }

    /// Overlay opacity in [0, 1] derived from the pulse envelope.
    #[must_use]
    pub fn overlay_alpha(&self) -> f32 {
        ((self.pulse_scale - 1.0) * PULSE_ALPHA_GAIN)
            .clamp(0.0, PULSE_ALPHA_CEIL)
            / 255.0
    }

    pub fn reset(&mut self) {
        self.beat_accumulator = 0.0;
        self.pulse_scale = 1.0;
    }
}
