//! Emotional state inference from retry telemetry.
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DETERMINATION_FRUSTRATION_FLOOR, DETERMINATION_MOMENTUM_FLOOR, FRESH_ATTEMPT_LIMIT,
    FRUSTRATION_ENTER, HOPE_FRUSTRATION_CEIL, HOPE_MOMENTUM_FLOOR, SHAKE_FRUSTRATION_SCALE,
    TRANSITION_SPEED, TRIUMPH_PERCENT, ZEN_ATTEMPT_FLOOR, ZEN_FRUSTRATION_CEIL,
};
use crate::geometry::lerp;

/// Discrete affect label inferred from death and progress patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EmotionState {
    #[default]
    Neutral,
    Frustration,
    Hope,
    Determination,
    Triumph,
    Zen,
}

/// Everything the classifier reads for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EmotionInputs {
    pub frustration: f32,
    pub momentum: f32,
    pub best_percent: f32,
    pub total_deaths: u32,
    pub attempt_index: u32,
}

/// Pick the target state. Rules are evaluated in priority order and the
/// first match wins; ordering is part of the contract (Triumph outranks
/// Frustration, and so on down the list).
#[must_use]
pub fn classify(inputs: &EmotionInputs) -> EmotionState {
    if inputs.best_percent > TRIUMPH_PERCENT && inputs.total_deaths > 0 {
        return EmotionState::Triumph;
    }
    if inputs.frustration > FRUSTRATION_ENTER {
        return EmotionState::Frustration;
    }
    if inputs.momentum > HOPE_MOMENTUM_FLOOR && inputs.frustration < HOPE_FRUSTRATION_CEIL {
        return EmotionState::Hope;
    }
    if inputs.frustration > DETERMINATION_FRUSTRATION_FLOOR
        && inputs.momentum > DETERMINATION_MOMENTUM_FLOOR
    {
        return EmotionState::Determination;
    }
    if inputs.total_deaths == 0 && inputs.attempt_index < FRESH_ATTEMPT_LIMIT {
        return EmotionState::Neutral;
    }
    if inputs.frustration < ZEN_FRUSTRATION_CEIL && inputs.attempt_index > ZEN_ATTEMPT_FLOOR {
        return EmotionState::Zen;
    }
    EmotionState::Neutral
}

/// RGB color in 0-255 channels, used for the derived tint signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channel-wise linear interpolation with `t` clamped to [0, 1].
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: lerp(f32::from(self.r), f32::from(other.r), t) as u8,
            g: lerp(f32::from(self.g), f32::from(other.g), t) as u8,
            b: lerp(f32::from(self.b), f32::from(other.b), t) as u8,
        }
    }
}

/// Signature color for each emotion state.
#[must_use]
pub const fn emotion_color(state: EmotionState) -> Rgb {
    match state {
        EmotionState::Neutral => Rgb::new(200, 210, 230),
        EmotionState::Frustration => Rgb::new(180, 40, 60),
        EmotionState::Hope => Rgb::new(80, 200, 120),
        EmotionState::Determination => Rgb::new(220, 140, 40),
        EmotionState::Triumph => Rgb::new(100, 220, 255),
        EmotionState::Zen => Rgb::new(160, 140, 220),
    }
}

/// Smoothed state machine over [`classify`]. Transitions take a few
/// seconds (dt x 0.3 per tick) so downstream visuals ease between states
/// instead of snapping.
#[derive(Debug, Clone, Default)]
pub struct EmotionClassifier {
    current: EmotionState,
    target: EmotionState,
    transition_progress: f32,
    last_inputs: EmotionInputs,
}

impl EmotionClassifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-evaluate the target state and advance the transition by `dt`
    /// seconds.
    pub fn update(&mut self, dt: f32, inputs: EmotionInputs) {
        self.last_inputs = inputs;
        self.target = classify(&inputs);

        if self.target != self.current {
            self.transition_progress += dt * TRANSITION_SPEED;
            if self.transition_progress >= 1.0 {
                debug!(
                    "emotion transition committed: {:?} -> {:?}",
                    self.current, self.target
                );
                self.current = self.target;
                self.transition_progress = 0.0;
            }
        }
    }

    #[must_use]
    pub const fn current(&self) -> EmotionState {
        self.current
    }

    #[must_use]
    pub const fn target(&self) -> EmotionState {
        self.target
    }

    #[must_use]
    pub const fn transition_progress(&self) -> f32 {
        self.transition_progress
    }

    /// Tint blended from the committed state toward the target.
    #[must_use]
    pub fn current_tint(&self) -> Rgb {
        emotion_color(self.current).lerp(emotion_color(self.target), self.transition_progress)
    }

    /// Softer variant of the tint for full-screen overlays.
    #[must_use]
    pub fn background_overlay(&self) -> Rgb {
        Rgb::new(128, 128, 128).lerp(self.current_tint(), 0.4)
    }

    /// Shake magnitude; only the Frustration state shakes the screen.
    #[must_use]
    pub fn screen_shake_intensity(&self) -> f32 {
        if self.current == EmotionState::Frustration {
            self.last_inputs.frustration * SHAKE_FRUSTRATION_SCALE
        } else {
            0.0
        }
    }

    /// Vignette opacity in [0, 1] for the committed state.
    #[must_use]
    pub const fn vignette_intensity(&self) -> f32 {
        match self.current {
            EmotionState::Frustration => 0.4,
            EmotionState::Determination => 0.25,
            EmotionState::Triumph => 0.1,
            _ => 0.0,
        }
    }

    /// Overall signal strength: strong frustration or stalled momentum
    /// both read as intense.
    #[must_use]
    pub fn emotion_intensity(&self) -> f32 {
        self.last_inputs
            .frustration
            .max(1.0 - self.last_inputs.momentum)
    }
}

/// Sample a shake offset for the current tick. Magnitude comes from the
/// classifier; the jitter source is injected so replays stay
/// deterministic under a seeded RNG.
pub fn sample_shake_offset<R: Rng>(rng: &mut R, intensity: f32) -> (f32, f32) {
    if intensity <= 0.0 {
        return (0.0, 0.0);
    }
    (
        rng.gen_range(-0.5..=0.5) * intensity,
        rng.gen_range(-0.5..=0.5) * intensity,
    )
}
