//! Centralized tuning constants for the Chromashift telemetry core.
//!
//! These values define the deterministic math behind death clustering,
//! the frustration/momentum estimators, and ghost playback. Keeping them
//! together ensures tuning changes go through code review rather than
//! scattered magic numbers.

// Death clustering -----------------------------------------------------
pub(crate) const DEATH_MERGE_RADIUS: f32 = 50.0;
pub(crate) const ECHO_BASE_RADIUS: f32 = 150.0;
pub(crate) const ECHO_RADIUS_PER_DEATH: f32 = 30.0;
pub(crate) const ECHO_SATURATION_DEATHS: f32 = 10.0;

// Frustration window ---------------------------------------------------
pub(crate) const DEATH_RETENTION_SECS: f32 = 30.0;
pub(crate) const DEATH_RATE_WINDOW_SECS: f32 = 15.0;
pub(crate) const STAGNATION_SAMPLE: usize = 5;
pub(crate) const STAGNATION_VARIANCE_CAP: f32 = 25.0;
pub(crate) const STAGNATION_MEAN_CAP: f32 = 80.0;
pub(crate) const FRUSTRATION_RATE_WEIGHT: f32 = 0.6;
pub(crate) const FRUSTRATION_STAGNATION_WEIGHT: f32 = 0.4;

// Momentum trend -------------------------------------------------------
pub(crate) const MOMENTUM_TREND_SAMPLE: usize = 3;
pub(crate) const MOMENTUM_STEP_DIVISOR: f32 = 20.0;

// Emotion state machine ------------------------------------------------
pub(crate) const TRANSITION_SPEED: f32 = 0.3;
pub(crate) const TRIUMPH_PERCENT: f32 = 95.0;
pub(crate) const FRUSTRATION_ENTER: f32 = 0.8;
pub(crate) const HOPE_MOMENTUM_FLOOR: f32 = 0.5;
pub(crate) const HOPE_FRUSTRATION_CEIL: f32 = 0.3;
pub(crate) const DETERMINATION_FRUSTRATION_FLOOR: f32 = 0.4;
pub(crate) const DETERMINATION_MOMENTUM_FLOOR: f32 = 0.2;
pub(crate) const FRESH_ATTEMPT_LIMIT: u32 = 3;
pub(crate) const ZEN_FRUSTRATION_CEIL: f32 = 0.15;
pub(crate) const ZEN_ATTEMPT_FLOOR: u32 = 5;
pub(crate) const SHAKE_FRUSTRATION_SCALE: f32 = 2.0;

// Attempt recording ----------------------------------------------------
pub(crate) const RECORD_INTERVAL_SECS: f32 = 1.0 / 30.0;
pub(crate) const MIN_ATTEMPT_SECS: f32 = 0.2;

// Rhythm pulse ---------------------------------------------------------
pub(crate) const DEFAULT_BPM: f32 = 130.0;
pub(crate) const PULSE_SCALE_PER_INTENSITY: f32 = 0.02;
pub(crate) const PULSE_DECAY_BASE: f32 = 0.05;
pub(crate) const PULSE_ALPHA_GAIN: f32 = 500.0;
pub(crate) const PULSE_ALPHA_CEIL: f32 = 50.0;

// Ghost coloring -------------------------------------------------------
pub(crate) const GHOST_HUE_STRIDE: f32 = 47.0;
pub(crate) const GHOST_HUE_OFFSET: f32 = 180.0;
pub(crate) const GHOST_CHROMA: f32 = 0.7;
pub(crate) const GHOST_LIGHT_LIFT: f32 = 0.3;
