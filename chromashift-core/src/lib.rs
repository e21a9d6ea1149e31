//! Chromashift Telemetry Core
//!
//! Platform-agnostic behavioral telemetry for the Chromashift gameplay
//! augmentation layer: death-point clustering, frustration and momentum
//! estimation, the smoothed emotional state machine, and interpolated
//! ghost replay. The host game layer feeds in player snapshots and death
//! events each tick and reads back a small set of stable signals; no
//! rendering or platform dependencies live here.

pub mod archive;
pub mod clock;
pub mod config;
pub mod constants;
pub mod death_points;
pub mod emotion;
pub mod frustration;
pub mod geometry;
pub mod momentum;
pub mod recording;
pub mod replay;
pub mod rhythm;
pub mod session;
pub mod snapshot;

// Re-export commonly used types
pub use archive::GhostArchive;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ChromaConfig, ConfigError};
pub use death_points::{DeathPoint, DeathPointIndex};
pub use emotion::{
    EmotionClassifier, EmotionInputs, EmotionState, Rgb, classify, emotion_color,
    sample_shake_offset,
};
pub use frustration::FrustrationEstimator;
pub use geometry::Vec2;
pub use momentum::momentum;
pub use recording::{Attempt, AttemptRecorder, Frame};
pub use replay::{GhostPlayback, GhostPose, ghost_color};
pub use rhythm::RhythmPulse;
pub use session::{GhostPoses, TelemetrySession};
pub use snapshot::{MoveMode, PlayerSnapshot};
