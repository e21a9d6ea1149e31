//! Per-tick player snapshot supplied by the host game layer.
use serde::{Deserialize, Serialize};

use crate::geometry::Vec2;

/// Traversal mode the player is currently in. Exactly one mode is active
/// at a time, so this is a closed enum rather than a set of flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MoveMode {
    #[default]
    Cube,
    Ship,
    Ball,
    Ufo,
    Wave,
    Robot,
    Spider,
    Swing,
}

impl MoveMode {
    /// Whether the mode steers continuously rather than in discrete hops.
    #[must_use]
    pub const fn is_flight(self) -> bool {
        matches!(self, Self::Ship | Self::Ufo | Self::Wave | Self::Swing)
    }
}

/// Snapshot of the live player for one sampled tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct PlayerSnapshot {
    pub position: Vec2,
    /// Sprite rotation in degrees.
    pub rotation: f32,
    /// Vertical velocity in level units per second.
    pub velocity: f32,
    pub mode: MoveMode,
    /// Gravity-flipped orientation.
    pub flipped: bool,
}
