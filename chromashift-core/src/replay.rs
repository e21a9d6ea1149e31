//! Time-indexed interpolated playback of archived ghost attempts.
use serde::{Deserialize, Serialize};

use crate::constants::{GHOST_CHROMA, GHOST_HUE_OFFSET, GHOST_HUE_STRIDE, GHOST_LIGHT_LIFT};
use crate::emotion::Rgb;
use crate::geometry::{Vec2, lerp};
use crate::recording::Attempt;
use crate::snapshot::MoveMode;

/// Interpolated pose of a ghost at one playback instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GhostPose {
    pub position: Vec2,
    pub rotation: f32,
    pub mode: MoveMode,
    pub flipped: bool,
}

/// Playback cursor over one archived attempt.
///
/// Playback only ever moves forward; feeding a time earlier than the
/// last advance freezes the ghost at its last produced pose rather than
/// rewinding it.
#[derive(Debug, Clone, Default)]
pub struct GhostPlayback {
    cursor: usize,
    played_to: f32,
    finished: bool,
}

impl GhostPlayback {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the cursor to `current_time` and produce the interpolated
    /// pose, or `None` once playback has run past the last frame (the
    /// ghost is no longer visible).
    pub fn advance(&mut self, attempt: &Attempt, current_time: f32) -> Option<GhostPose> {
        let frames = &attempt.frames;
        if frames.is_empty() || self.finished {
            return None;
        }

        // A decreasing time input holds the pose at the furthest point
        // already played instead of interpolating backward.
        let current_time = current_time.max(self.played_to);
        self.played_to = current_time;

        while self.cursor + 1 < frames.len() && frames[self.cursor + 1].timestamp <= current_time {
            self.cursor += 1;
        }

        let frame = &frames[self.cursor];
        if self.cursor + 1 == frames.len() && current_time > frame.timestamp {
            // Played through the final frame; the ghost disappears.
            self.finished = true;
            return None;
        }

        let mut position = frame.position;
        let mut rotation = frame.rotation;
        if let Some(next) = frames.get(self.cursor + 1) {
            let span = next.timestamp - frame.timestamp;
            let t = if span > 0.0 {
                ((current_time - frame.timestamp) / span).clamp(0.0, 1.0)
            } else {
                0.0
            };
            position = frame.position.lerp(next.position, t);
            rotation = lerp(frame.rotation, next.rotation, t);
        }

        Some(GhostPose {
            position,
            rotation,
            mode: frame.mode,
            flipped: frame.flipped,
        })
    }

    /// Whether playback has run past the attempt's final frame.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Spectral color assigned to a ghost by archive slot, so each trail is
/// visually distinct: hue steps around the wheel by 47 degrees per slot.
#[must_use]
pub fn ghost_color(ghost_index: usize) -> Rgb {
    let hue = (ghost_index as f32).mul_add(GHOST_HUE_STRIDE, GHOST_HUE_OFFSET) % 360.0;
    let h = hue / 60.0;
    let c = GHOST_CHROMA;
    let x = c * (1.0 - ((h % 2.0) - 1.0).abs());

    let (r, g, b) = if h < 1.0 {
        (c, x, 0.0)
    } else if h < 2.0 {
        (x, c, 0.0)
    } else if h < 3.0 {
        (0.0, c, x)
    } else if h < 4.0 {
        (0.0, x, c)
    } else if h < 5.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Rgb::new(
        ((r + GHOST_LIGHT_LIFT) * 255.0) as u8,
        ((g + GHOST_LIGHT_LIFT) * 255.0) as u8,
        ((b + GHOST_LIGHT_LIFT) * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::Frame;
    use crate::snapshot::PlayerSnapshot;

    fn attempt_with_frames(points: &[(f32, f32, f32)]) -> Attempt {
        let frames = points
            .iter()
            .map(|&(t, x, y)| {
                Frame::from_snapshot(
                    &PlayerSnapshot {
                        position: Vec2::new(x, y),
                        ..PlayerSnapshot::default()
                    },
                    t,
                )
            })
            .collect();
        Attempt {
            frames,
            death_percent: 50.0,
            attempt_index: 0,
        }
    }

    #[test]
    fn midpoint_query_interpolates_position() {
        let attempt = attempt_with_frames(&[(0.0, 0.0, 0.0), (1.0, 10.0, 0.0)]);
        let mut playback = GhostPlayback::new();
        let pose = playback.advance(&attempt, 0.5).expect("visible");
        assert!((pose.position.x - 5.0).abs() <= f32::EPSILON);
        assert!(pose.position.y.abs() <= f32::EPSILON);
    }

    #[test]
    fn playback_past_final_frame_hides_the_ghost() {
        let attempt = attempt_with_frames(&[(0.0, 0.0, 0.0), (1.0, 10.0, 0.0)]);
        let mut playback = GhostPlayback::new();
        assert!(playback.advance(&attempt, 2.0).is_none());
        assert!(playback.is_finished());
        // Stays hidden even if time moves back into range.
        assert!(playback.advance(&attempt, 0.5).is_none());
    }

    #[test]
    fn playback_freezes_at_last_pose_instead_of_rewinding() {
        let attempt = attempt_with_frames(&[(0.0, 0.0, 0.0), (1.0, 10.0, 0.0), (2.0, 20.0, 0.0)]);
        let mut playback = GhostPlayback::new();
        let ahead = playback.advance(&attempt, 1.5).expect("visible");
        // Earlier query: the pose holds exactly where playback got to.
        let back = playback.advance(&attempt, 0.2).expect("visible");
        assert!((back.position.x - ahead.position.x).abs() <= f32::EPSILON);
        assert!((back.position.x - 15.0).abs() <= f32::EPSILON);
        // Time moving forward again resumes from the frozen point.
        let resumed = playback.advance(&attempt, 1.8).expect("visible");
        assert!((resumed.position.x - 18.0).abs() <= f32::EPSILON);
    }

    #[test]
    fn duplicate_timestamps_do_not_divide_by_zero() {
        let attempt = attempt_with_frames(&[(1.0, 4.0, 4.0), (1.0, 9.0, 9.0)]);
        let mut playback = GhostPlayback::new();
        let pose = playback.advance(&attempt, 1.0).expect("visible");
        assert!(pose.position.x.is_finite());
    }

    #[test]
    fn empty_attempt_produces_no_pose() {
        let attempt = Attempt::default();
        let mut playback = GhostPlayback::new();
        assert!(playback.advance(&attempt, 0.0).is_none());
    }

    #[test]
    fn single_frame_holds_its_pose_at_its_timestamp() {
        let attempt = attempt_with_frames(&[(0.0, 7.0, 3.0)]);
        let mut playback = GhostPlayback::new();
        let pose = playback.advance(&attempt, 0.0).expect("visible");
        assert!((pose.position.x - 7.0).abs() <= f32::EPSILON);
    }

    #[test]
    fn ghost_colors_differ_by_slot() {
        let a = ghost_color(0);
        let b = ghost_color(1);
        assert_ne!(a, b);
    }
}
