//! Spatial clustering of death locations.
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEATH_MERGE_RADIUS, ECHO_BASE_RADIUS, ECHO_RADIUS_PER_DEATH, ECHO_SATURATION_DEATHS,
};
use crate::geometry::Vec2;

/// A cluster of one or more deaths within the merge radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeathPoint {
    pub position: Vec2,
    pub count: u32,
    /// Level percent of the first death recorded at this cluster.
    pub first_percent: f32,
}

/// Deduplicating index of death points for the current level.
///
/// Lookup is a linear scan; at the expected scale (tens of points per
/// level) this beats maintaining a spatial grid.
#[derive(Debug, Clone, Default)]
pub struct DeathPointIndex {
    points: Vec<DeathPoint>,
}

impl DeathPointIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a death. A death within the merge radius of an existing
    /// point increments that point instead of creating a new cluster.
    pub fn record(&mut self, position: Vec2, percent: f32) {
        for point in &mut self.points {
            if point.position.distance(position) < DEATH_MERGE_RADIUS {
                point.count += 1;
                return;
            }
        }
        self.points.push(DeathPoint {
            position,
            count: 1,
            first_percent: percent.clamp(0.0, 100.0),
        });
    }

    /// Total deaths recorded strictly within `radius` of `position`.
    #[must_use]
    pub fn count_near(&self, position: Vec2, radius: f32) -> u32 {
        self.points
            .iter()
            .filter(|point| point.position.distance(position) < radius)
            .map(|point| point.count)
            .sum()
    }

    /// Strength of the time-echo distortion field at `position`, in
    /// [0, 1]. Each cluster projects a field of radius 150 + 30 per
    /// death that falls off linearly and saturates at ten deaths; the
    /// strongest overlapping field wins.
    #[must_use]
    pub fn influence_at(&self, position: Vec2) -> f32 {
        let mut strongest = 0.0_f32;
        for point in &self.points {
            let radius = ECHO_RADIUS_PER_DEATH.mul_add(point.count as f32, ECHO_BASE_RADIUS);
            let dist = point.position.distance(position);
            if dist < radius {
                let strength =
                    (1.0 - dist / radius) * (point.count as f32 / ECHO_SATURATION_DEATHS).min(1.0);
                strongest = strongest.max(strength);
            }
        }
        strongest
    }

    /// Read-only view of all clusters, in creation order.
    #[must_use]
    pub fn all(&self) -> &[DeathPoint] {
        &self.points
    }

    /// Drop every cluster. Called on level change, never on attempt reset.
    pub fn clear(&mut self) {
        self.points.clear();
    }
}
