//! Sliding-window frustration estimate.
use std::collections::VecDeque;

use crate::constants::{
    DEATH_RATE_WINDOW_SECS, DEATH_RETENTION_SECS, FRUSTRATION_RATE_WEIGHT,
    FRUSTRATION_STAGNATION_WEIGHT, STAGNATION_MEAN_CAP, STAGNATION_SAMPLE,
    STAGNATION_VARIANCE_CAP,
};

/// Blends recent death frequency with progress stagnation into a
/// [0, 1] score.
#[derive(Debug, Clone, Default)]
pub struct FrustrationEstimator {
    recent_death_times: VecDeque<f32>,
}

impl FrustrationEstimator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Note a death at clock time `now`, pruning entries older than the
    /// 30 second retention window.
    pub fn record_death(&mut self, now: f32) {
        self.recent_death_times.push_back(now);
        while self
            .recent_death_times
            .front()
            .is_some_and(|t| now - t > DEATH_RETENTION_SECS)
        {
            self.recent_death_times.pop_front();
        }
    }

    /// Current frustration level. Returns 0 until at least two deaths are
    /// retained in the window.
    #[must_use]
    pub fn level(&self, now: f32, progress_history: &[f32]) -> f32 {
        if self.recent_death_times.len() < 2 {
            return 0.0;
        }

        let recent_deaths = self
            .recent_death_times
            .iter()
            .filter(|t| now - *t < DEATH_RATE_WINDOW_SECS)
            .count();
        let death_rate = recent_deaths as f32 / DEATH_RATE_WINDOW_SECS;
        let stagnation = stagnation_score(progress_history);

        FRUSTRATION_RATE_WEIGHT
            .mul_add(death_rate, FRUSTRATION_STAGNATION_WEIGHT * stagnation)
            .clamp(0.0, 1.0)
    }

    /// Number of deaths currently retained in the 30 second window.
    #[must_use]
    pub fn retained_deaths(&self) -> usize {
        self.recent_death_times.len()
    }

    pub fn clear(&mut self) {
        self.recent_death_times.clear();
    }
}

/// Stagnation signal from the last five attempts: low variance away from
/// the end of the level reads as being stuck. 0 until five attempts exist.
fn stagnation_score(progress_history: &[f32]) -> f32 {
    if progress_history.len() < STAGNATION_SAMPLE {
        return 0.0;
    }
    let window = &progress_history[progress_history.len() - STAGNATION_SAMPLE..];
    let mean = window.iter().sum::<f32>() / STAGNATION_SAMPLE as f32;
    let variance = window
        .iter()
        .map(|p| {
            let diff = p - mean;
            diff * diff
        })
        .sum::<f32>()
        / STAGNATION_SAMPLE as f32;

    if variance < STAGNATION_VARIANCE_CAP && mean < STAGNATION_MEAN_CAP {
        1.0 - variance / STAGNATION_VARIANCE_CAP
    } else {
        0.0
    }
}
