//! Progress momentum trend over recent attempts.
use crate::constants::{MOMENTUM_STEP_DIVISOR, MOMENTUM_TREND_SAMPLE};

/// Momentum in [0, 1]: above 0.5 means attempts are trending toward
/// deeper progress, below 0.5 means regression. Returns 0 until three
/// attempts exist.
#[must_use]
pub fn momentum(progress_history: &[f32]) -> f32 {
    let len = progress_history.len();
    if len < MOMENTUM_TREND_SAMPLE {
        return 0.0;
    }

    if len < MOMENTUM_TREND_SAMPLE * 2 {
        // Not enough for two full windows; compare the last two attempts.
        let last = progress_history[len - 1];
        let prev = progress_history[len - 2];
        return ((last - prev) / MOMENTUM_STEP_DIVISOR + 0.5).clamp(0.0, 1.0);
    }

    let recent = mean(&progress_history[len - MOMENTUM_TREND_SAMPLE..]);
    let prior = mean(&progress_history[len - MOMENTUM_TREND_SAMPLE * 2..len - MOMENTUM_TREND_SAMPLE]);
    let improvement = (recent - prior) / prior.max(1.0);
    (improvement + 0.5).clamp(0.0, 1.0)
}

fn mean(values: &[f32]) -> f32 {
    values.iter().sum::<f32>() / values.len() as f32
}
