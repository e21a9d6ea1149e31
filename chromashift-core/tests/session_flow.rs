//! End-to-end telemetry flow driven through the public session surface
//! with a hand-stepped clock.
#![allow(clippy::field_reassign_with_default)]

use chromashift_core::{
    ChromaConfig, EmotionState, ManualClock, PlayerSnapshot, TelemetrySession, Vec2,
};

fn session() -> TelemetrySession<ManualClock> {
    TelemetrySession::new(ChromaConfig::default(), ManualClock::new())
}

fn snapshot() -> PlayerSnapshot {
    PlayerSnapshot::default()
}

#[test]
fn repeated_deaths_merge_and_raise_frustration() {
    let mut session = session();
    let spot = Vec2::new(420.0, 96.0);

    // Six deaths inside ten seconds, all within the merge radius.
    for i in 0..6 {
        session.clock().advance(1.5);
        session.tick(1.5, Some(&snapshot()));
        let jitter = Vec2::new(spot.x + i as f32 * 4.0, spot.y);
        session.record_death(jitter, 23.0);
    }

    assert_eq!(session.death_points().len(), 1);
    assert_eq!(session.death_points()[0].count, 6);
    assert_eq!(session.death_count_near(spot, 50.0), 6);
    assert_eq!(session.total_deaths(), 6);

    // All six deaths sit inside the 15s rate window and there is no
    // progress history yet, so the score is the rate term alone.
    let expected = 0.6 * (6.0 / 15.0);
    assert!((session.frustration_level() - expected).abs() < 1e-6);
}

#[test]
fn death_rate_decays_as_the_window_slides() {
    let mut session = session();
    for _ in 0..4 {
        session.record_death(Vec2::new(0.0, 0.0), 10.0);
    }
    assert!(session.frustration_level() > 0.0);

    // 31 seconds later those deaths are outside the rate window and the
    // score falls back to zero.
    session.clock().advance(31.0);
    session.tick(31.0, Some(&snapshot()));
    assert!(session.frustration_level().abs() <= f32::EPSILON);
}

#[test]
fn stagnating_runs_push_the_classifier_toward_determination() {
    let mut session = session();

    // Eight attempts all dying around the same percent, a few seconds
    // apart: stagnation plus a steady death rate.
    for attempt in 0..8u8 {
        for _ in 0..30 {
            session.clock().advance(0.1);
            session.tick(0.1, Some(&snapshot()));
        }
        session.end_attempt(Vec2::new(300.0, 50.0), 41.0 + f32::from(attempt % 2));
    }

    let frustration = session.frustration_level();
    let momentum = session.momentum_level();
    assert!(frustration > 0.4, "frustration = {frustration}");
    assert!(momentum > 0.2, "momentum = {momentum}");
    assert!(matches!(
        session.emotion_target(),
        EmotionState::Determination | EmotionState::Frustration
    ));
}

#[test]
fn breaking_ninety_five_percent_targets_triumph_over_everything() {
    let mut session = session();

    // Grind up a frustrated state first.
    for _ in 0..6 {
        for _ in 0..20 {
            session.tick(0.1, Some(&snapshot()));
        }
        session.end_attempt(Vec2::new(100.0, 0.0), 30.0);
    }

    // Then one run that nearly clears the level.
    for _ in 0..20 {
        session.tick(0.1, Some(&snapshot()));
    }
    session.end_attempt(Vec2::new(900.0, 0.0), 96.0);
    session.tick(0.1, Some(&snapshot()));

    assert!(session.best_percent() > 95.0);
    assert!(session.total_deaths() > 0);
    assert_eq!(session.emotion_target(), EmotionState::Triumph);
}

#[test]
fn completion_records_a_full_percent_attempt() {
    let mut session = session();
    for _ in 0..20 {
        session.tick(0.1, Some(&snapshot()));
    }
    session.level_complete();
    assert!((session.best_percent() - 100.0).abs() <= f32::EPSILON);
    assert!((session.last_percent() - 100.0).abs() <= f32::EPSILON);
    assert_eq!(session.total_deaths(), 0);
    assert_eq!(session.ghosts().len(), 1);
}

#[test]
fn emotional_state_eases_rather_than_snapping() {
    let mut session = session();

    // A brutal burst of deaths pushes the target to Frustration
    // (21 deaths in-window puts the rate term past the 0.8 gate).
    for _ in 0..21 {
        session.record_death(Vec2::new(50.0, 0.0), 15.0);
        session.tick(0.1, Some(&snapshot()));
    }
    session.tick(0.1, Some(&snapshot()));

    assert_eq!(session.emotion_target(), EmotionState::Frustration);
    assert_ne!(session.emotion_target(), session.emotion_state());
    let early = session.transition_progress();
    assert!(early > 0.0 && early < 1.0);

    // Enough ticks later the transition commits and the derived signals
    // follow the committed state.
    for _ in 0..40 {
        session.tick(0.1, Some(&snapshot()));
    }
    assert_eq!(session.emotion_state(), EmotionState::Frustration);
    assert!((session.vignette_intensity() - 0.4).abs() <= f32::EPSILON);
    assert!(session.screen_shake_intensity() > 0.0);
}
