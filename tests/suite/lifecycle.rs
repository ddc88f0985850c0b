//! End-to-end proposal lifecycle scenarios.

use std::time::Duration;

use swoon_engine::Phase;
use swoon_types::Point;

use crate::common::{CONTROL, REGION, app_after_evasions, fresh_app, seeded_rng};

/// The whole arc: ask, dodge a few times, accept, celebrate, reset, ask again.
#[test]
fn full_proposal_arc() {
    let mut rng = seeded_rng(42);
    let mut app = fresh_app();

    assert_eq!(app.phase(), Phase::Asking);
    assert_eq!(app.feedback_message(), "");

    for _ in 0..3 {
        app.evade_with(&mut rng, REGION, CONTROL);
    }
    assert_eq!(app.evasion_count(), 3);
    assert_eq!(app.feedback_message(), "Getting warmer...");

    app.accept();
    assert_eq!(app.phase(), Phase::Accepted);
    assert!(app.celebration_active());

    app.advance(Duration::from_millis(4_000));
    assert!(!app.celebration_active());
    assert_eq!(
        app.phase(),
        Phase::Accepted,
        "window expiry is not a phase transition"
    );

    app.reset();
    assert_eq!(app.phase(), Phase::Asking);
    assert_eq!(app.feedback_message(), "");

    app.evade_with(&mut rng, REGION, CONTROL);
    assert_eq!(app.evasion_count(), 1, "a fresh round counts from zero");
}

/// Count, movement flag, and position always agree about "at rest".
#[test]
fn rest_state_is_all_or_nothing() {
    let mut rng = seeded_rng(7);
    let mut app = fresh_app();

    assert_eq!(app.evasion_count(), 0);
    assert!(!app.has_moved());
    assert_eq!(app.position(), Point::ORIGIN);

    app.evade_with(&mut rng, REGION, CONTROL);
    assert!(app.evasion_count() > 0);
    assert!(app.has_moved());
    assert_ne!(app.position(), Point::ORIGIN);

    app.accept();
    app.reset();
    assert_eq!(app.evasion_count(), 0);
    assert!(!app.has_moved());
    assert_eq!(app.position(), Point::ORIGIN);
}

/// Acceptance freezes dodging; only reset reopens the question.
#[test]
fn accepted_phase_ignores_further_dodging() {
    let mut rng = seeded_rng(11);
    let mut app = app_after_evasions(5, &mut rng);

    app.accept();
    let count = app.evasion_count();
    let frozen = app.position();

    app.evade_with(&mut rng, REGION, CONTROL);
    app.evade_with(&mut rng, REGION, CONTROL);
    assert_eq!(app.evasion_count(), count);
    assert_eq!(app.position(), frozen);

    app.accept();
    assert_eq!(app.phase(), Phase::Accepted, "re-accept is a no-op");
}

/// Long dodge sessions saturate the taunt script instead of indexing past it.
#[test]
fn marathon_dodging_saturates_taunts_then_accepts() {
    let mut rng = seeded_rng(3);
    let mut app = app_after_evasions(25, &mut rng);

    assert_eq!(app.feedback_message(), "Say yes already!");

    app.accept();
    assert!(app.celebration_active());
    app.advance(Duration::from_millis(1_000));
    assert!(
        app.celebration_active(),
        "window lasts well past the first second"
    );
}
