//! Config file loading scenarios.

use std::fs;
use std::time::Duration;

use swoon_engine::{App, SwoonConfig};

/// A full config file drives geometry, window, copy, and taunts.
#[test]
fn full_config_file_is_applied() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[ui]
ascii_only = true
high_contrast = true
reduced_motion = true

[evasion]
padding = 10.0
min_distance = 50.0
max_attempts = 5

[celebration]
duration_ms = 1500

[text]
question_lead = "Will you raid with"
question_word = "me?"
yes_label = "Always"
no_label = "Never"
taunts = ["", "Too slow!"]
"#,
    )
    .expect("write config");

    let config = SwoonConfig::load_from(&path).expect("config should parse");
    let mut app = App::from_config(Some(&config));

    let options = app.ui_options();
    assert!(options.ascii_only);
    assert!(options.high_contrast);
    assert!(options.reduced_motion);

    assert!((app.limits().padding - 10.0).abs() < f64::EPSILON);
    assert!((app.limits().min_distance - 50.0).abs() < f64::EPSILON);
    assert_eq!(app.limits().max_attempts, 5);

    assert_eq!(app.text().question_lead, "Will you raid with");
    assert_eq!(app.text().question_word, "me?");
    assert_eq!(app.text().yes_label, "Always");
    assert_eq!(app.text().no_label, "Never");
    assert_eq!(
        app.text().accepted_heading,
        "Yay!",
        "unset keys keep defaults"
    );

    app.accept();
    app.advance(Duration::from_millis(1_500));
    assert!(!app.celebration_active(), "configured window is 1500 ms");
}

/// A sparse file overrides only what it names.
#[test]
fn partial_config_keeps_defaults_elsewhere() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[evasion]\npadding = 32.0\n").expect("write config");

    let config = SwoonConfig::load_from(&path).expect("config should parse");
    let app = App::from_config(Some(&config));

    assert!((app.limits().padding - 32.0).abs() < f64::EPSILON);
    assert!((app.limits().min_distance - 100.0).abs() < f64::EPSILON);
    assert_eq!(app.limits().max_attempts, 100);

    let options = app.ui_options();
    assert!(!options.ascii_only);
    assert!(!options.high_contrast);
    assert!(!options.reduced_motion);
}

/// Unreadable files fall back to defaults the way startup does.
#[test]
fn startup_falls_back_to_defaults_on_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("nope.toml");

    let config = SwoonConfig::load_from(&missing).ok();
    let app = App::from_config(config.as_ref());

    assert!((app.limits().padding - 20.0).abs() < f64::EPSILON);
    assert!((app.limits().min_distance - 100.0).abs() < f64::EPSILON);
    assert_eq!(app.text().question_lead, "Will you be my");
    assert_eq!(app.text().question_word, "Valentine?");
    assert_eq!(app.feedback_message(), "");
}
