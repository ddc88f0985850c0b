//! TUI rendering tests using a vt100 virtual terminal.


use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::Terminal;
use ratatui::layout::Rect;

use swoon_engine::{App, SwoonConfig, UiConfig};
use swoon_tui::{HitMap, UNITS_PER_CELL_X, UNITS_PER_CELL_Y, draw};
use vt100_backend::VT100Backend;

fn render(app: &App, width: u16, height: u16) -> (String, HitMap) {
    let backend = VT100Backend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("failed to create terminal");
    let mut hits = HitMap::default();
    terminal
        .draw(|frame| draw(frame, app, &mut hits))
        .expect("failed to draw");
    (terminal.backend().contents(), hits)
}

#[test]
fn asking_screen_shows_question_and_both_buttons() {
    let app = App::from_config(None);
    let (contents, hits) = render(&app, 80, 24);

    assert!(contents.contains("Will you be my"));
    assert!(contents.contains("Valentine?"));
    assert!(contents.contains("Yes"));
    assert!(contents.contains("No"));

    assert!(hits.yes_rect().is_some());
    assert!(hits.no_rect().is_some());
    assert!(hits.reset_rect().is_none());
}

#[test]
fn taunt_line_updates_after_a_dodge() {
    let mut app = App::from_config(None);
    let (contents, hits) = render(&app, 80, 24);
    assert!(!contents.contains("Nice try..."));

    let mut rng = StdRng::seed_from_u64(5);
    let (region, control) = hits.measurements();
    app.evade_with(&mut rng, region, control);

    let (contents, _) = render(&app, 80, 24);
    assert!(contents.contains("Nice try..."));
}

#[test]
fn relocated_decline_button_tracks_engine_position() {
    let mut app = App::from_config(None);
    let (_, hits) = render(&app, 80, 24);
    let docked = hits.no_rect().expect("decline button starts docked");

    let mut rng = StdRng::seed_from_u64(9);
    let (region, control) = hits.measurements();
    app.evade_with(&mut rng, region, control);

    let (contents, hits) = render(&app, 80, 24);
    assert!(contents.contains("No"));

    // The playfield starts one cell in from the frame edge.
    let position = app.position();
    let expected = Rect::new(
        1 + (position.x / UNITS_PER_CELL_X).round() as u16,
        1 + (position.y / UNITS_PER_CELL_Y).round() as u16,
        docked.width,
        docked.height,
    );
    assert_eq!(hits.no_rect(), Some(expected));
}

#[test]
fn accepted_screen_drops_the_decline_control() {
    let mut app = App::from_config(None);
    let mut rng = StdRng::seed_from_u64(2);
    let (_, hits) = render(&app, 80, 24);
    let (region, control) = hits.measurements();
    for _ in 0..3 {
        app.evade_with(&mut rng, region, control);
    }
    app.accept();

    let (contents, hits) = render(&app, 80, 24);
    assert!(contents.contains("Yay!"));
    assert!(contents.contains("I knew you'd say yes!"));
    assert!(contents.contains("Ask me again"));

    assert!(hits.yes_rect().is_none());
    assert!(hits.no_rect().is_none());
    assert!(hits.reset_rect().is_some());

    // The dodge history stays out of the accepted screen entirely.
    assert!(!contents.contains("Getting warmer..."));
}

#[test]
fn confetti_clears_when_the_window_ends() {
    let mut app = App::from_config(None);
    app.accept();

    let (contents, _) = render(&app, 80, 24);
    assert!(contents.contains('●') || contents.contains('■'));

    app.advance(Duration::from_millis(4_000));
    let (contents, _) = render(&app, 80, 24);
    assert!(!contents.contains('●'));
    assert!(!contents.contains('■'));
    assert!(contents.contains("Yay!"), "the accepted card stays up");
}

#[test]
fn ascii_mode_uses_fallback_glyphs() {
    let config = SwoonConfig {
        ui: Some(UiConfig {
            ascii_only: true,
            ..UiConfig::default()
        }),
        ..SwoonConfig::default()
    };
    let app = App::from_config(Some(&config));

    let (contents, _) = render(&app, 80, 24);
    assert!(contents.contains("<3"));
    assert!(!contents.contains('♥'));
    assert!(!contents.contains('♡'));
}
