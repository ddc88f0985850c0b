//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use rand::SeedableRng;
use rand::rngs::StdRng;

use swoon_engine::App;
use swoon_types::Size;

/// Playfield extent used across scenarios, in engine units.
pub const REGION: Size = Size::new(500.0, 500.0);

/// Decline-button extent used across scenarios, in engine units.
pub const CONTROL: Size = Size::new(100.0, 50.0);

/// Deterministic RNG so relocation scenarios replay identically.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// An app with default settings, independent of any config on disk.
pub fn fresh_app() -> App {
    App::from_config(None)
}

/// An app that has already dodged `count` times.
pub fn app_after_evasions(count: u32, rng: &mut StdRng) -> App {
    let mut app = fresh_app();
    for _ in 0..count {
        app.evade_with(rng, REGION, CONTROL);
    }
    app
}
