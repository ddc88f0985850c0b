//! Relocation sampling for the decline control.

use rand::Rng;
use tracing::trace;

use swoon_types::{Point, SampleLimits, Size};

/// Draw a new position for the control inside `region`.
///
/// Candidates are uniform over `[padding, padding + max]` per axis, where
/// `max` is the region minus the control and both margins, clamped to zero
/// for regions too small to fit the control. Once the control `has_moved`,
/// candidates closer than `min_distance` to `previous` are redrawn, up to
/// `max_attempts` draws; the last candidate wins if the constraint cannot
/// be met. The first relocation accepts the first candidate unconditionally.
///
/// Region and control sizes must be measured fresh by the caller; both can
/// change between relocations.
pub fn sample_position<R: Rng + ?Sized>(
    rng: &mut R,
    region: Size,
    control: Size,
    previous: Point,
    has_moved: bool,
    limits: &SampleLimits,
) -> Point {
    let max_x = (region.width - control.width - 2.0 * limits.padding).max(0.0);
    let max_y = (region.height - control.height - 2.0 * limits.padding).max(0.0);

    let mut candidate = draw(rng, limits.padding, max_x, max_y);
    if !has_moved {
        return candidate;
    }

    let mut attempts: u32 = 1;
    while candidate.distance_to(previous) < limits.min_distance && attempts < limits.max_attempts {
        candidate = draw(rng, limits.padding, max_x, max_y);
        attempts += 1;
    }

    if candidate.distance_to(previous) < limits.min_distance {
        trace!(
            attempts,
            min_distance = limits.min_distance,
            "relocation distance constraint abandoned"
        );
    }

    candidate
}

fn draw<R: Rng + ?Sized>(rng: &mut R, padding: f64, max_x: f64, max_y: f64) -> Point {
    Point::new(
        padding + rng.random::<f64>() * max_x,
        padding + rng.random::<f64>() * max_y,
    )
}
