//! Evasion state for the decline control.

use std::num::NonZeroU32;

use crate::geometry::Point;

/// Where the decline control currently lives.
///
/// ```text
/// AtRest ──relocate(p)──▶ Dodging { position: p, count: 1 }
///                              │          ▲
///                              └──────────┘
///                            relocate (count += 1)
/// ```
///
/// The control starts docked in the layout flow (`AtRest`). The first
/// relocation moves it to an absolute position; every further relocation
/// bumps the count. A relocation count of zero paired with a non-origin
/// position is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EvasionState {
    /// Docked in the layout flow; never relocated.
    #[default]
    AtRest,
    /// Relocated `count` times, currently at `position`.
    Dodging { position: Point, count: NonZeroU32 },
}

impl EvasionState {
    /// Position of the control, relative to the region's top-left.
    ///
    /// `AtRest` reads as the origin: the control has not left the flow.
    #[must_use]
    pub fn position(self) -> Point {
        match self {
            Self::AtRest => Point::ORIGIN,
            Self::Dodging { position, .. } => position,
        }
    }

    /// Number of relocations so far.
    #[must_use]
    pub fn evasion_count(self) -> u32 {
        match self {
            Self::AtRest => 0,
            Self::Dodging { count, .. } => count.get(),
        }
    }

    /// Whether the control has been relocated at least once.
    #[must_use]
    pub fn has_moved(self) -> bool {
        matches!(self, Self::Dodging { .. })
    }

    /// Step to `position`, bumping the relocation count.
    pub fn relocate(&mut self, position: Point) {
        let count = match *self {
            Self::AtRest => NonZeroU32::MIN,
            Self::Dodging { count, .. } => count.saturating_add(1),
        };
        *self = Self::Dodging { position, count };
    }
}

/// Tunables for the relocation sampler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleLimits {
    /// Margin kept between the control and the region edge, in units.
    pub padding: f64,
    /// Minimum distance a relocation must put between the control and its
    /// previous position, in units.
    pub min_distance: f64,
    /// Draw attempts before the distance constraint is abandoned and the
    /// last candidate is accepted. Guarantees termination on tiny regions.
    pub max_attempts: u32,
}

impl Default for SampleLimits {
    fn default() -> Self {
        Self {
            padding: 20.0,
            min_distance: 100.0,
            max_attempts: 100,
        }
    }
}
