//! UI options shared by config and rendering.

/// UI configuration options derived from config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    /// Use ASCII-only glyphs for hearts and confetti.
    pub ascii_only: bool,
    /// Swap the rose palette for plain high-contrast colors.
    pub high_contrast: bool,
    /// Freeze decorative animation (heart drift, heartbeat, confetti fall).
    pub reduced_motion: bool,
}
