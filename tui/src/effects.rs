//! Decorative overlay effects for the Swoon TUI.

use ratatui::layout::Rect;

// R2 quasirandom strides; decorrelates the two axes without an RNG so the
// scatter is stable across frames.
const STRIDE_X: f32 = 0.754_877_7;
const STRIDE_Y: f32 = 0.569_840_3;

const HEART_COUNT: usize = 15;
const CONFETTI_COUNT: usize = 60;

/// Ticks for a background heart to rise one cell.
const RISE_PERIOD: usize = 40;

/// Background heart drifting slowly upward behind the card.
#[derive(Debug, Clone, Copy)]
pub struct HeartCell {
    pub x: u16,
    pub y: u16,
    pub outline: bool,
}

/// Celebration confetti piece; `color` indexes into `Palette::confetti`.
#[derive(Debug, Clone, Copy)]
pub struct ConfettiPiece {
    pub x: u16,
    pub y: u16,
    pub color: usize,
    pub round: bool,
}

/// Scatter hearts across `area`, drifting upward as `tick` advances.
#[must_use]
pub fn heart_cells(area: Rect, tick: usize, reduced_motion: bool) -> Vec<HeartCell> {
    if area.width == 0 || area.height == 0 {
        return Vec::new();
    }
    let rows = usize::from(area.height);
    let count = HEART_COUNT.min(area.area() as usize / 24);

    (0..count)
        .map(|i| {
            let fx = (i as f32 * STRIDE_X + 0.13).fract();
            let fy = (i as f32 * STRIDE_Y + 0.47).fract();
            let base_row = (fy * area.height as f32) as usize;
            let rise = if reduced_motion {
                0
            } else {
                // Staggered speeds keep the field from scrolling in lockstep.
                tick / (RISE_PERIOD + (i % 3) * 15)
            };
            HeartCell {
                x: area.x + (fx * f32::from(area.width)) as u16,
                y: area.y + ((base_row + rows - rise % rows) % rows) as u16,
                outline: i % 3 != 0,
            }
        })
        .collect()
}

/// Scatter confetti across `area`, falling as `progress` runs `0.0..=1.0`.
#[must_use]
pub fn confetti_pieces(area: Rect, progress: f32, reduced_motion: bool) -> Vec<ConfettiPiece> {
    if area.width == 0 || area.height == 0 {
        return Vec::new();
    }
    let count = CONFETTI_COUNT.min(area.area() as usize / 8);
    let drop = if reduced_motion {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };

    (0..count)
        .map(|i| {
            let fx = (i as f32 * STRIDE_X + 0.31).fract();
            let fy = (i as f32 * STRIDE_Y + 0.71).fract();
            let speed = 1.0 + (i % 4) as f32 * 0.5;
            let row = ((fy + drop * speed).fract() * f32::from(area.height)) as u16;
            ConfettiPiece {
                x: area.x + (fx * f32::from(area.width)) as u16,
                y: area.y + row,
                color: i % 5,
                round: i % 3 != 0,
            }
        })
        .collect()
}
