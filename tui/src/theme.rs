//! Color theme and glyphs for the Swoon TUI.
//!
//! Uses a rose palette by default with an optional high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use swoon_types::UiOptions;

/// Rose color palette constants.
mod colors {
    use super::Color;

    // === Backgrounds ===
    pub const BG_DARK: Color = Color::Rgb(26, 10, 16); // deep plum
    pub const BG_PANEL: Color = Color::Rgb(40, 16, 24); // card
    pub const BG_HIGHLIGHT: Color = Color::Rgb(60, 24, 36); // hovered card
    pub const BG_BORDER: Color = Color::Rgb(136, 19, 55); // rose900

    // === Foregrounds ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(255, 241, 242); // rose50
    pub const TEXT_SECONDARY: Color = Color::Rgb(254, 205, 211); // rose200
    pub const TEXT_MUTED: Color = Color::Rgb(159, 103, 118); // dusty rose

    // === Accent Colors ===
    pub const ROSE: Color = Color::Rgb(225, 29, 72); // rose600
    pub const ROSE_SOFT: Color = Color::Rgb(253, 164, 175); // rose300
    pub const PINK: Color = Color::Rgb(244, 63, 94); // rose500
    pub const GOLD: Color = Color::Rgb(251, 191, 36); // amber400

    // === Semantic Aliases ===
    pub const ACCENT: Color = ROSE;
    pub const HEART: Color = PINK;

    // === Confetti Colors ===
    pub const CONFETTI: [Color; 5] = [
        ROSE,                         // rose600
        ROSE_SOFT,                    // rose300
        Color::Rgb(255, 228, 230),    // rose100
        TEXT_PRIMARY,                 // rose50
        TEXT_SECONDARY,               // rose200
    ];
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub accent_soft: Color,
    pub heart: Color,
    pub gold: Color,
    pub confetti: [Color; 5],
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_highlight: colors::BG_HIGHLIGHT,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            accent: colors::ACCENT,
            accent_soft: colors::ROSE_SOFT,
            heart: colors::HEART,
            gold: colors::GOLD,
            confetti: colors::CONFETTI,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,
            accent: Color::Red,
            accent_soft: Color::Magenta,
            heart: Color::Red,
            gold: Color::Yellow,
            confetti: [
                Color::White,
                Color::Magenta,
                Color::Cyan,
                Color::Yellow,
                Color::Green,
            ],
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for decorations.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub heart: &'static str,
    pub heart_outline: &'static str,
    pub sparkle: &'static str,
    pub confetti_round: &'static str,
    pub confetti_square: &'static str,
    pub heartbeat_frames: &'static [&'static str],
}

const HEARTBEAT_FRAMES: &[&str] = &["♥", "♡"];
const HEARTBEAT_FRAMES_ASCII: &[&str] = &["<3"];

/// Ticks per heartbeat frame at the 8 ms frame cadence.
pub const HEARTBEAT_PERIOD: usize = 60;

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            heart: "<3",
            heart_outline: "<3",
            sparkle: "*",
            confetti_round: "o",
            confetti_square: "#",
            heartbeat_frames: HEARTBEAT_FRAMES_ASCII,
        }
    } else {
        Glyphs {
            heart: "♥",
            heart_outline: "♡",
            sparkle: "✦",
            confetti_round: "●",
            confetti_square: "■",
            heartbeat_frames: HEARTBEAT_FRAMES,
        }
    }
}

/// When `reduced_motion` is enabled, returns a static glyph instead of beating.
#[must_use]
pub fn heartbeat_frame(tick: usize, options: UiOptions) -> &'static str {
    let frames = glyphs(options).heartbeat_frames;
    if options.reduced_motion {
        frames[0]
    } else {
        frames[(tick / HEARTBEAT_PERIOD) % frames.len()]
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn question(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn question_word(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn taunt(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent_soft)
            .add_modifier(Modifier::ITALIC)
    }

    #[must_use]
    pub fn button_yes(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn button_yes_hover(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.accent_soft)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn button_no(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_secondary)
            .bg(palette.bg_highlight)
    }

    #[must_use]
    pub fn heading(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.gold)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent_soft)
            .add_modifier(Modifier::BOLD)
    }
}
