//! TUI rendering for Swoon using ratatui.

mod effects;
mod input;
mod theme;

pub use effects::{confetti_pieces, heart_cells, ConfettiPiece, HeartCell};
pub use input::{handle_events, InputPump};
pub use theme::{glyphs, heartbeat_frame, palette, styles, Glyphs, Palette};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use swoon_engine::{App, Celebration, Phase};
use swoon_types::Size;

/// Engine geometry is measured in abstract units; one terminal cell maps to
/// the pixel footprint of a typical monospace glyph.
pub const UNITS_PER_CELL_X: f64 = 8.0;
pub const UNITS_PER_CELL_Y: f64 = 16.0;

const BUTTON_WIDTH: u16 = 12;
const BUTTON_HEIGHT: u16 = 3;

// Fallback extent for pointer events that arrive before the first frame.
const FALLBACK_COLUMNS: u16 = 80;
const FALLBACK_ROWS: u16 = 24;

/// Hit regions recorded by the last draw, consumed by mouse handling.
///
/// The renderer is the only authority on where widgets land; input replays
/// pointer coordinates against the most recent frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct HitMap {
    playfield: Option<Rect>,
    yes: Option<Rect>,
    no: Option<Rect>,
    reset: Option<Rect>,
    hover_yes: bool,
}

impl HitMap {
    fn record_frame(&mut self, playfield: Rect) {
        self.playfield = Some(playfield);
        self.yes = None;
        self.no = None;
        self.reset = None;
    }

    #[must_use]
    pub fn over_yes(&self, at: Position) -> bool {
        self.yes.is_some_and(|rect| rect.contains(at))
    }

    #[must_use]
    pub fn over_no(&self, at: Position) -> bool {
        self.no.is_some_and(|rect| rect.contains(at))
    }

    #[must_use]
    pub fn over_reset(&self, at: Position) -> bool {
        self.reset.is_some_and(|rect| rect.contains(at))
    }

    #[must_use]
    pub fn yes_rect(&self) -> Option<Rect> {
        self.yes
    }

    #[must_use]
    pub fn no_rect(&self) -> Option<Rect> {
        self.no
    }

    #[must_use]
    pub fn reset_rect(&self) -> Option<Rect> {
        self.reset
    }

    pub fn set_hover_yes(&mut self, on: bool) {
        self.hover_yes = on;
    }

    #[must_use]
    pub fn hover_yes(&self) -> bool {
        self.hover_yes
    }

    /// Playfield and decline-button extents in engine units, measured from
    /// the most recent frame.
    #[must_use]
    pub fn measurements(&self) -> (Size, Size) {
        let playfield = self
            .playfield
            .unwrap_or(Rect::new(0, 0, FALLBACK_COLUMNS, FALLBACK_ROWS));
        let control = self
            .no
            .map_or(Rect::new(0, 0, BUTTON_WIDTH, BUTTON_HEIGHT), |rect| rect);
        (rect_units(playfield), rect_units(control))
    }
}

fn rect_units(rect: Rect) -> Size {
    Size::new(
        f64::from(rect.width) * UNITS_PER_CELL_X,
        f64::from(rect.height) * UNITS_PER_CELL_Y,
    )
}

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App, hits: &mut HitMap) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(1),    // Playfield
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    let playfield = chunks[0];
    hits.record_frame(playfield);

    match app.phase() {
        Phase::Asking => draw_asking(frame, app, playfield, hits, &palette, &glyphs),
        Phase::Accepted => draw_accepted(frame, app, playfield, hits, &palette, &glyphs),
    }

    draw_key_hints(frame, app, chunks[1], &palette, &glyphs);
}

fn draw_asking(
    frame: &mut Frame,
    app: &App,
    playfield: Rect,
    hits: &mut HitMap,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let options = app.ui_options();
    draw_hearts(frame, playfield, app.tick_count(), palette, glyphs, options.reduced_motion);

    let text = app.text();
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            heartbeat_frame(app.tick_count(), options),
            Style::default().fg(palette.heart),
        )),
        Line::from(""),
        Line::from(Span::styled(
            text.question_lead.as_str(),
            styles::question(palette),
        )),
        Line::from(Span::styled(
            text.question_word.as_str(),
            styles::question_word(palette),
        )),
        Line::from(""),
    ];
    let taunt = app.feedback_message();
    if taunt.is_empty() {
        // Keep the card height stable before the first dodge.
        lines.push(Line::from(""));
    } else {
        lines.push(Line::from(Span::styled(taunt, styles::taunt(palette))));
    }

    let card = card_rect(&lines, playfield);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .style(Style::default().bg(palette.bg_panel))
        .padding(Padding::uniform(1));

    frame.render_widget(Clear, card);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(block),
        card,
    );

    let center = playfield.x + playfield.width / 2;
    let buttons_y = card
        .bottom()
        .saturating_add(1)
        .min(playfield.bottom().saturating_sub(BUTTON_HEIGHT).max(playfield.y));

    let yes = Rect::new(
        center.saturating_sub(BUTTON_WIDTH + 1),
        buttons_y,
        BUTTON_WIDTH,
        BUTTON_HEIGHT,
    )
    .intersection(playfield);
    if !yes.is_empty() {
        let style = if hits.hover_yes() {
            styles::button_yes_hover(palette)
        } else {
            styles::button_yes(palette)
        };
        draw_button(frame, yes, &text.yes_label, style, palette);
        hits.yes = Some(yes);
    }

    let no = if app.has_moved() {
        roaming_no_rect(app, playfield)
    } else {
        Rect::new(
            center.saturating_add(1),
            buttons_y,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        )
        .intersection(playfield)
    };
    if !no.is_empty() {
        draw_button(frame, no, &text.no_label, styles::button_no(palette), palette);
        hits.no = Some(no);
    }
}

fn draw_accepted(
    frame: &mut Frame,
    app: &App,
    playfield: Rect,
    hits: &mut HitMap,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let options = app.ui_options();
    if app.celebration_active() {
        let progress = app.celebration().map_or(0.0, Celebration::progress);
        draw_confetti(frame, playfield, progress, palette, glyphs, options.reduced_motion);
    }

    let text = app.text();
    let heading = format!(
        "{} {} {}",
        glyphs.sparkle, text.accepted_heading, glyphs.sparkle
    );
    let lines: Vec<Line> = vec![
        Line::from(Span::styled(heading, styles::heading(palette))),
        Line::from(""),
        Line::from(Span::styled(
            text.accepted_line.as_str(),
            Style::default().fg(palette.text_primary),
        )),
        Line::from(Span::styled(
            text.accepted_subline.as_str(),
            Style::default().fg(palette.text_secondary),
        )),
    ];

    let card = card_rect(&lines, playfield);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.gold))
        .style(Style::default().bg(palette.bg_panel))
        .padding(Padding::uniform(1));

    frame.render_widget(Clear, card);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(block),
        card,
    );

    let width = (text.reset_label.width() as u16)
        .saturating_add(4)
        .min(playfield.width);
    let reset = Rect::new(
        playfield.x + (playfield.width.saturating_sub(width) / 2),
        card.bottom()
            .saturating_add(1)
            .min(playfield.bottom().saturating_sub(BUTTON_HEIGHT).max(playfield.y)),
        width,
        BUTTON_HEIGHT,
    )
    .intersection(playfield);
    if !reset.is_empty() {
        draw_button(
            frame,
            reset,
            &text.reset_label,
            styles::button_no(palette),
            palette,
        );
        hits.reset = Some(reset);
    }
}

/// Center the card horizontally, a sixth of the way down the playfield.
fn card_rect(lines: &[Line], playfield: Rect) -> Rect {
    let content_width = lines.iter().map(Line::width).max().unwrap_or(10) as u16;
    let content_width = content_width.min(playfield.width.saturating_sub(4));
    let content_height = lines.len() as u16;

    let width = content_width.saturating_add(4).min(playfield.width);
    let height = content_height.saturating_add(4).min(playfield.height);
    Rect {
        x: playfield.x + (playfield.width.saturating_sub(width) / 2),
        y: playfield.y + (playfield.height.saturating_sub(height) / 6),
        width,
        height,
    }
}

fn draw_button(frame: &mut Frame, rect: Rect, label: &str, style: Style, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .style(style);

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(Line::from(label))
            .alignment(Alignment::Center)
            .block(block),
        rect,
    );
}

/// Map the engine position back into playfield cells, clamped so the whole
/// button stays visible.
fn roaming_no_rect(app: &App, playfield: Rect) -> Rect {
    let width = BUTTON_WIDTH.min(playfield.width);
    let height = BUTTON_HEIGHT.min(playfield.height);
    let max_col = playfield.width.saturating_sub(width);
    let max_row = playfield.height.saturating_sub(height);

    let position = app.position();
    let col = ((position.x / UNITS_PER_CELL_X).round() as u16).min(max_col);
    let row = ((position.y / UNITS_PER_CELL_Y).round() as u16).min(max_row);
    Rect::new(playfield.x + col, playfield.y + row, width, height)
}

fn draw_hearts(
    frame: &mut Frame,
    playfield: Rect,
    tick: usize,
    palette: &Palette,
    glyphs: &Glyphs,
    reduced_motion: bool,
) {
    let buf = frame.buffer_mut();
    for cell in heart_cells(playfield, tick, reduced_motion) {
        let (symbol, color) = if cell.outline {
            (glyphs.heart_outline, palette.text_muted)
        } else {
            (glyphs.heart, palette.accent_soft)
        };
        buf.set_string(
            cell.x,
            cell.y,
            symbol,
            Style::default().fg(color).bg(palette.bg_dark),
        );
    }
}

fn draw_confetti(
    frame: &mut Frame,
    playfield: Rect,
    progress: f32,
    palette: &Palette,
    glyphs: &Glyphs,
    reduced_motion: bool,
) {
    let buf = frame.buffer_mut();
    for piece in confetti_pieces(playfield, progress, reduced_motion) {
        let symbol = if piece.round {
            glyphs.confetti_round
        } else {
            glyphs.confetti_square
        };
        buf.set_string(
            piece.x,
            piece.y,
            symbol,
            Style::default()
                .fg(palette.confetti[piece.color])
                .bg(palette.bg_dark),
        );
    }
}

fn draw_key_hints(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let hints = match app.phase() {
        Phase::Asking => Line::from(vec![
            Span::styled("y/Enter", styles::key_highlight(palette)),
            Span::styled(" accept  ", styles::key_hint(palette)),
            Span::styled("n", styles::key_highlight(palette)),
            Span::styled(" decline  ", styles::key_hint(palette)),
            Span::styled("q", styles::key_highlight(palette)),
            Span::styled(" quit", styles::key_hint(palette)),
        ]),
        Phase::Accepted => Line::from(vec![
            Span::styled("r/Enter", styles::key_highlight(palette)),
            Span::styled(" ask again  ", styles::key_hint(palette)),
            Span::styled("q", styles::key_highlight(palette)),
            Span::styled(" quit", styles::key_hint(palette)),
        ]),
    };

    let footer = format!("{} {}", glyphs.heart, app.text().footer);
    let footer_width = footer.as_str().width() as u16;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(footer_width)])
        .split(area);

    frame.render_widget(Paragraph::new(hints), columns[0]);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(footer, styles::key_hint(palette)))),
        columns[1],
    );
}
