//! Core state machine and evasion logic for Swoon.
//!
//! Owns the proposal lifecycle (asking ⇄ accepted), the decline control's
//! evasion state, and the celebration window. Rendering and input live in
//! `swoon-tui`; this crate never touches the terminal.

use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{debug, trace};

pub use swoon_types::{
    Celebration, EvasionState, FeedbackScript, Point, ProposalText, SampleLimits, Size, UiOptions,
};

mod config;
pub use config::{
    CelebrationConfig, ConfigError, EvasionConfig, SwoonConfig, TextConfig, UiConfig, config_path,
};

mod sampler;
pub use sampler::sample_position;


/// Lifecycle phase of the proposal.
///
/// ```text
/// Asking ──accept()──▶ Accepted
///    ▲                    │
///    └──────reset()───────┘
/// ```
///
/// `accept` is only honored while Asking and `reset` only while Accepted;
/// any other trigger is a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Asking,
    Accepted,
}

/// Application state
pub struct App {
    phase: Phase,
    evasion: EvasionState,
    /// Live celebratory display request. `None` once expired or reset.
    celebration: Option<Celebration>,
    celebration_duration: Duration,
    script: FeedbackScript,
    text: ProposalText,
    limits: SampleLimits,
    ui_options: UiOptions,
    should_quit: bool,
    tick: usize,
    /// Frame timing for animations and the celebration window.
    last_frame: Instant,
}

impl App {
    /// Build the app from the on-disk config, falling back to defaults.
    #[must_use]
    pub fn new() -> Self {
        let config = SwoonConfig::load().ok().flatten();
        Self::from_config(config.as_ref())
    }

    #[must_use]
    pub fn from_config(config: Option<&SwoonConfig>) -> Self {
        let defaults = SampleLimits::default();
        let evasion = config.and_then(|cfg| cfg.evasion.as_ref());
        let limits = SampleLimits {
            padding: evasion
                .and_then(|e| e.padding)
                .unwrap_or(defaults.padding)
                .max(0.0),
            min_distance: evasion
                .and_then(|e| e.min_distance)
                .unwrap_or(defaults.min_distance)
                .max(0.0),
            // Zero attempts would never draw a candidate.
            max_attempts: evasion
                .and_then(|e| e.max_attempts)
                .unwrap_or(defaults.max_attempts)
                .max(1),
        };

        let celebration_duration = config
            .and_then(|cfg| cfg.celebration.as_ref())
            .and_then(|c| c.duration_ms)
            .map_or(Celebration::DEFAULT_DURATION, Duration::from_millis);

        let text_config = config.and_then(|cfg| cfg.text.as_ref());
        let script = text_config
            .and_then(|t| t.taunts.clone())
            .unwrap_or_default();

        Self {
            phase: Phase::Asking,
            evasion: EvasionState::AtRest,
            celebration: None,
            celebration_duration,
            script,
            text: merge_text(text_config),
            limits,
            ui_options: config
                .and_then(|cfg| cfg.ui.as_ref())
                .map(UiConfig::ui_options)
                .unwrap_or_default(),
            should_quit: false,
            tick: 0,
            last_frame: Instant::now(),
        }
    }

    /// Relocate the decline control away from the pointer.
    ///
    /// `region` and `control` are measured fresh by the caller; both can
    /// change between frames. No-op unless the proposal is still open.
    pub fn evade(&mut self, region: Size, control: Size) {
        let mut rng = rand::rng();
        self.evade_with(&mut rng, region, control);
    }

    /// `evade` with a caller-supplied RNG.
    pub fn evade_with<R: Rng + ?Sized>(&mut self, rng: &mut R, region: Size, control: Size) {
        if self.phase != Phase::Asking {
            trace!("evade ignored outside Asking");
            return;
        }

        let position = sampler::sample_position(
            rng,
            region,
            control,
            self.evasion.position(),
            self.evasion.has_moved(),
            &self.limits,
        );
        self.evasion.relocate(position);
        debug!(
            x = position.x,
            y = position.y,
            count = self.evasion.evasion_count(),
            "decline control relocated"
        );
    }

    /// Accept the proposal and open the celebration window.
    pub fn accept(&mut self) {
        if self.phase != Phase::Asking {
            trace!("accept ignored outside Asking");
            return;
        }
        self.phase = Phase::Accepted;
        self.celebration = Some(Celebration::new(self.celebration_duration));
        self.last_frame = Instant::now();
        debug!(
            evasions = self.evasion.evasion_count(),
            "proposal accepted"
        );
    }

    /// Return to Asking, clearing all evasion state.
    pub fn reset(&mut self) {
        if self.phase != Phase::Accepted {
            trace!("reset ignored outside Accepted");
            return;
        }
        self.phase = Phase::Asking;
        self.evasion = EvasionState::AtRest;
        self.celebration = None;
        debug!("proposal reset");
    }

    /// Increment the animation tick and advance frame-driven timers.
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.advance(elapsed);
    }

    /// Advance frame-driven timers by `delta`.
    ///
    /// Expiring with no live celebration is a no-op, so a reset that raced
    /// the deadline stays harmless.
    pub fn advance(&mut self, delta: Duration) {
        if let Some(celebration) = self.celebration.as_mut() {
            celebration.advance(delta);
            if celebration.is_finished() {
                self.celebration = None;
                trace!("celebration window closed");
            }
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn evasion_count(&self) -> u32 {
        self.evasion.evasion_count()
    }

    /// Position of the decline control, relative to the region's top-left.
    /// Reads as the origin until the first relocation.
    #[must_use]
    pub fn position(&self) -> Point {
        self.evasion.position()
    }

    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.evasion.has_moved()
    }

    /// Escalation phrase for the current evasion count. Empty before the
    /// first evasion.
    #[must_use]
    pub fn feedback_message(&self) -> &str {
        self.script.message_for(self.evasion.evasion_count())
    }

    #[must_use]
    pub fn celebration_active(&self) -> bool {
        self.celebration.is_some()
    }

    #[must_use]
    pub fn celebration(&self) -> Option<&Celebration> {
        self.celebration.as_ref()
    }

    #[must_use]
    pub fn text(&self) -> &ProposalText {
        &self.text
    }

    #[must_use]
    pub fn limits(&self) -> &SampleLimits {
        &self.limits
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.tick
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn merge_text(config: Option<&TextConfig>) -> ProposalText {
    let mut text = ProposalText::default();
    let Some(config) = config else {
        return text;
    };

    let overrides = [
        (&mut text.question_lead, &config.question_lead),
        (&mut text.question_word, &config.question_word),
        (&mut text.yes_label, &config.yes_label),
        (&mut text.no_label, &config.no_label),
        (&mut text.accepted_heading, &config.accepted_heading),
        (&mut text.accepted_line, &config.accepted_line),
        (&mut text.accepted_subline, &config.accepted_subline),
        (&mut text.reset_label, &config.reset_label),
        (&mut text.footer, &config.footer),
    ];
    for (field, value) in overrides {
        if let Some(value) = value {
            field.clone_from(value);
        }
    }

    text
}
