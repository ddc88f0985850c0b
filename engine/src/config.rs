use serde::Deserialize;
use std::path::{Path, PathBuf};

use swoon_types::{FeedbackScript, UiOptions};

#[derive(Debug, Default, Deserialize)]
pub struct SwoonConfig {
    pub ui: Option<UiConfig>,
    pub evasion: Option<EvasionConfig>,
    pub celebration: Option<CelebrationConfig>,
    pub text: Option<TextConfig>,
}

#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UiConfig {
    /// Use ASCII-only glyphs for hearts and confetti.
    #[serde(default)]
    pub ascii_only: bool,
    /// Swap the rose palette for plain high-contrast colors.
    #[serde(default)]
    pub high_contrast: bool,
    /// Freeze decorative animation (heart drift, heartbeat, confetti fall).
    #[serde(default)]
    pub reduced_motion: bool,
}

impl UiConfig {
    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        UiOptions {
            ascii_only: self.ascii_only,
            high_contrast: self.high_contrast,
            reduced_motion: self.reduced_motion,
        }
    }
}

/// Sampler tunables.
///
/// ```toml
/// [evasion]
/// padding = 20.0
/// min_distance = 100.0
/// max_attempts = 100
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct EvasionConfig {
    /// Margin kept between the decline control and the region edge, in units.
    pub padding: Option<f64>,
    /// Minimum relocation distance, in units.
    pub min_distance: Option<f64>,
    /// Draw attempts before the distance constraint is abandoned. Minimum 1.
    pub max_attempts: Option<u32>,
}

/// Celebration window.
///
/// ```toml
/// [celebration]
/// duration_ms = 4000
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct CelebrationConfig {
    /// Confetti display window in milliseconds.
    pub duration_ms: Option<u64>,
}

/// Copy overrides for both screens.
///
/// ```toml
/// [text]
/// question_word = "my plus-one?"
/// taunts = ["", "Nope.", "Still nope."]
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct TextConfig {
    pub question_lead: Option<String>,
    pub question_word: Option<String>,
    pub yes_label: Option<String>,
    pub no_label: Option<String>,
    pub accepted_heading: Option<String>,
    pub accepted_line: Option<String>,
    pub accepted_subline: Option<String>,
    pub reset_label: Option<String>,
    pub footer: Option<String>,
    /// Escalation phrases; entry 0 shows before any evasion. Must be
    /// non-empty if present.
    pub taunts: Option<FeedbackScript>,
}

impl SwoonConfig {
    /// Load the first config file found among the candidate paths.
    ///
    /// `Ok(None)` when no file exists; errors are logged here so callers can
    /// fall back to defaults without repeating the warning.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path_candidates().into_iter().find(|p| p.exists()) else {
            return Ok(None);
        };
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".swoon").join("config.toml"))
}

fn config_path_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.swoon/config.toml
    if let Some(path) = config_path() {
        candidates.push(path);
    }

    // Fallback: ./.swoon/config.toml (useful in constrained environments)
    candidates.push(PathBuf::from(".swoon").join("config.toml"));

    candidates
}
