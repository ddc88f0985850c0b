//! Escalating feedback phrases keyed by evasion count.

use serde::Deserialize;
use thiserror::Error;

/// Stock escalation phrases. Entry 0 shows before any evasion.
const DEFAULT_TAUNTS: &[&str] = &[
    "",
    "Nice try...",
    "You can't escape!",
    "Getting warmer...",
    "Just say yes!",
    "I'll keep moving!",
    "Persistence is key...",
    "Almost got me!",
    "Not today!",
    "Say yes already!",
];

/// An ordered phrase list indexed by evasion count.
///
/// Lookups saturate at the last entry, so any count maps to a phrase.
/// Guaranteed non-empty: index 0 always exists.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<String>")]
pub struct FeedbackScript(Vec<String>);

#[derive(Debug, Error)]
#[error("feedback script must contain at least one entry")]
pub struct EmptyScriptError;

impl FeedbackScript {
    pub fn new(entries: Vec<String>) -> Result<Self, EmptyScriptError> {
        if entries.is_empty() {
            Err(EmptyScriptError)
        } else {
            Ok(Self(entries))
        }
    }

    /// Phrase for the given evasion count.
    ///
    /// Counts past the end return the last entry rather than wrapping.
    #[must_use]
    pub fn message_for(&self, evasion_count: u32) -> &str {
        let index = (evasion_count as usize).min(self.0.len() - 1);
        &self.0[index]
    }
}

impl Default for FeedbackScript {
    fn default() -> Self {
        Self(DEFAULT_TAUNTS.iter().map(|s| (*s).to_string()).collect())
    }
}

impl TryFrom<Vec<String>> for FeedbackScript {
    type Error = EmptyScriptError;

    fn try_from(entries: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}
