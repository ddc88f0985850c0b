//! Core domain types for Swoon.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

mod celebration;
mod evasion;
mod geometry;
mod script;
mod text;
mod ui;

pub use celebration::Celebration;
pub use evasion::{EvasionState, SampleLimits};
pub use geometry::{Point, Size};
pub use script::{EmptyScriptError, FeedbackScript};
pub use text::ProposalText;
pub use ui::UiOptions;
