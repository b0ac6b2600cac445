//! Survey stage enumeration.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

/// The current step of a respondent's flow.
///
/// Stages only move forward (`NotStarted → Questions → Nickname → Emoji →
/// Slogan → Done`); the single way back is a full reset to `NotStarted`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Stage {
    NotStarted,
    Questions,
    Nickname,
    Emoji,
    Slogan,
    Done,
}

impl Stage {
    /// Whether the respondent still has to provide input.
    pub fn awaits_input(self) -> bool {
        !matches!(self, Stage::Done)
    }
}
