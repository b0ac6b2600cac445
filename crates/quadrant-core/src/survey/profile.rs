//! Profile field rules: nickname, emoji and slogan normalization.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::locale::{Locale, SKIP_KEYWORDS};

use super::transition::ValidationError;

pub const DEFAULT_NICKNAME_MAX: usize = 20;
pub const DEFAULT_SLOGAN_MAX: usize = 100;

/// A single pictographic scalar, optionally followed by a variation selector
/// or skin tone modifiers.
static SINGLE_EMOJI: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\p{Extended_Pictographic}(?:\x{FE0F}|[\x{1F3FB}-\x{1F3FF}])*$")
        .expect("emoji pattern is valid")
});

/// Latin and Cyrillic (incl. Ukrainian) letters, digits, space, `_` and `-`.
static NICKNAME_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-zА-Яа-яІіЇїЄєҐґ0-9 _-]+$").expect("nickname pattern is valid")
});

/// Character caps for free-text profile fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileLimits {
    pub nickname_max: usize,
    pub slogan_max: usize,
}

impl Default for ProfileLimits {
    fn default() -> Self {
        Self {
            nickname_max: DEFAULT_NICKNAME_MAX,
            slogan_max: DEFAULT_SLOGAN_MAX,
        }
    }
}

/// How over-long or unusual nicknames are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NicknamePolicy {
    /// Cut to the limit and accept anything (chat front end).
    #[default]
    Truncate,
    /// Reject nicknames outside the allowed alphabet or longer than the
    /// limit (form front end).
    Strict,
}

/// Whether the input is one of the skip keywords.
pub fn is_skip(input: &str) -> bool {
    let lowered = input.trim().to_lowercase();
    SKIP_KEYWORDS
        .iter()
        .any(|keyword| keyword.to_lowercase() == lowered)
}

/// Truncates to at most `max` characters (not bytes).
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Resolves the nickname a respondent typed.
///
/// Empty input and skip keywords map to the locale's anonymous name.
pub fn normalize_nickname(
    input: &str,
    locale: Locale,
    limits: &ProfileLimits,
    policy: NicknamePolicy,
) -> Result<String, ValidationError> {
    let raw = input.trim();
    if raw.is_empty() || is_skip(raw) {
        return Ok(locale.messages().anonymous.to_string());
    }

    match policy {
        NicknamePolicy::Truncate => Ok(truncate_chars(raw, limits.nickname_max)),
        NicknamePolicy::Strict => {
            if raw.chars().count() > limits.nickname_max || !NICKNAME_CHARS.is_match(raw) {
                Err(ValidationError::InvalidNickname {
                    max: limits.nickname_max,
                })
            } else {
                Ok(raw.to_string())
            }
        }
    }
}

/// Extracts exactly one emoji glyph from the input.
pub fn normalize_emoji(input: &str) -> Result<String, ValidationError> {
    let raw = input.trim();
    if SINGLE_EMOJI.is_match(raw) {
        Ok(raw.to_string())
    } else {
        Err(ValidationError::InvalidEmoji)
    }
}

/// Resolves the slogan a respondent typed; skipping yields an empty slogan.
pub fn normalize_slogan(input: &str, limits: &ProfileLimits) -> String {
    let raw = input.trim();
    if is_skip(raw) {
        return String::new();
    }
    truncate_chars(raw, limits.slogan_max)
}
