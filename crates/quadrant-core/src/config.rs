//! Survey settings shared by every front end.
//!
//! Settings come from an optional TOML file:
//!
//! ```toml
//! [limits]
//! nickname_max = 20
//! slogan_max = 100
//! save_limit = 3       # 0 = unlimited
//! questions_limit = 0  # 0 = all questions
//! ```
//!
//! Every key is optional; missing keys take the defaults below. Command-line
//! and environment values override what the file says.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::survey::{DEFAULT_NICKNAME_MAX, DEFAULT_SLOGAN_MAX, ProfileLimits};

/// Saves allowed per device by the form front end.
pub const DEFAULT_SAVE_LIMIT: u32 = 3;

/// Questions asked when test mode is on and no explicit limit is set.
pub const TEST_MODE_QUESTIONS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveySettings {
    pub limits: LimitSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitSettings {
    pub nickname_max: usize,
    pub slogan_max: usize,
    pub save_limit: u32,
    pub questions_limit: usize,
}

impl Default for LimitSettings {
    fn default() -> Self {
        Self {
            nickname_max: DEFAULT_NICKNAME_MAX,
            slogan_max: DEFAULT_SLOGAN_MAX,
            save_limit: DEFAULT_SAVE_LIMIT,
            questions_limit: 0,
        }
    }
}

impl SurveySettings {
    /// Parses settings from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn profile_limits(&self) -> ProfileLimits {
        ProfileLimits {
            nickname_max: self.limits.nickname_max,
            slogan_max: self.limits.slogan_max,
        }
    }

    /// The per-device save cap, `None` when unlimited.
    pub fn save_limit(&self) -> Option<u32> {
        (self.limits.save_limit > 0).then_some(self.limits.save_limit)
    }
}

/// Resolves the effective question cap from an explicit value and the test
/// mode flag. An explicit value wins, even `0`.
pub fn resolve_questions_limit(explicit: Option<usize>, test_mode: bool, fallback: usize) -> usize {
    match explicit {
        Some(limit) => limit,
        None if test_mode => TEST_MODE_QUESTIONS,
        None => fallback,
    }
}
