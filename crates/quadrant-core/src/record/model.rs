//! Result record domain model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use uuid::Uuid;

use crate::locale::Locale;
use crate::scoring::Quadrant;

const LOCAL_PREFIX: &str = "local-";

/// Identifier of a persisted result.
///
/// Remote ids are plain UUID v4 strings chosen by this client; records that
/// only ever reached the local cache carry a `local-` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new_remote() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn new_local() -> Self {
        Self(format!("{LOCAL_PREFIX}{}", Uuid::new_v4()))
    }

    pub fn is_local(&self) -> bool {
        self.0.starts_with(LOCAL_PREFIX)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SloganWeight {
    #[default]
    Normal,
    Bold,
}

/// Presentation of a slogan on the chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SloganStyle {
    /// `#rrggbb`
    pub color: Option<String>,
    pub weight: SloganWeight,
}

impl SloganStyle {
    /// Accepts `#rgb` or `#rrggbb` hex colors, normalized to lowercase.
    pub fn parse_color(input: &str) -> Option<String> {
        let hex = input.trim().strip_prefix('#')?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            6 => Some(format!("#{}", hex.to_ascii_lowercase())),
            3 => {
                let expanded: String = hex
                    .chars()
                    .flat_map(|c| [c, c])
                    .collect::<String>()
                    .to_ascii_lowercase();
                Some(format!("#{expanded}"))
            }
            _ => None,
        }
    }
}

/// A completed survey ready to be persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewResult {
    pub nickname: String,
    pub emoji: String,
    pub x: f64,
    pub y: f64,
    pub language: Locale,
    pub slogan: Option<String>,
    pub slogan_style: Option<SloganStyle>,
}

impl NewResult {
    /// Materializes the record under `id`, stamped with the current time.
    pub fn into_record(self, id: RecordId) -> ResultRecord {
        self.into_record_at(id, Utc::now())
    }

    pub fn into_record_at(self, id: RecordId, created_at: DateTime<Utc>) -> ResultRecord {
        let (slogan_color, slogan_weight) = match self.slogan_style {
            Some(style) => (style.color, Some(style.weight)),
            None => (None, None),
        };
        ResultRecord {
            id,
            nickname: self.nickname,
            emoji: self.emoji,
            x: self.x,
            y: self.y,
            language: self.language,
            created_at,
            slogan: self.slogan,
            slogan_color,
            slogan_weight,
        }
    }
}

/// An immutable persisted survey outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    pub id: RecordId,
    pub nickname: String,
    pub emoji: String,
    pub x: f64,
    pub y: f64,
    pub language: Locale,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slogan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slogan_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slogan_weight: Option<SloganWeight>,
}

/// Default chart jitter, in score units per axis.
pub const DEFAULT_JITTER_SPREAD: f64 = 2.2;

impl ResultRecord {
    pub fn quadrant(&self) -> Quadrant {
        Quadrant::classify(self.x, self.y)
    }

    /// Same record under a different id.
    pub fn with_id(self, id: RecordId) -> Self {
        Self { id, ..self }
    }

    /// The position nudged by a small offset derived from the id, so records
    /// with identical scores do not overlap on a chart. The offset is stable
    /// for a given id and stays within `spread` on each axis; the result is
    /// clamped to `0..=100`.
    pub fn jittered_point(&self, spread: f64) -> (f64, f64) {
        let seed = self
            .id
            .as_str()
            .chars()
            .fold(0u32, |acc, c| acc.wrapping_add(u32::from(c)));
        let unit = |n: u32| {
            let v = (f64::from(seed) * f64::from(n + 1) * 999.0).sin() * 10_000.0;
            v - v.floor()
        };
        let clamp = |v: f64| v.clamp(0.0, 100.0);
        (
            clamp(self.x + (unit(1) - 0.5) * spread * 2.0),
            clamp(self.y + (unit(2) - 0.5) * spread * 2.0),
        )
    }
}
