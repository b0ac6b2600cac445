//! Question reference data types.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use crate::locale::Locale;

/// One of the two independent scoring dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Axis {
    /// Vertical axis (y): personal and cultural freedom vs. state control.
    Social,
    /// Horizontal axis (x): private economy vs. state economy.
    Economic,
}

/// An immutable survey question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    /// Stable short key (`s1`..`s15`, `e1`..`e15`).
    pub key: &'static str,
    pub axis: Axis,
    text_ua: &'static str,
    text_en: &'static str,
}

impl Question {
    pub const fn new(
        key: &'static str,
        axis: Axis,
        text_ua: &'static str,
        text_en: &'static str,
    ) -> Self {
        Self {
            key,
            axis,
            text_ua,
            text_en,
        }
    }

    /// Display text in the given locale.
    pub fn text(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Ua => self.text_ua,
            Locale::En => self.text_en,
        }
    }
}

/// An ordered list of questions presented in one survey flow.
///
/// Cheap to share: sessions hold it behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    /// Builds a set from an explicit ordered list.
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// The complete built-in questionnaire (social questions first).
    pub fn full() -> Self {
        Self::new(super::catalog::QUESTIONS.to_vec())
    }

    /// The first `limit` questions of the full questionnaire.
    ///
    /// `0` means no limit. A limit larger than the questionnaire is clamped.
    pub fn limited(limit: usize) -> Self {
        let full = Self::full();
        if limit == 0 || limit >= full.len() {
            return full;
        }
        Self::new(full.questions.into_iter().take(limit).collect())
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Question at a zero-based step.
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Questions belonging to one axis, in presentation order.
    pub fn on_axis(&self, axis: Axis) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(move |q| q.axis == axis)
    }

    /// Looks a question up by key.
    pub fn find(&self, key: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.key == key)
    }
}

impl Default for QuestionSet {
    fn default() -> Self {
        Self::full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_set_is_thirty_questions_social_first() {
        let set = QuestionSet::full();
        assert_eq!(set.len(), 30);
        assert_eq!(set.on_axis(Axis::Social).count(), 15);
        assert_eq!(set.on_axis(Axis::Economic).count(), 15);
        assert_eq!(set.get(0).unwrap().key, "s1");
        assert_eq!(set.get(15).unwrap().key, "e1");
    }

    #[test]
    fn test_keys_are_unique() {
        let set = QuestionSet::full();
        let mut keys: Vec<_> = set.iter().map(|q| q.key).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 30);
    }

    #[test]
    fn test_limited_takes_prefix() {
        let set = QuestionSet::limited(3);
        let keys: Vec<_> = set.iter().map(|q| q.key).collect();
        assert_eq!(keys, vec!["s1", "s2", "s3"]);

        assert_eq!(QuestionSet::limited(0).len(), 30);
        assert_eq!(QuestionSet::limited(500).len(), 30);
    }

    #[test]
    fn test_text_per_locale() {
        let set = QuestionSet::full();
        let q = set.find("e1").unwrap();
        assert_eq!(q.text(Locale::En), "Should the state set a minimum wage?");
        assert!(q.text(Locale::Ua).starts_with("Чи повинна держава"));
    }
}
