//! Outcomes of survey state machine operations.

use thiserror::Error;

use crate::answer::AnswerSet;
use crate::locale::Locale;
use crate::record::NewResult;
use crate::scoring::Score;

use super::stage::Stage;

/// Respondent input that cannot be accepted. Never a system fault: the
/// caller re-prompts and the session stays where it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("answer must be an integer from 1 to 5, got {value}")]
    AnswerOutOfRange { value: i64 },

    #[error("input must be exactly one emoji")]
    InvalidEmoji,

    #[error("nickname must be 1-{max} letters, digits, spaces, '_' or '-'")]
    InvalidNickname { max: usize },
}

/// What an operation did to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// Input accepted; the session now sits at `stage` (possibly the same
    /// stage with the next question).
    Advanced { stage: Stage },
    /// Input arrived out of stage or for a question that is not current.
    /// Nothing changed.
    Ignored,
    /// Input was invalid for the current stage. Nothing changed.
    Rejected(ValidationError),
    /// The final input was accepted and the session entered `Done`.
    Completed(CompletedSurvey),
}

impl Transition {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Transition::Ignored)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Transition::Completed(_))
    }
}

/// Everything a finished session hands over for persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedSurvey {
    pub locale: Locale,
    pub answers: AnswerSet,
    pub score: Score,
    pub nickname: String,
    pub emoji: String,
    /// Empty when the respondent skipped it.
    pub slogan: String,
}

impl CompletedSurvey {
    /// Builds the record payload submitted to the persistence layer.
    pub fn to_new_result(&self) -> NewResult {
        let slogan = (!self.slogan.is_empty()).then(|| self.slogan.clone());
        NewResult {
            nickname: self.nickname.clone(),
            emoji: self.emoji.clone(),
            x: self.score.x,
            y: self.score.y,
            language: self.locale,
            slogan,
            slogan_style: None,
        }
    }
}
