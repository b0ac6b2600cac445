//! The survey session state machine.

use std::sync::Arc;

use crate::answer::{AnswerSet, AnswerValue};
use crate::locale::Locale;
use crate::question::{Question, QuestionSet};
use crate::scoring::{self, Score};

use super::profile::{self, NicknamePolicy, ProfileLimits};
use super::stage::Stage;
use super::transition::{CompletedSurvey, Transition};

/// Static configuration shared by every session of one front end.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurveyFlow {
    pub questions: QuestionSet,
    pub limits: ProfileLimits,
    pub nickname_policy: NicknamePolicy,
}

impl SurveyFlow {
    /// A flow over the first `questions_limit` questions (`0` = all).
    pub fn new(questions_limit: usize, limits: ProfileLimits, nickname_policy: NicknamePolicy) -> Self {
        Self {
            questions: QuestionSet::limited(questions_limit),
            limits,
            nickname_policy,
        }
    }
}

/// In-progress state for one respondent.
///
/// Every operation returns a [`Transition`] and never panics on unexpected
/// input: out-of-stage calls come back as [`Transition::Ignored`] and leave
/// the session untouched.
#[derive(Debug, Clone)]
pub struct SurveySession {
    flow: Arc<SurveyFlow>,
    locale: Locale,
    stage: Stage,
    step: usize,
    answers: AnswerSet,
    nickname: Option<String>,
    emoji: Option<String>,
    slogan: Option<String>,
}

impl SurveySession {
    /// Creates a session that has not started yet.
    ///
    /// `locale_hint` is used for messages shown before a locale is chosen.
    pub fn new(flow: Arc<SurveyFlow>, locale_hint: Locale) -> Self {
        Self {
            flow,
            locale: locale_hint,
            stage: Stage::NotStarted,
            step: 0,
            answers: AnswerSet::new(),
            nickname: None,
            emoji: None,
            slogan: None,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Zero-based index of the current question.
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn nickname(&self) -> Option<&str> {
        self.nickname.as_deref()
    }

    pub fn emoji(&self) -> Option<&str> {
        self.emoji.as_deref()
    }

    pub fn flow(&self) -> &SurveyFlow {
        &self.flow
    }

    pub fn total_questions(&self) -> usize {
        self.flow.questions.len()
    }

    /// The question awaiting an answer, if the session is in `Questions`.
    pub fn current_question(&self) -> Option<&Question> {
        if self.stage != Stage::Questions {
            return None;
        }
        self.flow.questions.get(self.step)
    }

    /// Score of the answers given so far.
    pub fn preview_score(&self) -> Score {
        scoring::score(&self.answers, self.flow.questions.iter())
    }

    /// `NotStarted → Questions`.
    pub fn start(&mut self, locale: Locale) -> Transition {
        if self.stage != Stage::NotStarted {
            return Transition::Ignored;
        }
        self.locale = locale;
        self.answers.clear();
        self.step = 0;
        self.stage = if self.flow.questions.is_empty() {
            Stage::Nickname
        } else {
            Stage::Questions
        };
        Transition::Advanced { stage: self.stage }
    }

    /// Answers the question identified by `question_key`.
    ///
    /// Only the current question can be answered; answers for questions
    /// already passed (e.g. a repeated button press) are ignored.
    pub fn answer(&mut self, question_key: &str, value: i64) -> Transition {
        let Some(current) = self.current_question() else {
            return Transition::Ignored;
        };
        if current.key != question_key {
            return Transition::Ignored;
        }
        let key = current.key;

        let value = match AnswerValue::new(value) {
            Ok(value) => value,
            Err(err) => return Transition::Rejected(err),
        };

        self.answers.insert(key, value);
        self.step += 1;
        if self.step >= self.flow.questions.len() {
            self.stage = Stage::Nickname;
        }
        Transition::Advanced { stage: self.stage }
    }

    /// Answers whichever question is current.
    pub fn answer_current(&mut self, value: i64) -> Transition {
        match self.current_question() {
            Some(question) => {
                let key = question.key;
                self.answer(key, value)
            }
            None => Transition::Ignored,
        }
    }

    /// `Nickname → Emoji`.
    pub fn set_nickname(&mut self, input: &str) -> Transition {
        if self.stage != Stage::Nickname {
            return Transition::Ignored;
        }
        match profile::normalize_nickname(
            input,
            self.locale,
            &self.flow.limits,
            self.flow.nickname_policy,
        ) {
            Ok(nickname) => {
                self.nickname = Some(nickname);
                self.stage = Stage::Emoji;
                Transition::Advanced { stage: self.stage }
            }
            Err(err) => Transition::Rejected(err),
        }
    }

    /// `Emoji → Slogan`.
    pub fn set_emoji(&mut self, input: &str) -> Transition {
        if self.stage != Stage::Emoji {
            return Transition::Ignored;
        }
        match profile::normalize_emoji(input) {
            Ok(emoji) => {
                self.emoji = Some(emoji);
                self.stage = Stage::Slogan;
                Transition::Advanced { stage: self.stage }
            }
            Err(err) => Transition::Rejected(err),
        }
    }

    /// `Slogan → Done`; scores the answers and hands the survey over.
    pub fn set_slogan(&mut self, input: &str) -> Transition {
        if self.stage != Stage::Slogan {
            return Transition::Ignored;
        }
        let slogan = profile::normalize_slogan(input, &self.flow.limits);
        self.slogan = Some(slogan.clone());
        self.stage = Stage::Done;

        let anonymous = self.locale.messages().anonymous;
        Transition::Completed(CompletedSurvey {
            locale: self.locale,
            answers: self.answers.clone(),
            score: self.preview_score(),
            nickname: self.nickname.clone().unwrap_or_else(|| anonymous.to_string()),
            emoji: self.emoji.clone().unwrap_or_default(),
            slogan,
        })
    }

    /// Discards all progress and returns to `NotStarted`. Valid from any stage.
    pub fn reset(&mut self) -> Transition {
        self.stage = Stage::NotStarted;
        self.step = 0;
        self.answers.clear();
        self.nickname = None;
        self.emoji = None;
        self.slogan = None;
        Transition::Advanced { stage: self.stage }
    }
}
