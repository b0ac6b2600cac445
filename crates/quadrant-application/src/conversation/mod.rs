//! Conversational survey adapter.
//!
//! Translates chat events into session transitions and renders the replies.
//! Each event is handled as one linear sequence of awaited steps; the only
//! shared state is the session registry.

mod event;
pub mod render;
mod reply;

pub use event::{ChatEvent, Participant};
pub use reply::{InlineButton, Keyboard, Reply};

use std::sync::Arc;

use quadrant_core::locale::Locale;
use quadrant_core::survey::{
    Applied, CompletedSurvey, SessionRegistry, Stage, SurveySession, Transition,
};

use crate::results::ResultService;

pub const DEFAULT_CHART_URL: &str = "https://political-quadrant.vercel.app/#chart";

/// Runs surveys for many chat participants at once.
pub struct SurveyConversation {
    registry: Arc<SessionRegistry>,
    results: Arc<ResultService>,
    chart_url: String,
}

impl SurveyConversation {
    /// # Arguments
    ///
    /// * `registry` - Active sessions, keyed by participant
    /// * `results` - Where completed surveys are saved
    pub fn new(registry: Arc<SessionRegistry>, results: Arc<ResultService>) -> Self {
        Self {
            registry,
            results,
            chart_url: DEFAULT_CHART_URL.to_string(),
        }
    }

    pub fn with_chart_url(mut self, url: impl Into<String>) -> Self {
        self.chart_url = url.into();
        self
    }

    pub fn registry(&self) -> &Arc<SessionRegistry> {
        &self.registry
    }

    /// Handles one event and returns the replies to send, in order.
    pub async fn handle(&self, participant: &Participant, event: ChatEvent) -> Vec<Reply> {
        match event {
            ChatEvent::Start => self.start(participant).await,
            ChatEvent::Cancel => self.cancel(participant).await,
            ChatEvent::SelectLocale(locale) => self.select_locale(participant, locale).await,
            ChatEvent::Answer {
                question_key,
                value,
            } => self.answer(participant, &question_key, value).await,
            ChatEvent::Text(text) => self.text(participant, text).await,
        }
    }

    async fn start(&self, participant: &Participant) -> Vec<Reply> {
        match self
            .registry
            .begin(participant.id, participant.locale_hint())
            .await
        {
            Ok(_) => {
                tracing::debug!(participant = participant.id, "Survey session started");
                vec![render::choose_language()]
            }
            Err(e) => {
                tracing::warn!(participant = participant.id, error = %e, "Cannot start session");
                Vec::new()
            }
        }
    }

    async fn cancel(&self, participant: &Participant) -> Vec<Reply> {
        let locale = match self.registry.remove(participant.id).await {
            Some(session) => session.locale(),
            None => participant.locale_hint(),
        };
        tracing::debug!(participant = participant.id, "Survey session cleared");
        vec![render::session_cleared(locale)]
    }

    async fn answer(&self, participant: &Participant, question_key: &str, value: i64) -> Vec<Reply> {
        let mut before = Stage::NotStarted;
        let applied = self
            .registry
            .apply(participant.id, |session| {
                before = session.stage();
                session.answer(question_key, value)
            })
            .await;

        let Some(Applied {
            transition,
            session,
        }) = applied
        else {
            return vec![render::press_start()];
        };

        match transition {
            // Stale button press for a question already answered.
            Transition::Ignored if before == Stage::Questions => Vec::new(),
            transition => self.respond(before, transition, session).await,
        }
    }

    /// A locale button starts the survey; pressed later it only re-prompts.
    async fn select_locale(&self, participant: &Participant, locale: Locale) -> Vec<Reply> {
        let mut before = Stage::NotStarted;
        let applied = self
            .registry
            .apply(participant.id, |session| {
                before = session.stage();
                match before {
                    Stage::NotStarted => session.start(locale),
                    _ => Transition::Ignored,
                }
            })
            .await;

        match applied {
            Some(Applied {
                transition,
                session,
            }) => self.respond(before, transition, session).await,
            None => vec![render::press_start()],
        }
    }

    async fn text(&self, participant: &Participant, text: String) -> Vec<Reply> {
        let mut before = Stage::NotStarted;
        let applied = self
            .registry
            .apply(participant.id, |session| {
                before = session.stage();
                text_transition(session, &text)
            })
            .await;

        let Some(Applied {
            transition,
            session,
        }) = applied
        else {
            return vec![render::press_start()];
        };

        match transition {
            Transition::Ignored if before == Stage::Questions => {
                vec![render::use_buttons(session.locale())]
            }
            transition => self.respond(before, transition, session).await,
        }
    }

    async fn respond(&self, before: Stage, transition: Transition, session: SurveySession) -> Vec<Reply> {
        match transition {
            Transition::Advanced { .. } if before == Stage::NotStarted => vec![
                render::scale_intro(session.locale()),
                render::stage_prompt(&session),
            ],
            Transition::Advanced { .. } | Transition::Ignored => {
                vec![render::stage_prompt(&session)]
            }
            Transition::Rejected(err) => render::validation_replies(&err, &session),
            Transition::Completed(done) => self.complete(done).await,
        }
    }

    /// Saves a finished survey. The session is already gone from the registry
    /// at this point, so nothing here can race with further input.
    async fn complete(&self, done: CompletedSurvey) -> Vec<Reply> {
        tracing::info!(
            locale = %done.locale,
            x = done.score.x,
            y = done.score.y,
            quadrant = %done.score.quadrant,
            "Survey completed"
        );

        let outcome = self.results.save(done.to_new_result()).await;
        if let Err(e) = &outcome {
            tracing::warn!(error = %e, "Could not save survey result");
        }

        vec![
            render::save_outcome(&outcome, done.locale, self.results.is_remote_enabled()),
            render::summary(&done, &self.chart_url),
        ]
    }
}

/// Interprets free text according to the stage the session is in.
///
/// Shared by every text-driven front end: a locale label starts the survey,
/// digits answer the current question, anything else fills the profile
/// field the session is waiting for.
pub fn text_transition(session: &mut SurveySession, text: &str) -> Transition {
    match session.stage() {
        Stage::NotStarted => match Locale::from_button(text) {
            Some(locale) => session.start(locale),
            None => Transition::Ignored,
        },
        Stage::Questions => match text.trim().parse::<i64>() {
            Ok(value) => session.answer_current(value),
            Err(_) => Transition::Ignored,
        },
        Stage::Nickname => session.set_nickname(text),
        Stage::Emoji => session.set_emoji(text),
        Stage::Slogan => session.set_slogan(text),
        Stage::Done => Transition::Ignored,
    }
}
