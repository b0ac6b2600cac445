//! Reply rendering for each survey stage.

use quadrant_core::error::{QuadrantError, Result};
use quadrant_core::locale::{CHOOSE_LANGUAGE, Locale, Messages, PRESS_START};
use quadrant_core::question::EMOJI_SUGGESTIONS;
use quadrant_core::survey::{CompletedSurvey, Stage, SurveySession, ValidationError};

use super::event::ChatEvent;
use super::reply::{InlineButton, Keyboard, Reply};
use crate::results::{SaveDestination, SaveReceipt};

pub fn choose_language() -> Reply {
    Reply::text(CHOOSE_LANGUAGE).with_keyboard(Keyboard::Choices(vec![
        Locale::ALL
            .iter()
            .map(|locale| locale.button_label().to_string())
            .collect(),
    ]))
}

pub fn press_start() -> Reply {
    Reply::text(PRESS_START)
}

pub fn session_cleared(locale: Locale) -> Reply {
    Reply::text(locale.messages().session_cleared).with_keyboard(Keyboard::Remove)
}

pub fn scale_intro(locale: Locale) -> Reply {
    Reply::text(locale.messages().scale_intro).with_keyboard(Keyboard::Remove)
}

pub fn use_buttons(locale: Locale) -> Reply {
    Reply::text(locale.messages().use_buttons)
}

fn skip_keyboard(locale: Locale) -> Keyboard {
    Keyboard::Choices(vec![vec![locale.messages().skip_button.to_string()]])
}

/// The prompt for whatever the session is waiting for.
pub fn stage_prompt(session: &SurveySession) -> Reply {
    let locale = session.locale();
    let messages = locale.messages();
    let limits = &session.flow().limits;

    match session.stage() {
        Stage::NotStarted => choose_language(),
        Stage::Questions => question_prompt(session).unwrap_or_else(press_start),
        Stage::Nickname => {
            Reply::text(messages.nickname_prompt).with_keyboard(skip_keyboard(locale))
        }
        Stage::Emoji => Reply::text(format!(
            "{} {}",
            messages.emoji_prompt,
            EMOJI_SUGGESTIONS.join(" ")
        ))
        .with_keyboard(Keyboard::Remove),
        Stage::Slogan => Reply::text(Messages::fill(messages.slogan_prompt, limits.slogan_max))
            .with_keyboard(skip_keyboard(locale)),
        Stage::Done => press_start(),
    }
}

/// `Question n/N` with the question text and inline `1`..`5` buttons.
pub fn question_prompt(session: &SurveySession) -> Option<Reply> {
    let question = session.current_question()?;
    let locale = session.locale();
    let text = format!(
        "{} {}/{}\n{}",
        locale.messages().question_prefix,
        session.step() + 1,
        session.total_questions(),
        question.text(locale)
    );
    let buttons = (1..=5u8)
        .map(|value| InlineButton::Callback {
            label: value.to_string(),
            data: ChatEvent::answer_callback_data(question.key, value),
        })
        .collect();

    Some(Reply::text(text).with_keyboard(Keyboard::Inline(vec![buttons])))
}

/// Explains why the input was refused and repeats the prompt where the
/// prompt carries a keyboard.
pub fn validation_replies(err: &ValidationError, session: &SurveySession) -> Vec<Reply> {
    let locale = session.locale();
    let messages = locale.messages();
    match err {
        ValidationError::AnswerOutOfRange { .. } => {
            let mut replies = vec![Reply::text(messages.answer_out_of_range)];
            replies.extend(question_prompt(session));
            replies
        }
        ValidationError::InvalidNickname { max } => {
            vec![Reply::text(Messages::fill(messages.nickname_invalid, max))
                .with_keyboard(skip_keyboard(locale))]
        }
        ValidationError::InvalidEmoji => vec![Reply::text(messages.emoji_invalid)],
    }
}

/// Tells the participant how saving went.
pub fn save_outcome(outcome: &Result<SaveReceipt>, locale: Locale, remote_enabled: bool) -> Reply {
    let messages = locale.messages();
    match outcome {
        Ok(receipt) => match receipt.destination {
            SaveDestination::Remote => Reply::text(messages.saved),
            SaveDestination::LocalOnly if remote_enabled => Reply::text(messages.saved_locally),
            SaveDestination::LocalOnly => Reply::text(messages.saved),
        },
        Err(QuadrantError::SaveLimitReached { limit }) => {
            Reply::text(Messages::fill(messages.save_limit, limit))
        }
        Err(_) => Reply::text(messages.save_failed),
    }
}

/// Result card with a link to the shared chart.
pub fn summary(done: &CompletedSurvey, chart_url: &str) -> Reply {
    let locale = done.locale;
    let messages = locale.messages();
    let quadrant = done.score.quadrant;

    let mut lines = vec![
        messages.result_heading.to_string(),
        format!("{}: {}", messages.label_nickname, done.nickname),
        format!("{}: {}", messages.label_emoji, done.emoji),
        format!("{}: {:.1}", messages.label_economy, done.score.x),
        format!("{}: {:.1}", messages.label_social, done.score.y),
        format!("{}: {}", messages.label_quadrant, quadrant.label(locale)),
    ];
    if !done.slogan.is_empty() {
        lines.push(format!("{}: {}", messages.label_slogan, done.slogan));
    }
    lines.push(quadrant.description(locale).to_string());

    Reply::text(lines.join("\n")).with_keyboard(Keyboard::Inline(vec![vec![InlineButton::Link {
        label: messages.open_chart.to_string(),
        url: chart_url.to_string(),
    }]]))
}
