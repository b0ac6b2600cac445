//! Inbound chat events and their textual encodings.

use quadrant_core::locale::Locale;
use quadrant_core::survey::ParticipantId;

const ANSWER_PREFIX: &str = "answer";

/// The sender of an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub id: ParticipantId,
    /// IETF language tag reported by the chat client.
    pub language_code: Option<String>,
}

impl Participant {
    pub fn new(id: ParticipantId, language_code: Option<String>) -> Self {
        Self { id, language_code }
    }

    /// Locale to use before the participant picks one.
    pub fn locale_hint(&self) -> Locale {
        Locale::from_language_code(self.language_code.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    /// `/start`
    Start,
    /// `/reset`, `/stop` or `/exit`
    Cancel,
    /// A `UA` / `EN` button.
    SelectLocale(Locale),
    /// An inline answer button.
    Answer { question_key: String, value: i64 },
    /// Any other text.
    Text(String),
}

impl ChatEvent {
    /// Classifies a text message.
    ///
    /// Commands may carry a `@botname` suffix and trailing arguments.
    /// Unknown commands are treated as plain text.
    pub fn from_text(text: &str) -> Self {
        let trimmed = text.trim();
        if let Some(command) = trimmed.strip_prefix('/') {
            let name = command
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .split('@')
                .next()
                .unwrap_or_default();
            match name.to_ascii_lowercase().as_str() {
                "start" => return ChatEvent::Start,
                "reset" | "stop" | "exit" => return ChatEvent::Cancel,
                _ => {}
            }
        }

        match Locale::from_button(trimmed) {
            Some(locale) => ChatEvent::SelectLocale(locale),
            None => ChatEvent::Text(text.to_string()),
        }
    }

    /// Decodes inline button data of the form `answer:<key>:<value>`.
    pub fn from_callback_data(data: &str) -> Option<Self> {
        let mut parts = data.splitn(3, ':');
        if parts.next()? != ANSWER_PREFIX {
            return None;
        }
        let question_key = parts.next().filter(|key| !key.is_empty())?;
        let value = parts.next()?.parse().ok()?;
        Some(ChatEvent::Answer {
            question_key: question_key.to_string(),
            value,
        })
    }

    /// Encodes inline button data for an answer.
    pub fn answer_callback_data(question_key: &str, value: u8) -> String {
        format!("{ANSWER_PREFIX}:{question_key}:{value}")
    }
}
