//! Supported locales and their fixed string tables.
//!
//! The survey ships with exactly two locales. Strings are opaque: callers pick
//! a table with [`Locale::messages`] and never compose translations on their own.
//! A few entries are templates with `{max}` / `{limit}` placeholders, filled by
//! [`Messages::fill`].

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Display language of a survey session.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Locale {
    /// Ukrainian (the default locale of the original audience).
    #[default]
    Ua,
    /// English.
    En,
}

impl Locale {
    /// All locales in the order they are offered to respondents.
    pub const ALL: [Locale; 2] = [Locale::Ua, Locale::En];

    /// Parses the text of a locale selection button (`"UA"` / `"EN"`).
    ///
    /// Surrounding whitespace is ignored; anything else returns `None`.
    pub fn from_button(text: &str) -> Option<Self> {
        text.trim().parse().ok()
    }

    /// Label shown on the locale selection button.
    pub fn button_label(self) -> &'static str {
        match self {
            Locale::Ua => "UA",
            Locale::En => "EN",
        }
    }

    /// Guesses a locale from a chat client's IETF language code.
    ///
    /// Ukrainian clients (`uk`, `uk-UA`) get [`Locale::Ua`]; everyone else,
    /// including clients that report nothing, gets [`Locale::En`].
    pub fn from_language_code(code: Option<&str>) -> Self {
        match code {
            Some(code) if code.to_ascii_lowercase().starts_with("uk") => Locale::Ua,
            _ => Locale::En,
        }
    }

    /// Returns the string table for this locale.
    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::Ua => &UA_MESSAGES,
            Locale::En => &EN_MESSAGES,
        }
    }
}

/// Fixed respondent-facing strings for one locale.
#[derive(Debug)]
pub struct Messages {
    pub scale_intro: &'static str,
    pub scale_hint: &'static str,
    pub question_prefix: &'static str,
    pub use_buttons: &'static str,
    pub answer_out_of_range: &'static str,
    pub nickname_prompt: &'static str,
    pub nickname_invalid: &'static str,
    pub emoji_prompt: &'static str,
    pub emoji_invalid: &'static str,
    pub slogan_prompt: &'static str,
    pub skip_button: &'static str,
    pub anonymous: &'static str,
    pub saved: &'static str,
    pub saved_locally: &'static str,
    pub save_failed: &'static str,
    pub save_limit: &'static str,
    pub session_cleared: &'static str,
    pub open_chart: &'static str,
    pub your_position: &'static str,
    pub result_heading: &'static str,
    pub label_nickname: &'static str,
    pub label_emoji: &'static str,
    pub label_economy: &'static str,
    pub label_social: &'static str,
    pub label_quadrant: &'static str,
    pub label_slogan: &'static str,
    pub axis_x: &'static str,
    pub axis_y: &'static str,
    pub title: &'static str,
}

impl Messages {
    /// Substitutes `{max}` and `{limit}` placeholders in a template entry.
    pub fn fill(template: &str, value: impl std::fmt::Display) -> String {
        let value = value.to_string();
        template.replace("{max}", &value).replace("{limit}", &value)
    }
}

/// Prompt shown before a locale is chosen. Deliberately bilingual.
pub const CHOOSE_LANGUAGE: &str = "Оберіть мову / Choose language";

/// Reply for respondents who have no active session. Deliberately bilingual.
pub const PRESS_START: &str = "Натисніть /start щоб почати. / Tap /start to begin.";

/// Every accepted skip keyword, regardless of the session's locale.
pub const SKIP_KEYWORDS: [&str; 4] = ["Пропустити ➡️", "Skip ➡️", "skip", "пропустити"];

static UA_MESSAGES: Messages = Messages {
    scale_intro: "Шкала 1–5: 1 — свобода, 5 — контроль. Почнемо.",
    scale_hint: "1 — свобода · 5 — контроль держави",
    question_prefix: "Питання",
    use_buttons: "Використовуйте кнопки 1–5, щоб відповісти на питання.",
    answer_out_of_range: "Відповідь має бути числом від 1 до 5.",
    nickname_prompt: "Введіть нік (можна пропустити — буде Анонімний користувач)",
    nickname_invalid: "Нік: літери лат/кир, цифри, пробіл, _ або -, до {max}.",
    emoji_prompt: "Обери emoji (можна ввести своє). Приклади:",
    emoji_invalid: "Будь ласка, надішли один emoji (без тексту). Напр.: 🦊",
    slogan_prompt: "Моє політичне гасло (до {max} символів, можна пропустити):",
    skip_button: "Пропустити ➡️",
    anonymous: "Анонімний користувач",
    saved: "Результат збережено ✅",
    saved_locally: "Результат збережено локально ✅ (сервер недоступний)",
    save_failed: "Не вдалось зберегти зараз. Спробуйте пізніше.",
    save_limit: "Можна зберегти не більше {limit} результатів на цьому пристрої.",
    session_cleared: "Сесію скинуто. Натисни /start, щоб почати спочатку.",
    open_chart: "Відкрити карту",
    your_position: "Ваша позиція",
    result_heading: "Результат:",
    label_nickname: "Нік",
    label_emoji: "Емодзі",
    label_economy: "Економіка (X)",
    label_social: "Соціальна сфера (Y)",
    label_quadrant: "Квадрант",
    label_slogan: "Гасло",
    axis_x: "Економіка: 0 приватна — 100 державна",
    axis_y: "Соціальна сфера: 0 свобода — 100 контроль держави",
    title: "Політичний квадрат",
};

static EN_MESSAGES: Messages = Messages {
    scale_intro: "Scale 1–5: 1 — freedom, 5 — state control. Let's start.",
    scale_hint: "1 — freedom · 5 — state control",
    question_prefix: "Question",
    use_buttons: "Use buttons 1–5 to answer the questions.",
    answer_out_of_range: "The answer must be a number from 1 to 5.",
    nickname_prompt: "Enter a nickname (or skip for Anonymous)",
    nickname_invalid: "Nick: letters latin/cyrillic, digits, space, _ or -, up to {max}.",
    emoji_prompt: "Pick an emoji (or type your own). Examples:",
    emoji_invalid: "Send exactly one emoji (no text). E.g.: 🦊",
    slogan_prompt: "Your political slogan (up to {max} chars, optional):",
    skip_button: "Skip ➡️",
    anonymous: "Anonymous",
    saved: "Saved ✅",
    saved_locally: "Saved locally ✅ (server unavailable)",
    save_failed: "Could not save now. Please try later.",
    save_limit: "You can save up to {limit} results on this device.",
    session_cleared: "Session cleared. Tap /start to begin again.",
    open_chart: "Open chart",
    your_position: "Your position",
    result_heading: "Result:",
    label_nickname: "Nick",
    label_emoji: "Emoji",
    label_economy: "Economy (X)",
    label_social: "Social (Y)",
    label_quadrant: "Quadrant",
    label_slogan: "Slogan",
    axis_x: "Economy: 0 private — 100 state",
    axis_y: "Social: 0 freedom — 100 state control",
    title: "Political Quadrant",
};
