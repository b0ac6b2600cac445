//! Telegram Bot API objects, limited to the fields the survey bot reads or
//! sends.

use serde::{Deserialize, Serialize};

/// Envelope around every Bot API response.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub error_code: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(default)]
    pub message: Option<Message>,
    #[serde(default)]
    pub callback_query: Option<CallbackQuery>,
}

impl Update {
    /// The user who caused the update.
    pub fn sender(&self) -> Option<&User> {
        self.message
            .as_ref()
            .and_then(|m| m.from.as_ref())
            .or_else(|| self.callback_query.as_ref().map(|q| &q.from))
    }

    /// The chat replies should go to.
    pub fn chat_id(&self) -> Option<i64> {
        self.message
            .as_ref()
            .map(|m| m.chat.id)
            .or_else(|| {
                self.callback_query
                    .as_ref()
                    .and_then(|q| q.message.as_ref())
                    .map(|m| m.chat.id)
            })
            .or_else(|| self.sender().map(|u| u.id))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Message {
    pub message_id: i64,
    #[serde(default)]
    pub from: Option<User>,
    pub chat: Chat,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub is_bot: bool,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub language_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub from: User,
    #[serde(default)]
    pub message: Option<Message>,
    #[serde(default)]
    pub data: Option<String>,
}

/// Keyboard attached to an outgoing message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReplyMarkup {
    Inline(InlineKeyboardMarkup),
    Keyboard(ReplyKeyboardMarkup),
    Remove(ReplyKeyboardRemove),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl InlineKeyboardButton {
    pub fn callback(text: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            callback_data: Some(data.into()),
            url: None,
        }
    }

    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            callback_data: None,
            url: Some(url.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplyKeyboardMarkup {
    pub keyboard: Vec<Vec<KeyboardButton>>,
    pub one_time_keyboard: bool,
    pub resize_keyboard: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyboardButton {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplyKeyboardRemove {
    pub remove_keyboard: bool,
}

impl Default for ReplyKeyboardRemove {
    fn default() -> Self {
        Self {
            remove_keyboard: true,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct SendMessage<'a> {
    pub chat_id: i64,
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<&'a ReplyMarkup>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_text_update() {
        let update: Update = serde_json::from_value(json!({
            "update_id": 10,
            "message": {
                "message_id": 1,
                "from": {"id": 42, "is_bot": false, "first_name": "Ann", "language_code": "uk"},
                "chat": {"id": 42, "type": "private"},
                "date": 1700000000,
                "text": "/start"
            }
        }))
        .unwrap();

        assert_eq!(update.sender().map(|u| u.id), Some(42));
        assert_eq!(update.chat_id(), Some(42));
        assert_eq!(
            update.message.and_then(|m| m.text).as_deref(),
            Some("/start")
        );
    }

    #[test]
    fn test_parse_callback_update() {
        let update: Update = serde_json::from_value(json!({
            "update_id": 11,
            "callback_query": {
                "id": "cb-1",
                "from": {"id": 7, "first_name": "Bo"},
                "message": {"message_id": 3, "chat": {"id": -100}},
                "chat_instance": "x",
                "data": "answer:s1:4"
            }
        }))
        .unwrap();

        assert_eq!(update.sender().map(|u| u.id), Some(7));
        assert_eq!(update.chat_id(), Some(-100));
        assert_eq!(
            update.callback_query.and_then(|q| q.data).as_deref(),
            Some("answer:s1:4")
        );
    }

    #[test]
    fn test_unknown_update_kinds_parse() {
        let update: Update =
            serde_json::from_value(json!({"update_id": 12, "edited_message": {}})).unwrap();
        assert!(update.sender().is_none());
        assert!(update.chat_id().is_none());
    }

    #[test]
    fn test_markup_serialization() {
        let inline = ReplyMarkup::Inline(InlineKeyboardMarkup {
            inline_keyboard: vec![vec![
                InlineKeyboardButton::callback("1", "answer:s1:1"),
                InlineKeyboardButton::url("Open chart", "https://example.com/#chart"),
            ]],
        });
        assert_eq!(
            serde_json::to_value(&inline).unwrap(),
            json!({"inline_keyboard": [[
                {"text": "1", "callback_data": "answer:s1:1"},
                {"text": "Open chart", "url": "https://example.com/#chart"}
            ]]})
        );

        let remove = ReplyMarkup::Remove(ReplyKeyboardRemove::default());
        assert_eq!(
            serde_json::to_value(&remove).unwrap(),
            json!({"remove_keyboard": true})
        );
    }
}
