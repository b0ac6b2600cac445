//! Maps Telegram updates onto the survey conversation and sends the replies.

use std::sync::Arc;

use quadrant_application::conversation::{
    ChatEvent, InlineButton, Keyboard, Participant, Reply, SurveyConversation,
};
use quadrant_interaction::telegram::{
    InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, ReplyKeyboardMarkup,
    ReplyKeyboardRemove, ReplyMarkup, TelegramClient, Update,
};
use tracing::{debug, warn};

/// An update reduced to what the conversation needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inbound {
    pub chat_id: i64,
    pub participant: Participant,
    pub event: ChatEvent,
}

impl Inbound {
    /// Classifies an update.
    ///
    /// # Returns
    ///
    /// `None` for updates the survey does not react to: messages without
    /// text, messages from other bots, and unknown callback data.
    pub fn from_update(update: &Update) -> Option<Self> {
        let sender = update.sender()?;
        if sender.is_bot {
            return None;
        }
        let chat_id = update.chat_id()?;

        let event = if let Some(query) = &update.callback_query {
            ChatEvent::from_callback_data(query.data.as_deref()?)?
        } else {
            ChatEvent::from_text(update.message.as_ref()?.text.as_deref()?)
        };

        Some(Self {
            chat_id,
            participant: Participant::new(sender.id, sender.language_code.clone()),
            event,
        })
    }
}

/// Converts a transport-neutral keyboard into Bot API markup.
pub fn reply_markup(keyboard: &Keyboard) -> Option<ReplyMarkup> {
    match keyboard {
        Keyboard::Unchanged => None,
        Keyboard::Remove => Some(ReplyMarkup::Remove(ReplyKeyboardRemove::default())),
        Keyboard::Choices(rows) => Some(ReplyMarkup::Keyboard(ReplyKeyboardMarkup {
            keyboard: rows
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|label| KeyboardButton {
                            text: label.clone(),
                        })
                        .collect()
                })
                .collect(),
            one_time_keyboard: true,
            resize_keyboard: true,
        })),
        Keyboard::Inline(rows) => Some(ReplyMarkup::Inline(InlineKeyboardMarkup {
            inline_keyboard: rows
                .iter()
                .map(|row| row.iter().map(inline_button).collect())
                .collect(),
        })),
    }
}

fn inline_button(button: &InlineButton) -> InlineKeyboardButton {
    match button {
        InlineButton::Callback { label, data } => InlineKeyboardButton::callback(label, data),
        InlineButton::Link { label, url } => InlineKeyboardButton::url(label, url),
    }
}

/// Handles updates from either transport.
pub struct Dispatcher {
    client: TelegramClient,
    conversation: Arc<SurveyConversation>,
}

impl Dispatcher {
    pub fn new(client: TelegramClient, conversation: Arc<SurveyConversation>) -> Self {
        Self {
            client,
            conversation,
        }
    }

    pub fn conversation(&self) -> &Arc<SurveyConversation> {
        &self.conversation
    }

    /// Runs one update to completion.
    ///
    /// Callback queries are acknowledged first, whether or not their data is
    /// understood, so the client stops showing a spinner. Transport failures
    /// are logged and never propagate.
    pub async fn dispatch(&self, update: Update) {
        if let Some(query) = &update.callback_query {
            if let Err(e) = self.client.answer_callback_query(&query.id).await {
                warn!(update_id = update.update_id, "Failed to answer callback query: {}", e);
            }
        }

        let Some(inbound) = Inbound::from_update(&update) else {
            debug!(update_id = update.update_id, "Ignoring update");
            return;
        };

        let replies = self
            .conversation
            .handle(&inbound.participant, inbound.event)
            .await;
        self.send_all(inbound.chat_id, &replies).await;
    }

    async fn send_all(&self, chat_id: i64, replies: &[Reply]) {
        for reply in replies {
            let markup = reply_markup(&reply.keyboard);
            if let Err(e) = self
                .client
                .send_message(chat_id, &reply.text, markup.as_ref())
                .await
            {
                // Later replies would arrive out of context.
                warn!(chat_id, "Failed to send reply: {}", e);
                break;
            }
        }
    }
}
