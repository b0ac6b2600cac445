//! Telegram Bot API transport.

mod client;
pub mod types;

pub use client::TelegramClient;
pub use types::{
    CallbackQuery, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, Message,
    ReplyKeyboardMarkup, ReplyKeyboardRemove, ReplyMarkup, Update, User,
};
