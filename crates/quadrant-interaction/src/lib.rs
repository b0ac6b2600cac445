//! Clients for the remote services the survey talks to: the InstantDB
//! record store and the Telegram Bot API.

mod http;
pub mod instant_db;
pub mod telegram;

pub use instant_db::{InstantDbConfig, InstantDbStore};
pub use telegram::TelegramClient;
