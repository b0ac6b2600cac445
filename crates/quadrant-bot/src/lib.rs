//! Telegram front end for the Political Quadrant survey.
//!
//! Runs over long polling by default, or as a webhook server when a public
//! URL is configured. Both transports feed the same [`Dispatcher`].

pub mod config;
pub mod dispatch;
pub mod polling;
pub mod webhook;

pub use config::Args;
pub use dispatch::{Dispatcher, Inbound};
