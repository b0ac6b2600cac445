//! TelegramClient - minimal Telegram Bot API client over reqwest.

use std::fmt;
use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;

use quadrant_core::error::{QuadrantError, Result};

use super::types::{ApiResponse, ReplyMarkup, SendMessage, Update};
use crate::http::{map_http_error, map_transport_error};

const DEFAULT_API_URL: &str = "https://api.telegram.org";
const SERVICE: &str = "Telegram";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Bot API client bound to one bot token.
#[derive(Clone)]
pub struct TelegramClient {
    client: Client,
    /// `{api_url}/bot{token}`; never logged.
    base_url: String,
}

impl fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramClient").finish_non_exhaustive()
    }
}

impl TelegramClient {
    pub fn new(token: &str) -> Self {
        Self::with_api_url(DEFAULT_API_URL, token)
    }

    /// Creates a client against a different Bot API server.
    pub fn with_api_url(api_url: &str, token: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: format!("{}/bot{}", api_url.trim_end_matches('/'), token),
        }
    }

    async fn call<B, T>(&self, method: &str, body: &B, timeout: Duration) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(format!("{}/{}", self.base_url, method))
            .timeout(timeout)
            .json(body)
            .send()
            .await
            .map_err(|err| map_transport_error(SERVICE, err, timeout))?;

        let status = response.status();
        let body_text = response
            .text()
            .await
            .map_err(|err| map_transport_error(SERVICE, err, timeout))?;

        if !status.is_success() {
            return Err(map_http_error(status, body_text));
        }

        let parsed: ApiResponse<T> = serde_json::from_str(&body_text)?;
        match parsed {
            ApiResponse {
                ok: true,
                result: Some(result),
                ..
            } => Ok(result),
            ApiResponse {
                description,
                error_code,
                ..
            } => Err(QuadrantError::remote(
                error_code,
                description.unwrap_or_else(|| format!("{method} returned no result")),
            )),
        }
    }

    /// Long-polls for updates after `offset`.
    ///
    /// # Arguments
    ///
    /// * `offset` - Identifier of the first update to return
    /// * `timeout_secs` - Long-poll duration on the server side
    pub async fn get_updates(&self, offset: Option<i64>, timeout_secs: u64) -> Result<Vec<Update>> {
        let mut body = json!({
            "timeout": timeout_secs,
            "allowed_updates": ["message", "callback_query"],
        });
        if let Some(offset) = offset {
            body["offset"] = json!(offset);
        }
        self.call(
            "getUpdates",
            &body,
            Duration::from_secs(timeout_secs) + REQUEST_TIMEOUT,
        )
        .await
    }

    pub async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        reply_markup: Option<&ReplyMarkup>,
    ) -> Result<()> {
        let body = SendMessage {
            chat_id,
            text,
            reply_markup,
        };
        let _: serde_json::Value = self.call("sendMessage", &body, REQUEST_TIMEOUT).await?;
        Ok(())
    }

    /// Clears the loading indicator on a pressed inline button.
    pub async fn answer_callback_query(&self, callback_query_id: &str) -> Result<()> {
        let body = json!({ "callback_query_id": callback_query_id });
        let _: bool = self
            .call("answerCallbackQuery", &body, REQUEST_TIMEOUT)
            .await?;
        Ok(())
    }

    pub async fn set_webhook(&self, url: &str) -> Result<()> {
        let body = json!({
            "url": url,
            "allowed_updates": ["message", "callback_query"],
        });
        let _: bool = self.call("setWebhook", &body, REQUEST_TIMEOUT).await?;
        Ok(())
    }

    pub async fn delete_webhook(&self) -> Result<()> {
        let body = json!({ "drop_pending_updates": false });
        let _: bool = self.call("deleteWebhook", &body, REQUEST_TIMEOUT).await?;
        Ok(())
    }
}
