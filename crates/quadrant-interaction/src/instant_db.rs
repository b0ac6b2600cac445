//! InstantDbStore - remote result store over the InstantDB admin HTTP API.
//!
//! Records live in the `records` namespace. Writes use a single `update`
//! transaction step keyed by the client-chosen record id; reads fetch the
//! whole namespace.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use quadrant_core::error::Result;
use quadrant_core::record::{RemoteRecordStore, RemoteStore, ResultRecord};

use crate::http::{map_http_error, map_transport_error};

pub const DEFAULT_API_URL: &str = "https://api.instantdb.com";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const NAMESPACE: &str = "records";
const SERVICE: &str = "InstantDB";

/// Connection settings for the remote store.
#[derive(Clone)]
pub struct InstantDbConfig {
    /// Application id; the remote store is disabled without one.
    pub app_id: Option<String>,
    pub admin_token: Option<String>,
    pub api_url: String,
    pub request_timeout: Duration,
}

impl Default for InstantDbConfig {
    fn default() -> Self {
        Self {
            app_id: None,
            admin_token: None,
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl InstantDbConfig {
    pub fn app_id(&self) -> Option<&str> {
        self.app_id.as_deref().map(str::trim).filter(|id| !id.is_empty())
    }
}

impl fmt::Debug for InstantDbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstantDbConfig")
            .field("app_id", &self.app_id)
            .field("admin_token", &self.admin_token.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

/// Remote record store talking to InstantDB.
#[derive(Clone)]
pub struct InstantDbStore {
    client: Client,
    app_id: String,
    admin_token: Option<String>,
    api_url: String,
    request_timeout: Duration,
}

#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    records: Vec<Value>,
}

impl InstantDbStore {
    /// Creates a store for `app_id`.
    pub fn new(app_id: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            app_id: app_id.into(),
            admin_token: None,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_admin_token(mut self, token: impl Into<String>) -> Self {
        self.admin_token = Some(token.into());
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Builds the remote capability from configuration.
    ///
    /// # Returns
    ///
    /// `RemoteStore::Disabled` when no application id is configured.
    pub fn from_config(config: &InstantDbConfig) -> RemoteStore {
        let Some(app_id) = config.app_id() else {
            tracing::info!("INSTANT_DB_APP_ID not set; results are stored locally only");
            return RemoteStore::Disabled;
        };

        let mut store = Self::new(app_id, config.api_url.clone())
            .with_request_timeout(config.request_timeout);
        if let Some(token) = config.admin_token.as_deref().filter(|t| !t.is_empty()) {
            store = store.with_admin_token(token);
        }
        tracing::info!(api_url = %store.api_url, "InstantDB remote store enabled");
        RemoteStore::enabled(store)
    }

    fn post(&self, path: &str) -> RequestBuilder {
        let request = self
            .client
            .post(format!("{}{}", self.api_url, path))
            .header("App-Id", &self.app_id)
            .header("content-type", "application/json")
            .timeout(self.request_timeout);

        match &self.admin_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(&self, path: &str, body: &Value) -> Result<T> {
        let response = self
            .post(path)
            .json(body)
            .send()
            .await
            .map_err(|err| map_transport_error(SERVICE, err, self.request_timeout))?;

        let status = response.status();
        let body_text = response
            .text()
            .await
            .map_err(|err| map_transport_error(SERVICE, err, self.request_timeout))?;

        if !status.is_success() {
            return Err(map_http_error(status, body_text));
        }

        Ok(serde_json::from_str(&body_text)?)
    }
}

/// The `update` step payload: every record attribute except the id.
fn update_payload(record: &ResultRecord) -> Result<Value> {
    let mut payload = serde_json::to_value(record)?;
    if let Value::Object(map) = &mut payload {
        map.remove("id");
    }
    Ok(payload)
}

#[async_trait]
impl RemoteRecordStore for InstantDbStore {
    async fn create(&self, record: &ResultRecord) -> Result<()> {
        let body = json!({
            "steps": [["update", NAMESPACE, record.id.as_str(), update_payload(record)?]]
        });
        tracing::debug!(id = %record.id, "Writing record to InstantDB");

        let _: Value = self.send("/admin/transact", &body).await?;
        Ok(())
    }

    async fn query_all(&self) -> Result<Vec<ResultRecord>> {
        let body = json!({ "query": { NAMESPACE: {} } });
        let response: QueryResponse = self.send("/admin/query", &body).await?;

        let total = response.records.len();
        let records: Vec<ResultRecord> = response
            .records
            .into_iter()
            .filter_map(|row| match serde_json::from_value::<ResultRecord>(row) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::debug!(error = %e, "Skipping malformed InstantDB row");
                    None
                }
            })
            .collect();

        tracing::debug!(total, parsed = records.len(), "Fetched InstantDB records");
        Ok(records)
    }
}
