// ABOUTME: HTTP client for the Ship UI backend
// ABOUTME: Cookie-based session, Google sign-in and per-user history endpoints

use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shipui_config::AppConfig;
use shipui_core::{GenerationRecord, User};
use tracing::{debug, info, warn};

use crate::dto::{GoogleLoginRequest, NewHistoryRecord, SyncRequest, SyncResponse};
use crate::error::{ApiError, ApiResult};

/// Client for the Ship UI backend
///
/// The backend keeps the session in an httpOnly cookie, so the underlying
/// HTTP client carries a cookie store. Clones share the same store and
/// therefore the same session.
#[derive(Clone)]
pub struct ApiClient {
    http_client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let http_client = Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ApiError::Configuration(e.to_string()))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        debug!(%base_url, "created backend client");

        Ok(Self {
            http_client,
            base_url,
        })
    }

    pub fn from_config(config: &AppConfig) -> ApiResult<Self> {
        Self::new(config.api_url.clone(), config.http_timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Read the user behind the current session cookie
    pub async fn current_user(&self) -> ApiResult<User> {
        let response = self.http_client.get(self.url("/auth/me")).send().await?;
        parse_json(ensure_success(response).await?).await
    }

    /// Exchange a Google ID token for a backend session
    pub async fn login_with_google(&self, credential: &str) -> ApiResult<User> {
        let response = self
            .http_client
            .post(self.url("/auth/google"))
            .json(&GoogleLoginRequest { token: credential })
            .send()
            .await?;

        let user: User = parse_json(ensure_success(response).await?).await?;
        info!(user_id = %user.id, "signed in with Google");
        Ok(user)
    }

    pub async fn logout(&self) -> ApiResult<()> {
        let response = self.http_client.post(self.url("/auth/logout")).send().await?;
        ensure_success(response).await?;
        Ok(())
    }

    /// Save one generation to the signed-in user's history
    ///
    /// Returns the stored record when the backend echoes it back.
    pub async fn create_history(
        &self,
        record: &NewHistoryRecord,
    ) -> ApiResult<Option<GenerationRecord>> {
        let response = self
            .http_client
            .post(self.url("/history"))
            .json(record)
            .send()
            .await?;

        let body = ensure_success(response).await?.text().await?;
        match serde_json::from_str::<GenerationRecord>(&body) {
            Ok(saved) => Ok(Some(saved)),
            Err(e) => {
                debug!(error = %e, "history create response did not contain a record");
                Ok(None)
            }
        }
    }

    /// Fetch the signed-in user's history, newest first
    ///
    /// Entries that do not decode are logged and skipped.
    pub async fn list_history(&self) -> ApiResult<Vec<GenerationRecord>> {
        let response = self.http_client.get(self.url("/history")).send().await?;
        let items: Vec<serde_json::Value> = parse_json(ensure_success(response).await?).await?;

        let total = items.len();
        let records: Vec<GenerationRecord> = items
            .into_iter()
            .filter_map(|item| match serde_json::from_value(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(error = %e, "skipping malformed history entry");
                    None
                }
            })
            .collect();

        debug!(count = records.len(), skipped = total - records.len(), "fetched history");
        Ok(records)
    }

    pub async fn delete_history(&self, id: &str) -> ApiResult<()> {
        let url = self.url(&format!("/history/{}", urlencoding::encode(id)));
        let response = self.http_client.delete(url).send().await?;
        ensure_success(response).await?;
        Ok(())
    }

    /// Upload guest records in one request; returns how many were accepted
    pub async fn sync_history(&self, records: &[GenerationRecord]) -> ApiResult<SyncResponse> {
        let response = self
            .http_client
            .post(self.url("/history/sync"))
            .json(&SyncRequest {
                guest_histories: records,
            })
            .send()
            .await?;

        let synced: SyncResponse = parse_json(ensure_success(response).await?).await?;
        info!(sent = records.len(), accepted = synced.count, "guest history synced");
        Ok(synced)
    }
}

async fn ensure_success(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().path().to_string();
    let body = response.text().await.unwrap_or_default();
    warn!(%status, %url, "backend request failed");
    Err(ApiError::from_status(status, &body))
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::InvalidResponse(e.to_string()))
}
