use crate::domain::{NewWaitlistEntry, WaitlistEntryUpdate, WaitlistStatus, WaitlistUseCase};
use crate::routes::constants::ERROR_SOMETHING_WENT_WRONG;
use crate::telemetry::error_chain_fmt;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::IntoResponse;
use bytes::Bytes;
use reqwest::Client;
use uuid::Uuid;

/// HTTP client for the external backend that owns waitlist entries and
/// applies blog mutations. Each call is a single attempt, no retries.
#[derive(Clone, Debug)]
pub struct BackendClient {
    base_url: String,
    http_client: Client,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct WaitlistSubmissionRequest<'a> {
    name: &'a str,
    email: &'a str,
    use_case: WaitlistUseCase,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
}

impl BackendClient {
    pub fn new(base_url: String, timeout: std::time::Duration) -> Self {
        let http_client = Client::builder().timeout(timeout).build().unwrap();
        Self {
            http_client,
            base_url,
        }
    }

    #[tracing::instrument(name = "Forwarding blog post update", skip(token))]
    pub async fn update_post(
        &self,
        slug: &str,
        token: &str,
        body: Bytes,
    ) -> Result<BackendResponse, reqwest::Error> {
        let url = format!("{}/api/blog/{}", self.base_url, slug);
        let request = self
            .http_client
            .put(&url)
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(body);
        self.forward(request).await
    }

    #[tracing::instrument(name = "Forwarding blog post deletion", skip(token))]
    pub async fn delete_post(
        &self,
        slug: &str,
        token: &str,
        body: Bytes,
    ) -> Result<BackendResponse, reqwest::Error> {
        let url = format!("{}/api/blog/{}", self.base_url, slug);
        let request = self
            .http_client
            .delete(&url)
            .header("Authorization", format!("Bearer {}", token))
            .body(body);
        self.forward(request).await
    }

    /// Public submissions carry no credentials.
    #[tracing::instrument(name = "Forwarding waitlist submission", skip(entry))]
    pub async fn submit_waitlist(
        &self,
        entry: &NewWaitlistEntry,
    ) -> Result<BackendResponse, reqwest::Error> {
        let url = format!("{}/api/waitlist", self.base_url);
        let request_body = WaitlistSubmissionRequest {
            name: entry.name.as_ref(),
            email: entry.email.as_ref(),
            use_case: entry.use_case,
            message: entry.message.as_deref(),
        };
        let request = self.http_client.post(&url).json(&request_body);
        self.forward(request).await
    }

    #[tracing::instrument(name = "Forwarding waitlist listing", skip(token))]
    pub async fn list_waitlist(
        &self,
        token: &str,
        status: Option<WaitlistStatus>,
    ) -> Result<BackendResponse, reqwest::Error> {
        let url = format!("{}/api/waitlist", self.base_url);
        let mut request = self
            .http_client
            .get(&url)
            .header("Authorization", format!("Bearer {}", token));
        if let Some(status) = status {
            request = request.query(&[("status", status.as_str())]);
        }
        self.forward(request).await
    }

    #[tracing::instrument(name = "Forwarding waitlist entry update", skip(token, update))]
    pub async fn update_waitlist_entry(
        &self,
        id: Uuid,
        token: &str,
        update: &WaitlistEntryUpdate,
    ) -> Result<BackendResponse, reqwest::Error> {
        let url = format!("{}/api/waitlist/{}", self.base_url, id);
        let request = self
            .http_client
            .patch(&url)
            .header("Authorization", format!("Bearer {}", token))
            .json(update);
        self.forward(request).await
    }

    #[tracing::instrument(name = "Forwarding waitlist entry deletion", skip(token))]
    pub async fn delete_waitlist_entry(
        &self,
        id: Uuid,
        token: &str,
        body: Bytes,
    ) -> Result<BackendResponse, reqwest::Error> {
        let url = format!("{}/api/waitlist/{}", self.base_url, id);
        let request = self
            .http_client
            .delete(&url)
            .header("Authorization", format!("Bearer {}", token))
            .body(body);
        self.forward(request).await
    }

    async fn forward(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<BackendResponse, reqwest::Error> {
        let response = request.send().await.map_err(|e| {
            tracing::error!("Failed to reach the backend service: {:?}", e);
            e
        })?;
        let status = response.status();
        let content_type = response.headers().get(CONTENT_TYPE).cloned();
        let body = response.bytes().await?;
        Ok(BackendResponse {
            status,
            content_type,
            body,
        })
    }
}

/// A captured backend reply, relayed to the original caller as-is:
/// same status code, same body.
#[derive(Debug)]
pub struct BackendResponse {
    status: StatusCode,
    content_type: Option<HeaderValue>,
    body: Bytes,
}

impl IntoResponse for BackendResponse {
    fn into_response(self) -> axum::response::Response {
        let mut response = self.body.into_response();
        *response.status_mut() = self.status;
        match self.content_type {
            Some(content_type) => {
                response.headers_mut().insert(CONTENT_TYPE, content_type);
            }
            None => {
                response.headers_mut().remove(CONTENT_TYPE);
            }
        }
        response
    }
}

#[derive(thiserror::Error)]
#[error("Failed to reach the backend service.")]
pub struct RelayError(#[from] reqwest::Error);

impl std::fmt::Debug for RelayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> axum::response::Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            axum::Json(serde_json::json!({
                "success": false,
                "error": ERROR_SOMETHING_WENT_WRONG,
            })),
        )
            .into_response()
    }
}
