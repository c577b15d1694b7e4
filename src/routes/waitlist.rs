use crate::backend_client::{BackendResponse, RelayError};
use crate::domain::{ContactName, EmailAddress, NewWaitlistEntry, WaitlistUseCase};
use crate::startup::AppState;
use crate::telemetry::error_chain_fmt;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use unicode_segmentation::UnicodeSegmentation;

/// Name and e-mail are optional at this layer so that an absent field is
/// rejected by the validator, like an empty one, instead of by the JSON
/// extractor.
#[derive(serde::Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistSubmission {
    name: Option<String>,
    email: Option<String>,
    #[serde(default)]
    use_case: WaitlistUseCase,
    message: Option<String>,
}

impl TryFrom<WaitlistSubmission> for NewWaitlistEntry {
    type Error = String;

    fn try_from(value: WaitlistSubmission) -> Result<Self, Self::Error> {
        let name = ContactName::parse(value.name.unwrap_or_default())?;
        let email = EmailAddress::parse(value.email.unwrap_or_default())?;
        let message = value.message.filter(|m| !m.trim().is_empty());
        if let Some(message) = &message {
            if message.graphemes(true).count() > 1000 {
                return Err("The message must not be longer than 1000 characters.".to_string());
            }
        }
        Ok(Self {
            name,
            email,
            use_case: value.use_case,
            message,
        })
    }
}

#[derive(thiserror::Error)]
pub enum WaitlistSubmissionError {
    #[error("{0}")]
    ValidationError(String),
    #[error(transparent)]
    RelayError(#[from] RelayError),
}

impl std::fmt::Debug for WaitlistSubmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl IntoResponse for WaitlistSubmissionError {
    fn into_response(self) -> axum::response::Response {
        match self {
            WaitlistSubmissionError::ValidationError(_) => (
                StatusCode::BAD_REQUEST,
                axum::Json(serde_json::json!({
                    "success": false,
                    "error": self.to_string(),
                })),
            )
                .into_response(),
            WaitlistSubmissionError::RelayError(error) => error.into_response(),
        }
    }
}

/// Join the waitlist
///
/// Validates the submission locally, then forwards it to the backend
/// service and relays the backend's reply.
/// No authentication required.
#[utoipa::path(
    post,
    path = "/api/waitlist",
    tag = "waitlist",
    request_body = WaitlistSubmission,
    responses(
        (status = 200, description = "Backend reply, relayed verbatim"),
        (status = 400, description = "Validation failed"),
        (status = 500, description = "Backend unreachable"),
    )
)]
#[tracing::instrument(
    name = "Submitting a waitlist signup",
    skip(state, submission),
    fields(submitter_email = ?submission.email)
)]
pub async fn submit_waitlist(
    State(state): State<AppState>,
    Json(submission): Json<WaitlistSubmission>,
) -> Result<BackendResponse, WaitlistSubmissionError> {
    let entry: NewWaitlistEntry = submission
        .try_into()
        .map_err(WaitlistSubmissionError::ValidationError)?;
    let response = state
        .backend_client
        .submit_waitlist(&entry)
        .await
        .map_err(RelayError::from)?;
    Ok(response)
}
