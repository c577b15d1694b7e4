use crate::authentication::AdminToken;
use crate::backend_client::{BackendResponse, RelayError};
use crate::content_store::PersistPostError;
use crate::domain::{CreatePostPayload, FieldIssue, NewPost};
use crate::routes::constants::{
    ERROR_SLUG_TAKEN, ERROR_SOMETHING_WENT_WRONG, ERROR_VALIDATION_FAILED,
};
use crate::startup::AppState;
use crate::telemetry::error_chain_fmt;
use axum::Extension;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use bytes::Bytes;
use serde::Serialize;

#[derive(Serialize, utoipa::ToSchema)]
pub struct CreatedPostResponse {
    /// Slug assigned to the new post
    pub slug: String,
}

#[derive(thiserror::Error)]
pub enum CreatePostError {
    #[error("The submitted post failed validation.")]
    InvalidPost(Vec<FieldIssue>),
    #[error("A post with this slug already exists.")]
    SlugTaken,
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for CreatePostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl From<PersistPostError> for CreatePostError {
    fn from(error: PersistPostError) -> Self {
        match error {
            PersistPostError::SlugTaken => CreatePostError::SlugTaken,
            PersistPostError::UnexpectedError(e) => CreatePostError::UnexpectedError(e),
        }
    }
}

impl IntoResponse for CreatePostError {
    fn into_response(self) -> axum::response::Response {
        match self {
            CreatePostError::InvalidPost(issues) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "success": false,
                    "error": ERROR_VALIDATION_FAILED,
                    "issues": issues,
                })),
            )
                .into_response(),
            CreatePostError::SlugTaken => (
                StatusCode::CONFLICT,
                Json(serde_json::json!({
                    "success": false,
                    "error": ERROR_SLUG_TAKEN,
                })),
            )
                .into_response(),
            CreatePostError::UnexpectedError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "success": false,
                    "error": ERROR_SOMETHING_WENT_WRONG,
                })),
            )
                .into_response(),
        }
    }
}

/// Admin: Create new blog post
///
/// Validates the payload, derives a slug where none was supplied and
/// writes a new markdown file. Requires authentication.
#[utoipa::path(
    post,
    path = "/api/admin/blog",
    tag = "admin-blog",
    request_body = CreatePostPayload,
    security(("bearer_token" = [])),
    responses(
        (status = 201, description = "Blog post created", body = CreatedPostResponse),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Not authenticated"),
        (status = 409, description = "Slug already taken"),
        (status = 500, description = "Internal server error"),
    )
)]
#[tracing::instrument(name = "Admin: Create blog post", skip(state, payload))]
pub async fn create_post(
    State(state): State<AppState>,
    Extension(_token): Extension<AdminToken>,
    Json(payload): Json<CreatePostPayload>,
) -> Result<impl IntoResponse, CreatePostError> {
    let new_post = NewPost::parse(payload).map_err(CreatePostError::InvalidPost)?;
    state.content_store.create_post(&new_post).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedPostResponse {
            slug: new_post.slug().as_ref().to_string(),
        }),
    ))
}

/// Admin: Update existing blog post
///
/// Forwards the update to the backend service and relays its reply,
/// status code included. Requires authentication.
#[utoipa::path(
    put,
    path = "/api/admin/blog/{slug}",
    tag = "admin-blog",
    params(
        ("slug" = String, Path, description = "Blog post slug")
    ),
    request_body(content = String, content_type = "application/json"),
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "Backend reply, relayed verbatim"),
        (status = 401, description = "Not authenticated"),
        (status = 500, description = "Backend unreachable"),
    )
)]
#[tracing::instrument(name = "Admin: Update blog post", skip(state, token, body))]
pub async fn update_post(
    State(state): State<AppState>,
    Extension(token): Extension<AdminToken>,
    Path(slug): Path<String>,
    body: Bytes,
) -> Result<BackendResponse, RelayError> {
    let response = state
        .backend_client
        .update_post(&slug, token.expose(), body)
        .await?;
    Ok(response)
}

/// Admin: Delete blog post
///
/// Forwards the deletion to the backend service and relays its reply,
/// status code included. Requires authentication.
#[utoipa::path(
    delete,
    path = "/api/admin/blog/{slug}",
    tag = "admin-blog",
    params(
        ("slug" = String, Path, description = "Blog post slug")
    ),
    request_body(content = String, content_type = "application/json"),
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "Backend reply, relayed verbatim"),
        (status = 401, description = "Not authenticated"),
        (status = 500, description = "Backend unreachable"),
    )
)]
#[tracing::instrument(name = "Admin: Delete blog post", skip(state, token, body))]
pub async fn delete_post(
    State(state): State<AppState>,
    Extension(token): Extension<AdminToken>,
    Path(slug): Path<String>,
    body: Bytes,
) -> Result<BackendResponse, RelayError> {
    let response = state
        .backend_client
        .delete_post(&slug, token.expose(), body)
        .await?;
    Ok(response)
}
