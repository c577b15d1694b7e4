use crate::authentication::AdminToken;
use crate::backend_client::{BackendResponse, RelayError};
use crate::domain::{WaitlistEntryUpdate, WaitlistStatus};
use crate::startup::AppState;
use axum::Extension;
use axum::extract::{Json, Path, Query, State};
use bytes::Bytes;
use uuid::Uuid;

#[derive(Debug, serde::Deserialize, utoipa::IntoParams)]
pub struct WaitlistFilter {
    /// Restrict the listing to entries with this status
    pub status: Option<WaitlistStatus>,
}

/// Admin: List waitlist entries
///
/// Forwards the listing request, including the optional status filter,
/// to the backend service and relays its reply. Requires authentication.
#[utoipa::path(
    get,
    path = "/api/admin/waitlist",
    tag = "admin-waitlist",
    params(WaitlistFilter),
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "Backend reply, relayed verbatim"),
        (status = 401, description = "Not authenticated"),
        (status = 500, description = "Backend unreachable"),
    )
)]
#[tracing::instrument(name = "Admin: List waitlist entries", skip(state, token))]
pub async fn list_waitlist(
    State(state): State<AppState>,
    Extension(token): Extension<AdminToken>,
    Query(filter): Query<WaitlistFilter>,
) -> Result<BackendResponse, RelayError> {
    let response = state
        .backend_client
        .list_waitlist(token.expose(), filter.status)
        .await?;
    Ok(response)
}

/// Admin: Update a waitlist entry
///
/// Forwards a partial update of status and/or admin notes to the backend
/// service and relays its reply. Requires authentication.
#[utoipa::path(
    patch,
    path = "/api/admin/waitlist/{id}",
    tag = "admin-waitlist",
    params(
        ("id" = Uuid, Path, description = "Waitlist entry identifier")
    ),
    request_body = WaitlistEntryUpdate,
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "Backend reply, relayed verbatim"),
        (status = 401, description = "Not authenticated"),
        (status = 500, description = "Backend unreachable"),
    )
)]
#[tracing::instrument(name = "Admin: Update waitlist entry", skip(state, token, update))]
pub async fn update_waitlist_entry(
    State(state): State<AppState>,
    Extension(token): Extension<AdminToken>,
    Path(entry_id): Path<Uuid>,
    Json(update): Json<WaitlistEntryUpdate>,
) -> Result<BackendResponse, RelayError> {
    let response = state
        .backend_client
        .update_waitlist_entry(entry_id, token.expose(), &update)
        .await?;
    Ok(response)
}

/// Admin: Delete a waitlist entry
///
/// Forwards the deletion to the backend service and relays its reply.
/// Requires authentication.
#[utoipa::path(
    delete,
    path = "/api/admin/waitlist/{id}",
    tag = "admin-waitlist",
    params(
        ("id" = Uuid, Path, description = "Waitlist entry identifier")
    ),
    request_body(content = String, content_type = "application/json"),
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "Backend reply, relayed verbatim"),
        (status = 401, description = "Not authenticated"),
        (status = 500, description = "Backend unreachable"),
    )
)]
#[tracing::instrument(name = "Admin: Delete waitlist entry", skip(state, token, body))]
pub async fn delete_waitlist_entry(
    State(state): State<AppState>,
    Extension(token): Extension<AdminToken>,
    Path(entry_id): Path<Uuid>,
    body: Bytes,
) -> Result<BackendResponse, RelayError> {
    let response = state
        .backend_client
        .delete_waitlist_entry(entry_id, token.expose(), body)
        .await?;
    Ok(response)
}
