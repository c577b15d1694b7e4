use crate::domain::{BlogPost, Slug};
use crate::routes::constants::{ERROR_POST_NOT_FOUND, ERROR_SOMETHING_WENT_WRONG};
use crate::startup::AppState;
use crate::telemetry::error_chain_fmt;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use serde::Serialize;

#[derive(thiserror::Error)]
pub enum ServePostError {
    #[error("There is no post with this slug.")]
    PostNotFound,
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for ServePostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl IntoResponse for ServePostError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ServePostError::PostNotFound => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({
                    "success": false,
                    "error": ERROR_POST_NOT_FOUND,
                })),
            )
                .into_response(),
            ServePostError::UnexpectedError(_) => (
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

#[derive(Serialize, utoipa::ToSchema)]
pub struct BlogPostResponse {
    /// URL-safe identifier, doubles as the file name on disk
    pub slug: String,
    /// Post title
    pub title: String,
    /// Human-readable publication date, empty if the post has none
    pub date: String,
    /// Author display name
    pub author: String,
    /// Short plain-text summary
    pub excerpt: String,
    /// Cover image URL, omitted when the post has none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Markdown body
    pub content: String,
}

impl From<BlogPost> for BlogPostResponse {
    fn from(post: BlogPost) -> Self {
        BlogPostResponse {
            slug: post.slug,
            title: post.title,
            date: post.date,
            author: post.author,
            excerpt: post.excerpt,
            image: post.image,
            content: post.content,
        }
    }
}

/// Get all blog posts
///
/// Returns every post in the content directory, newest first.
/// No authentication required.
#[utoipa::path(
    get,
    path = "/api/blog",
    tag = "blog",
    responses(
        (status = 200, description = "List of blog posts", body = Vec<BlogPostResponse>),
        (status = 500, description = "Internal server error"),
    )
)]
#[tracing::instrument(name = "Get blog posts", skip(state))]
pub async fn get_posts(
    State(state): State<AppState>,
) -> Result<Json<Vec<BlogPostResponse>>, ServePostError> {
    let posts = state.content_store.list_posts().await.map_err(|e| {
        tracing::error!("Failed to list posts: {:?}", e);
        ServePostError::UnexpectedError(e)
    })?;

    let response: Vec<BlogPostResponse> = posts.into_iter().map(Into::into).collect();
    Ok(Json(response))
}

/// Get a single blog post by slug
///
/// Returns a specific blog post if a matching markdown file exists.
/// No authentication required.
#[utoipa::path(
    get,
    path = "/api/blog/{slug}",
    tag = "blog",
    params(
        ("slug" = String, Path, description = "Blog post slug")
    ),
    responses(
        (status = 200, description = "Blog post found", body = BlogPostResponse),
        (status = 404, description = "Blog post not found"),
        (status = 500, description = "Internal server error"),
    )
)]
#[tracing::instrument(name = "Get blog post by slug", skip(state))]
pub async fn get_post_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<BlogPostResponse>, ServePostError> {
    // A slug that does not even match the canonical shape cannot name a
    // stored file, so it reads as not found without touching the disk.
    let slug = Slug::parse(slug).map_err(|_| ServePostError::PostNotFound)?;

    let post = state.content_store.get_post(&slug).await.map_err(|e| {
        tracing::error!("Failed to fetch post {}: {:?}", slug, e);
        ServePostError::UnexpectedError(e)
    })?;

    match post {
        Some(post) => Ok(Json(post.into())),
        None => Err(ServePostError::PostNotFound),
    }
}
