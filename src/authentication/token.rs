use crate::routes::constants::{
    ERROR_AUTHENTICATION_FAILED, ERROR_AUTHENTICATION_REQUIRED, ERROR_TOKEN_EXPIRED,
};
use crate::startup::AppState;
use crate::telemetry::error_chain_fmt;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::IntoResponse;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};

#[derive(serde::Serialize, serde::Deserialize)]
struct Claims {
    sub: String,
    iat: i64,
    exp: i64,
}

/// A bearer token that has passed signature and expiry checks. Proxy
/// handlers pull this out of request extensions to re-attach it upstream.
#[derive(Clone, Debug)]
pub struct AdminToken(Secret<String>);

impl AdminToken {
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

pub fn issue_admin_token(
    subject: &str,
    secret: &Secret<String>,
    valid_for: chrono::Duration,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now();
    let claims = Claims {
        sub: subject.to_string(),
        iat: now.timestamp(),
        exp: (now + valid_for).timestamp(),
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.expose_secret().as_bytes()),
    )
}

/// Check signature and expiry against the shared secret. No network
/// involved, so a bad token never reaches the backend.
pub fn verify_admin_token(token: &str, secret: &Secret<String>) -> Result<AdminToken, AuthError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.expose_secret().as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map_err(|error| match error.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
        _ => AuthError::InvalidToken(error),
    })?;
    Ok(AdminToken(Secret::new(token.to_string())))
}

#[derive(thiserror::Error)]
pub enum AuthError {
    #[error("The Authorization header is missing or malformed.")]
    MissingToken,
    #[error("The provided token is invalid.")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),
    #[error("The provided token has expired.")]
    ExpiredToken,
}

impl std::fmt::Debug for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> axum::response::Response {
        let message = match &self {
            AuthError::MissingToken => ERROR_AUTHENTICATION_REQUIRED,
            AuthError::InvalidToken(_) => ERROR_AUTHENTICATION_FAILED,
            AuthError::ExpiredToken => ERROR_TOKEN_EXPIRED,
        };
        let mut response = (
            StatusCode::UNAUTHORIZED,
            axum::Json(serde_json::json!({
                "success": false,
                "error": message,
            })),
        )
            .into_response();
        response
            .headers_mut()
            .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        response
    }
}

impl FromRequestParts<AppState> for AdminToken {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| AuthError::MissingToken)?;
        verify_admin_token(bearer.token(), &state.token_secret.0)
    }
}
