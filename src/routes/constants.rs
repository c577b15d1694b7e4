//! Common constants used across route handlers

/// Generic error message for internal server errors
pub const ERROR_SOMETHING_WENT_WRONG: &str = "Something went wrong";

/// Error message for authentication failures
pub const ERROR_AUTHENTICATION_FAILED: &str = "Authentication failed";

/// Error message for missing authentication
pub const ERROR_AUTHENTICATION_REQUIRED: &str = "Authentication required";

/// Error message for tokens past their expiry
pub const ERROR_TOKEN_EXPIRED: &str = "Token expired";

/// Error message for slugs that name no stored post
pub const ERROR_POST_NOT_FOUND: &str = "Post not found";

/// Error message for payloads that failed field validation
pub const ERROR_VALIDATION_FAILED: &str = "Validation failed";

/// Error message for attempts to reuse an existing post slug
pub const ERROR_SLUG_TAKEN: &str = "A post with this slug already exists";
