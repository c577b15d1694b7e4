mod token;

pub use token::{AdminToken, AuthError, issue_admin_token, verify_admin_token};
