pub mod admin;
pub mod blog;
pub mod constants;
pub mod health_check; // Public for OpenAPI annotations
pub mod waitlist; // Public for OpenAPI annotations

pub use admin::*;
pub use blog::*;
pub use health_check::*;
pub use waitlist::*;
