//! OpenAPI documentation configuration.
//!
//! Aggregates every annotated route handler into a single document,
//! served through Swagger UI and available as JSON for external tooling.

use crate::domain::{
    CreatePostPayload, FieldIssue, WaitlistEntryUpdate, WaitlistStatus, WaitlistUseCase,
};
use crate::routes::{BlogPostResponse, CreatedPostResponse, WaitlistSubmission};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the bearer token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer_token",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Sitekit API",
        description = "HTTP interface for the marketing site: blog content, waitlist intake and token-gated administration."
    ),
    paths(
        crate::routes::health_check::health_check,
        crate::routes::blog::get_posts,
        crate::routes::blog::get_post_by_slug,
        crate::routes::waitlist::submit_waitlist,
        crate::routes::admin::blog::create_post,
        crate::routes::admin::blog::update_post,
        crate::routes::admin::blog::delete_post,
        crate::routes::admin::waitlist::list_waitlist,
        crate::routes::admin::waitlist::update_waitlist_entry,
        crate::routes::admin::waitlist::delete_waitlist_entry,
    ),
    components(schemas(
        BlogPostResponse,
        CreatePostPayload,
        CreatedPostResponse,
        FieldIssue,
        WaitlistSubmission,
        WaitlistEntryUpdate,
        WaitlistStatus,
        WaitlistUseCase,
    )),
    tags(
        (name = "health", description = "Service health probes"),
        (name = "blog", description = "Public blog content"),
        (name = "waitlist", description = "Public waitlist intake"),
        (name = "admin-blog", description = "Token-gated blog management"),
        (name = "admin-waitlist", description = "Token-gated waitlist management")
    )
)]
pub struct ApiDoc;
