use crate::authentication::AdminToken;
use crate::backend_client::BackendClient;
use crate::configuration::Settings;
use crate::content_store::ContentStore;
use crate::openapi::ApiDoc;
use crate::routes::{
    create_post, delete_post, delete_waitlist_entry, get_post_by_slug, get_posts, health_check,
    list_waitlist, submit_waitlist, update_post, update_waitlist_entry,
};
use axum::Router;
use axum::extract::{FromRequestParts, Request, State};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::routing::{get, patch, post, put};
use secrecy::Secret;
use std::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// We need to define a wrapper type in order to retrieve the secret
// in the token extractor.
// Retrieval from the state is type-based: using a raw
// `Secret<String>` would expose us to conflicts.
#[derive(Clone)]
pub struct AdminTokenSecret(pub Secret<String>);

#[derive(Clone)]
pub struct AppState {
    pub content_store: ContentStore,
    pub backend_client: BackendClient,
    pub token_secret: AdminTokenSecret,
}

pub struct Application {
    port: u16,
    listener: TcpListener,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        listener.set_nonblocking(true)?;
        let port = listener.local_addr()?.port();

        Ok(Self { port, listener })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self, configuration: Settings) -> Result<(), std::io::Error> {
        let content_store = ContentStore::new(configuration.content.posts_dir);
        let backend_client = configuration.backend.client();
        let app_state = AppState {
            content_store,
            backend_client,
            token_secret: AdminTokenSecret(configuration.auth.token_secret),
        };

        let admin_routes = Router::new()
            .route("/blog", post(create_post))
            .route("/blog/{slug}", put(update_post).delete(delete_post))
            .route("/waitlist", get(list_waitlist))
            .route(
                "/waitlist/{id}",
                patch(update_waitlist_entry).delete(delete_waitlist_entry),
            )
            .route_layer(axum::middleware::from_fn_with_state(
                app_state.clone(),
                require_admin_token,
            ));

        let app = Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
            .route("/health_check", get(health_check))
            .route("/api/blog", get(get_posts))
            .route("/api/blog/{slug}", get(get_post_by_slug))
            .route("/api/waitlist", post(submit_waitlist))
            .nest("/api/admin", admin_routes)
            .with_state(app_state)
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive()),
            );

        let listener = tokio::net::TcpListener::from_std(self.listener)?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }
}

/// Token check shared by every admin route. On success the verified token
/// is stashed in request extensions so proxy handlers can re-attach it
/// to the outbound request.
async fn require_admin_token(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> axum::response::Response {
    let (mut parts, body) = req.into_parts();
    match AdminToken::from_request_parts(&mut parts, &state).await {
        Ok(token) => {
            parts.extensions.insert(token);
            let req = Request::from_parts(parts, body);
            next.run(req).await
        }
        Err(error) => error.into_response(),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install the Ctrl+C handler.");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install the SIGTERM handler.")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
