use axum::Router;
use axum::http::{HeaderValue, Method};
use axum::middleware;
use axum::routing::{get, post};
use flashgen_core::CompletionProvider;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, warn};

use crate::handlers::{
    generate_flashcards_handler, health_handler, not_found_handler, root_handler,
};
use crate::request_id::request_id_middleware;
use crate::state::AppState;

/// Build the HTTP API. Every route is served both at the root and under `/api`.
pub fn create_router<P>(state: AppState<P>, allowed_origins: &[String]) -> Router
where
    P: CompletionProvider + 'static,
{
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let routes = Router::new()
        .route("/", get(root_handler::<P>))
        .route("/health", get(health_handler::<P>))
        .route(
            "/generate-flashcards",
            post(generate_flashcards_handler::<P>),
        );

    Router::new()
        .nest("/api", routes.clone())
        .merge(routes)
        .fallback(not_found_handler)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors_layer(allowed_origins))
        .with_state(state)
}

/// CORS for the configured origins. `*` allows any origin, without credentials.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(AllowHeaders::mirror_request());

    if allowed_origins.iter().any(|origin| origin == "*") {
        return base.allow_origin(AllowOrigin::any());
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    base.allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
}
