//! HTTP API: router assembly and layers

pub mod handlers;
pub mod headers;
pub mod middleware;
pub mod routes;

use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderName, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Build the application router with all layers applied.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(
        &state.config.server.cors_origins,
        &state.config.server.application_name,
    );
    let body_limit = state.config.server.max_request_body_size;

    Router::new()
        .route("/health", get(handlers::health::health))
        .nest("/api", routes::consultorio_routes())
        .layer(axum::middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origins: &[String], application_name: &str) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let app = application_name.to_ascii_lowercase();
    let mut exposed = vec![
        header::LOCATION,
        header::LINK,
        HeaderName::from_static(headers::TOTAL_COUNT_HEADER),
    ];
    exposed.extend(
        ["alert", "error", "params"]
            .iter()
            .filter_map(|suffix| HeaderName::try_from(format!("x-{app}-{suffix}")).ok()),
    );

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .expose_headers(exposed)
}
