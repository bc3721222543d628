pub mod health;

use std::any::Any;

use anyhow::{Context, Result};
use axum::{
    http::{header, HeaderValue, Method},
    response::Response,
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};

use crate::config::Config;
use crate::errors::internal_error_response;
use crate::recommendation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/recommendation",
            post(handlers::handle_recommend),
        )
        .route(
            "/api/v1/recommendation/legacy",
            post(handlers::handle_recommend_legacy),
        )
        .with_state(state)
}

/// Wraps the router with panic recovery, request timeout, CORS for the intake
/// form origin and request tracing.
pub fn apply_middleware(router: Router, config: &Config) -> Result<Router> {
    let origin: HeaderValue = config
        .cors_origin
        .parse()
        .with_context(|| format!("CORS_ORIGIN '{}' is not a valid origin", config.cors_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    Ok(router
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!("Handler panicked: {detail}");
    internal_error_response()
}
