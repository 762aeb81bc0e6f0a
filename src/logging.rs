use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

pub const DEFAULT_LOG_FILTER: &str = "mcp_gateway=info";

/// Label used for requests that no route template matched.
pub const FALLBACK_ROUTE: &str = "fallback";

/// `RUST_LOG` overrides [`DEFAULT_LOG_FILTER`].
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

/// The route template the router dispatched to, e.g. `/api/{*route}`.
pub fn route_label(request: &Request) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_string())
        .unwrap_or_else(|| FALLBACK_ROUTE.to_string())
}

pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let route = route_label(&request);
    let started_at = Instant::now();

    let response = next.run(request).await;
    let status = response.status();

    info!(
        method = %method,
        route = %route,
        path = %path,
        status = status.as_u16(),
        duration_ms = started_at.elapsed().as_millis(),
        "request handled"
    );

    match status {
        StatusCode::NOT_FOUND => warn!(method = %method, path = %path, "no route matched"),
        StatusCode::METHOD_NOT_ALLOWED => {
            warn!(method = %method, route = %route, "method not accepted by route")
        }
        _ => {}
    }

    response
}
