use axum::{
    handler::Handler,
    http::{header, StatusCode},
    middleware,
    routing::{get, MethodRouter},
    Router,
};

pub mod auth;
pub mod config;
pub mod errors;
pub mod http;
pub mod logging;

/// The four methods the placeholder routes accept; anything else is a 405.
fn placeholder_methods<H, T>(handler: H) -> MethodRouter
where
    H: Handler<T, ()>,
    T: 'static,
{
    let methods = get(handler.clone())
        .post(handler.clone())
        .put(handler.clone())
        .delete(handler);
    reject_head(methods, "GET,POST,PUT,DELETE")
}

/// axum answers HEAD through a GET route unless HEAD has its own endpoint.
fn reject_head(methods: MethodRouter, allow: &'static str) -> MethodRouter {
    methods.head(move || async move { (StatusCode::METHOD_NOT_ALLOWED, [(header::ALLOW, allow)]) })
}

pub fn build_app() -> Router {
    Router::new()
        .route(
            "/health",
            reject_head(get(http::handlers::health_check), "GET"),
        )
        .route("/api", placeholder_methods(http::handlers::mcp_root))
        .route("/api/", placeholder_methods(http::handlers::mcp_root))
        .route(
            "/api/{*route}",
            placeholder_methods(http::handlers::mcp_endpoint),
        )
        .fallback(http::handlers::not_found)
        .layer(middleware::from_fn(logging::request_logging_middleware))
}
