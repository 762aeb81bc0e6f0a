//! Axum HTTP handlers for the gateway
//!
//! Both handlers are total: they never consult state and always answer 200.

use axum::{
    extract::{rejection::PathRejection, Path},
    http::{HeaderMap, Method, Uri},
    Json,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::{auth::bearer_presence, errors::AppError};

pub const SERVICE_NAME: &str = "mcp-gateway";

const PLACEHOLDER_MESSAGE: &str = "MCP Server endpoint - awaiting implementation";
const PLACEHOLDER_NOTE: &str = "This is a placeholder. Implement Slack MCP logic here.";
const API_PREFIX: &str = "/api/";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PlaceholderResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub method: String,
    pub path: String,
    pub note: &'static str,
}

pub async fn health_check() -> Json<HealthResponse> {
    info!("health check endpoint called");
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
    })
}

/// `/api/{*route}`
///
/// A remainder that does not decode to UTF-8 must still reach the placeholder,
/// so the extractor rejection is absorbed here instead of becoming a 400.
pub async fn mcp_endpoint(
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    route: Result<Path<String>, PathRejection>,
) -> Json<PlaceholderResponse> {
    let route = match route {
        Ok(Path(route)) => route,
        Err(rejection) => {
            debug!(error = %rejection, "falling back to lossy path decoding");
            lossy_remainder(&uri)
        }
    };
    placeholder(method, &uri, &headers, route)
}

/// `/api` and `/api/`, where the wildcard captured nothing.
pub async fn mcp_root(method: Method, uri: Uri, headers: HeaderMap) -> Json<PlaceholderResponse> {
    placeholder(method, &uri, &headers, String::new())
}

pub async fn not_found() -> AppError {
    AppError::not_found("route not found")
}

fn lossy_remainder(uri: &Uri) -> String {
    let raw = uri.path().strip_prefix(API_PREFIX).unwrap_or_default();
    let bytes = urlencoding::decode_binary(raw.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

fn placeholder(
    method: Method,
    uri: &Uri,
    headers: &HeaderMap,
    path: String,
) -> Json<PlaceholderResponse> {
    info!(method = %method, uri = %uri, "mcp endpoint called");

    // Only the classification is logged, never the credential.
    let has_auth = bearer_presence(headers);
    info!(has_auth = %has_auth, "authentication present");

    Json(PlaceholderResponse {
        status: "placeholder",
        message: PLACEHOLDER_MESSAGE,
        method: method.as_str().to_string(),
        path,
        note: PLACEHOLDER_NOTE,
    })
}
