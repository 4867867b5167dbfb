//! `/api` forwarding to the upstream analytics API.
//!
//! DESIGN
//! ======
//! The host never interprets API traffic. Method, query string, body, and a
//! short allow-list of headers go upstream unchanged; the upstream status,
//! content type, and body come back unchanged. Only a transport failure is
//! answered locally, with `502` and a JSON `detail`.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use crate::state::AppState;

/// Request headers copied onto the upstream request.
pub const FORWARDED_HEADERS: [HeaderName; 3] = [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT];

/// Prefix the host mounts the proxy under.
pub const API_PREFIX: &str = "/api";

/// Join the upstream base with the request path (relative to `/api`) and
/// optional query string.
#[must_use]
pub fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let base = base.trim_end_matches('/');
    let path = path.strip_prefix(API_PREFIX).unwrap_or(path);
    let mut url = if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    };
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    url
}

/// Keep only the allow-listed headers.
#[must_use]
pub fn forwarded_headers(incoming: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in &FORWARDED_HEADERS {
        for value in incoming.get_all(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// `ANY /api/{*path}`: forward to the upstream analytics API.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let url = upstream_url(&state.upstream, uri.path(), uri.query());
    tracing::debug!(%method, %url, "forwarding api request");

    let request = state
        .http
        .request(method.clone(), &url)
        .headers(forwarded_headers(&headers))
        .body(body);

    let upstream = match request.send().await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::warn!(%method, %url, error = %e, "upstream request failed");
            return bad_gateway();
        }
    };

    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = match upstream.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(%method, %url, error = %e, "upstream body read failed");
            return bad_gateway();
        }
    };

    let mut response = (status, bytes).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(header::CONTENT_TYPE, content_type);
    }
    response
}

fn bad_gateway() -> Response {
    (StatusCode::BAD_GATEWAY, Json(json!({ "detail": "Analytics API unavailable" }))).into_response()
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
