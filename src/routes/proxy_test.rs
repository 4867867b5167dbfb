use axum::Router;
use axum::http::HeaderValue;
use axum::routing::any;

use super::*;

// =============================================================================
// upstream_url
// =============================================================================

#[test]
fn upstream_url_strips_api_prefix() {
    assert_eq!(
        upstream_url("http://localhost:8000/api", "/api/analytics/dashboard/", None),
        "http://localhost:8000/api/analytics/dashboard/"
    );
}

#[test]
fn upstream_url_keeps_query_string() {
    assert_eq!(
        upstream_url("http://up.test/api/", "/api/analytics/prompts/", Some("page=2&page_size=10&search=rust")),
        "http://up.test/api/analytics/prompts/?page=2&page_size=10&search=rust"
    );
}

#[test]
fn upstream_url_ignores_empty_query() {
    assert_eq!(upstream_url("http://up.test", "/api/users/", Some("")), "http://up.test/users/");
}

#[test]
fn upstream_url_accepts_relative_path() {
    assert_eq!(upstream_url("http://up.test/api", "auth/me/", None), "http://up.test/api/auth/me/");
}

// =============================================================================
// forwarded_headers
// =============================================================================

#[test]
fn forwarded_headers_keeps_allow_list_only() {
    let mut incoming = HeaderMap::new();
    incoming.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
    incoming.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    incoming.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    incoming.insert(header::COOKIE, HeaderValue::from_static("session=1"));
    incoming.insert(header::HOST, HeaderValue::from_static("localhost:3000"));

    let out = forwarded_headers(&incoming);
    assert_eq!(out.len(), 3);
    assert_eq!(out.get(header::AUTHORIZATION).unwrap(), "Bearer abc");
    assert!(out.get(header::COOKIE).is_none());
    assert!(out.get(header::HOST).is_none());
}

// =============================================================================
// forward
// =============================================================================

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Response {
    let auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let payload = json!({
        "method": method.as_str(),
        "path": uri.path(),
        "query": uri.query(),
        "authorization": auth,
        "body": String::from_utf8_lossy(&body),
    });
    (StatusCode::CREATED, Json(payload)).into_response()
}

async fn spawn_upstream() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().route("/api/{*rest}", any(echo));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api")
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn forward_relays_request_and_response() {
    let upstream = spawn_upstream().await;
    let state = AppState::new(reqwest::Client::new(), &upstream);

    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer mock-jwt-token"));
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    let uri: Uri = "/api/projects/?page=1".parse().unwrap();

    let response = forward(
        State(state),
        Method::POST,
        uri,
        headers,
        Bytes::from_static(br#"{"name":"demo"}"#),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers().get(header::CONTENT_TYPE).unwrap(), "application/json");
    let echoed = body_json(response).await;
    assert_eq!(echoed["method"], "POST");
    assert_eq!(echoed["path"], "/api/projects/");
    assert_eq!(echoed["query"], "page=1");
    assert_eq!(echoed["authorization"], "Bearer mock-jwt-token");
    assert_eq!(echoed["body"], r#"{"name":"demo"}"#);
}

#[tokio::test]
async fn forward_unreachable_upstream_is_bad_gateway() {
    // Bind then drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let state = AppState::new(reqwest::Client::new(), &format!("http://{addr}/api"));
    let uri: Uri = "/api/auth/me/".parse().unwrap();
    let response = forward(State(state), Method::GET, uri, HeaderMap::new(), Bytes::new()).await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert_eq!(body["detail"], "Analytics API unavailable");
}
