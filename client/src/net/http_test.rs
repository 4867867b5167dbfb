use std::sync::atomic::{AtomicUsize, Ordering};

use futures::executor::block_on;

use super::*;
use crate::net::storage::MemoryTokenStore;
use crate::net::test_support::StubTransport;

fn client_with(tokens: Arc<MemoryTokenStore>, transport: Arc<StubTransport>) -> HttpClient {
    HttpClient::new("http://api.test/api/", tokens, transport)
}

#[derive(Debug, serde::Deserialize, PartialEq)]
struct Ping {
    ok: bool,
}

// =============================================================
// URL building
// =============================================================

#[test]
fn endpoint_url_joins_without_double_slashes() {
    assert_eq!(endpoint_url("/api/", "/auth/me/", &[]), "/api/auth/me/");
    assert_eq!(endpoint_url("/api", "auth/me/", &[]), "/api/auth/me/");
}

#[test]
fn endpoint_url_encodes_query_values() {
    let url = endpoint_url(
        "/api",
        "/analytics/prompts/",
        &[("page", "1".to_owned()), ("search", "why & how".to_owned())],
    );
    assert_eq!(url, "/api/analytics/prompts/?page=1&search=why+%26+how");
}

#[test]
fn base_url_is_normalized() {
    let client = client_with(Arc::new(MemoryTokenStore::new()), Arc::new(StubTransport::new()));
    assert_eq!(client.base_url(), "http://api.test/api");
}

// =============================================================
// Bearer token
// =============================================================

#[test]
fn bearer_token_attached_when_present() {
    let tokens = Arc::new(MemoryTokenStore::with_token("secret"));
    let transport = Arc::new(StubTransport::new().reply(200, r#"{"ok":true}"#));
    let client = client_with(tokens, transport.clone());

    let ping: Ping = block_on(client.get("/ping/", &[])).unwrap();
    assert_eq!(ping, Ping { ok: true });

    let request = transport.last_request();
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.url, "http://api.test/api/ping/");
    assert_eq!(request.header("authorization"), Some("Bearer secret"));
    assert_eq!(request.header("Content-Type"), Some("application/json"));
}

#[test]
fn no_authorization_header_without_token() {
    let transport = Arc::new(StubTransport::new().reply(200, r#"{"ok":true}"#));
    let client = client_with(Arc::new(MemoryTokenStore::new()), transport.clone());

    let _: Ping = block_on(client.get("/ping/", &[])).unwrap();
    assert_eq!(transport.last_request().header("Authorization"), None);
}

#[test]
fn post_sends_json_body() {
    let transport = Arc::new(StubTransport::new().reply(201, r#"{"ok":true}"#));
    let client = client_with(Arc::new(MemoryTokenStore::new()), transport.clone());

    let _: Ping = block_on(client.post("/projects/", &serde_json::json!({ "name": "A" }))).unwrap();
    let request = transport.last_request();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.body.as_deref(), Some(r#"{"name":"A"}"#));
}

// =============================================================
// Authorization policy
// =============================================================

#[test]
fn unauthorized_clears_token_and_fires_hook() {
    let tokens = Arc::new(MemoryTokenStore::with_token("stale"));
    let transport = Arc::new(StubTransport::new().reply(401, r#"{"detail":"expired"}"#));
    let fired = Arc::new(AtomicUsize::new(0));
    let fired_hook = fired.clone();
    let client = client_with(tokens.clone(), transport).on_unauthorized(move || {
        fired_hook.fetch_add(1, Ordering::SeqCst);
    });

    let result: Result<Ping, ApiError> = block_on(client.get("/analytics/dashboard/", &[]));
    assert_eq!(result, Err(ApiError::Unauthorized));
    assert_eq!(tokens.load(), None);
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[test]
fn unauthorized_policy_applies_to_every_verb() {
    let tokens = Arc::new(MemoryTokenStore::with_token("stale"));
    let transport = Arc::new(StubTransport::new().reply(401, ""));
    let client = client_with(tokens.clone(), transport);

    assert_eq!(block_on(client.delete("/projects/3/")), Err(ApiError::Unauthorized));
    assert_eq!(tokens.load(), None);
}

#[test]
fn other_errors_leave_token_alone() {
    let tokens = Arc::new(MemoryTokenStore::with_token("keep"));
    let transport = Arc::new(StubTransport::new().reply(500, r#"{"detail":"db down"}"#));
    let fired = Arc::new(AtomicUsize::new(0));
    let fired_hook = fired.clone();
    let client = client_with(tokens.clone(), transport).on_unauthorized(move || {
        fired_hook.fetch_add(1, Ordering::SeqCst);
    });

    let result: Result<Ping, ApiError> = block_on(client.get("/analytics/dashboard/", &[]));
    assert_eq!(
        result,
        Err(ApiError::Status {
            status: 500,
            message: "db down".to_owned()
        })
    );
    assert_eq!(tokens.load().as_deref(), Some("keep"));
    assert_eq!(fired.load(Ordering::SeqCst), 0);
}

#[test]
fn transport_errors_pass_through() {
    let transport = Arc::new(StubTransport::new().fail(ApiError::Network("offline".to_owned())));
    let client = client_with(Arc::new(MemoryTokenStore::new()), transport);

    let result: Result<Ping, ApiError> = block_on(client.get("/ping/", &[]));
    assert_eq!(result, Err(ApiError::Network("offline".to_owned())));
}

#[test]
fn malformed_body_is_a_decode_error() {
    let transport = Arc::new(StubTransport::new().reply(200, "<html>"));
    let client = client_with(Arc::new(MemoryTokenStore::new()), transport);

    let result: Result<Ping, ApiError> = block_on(client.get("/ping/", &[]));
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

#[test]
fn fetch_transport_is_unavailable_outside_browser() {
    let request = RawRequest {
        method: Method::Get,
        url: "/api/auth/me/".to_owned(),
        headers: Vec::new(),
        body: None,
    };
    assert_eq!(block_on(FetchTransport.send(request)), Err(ApiError::Unavailable));
}
