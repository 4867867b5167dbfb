use std::sync::Arc;

use futures::executor::block_on;

use super::*;
use crate::net::http::Method;
use crate::net::storage::{MemoryTokenStore, TokenStore};
use crate::net::test_support::{DEMO_USER_JSON, StubTransport};

fn remote(transport: Arc<StubTransport>, tokens: Arc<MemoryTokenStore>) -> RemoteSource {
    RemoteSource::new(HttpClient::new("/api", tokens, transport))
}

#[test]
fn entity_paths_keep_trailing_slash() {
    assert_eq!(prompt_path(12), "/analytics/prompts/12/");
    assert_eq!(project_path(3), "/projects/3/");
    assert_eq!(user_path(9), "/users/9/");
}

#[test]
fn login_posts_credentials() {
    let body = format!(r#"{{"token":"jwt-1","user":{DEMO_USER_JSON}}}"#);
    let transport = Arc::new(StubTransport::new().reply(200, &body));
    let source = remote(transport.clone(), Arc::new(MemoryTokenStore::new()));

    let creds = Credentials {
        username: "demo".to_owned(),
        password: "demo123".to_owned(),
    };
    let auth = block_on(source.login(&creds)).unwrap();
    assert_eq!(auth.token, "jwt-1");
    assert_eq!(auth.user.username, "demo");

    let request = transport.last_request();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.url, "/api/auth/login/");
    assert_eq!(
        request.body.as_deref(),
        Some(r#"{"username":"demo","password":"demo123"}"#)
    );
}

#[test]
fn prompts_request_carries_paging_and_search() {
    let transport = Arc::new(StubTransport::new().reply(200, r#"{"data":[],"total":0}"#));
    let source = remote(transport.clone(), Arc::new(MemoryTokenStore::with_token("t")));

    let query = PromptQuery {
        page: 1,
        page_size: 25,
        search: Some("tax".to_owned()),
    };
    let page = block_on(source.prompts(&query)).unwrap();
    assert_eq!(page.total, 0);

    let request = transport.last_request();
    assert_eq!(request.url, "/api/analytics/prompts/?page=2&page_size=25&search=tax");
    assert_eq!(request.header("Authorization"), Some("Bearer t"));
}

#[test]
fn update_project_uses_put() {
    let project = r#"{"id":3,"name":"Chatbot","description":"","apiKey":"k","createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-02T00:00:00Z","owner":1,"members":[1,2]}"#;
    let transport = Arc::new(StubTransport::new().reply(200, project));
    let source = remote(transport.clone(), Arc::new(MemoryTokenStore::new()));

    let input = ProjectInput {
        name: "Chatbot".to_owned(),
        description: String::new(),
    };
    let updated = block_on(source.update_project(3, &input)).unwrap();
    assert_eq!(updated.members, vec![1, 2]);

    let request = transport.last_request();
    assert_eq!(request.method, Method::Put);
    assert_eq!(request.url, "/api/projects/3/");
}

#[test]
fn delete_project_accepts_empty_body() {
    let transport = Arc::new(StubTransport::new().reply(204, ""));
    let source = remote(transport.clone(), Arc::new(MemoryTokenStore::new()));

    block_on(source.delete_project(5)).unwrap();
    assert_eq!(transport.last_request().method, Method::Delete);
}

#[test]
fn unauthorized_dashboard_call_clears_token() {
    let tokens = Arc::new(MemoryTokenStore::with_token("old"));
    let transport = Arc::new(StubTransport::new().reply(401, ""));
    let source = remote(transport, tokens.clone());

    assert_eq!(block_on(source.dashboard_stats()), Err(ApiError::Unauthorized));
    assert_eq!(tokens.load(), None);
}

#[test]
fn missing_prompt_is_not_found() {
    let transport = Arc::new(StubTransport::new().reply(404, r#"{"detail":"Not found."}"#));
    let source = remote(transport, Arc::new(MemoryTokenStore::new()));

    let err = block_on(source.prompt(999)).unwrap_err();
    assert!(err.is_not_found());
}
