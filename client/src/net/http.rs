//! Authenticated HTTP wrapper used by every remote analytics call.
//!
//! SYSTEM CONTEXT
//! ==============
//! `RemoteSource` issues all requests through one [`HttpClient`]. The client
//! resolves paths against the configured base URL, attaches the persisted
//! bearer token, and applies the global authorization policy.
//!
//! ERROR HANDLING
//! ==============
//! A 401 clears the token store and fires the `on_unauthorized` hook before
//! the caller sees [`ApiError::Unauthorized`]. The app wires that hook to
//! session expiry, which sends the route guard back to `/login`. Every other
//! failure is returned to the caller untouched.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::storage::TokenStore;
use crate::error::ApiError;

/// HTTP verbs used by the analytics API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        })
    }
}

/// Fully prepared request handed to a [`Transport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<String>,
}

impl RawRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status + body of a completed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends prepared requests. Browser builds use [`FetchTransport`].
#[async_trait(?Send)]
pub trait Transport: Send + Sync {
    async fn send(&self, request: RawRequest) -> Result<RawResponse, ApiError>;
}

/// `fetch`-backed transport via `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: RawRequest) -> Result<RawResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Delete => Request::delete(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let response = match request.body {
                Some(body) => builder
                    .body(body)
                    .map_err(|e| ApiError::Network(e.to_string()))?
                    .send()
                    .await,
                None => builder.send().await,
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            Ok(RawResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}

/// Callback fired after a 401 has cleared the token.
pub type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

/// Base-URL + bearer-token wrapper around a [`Transport`].
#[derive(Clone)]
pub struct HttpClient {
    base_url: String,
    tokens: Arc<dyn TokenStore>,
    transport: Arc<dyn Transport>,
    on_unauthorized: Option<UnauthorizedHook>,
}

impl HttpClient {
    pub fn new(base_url: &str, tokens: Arc<dyn TokenStore>, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            tokens,
            transport,
            on_unauthorized: None,
        }
    }

    /// Install the policy invoked on authorization failure.
    #[must_use]
    pub fn on_unauthorized(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_unauthorized = Some(Arc::new(hook));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET` and decode JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-2xx status, or an
    /// undecodable body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, params: &[(&str, String)]) -> Result<T, ApiError> {
        let response = self.execute(Method::Get, path, params, None).await?;
        decode(&response)
    }

    /// `POST` a JSON body and decode the JSON reply.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::get`].
    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let body = serde_json::to_string(body)?;
        let response = self.execute(Method::Post, path, &[], Some(body)).await?;
        decode(&response)
    }

    /// `PUT` a JSON body and decode the JSON reply.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::get`].
    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let body = serde_json::to_string(body)?;
        let response = self.execute(Method::Put, path, &[], Some(body)).await?;
        decode(&response)
    }

    /// `DELETE`; any success body is ignored.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::get`].
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(Method::Delete, path, &[], None).await.map(|_| ())
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, String)],
        body: Option<String>,
    ) -> Result<RawResponse, ApiError> {
        let request = self.prepare(method, path, params, body);
        let response = self.transport.send(request).await?;
        self.screen(method, path, response)
    }

    /// Resolve the URL and attach default and bearer headers.
    fn prepare(&self, method: Method, path: &str, params: &[(&str, String)], body: Option<String>) -> RawRequest {
        let mut headers = vec![("Content-Type", "application/json".to_owned())];
        if let Some(token) = self.tokens.load() {
            headers.push(("Authorization", format!("Bearer {token}")));
        }
        RawRequest {
            method,
            url: endpoint_url(&self.base_url, path, params),
            headers,
            body,
        }
    }

    /// Apply the status policy to a completed response.
    fn screen(&self, method: Method, path: &str, response: RawResponse) -> Result<RawResponse, ApiError> {
        if response.status == 401 {
            log::warn!("{method} {path} unauthorized; clearing session token");
            self.tokens.clear();
            if let Some(hook) = &self.on_unauthorized {
                hook();
            }
            return Err(ApiError::Unauthorized);
        }
        if !response.is_success() {
            return Err(ApiError::from_status(response.status, &response.body));
        }
        Ok(response)
    }
}

fn decode<T: DeserializeOwned>(response: &RawResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(ApiError::from)
}

/// Join `base` and `path` and append URL-encoded query pairs.
pub fn endpoint_url(base: &str, path: &str, params: &[(&str, String)]) -> String {
    let mut url = format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    if !params.is_empty() {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params.iter().map(|(key, value)| (*key, value.as_str())))
            .finish();
        url.push('?');
        url.push_str(&query);
    }
    url
}
