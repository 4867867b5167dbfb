//! [`AnalyticsSource`] backed by the analytics REST API.
//!
//! Paths keep the API's trailing slashes; the base URL comes from
//! [`HttpClient`].

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

use async_trait::async_trait;

use super::http::HttpClient;
use super::source::AnalyticsSource;
use super::types::{
    AuthResponse, Credentials, DashboardStats, ModelStats, Paginated, Project, ProjectInput, Prompt,
    PromptQuery, User, UserStats, UserUpdate,
};
use crate::error::ApiError;

fn prompt_path(id: u64) -> String {
    format!("/analytics/prompts/{id}/")
}

fn project_path(id: u64) -> String {
    format!("/projects/{id}/")
}

fn user_path(id: u64) -> String {
    format!("/users/{id}/")
}

/// Remote API client.
#[derive(Clone)]
pub struct RemoteSource {
    http: HttpClient,
}

impl RemoteSource {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait(?Send)]
impl AnalyticsSource for RemoteSource {
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        self.http.post("/auth/login/", credentials).await
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        self.http.get("/auth/me/", &[]).await
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.http.get("/analytics/dashboard/", &[]).await
    }

    async fn prompts(&self, query: &PromptQuery) -> Result<Paginated<Prompt>, ApiError> {
        self.http.get("/analytics/prompts/", &query.to_params()).await
    }

    async fn prompt(&self, id: u64) -> Result<Prompt, ApiError> {
        self.http.get(&prompt_path(id), &[]).await
    }

    async fn model_stats(&self) -> Result<Vec<ModelStats>, ApiError> {
        self.http.get("/analytics/models/", &[]).await
    }

    async fn user_stats(&self) -> Result<Vec<UserStats>, ApiError> {
        self.http.get("/analytics/users/", &[]).await
    }

    async fn projects(&self) -> Result<Vec<Project>, ApiError> {
        self.http.get("/projects/", &[]).await
    }

    async fn project(&self, id: u64) -> Result<Project, ApiError> {
        self.http.get(&project_path(id), &[]).await
    }

    async fn create_project(&self, input: &ProjectInput) -> Result<Project, ApiError> {
        self.http.post("/projects/", input).await
    }

    async fn update_project(&self, id: u64, input: &ProjectInput) -> Result<Project, ApiError> {
        self.http.put(&project_path(id), input).await
    }

    async fn delete_project(&self, id: u64) -> Result<(), ApiError> {
        self.http.delete(&project_path(id)).await
    }

    async fn users(&self) -> Result<Vec<User>, ApiError> {
        self.http.get("/users/", &[]).await
    }

    async fn user(&self, id: u64) -> Result<User, ApiError> {
        self.http.get(&user_path(id), &[]).await
    }

    async fn update_user(&self, id: u64, update: &UserUpdate) -> Result<User, ApiError> {
        self.http.put(&user_path(id), update).await
    }
}
