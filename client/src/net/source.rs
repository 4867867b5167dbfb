//! Data-access interface shared by the mock and remote backends.
//!
//! ARCHITECTURE
//! ============
//! Pages and the session store only see [`AnalyticsSource`]. The concrete
//! implementation (`MockSource` or `RemoteSource`) is chosen once in
//! `services::AppServices::compose`, so no view branches on the data mode.

use async_trait::async_trait;

use super::types::{
    AuthResponse, Credentials, DashboardStats, ModelStats, Paginated, Project, ProjectInput, Prompt,
    PromptQuery, User, UserStats, UserUpdate,
};
use crate::error::ApiError;

/// Every analytics API operation the dashboard consumes.
#[async_trait(?Send)]
pub trait AnalyticsSource: Send + Sync {
    /// Exchange credentials for a bearer token and identity.
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError>;

    /// Identity behind the persisted token.
    async fn current_user(&self) -> Result<User, ApiError>;

    async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError>;

    /// One page of prompts matching the query.
    async fn prompts(&self, query: &PromptQuery) -> Result<Paginated<Prompt>, ApiError>;

    async fn prompt(&self, id: u64) -> Result<Prompt, ApiError>;

    async fn model_stats(&self) -> Result<Vec<ModelStats>, ApiError>;

    async fn user_stats(&self) -> Result<Vec<UserStats>, ApiError>;

    async fn projects(&self) -> Result<Vec<Project>, ApiError>;

    async fn project(&self, id: u64) -> Result<Project, ApiError>;

    async fn create_project(&self, input: &ProjectInput) -> Result<Project, ApiError>;

    async fn update_project(&self, id: u64, input: &ProjectInput) -> Result<Project, ApiError>;

    async fn delete_project(&self, id: u64) -> Result<(), ApiError>;

    async fn users(&self) -> Result<Vec<User>, ApiError>;

    async fn user(&self, id: u64) -> Result<User, ApiError>;

    async fn update_user(&self, id: u64, update: &UserUpdate) -> Result<User, ApiError>;
}
