//! Wire DTOs for the analytics API.
//!
//! DESIGN
//! ======
//! Field names follow the API's camelCase JSON. Optional aggregates carry
//! `#[serde(default)]` so partial responses still decode; the view layer
//! treats missing series as empty.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An authenticated user as returned by `/auth/me/` and `/auth/login/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    /// `admin` or a regular role name.
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl User {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

/// Login form payload for `POST /auth/login/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Token + identity returned by a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// One recorded LLM call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    pub id: u64,
    pub session_id: String,
    pub user_id: Option<u64>,
    pub project_id: u64,
    pub model_id: String,
    pub prompt_text: String,
    pub response_text: String,
    pub prompt_tokens: u32,
    pub response_tokens: u32,
    /// Round-trip latency in milliseconds.
    pub latency: u32,
    pub timestamp: DateTime<Utc>,
    /// Free-form tags; `category` and `language` are the common ones.
    #[serde(default)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

impl Prompt {
    #[must_use]
    pub fn total_tokens(&self) -> u64 {
        u64::from(self.prompt_tokens) + u64::from(self.response_tokens)
    }

    pub fn category(&self) -> Option<&str> {
        self.metadata_str("category")
    }

    pub fn language(&self) -> Option<&str> {
        self.metadata_str("language")
    }

    fn metadata_str(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).and_then(serde_json::Value::as_str)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: String,
    pub count: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelUsage {
    pub model: String,
    pub count: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

/// Aggregate snapshot served by `/analytics/dashboard/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_prompts: u64,
    pub total_users: u64,
    pub avg_latency: f64,
    pub total_tokens: u64,
    #[serde(default)]
    pub total_sessions: u64,
    #[serde(default)]
    pub active_users: u64,
    #[serde(default)]
    pub avg_feedback_score: f64,
    #[serde(default)]
    pub sessions_trend: f64,
    #[serde(default)]
    pub users_trend: f64,
    #[serde(default)]
    pub prompts_trend: f64,
    #[serde(default)]
    pub feedback_trend: f64,
    #[serde(default)]
    pub prompts_per_day: Vec<DailyCount>,
    #[serde(default)]
    pub model_usage: Vec<ModelUsage>,
    #[serde(default)]
    pub top_categories: Vec<CategoryCount>,
}

/// Per-model aggregate from `/analytics/models/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelStats {
    pub model: String,
    pub count: u64,
    pub avg_latency: f64,
    pub total_tokens: u64,
}

/// Per-user aggregate from `/analytics/users/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub user_id: u64,
    pub prompt_count: u64,
    pub total_tokens: u64,
}

/// A page of results plus the unpaged total.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub total: u64,
    /// 1-based page number.
    #[serde(default)]
    pub page: u64,
    #[serde(default)]
    pub page_size: u64,
    #[serde(default)]
    pub total_pages: u64,
}

/// Parameters for `/analytics/prompts/`.
///
/// `page` is the 0-based index the table works with; the API is 1-based.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptQuery {
    pub page: usize,
    pub page_size: usize,
    pub search: Option<String>,
}

impl PromptQuery {
    /// Query-string pairs in API form. `search` is omitted when blank.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", (self.page + 1).to_string()),
            ("page_size", self.page_size.to_string()),
        ];
        if let Some(search) = self.search_term() {
            params.push(("search", search.to_owned()));
        }
        params
    }

    /// The search text, if any non-whitespace was entered.
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// A client project tracked by the analytics backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub api_key: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub owner: u64,
    #[serde(default)]
    pub members: Vec<u64>,
}

/// Create/update payload for projects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProjectInput {
    pub name: String,
    pub description: String,
}

/// Partial user update; unset fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Window selector for the dashboard's time series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    Day,
    #[default]
    Week,
    Month,
    Year,
    Custom,
}

impl TimeRange {
    pub const ALL: [Self; 5] = [Self::Day, Self::Week, Self::Month, Self::Year, Self::Custom];

    pub fn label(self) -> &'static str {
        match self {
            Self::Day => "Last 24 Hours",
            Self::Week => "Last 7 Days",
            Self::Month => "Last 30 Days",
            Self::Year => "Last 12 Months",
            Self::Custom => "All Time",
        }
    }

    /// Number of trailing days shown, or `None` for everything.
    pub fn window_days(self) -> Option<usize> {
        match self {
            Self::Day => Some(1),
            Self::Week => Some(7),
            Self::Month => Some(30),
            Self::Year => Some(365),
            Self::Custom => None,
        }
    }
}
