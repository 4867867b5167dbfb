//! In-memory [`AnalyticsSource`] for development builds and tests.
//!
//! DESIGN
//! ======
//! Prompts are generated once per source from a seeded RNG so paging and
//! search stay stable while the app is open. Aggregates (models, users) are
//! derived from that same set. Projects and users live behind a mutex so CRUD
//! calls observe their own writes.
//!
//! TRADE-OFFS
//! ==========
//! Latency is simulated only in the browser; native builds (tests, SSR)
//! resolve immediately regardless of the configured delays.

#![allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]

#[cfg(test)]
#[path = "mock_test.rs"]
mod mock_test;

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::source::AnalyticsSource;
use super::types::{
    AuthResponse, CategoryCount, Credentials, DailyCount, DashboardStats, ModelStats, ModelUsage, Paginated,
    Project, ProjectInput, Prompt, PromptQuery, User, UserStats, UserUpdate,
};
use crate::error::ApiError;

pub const MOCK_TOKEN: &str = "mock-jwt-token";
pub const MOCK_PROMPT_COUNT: usize = 50;
pub const MOCK_MODELS: [&str; 4] = ["gpt-4", "claude-3", "llama-3", "gemini"];
const MOCK_CATEGORIES: [&str; 4] = ["question", "instruction", "chat", "creative"];
const MOCK_LANGUAGES: [&str; 4] = ["en", "es", "fr", "de"];
const DEFAULT_SEED: u64 = 0x0b12_c5da;

/// Simulated round-trip latencies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MockDelays {
    pub session_check: Duration,
    pub login: Duration,
    pub fetch: Duration,
}

impl MockDelays {
    /// No latency.
    pub const fn none() -> Self {
        Self {
            session_check: Duration::ZERO,
            login: Duration::ZERO,
            fetch: Duration::ZERO,
        }
    }

    /// Latencies used when running in the browser.
    pub const fn browser() -> Self {
        Self {
            session_check: Duration::from_millis(500),
            login: Duration::from_millis(800),
            fetch: Duration::from_millis(1000),
        }
    }
}

async fn pause(delay: Duration) {
    #[cfg(feature = "hydrate")]
    {
        if !delay.is_zero() {
            gloo_timers::future::sleep(delay).await;
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = delay;
    }
}

/// The identity every mock login and session check resolves to.
pub fn demo_user() -> User {
    User {
        id: 1,
        username: "demo".to_owned(),
        email: "demo@example.com".to_owned(),
        role: "admin".to_owned(),
        first_name: None,
        last_name: None,
    }
}

/// Generate `count` prompts with ids `1..=count`, timestamped within the 30
/// days before `now`.
pub fn generate_prompts(count: usize, seed: u64, now: DateTime<Utc>) -> Vec<Prompt> {
    let mut rng = StdRng::seed_from_u64(seed);
    (1..=count as u64)
        .map(|id| {
            let user_id = rng.random_bool(0.7).then(|| rng.random_range(1..=100));
            let days_ago = rng.random_range(0..30);
            let mut metadata = serde_json::Map::new();
            metadata.insert(
                "category".to_owned(),
                pick(&mut rng, &MOCK_CATEGORIES).into(),
            );
            metadata.insert(
                "language".to_owned(),
                pick(&mut rng, &MOCK_LANGUAGES).into(),
            );
            Prompt {
                id,
                session_id: format!("session-{}", rng.random_range(0..100_u32)),
                user_id,
                project_id: rng.random_range(1..=5),
                model_id: pick(&mut rng, &MOCK_MODELS).to_owned(),
                prompt_text: format!("Sample prompt text {id}. This is a mock prompt for testing purposes."),
                response_text: format!("Sample response text {id}. This is a mock response for testing purposes."),
                prompt_tokens: rng.random_range(50..150),
                response_tokens: rng.random_range(100..400),
                latency: rng.random_range(500..2500),
                timestamp: now - chrono::Duration::days(days_ago),
                metadata,
            }
        })
        .collect()
}

fn pick<'a>(rng: &mut StdRng, options: &[&'a str]) -> &'a str {
    options[rng.random_range(0..options.len())]
}

/// Case-insensitive substring search over prompt and response text, then
/// slice out the requested page.
pub fn search_prompts(prompts: &[Prompt], query: &PromptQuery) -> Paginated<Prompt> {
    let needle = query.search_term().map(str::to_lowercase);
    let matches: Vec<&Prompt> = prompts
        .iter()
        .filter(|prompt| {
            needle.as_deref().is_none_or(|needle| {
                prompt.prompt_text.to_lowercase().contains(needle)
                    || prompt.response_text.to_lowercase().contains(needle)
            })
        })
        .collect();

    let page_size = query.page_size.max(1);
    let total = matches.len();
    let data = matches
        .into_iter()
        .skip(query.page.saturating_mul(page_size))
        .take(page_size)
        .cloned()
        .collect();
    Paginated {
        data,
        total: total as u64,
        page: query.page as u64 + 1,
        page_size: page_size as u64,
        total_pages: total.div_ceil(page_size) as u64,
    }
}

/// Fixed dashboard snapshot.
pub fn mock_stats() -> DashboardStats {
    let daily = [42, 53, 61, 48, 72, 85, 93];
    DashboardStats {
        total_prompts: 1248,
        total_users: 87,
        avg_latency: 842.0,
        total_tokens: 1_356_789,
        total_sessions: 1450,
        active_users: 65,
        avg_feedback_score: 4.7,
        sessions_trend: 12.5,
        users_trend: 8.2,
        prompts_trend: 15.3,
        feedback_trend: 0.3,
        prompts_per_day: daily
            .iter()
            .enumerate()
            .map(|(i, count)| DailyCount {
                date: format!("2023-06-{:02}", i + 1),
                count: *count,
            })
            .collect(),
        model_usage: [("gpt-4", 523), ("claude-3", 412), ("llama-3", 198), ("gemini", 115)]
            .into_iter()
            .map(|(model, count)| ModelUsage {
                model: model.to_owned(),
                count,
            })
            .collect(),
        top_categories: [("question", 487), ("instruction", 356), ("chat", 289), ("creative", 116)]
            .into_iter()
            .map(|(category, count)| CategoryCount {
                category: category.to_owned(),
                count,
            })
            .collect(),
    }
}

/// Per-model totals over `prompts`, ordered by descending count.
pub fn model_stats_for(prompts: &[Prompt]) -> Vec<ModelStats> {
    let mut by_model: BTreeMap<&str, (u64, u64, u64)> = BTreeMap::new();
    for prompt in prompts {
        let entry = by_model.entry(prompt.model_id.as_str()).or_default();
        entry.0 += 1;
        entry.1 += u64::from(prompt.latency);
        entry.2 += prompt.total_tokens();
    }
    let mut stats: Vec<ModelStats> = by_model
        .into_iter()
        .map(|(model, (count, latency, tokens))| ModelStats {
            model: model.to_owned(),
            count,
            avg_latency: latency as f64 / count as f64,
            total_tokens: tokens,
        })
        .collect();
    stats.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.model.cmp(&b.model)));
    stats
}

/// Per-user totals over `prompts`; anonymous prompts are skipped.
pub fn user_stats_for(prompts: &[Prompt]) -> Vec<UserStats> {
    let mut by_user: BTreeMap<u64, (u64, u64)> = BTreeMap::new();
    for prompt in prompts {
        if let Some(user_id) = prompt.user_id {
            let entry = by_user.entry(user_id).or_default();
            entry.0 += 1;
            entry.1 += prompt.total_tokens();
        }
    }
    by_user
        .into_iter()
        .map(|(user_id, (prompt_count, total_tokens))| UserStats {
            user_id,
            prompt_count,
            total_tokens,
        })
        .collect()
}

fn seed_projects(now: DateTime<Utc>) -> Vec<Project> {
    ["Support Bot", "Docs Search", "Sales Assistant"]
        .into_iter()
        .enumerate()
        .map(|(i, name)| Project {
            id: i as u64 + 1,
            name: name.to_owned(),
            description: format!("{name} analytics"),
            api_key: format!("mock-key-{}", i + 1),
            created_at: now,
            updated_at: now,
            owner: 1,
            members: vec![1],
        })
        .collect()
}

fn not_found(what: &str, id: u64) -> ApiError {
    ApiError::Status {
        status: 404,
        message: format!("{what} {id} not found"),
    }
}

/// Generated-data backend.
pub struct MockSource {
    prompts: Vec<Prompt>,
    projects: Mutex<Vec<Project>>,
    users: Mutex<Vec<User>>,
    delays: MockDelays,
    now: DateTime<Utc>,
}

impl MockSource {
    /// Fifty generated prompts with the default seed.
    pub fn new(now: DateTime<Utc>, delays: MockDelays) -> Self {
        Self::with_prompts(generate_prompts(MOCK_PROMPT_COUNT, DEFAULT_SEED, now), now, delays)
    }

    pub fn with_prompts(prompts: Vec<Prompt>, now: DateTime<Utc>, delays: MockDelays) -> Self {
        Self {
            prompts,
            projects: Mutex::new(seed_projects(now)),
            users: Mutex::new(vec![demo_user()]),
            delays,
            now,
        }
    }

    pub fn prompt_records(&self) -> &[Prompt] {
        &self.prompts
    }
}

#[async_trait(?Send)]
impl AnalyticsSource for MockSource {
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        pause(self.delays.login).await;
        log::debug!("mock login for {}", credentials.username);
        Ok(AuthResponse {
            token: MOCK_TOKEN.to_owned(),
            user: demo_user(),
        })
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        pause(self.delays.session_check).await;
        Ok(demo_user())
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        pause(self.delays.fetch).await;
        Ok(mock_stats())
    }

    async fn prompts(&self, query: &PromptQuery) -> Result<Paginated<Prompt>, ApiError> {
        pause(self.delays.fetch).await;
        Ok(search_prompts(&self.prompts, query))
    }

    async fn prompt(&self, id: u64) -> Result<Prompt, ApiError> {
        pause(self.delays.fetch).await;
        self.prompts
            .iter()
            .find(|prompt| prompt.id == id)
            .cloned()
            .ok_or_else(|| not_found("prompt", id))
    }

    async fn model_stats(&self) -> Result<Vec<ModelStats>, ApiError> {
        pause(self.delays.fetch).await;
        Ok(model_stats_for(&self.prompts))
    }

    async fn user_stats(&self) -> Result<Vec<UserStats>, ApiError> {
        pause(self.delays.fetch).await;
        Ok(user_stats_for(&self.prompts))
    }

    async fn projects(&self) -> Result<Vec<Project>, ApiError> {
        pause(self.delays.fetch).await;
        Ok(self.projects.lock().unwrap_or_else(PoisonError::into_inner).clone())
    }

    async fn project(&self, id: u64) -> Result<Project, ApiError> {
        pause(self.delays.fetch).await;
        self.projects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|project| project.id == id)
            .cloned()
            .ok_or_else(|| not_found("project", id))
    }

    async fn create_project(&self, input: &ProjectInput) -> Result<Project, ApiError> {
        pause(self.delays.fetch).await;
        let mut projects = self.projects.lock().unwrap_or_else(PoisonError::into_inner);
        let id = projects.iter().map(|project| project.id).max().unwrap_or(0) + 1;
        let project = Project {
            id,
            name: input.name.clone(),
            description: input.description.clone(),
            api_key: format!("mock-key-{id}"),
            created_at: self.now,
            updated_at: self.now,
            owner: demo_user().id,
            members: vec![demo_user().id],
        };
        projects.push(project.clone());
        Ok(project)
    }

    async fn update_project(&self, id: u64, input: &ProjectInput) -> Result<Project, ApiError> {
        pause(self.delays.fetch).await;
        let mut projects = self.projects.lock().unwrap_or_else(PoisonError::into_inner);
        let project = projects
            .iter_mut()
            .find(|project| project.id == id)
            .ok_or_else(|| not_found("project", id))?;
        project.name.clone_from(&input.name);
        project.description.clone_from(&input.description);
        project.updated_at = self.now;
        Ok(project.clone())
    }

    async fn delete_project(&self, id: u64) -> Result<(), ApiError> {
        pause(self.delays.fetch).await;
        let mut projects = self.projects.lock().unwrap_or_else(PoisonError::into_inner);
        let before = projects.len();
        projects.retain(|project| project.id != id);
        if projects.len() == before {
            return Err(not_found("project", id));
        }
        Ok(())
    }

    async fn users(&self) -> Result<Vec<User>, ApiError> {
        pause(self.delays.fetch).await;
        Ok(self.users.lock().unwrap_or_else(PoisonError::into_inner).clone())
    }

    async fn user(&self, id: u64) -> Result<User, ApiError> {
        pause(self.delays.fetch).await;
        self.users
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|user| user.id == id)
            .cloned()
            .ok_or_else(|| not_found("user", id))
    }

    async fn update_user(&self, id: u64, update: &UserUpdate) -> Result<User, ApiError> {
        pause(self.delays.fetch).await;
        let mut users = self.users.lock().unwrap_or_else(PoisonError::into_inner);
        let user = users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or_else(|| not_found("user", id))?;
        if let Some(email) = &update.email {
            user.email.clone_from(email);
        }
        if let Some(first_name) = &update.first_name {
            user.first_name = Some(first_name.clone());
        }
        if let Some(last_name) = &update.last_name {
            user.last_name = Some(last_name.clone());
        }
        if let Some(role) = &update.role {
            user.role.clone_from(role);
        }
        Ok(user.clone())
    }
}
