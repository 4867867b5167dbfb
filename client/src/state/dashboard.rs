//! Dashboard view-model.
//!
//! The stats snapshot is fetched once on mount. The time-range selector only
//! narrows the prompts-per-day series already in hand.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use super::fetch::FetchState;
use crate::net::types::{DailyCount, DashboardStats, TimeRange};
use crate::util::format::format_count;

pub const DASHBOARD_FAILURE: &str = "Failed to fetch dashboard data. Please try again later.";

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    pub time_range: TimeRange,
    pub stats: FetchState<DashboardStats>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            time_range: TimeRange::default(),
            stats: FetchState::new(DASHBOARD_FAILURE),
        }
    }
}

impl DashboardState {
    /// The prompts-per-day points inside the selected range.
    pub fn visible_series(&self) -> Vec<DailyCount> {
        self.stats
            .data
            .as_ref()
            .map(|stats| trailing_window(&stats.prompts_per_day, self.time_range).to_vec())
            .unwrap_or_default()
    }
}

/// The last `range.window_days()` entries of `series`, or all of it.
pub fn trailing_window(series: &[DailyCount], range: TimeRange) -> &[DailyCount] {
    match range.window_days() {
        Some(days) if days < series.len() => &series[series.len() - days..],
        _ => series,
    }
}

/// One headline number on the dashboard.
#[derive(Clone, Debug, PartialEq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    /// Percentage change, when the API reports one.
    pub trend: Option<f64>,
    pub color: &'static str,
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn stat_cards(stats: &DashboardStats) -> Vec<StatCard> {
    let trend = |value: f64| (value != 0.0).then_some(value);
    vec![
        StatCard {
            title: "Total Prompts",
            value: format_count(stats.total_prompts),
            trend: trend(stats.prompts_trend),
            color: "#3498db",
        },
        StatCard {
            title: "Active Users",
            value: format_count(stats.total_users),
            trend: trend(stats.users_trend),
            color: "#2ecc71",
        },
        StatCard {
            title: "Avg. Latency (ms)",
            value: format_count(stats.avg_latency.round() as u64),
            trend: None,
            color: "#e67e22",
        },
        StatCard {
            title: "Total Tokens",
            value: format_count(stats.total_tokens),
            trend: None,
            color: "#9b59b6",
        },
    ]
}
