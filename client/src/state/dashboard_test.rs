use super::*;
use crate::net::mock::mock_stats;

fn days(n: usize) -> Vec<DailyCount> {
    (0..n)
        .map(|i| DailyCount {
            date: format!("d{i}"),
            count: i as u64,
        })
        .collect()
}

// =============================================================
// trailing_window
// =============================================================

#[test]
fn day_range_keeps_last_entry() {
    let series = days(10);
    let window = trailing_window(&series, TimeRange::Day);
    assert_eq!(window.len(), 1);
    assert_eq!(window[0].date, "d9");
}

#[test]
fn week_range_keeps_last_seven() {
    let series = days(30);
    let window = trailing_window(&series, TimeRange::Week);
    assert_eq!(window.len(), 7);
    assert_eq!(window[0].date, "d23");
}

#[test]
fn short_series_is_kept_whole() {
    let series = days(5);
    assert_eq!(trailing_window(&series, TimeRange::Month).len(), 5);
    assert_eq!(trailing_window(&series, TimeRange::Week).len(), 5);
}

#[test]
fn custom_range_keeps_everything() {
    let series = days(400);
    assert_eq!(trailing_window(&series, TimeRange::Custom).len(), 400);
    assert_eq!(trailing_window(&series, TimeRange::Year).len(), 365);
}

// =============================================================
// DashboardState
// =============================================================

#[test]
fn default_state_is_loading_week() {
    let state = DashboardState::default();
    assert_eq!(state.time_range, TimeRange::Week);
    assert!(state.stats.loading);
    assert!(state.visible_series().is_empty());
}

#[test]
fn changing_range_narrows_series_without_refetch() {
    let mut state = DashboardState::default();
    let generation = state.stats.begin();
    state.stats.finish(generation, Ok(mock_stats()));
    assert_eq!(state.visible_series().len(), 7);

    state.time_range = TimeRange::Day;
    let series = state.visible_series();
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].count, 93);
    assert!(state.stats.is_current(generation));
}

#[test]
fn failure_uses_dashboard_message() {
    let mut state = DashboardState::default();
    let generation = state.stats.begin();
    state
        .stats
        .finish(generation, Err(crate::error::ApiError::Network("down".to_owned())));
    assert_eq!(state.stats.error.as_deref(), Some(DASHBOARD_FAILURE));
}

// =============================================================
// stat_cards
// =============================================================

#[test]
fn stat_cards_format_headline_numbers() {
    let cards = stat_cards(&mock_stats());
    let titles: Vec<&str> = cards.iter().map(|c| c.title).collect();
    assert_eq!(titles, ["Total Prompts", "Active Users", "Avg. Latency (ms)", "Total Tokens"]);
    assert_eq!(cards[0].value, "1,248");
    assert_eq!(cards[0].trend, Some(15.3));
    assert_eq!(cards[2].value, "842");
    assert_eq!(cards[3].value, "1,356,789");
}

#[test]
fn zero_trend_is_hidden() {
    let mut stats = mock_stats();
    stats.users_trend = 0.0;
    assert_eq!(stat_cards(&stats)[1].trend, None);
}
