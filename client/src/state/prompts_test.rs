use chrono::TimeZone;
use chrono::Utc;

use super::*;
use crate::net::mock::{generate_prompts, search_prompts};

fn page_of(total: u64, rows: usize) -> Paginated<Prompt> {
    let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
    Paginated {
        data: generate_prompts(rows, 3, now),
        total,
        page: 1,
        page_size: 10,
        total_pages: 0,
    }
}

fn loaded(total: u64) -> PromptsState {
    let mut state = PromptsState::default();
    let generation = state.list.begin();
    state.apply(generation, Ok(page_of(total, 10)));
    state
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn defaults_to_first_page_of_ten() {
    let state = PromptsState::default();
    assert_eq!(state.query(), PromptQuery {
        page: 0,
        page_size: 10,
        search: None,
    });
    assert!(state.list.loading);
    assert!(state.rows().is_empty());
}

#[test]
fn mobile_drops_largest_page_size() {
    assert_eq!(page_size_options(false), &[5, 10, 25, 50]);
    assert_eq!(page_size_options(true), &[5, 10, 25]);
}

// =============================================================
// Query changes
// =============================================================

#[test]
fn search_resets_page() {
    let mut state = loaded(50);
    state.set_page(3);
    for text in ["a", "ab", "", "tax"] {
        state.set_search(text);
        assert_eq!(state.query().page, 0);
        state.set_page(2);
    }
}

#[test]
fn page_size_change_resets_page() {
    let mut state = loaded(50);
    state.set_page(4);
    state.set_page_size(25);
    assert_eq!(state.query(), PromptQuery {
        page: 0,
        page_size: 25,
        search: None,
    });
}

#[test]
fn narrowing_to_phone_snaps_fifty_rows_to_twenty_five() {
    let mut state = loaded(50);
    state.set_page_size(50);
    state.set_page(1);

    assert!(state.fit_page_size(true));
    assert_eq!(state.page_size, 25);
    assert_eq!(state.page, 0);
    assert!(page_size_options(true).contains(&state.query().page_size));
}

#[test]
fn offered_page_size_is_kept() {
    let mut state = loaded(50);
    state.set_page_size(25);
    state.set_page(1);

    assert!(!state.fit_page_size(true));
    assert!(!state.fit_page_size(false));
    assert_eq!(state.page_size, 25);
    assert_eq!(state.page, 1);
}

#[test]
fn blank_search_is_omitted_from_query() {
    let mut state = PromptsState::default();
    state.set_search("   ");
    assert_eq!(state.query().search, None);
    state.set_search(" tax ");
    assert_eq!(state.query().search.as_deref(), Some(" tax "));
}

#[test]
fn unchanged_input_yields_equal_query() {
    let mut state = PromptsState::default();
    state.set_search("tax");
    let before = state.query();
    state.set_search("tax");
    assert_eq!(state.query(), before);
}

// =============================================================
// Results
// =============================================================

#[test]
fn apply_sets_rows_and_total() {
    let state = loaded(42);
    assert_eq!(state.rows().len(), 10);
    assert_eq!(state.total, 42);
    assert_eq!(state.total_pages(), 5);
}

#[test]
fn failed_fetch_keeps_rows_and_total() {
    let mut state = loaded(42);
    let generation = state.list.begin();
    state.apply(generation, Err(ApiError::Network("down".to_owned())));
    assert_eq!(state.total, 42);
    assert_eq!(state.rows().len(), 10);
    assert_eq!(state.list.error.as_deref(), Some(PROMPTS_FAILURE));
}

#[test]
fn stale_page_does_not_move_total() {
    let mut state = PromptsState::default();
    let old = state.list.begin();
    let new = state.list.begin();
    assert!(state.apply(new, Ok(page_of(3, 3))));
    assert!(!state.apply(old, Ok(page_of(50, 10))));
    assert_eq!(state.total, 3);
    assert_eq!(state.rows().len(), 3);
}

#[test]
fn mock_search_page_respects_page_size() {
    let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
    let mut records = generate_prompts(50, 9, now);
    for id in [2, 20, 40] {
        records[id - 1].prompt_text = format!("refund request {id}");
    }

    let mut state = PromptsState::default();
    state.set_page_size(5);
    state.set_search("REFUND");
    let generation = state.list.begin();
    state.apply(generation, Ok(search_prompts(&records, &state.query())));

    assert_eq!(state.total, 3);
    assert!(state.rows().len() <= 5);
    assert_eq!(state.rows().len(), 3);
}

// =============================================================
// Pagination caption
// =============================================================

#[test]
fn range_label_clamps_to_total() {
    let mut state = loaded(42);
    assert_eq!(state.range_label(), "1-10 of 42");
    state.set_page(4);
    assert_eq!(state.range_label(), "41-42 of 42");
    assert!(state.has_previous());
    assert!(!state.has_next());
}

#[test]
fn empty_range_label() {
    let state = loaded(0);
    assert_eq!(state.range_label(), "0-0 of 0");
    assert!(!state.has_next());
}

// =============================================================
// Detail
// =============================================================

#[test]
fn selecting_row_starts_detail_fetch() {
    let mut state = loaded(42);
    let generation = state.select(7);
    assert_eq!(state.selected, Some(7));
    assert!(state.detail.loading);

    let prompt = state.rows()[0].clone();
    assert!(state.apply_detail(generation, Ok(prompt.clone())));
    assert_eq!(state.detail.data, Some(prompt));
}

#[test]
fn closed_detail_ignores_late_result() {
    let mut state = loaded(42);
    let generation = state.select(7);
    state.close_detail();
    let prompt = state.rows()[0].clone();
    assert!(!state.apply_detail(generation, Ok(prompt)));
    assert_eq!(state.detail.data, None);
}

#[test]
fn reselecting_discards_previous_detail() {
    let mut state = loaded(42);
    let first = state.select(1);
    let second = state.select(2);
    let rows = state.rows().to_vec();
    assert!(state.apply_detail(second, Ok(rows[1].clone())));
    assert!(!state.apply_detail(first, Ok(rows[0].clone())));
    assert_eq!(state.detail.data.as_ref().map(|p| p.id), Some(rows[1].id));
}
