use super::*;

// =============================================================
// is_active
// =============================================================

#[test]
fn root_matches_only_itself() {
    assert!(is_active("/", "/"));
    assert!(!is_active("/", "/prompts"));
}

#[test]
fn other_paths_match_by_prefix() {
    assert!(is_active("/prompts", "/prompts"));
    assert!(is_active("/prompts", "/prompts/12"));
    assert!(!is_active("/prompts", "/"));
    assert!(!is_active("/models", "/model-management"));
}

// =============================================================
// Menu
// =============================================================

#[test]
fn menu_lists_sections_in_order() {
    let labels: Vec<&str> = NAV_MENU
        .iter()
        .map(|entry| match entry {
            NavEntry::Link(link) => link.label,
            NavEntry::Group { label, .. } => *label,
        })
        .collect();
    assert_eq!(labels, ["Dashboard", "Analytics", "Models", "Feedback", "Settings"]);
}

#[test]
fn analytics_group_holds_prompts_models_users() {
    let NavEntry::Group { children, .. } = NAV_MENU[1] else {
        panic!("analytics should be a group");
    };
    let paths: Vec<&str> = children.iter().map(|link| link.path).collect();
    assert_eq!(paths, ["/prompts", "/models", "/users"]);
}

#[test]
fn three_static_notifications() {
    assert_eq!(NOTIFICATIONS.len(), 3);
}

// =============================================================
// LayoutState
// =============================================================

#[test]
fn narrow_layout_starts_closed() {
    assert!(!LayoutState::new(false).sidebar_open);
    assert!(LayoutState::new(true).sidebar_open);
    assert!(LayoutState::new(false).analytics_open);
}

#[test]
fn navigation_closes_drawer_only_when_narrow() {
    let mut state = LayoutState::new(true);
    state.navigated(true);
    assert!(state.sidebar_open);

    let mut state = LayoutState::new(false);
    state.toggle_sidebar();
    state.navigated(false);
    assert!(!state.sidebar_open);
}

#[test]
fn menus_are_mutually_exclusive() {
    let mut state = LayoutState::default();
    state.toggle_notifications();
    state.toggle_account();
    assert!(state.account_open);
    assert!(!state.notifications_open);
    state.close_menus();
    assert!(!state.account_open);
}
