//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the dashboard chrome, charts, and prompt views while
//! reading session, layout, and viewport state from Leptos context.

pub mod charts;
pub mod layout;
pub mod navbar;
pub mod prompt_table;
pub mod route_guard;
pub mod sidebar;
pub mod stat_card;
pub mod status;
