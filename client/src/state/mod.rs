//! Client state: the shared session plus per-page view-models.
//!
//! ARCHITECTURE
//! ============
//! `session` is the only state shared across pages. The view-models
//! (`dashboard`, `prompts`) are plain structs the pages wrap in `RwSignal`s;
//! `fetch` holds the generation logic they share.

pub mod dashboard;
pub mod fetch;
pub mod layout;
pub mod prompts;
pub mod session;
