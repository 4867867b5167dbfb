//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages compose layout, components, and a page-local view-model. Data comes
//! from the `AnalyticsSource` in the `AppServices` context.

pub mod dashboard;
pub mod login;
pub mod prompts;
