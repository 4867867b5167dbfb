//! Pure helpers shared by components and pages.

pub mod auth;
pub mod breakpoint;
pub mod chart_math;
pub mod format;
