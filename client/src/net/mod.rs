//! Networking modules for the analytics API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns request shaping and the 401 policy, `remote` maps API
//! endpoints onto it, and `mock` serves generated data with the same
//! interface. Both backends implement `source::AnalyticsSource`.

pub mod http;
pub mod mock;
pub mod remote;
pub mod source;
pub mod storage;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;
