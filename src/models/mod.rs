//! Data models exchanged with the browser and the upstream services.
//!
//! Everything here is transient and request-scoped; this tier persists nothing.

/// Transaction wire types and submitted forms
pub mod transaction;
/// Aggregated home page view model
pub mod view;
