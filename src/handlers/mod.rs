//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Authenticates the request from its session cookie
//! 2. Calls upstream services as needed
//! 3. Returns a rendered page, a redirect, or an error status

/// Login/home page views
pub mod pages;
/// Payment and deposit submission
pub mod payments;
/// Session cookie issue/revoke
pub mod session;
