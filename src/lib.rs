//! Bank demo frontend.
//!
//! A thin web tier for a simulated bank: it serves the login and home pages,
//! manages a trivial demo session cookie, and proxies every user action to
//! the upstream transactions, balances, and history services. All real
//! banking state lives upstream; this tier holds nothing.

pub mod auth;
pub mod config;
pub mod error;
pub mod format;
pub mod handlers;
pub mod models;
pub mod render;
pub mod routes;
pub mod services;
pub mod state;
