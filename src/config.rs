//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.
//! The struct is built once at startup and passed to handlers through application state;
//! handler logic never reads the process environment directly.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `PORT` (required): HTTP server port
/// - `TRANSACTIONS_API_ADDR` (required): host:port of the transactions service
/// - `BALANCES_API_ADDR` (required): host:port of the balances service
/// - `HISTORY_API_ADDR` (required): host:port of the history service
/// - `LOCAL_ROUTING_NUM` (required): routing number of this bank
/// - `SESSION_TOKEN` (optional): fixed demo session token, defaults to "12345"
/// - `DEMO_ACCOUNT_ID` (optional): account id the token maps to, defaults to "12345"
/// - `SESSION_TTL_SECONDS` (optional): session cookie max-age, defaults to 300
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,

    pub transactions_api_addr: String,
    pub balances_api_addr: String,
    pub history_api_addr: String,

    pub local_routing_num: String,

    #[serde(default = "default_session_token")]
    pub session_token: String,

    #[serde(default = "default_demo_account_id")]
    pub demo_account_id: String,

    #[serde(default = "default_session_ttl")]
    pub session_ttl_seconds: u64,
}

/// Placeholder credential for the demo login flow.
fn default_session_token() -> String {
    "12345".to_string()
}

/// Account the demo token resolves to. A real identity provider would
/// supply this per user.
fn default_demo_account_id() -> String {
    "12345".to_string()
}

fn default_session_ttl() -> u64 {
    300
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the required variables (PORT, the three
    /// service addresses, LOCAL_ROUTING_NUM) are unset or unparseable.
    pub fn from_env() -> Result<Self, envy::Error> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Field names are automatically converted: balances_api_addr -> BALANCES_API_ADDR
        envy::from_env::<Config>()
    }

    /// Full URL of the transaction submission endpoint.
    pub fn transactions_uri(&self) -> String {
        format!("http://{}/new_transaction", self.transactions_api_addr)
    }

    /// Full URL of the balance lookup endpoint.
    pub fn balances_uri(&self) -> String {
        format!("http://{}/get_balance", self.balances_api_addr)
    }

    /// Full URL of the transaction history endpoint.
    pub fn history_uri(&self) -> String {
        format!("http://{}/get_history", self.history_api_addr)
    }
}
