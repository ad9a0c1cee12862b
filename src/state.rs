//! Shared application state.

use std::sync::Arc;

use axum::http::HeaderMap;

use crate::{
    auth::{AuthError, Authenticator, Principal, StaticTokenAuthenticator, token_from_headers},
    config::Config,
    services::backend::BankBackend,
};

/// State shared with all handlers via axum's `State` extraction.
///
/// Everything here is read-only after startup; there is no shared mutable
/// state across requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub backend: Arc<dyn BankBackend>,
    pub authenticator: Arc<dyn Authenticator>,
}

impl AppState {
    pub fn new(config: Config, backend: Arc<dyn BankBackend>) -> Self {
        let authenticator = Arc::new(StaticTokenAuthenticator::new(
            config.session_token.clone(),
            config.demo_account_id.clone(),
        ));
        Self {
            config: Arc::new(config),
            backend,
            authenticator,
        }
    }

    /// Authenticate a request from its cookie header.
    pub fn principal(&self, headers: &HeaderMap) -> Result<Principal, AuthError> {
        let token = token_from_headers(headers);
        self.authenticator.authenticate(token.as_deref())
    }
}
