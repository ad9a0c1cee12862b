//! Session authentication.
//!
//! The demo authenticates with a single fixed bearer token carried in a
//! cookie. Verification is a plain string comparison against the configured
//! secret; there is no credential authority behind it. The `Authenticator`
//! trait is the seam where a real identity provider would plug in.

use axum::http::{HeaderMap, header};

/// Name of the session cookie.
pub const TOKEN_COOKIE: &str = "token";

/// Identity attached to an authenticated request.
///
/// Carries the account identifier the session resolves to. Kept distinct
/// from the raw token so handlers never treat the credential itself as an
/// account id.
#[derive(Debug, Clone)]
pub struct Principal {
    pub account_id: String,
}

/// Why a request could not be authenticated.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No `token` cookie was present on the request.
    #[error("missing session token")]
    MissingToken,

    /// A token was present but did not match the configured secret.
    #[error("invalid session token")]
    InvalidToken,
}

/// Pluggable credential verification.
///
/// A production implementation would call out to an identity provider and
/// return a per-user principal; this tier only ships the static demo
/// implementation below.
pub trait Authenticator: Send + Sync {
    /// Verify a session token and resolve it to a principal.
    fn authenticate(&self, token: Option<&str>) -> Result<Principal, AuthError>;
}

/// Demo authenticator: accepts exactly one configured token and maps it to
/// one configured account.
pub struct StaticTokenAuthenticator {
    secret: String,
    account_id: String,
}

impl StaticTokenAuthenticator {
    pub fn new(secret: impl Into<String>, account_id: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            account_id: account_id.into(),
        }
    }
}

impl Authenticator for StaticTokenAuthenticator {
    fn authenticate(&self, token: Option<&str>) -> Result<Principal, AuthError> {
        let token = token.ok_or(AuthError::MissingToken)?;
        if token == self.secret {
            Ok(Principal {
                account_id: self.account_id.clone(),
            })
        } else {
            Err(AuthError::InvalidToken)
        }
    }
}

/// Extract the session token from the `Cookie` request header, if any.
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == TOKEN_COOKIE).then(|| value.to_string())
    })
}

/// Build the `Set-Cookie` value that establishes a session.
pub fn session_cookie(token: &str, max_age_seconds: u64) -> String {
    format!("{TOKEN_COOKIE}={token}; Max-Age={max_age_seconds}; Path=/; HttpOnly")
}

/// Build the `Set-Cookie` value that clears the session.
pub fn clear_session_cookie() -> String {
    format!("{TOKEN_COOKIE}=; Max-Age=0; Path=/; HttpOnly")
}
