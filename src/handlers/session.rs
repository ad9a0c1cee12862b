//! Session cookie handlers.
//!
//! - POST /login - issue the session cookie, redirect to /home
//! - POST /logout - clear the session cookie, redirect to /

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Redirect},
};

use crate::{
    auth::{clear_session_cookie, session_cookie},
    state::AppState,
};

/// Sign in.
///
/// Submitted credentials are ignored entirely; the demo issues one fixed
/// token to anyone who posts the form. The cookie expires after the
/// configured TTL.
pub async fn login(State(state): State<AppState>) -> impl IntoResponse {
    let cookie = session_cookie(
        &state.config.session_token,
        state.config.session_ttl_seconds,
    );
    tracing::info!("session issued");
    ([(header::SET_COOKIE, cookie)], Redirect::to("/home"))
}

/// Sign out: expire the cookie and return to the login page.
pub async fn logout() -> impl IntoResponse {
    ([(header::SET_COOKIE, clear_session_cookie())], Redirect::to("/"))
}
