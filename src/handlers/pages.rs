//! Page view handlers.
//!
//! - GET / - login page, or redirect to /home when already signed in
//! - GET /home - aggregated account view, or redirect to / when not

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::{error::AppError, render, services::aggregator, state::AppState};

/// Login page.
///
/// A browser that already holds a valid session cookie is sent straight to
/// the home page.
pub async fn login_page(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if state.principal(&headers).is_ok() {
        return Redirect::to("/home").into_response();
    }
    Html(render::login_page()).into_response()
}

/// Query parameters accepted by the home page.
#[derive(Debug, Deserialize)]
pub struct HomeParams {
    /// Outcome flag set by a redirect from /payment or /deposit
    pub alert: Option<String>,
}

/// Home page.
///
/// Requires a valid session cookie; unauthenticated browsers are redirected
/// to the login page rather than receiving a 401. Balance and history are
/// fetched concurrently from the upstream services on every load; if either
/// fetch fails the error propagates and surfaces as an opaque 502.
pub async fn home(
    State(state): State<AppState>,
    Query(params): Query<HomeParams>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let principal = match state.principal(&headers) {
        Ok(principal) => principal,
        Err(_) => return Ok(Redirect::to("/").into_response()),
    };

    let view = aggregator::build_home_view(state.backend.as_ref(), &principal.account_id).await?;
    Ok(Html(render::home_page(&view, params.alert.as_deref())).into_response())
}
