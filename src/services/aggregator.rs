//! Home page view composition.

use crate::{
    models::view::{HomeView, demo_external_accounts, demo_favorite_accounts},
    services::backend::{BackendError, BankBackend},
};

/// Fetch balance and history for an account and merge them with the demo
/// account lists into the home page view model.
///
/// The two reads are issued concurrently and both must succeed; failure of
/// either propagates to the caller and surfaces as an opaque server error.
/// Nothing is cached, every page load re-fetches.
pub async fn build_home_view(
    backend: &dyn BankBackend,
    account_id: &str,
) -> Result<HomeView, BackendError> {
    let (balance, history) = tokio::join!(
        backend.fetch_balance(account_id),
        backend.fetch_history(account_id),
    );

    Ok(HomeView {
        balance: balance?,
        history: history?,
        external_accounts: demo_external_accounts(),
        favorite_accounts: demo_favorite_accounts(),
    })
}
