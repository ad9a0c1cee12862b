//! Aggregated view model for the home page.

use serde::Serialize;

use crate::models::transaction::TransactionRecord;

/// Everything the home page needs to render.
///
/// Balance and history come from the upstream services; the account lists are
/// fixed demo data, not derived from any store.
#[derive(Debug, Clone, Serialize)]
pub struct HomeView {
    /// Current balance in cents
    pub balance: i64,

    /// Transaction history, newest first as the history service returns it
    pub history: Vec<TransactionRecord>,

    pub external_accounts: Vec<ExternalAccount>,
    pub favorite_accounts: Vec<FavoriteAccount>,
}

/// A pseudo-external account offered as a deposit source.
#[derive(Debug, Clone, Serialize)]
pub struct ExternalAccount {
    pub label: String,
    pub number: String,
    pub routing: String,
}

/// A pseudo-internal account offered as a payment recipient.
#[derive(Debug, Clone, Serialize)]
pub struct FavoriteAccount {
    pub label: String,
    pub number: String,
}

/// Simulated external account data shown on every home page.
pub fn demo_external_accounts() -> Vec<ExternalAccount> {
    [
        ("External Checking", "012345654321", "45678"),
        ("External Savings", "991235345434", "00101"),
    ]
    .into_iter()
    .map(|(label, number, routing)| ExternalAccount {
        label: label.to_string(),
        number: number.to_string(),
        routing: routing.to_string(),
    })
    .collect()
}

/// Simulated favorite contacts shown on every home page.
pub fn demo_favorite_accounts() -> Vec<FavoriteAccount> {
    [("Friend 1", "1111111111"), ("Friend 2", "2222222222")]
        .into_iter()
        .map(|(label, number)| FavoriteAccount {
            label: label.to_string(),
            number: number.to_string(),
        })
        .collect()
}
