//! Clients for the upstream bank services.
//!
//! All real banking state lives behind three HTTP collaborators: the balances
//! service, the history service, and the transactions service. This module
//! defines the `BankBackend` trait the rest of the app programs against and
//! the reqwest-based implementation used in production.
//!
//! # Policy
//!
//! Timeouts and retries are explicit parameters rather than per-call
//! constants:
//! - reads (balance, history) get a bounded timeout and a capped, jittered
//!   retry
//! - the transaction POST gets a short timeout and is never retried, since it
//!   is not idempotent

use std::time::Duration;

use async_trait::async_trait;
use axum::http::StatusCode;
use rand::Rng;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::{config::Config, models::transaction::{TransactionRecord, TransactionRequest}};

/// Failure talking to an upstream bank service.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// Connection failure, timeout, non-success status on a read, or an
    /// undecodable response body.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The transactions service refused the submitted transaction.
    ///
    /// This is the authoritative outcome; the client-side balance check is
    /// advisory only.
    #[error("transaction rejected by upstream (status {0})")]
    Rejected(StatusCode),
}

/// Interface to the upstream bank services.
///
/// Async so the aggregator can issue balance and history fetches
/// concurrently. Object-safe so tests can substitute a mock.
#[async_trait]
pub trait BankBackend: Send + Sync {
    /// Current balance of an account, in cents.
    async fn fetch_balance(&self, account_id: &str) -> Result<i64, BackendError>;

    /// Transaction history of an account, newest first.
    async fn fetch_history(&self, account_id: &str)
        -> Result<Vec<TransactionRecord>, BackendError>;

    /// Submit a transaction to the ledger.
    async fn submit_transaction(&self, request: &TransactionRequest) -> Result<(), BackendError>;
}

/// Retry policy for idempotent reads: capped attempts with jittered
/// exponential backoff.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(100),
        }
    }
}

impl RetryPolicy {
    /// Delay before the next attempt, with jitter to avoid synchronized
    /// retries across requests.
    fn backoff(&self, completed_attempts: u32) -> Duration {
        let exp = self.base_delay * 2u32.saturating_pow(completed_attempts.saturating_sub(1));
        let jitter_ms = rand::rng().random_range(0..=self.base_delay.as_millis() as u64 / 2);
        exp + Duration::from_millis(jitter_ms)
    }
}

/// Balance service response body.
#[derive(Debug, Deserialize)]
struct BalanceResponse {
    balance: i64,
}

/// History service response body.
#[derive(Debug, Deserialize)]
struct HistoryResponse {
    history: Vec<TransactionRecord>,
}

/// Production `BankBackend` over HTTP/JSON.
pub struct HttpBackend {
    client: reqwest::Client,
    balances_uri: String,
    history_uri: String,
    transactions_uri: String,
    retry: RetryPolicy,
    submit_timeout: Duration,
}

impl HttpBackend {
    /// Timeout applied to balance and history reads.
    const READ_TIMEOUT: Duration = Duration::from_secs(10);

    /// Timeout applied to the transaction POST.
    const SUBMIT_TIMEOUT: Duration = Duration::from_secs(3);

    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Self::READ_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            balances_uri: config.balances_uri(),
            history_uri: config.history_uri(),
            transactions_uri: config.transactions_uri(),
            retry: RetryPolicy::default(),
            submit_timeout: Self::SUBMIT_TIMEOUT,
        })
    }

    /// GET `{url}?account_id={account_id}` and decode the JSON body,
    /// retrying per the policy.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        account_id: &str,
    ) -> Result<T, BackendError> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.try_get(url, account_id).await {
                Ok(value) => return Ok(value),
                Err(err) if attempt < self.retry.max_attempts => {
                    let delay = self.retry.backoff(attempt);
                    tracing::warn!(
                        url,
                        attempt,
                        "upstream read failed ({err}), retrying in {delay:?}"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn try_get<T: DeserializeOwned>(
        &self,
        url: &str,
        account_id: &str,
    ) -> Result<T, BackendError> {
        let response = self
            .client
            .get(url)
            .query(&[("account_id", account_id)])
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl BankBackend for HttpBackend {
    async fn fetch_balance(&self, account_id: &str) -> Result<i64, BackendError> {
        let response: BalanceResponse = self.get_json(&self.balances_uri, account_id).await?;
        Ok(response.balance)
    }

    async fn fetch_history(
        &self,
        account_id: &str,
    ) -> Result<Vec<TransactionRecord>, BackendError> {
        let response: HistoryResponse = self.get_json(&self.history_uri, account_id).await?;
        Ok(response.history)
    }

    async fn submit_transaction(&self, request: &TransactionRequest) -> Result<(), BackendError> {
        // Not idempotent, so no retry; the short timeout keeps a wedged
        // ledger from wedging the browser.
        let response = self
            .client
            .post(&self.transactions_uri)
            .timeout(self.submit_timeout)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(BackendError::Rejected(status))
        }
    }
}
