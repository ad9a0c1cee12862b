//! Payment and deposit submission handlers.
//!
//! Both endpoints compose a transaction request and forward it to the
//! transactions service, which owns the ledger. Outcomes, including
//! rejections, are surfaced back on the home page via an `alert` query
//! parameter on the redirect.

use axum::{
    Form,
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
};

use crate::{
    error::AppError,
    format::parse_amount_cents,
    models::transaction::{DepositForm, ExternalAccountDetails, PaymentForm, TransactionRequest},
    services::backend::BackendError,
    state::AppState,
};

/// Submit a payment to another account at this bank.
///
/// # Flow
///
/// 1. Authenticate (401 on failure, no upstream call is made)
/// 2. Resolve the recipient ("other" selects the free-text field)
/// 3. Convert the decimal amount to cents, rounding to the nearest cent
/// 4. Advisory balance check: submit only if balance is strictly greater
///    than the amount
/// 5. POST to the transactions service and treat its verdict as final
///
/// # Advisory check
///
/// The read-then-check against the balance service is NOT atomic with the
/// upstream ledger; concurrent requests can still overdraw. The transactions
/// service is the authority, so its rejection is surfaced rather than
/// swallowed.
pub async fn payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<PaymentForm>,
) -> Result<Response, AppError> {
    let principal = state.principal(&headers)?;

    let recipient = form
        .recipient_account()
        .ok_or_else(|| AppError::InvalidRequest("missing recipient account".to_string()))?
        .to_string();
    let amount = parse_amount_cents(&form.amount)
        .map_err(|err| AppError::InvalidRequest(err.to_string()))?;

    let balance = state.backend.fetch_balance(&principal.account_id).await?;
    if balance <= amount {
        tracing::info!(
            account_id = %principal.account_id,
            amount,
            balance,
            "payment declined by advisory balance check"
        );
        return Ok(Redirect::to("/home?alert=insufficient_funds").into_response());
    }

    let request = TransactionRequest {
        from_routing_num: state.config.local_routing_num.clone(),
        from_account_num: principal.account_id.clone(),
        to_routing_num: state.config.local_routing_num.clone(),
        to_account_num: recipient,
        amount,
    };

    submit(&state, &request, "payment_rejected").await
}

/// Simulate a deposit from an external bank account.
///
/// No balance check applies; deposits are always attempted. The external
/// account arrives as a JSON string inside the `account` form field and
/// becomes the source of the composed transaction.
pub async fn deposit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<DepositForm>,
) -> Result<Response, AppError> {
    let principal = state.principal(&headers)?;

    let details: ExternalAccountDetails = serde_json::from_str(&form.account)
        .map_err(|err| AppError::InvalidRequest(format!("malformed account field: {err}")))?;
    let amount = parse_amount_cents(&form.amount)
        .map_err(|err| AppError::InvalidRequest(err.to_string()))?;

    let request = TransactionRequest {
        from_routing_num: details.routing_num,
        from_account_num: details.account_num,
        to_routing_num: state.config.local_routing_num.clone(),
        to_account_num: principal.account_id.clone(),
        amount,
    };

    submit(&state, &request, "deposit_rejected").await
}

/// Forward a composed transaction and translate the outcome into a redirect.
///
/// Upstream rejection is the authoritative verdict and is surfaced as an
/// alert; transport failures propagate as opaque server errors.
async fn submit(
    state: &AppState,
    request: &TransactionRequest,
    rejected_alert: &str,
) -> Result<Response, AppError> {
    match state.backend.submit_transaction(request).await {
        Ok(()) => Ok(Redirect::to("/home").into_response()),
        Err(BackendError::Rejected(status)) => {
            tracing::warn!(%status, "transaction rejected by upstream");
            Ok(Redirect::to(&format!("/home?alert={rejected_alert}")).into_response())
        }
        Err(err) => Err(err.into()),
    }
}
