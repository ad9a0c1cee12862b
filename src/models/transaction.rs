//! Transaction wire types and browser form payloads.
//!
//! This module defines:
//! - `TransactionRequest`: JSON body POSTed to the transactions service
//! - `TransactionRecord`: one entry of the history service response
//! - Form types submitted by the payment and deposit pages

use serde::{Deserialize, Serialize};

/// JSON body submitted to the transactions service.
///
/// Routing and account numbers are opaque strings passed through without
/// validation; the upstream ledger is the authority on whether they exist.
/// `amount` is always a non-negative integer number of cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub from_routing_num: String,
    pub from_account_num: String,
    pub to_routing_num: String,
    pub to_account_num: String,

    /// Amount in cents
    pub amount: i64,
}

/// One transaction as returned by the history service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub from_routing_num: String,
    pub from_account_num: String,
    pub to_routing_num: String,
    pub to_account_num: String,

    /// Amount in cents
    pub amount: i64,

    /// Unix seconds
    pub timestamp: i64,
}

/// Form submitted by the payment page.
///
/// `recipient` is either an account number or the literal "other", in which
/// case the free-text `other-recipient` field carries the account number.
#[derive(Debug, Deserialize)]
pub struct PaymentForm {
    pub recipient: String,

    #[serde(rename = "other-recipient")]
    pub other_recipient: Option<String>,

    /// Decimal amount string, e.g. "19.99"
    pub amount: String,
}

impl PaymentForm {
    /// Resolve the target account number from the recipient selection.
    pub fn recipient_account(&self) -> Option<&str> {
        if self.recipient == "other" {
            self.other_recipient.as_deref().filter(|s| !s.is_empty())
        } else {
            Some(&self.recipient)
        }
    }
}

/// Form submitted by the deposit page.
///
/// The external account arrives as a JSON string inside the form field, the
/// shape the account picker widget produces.
#[derive(Debug, Deserialize)]
pub struct DepositForm {
    /// JSON string with `account_num` and `routing_num`
    pub account: String,

    /// Decimal amount string
    pub amount: String,
}

/// External account details decoded from `DepositForm::account`.
#[derive(Debug, Deserialize)]
pub struct ExternalAccountDetails {
    pub account_num: String,
    pub routing_num: String,
}
