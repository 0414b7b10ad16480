//! Transaction-related types.

use std::fmt;

use alloy::primitives::{Address, U256};
use serde::Deserialize;

/// The fields of a transaction reported by `getTransactionDetails`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionSummary {
    /// Sender address.
    pub from: Address,
    /// Recipient address (None for contract creation).
    pub to: Option<Address>,
    /// Transferred value in wei.
    pub value: U256,
    /// Gas price in wei.
    pub gas_price: u128,
}

/// Envelope returned by Etherscan's `gettxreceiptstatus` action.
///
/// `result` is kept as raw JSON: on success it is an object carrying the
/// receipt status, on failure Etherscan puts an error string there.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReceiptStatusResponse {
    /// "1" when the request succeeded.
    #[serde(default)]
    pub status: String,
    /// Human-readable status message.
    #[serde(default)]
    pub message: Option<String>,
    /// Receipt status payload.
    #[serde(default)]
    pub result: Option<serde_json::Value>,
}

impl ReceiptStatusResponse {
    /// Interpret the envelope.
    ///
    /// Returns `None` when the lookup itself failed or carried no result,
    /// otherwise the receipt outcome.
    pub fn receipt_status(&self) -> Option<ReceiptStatus> {
        if self.status != "1" {
            return None;
        }

        let result = self.result.as_ref()?.as_object()?;
        match result.get("status").and_then(serde_json::Value::as_str) {
            Some("1") => Some(ReceiptStatus::Success),
            _ => Some(ReceiptStatus::Fail),
        }
    }
}

/// Outcome recorded in a transaction receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptStatus {
    /// The transaction executed successfully.
    Success,
    /// The transaction reverted.
    Fail,
}

impl fmt::Display for ReceiptStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReceiptStatus::Success => f.write_str("Success"),
            ReceiptStatus::Fail => f.write_str("Fail"),
        }
    }
}
