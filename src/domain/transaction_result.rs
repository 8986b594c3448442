use serde::Serialize;

use super::EthAmount;

/// Outcome of one transfer attempt, as reported to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<EthAmount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmations: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_number: Option<u64>,
}

impl TransactionResult {
    pub fn confirmed(
        tx_hash: String,
        to: String,
        amount: EthAmount,
        confirmations: u64,
        block_number: Option<u64>,
    ) -> Self {
        Self {
            success: true,
            tx_hash: Some(tx_hash),
            error: None,
            to: Some(to),
            amount: Some(amount),
            confirmations: Some(confirmations),
            block_number,
        }
    }

    pub fn failed(error: impl Into<String>, to: Option<String>, amount: Option<EthAmount>) -> Self {
        Self {
            success: false,
            tx_hash: None,
            error: Some(error.into()),
            to,
            amount,
            confirmations: None,
            block_number: None,
        }
    }
}
