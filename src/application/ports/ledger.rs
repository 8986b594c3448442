use std::sync::Arc;

use async_trait::async_trait;
use ethers::types::{Address, H256, U256};

use crate::domain::SecretString;

/// A funded sender on the target chain.
#[async_trait]
pub trait Ledger: Send + Sync {
    fn sender(&self) -> Address;

    async fn balance(&self) -> Result<U256, SubmissionError>;

    /// Broadcasts one value transfer and returns its hash without waiting.
    async fn submit_transfer(&self, to: Address, value: U256) -> Result<H256, SubmissionError>;

    async fn await_confirmation(
        &self,
        tx_hash: H256,
        confirmations: usize,
    ) -> Result<TransferReceipt, SubmissionError>;
}

/// Hands out a [`Ledger`] bound to either the configured wallet or a
/// caller-supplied key.
#[async_trait]
pub trait LedgerConnector: Send + Sync {
    async fn connect(
        &self,
        signer_key: Option<&SecretString>,
    ) -> Result<Arc<dyn Ledger>, SubmissionError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReceipt {
    pub block_number: Option<u64>,
    pub confirmations: u64,
    pub succeeded: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("Insufficient wallet balance. Current: {balance} ETH, Required: {required} ETH")]
    InsufficientFunds { balance: String, required: String },
    #[error("invalid transfer amount: {0}")]
    InvalidAmount(String),
    #[error("signer unavailable: {0}")]
    Signer(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("transaction rejected: {0}")]
    Rejected(String),
    #[error("transaction reverted: {0}")]
    Reverted(String),
    #[error("transaction dropped before confirmation: {0}")]
    Dropped(String),
}
