use serde::Serialize;

use super::{EthAmount, Recipient};

/// An `(amount, recipient)` pair extracted from user input, before the
/// recipient is resolved to an address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferIntent {
    pub amount: EthAmount,
    pub recipient: Recipient,
}

impl TransferIntent {
    pub fn new(amount: EthAmount, recipient: Recipient) -> Self {
        Self { amount, recipient }
    }

    pub fn canonical_phrase(&self) -> String {
        format!("Send {} ETH to {}", self.amount, self.recipient)
    }
}
