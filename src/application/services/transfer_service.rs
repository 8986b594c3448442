use std::sync::Arc;

use ethers::types::Address;
use ethers::utils::{format_ether, parse_ether, to_checksum};

use crate::application::ports::{
    LedgerConnector, NameResolver, ResolutionError, SubmissionError,
};
use crate::domain::{EthAmount, Recipient, SecretString, TransactionResult, TransferIntent};

pub const DEFAULT_CONFIRMATIONS: usize = 1;

/// Resolves recipients and moves ETH. Every outcome ends up as a
/// [`TransactionResult`]; nothing is retried.
pub struct TransferService {
    name_resolver: Arc<dyn NameResolver>,
    ledger_connector: Arc<dyn LedgerConnector>,
    confirmations: usize,
}

impl TransferService {
    pub fn new(
        name_resolver: Arc<dyn NameResolver>,
        ledger_connector: Arc<dyn LedgerConnector>,
        confirmations: usize,
    ) -> Self {
        Self {
            name_resolver,
            ledger_connector,
            confirmations: confirmations.max(1),
        }
    }

    #[tracing::instrument(skip(self, intent, signer_key), fields(recipient = %intent.recipient, amount = %intent.amount))]
    pub async fn execute(
        &self,
        intent: &TransferIntent,
        signer_key: Option<&SecretString>,
    ) -> TransactionResult {
        let to = match self.resolve_recipient(&intent.recipient).await {
            Ok(address) => address,
            Err(e) => {
                tracing::warn!(error = %e, "Recipient resolution failed, transfer not attempted");
                return TransactionResult::failed(e.to_string(), None, Some(intent.amount.clone()));
            }
        };

        match self.dispatch(to, &intent.amount, signer_key).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(error = %e, to = %to_checksum(&to, None), "Transfer failed");
                TransactionResult::failed(
                    e.to_string(),
                    Some(to_checksum(&to, None)),
                    Some(intent.amount.clone()),
                )
            }
        }
    }

    pub async fn resolve_recipient(&self, recipient: &Recipient) -> Result<Address, TransferError> {
        let address = match recipient {
            Recipient::Address(raw) => raw
                .parse::<Address>()
                .map_err(|_| TransferError::InvalidAddress(raw.clone()))?,
            Recipient::Name(name) => {
                tracing::debug!(name = %name, "Resolving name");
                self.name_resolver
                    .resolve(name)
                    .await
                    .map_err(|source| TransferError::Resolution {
                        name: name.clone(),
                        source,
                    })?
            }
        };

        if address.is_zero() {
            return Err(TransferError::Resolution {
                name: recipient.to_string(),
                source: ResolutionError::ZeroAddress(recipient.to_string()),
            });
        }

        tracing::debug!(recipient = %recipient, address = %to_checksum(&address, None), "Recipient resolved");
        Ok(address)
    }

    /// Sends `amount` to an already resolved address. The balance is checked
    /// first so an underfunded wallet never broadcasts.
    pub async fn dispatch(
        &self,
        to: Address,
        amount: &EthAmount,
        signer_key: Option<&SecretString>,
    ) -> Result<TransactionResult, TransferError> {
        let value = parse_ether(amount.as_str())
            .map_err(|e| SubmissionError::InvalidAmount(format!("{}: {}", amount, e)))?;
        if value.is_zero() {
            return Err(SubmissionError::InvalidAmount(amount.to_string()).into());
        }

        let ledger = self.ledger_connector.connect(signer_key).await?;

        let balance = ledger.balance().await?;
        if balance < value {
            return Err(SubmissionError::InsufficientFunds {
                balance: format_ether(balance),
                required: amount.to_string(),
            }
            .into());
        }

        let tx_hash = ledger.submit_transfer(to, value).await?;
        tracing::info!(tx_hash = %format!("{:#x}", tx_hash), "Transaction sent");

        let receipt = ledger
            .await_confirmation(tx_hash, self.confirmations)
            .await?;
        if !receipt.succeeded {
            return Err(SubmissionError::Reverted(format!("{:#x}", tx_hash)).into());
        }

        tracing::info!(
            tx_hash = %format!("{:#x}", tx_hash),
            block_number = ?receipt.block_number,
            confirmations = receipt.confirmations,
            "Transaction confirmed"
        );

        Ok(TransactionResult::confirmed(
            format!("{:#x}", tx_hash),
            to_checksum(&to, None),
            amount.clone(),
            receipt.confirmations,
            receipt.block_number,
        ))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    #[error("Failed to resolve {name}: {source}")]
    Resolution {
        name: String,
        #[source]
        source: ResolutionError,
    },
    #[error("invalid recipient address: {0}")]
    InvalidAddress(String),
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}
