use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use ethers::middleware::SignerMiddleware;
use ethers::providers::{Http, Middleware, PendingTransaction, Provider};
use ethers::signers::{LocalWallet, Signer};
use ethers::types::{Address, Eip1559TransactionRequest, H256, U64, U256};

use crate::application::ports::{
    Ledger, LedgerConnector, SubmissionError, TransferReceipt,
};
use crate::domain::SecretString;

const GWEI: u64 = 1_000_000_000;
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Fee fields attached to every transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GasPolicy {
    pub gas_limit: u64,
    pub max_fee_per_gas_gwei: u64,
    pub max_priority_fee_per_gas_gwei: u64,
}

impl Default for GasPolicy {
    fn default() -> Self {
        Self {
            gas_limit: 42_000,
            max_fee_per_gas_gwei: 50,
            max_priority_fee_per_gas_gwei: 2,
        }
    }
}

impl GasPolicy {
    fn max_fee_per_gas(&self) -> U256 {
        U256::from(self.max_fee_per_gas_gwei) * U256::from(GWEI)
    }

    fn max_priority_fee_per_gas(&self) -> U256 {
        U256::from(self.max_priority_fee_per_gas_gwei) * U256::from(GWEI)
    }
}

type SignerClient = SignerMiddleware<Provider<Http>, LocalWallet>;

pub struct EthersLedger {
    client: Arc<SignerClient>,
    sender: Address,
    gas: GasPolicy,
    poll_interval: Duration,
}

#[async_trait]
impl Ledger for EthersLedger {
    fn sender(&self) -> Address {
        self.sender
    }

    async fn balance(&self) -> Result<U256, SubmissionError> {
        self.client
            .get_balance(self.sender, None)
            .await
            .map_err(|e| SubmissionError::Network(format!("balance lookup failed: {}", e)))
    }

    async fn submit_transfer(&self, to: Address, value: U256) -> Result<H256, SubmissionError> {
        let tx = Eip1559TransactionRequest::new()
            .from(self.sender)
            .to(to)
            .value(value)
            .gas(self.gas.gas_limit)
            .max_fee_per_gas(self.gas.max_fee_per_gas())
            .max_priority_fee_per_gas(self.gas.max_priority_fee_per_gas());

        let pending = self
            .client
            .send_transaction(tx, None)
            .await
            .map_err(|e| SubmissionError::Rejected(e.to_string()))?;

        Ok(pending.tx_hash())
    }

    async fn await_confirmation(
        &self,
        tx_hash: H256,
        confirmations: usize,
    ) -> Result<TransferReceipt, SubmissionError> {
        let receipt = PendingTransaction::new(tx_hash, self.client.provider())
            .interval(self.poll_interval)
            .confirmations(confirmations)
            .await
            .map_err(|e| SubmissionError::Network(format!("confirmation failed: {}", e)))?
            .ok_or_else(|| SubmissionError::Dropped(format!("{:#x}", tx_hash)))?;

        Ok(TransferReceipt {
            block_number: receipt.block_number.map(|n| n.as_u64()),
            confirmations: confirmations as u64,
            // Pre-byzantium receipts carry no status.
            succeeded: receipt.status.is_none_or(|s| s == U64::from(1u64)),
        })
    }
}

/// Builds ledgers against one RPC endpoint, signing with the configured
/// wallet unless the caller brings a key.
pub struct EthersLedgerConnector {
    rpc_url: String,
    chain_id: Option<u64>,
    default_key: Option<SecretString>,
    gas: GasPolicy,
    poll_interval: Duration,
}

impl EthersLedgerConnector {
    pub fn new(
        rpc_url: impl Into<String>,
        chain_id: Option<u64>,
        default_key: Option<SecretString>,
        gas: GasPolicy,
    ) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            chain_id,
            default_key: default_key.filter(|k| !k.is_empty()),
            gas,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn has_default_signer(&self) -> bool {
        self.default_key.is_some()
    }
}

#[async_trait]
impl LedgerConnector for EthersLedgerConnector {
    async fn connect(
        &self,
        signer_key: Option<&SecretString>,
    ) -> Result<Arc<dyn Ledger>, SubmissionError> {
        let key = signer_key
            .filter(|k| !k.is_empty())
            .or(self.default_key.as_ref())
            .ok_or_else(|| SubmissionError::Signer("no private key configured".to_string()))?;

        // Wallet errors may echo the input, so they are not forwarded.
        let wallet = key
            .expose_secret()
            .trim()
            .parse::<LocalWallet>()
            .map_err(|_| SubmissionError::Signer("invalid private key".to_string()))?;

        let provider = Provider::<Http>::try_from(self.rpc_url.as_str())
            .map_err(|e| SubmissionError::Network(format!("provider init failed: {}", e)))?
            .interval(self.poll_interval);

        let chain_id = match self.chain_id {
            Some(id) => id,
            None => provider
                .get_chainid()
                .await
                .map_err(|e| SubmissionError::Network(format!("chain id lookup failed: {}", e)))?
                .as_u64(),
        };

        let wallet = wallet.with_chain_id(chain_id);
        let sender = wallet.address();
        tracing::debug!(sender = ?sender, chain_id, "Ledger connected");

        Ok(Arc::new(EthersLedger {
            client: Arc::new(SignerMiddleware::new(provider, wallet)),
            sender,
            gas: self.gas,
            poll_interval: self.poll_interval,
        }))
    }
}
