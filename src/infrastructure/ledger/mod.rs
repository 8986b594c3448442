mod ethers_ledger;

pub use ethers_ledger::{EthersLedger, EthersLedgerConnector, GasPolicy};
