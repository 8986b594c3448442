mod eth_amount;
mod recipient;
mod secret_string;
mod staging_path;
mod transaction_result;
mod transcript;
mod transfer_intent;

pub use eth_amount::{AmountError, EthAmount};
pub use recipient::{DEFAULT_NAME_SUFFIX, NamingSystem, Recipient, is_address};
pub use secret_string::SecretString;
pub use staging_path::{StagingPath, UploadId};
pub use transaction_result::TransactionResult;
pub use transcript::Transcript;
pub use transfer_intent::TransferIntent;
