mod ledger;
mod name_resolver;
mod staging_store;
mod transcription_engine;

pub use ledger::{Ledger, LedgerConnector, SubmissionError, TransferReceipt};
pub use name_resolver::{NameResolver, ResolutionError};
pub use staging_store::{StagingStore, StagingStoreError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
