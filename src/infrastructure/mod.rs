pub mod audio;
pub mod ledger;
pub mod naming;
pub mod observability;
pub mod storage;
