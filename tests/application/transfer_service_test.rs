use std::sync::Arc;

use ethers::types::{Address, H256};
use ethers::utils::to_checksum;

use zapbase::application::services::TransferService;
use zapbase::domain::{EthAmount, Recipient, SecretString, TransferIntent};
use zapbase::infrastructure::naming::MockNameResolver;

use crate::helpers::{
    ALICE, BLOCK_NUMBER, CountingNameResolver, RecordingLedgerConnector, TX_HASH_BYTE, address,
    eth, resolver_with_alice,
};

fn intent(amount: &str, recipient: Recipient) -> TransferIntent {
    TransferIntent::new(EthAmount::parse(amount).unwrap(), recipient)
}

fn name(n: &str) -> Recipient {
    Recipient::Name(n.to_string())
}

#[tokio::test]
async fn given_funded_wallet_when_executing_then_transfer_is_confirmed() {
    let connector = Arc::new(RecordingLedgerConnector::with_balance(eth("1")));
    let service = TransferService::new(Arc::new(resolver_with_alice()), connector.clone(), 1);

    let result = service
        .execute(&intent("0.5", name("alice.base.eth")), None)
        .await;

    assert!(result.success, "unexpected failure: {:?}", result.error);
    assert_eq!(
        result.tx_hash.as_deref(),
        Some(format!("{:#x}", H256::repeat_byte(TX_HASH_BYTE)).as_str())
    );
    assert_eq!(result.to, Some(to_checksum(&address(ALICE), None)));
    assert_eq!(result.confirmations, Some(1));
    assert_eq!(result.block_number, Some(BLOCK_NUMBER));
    assert_eq!(connector.submissions(), vec![(address(ALICE), eth("0.5"))]);
}

#[tokio::test]
async fn given_unregistered_name_when_executing_then_fails_without_dispatch() {
    let connector = Arc::new(RecordingLedgerConnector::with_balance(eth("10")));
    let service = TransferService::new(Arc::new(MockNameResolver::new()), connector.clone(), 1);

    let result = service
        .execute(&intent("0.5", name("ghost.base.eth")), None)
        .await;

    assert!(!result.success);
    assert!(
        result
            .error
            .as_deref()
            .unwrap()
            .contains("Failed to resolve ghost.base.eth")
    );
    assert!(result.to.is_none());
    assert_eq!(connector.connects(), 0);
    assert!(connector.submissions().is_empty());
}

#[tokio::test]
async fn given_amount_above_balance_when_executing_then_reports_insufficient_without_submission()
{
    let connector = Arc::new(RecordingLedgerConnector::with_balance(eth("0.1")));
    let service = TransferService::new(Arc::new(resolver_with_alice()), connector.clone(), 1);

    let result = service
        .execute(&intent("0.5", name("alice.base.eth")), None)
        .await;

    assert!(!result.success);
    let error = result.error.unwrap();
    assert!(error.contains("Insufficient wallet balance"), "{}", error);
    assert!(error.contains("Required: 0.5 ETH"), "{}", error);
    assert_eq!(connector.connects(), 1);
    assert!(connector.submissions().is_empty());
}

#[tokio::test]
async fn given_address_recipient_when_executing_then_resolver_is_not_called() {
    let connector = Arc::new(RecordingLedgerConnector::with_balance(eth("1")));
    let resolver = Arc::new(CountingNameResolver::new(MockNameResolver::new()));
    let service = TransferService::new(resolver.clone(), connector.clone(), 1);

    let result = service
        .execute(&intent("0.2", Recipient::Address(ALICE.to_string())), None)
        .await;

    assert!(result.success);
    assert_eq!(resolver.calls(), 0);
    assert_eq!(connector.submissions(), vec![(address(ALICE), eth("0.2"))]);
}

#[tokio::test]
async fn given_name_resolving_to_zero_address_when_executing_then_fails_without_dispatch() {
    let connector = Arc::new(RecordingLedgerConnector::with_balance(eth("1")));
    let resolver = MockNameResolver::new().with_entry("burn.base.eth", Address::zero());
    let service = TransferService::new(Arc::new(resolver), connector.clone(), 1);

    let result = service
        .execute(&intent("0.1", name("burn.base.eth")), None)
        .await;

    assert!(!result.success);
    assert_eq!(connector.connects(), 0);
}

#[tokio::test]
async fn given_reverted_receipt_when_executing_then_reports_failure_with_recipient() {
    let connector = Arc::new(RecordingLedgerConnector::with_balance(eth("1")).reverting());
    let service = TransferService::new(Arc::new(resolver_with_alice()), connector.clone(), 1);

    let result = service
        .execute(&intent("0.5", name("alice.base.eth")), None)
        .await;

    assert!(!result.success);
    assert!(result.error.unwrap().contains("reverted"));
    assert_eq!(result.to, Some(to_checksum(&address(ALICE), None)));
}

#[tokio::test]
async fn given_caller_key_when_executing_then_connector_receives_it() {
    let connector = Arc::new(RecordingLedgerConnector::with_balance(eth("1")));
    let service = TransferService::new(Arc::new(resolver_with_alice()), connector.clone(), 1);
    let key = SecretString::from("0xfeed");

    service
        .execute(&intent("0.5", name("alice.base.eth")), Some(&key))
        .await;

    assert_eq!(connector.signer_keys(), vec![Some("0xfeed".to_string())]);
}
