use zapbase::domain::{EthAmount, Recipient, TransactionResult, TransferIntent};

#[test]
fn given_failed_result_when_serializing_then_only_present_fields_are_emitted() {
    let result = TransactionResult::failed("boom", None, None);

    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json, serde_json::json!({ "success": false, "error": "boom" }));
}

#[test]
fn given_confirmed_result_when_serializing_then_fields_are_camel_case() {
    let result = TransactionResult::confirmed(
        "0xabc".to_string(),
        "0x0000000000000000000000000000000000000001".to_string(),
        EthAmount::parse("1.5").unwrap(),
        1,
        Some(100),
    );

    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["success"], true);
    assert_eq!(json["txHash"], "0xabc");
    assert_eq!(json["amount"], 1.5);
    assert_eq!(json["confirmations"], 1);
    assert_eq!(json["blockNumber"], 100);
    assert!(json.get("error").is_none());
}

#[test]
fn given_intent_when_rendering_canonical_phrase_then_reads_as_command() {
    let intent = TransferIntent::new(
        EthAmount::parse("0.5").unwrap(),
        Recipient::Name("alice.base.eth".to_string()),
    );

    assert_eq!(intent.canonical_phrase(), "Send 0.5 ETH to alice.base.eth");
}
