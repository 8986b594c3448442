use serde_json::json;

use zapbase::application::ports::{NameResolver, ResolutionError};
use zapbase::infrastructure::naming::EnsNameResolver;

use crate::helpers::spawn_json_rpc;

#[tokio::test]
async fn given_name_without_resolver_when_resolving_then_returns_unregistered() {
    let zero_word = format!("0x{:0>64}", "0");
    let (rpc_url, _shutdown) = spawn_json_rpc(vec![("eth_call", json!(zero_word))]).await;
    let resolver = EnsNameResolver::new(&rpc_url).unwrap();

    let result = resolver.resolve("nobody.eth").await;

    match result {
        Err(ResolutionError::Unregistered(name)) => assert_eq!(name, "nobody.eth"),
        other => panic!("expected Unregistered, got {:?}", other),
    }
}

#[tokio::test]
async fn given_failing_node_when_resolving_then_returns_service_unavailable() {
    let (rpc_url, _shutdown) = spawn_json_rpc(vec![]).await;
    let resolver = EnsNameResolver::new(&rpc_url).unwrap();

    let result = resolver.resolve("vitalik.eth").await;

    assert!(matches!(result, Err(ResolutionError::ServiceUnavailable(_))));
}

#[test]
fn given_malformed_rpc_url_when_building_then_returns_configuration_error() {
    let result = EnsNameResolver::new("not a url");

    assert!(matches!(result, Err(ResolutionError::Configuration(_))));
}
