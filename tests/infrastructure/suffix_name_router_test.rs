use std::sync::Arc;

use ethers::types::Address;

use zapbase::application::ports::{NameResolver, ResolutionError};
use zapbase::infrastructure::naming::{MockNameResolver, SuffixNameRouter};

fn router() -> SuffixNameRouter {
    let ens = MockNameResolver::new()
        .with_entry("vitalik.eth", Address::repeat_byte(0x01))
        .with_entry("alice.base.eth", Address::repeat_byte(0xee));
    let basenames = MockNameResolver::new().with_entry("alice.base.eth", Address::repeat_byte(0xba));

    // Registered shortest first to show ordering does not matter.
    SuffixNameRouter::new()
        .route(".eth", Arc::new(ens))
        .route(".base.eth", Arc::new(basenames))
}

#[tokio::test]
async fn given_basename_when_routing_then_basename_resolver_answers() {
    let address = router().resolve("alice.base.eth").await.unwrap();
    assert_eq!(address, Address::repeat_byte(0xba));
}

#[tokio::test]
async fn given_ens_name_when_routing_then_ens_resolver_answers() {
    let address = router().resolve("Vitalik.ETH").await.unwrap();
    assert_eq!(address, Address::repeat_byte(0x01));
}

#[tokio::test]
async fn given_unknown_suffix_when_routing_then_returns_unsupported() {
    let result = router().resolve("bob.xyz").await;
    assert!(matches!(result, Err(ResolutionError::UnsupportedName(_))));
}

#[tokio::test]
async fn given_bare_suffix_when_routing_then_returns_unsupported() {
    let result = router().resolve(".eth").await;
    assert!(matches!(result, Err(ResolutionError::UnsupportedName(_))));
}

#[test]
fn given_routes_when_listing_suffixes_then_longest_comes_first() {
    let router = router();

    let suffixes: Vec<&str> = router.suffixes().collect();

    assert_eq!(suffixes, vec![".base.eth", ".eth"]);
}
