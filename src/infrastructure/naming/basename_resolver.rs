use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use ethers::contract::abigen;
use ethers::providers::ens::namehash;
use ethers::providers::{Http, Provider};
use ethers::types::Address;

use crate::application::ports::{NameResolver, ResolutionError};

/// Basenames L2 resolver on Base mainnet.
pub const BASENAME_L2_RESOLVER: &str = "0xC6d566A56A1aFf6508b41f6c90ff131615583BCD";

abigen!(
    L2Resolver,
    r#"[
        function addr(bytes32 node) external view returns (address)
    ]"#
);

/// Resolves `*.base.eth` names with a direct `addr(namehash)` call on the
/// L2 resolver contract.
pub struct BasenameResolver {
    contract: L2Resolver<Provider<Http>>,
}

impl BasenameResolver {
    pub fn new(rpc_url: &str, resolver_address: &str) -> Result<Self, ResolutionError> {
        let provider = Provider::<Http>::try_from(rpc_url)
            .map_err(|e| ResolutionError::Configuration(format!("basename provider: {}", e)))?;
        let resolver = Address::from_str(resolver_address).map_err(|e| {
            ResolutionError::Configuration(format!(
                "invalid resolver address {}: {}",
                resolver_address, e
            ))
        })?;

        Ok(Self {
            contract: L2Resolver::new(resolver, Arc::new(provider)),
        })
    }
}

#[async_trait]
impl NameResolver for BasenameResolver {
    async fn resolve(&self, name: &str) -> Result<Address, ResolutionError> {
        let node = namehash(name);
        let address = self
            .contract
            .addr(node.0)
            .call()
            .await
            .map_err(|e| ResolutionError::ServiceUnavailable(e.to_string()))?;

        // The resolver answers zero for names nobody registered.
        if address.is_zero() {
            return Err(ResolutionError::ZeroAddress(name.to_string()));
        }

        Ok(address)
    }
}
