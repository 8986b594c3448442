use async_trait::async_trait;
use ethers::providers::{Http, Middleware, Provider, ProviderError};
use ethers::types::Address;

use crate::application::ports::{NameResolver, ResolutionError};

/// ENS lookups through the registry of whatever chain the RPC serves.
pub struct EnsNameResolver {
    provider: Provider<Http>,
}

impl EnsNameResolver {
    pub fn new(rpc_url: &str) -> Result<Self, ResolutionError> {
        let provider = Provider::<Http>::try_from(rpc_url)
            .map_err(|e| ResolutionError::Configuration(format!("ens provider: {}", e)))?;
        Ok(Self { provider })
    }
}

#[async_trait]
impl NameResolver for EnsNameResolver {
    async fn resolve(&self, name: &str) -> Result<Address, ResolutionError> {
        match self.provider.resolve_name(name).await {
            Ok(address) if address.is_zero() => Err(ResolutionError::ZeroAddress(name.to_string())),
            Ok(address) => Ok(address),
            Err(ProviderError::EnsError(_)) | Err(ProviderError::EnsNotOwned(_)) => {
                Err(ResolutionError::Unregistered(name.to_string()))
            }
            Err(e) => Err(ResolutionError::ServiceUnavailable(e.to_string())),
        }
    }
}
