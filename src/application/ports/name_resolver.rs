use async_trait::async_trait;
use ethers::types::Address;

#[async_trait]
pub trait NameResolver: Send + Sync {
    /// Resolves a human-readable name to a non-zero address.
    async fn resolve(&self, name: &str) -> Result<Address, ResolutionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ResolutionError {
    #[error("name is not registered: {0}")]
    Unregistered(String),
    #[error("name resolves to the zero address: {0}")]
    ZeroAddress(String),
    #[error("no naming system handles this name: {0}")]
    UnsupportedName(String),
    #[error("naming service unavailable: {0}")]
    ServiceUnavailable(String),
    #[error("resolver misconfigured: {0}")]
    Configuration(String),
}
