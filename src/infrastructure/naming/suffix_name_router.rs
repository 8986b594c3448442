use std::sync::Arc;

use async_trait::async_trait;
use ethers::types::Address;

use crate::application::ports::{NameResolver, ResolutionError};

/// Sends each name to the resolver registered for its suffix. Longer
/// suffixes win, so `.base.eth` is tried before `.eth`.
#[derive(Default)]
pub struct SuffixNameRouter {
    routes: Vec<(String, Arc<dyn NameResolver>)>,
}

impl SuffixNameRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, suffix: impl Into<String>, resolver: Arc<dyn NameResolver>) -> Self {
        self.routes.push((suffix.into().to_lowercase(), resolver));
        self.routes.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        self
    }

    pub fn suffixes(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|(suffix, _)| suffix.as_str())
    }
}

#[async_trait]
impl NameResolver for SuffixNameRouter {
    async fn resolve(&self, name: &str) -> Result<Address, ResolutionError> {
        let name = name.trim().to_lowercase();
        let (suffix, resolver) = self
            .routes
            .iter()
            .find(|(suffix, _)| name.len() > suffix.len() && name.ends_with(suffix.as_str()))
            .ok_or_else(|| ResolutionError::UnsupportedName(name.clone()))?;

        tracing::debug!(name = %name, suffix = %suffix, "Routing name resolution");
        resolver.resolve(&name).await
    }
}
