use std::collections::HashMap;

use async_trait::async_trait;
use ethers::types::Address;

use crate::application::ports::{NameResolver, ResolutionError};

/// Fixed name → address table; unknown names are unregistered.
#[derive(Default)]
pub struct MockNameResolver {
    entries: HashMap<String, Address>,
}

impl MockNameResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, name: impl Into<String>, address: Address) -> Self {
        self.entries.insert(name.into(), address);
        self
    }
}

#[async_trait]
impl NameResolver for MockNameResolver {
    async fn resolve(&self, name: &str) -> Result<Address, ResolutionError> {
        self.entries
            .get(name)
            .copied()
            .ok_or_else(|| ResolutionError::Unregistered(name.to_string()))
    }
}
