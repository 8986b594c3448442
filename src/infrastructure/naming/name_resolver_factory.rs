use std::sync::Arc;

use crate::application::ports::{NameResolver, ResolutionError};
use crate::domain::NamingSystem;
use crate::presentation::config::NamingSettings;

use super::basename_resolver::BasenameResolver;
use super::ens_resolver::EnsNameResolver;
use super::suffix_name_router::SuffixNameRouter;

pub struct NameResolverFactory;

impl NameResolverFactory {
    /// ENS falls back to the ledger RPC when no dedicated endpoint is set.
    pub fn create(
        settings: &NamingSettings,
        ledger_rpc_url: &str,
    ) -> Result<Arc<dyn NameResolver>, ResolutionError> {
        let basenames = BasenameResolver::new(
            &settings.basename_rpc_url,
            &settings.basename_resolver_address,
        )?;
        let ens = EnsNameResolver::new(settings.ens_rpc_url.as_deref().unwrap_or(ledger_rpc_url))?;

        let router = SuffixNameRouter::new()
            .route(NamingSystem::Basename.suffix(), Arc::new(basenames))
            .route(NamingSystem::Ens.suffix(), Arc::new(ens));

        Ok(Arc::new(router))
    }
}
