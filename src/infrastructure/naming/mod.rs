mod basename_resolver;
mod ens_resolver;
mod mock_name_resolver;
mod name_resolver_factory;
mod suffix_name_router;

pub use basename_resolver::{BASENAME_L2_RESOLVER, BasenameResolver};
pub use ens_resolver::EnsNameResolver;
pub use mock_name_resolver::MockNameResolver;
pub use name_resolver_factory::NameResolverFactory;
pub use suffix_name_router::SuffixNameRouter;
