//! Resolvers turn an [`ImportRequest`] into stylesheet text.
//!
//! - [`Resolver`] is the capability every resolver implements
//! - [`FnResolver`] adapts a bare async function into a [`Resolver`]
//! - [`NodeResolver`] finds files on disk with `node_modules` semantics
//! - [`ResolverChain`] tries an ordered list of resolvers, first success wins

mod chain;
mod error;
mod node;
mod offload;
mod package;
mod request;

pub use chain::ResolverChain;
pub use error::ResolveError;
pub use node::{NodeResolver, NodeResolverOptions, looks_like_url};
pub use package::PackageManifest;
pub use request::{ImportRequest, ResolvedContent};

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

#[async_trait]
pub trait Resolver: Send + Sync {
    /// Quick synchronous pre-check. `Some(false)` means `resolve` is certain
    /// to fail; `None` means unknown.
    fn will_resolve(&self, _request: &ImportRequest) -> Option<bool> {
        None
    }

    async fn resolve(&self, request: &ImportRequest) -> Result<ResolvedContent, ResolveError>;
}

/// A [`Resolver`] backed by an async function.
pub struct FnResolver<F> {
    resolve: F,
}

impl<F> FnResolver<F> {
    pub fn new(resolve: F) -> Self {
        Self { resolve }
    }
}

#[async_trait]
impl<F, Fut> Resolver for FnResolver<F>
where
    F: Fn(ImportRequest) -> Fut + Send + Sync,
    Fut: Future<Output = Result<ResolvedContent, ResolveError>> + Send + 'static,
{
    async fn resolve(&self, request: &ImportRequest) -> Result<ResolvedContent, ResolveError> {
        (self.resolve)(request.clone()).await
    }
}

/// Wrap an async function as a shareable resolver.
pub fn resolver_fn<F, Fut>(resolve: F) -> Arc<dyn Resolver>
where
    F: Fn(ImportRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<ResolvedContent, ResolveError>> + Send + 'static,
{
    Arc::new(FnResolver::new(resolve))
}
