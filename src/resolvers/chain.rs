use std::sync::Arc;

use async_trait::async_trait;

use super::{ImportRequest, ResolveError, ResolvedContent, Resolver};

/// An ordered list of resolvers queried in priority order.
pub struct ResolverChain {
    resolvers: Vec<Arc<dyn Resolver>>,
}

impl ResolverChain {
    pub fn new(resolvers: Vec<Arc<dyn Resolver>>) -> Self {
        Self { resolvers }
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}

#[async_trait]
impl Resolver for ResolverChain {
    /// `Some(true)` as soon as one member says so. Members without an opinion
    /// make the answer unknown rather than `false`.
    fn will_resolve(&self, request: &ImportRequest) -> Option<bool> {
        let mut unknown = false;
        for resolver in &self.resolvers {
            match resolver.will_resolve(request) {
                Some(true) => return Some(true),
                Some(false) => {}
                None => unknown = true,
            }
        }
        if unknown { None } else { Some(false) }
    }

    /// The first member to succeed wins. Member failures are not reported.
    async fn resolve(&self, request: &ImportRequest) -> Result<ResolvedContent, ResolveError> {
        for (index, resolver) in self.resolvers.iter().enumerate() {
            match resolver.resolve(request).await {
                Ok(content) => return Ok(content),
                Err(error) => tracing::debug!(
                    index,
                    location = %request.location,
                    %error,
                    "chained resolver failed, trying next"
                ),
            }
        }
        Err(ResolveError::Exhausted)
    }
}
