//! The pipeline stage

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::context::ImportContext;
use super::error::ImportError;
use super::options::{ImporterOptions, MalformedParams, NestedOrigin};
use crate::pipeline::{BoxError, Plugin, PluginContext};
use crate::resolvers::{NodeResolver, Resolver, ResolverChain};
use crate::syntax::Root;

/// Identifier carried by every message the importer records
pub const PLUGIN_NAME: &str = "css-importer";

/// Inlines `@import` directives, recursively.
pub struct Importer {
    resolver: Arc<dyn Resolver>,
    nested_origin: NestedOrigin,
    malformed: MalformedParams,
    cancel: Option<CancellationToken>,
}

impl Default for Importer {
    fn default() -> Self {
        Self::new(ImporterOptions::default())
    }
}

impl Importer {
    /// No resolvers means the filesystem resolver, one is used as is, more
    /// are tried in order.
    pub fn new(options: ImporterOptions) -> Self {
        let ImporterOptions {
            mut resolvers,
            nested_origin,
            malformed_params,
            cancel,
        } = options;

        let resolver: Arc<dyn Resolver> = match resolvers.len() {
            0 => Arc::new(NodeResolver::default()),
            1 => resolvers.remove(0),
            _ => Arc::new(ResolverChain::new(resolvers)),
        };
        Self {
            resolver,
            nested_origin,
            malformed: malformed_params,
            cancel,
        }
    }

    pub fn resolver(&self) -> &dyn Resolver {
        self.resolver.as_ref()
    }

    /// Inline every import in `root`.
    ///
    /// Fails with [`ImportError::Configuration`] when `cx` is detached from
    /// a pipeline: the stages to re-run on imported trees are unknown.
    pub async fn run(&self, root: &mut Root, cx: &PluginContext<'_>) -> Result<(), ImportError> {
        let stages = cx.prior_stages().ok_or_else(|| {
            ImportError::Configuration(format!("{PLUGIN_NAME} cannot run without a pipeline"))
        })?;

        let context = ImportContext {
            stages,
            nested_origin: self.nested_origin,
            malformed: self.malformed,
            cancel: self.cancel.as_ref(),
            ..ImportContext::new(self.resolver.as_ref(), cx.messages(), cx.options())
        };
        context.resolve_imports(root).await
    }
}

#[async_trait]
impl Plugin for Importer {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    async fn transform(&self, root: &mut Root, cx: &PluginContext<'_>) -> Result<(), BoxError> {
        self.run(root, cx).await.map_err(Into::into)
    }
}
