use std::fmt;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::resolvers::Resolver;

/// Which file a re-parsed import is attributed to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NestedOrigin {
    /// The file the resolver read, falling back to the importing file.
    /// Nested relative imports then resolve against the imported file.
    #[default]
    Resolved,
    /// Always the importing file. Nested imports then resolve against the
    /// top-level file, and every dependency, however deep, records that
    /// file as its `parent`.
    Importer,
}

/// What to do with `@import` params that cannot be interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedParams {
    /// Abort the run with [`ImportError::MalformedImport`](super::ImportError).
    #[default]
    Fail,
    /// Warn, and leave the directive untouched.
    Warn,
}

/// Configuration for [`Importer`](super::Importer).
#[derive(Clone, Default)]
pub struct ImporterOptions {
    /// Tried in order. Empty means the filesystem resolver.
    pub resolvers: Vec<Arc<dyn Resolver>>,
    pub nested_origin: NestedOrigin,
    pub malformed_params: MalformedParams,
    /// Once cancelled, pending and future resolutions fail.
    pub cancel: Option<CancellationToken>,
}

impl ImporterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resolver(mut self, resolver: impl Resolver + 'static) -> Self {
        self.resolvers.push(Arc::new(resolver));
        self
    }

    pub fn with_resolvers(mut self, resolvers: impl IntoIterator<Item = Arc<dyn Resolver>>) -> Self {
        self.resolvers.extend(resolvers);
        self
    }

    pub fn with_nested_origin(mut self, nested_origin: NestedOrigin) -> Self {
        self.nested_origin = nested_origin;
        self
    }

    pub fn with_malformed_params(mut self, malformed_params: MalformedParams) -> Self {
        self.malformed_params = malformed_params;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }
}

impl fmt::Debug for ImporterOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImporterOptions")
            .field("resolvers", &self.resolvers.len())
            .field("nested_origin", &self.nested_origin)
            .field("malformed_params", &self.malformed_params)
            .field("cancel", &self.cancel.is_some())
            .finish()
    }
}
