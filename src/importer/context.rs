//! The recursive processor

use std::path::Path;
use std::sync::Arc;

use futures::future::{BoxFuture, Either, FutureExt, join_all, select};
use tokio_util::sync::CancellationToken;

use super::error::ImportError;
use super::extract::{ImportDirective, extract};
use super::options::{MalformedParams, NestedOrigin};
use super::plugin::PLUGIN_NAME;
use crate::pipeline::{Dependency, Messages, Plugin, ProcessOptions, Warning, run_stages};
use crate::resolvers::{ImportRequest, ResolveError, ResolvedContent, Resolver};
use crate::syntax::Root;

/// Everything one top-level import run shares across every recursion depth.
#[derive(Clone, Copy)]
pub struct ImportContext<'a> {
    pub resolver: &'a dyn Resolver,
    pub messages: &'a Messages,
    pub options: &'a ProcessOptions,
    /// Stages that ran before the importer, re-run on every imported tree
    pub stages: &'a [Arc<dyn Plugin>],
    pub nested_origin: NestedOrigin,
    pub malformed: MalformedParams,
    pub cancel: Option<&'a CancellationToken>,
}

impl<'a> ImportContext<'a> {
    pub fn new(
        resolver: &'a dyn Resolver,
        messages: &'a Messages,
        options: &'a ProcessOptions,
    ) -> Self {
        Self {
            resolver,
            messages,
            options,
            stages: &[],
            nested_origin: NestedOrigin::default(),
            malformed: MalformedParams::default(),
            cancel: None,
        }
    }

    /// Resolve every directive in `root` and splice the results in place.
    ///
    /// All directives are resolved concurrently; the tree is only touched
    /// once every one of them has settled.
    pub fn resolve_imports<'s>(&'s self, root: &'s mut Root) -> BoxFuture<'s, Result<(), ImportError>> {
        async move {
            let directives = extract(root, self.messages, self.malformed)?;
            if directives.is_empty() {
                return Ok(());
            }
            tracing::trace!(
                from = ?root.source_file(),
                count = directives.len(),
                "resolving imports"
            );

            let results = join_all(directives.iter().map(|d| self.process(d))).await;
            let subtrees = results.into_iter().collect::<Result<Vec<_>, _>>()?;

            // Back to front, so paths of earlier directives stay valid.
            for (directive, subtree) in directives.iter().zip(subtrees).rev() {
                if let Some(subtree) = subtree {
                    root.replace_with(&directive.path, subtree.nodes);
                }
            }
            Ok(())
        }
        .boxed()
    }

    /// Resolve one directive into a fully expanded tree.
    ///
    /// `Ok(None)` means the directive stays where it is; a warning has been
    /// recorded.
    pub async fn process(&self, directive: &ImportDirective) -> Result<Option<Root>, ImportError> {
        let request = &directive.request;
        let resolved = match self.resolve(request).await {
            Ok(resolved) => resolved,
            Err(error) => {
                tracing::debug!(location = %request.location, %error, "import not resolved");
                self.warn(
                    directive,
                    format!(
                        "Failed to resolve import of `{}` from `{}`",
                        request.location,
                        display_from(request.from.as_deref())
                    ),
                );
                return Ok(None);
            }
        };

        if let Some(file) = &resolved.file {
            self.messages.dependency(Dependency {
                plugin: PLUGIN_NAME.to_string(),
                file: file.clone(),
                parent: request.from.clone(),
            });
        }

        let origin = match self.nested_origin {
            NestedOrigin::Resolved => resolved.file.clone().or_else(|| request.from.clone()),
            NestedOrigin::Importer => request.from.clone(),
        };
        let mut subtree = match self.options.syntax().parse(&resolved.content, origin) {
            Ok(subtree) => subtree,
            Err(error) => {
                self.warn(
                    directive,
                    format!("Failed to parse import of `{}`: {error}", request.location),
                );
                return Ok(None);
            }
        };

        run_stages(self.stages, &mut subtree, self.messages, self.options).await?;
        self.resolve_imports(&mut subtree).await?;
        Ok(Some(subtree))
    }

    async fn resolve(&self, request: &ImportRequest) -> Result<ResolvedContent, ResolveError> {
        if self.resolver.will_resolve(request) == Some(false) {
            return Err(ResolveError::UnsupportedLocation(request.location.clone()));
        }
        let Some(token) = self.cancel else {
            return self.resolver.resolve(request).await;
        };
        if token.is_cancelled() {
            return Err(ResolveError::Cancelled);
        }

        let resolution = std::pin::pin!(self.resolver.resolve(request));
        let cancelled = std::pin::pin!(token.cancelled());
        match select(resolution, cancelled).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(ResolveError::Cancelled),
        }
    }

    fn warn(&self, directive: &ImportDirective, text: String) {
        self.messages.warn(
            Warning::new(text)
                .with_plugin(PLUGIN_NAME)
                .at(directive.source.as_ref()),
        );
    }
}

fn display_from(from: Option<&Path>) -> String {
    match from {
        Some(path) => path.display().to_string(),
        None => "<input css>".to_string(),
    }
}
