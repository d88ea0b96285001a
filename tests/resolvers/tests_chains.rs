//! Custom resolvers, alone and chained with the filesystem resolver.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use css_importer::{
    ImportRequest, Importer, ImporterOptions, NodeResolver, NodeResolverOptions, Plugin,
    ResolveError, ResolvedContent, Resolver, resolver_fn,
};

use crate::helpers::fixtures::layout;
use crate::helpers::pipeline::process_file;

/// Serves `virtual:<name>` locations from memory.
struct Virtual {
    calls: AtomicUsize,
}

#[async_trait]
impl Resolver for Virtual {
    fn will_resolve(&self, request: &ImportRequest) -> Option<bool> {
        Some(request.location.starts_with("virtual:"))
    }

    async fn resolve(&self, request: &ImportRequest) -> Result<ResolvedContent, ResolveError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let name = request
            .location
            .strip_prefix("virtual:")
            .ok_or_else(|| ResolveError::UnsupportedLocation(request.location.clone()))?;
        Ok(ResolvedContent::synthetic(format!(".{name} {{}}")))
    }
}

fn importer(resolvers: Vec<Arc<dyn Resolver>>) -> Arc<dyn Plugin> {
    Arc::new(Importer::new(ImporterOptions::default().with_resolvers(resolvers)))
}

#[test]
fn test_function_resolver_replaces_default() {
    let dir = layout(&[("main.css", "@import 'anything';\n.a {}")]);
    let resolver = resolver_fn(|request: ImportRequest| async move {
        Ok(ResolvedContent::synthetic(format!("/* {} */", request.location)))
    });
    let output = process_file(vec![importer(vec![resolver])], &dir.path().join("main.css")).unwrap();

    assert_eq!(output.css, "/* anything */\n.a {}");
    assert!(output.dependencies().is_empty());
}

#[test]
fn test_chain_falls_through_to_filesystem() {
    let dir = layout(&[
        ("main.css", "@import 'virtual:icons';\n@import './local.css';"),
        ("local.css", ".local {}"),
    ]);
    let virtual_resolver = Arc::new(Virtual {
        calls: AtomicUsize::new(0),
    });
    let filesystem = Arc::new(NodeResolver::new(NodeResolverOptions {
        root: Some(dir.path().to_path_buf()),
    }));
    let resolvers: Vec<Arc<dyn Resolver>> = vec![virtual_resolver.clone(), filesystem];
    let output = process_file(vec![importer(resolvers)], &dir.path().join("main.css")).unwrap();

    assert_eq!(output.css, ".icons {}\n.local {}");
    assert!(output.warnings().is_empty());
    assert_eq!(output.dependencies().len(), 1);
    assert_eq!(virtual_resolver.calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_exhausted_chain_warns_once() {
    let dir = layout(&[("main.css", "@import './nowhere.css';\n.a {}")]);
    let failing = resolver_fn(|_request: ImportRequest| async {
        Err(ResolveError::other("offline"))
    });
    let filesystem = Arc::new(NodeResolver::new(NodeResolverOptions {
        root: Some(dir.path().to_path_buf()),
    }));
    let resolvers: Vec<Arc<dyn Resolver>> = vec![failing, filesystem];
    let output = process_file(vec![importer(resolvers)], &dir.path().join("main.css")).unwrap();

    assert_eq!(output.css, "@import './nowhere.css';\n.a {}");
    let warnings = output.warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].text.starts_with("Failed to resolve import of `./nowhere.css`"));
}
