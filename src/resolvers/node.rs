//! Filesystem resolver with `node_modules` lookup
//!
//! Resolution order for a location, relative to the base directory:
//!
//! 1. the exact file
//! 2. the file with `.css` appended
//! 3. a directory: its manifest entry (see [`PackageManifest::entry`])
//!
//! Bare locations (`foo`, `pkg/theme.css`) are first tried as local files
//! and then in every `node_modules` directory from the base directory up to
//! the filesystem root.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;

use super::offload::offload;
use super::package::PackageManifest;
use super::{ImportRequest, ResolveError, ResolvedContent, Resolver};

const STYLE_EXTENSION: &str = "css";
const MODULES_DIR: &str = "node_modules";

/// Configuration for [`NodeResolver`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NodeResolverOptions {
    /// Base directory for requests without a `from` file. Defaults to the
    /// current working directory.
    pub root: Option<PathBuf>,
}

/// The default resolver: local stylesheets and stylesheet packages.
#[derive(Debug, Clone)]
pub struct NodeResolver {
    root: PathBuf,
}

impl Default for NodeResolver {
    fn default() -> Self {
        Self::new(NodeResolverOptions::default())
    }
}

impl NodeResolver {
    pub fn new(options: NodeResolverOptions) -> Self {
        let root = options
            .root
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory of the importing file, or the configured root.
    pub fn basedir(&self, request: &ImportRequest) -> PathBuf {
        request
            .from
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.root.clone())
    }

    /// Find the file a request refers to, with symlinks resolved.
    pub fn locate(&self, request: &ImportRequest) -> Result<PathBuf, ResolveError> {
        let location = request.location.as_str();
        if looks_like_url(location) {
            return Err(ResolveError::UnsupportedLocation(location.to_string()));
        }

        let basedir = self.basedir(request);
        let found = if is_path_like(location) {
            resolve_path(&basedir.join(location))?
        } else {
            match resolve_path(&basedir.join(location))? {
                Some(path) => Some(path),
                None => resolve_package(&basedir, location)?,
            }
        };

        let path = found.ok_or_else(|| ResolveError::NotFound {
            location: location.to_string(),
            basedir,
        })?;
        std::fs::canonicalize(&path).map_err(|e| ResolveError::io(&path, e))
    }

    /// [`locate`](Self::locate) and read the file, blocking the caller.
    pub fn read(&self, request: &ImportRequest) -> Result<ResolvedContent, ResolveError> {
        let file = self.locate(request)?;
        tracing::trace!(location = %request.location, file = %file.display(), "located import");
        let content = std::fs::read_to_string(&file).map_err(|e| ResolveError::io(&file, e))?;
        Ok(ResolvedContent::from_file(content, file))
    }
}

#[async_trait]
impl Resolver for NodeResolver {
    fn will_resolve(&self, request: &ImportRequest) -> Option<bool> {
        Some(!looks_like_url(&request.location))
    }

    /// Lookup and read happen on a worker thread; the returned future
    /// yields until they finish.
    async fn resolve(&self, request: &ImportRequest) -> Result<ResolvedContent, ResolveError> {
        if looks_like_url(&request.location) {
            return Err(ResolveError::UnsupportedLocation(request.location.clone()));
        }
        let resolver = self.clone();
        let request = request.clone();
        offload(move || resolver.read(&request)).await
    }
}

/// `//host/...` or `scheme://...`, scheme letters matched case-insensitively.
pub fn looks_like_url(location: &str) -> bool {
    if location.starts_with("//") {
        return true;
    }
    match location.split_once(':') {
        Some((scheme, rest)) => {
            !scheme.is_empty()
                && scheme.bytes().all(|b| b.is_ascii_alphabetic())
                && rest.starts_with("//")
        }
        None => false,
    }
}

fn is_path_like(location: &str) -> bool {
    location == "."
        || location == ".."
        || location.starts_with("./")
        || location.starts_with("../")
        || Path::new(location).is_absolute()
}

fn resolve_path(base: &Path) -> Result<Option<PathBuf>, ResolveError> {
    if base.is_file() {
        return Ok(Some(base.to_path_buf()));
    }

    if base.extension().is_none_or(|ext| ext != STYLE_EXTENSION) {
        let with_ext = with_style_extension(base);
        if with_ext.is_file() {
            return Ok(Some(with_ext));
        }
    }

    if base.is_dir() {
        return resolve_directory(base);
    }
    Ok(None)
}

fn resolve_directory(dir: &Path) -> Result<Option<PathBuf>, ResolveError> {
    let manifest = PackageManifest::read(dir)?.unwrap_or_default();
    let entry = dir.join(manifest.entry());
    if entry.is_file() {
        return Ok(Some(entry));
    }
    let with_ext = with_style_extension(&entry);
    Ok(with_ext.is_file().then_some(with_ext))
}

fn resolve_package(basedir: &Path, location: &str) -> Result<Option<PathBuf>, ResolveError> {
    for dir in basedir.ancestors() {
        let modules = dir.join(MODULES_DIR);
        if !modules.is_dir() {
            continue;
        }
        if let Some(found) = resolve_path(&modules.join(location))? {
            return Ok(Some(found));
        }
    }
    Ok(None)
}

fn with_style_extension(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(STYLE_EXTENSION);
    PathBuf::from(name)
}
