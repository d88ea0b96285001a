//! `package.json` handling for stylesheet packages

use std::path::Path;

use serde::Deserialize;

use super::ResolveError;

pub const MANIFEST_FILE: &str = "package.json";
pub const INDEX_FILE: &str = "index.css";

/// The fields of a package manifest that matter for stylesheets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PackageManifest {
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub main: Option<String>,
}

impl PackageManifest {
    pub fn parse(text: &str, path: &Path) -> Result<Self, ResolveError> {
        serde_json::from_str(text).map_err(|source| ResolveError::Manifest {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read `dir/package.json`, if there is one.
    pub fn read(dir: &Path) -> Result<Option<Self>, ResolveError> {
        let path = dir.join(MANIFEST_FILE);
        if !path.is_file() {
            return Ok(None);
        }
        let text = std::fs::read_to_string(&path).map_err(|e| ResolveError::io(&path, e))?;
        Self::parse(&text, &path).map(Some)
    }

    /// The package's stylesheet entry point relative to its root: `style`,
    /// else a `.css` `main`, else `index.css`.
    pub fn entry(&self) -> &str {
        if let Some(style) = self.style.as_deref().filter(|s| !s.is_empty()) {
            return style;
        }
        match self.main.as_deref() {
            Some(main) if main.ends_with(".css") => main,
            _ => INDEX_FILE,
        }
    }
}
