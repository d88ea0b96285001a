use std::path::PathBuf;

/// What to resolve, and relative to which file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImportRequest {
    /// The identifier or URL inside the directive
    pub location: String,
    /// Absolute path of the file containing the directive
    pub from: Option<PathBuf>,
}

impl ImportRequest {
    pub fn new(location: impl Into<String>, from: Option<PathBuf>) -> Self {
        Self {
            location: location.into(),
            from,
        }
    }
}

/// Stylesheet text produced by a resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedContent {
    pub content: String,
    /// Absolute path of the file the content was read from. Present only
    /// when the content corresponds to a real on-disk dependency.
    pub file: Option<PathBuf>,
}

impl ResolvedContent {
    /// Content with no backing file
    pub fn synthetic(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            file: None,
        }
    }

    pub fn from_file(content: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            content: content.into(),
            file: Some(file.into()),
        }
    }
}
