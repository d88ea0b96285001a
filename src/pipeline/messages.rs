//! Side-channel messages: warnings and dependency records

use std::fmt;
use std::path::PathBuf;

use parking_lot::Mutex;
use serde::Serialize;

use crate::syntax::NodeSource;

/// One record attached to a processing run, independent of the output tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Message {
    Warning(Warning),
    Dependency(Dependency),
}

/// A recoverable problem, optionally pinned to a source position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// 1-based
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// 1-based
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
}

/// A file the output depends on, for file watchers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dependency {
    pub plugin: String,
    pub file: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<PathBuf>,
}

impl Warning {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            plugin: None,
            file: None,
            line: None,
            column: None,
        }
    }

    pub fn with_plugin(mut self, plugin: impl Into<String>) -> Self {
        self.plugin = Some(plugin.into());
        self
    }

    /// Pin the warning to the start of a node.
    pub fn at(mut self, source: Option<&NodeSource>) -> Self {
        if let Some(source) = source {
            let (line, column) = source.start().one_based();
            self.file = source.file().map(|p| p.to_path_buf());
            self.line = Some(line);
            self.column = Some(column);
        }
        self
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.file, self.line, self.column) {
            (Some(file), Some(line), Some(column)) => {
                write!(f, "{}:{line}:{column}: ", file.display())?
            }
            (None, Some(line), Some(column)) => write!(f, "<input css>:{line}:{column}: ")?,
            _ => {}
        }
        f.write_str(&self.text)?;
        if let Some(plugin) = &self.plugin {
            write!(f, " [{plugin}]")?;
        }
        Ok(())
    }
}

/// Append-only message sink shared by every stage and recursion depth.
///
/// Appends may come from concurrently settling tasks; relative order across
/// tasks is not meaningful.
#[derive(Debug, Default)]
pub struct Messages {
    inner: Mutex<Vec<Message>>,
}

impl Messages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, message: Message) {
        self.inner.lock().push(message);
    }

    pub fn warn(&self, warning: Warning) {
        tracing::debug!("{warning}");
        self.push(Message::Warning(warning));
    }

    pub fn dependency(&self, dependency: Dependency) {
        self.push(Message::Dependency(dependency));
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Copy of everything recorded so far
    pub fn snapshot(&self) -> Vec<Message> {
        self.inner.lock().clone()
    }

    pub fn into_vec(self) -> Vec<Message> {
        self.inner.into_inner()
    }
}
