//! Running stages over a stylesheet

use std::sync::Arc;

use thiserror::Error;

use super::messages::{Dependency, Message, Messages, Warning};
use super::options::ProcessOptions;
use super::plugin::{BoxError, Plugin, PluginContext};
use crate::syntax::{CssSyntaxError, Root};

/// A stage returned an error.
#[derive(Debug, Error)]
#[error("{plugin}: {source}")]
pub struct StageError {
    pub plugin: String,
    #[source]
    pub source: BoxError,
}

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error(transparent)]
    Syntax(#[from] CssSyntaxError),

    #[error(transparent)]
    Stage(#[from] StageError),
}

/// Result of a successful run
#[derive(Debug)]
pub struct ProcessOutput {
    pub root: Root,
    pub css: String,
    pub messages: Vec<Message>,
}

impl ProcessOutput {
    pub fn warnings(&self) -> Vec<&Warning> {
        self.messages
            .iter()
            .filter_map(|m| match m {
                Message::Warning(w) => Some(w),
                Message::Dependency(_) => None,
            })
            .collect()
    }

    pub fn dependencies(&self) -> Vec<&Dependency> {
        self.messages
            .iter()
            .filter_map(|m| match m {
                Message::Dependency(d) => Some(d),
                Message::Warning(_) => None,
            })
            .collect()
    }
}

/// An ordered list of stages.
#[derive(Clone, Default)]
pub struct Processor {
    stages: Vec<Arc<dyn Plugin>>,
}

impl Processor {
    pub fn new(stages: Vec<Arc<dyn Plugin>>) -> Self {
        Self { stages }
    }

    /// Append a stage.
    pub fn with(mut self, stage: impl Plugin + 'static) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    pub fn stages(&self) -> &[Arc<dyn Plugin>] {
        &self.stages
    }

    /// Parse `css`, run every stage in order, and serialize the result.
    pub async fn process(
        &self,
        css: &str,
        options: ProcessOptions,
    ) -> Result<ProcessOutput, ProcessError> {
        let mut root = options.syntax().parse(css, options.from.clone())?;
        let messages = Messages::new();

        run_stages(&self.stages, &mut root, &messages, &options).await?;

        let css = options.syntax().stringify(&root);
        Ok(ProcessOutput {
            root,
            css,
            messages: messages.into_vec(),
        })
    }
}

/// Run `stages` over `root` in order, each with its own position.
pub async fn run_stages(
    stages: &[Arc<dyn Plugin>],
    root: &mut Root,
    messages: &Messages,
    options: &ProcessOptions,
) -> Result<(), StageError> {
    for (position, stage) in stages.iter().enumerate() {
        tracing::trace!(stage = stage.name(), position, "running stage");
        let cx = PluginContext::new(messages, options, stages, position);
        stage
            .transform(root, &cx)
            .await
            .map_err(|source| StageError {
                plugin: stage.name().to_string(),
                source,
            })?;
    }
    Ok(())
}
