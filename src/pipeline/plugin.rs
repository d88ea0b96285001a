//! The stage seam

use std::sync::Arc;

use async_trait::async_trait;

use super::messages::{Messages, Warning};
use super::options::ProcessOptions;
use crate::syntax::{NodeSource, Root};

/// Error type stages may fail with
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// One transform stage of a [`Processor`](super::Processor).
#[async_trait]
pub trait Plugin: Send + Sync {
    /// Identifier used in messages
    fn name(&self) -> &str;

    /// Transform `root` in place.
    async fn transform(&self, root: &mut Root, cx: &PluginContext<'_>) -> Result<(), BoxError>;
}

/// What a stage knows about the run it is part of.
#[derive(Clone, Copy)]
pub struct PluginContext<'a> {
    messages: &'a Messages,
    options: &'a ProcessOptions,
    stages: &'a [Arc<dyn Plugin>],
    position: Option<usize>,
}

impl<'a> PluginContext<'a> {
    /// Context for the stage at `position` in `stages`.
    pub fn new(
        messages: &'a Messages,
        options: &'a ProcessOptions,
        stages: &'a [Arc<dyn Plugin>],
        position: usize,
    ) -> Self {
        Self {
            messages,
            options,
            stages,
            position: Some(position),
        }
    }

    /// Context for a stage invoked outside any pipeline.
    pub fn detached(messages: &'a Messages, options: &'a ProcessOptions) -> Self {
        Self {
            messages,
            options,
            stages: &[],
            position: None,
        }
    }

    pub fn messages(&self) -> &'a Messages {
        self.messages
    }

    pub fn options(&self) -> &'a ProcessOptions {
        self.options
    }

    pub fn stages(&self) -> &'a [Arc<dyn Plugin>] {
        self.stages
    }

    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Stages that ran before this one, in order. `None` when detached.
    pub fn prior_stages(&self) -> Option<&'a [Arc<dyn Plugin>]> {
        self.position.map(|position| &self.stages[..position])
    }

    pub fn warn(&self, plugin: &str, text: impl Into<String>, node: Option<&NodeSource>) {
        self.messages
            .warn(Warning::new(text).with_plugin(plugin).at(node));
    }
}
