//! Host processing pipeline
//!
//! A [`Processor`] parses a stylesheet once and runs an ordered list of
//! [`Plugin`] stages over the tree. Every stage sees the same
//! [`PluginContext`]: the process options, the full stage list, its own
//! position in that list, and the shared [`Messages`] sink.
//!
//! ```text
//! css ──parse──→ Root ──stage 0──→ … ──stage n──→ Root ──stringify──→ css
//!                                │                    │
//!                                └──── Messages ──────┘
//! ```

mod messages;
mod options;
mod plugin;
mod processor;

pub use messages::{Dependency, Message, Messages, Warning};
pub use options::ProcessOptions;
pub use plugin::{BoxError, Plugin, PluginContext};
pub use processor::{ProcessError, ProcessOutput, Processor, StageError, run_stages};
