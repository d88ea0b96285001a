//! # css-importer
//!
//! Recursive `@import` resolution and inlining for stylesheet syntax trees.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! importer  → Importer stage, recursive processor, directive extraction
//!   ↓
//! resolvers → Resolver trait, filesystem resolver, resolver chains
//!   ↓
//! pipeline  → Plugin trait, Processor, messages (warnings, dependencies)
//!   ↓
//! parser    → Logos lexer, recursive-descent parser, @import params
//!   ↓
//! syntax    → Tree types (Root, AtRule, ...), Input, stringifier
//!   ↓
//! base      → Primitives (TextRange, LineIndex, Position)
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use css_importer::{Importer, ImporterOptions, ProcessOptions, Processor};
//!
//! # futures::executor::block_on(async {
//! let processor = Processor::default().with(Importer::new(ImporterOptions::default()));
//! let output = processor
//!     .process("@import './theme.css';", ProcessOptions::for_file("/srv/app/main.css"))
//!     .await?;
//! println!("{}", output.css);
//! # Ok::<_, css_importer::ProcessError>(())
//! # }).unwrap();
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → parser → pipeline → resolvers → importer)
// ============================================================================

/// Foundation types: TextRange, LineIndex, Position
pub mod base;

/// Syntax: tree types, Input, stringification
pub mod syntax;

/// Parser: Logos lexer, recursive-descent parser, @import params
pub mod parser;

/// Host pipeline: stages, processor, side-channel messages
pub mod pipeline;

/// Import resolvers: filesystem, function adaptors, chains
pub mod resolvers;

/// The recursive @import stage
pub mod importer;

// Re-export foundation types
pub use base::{LineCol, LineIndex, Position, Span, TextRange, TextSize};

// Re-export the public surface
pub use importer::{ImportError, Importer, ImporterOptions, MalformedParams, NestedOrigin};
pub use pipeline::{Message, Plugin, PluginContext, ProcessError, ProcessOptions, Processor};
pub use resolvers::{
    ImportRequest, NodeResolver, NodeResolverOptions, ResolveError, ResolvedContent, Resolver,
    ResolverChain, resolver_fn,
};
pub use syntax::{CssSyntaxError, Root, Syntax};
