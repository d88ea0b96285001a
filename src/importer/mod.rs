//! Recursive `@import` inlining
//!
//! [`Importer`] is the pipeline stage. For every tree it is given it:
//!
//! 1. extracts the `@import` directives ([`extract`])
//! 2. resolves all of them concurrently ([`ImportContext::process`])
//! 3. re-parses each result, runs the stages that came before it, and
//!    recurses into the new subtree
//! 4. splices every subtree in place of its directive
//!
//! Failures local to one directive (unresolvable location, block-bearing
//! rule) become warnings and leave the rest of the document intact.

mod context;
mod error;
mod extract;
mod options;
mod plugin;

pub use context::ImportContext;
pub use error::ImportError;
pub use extract::{
    BLOCK_WARNING, INVALID_IDENTIFIER, ImportDirective, MISSING_IDENTIFIER, extract,
    extract_import_params, find_import_rules,
};
pub use options::{ImporterOptions, MalformedParams, NestedOrigin};
pub use plugin::{Importer, PLUGIN_NAME};
