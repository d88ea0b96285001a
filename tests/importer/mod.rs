//! Importer tests against checked-in fixtures
//!
//! - Inlining from the filesystem, directly and transitively
//! - Recovery from unresolvable and block-bearing directives
//! - Dependency messages for file watchers
//! - Stage inheritance for nested files

pub mod tests_dependencies;
pub mod tests_fixtures;
pub mod tests_stages;
