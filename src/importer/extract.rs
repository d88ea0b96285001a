//! Finding `@import` directives and turning them into requests

use std::path::Path;

use super::error::ImportError;
use super::options::MalformedParams;
use super::plugin::PLUGIN_NAME;
use crate::parser::{ParamsError, parse_import_params};
use crate::pipeline::{Messages, Warning};
use crate::resolvers::ImportRequest;
use crate::syntax::{AtRule, NodePath, NodeSource, Root};

pub const BLOCK_WARNING: &str = "Import rules cannot be followed by a block";
pub const MISSING_IDENTIFIER: &str = "Cannot parse @import without an identifier";
pub const INVALID_IDENTIFIER: &str = "Cannot parse @import rule with an invalid identifier. \
     Must be either `[string]` or a `url([string])`.";

/// One directive to resolve, addressed by its position in the tree it was
/// extracted from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDirective {
    pub path: NodePath,
    pub request: ImportRequest,
    pub source: Option<NodeSource>,
}

/// Every `@import` in `root`, in document order and at any depth, except
/// those followed by a block. Each of those gets a warning.
pub fn find_import_rules<'r>(root: &'r Root, messages: &Messages) -> Vec<(NodePath, &'r AtRule)> {
    root.walk_at_rules("import")
        .into_iter()
        .filter(|(_, rule)| {
            if rule.has_block() {
                messages.warn(
                    Warning::new(BLOCK_WARNING)
                        .with_plugin(PLUGIN_NAME)
                        .at(rule.source.as_ref()),
                );
                return false;
            }
            true
        })
        .collect()
}

/// Build the request for one directive. `from` is the file the directive
/// was found in.
pub fn extract_import_params(
    rule: &AtRule,
    from: Option<&Path>,
) -> Result<ImportRequest, ImportError> {
    let param = parse_import_params(&rule.params).map_err(|error| {
        let message = match error {
            ParamsError::Empty => MISSING_IDENTIFIER,
            ParamsError::InvalidIdentifier => INVALID_IDENTIFIER,
        };
        ImportError::malformed(message, rule.source.as_ref())
    })?;
    Ok(ImportRequest::new(
        param.location(),
        from.map(Path::to_path_buf),
    ))
}

/// Extract every resolvable directive from `root`.
///
/// Requests are attributed to the file `root` was parsed from, so imports
/// inside imported files resolve relative to their immediate parent.
pub fn extract(
    root: &Root,
    messages: &Messages,
    malformed: MalformedParams,
) -> Result<Vec<ImportDirective>, ImportError> {
    let from = root.source_file();
    let mut directives = Vec::new();

    for (path, rule) in find_import_rules(root, messages) {
        match extract_import_params(rule, from) {
            Ok(request) => directives.push(ImportDirective {
                path,
                request,
                source: rule.source.clone(),
            }),
            Err(ImportError::MalformedImport { message, .. })
                if malformed == MalformedParams::Warn =>
            {
                messages.warn(
                    Warning::new(message)
                        .with_plugin(PLUGIN_NAME)
                        .at(rule.source.as_ref()),
                );
            }
            Err(error) => return Err(error),
        }
    }
    Ok(directives)
}
