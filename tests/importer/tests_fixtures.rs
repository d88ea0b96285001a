//! End-to-end runs over `tests/fixtures`.

use css_importer::importer::{BLOCK_WARNING, INVALID_IDENTIFIER, PLUGIN_NAME};
use css_importer::{ImportError, ProcessError};

use crate::helpers::fixtures::{fixture, read_fixture};
use crate::helpers::pipeline::{fs_importer, import_file, process_file};

#[test]
fn test_imports_bare_local_file() {
    let output = import_file(&fixture("imports_foo.css"));

    assert_eq!(output.css, ".foo { color: red; }\n.bar { color: blue; }");
    assert!(output.warnings().is_empty());
}

#[test]
fn test_imports_transitively() {
    let output = import_file(&fixture("imports_foo_transitively.css"));

    assert_eq!(
        output.css,
        ".foo { color: red; }\n.bar { color: blue; }\n.baz { color: green; }"
    );
    assert_eq!(output.dependencies().len(), 2);
}

#[test]
fn test_import_inside_media_block() {
    let output = import_file(&fixture("imports_in_media.css"));

    assert_eq!(
        output.css,
        "@media print { .foo { color: red; } .print { display: none; } }"
    );
}

#[test]
fn test_unresolvable_import_is_kept() {
    let output = import_file(&fixture("fail_to_resolve.css"));

    assert!(output.css.contains("@import './missing.css';"));
    assert!(output.css.contains(".a { color: red; }"));

    let warnings = output.warnings();
    assert_eq!(warnings.len(), 1);
    assert!(
        warnings[0]
            .text
            .starts_with("Failed to resolve import of `./missing.css` from `")
    );
    assert_eq!(warnings[0].plugin.as_deref(), Some(PLUGIN_NAME));
    assert_eq!(warnings[0].file.as_deref(), Some(fixture("fail_to_resolve.css").as_path()));
    assert_eq!((warnings[0].line, warnings[0].column), (Some(1), Some(1)));
}

#[test]
fn test_block_import_is_warned_and_kept() {
    let output = import_file(&fixture("bad_import_with_block.css"));

    assert_eq!(
        output.css,
        "@import './foo.css' { color: red; }\n.after { color: black; }"
    );
    let warnings = output.warnings();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].text, BLOCK_WARNING);
    assert!(output.dependencies().is_empty());
}

#[test]
fn test_block_import_in_imported_file() {
    let output = import_file(&fixture("imports_bad_import.css"));

    assert_eq!(
        output.css,
        "@import './foo.css' { color: red; }\n.after { color: black; }"
    );
    let warnings = output.warnings();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].text, BLOCK_WARNING);
    assert_eq!(
        warnings[0].file.as_deref(),
        Some(crate::helpers::fixtures::canonical(fixture("bad_import_with_block.css")).as_path())
    );
    assert_eq!(output.dependencies().len(), 1);
}

#[test]
fn test_malformed_import_fails_the_run() {
    let file = fixture("malformed_import.css");
    let err = process_file(vec![fs_importer(&fixture(""))], &file).unwrap_err();

    let ProcessError::Stage(stage) = err else {
        panic!("expected a stage error, got {err:?}");
    };
    assert_eq!(stage.plugin, PLUGIN_NAME);
    match stage.source.downcast_ref::<ImportError>() {
        Some(ImportError::MalformedImport { message, line, .. }) => {
            assert_eq!(message, INVALID_IDENTIFIER);
            assert_eq!(*line, 1);
        }
        other => panic!("expected MalformedImport, got {other:?}"),
    }
}

#[test]
fn test_output_reparses_to_same_tree() {
    let output = import_file(&fixture("imports_foo_transitively.css"));
    let reparsed = css_importer::parser::parse_css(&output.css, None).unwrap();
    assert_eq!(reparsed.to_string(), output.css);
    assert!(!read_fixture("imports_foo_transitively.css").contains(".foo"));
}
